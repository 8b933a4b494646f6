use crate::engine_builder::EngineAttributes;
use crate::error::{Result, TypeballError};
use crate::font::registry::{FontDefinition, FontDescription, FontRegistry, FontSettings};
use crate::glm;
use crate::rendering::batch_cache::{BatchCache, BatchSnapshot};
use crate::rendering::data::load_image;
use crate::rendering::edit;
use crate::rendering::layout::{measure_text, type_text, TextRun, TextSize};
use crate::rendering::sink::{RenderSink, TextureSink};
use crate::utils::file::{get_description_path, get_image_path, require_file};
use std::path::Path;
use std::rc::Rc;

/// drop shadow settings consumed by the next layout call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowState {
    pub enabled: bool,
    /// offset relative to the font size
    pub offset: glm::Vec2,
    /// float rgba of the shadow
    pub color: glm::Vec4,
    /// paint the shadow with ``color``
    pub coloring: bool,
}

/// the font that is currently typing and whether it may be swapped
#[derive(Debug, Default)]
struct FontSelection {
    font: Option<Rc<FontDefinition>>,
    locked: bool,
}

/// owns fonts, the text batch and all layout state
pub struct Engine {
    registry: FontRegistry,
    selection: FontSelection,
    cache: BatchCache,
    shadow: ShadowState,
    shadow_defaults: ShadowState,
    pen_color: glm::Vec4,
    canvas_size: Option<glm::Vec2>,
    texture_sink: TextureSink,
    render_sink: Option<RenderSink>,
}

impl Engine {
    /// engine setup with default attributes (no canvas size)
    pub fn new() -> Self {
        Self::with_attributes(EngineAttributes::default())
    }

    pub(crate) fn with_attributes(config: EngineAttributes) -> Self {
        let shadow_defaults = ShadowState {
            enabled: false,
            offset: config.shadow_offset,
            color: config.shadow_color,
            coloring: config.shadow_coloring,
        };
        Self {
            registry: FontRegistry::new(),
            selection: FontSelection::default(),
            cache: BatchCache::new(config.pen_color),
            shadow: shadow_defaults,
            shadow_defaults,
            pen_color: config.pen_color,
            canvas_size: config.canvas_size.map(|(w, h)| glm::vec2(w, h)),
            texture_sink: TextureSink::None,
            render_sink: None,
        }
    }

    /// sets the size of the canvas text is laid out on
    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.canvas_size = Some(glm::vec2(width, height));
        log::trace!("set canvas size: {width}x{height}");
    }

    pub fn canvas_size(&self) -> Option<glm::Vec2> {
        self.canvas_size
    }

    /// registers a sink that receives the atlas image path of every font created afterwards
    pub fn set_texture_path_sink(&mut self, sink: impl FnMut(&Path) + 'static) -> Result<()> {
        self.texture_sink.register(TextureSink::Path(Box::new(sink)))
    }

    /// registers a sink that receives the decoded atlas pixels of every font created afterwards
    pub fn set_texture_raw_sink(
        &mut self,
        sink: impl FnMut(&[u8], usize, usize) + 'static,
    ) -> Result<()> {
        self.texture_sink.register(TextureSink::Raw(Box::new(sink)))
    }

    /// registers the sink that receives batches from ``render``
    pub fn set_render_sink(&mut self, sink: impl FnMut(BatchSnapshot) + 'static) -> Result<()> {
        if self.render_sink.is_some() {
            return Err(TypeballError::DuplicateSinkRegistration);
        }
        self.render_sink = Some(Box::new(sink));
        Ok(())
    }

    /// creates a font from ``<path_stem>.png`` and ``<path_stem>.json`` and stores it
    /// under ``name`` (or the path stem)
    pub fn create_font(
        &mut self,
        path_stem: &str,
        name: Option<&str>,
        trimming: bool,
        spacing: f32,
        space_width: f32,
    ) -> Result<()> {
        let settings = FontSettings {
            trimming,
            spacing,
            space_width,
        };
        self.create_font_with(path_stem, name, settings)
    }

    /// creates a font with the default settings
    pub fn create_font_default(&mut self, path_stem: &str) -> Result<()> {
        self.create_font_with(path_stem, None, FontSettings::default())
    }

    /// creates a font with explicit settings
    pub fn create_font_with(
        &mut self,
        path_stem: &str,
        name: Option<&str>,
        settings: FontSettings,
    ) -> Result<()> {
        let key = name.unwrap_or(path_stem);
        let image_path = get_image_path(path_stem);
        let description_path = get_description_path(path_stem);
        require_file(&image_path)?;
        require_file(&description_path)?;

        let description = FontDescription::from_path(&description_path)?;
        let image = if settings.trimming || self.texture_sink.wants_pixels() {
            Some(load_image(&image_path)?)
        } else {
            None
        };

        self.registry.register(
            key,
            &description,
            settings,
            image_path.clone(),
            image.as_ref(),
        )?;
        self.texture_sink.notify(&image_path, image.as_ref());
        Ok(())
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.registry
    }

    pub fn fonts_mut(&mut self) -> &mut FontRegistry {
        &mut self.registry
    }

    /// makes the font active and locks the selection until the next flush
    pub fn select_font(&mut self, name: &str) -> Result<()> {
        if self.selection.locked {
            return Err(TypeballError::FontLocked);
        }
        let font = self
            .registry
            .get(name)
            .ok_or_else(|| TypeballError::UnknownFont(name.to_string()))?;
        self.selection.font = Some(font.clone());
        self.selection.locked = true;
        log::trace!("selected font {name:?}");
        Ok(())
    }

    /// the active font (kept after a flush for measuring)
    pub fn selected_font(&self) -> Option<&Rc<FontDefinition>> {
        self.selection.font.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.selection.locked
    }

    /// hands out the batch geometry, resets the cache and unlocks the font selection
    pub fn flush(&mut self) -> BatchSnapshot {
        self.selection.locked = false;
        self.cache.flush(self.pen_color)
    }

    /// flushes the batch into the render sink
    pub fn render(&mut self) -> Result<()> {
        if self.render_sink.is_none() {
            return Err(TypeballError::MissingRenderSink);
        }
        let snapshot = self.flush();
        if let Some(sink) = self.render_sink.as_mut() {
            sink(snapshot);
        }
        Ok(())
    }

    /// read access to the unflushed batch
    pub fn batch(&self) -> &BatchCache {
        &self.cache
    }

    /// lays out the text with the anchor snapped to whole pixels
    pub fn render_text(&mut self, x: f32, y: f32, font_size: f32, text: &str) -> Result<()> {
        self.render_to_canvas(x, y, font_size, text, true)
    }

    /// lays out the text into the batch (with a shadow copy if shadows are enabled)
    pub fn render_to_canvas(
        &mut self,
        x: f32,
        y: f32,
        font_size: f32,
        text: &str,
        rounding: bool,
    ) -> Result<()> {
        let result = self.type_with_shadow(x, y, font_size, text, rounding);
        self.shadow = self.shadow_defaults;
        result
    }

    fn type_with_shadow(
        &mut self,
        x: f32,
        y: f32,
        font_size: f32,
        text: &str,
        rounding: bool,
    ) -> Result<()> {
        let font = self
            .selection
            .font
            .clone()
            .ok_or(TypeballError::NoFontSelected)?;
        let canvas_size = self.canvas_size.ok_or(TypeballError::NoCanvas)?;

        let start = self.cache.char_count();
        let run = TextRun {
            position: glm::vec2(x, y),
            font_size,
            text,
            rounding,
        };
        let count = type_text(&mut self.cache, &font, canvas_size, &run)?;

        if self.shadow.enabled {
            self.shadow.enabled = false;
            // the first pass is the shadow, the offset copy on top keeps the pen color
            if self.shadow.coloring {
                self.cache.fill_colors(start..start + count, self.shadow.color);
            }
            let offset = self.shadow.offset * font_size;
            self.type_with_shadow(x + offset.x, y + offset.y, font_size, text, false)?;
        }
        Ok(())
    }

    /// measures the text with the active font (including the shadow offset if shadows are enabled)
    pub fn get_text_size(&self, font_size: f32, text: &str) -> Result<TextSize> {
        let font = self
            .selection
            .font
            .as_ref()
            .ok_or(TypeballError::NoFontSelected)?;
        let mut size = measure_text(font, font_size, text);
        if self.shadow.enabled {
            size.width += self.shadow.offset.x * font_size;
            size.height += self.shadow.offset.y * font_size;
        }
        Ok(size)
    }

    /// adds a shadow copy to the next layout call
    pub fn enable_shadows(&mut self) {
        self.shadow.enabled = true;
    }

    pub fn shadows_enabled(&self) -> bool {
        self.shadow.enabled
    }

    pub fn shadow(&self) -> &ShadowState {
        &self.shadow
    }

    /// sets the shadow offset for the next layout call (relative to the font size)
    pub fn set_shadow_offset(&mut self, x: f32, y: f32) {
        self.shadow.offset = glm::vec2(x, y);
    }

    /// sets the shadow color for the next layout call
    pub fn set_shadow_color(&mut self, color: impl Into<glm::Vec4>) {
        self.shadow.color = color.into();
    }

    /// toggles painting of the shadow copy for the next layout call
    pub fn set_shadow_coloring(&mut self, coloring: bool) {
        self.shadow.coloring = coloring;
    }

    /// paints all characters that are not yet written, also after the next flush
    pub fn switch_colors(&mut self, color: impl Into<glm::Vec4>) {
        let color = color.into();
        self.pen_color = color;
        self.cache.fill_colors_forward(color);
        log::trace!("switched pen color to {color:?}");
    }

    /// paints the characters ``start..end``
    pub fn set_color_range(&mut self, start: usize, end: usize, color: impl Into<glm::Vec4>) {
        if end > self.cache.capacity() {
            log::warn!("color range {start}..{end} clamped to the batch capacity");
        }
        self.cache.fill_colors(start..end, color.into());
    }

    /// paints one character
    pub fn set_color_char(&mut self, index: usize, color: impl Into<glm::Vec4>) {
        let color: glm::Vec4 = color.into();
        self.set_color_points(index, [color; 4]);
    }

    /// paints the corners of one character: top-left, bottom-left, bottom-right, top-right
    pub fn set_color_points<C: Into<glm::Vec4>>(&mut self, index: usize, colors: [C; 4]) {
        if !self.cache.paint_corners(index, &colors.map(Into::into)) {
            log::warn!("cannot paint character {index}: outside of the batch capacity");
        }
    }

    /// color of characters that are not painted explicitly
    pub fn pen_color(&self) -> glm::Vec4 {
        self.pen_color
    }

    /// moves a written character by ``dx`` to the right and ``dy`` up
    pub fn move_char(&mut self, index: usize, dx: f32, dy: f32) {
        edit::move_char(&mut self.cache, index, dx, dy);
    }

    /// rotates a written character about its center
    pub fn rotate_char(&mut self, index: usize, angle: f32, is_degrees: bool) {
        edit::rotate_char(&mut self.cache, index, angle, is_degrees);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
