use crate::engine::Engine;
use crate::glm;
use crate::utils::constants::{DEFAULT_PEN_COLOR, DEFAULT_SHADOW_COLOR, DEFAULT_SHADOW_OFFSET};

/// configuration of a new engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineAttributes {
    pub(crate) canvas_size: Option<(f32, f32)>,
    pub(crate) shadow_offset: glm::Vec2,
    pub(crate) shadow_color: glm::Vec4,
    pub(crate) shadow_coloring: bool,
    pub(crate) pen_color: glm::Vec4,
}

impl EngineAttributes {
    /// creates the default attributes
    pub fn new() -> Self {
        Self::default()
    }

    /// size of the canvas text is laid out on, its center is the origin
    pub fn with_canvas_size(mut self, width: f32, height: f32) -> Self {
        self.canvas_size = Some((width, height));
        self
    }

    /// shadow offset relative to the font size that every layout call falls back to
    pub fn with_shadow_offset(mut self, x: f32, y: f32) -> Self {
        self.shadow_offset = glm::vec2(x, y);
        self
    }

    /// float rgba, channels are not clamped
    pub fn with_shadow_color(mut self, color: impl Into<glm::Vec4>) -> Self {
        self.shadow_color = color.into();
        self
    }

    pub fn with_shadow_coloring(mut self, flag: bool) -> Self {
        self.shadow_coloring = flag;
        self
    }

    /// color of characters that are not painted explicitly
    pub fn with_pen_color(mut self, color: impl Into<glm::Vec4>) -> Self {
        self.pen_color = color.into();
        self
    }

    /// creates the engine with the given attributes
    pub fn build_engine(self) -> Engine {
        log::debug!("building engine with {self:?}");
        Engine::with_attributes(self)
    }
}

impl Default for EngineAttributes {
    fn default() -> Self {
        Self {
            canvas_size: None,
            shadow_offset: DEFAULT_SHADOW_OFFSET,
            shadow_color: DEFAULT_SHADOW_COLOR,
            shadow_coloring: true,
            pen_color: DEFAULT_PEN_COLOR,
        }
    }
}
