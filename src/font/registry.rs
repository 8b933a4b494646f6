use crate::error::{Result, TypeballError};
use crate::font::atlas::{encode, AtlasParams, GlyphQuad};
use crate::rendering::data::DecodedImage;
use crate::utils::constants::{DEFAULT_SPACE_WIDTH, DEFAULT_SPACING};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// contents of a font description file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontDescription {
    pub pallet_width: usize,
    pub pallet_height: usize,
    pub border: usize,
    pub rows: usize,
    pub character_width: usize,
    /// the key is misspelled in the file format
    #[serde(rename = "charactert_height")]
    pub character_height: usize,
    pub character_map: String,
}

impl FontDescription {
    /// parses the JSON document of a font description (unknown keys are ignored)
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// reads and parses a font description file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn atlas_params(&self) -> AtlasParams {
        AtlasParams {
            pallet_size: (self.pallet_width, self.pallet_height),
            cell_size: (self.character_width, self.character_height),
            border: self.border,
            rows: self.rows,
        }
    }
}

/// creation options of a font (spacing and space width are given in pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSettings {
    pub trimming: bool,
    pub spacing: f32,
    pub space_width: f32,
}

impl FontSettings {
    pub fn with_trimming(mut self, trimming: bool) -> Self {
        self.trimming = trimming;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_space_width(mut self, space_width: f32) -> Self {
        self.space_width = space_width;
        self
    }
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            trimming: false,
            spacing: DEFAULT_SPACING,
            space_width: DEFAULT_SPACE_WIDTH,
        }
    }
}

/// an encoded atlas font ready for layout
#[derive(Debug, Clone, PartialEq)]
pub struct FontDefinition {
    pub pallet_width: usize,
    pub pallet_height: usize,
    pub character_width: usize,
    pub character_height: usize,
    pub border: usize,
    pub rows: usize,
    pub glyphs: HashMap<char, GlyphQuad>,
    /// advance between glyphs relative to the character width
    pub spacing: f32,
    /// advance of a space relative to the character width
    pub space_width: f32,
    pub image_path: PathBuf,
    pub trimmed: bool,
}

impl FontDefinition {
    /// encodes the atlas of the description, trimming needs the decoded atlas in ``alpha``
    pub fn new(
        description: &FontDescription,
        settings: FontSettings,
        image_path: PathBuf,
        alpha: Option<&DecodedImage>,
    ) -> Result<Self> {
        let alpha = match (settings.trimming, alpha) {
            (true, None) => {
                return Err(TypeballError::MalformedDescription(
                    "trimming requires the decoded atlas image".to_string(),
                ))
            }
            (true, image) => image,
            (false, _) => None,
        };
        let glyphs = encode(
            &description.atlas_params(),
            &description.character_map,
            alpha,
        )?;
        let character_width = description.character_width as f32;

        Ok(Self {
            pallet_width: description.pallet_width,
            pallet_height: description.pallet_height,
            character_width: description.character_width,
            character_height: description.character_height,
            border: description.border,
            rows: description.rows,
            glyphs,
            spacing: settings.spacing / character_width,
            space_width: settings.space_width / character_width,
            image_path,
            trimmed: alpha.is_some(),
        })
    }

    /// yields the quad of a character if the atlas contains it
    #[inline]
    pub fn glyph(&self, character: char) -> Option<&GlyphQuad> {
        self.glyphs.get(&character)
    }
}

/// holds all created fonts by name
#[derive(Debug, Default)]
pub struct FontRegistry {
    fonts: HashMap<String, Rc<FontDefinition>>,
}

impl FontRegistry {
    /// creates a new font registry
    pub fn new() -> Self {
        Self::default()
    }

    /// encodes and stores a font (replaces a font with the same key)
    pub fn register(
        &mut self,
        key: &str,
        description: &FontDescription,
        settings: FontSettings,
        image_path: PathBuf,
        alpha: Option<&DecodedImage>,
    ) -> Result<Rc<FontDefinition>> {
        let font = Rc::new(FontDefinition::new(
            description,
            settings,
            image_path,
            alpha,
        )?);
        if self.fonts.insert(key.to_string(), font.clone()).is_some() {
            log::debug!("replaced font {key:?}");
        }
        log::debug!(
            "created font {key:?} with {} glyphs (trimmed: {})",
            font.glyphs.len(),
            font.trimmed
        );
        Ok(font)
    }

    /// yields the font stored under the key
    pub fn get(&self, key: &str) -> Option<&Rc<FontDefinition>> {
        self.fonts.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fonts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// iterates over all font keys in arbitrary order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fonts.keys().map(String::as_str)
    }
}
