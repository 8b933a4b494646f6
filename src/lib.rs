pub mod engine;
pub mod engine_builder;
pub mod error;
pub mod font;
pub mod rendering;
pub mod utils;

pub use env_logger;
pub use itertools;
pub use log;
pub use nalgebra_glm as glm;
pub use stb_image;

/// All features that are very common to use.
pub mod prelude {
    pub use crate::engine::{Engine, ShadowState};
    pub use crate::engine_builder::EngineAttributes;
    pub use crate::error::{Result, TypeballError};
    pub use crate::font::atlas::GlyphQuad;
    pub use crate::font::registry::{FontDefinition, FontDescription, FontRegistry, FontSettings};
    pub use crate::glm;
    pub use crate::glm::vec2;
    pub use crate::glm::Vec2;
    pub use crate::log;
    pub use crate::rendering::batch_cache::BatchSnapshot;
    pub use crate::rendering::data::{Color32, DecodedImage};
    pub use crate::rendering::layout::TextSize;
    pub use crate::utils::constants::MAX_CHARACTERS;
}
