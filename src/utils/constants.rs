use crate::glm;

/// hard ceiling of characters one batch can hold
pub const MAX_CHARACTERS: usize = 4096;

pub(crate) const VERTICES_PER_CHAR: usize = 4;
pub(crate) const VERTEX_FLOATS_PER_CHAR: usize = VERTICES_PER_CHAR * 2;
pub(crate) const INDICES_PER_CHAR: usize = 6;
pub(crate) const COLOR_FLOATS_PER_CHAR: usize = VERTICES_PER_CHAR * 4;

/// corners of the unit glyph quad: top-left, bottom-left, bottom-right, top-right
pub(crate) const GLYPH_QUAD_CORNERS: [glm::Vec2; 4] = [
    glm::Vec2::new(0.0, 0.0),
    glm::Vec2::new(0.0, 1.0),
    glm::Vec2::new(1.0, 1.0),
    glm::Vec2::new(1.0, 0.0),
];

/// two triangles spanning the glyph quad
pub(crate) const GLYPH_QUAD_INDICES: [u32; INDICES_PER_CHAR] = [0, 1, 2, 2, 3, 0];

pub(crate) const IMAGE_EXTENSION: &str = "png";
pub(crate) const DESCRIPTION_EXTENSION: &str = "json";

pub const DEFAULT_SPACING: f32 = 1.0;
pub const DEFAULT_SPACE_WIDTH: f32 = 4.0;

pub const DEFAULT_SHADOW_OFFSET: glm::Vec2 = glm::Vec2::new(0.1, 0.1);
pub const DEFAULT_SHADOW_COLOR: glm::Vec4 = glm::Vec4::new(0.0, 0.0, 0.0, 1.0);
pub const DEFAULT_PEN_COLOR: glm::Vec4 = glm::Vec4::new(1.0, 1.0, 1.0, 1.0);
