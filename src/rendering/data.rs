use crate::error::{Result, TypeballError};
use crate::glm;
use stb_image::image::LoadResult;
use std::path::Path;

/// decoded atlas image with 4 channels per pixel
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl DecodedImage {
    /// wraps raw RGBA bytes (``data.len()`` has to be ``width * height * 4``)
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(4))
            .ok_or_else(|| {
                TypeballError::ImageDecode(format!("{width}x{height} RGBA image is too large"))
            })?;
        if data.len() != expected {
            return Err(TypeballError::ImageDecode(format!(
                "expected {expected} bytes for a {width}x{height} RGBA image, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// alpha value at the pixel position, transparent outside of the image
    pub fn alpha(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[(y * self.width + x) * 4 + 3]
    }
}

/// decodes an image file into RGBA bytes
pub fn load_image(path: impl AsRef<Path>) -> Result<DecodedImage> {
    match stb_image::image::load_with_depth(path.as_ref(), 4, false) {
        LoadResult::ImageU8(image) => DecodedImage::from_rgba(image.width, image.height, image.data),
        LoadResult::ImageF32(_) => Err(TypeballError::ImageDecode(format!(
            "{:?} decoded to floating point data",
            path.as_ref()
        ))),
        LoadResult::Error(msg) => Err(TypeballError::ImageDecode(msg)),
    }
}

/// 8 bit rgba shorthand for the float colors the batch stores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color32(pub [u8; 4]);

impl Color32 {
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const BLUE: Self = Self::from_rgb(0, 0, 255);
    pub const YELLOW: Self = Self::from_rgb(255, 255, 0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }

    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// normalized float channels
    pub fn to_vec4(self) -> glm::Vec4 {
        glm::Vec4::from(self.0.map(|channel| channel as f32 / 255.0))
    }
}

impl From<Color32> for glm::Vec4 {
    fn from(color: Color32) -> Self {
        color.to_vec4()
    }
}
