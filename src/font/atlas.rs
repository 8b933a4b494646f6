//! Maps the characters of a grid atlas to normalized texture quads.
//!
//! Glyph cells are laid out with ``rows`` cells per grid line: the i-th character
//! of the character map lands in cell ``(i % rows, i / rows)``. With an alpha plane
//! present the cells are trimmed to their inked columns, which turns a monospace
//! atlas into a proportional font.

use crate::error::{Result, TypeballError};
use crate::glm;
use crate::rendering::data::DecodedImage;
use crate::utils::tools::map_range;
use std::collections::HashMap;
use std::ops::Range;

/// texture quad of one glyph in the atlas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphQuad {
    /// uv corners: top-left, bottom-left, bottom-right, top-right
    pub uvs: [glm::Vec2; 4],
    /// glyph width relative to the cell width
    pub width: f32,
}

impl GlyphQuad {
    /// flat view: the 8 uv values followed by the width
    pub fn to_array(&self) -> [f32; 9] {
        let mut flat = [0.0; 9];
        for (i, uv) in self.uvs.iter().enumerate() {
            flat[i * 2] = uv.x;
            flat[i * 2 + 1] = uv.y;
        }
        flat[8] = self.width;
        flat
    }
}

/// grid layout of an atlas in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtlasParams {
    pub pallet_size: (usize, usize),
    pub cell_size: (usize, usize),
    pub border: usize,
    pub rows: usize,
}

impl AtlasParams {
    /// pixel origin of the n-th grid slot, ``None`` if it is not addressable
    fn slot_origin(&self, slot: usize) -> Option<(usize, usize)> {
        let current_row = slot % self.rows;
        let current_column = slot / self.rows;
        let x = self.cell_size.0.checked_add(self.border)?.checked_mul(current_row)?;
        let y = self.cell_size.1.checked_add(self.border)?.checked_mul(current_column)?;
        Some((x, y))
    }

    /// pixel bounds ``(origin, end)`` of the cell in the n-th grid slot
    fn slot_bounds(&self, slot: usize) -> Result<((usize, usize), (usize, usize))> {
        let bounds = self.slot_origin(slot).and_then(|(x, y)| {
            let end_x = x.checked_add(self.cell_size.0)?;
            let end_y = y.checked_add(self.cell_size.1)?;
            Some(((x, y), (end_x, end_y)))
        });
        bounds.ok_or_else(|| {
            TypeballError::MalformedDescription(format!(
                "grid slot {slot} lies outside of the addressable pixel range"
            ))
        })
    }

    fn to_uv(&self, x: f32, y: f32) -> glm::Vec2 {
        glm::vec2(
            map_range((0.0, self.pallet_size.0 as f32), (0.0, 1.0), x),
            map_range((0.0, self.pallet_size.1 as f32), (0.0, 1.0), y),
        )
    }
}

/// computes the glyph quads for every character of ``character_map``
/// (trimming is performed iff ``alpha`` is present)
pub fn encode(
    params: &AtlasParams,
    character_map: &str,
    alpha: Option<&DecodedImage>,
) -> Result<HashMap<char, GlyphQuad>> {
    if params.rows == 0 {
        return Err(TypeballError::MalformedDescription(
            "rows has to be at least 1".to_string(),
        ));
    }
    if params.cell_size.0 == 0 || params.pallet_size.0 == 0 || params.pallet_size.1 == 0 {
        return Err(TypeballError::MalformedDescription(
            "atlas and character sizes have to be positive".to_string(),
        ));
    }

    let mut glyphs = HashMap::new();
    for (slot, character) in character_map.chars().enumerate() {
        let ((origin_x, origin_y), (end_x, end_y)) = params.slot_bounds(slot)?;
        let (left, right) = match alpha {
            Some(image) => {
                // one column and row past the cell, pixels outside the image stay transparent
                let scan_x = origin_x..end_x.saturating_add(1);
                let scan_y = origin_y..end_y.saturating_add(1);
                let edges = trim_columns(image, scan_x, scan_y);
                if edges.1 <= edges.0 {
                    log::warn!("glyph {character:?} has no visible pixels");
                }
                edges
            }
            None => (origin_x as isize, end_x as isize),
        };

        let top = origin_y as f32;
        let bottom = end_y as f32;
        let (left, right) = (left as f32, right as f32);
        let quad = GlyphQuad {
            uvs: [
                params.to_uv(left, top),
                params.to_uv(left, bottom),
                params.to_uv(right, bottom),
                params.to_uv(right, top),
            ],
            width: (right - left) / params.cell_size.0 as f32,
        };
        glyphs.insert(character, quad);
    }
    Ok(glyphs)
}

/// finds the leftmost inked column and the column after the rightmost inked one
/// (fully transparent boxes yield ``left = scan_x.end`` and ``right = scan_x.start``)
fn trim_columns(image: &DecodedImage, scan_x: Range<usize>, scan_y: Range<usize>) -> (isize, isize) {
    let inked = |x: usize| scan_y.clone().any(|y| image.alpha(x, y) > 0);

    let left = scan_x
        .clone()
        .find(|&x| inked(x))
        .unwrap_or(scan_x.end);
    let right = scan_x
        .clone()
        .rev()
        .find(|&x| inked(x))
        .map(|x| x + 1)
        .unwrap_or(scan_x.start);

    (left as isize, right as isize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(cell: (usize, usize), pallet: (usize, usize), rows: usize) -> AtlasParams {
        AtlasParams {
            pallet_size: pallet,
            cell_size: cell,
            border: 0,
            rows,
        }
    }

    #[test]
    fn monospace_glyphs_have_full_width() {
        let glyphs = encode(&params((8, 8), (32, 16), 4), "ABCDEFG", None).unwrap();
        assert_eq!(glyphs.len(), 7);
        assert!(glyphs.values().all(|quad| quad.width == 1.0));
    }

    #[test]
    fn grid_slots_are_row_major() {
        let glyphs = encode(&params((8, 8), (32, 16), 4), "ABCDE", None).unwrap();
        let b = glyphs[&'B'];
        assert_eq!(b.uvs[0], glm::vec2(0.25, 0.0));
        assert_eq!(b.uvs[2], glm::vec2(0.5, 0.5));
        let e = glyphs[&'E'];
        assert_eq!(e.uvs[0], glm::vec2(0.0, 0.5));
        assert_eq!(e.uvs[1], glm::vec2(0.0, 1.0));
        assert_eq!(e.to_array()[8], 1.0);
    }

    #[test]
    fn border_offsets_the_slots() {
        let atlas = AtlasParams {
            pallet_size: (20, 10),
            cell_size: (8, 8),
            border: 2,
            rows: 2,
        };
        let glyphs = encode(&atlas, "ab", None).unwrap();
        assert_eq!(glyphs[&'b'].uvs[0], glm::vec2(0.5, 0.0));
        assert_eq!(glyphs[&'b'].uvs[3], glm::vec2(0.9, 0.0));
    }

    #[test]
    fn trimming_finds_the_inked_columns() {
        let mut data = vec![0u8; 10 * 10 * 4];
        for y in 2..8 {
            for x in 3..6 {
                data[(y * 10 + x) * 4 + 3] = 255;
            }
        }
        let image = DecodedImage::from_rgba(10, 10, data).unwrap();
        let glyphs = encode(&params((10, 10), (10, 10), 1), "i", Some(&image)).unwrap();
        let quad = glyphs[&'i'];
        assert!((quad.width - 0.3).abs() < 1e-6);
        assert_eq!(quad.uvs[0].x, 0.3);
        assert_eq!(quad.uvs[1].x, 0.3);
        assert_eq!(quad.uvs[2].x, 0.6);
        assert_eq!(quad.uvs[3].x, 0.6);
        assert_eq!(quad.uvs[1].y, 1.0);
    }

    fn assert_close(actual: glm::Vec2, expected: glm::Vec2) {
        assert!(
            (actual - expected).norm() < 1e-6,
            "{actual:?} is not {expected:?}"
        );
    }

    /// alpha plane with the given pixels inked
    fn inked_image(width: usize, height: usize, inked: impl Fn(usize, usize) -> bool) -> DecodedImage {
        let mut data = vec![0u8; width * height * 4];
        for y in 0..height {
            for x in 0..width {
                if inked(x, y) {
                    data[(y * width + x) * 4 + 3] = 255;
                }
            }
        }
        DecodedImage::from_rgba(width, height, data).unwrap()
    }

    #[test]
    fn trimming_later_slots_of_a_bordered_grid() {
        // 4x4 cells with a 2 pixel border, two cells per grid line
        let atlas = AtlasParams {
            pallet_size: (12, 12),
            cell_size: (4, 4),
            border: 2,
            rows: 2,
        };
        let image = inked_image(12, 12, |x, y| match (x, y) {
            (0..=3, 0..=3) => true,
            (7..=8, 0..=3) => true,
            (1..=3, 6..=9) => true,
            (6, 6..=9) => true,
            _ => false,
        });
        let glyphs = encode(&atlas, "ABCD", Some(&image)).unwrap();

        assert_eq!(glyphs[&'A'].width, 1.0);

        let b = glyphs[&'B'];
        assert_eq!(b.width, 0.5);
        assert_close(b.uvs[0], glm::vec2(7.0 / 12.0, 0.0));
        assert_close(b.uvs[2], glm::vec2(9.0 / 12.0, 4.0 / 12.0));

        let c = glyphs[&'C'];
        assert_eq!(c.width, 0.75);
        assert_close(c.uvs[1], glm::vec2(1.0 / 12.0, 10.0 / 12.0));
        assert_close(c.uvs[3], glm::vec2(4.0 / 12.0, 0.5));

        let d = glyphs[&'D'];
        assert_eq!(d.width, 0.25);
        assert_close(d.uvs[0], glm::vec2(0.5, 0.5));
        assert_close(d.uvs[2], glm::vec2(7.0 / 12.0, 10.0 / 12.0));
    }

    #[test]
    fn ink_of_the_next_cell_widens_the_box() {
        // no border: the column past "A" is the first column of "B"
        let image = inked_image(8, 4, |x, _| x == 1 || x == 4);
        let glyphs = encode(&params((4, 4), (8, 4), 2), "AB", Some(&image)).unwrap();

        let a = glyphs[&'A'];
        assert_eq!(a.width, 1.0);
        assert_close(a.uvs[0], glm::vec2(1.0 / 8.0, 0.0));
        assert_close(a.uvs[2], glm::vec2(5.0 / 8.0, 1.0));

        let b = glyphs[&'B'];
        assert_eq!(b.width, 0.25);
        assert_close(b.uvs[0], glm::vec2(0.5, 0.0));
        assert_close(b.uvs[3], glm::vec2(5.0 / 8.0, 0.0));
    }

    #[test]
    fn unaddressable_slots_are_malformed() {
        let atlas = AtlasParams {
            pallet_size: (8, 8),
            cell_size: (8, 8),
            border: usize::MAX / 2,
            rows: 3,
        };
        assert!(encode(&atlas, "AB", None).is_ok());
        assert!(matches!(
            encode(&atlas, "ABC", None),
            Err(TypeballError::MalformedDescription(_))
        ));

        let huge_cell = params((usize::MAX, 8), (8, 8), 2);
        assert!(encode(&huge_cell, "A", None).is_ok());
        assert!(matches!(
            encode(&huge_cell, "AB", None),
            Err(TypeballError::MalformedDescription(_))
        ));
    }

    #[test]
    fn transparent_glyphs_degenerate() {
        let image = DecodedImage::from_rgba(4, 4, vec![0; 4 * 4 * 4]).unwrap();
        let glyphs = encode(&params((4, 4), (4, 4), 1), " ", Some(&image)).unwrap();
        assert!(glyphs[&' '].width <= 0.0);
    }

    #[test]
    fn zero_rows_are_rejected() {
        assert!(matches!(
            encode(&params((8, 8), (8, 8), 0), "A", None),
            Err(TypeballError::MalformedDescription(_))
        ));
    }
}
