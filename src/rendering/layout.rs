//! The typewriter layout: a virtual carriage walks the text and strikes one quad per
//! mapped character. Spaces and newlines only move the carriage, characters missing
//! from the atlas are skipped without any advance.

use crate::error::Result;
use crate::font::atlas::GlyphQuad;
use crate::font::registry::FontDefinition;
use crate::glm;
use crate::rendering::batch_cache::BatchCache;
use crate::utils::constants::GLYPH_QUAD_CORNERS;

/// one layout pass over a text
#[derive(Debug, Clone, Copy)]
pub struct TextRun<'a> {
    /// anchor in canvas pixels (the canvas center is at the origin)
    pub position: glm::Vec2,
    pub font_size: f32,
    pub text: &'a str,
    /// snap the anchor to whole pixels
    pub rounding: bool,
}

/// extent of a laid out text in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextSize {
    pub width: f32,
    pub height: f32,
}

/// advance state of the layout
struct Carriage<'a> {
    font: &'a FontDefinition,
    font_size: f32,
    arm: glm::Vec2,
    widest_line: f32,
    lines: usize,
}

impl<'a> Carriage<'a> {
    fn new(font: &'a FontDefinition, font_size: f32) -> Self {
        Self {
            font,
            font_size,
            arm: glm::Vec2::zeros(),
            widest_line: 0.0,
            lines: 1,
        }
    }

    /// moves the carriage over one character, yields the glyph to emit and its position
    fn strike(&mut self, character: char) -> Option<(glm::Vec2, &'a GlyphQuad)> {
        match character {
            ' ' => {
                self.arm.x += self.font.space_width * self.font_size;
                None
            }
            '\n' => {
                self.widest_line = self.widest_line.max(self.arm.x);
                self.arm.x = 0.0;
                self.arm.y += self.font_size;
                self.lines += 1;
                None
            }
            _ => {
                let quad = self.font.glyph(character)?;
                let position = self.arm;
                self.arm.x += quad.width * self.font_size + self.font.spacing * self.font_size;
                Some((position, quad))
            }
        }
    }

    fn size(&self) -> TextSize {
        TextSize {
            width: self.widest_line.max(self.arm.x),
            height: self.lines as f32 * self.font_size,
        }
    }
}

/// lays out the run into the cache and returns the number of emitted glyphs
/// (an overflow leaves the glyphs written so far in the cache)
pub fn type_text(
    cache: &mut BatchCache,
    font: &FontDefinition,
    canvas_size: glm::Vec2,
    run: &TextRun<'_>,
) -> Result<usize> {
    let anchor = if run.rounding {
        run.position.map(f32::round)
    } else {
        run.position
    };
    let origin = anchor - canvas_size / 2.0;
    let mut carriage = Carriage::new(font, run.font_size);
    let mut emitted = 0;

    for character in run.text.chars() {
        let Some((arm, quad)) = carriage.strike(character) else {
            continue;
        };
        let mut corners = GLYPH_QUAD_CORNERS;
        corners[2].x = quad.width;
        corners[3].x = quad.width;
        for corner in corners.iter_mut() {
            *corner = *corner * run.font_size + arm + origin;
        }
        cache.push_glyph(&corners, &quad.uvs)?;
        emitted += 1;
    }
    Ok(emitted)
}

/// measures the text without emitting geometry
pub fn measure_text(font: &FontDefinition, font_size: f32, text: &str) -> TextSize {
    let mut carriage = Carriage::new(font, font_size);
    for character in text.chars() {
        carriage.strike(character);
    }
    carriage.size()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::registry::{FontDescription, FontSettings};
    use crate::utils::constants::DEFAULT_PEN_COLOR;
    use std::path::PathBuf;

    fn mono_font() -> FontDefinition {
        let description = FontDescription {
            pallet_width: 16,
            pallet_height: 8,
            border: 0,
            rows: 2,
            character_width: 8,
            character_height: 8,
            character_map: "AB".to_string(),
        };
        FontDefinition::new(&description, FontSettings::default(), PathBuf::new(), None).unwrap()
    }

    fn run(text: &str, rounding: bool) -> TextRun<'_> {
        TextRun {
            position: glm::vec2(100.4, 50.6),
            font_size: 8.0,
            text,
            rounding,
        }
    }

    #[test]
    fn glyphs_are_placed_relative_to_the_canvas_center() {
        let font = mono_font();
        let mut cache = BatchCache::new(DEFAULT_PEN_COLOR);
        let emitted =
            type_text(&mut cache, &font, glm::vec2(200.0, 100.0), &run("AB", true)).unwrap();
        assert_eq!(emitted, 2);
        let points = cache.snapshot().points().collect::<Vec<_>>();
        // anchor rounds to (100, 51), canvas center shifts it to (0, 1)
        assert_eq!(points[0], glm::vec2(0.0, 1.0));
        assert_eq!(points[1], glm::vec2(0.0, 9.0));
        assert_eq!(points[2], glm::vec2(8.0, 9.0));
        assert_eq!(points[3], glm::vec2(8.0, 1.0));
        assert_eq!(points[4], glm::vec2(9.0, 1.0));
    }

    #[test]
    fn unrounded_anchor_is_kept() {
        let font = mono_font();
        let mut cache = BatchCache::new(DEFAULT_PEN_COLOR);
        type_text(&mut cache, &font, glm::vec2(0.0, 0.0), &run("A", false)).unwrap();
        assert_eq!(cache.snapshot().points().next(), Some(glm::vec2(100.4, 50.6)));
    }

    #[test]
    fn unknown_characters_are_skipped() {
        let font = mono_font();
        let mut cache = BatchCache::new(DEFAULT_PEN_COLOR);
        let emitted =
            type_text(&mut cache, &font, glm::vec2(0.0, 0.0), &run("A?B", false)).unwrap();
        assert_eq!(emitted, 2);
        assert_eq!(measure_text(&font, 8.0, "A?B"), measure_text(&font, 8.0, "AB"));
    }

    #[test]
    fn newlines_reset_the_carriage() {
        let font = mono_font();
        let size = measure_text(&font, 8.0, "AB\nA");
        assert_eq!(size, TextSize { width: 18.0, height: 16.0 });
        let mut cache = BatchCache::new(DEFAULT_PEN_COLOR);
        type_text(&mut cache, &font, glm::vec2(0.0, 0.0), &run("A\nB", true)).unwrap();
        let points = cache.snapshot().points().collect::<Vec<_>>();
        assert_eq!(points[4], glm::vec2(100.0, 59.0));
    }

    #[test]
    fn empty_text_is_one_line_high() {
        let font = mono_font();
        assert_eq!(
            measure_text(&font, 12.0, ""),
            TextSize { width: 0.0, height: 12.0 }
        );
    }
}
