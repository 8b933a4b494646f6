use crate::error::{Result, TypeballError};
use crate::glm;
use crate::utils::constants::*;
use itertools::Itertools;
use std::ops::Range;

/// fixed size storage for the geometry of one text batch
pub struct BatchCache {
    vertices: Vec<f32>,
    tex_coords: Vec<f32>,
    indices: Vec<u32>,
    colors: Vec<f32>,
    vertex_ptr: usize,
    tex_ptr: usize,
    index_ptr: usize,
    color_ptr: usize,
    char_count: usize,
    max_num_chars: usize,
}

impl BatchCache {
    /// allocates a cache for ``MAX_CHARACTERS`` characters with every color set to ``pen``
    pub fn new(pen: glm::Vec4) -> Self {
        let max_num_chars = MAX_CHARACTERS;
        let mut cache = Self {
            vertices: vec![0.0; VERTEX_FLOATS_PER_CHAR * max_num_chars],
            tex_coords: vec![0.0; VERTEX_FLOATS_PER_CHAR * max_num_chars],
            indices: vec![0; INDICES_PER_CHAR * max_num_chars],
            colors: vec![0.0; COLOR_FLOATS_PER_CHAR * max_num_chars],
            vertex_ptr: 0,
            tex_ptr: 0,
            index_ptr: 0,
            color_ptr: 0,
            char_count: 0,
            max_num_chars,
        };
        cache.fill_colors(0..max_num_chars, pen);
        log::debug!("new text batch cache created for {max_num_chars} characters");
        cache
    }

    /// appends the quad of one glyph, all buffers advance together
    pub fn push_glyph(&mut self, corners: &[glm::Vec2; 4], uvs: &[glm::Vec2; 4]) -> Result<()> {
        if self.char_count >= self.max_num_chars {
            log::error!(
                "text batch overflow: more than {} characters",
                self.max_num_chars
            );
            return Err(TypeballError::CapacityExceeded {
                capacity: self.max_num_chars,
            });
        }
        let index_offset = (self.vertex_ptr / 2) as u32;

        for (corner, uv) in corners.iter().zip(uvs) {
            self.vertices[self.vertex_ptr] = corner.x;
            self.vertices[self.vertex_ptr + 1] = corner.y;
            self.vertex_ptr += 2;
            self.tex_coords[self.tex_ptr] = uv.x;
            self.tex_coords[self.tex_ptr + 1] = uv.y;
            self.tex_ptr += 2;
        }
        for index in GLYPH_QUAD_INDICES {
            self.indices[self.index_ptr] = index + index_offset;
            self.index_ptr += 1;
        }
        // the color values are already in place
        self.color_ptr += COLOR_FLOATS_PER_CHAR;
        self.char_count += 1;
        Ok(())
    }

    /// copies out the written geometry and resets the cache
    pub fn flush(&mut self, pen: glm::Vec4) -> BatchSnapshot {
        let snapshot = self.snapshot();
        self.reset(pen);
        log::debug!("flushed text batch with {} characters", snapshot.glyph_count());
        snapshot
    }

    /// copies out the written geometry without resetting
    pub fn snapshot(&self) -> BatchSnapshot {
        BatchSnapshot {
            vertices: self.vertices[..self.vertex_ptr].to_vec(),
            tex_coords: self.tex_coords[..self.tex_ptr].to_vec(),
            indices: self.indices[..self.index_ptr].to_vec(),
            colors: self.colors[..self.color_ptr].to_vec(),
        }
    }

    /// resets all cursors and repaints the whole color buffer
    pub fn reset(&mut self, pen: glm::Vec4) {
        self.vertex_ptr = 0;
        self.tex_ptr = 0;
        self.index_ptr = 0;
        self.color_ptr = 0;
        self.char_count = 0;
        self.fill_colors(0..self.max_num_chars, pen);
    }

    /// number of characters written since the last reset
    #[inline]
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.max_num_chars
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.char_count == 0
    }

    /// paints every character slot from the color cursor to the end of the buffer
    pub fn fill_colors_forward(&mut self, color: glm::Vec4) {
        let first = self.color_ptr / COLOR_FLOATS_PER_CHAR;
        self.fill_colors(first..self.max_num_chars, color);
    }

    /// paints the character slots in the range (clamped to the capacity)
    pub fn fill_colors(&mut self, chars: Range<usize>, color: glm::Vec4) {
        let end = chars.end.min(self.max_num_chars);
        for slot in chars.start.min(end)..end {
            for corner in 0..VERTICES_PER_CHAR {
                let offset = slot * COLOR_FLOATS_PER_CHAR + corner * 4;
                self.colors[offset..offset + 4].copy_from_slice(color.as_slice());
            }
        }
    }

    /// paints the four corners of one character slot individually
    pub fn paint_corners(&mut self, slot: usize, colors: &[glm::Vec4; 4]) -> bool {
        if slot >= self.max_num_chars {
            return false;
        }
        for (corner, color) in colors.iter().enumerate() {
            let offset = slot * COLOR_FLOATS_PER_CHAR + corner * 4;
            self.colors[offset..offset + 4].copy_from_slice(color.as_slice());
        }
        true
    }

    /// the four corner positions of a written character
    pub fn corners(&self, index: usize) -> Option<[glm::Vec2; 4]> {
        if index >= self.char_count {
            return None;
        }
        let offset = index * VERTEX_FLOATS_PER_CHAR;
        let mut corners = [glm::Vec2::zeros(); 4];
        for (i, (x, y)) in self.vertices[offset..offset + VERTEX_FLOATS_PER_CHAR]
            .iter()
            .tuples()
            .enumerate()
        {
            corners[i] = glm::vec2(*x, *y);
        }
        Some(corners)
    }

    /// overwrites the corner positions of a written character
    pub fn set_corners(&mut self, index: usize, corners: &[glm::Vec2; 4]) -> bool {
        if index >= self.char_count {
            return false;
        }
        let offset = index * VERTEX_FLOATS_PER_CHAR;
        for (i, corner) in corners.iter().enumerate() {
            self.vertices[offset + i * 2] = corner.x;
            self.vertices[offset + i * 2 + 1] = corner.y;
        }
        true
    }
}

/// finished geometry of a batch, ready for upload into vertex and index buffers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSnapshot {
    /// vertex positions as x, y pairs
    pub vertices: Vec<f32>,
    /// texture coordinates as u, v pairs
    pub tex_coords: Vec<f32>,
    /// triangle indices as triples
    pub indices: Vec<u32>,
    /// vertex colors as r, g, b, a quads
    pub colors: Vec<f32>,
}

impl BatchSnapshot {
    /// number of glyph quads in the batch
    pub fn glyph_count(&self) -> usize {
        self.vertices.len() / VERTEX_FLOATS_PER_CHAR
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// vertex positions as vectors
    pub fn points(&self) -> impl Iterator<Item = glm::Vec2> + '_ {
        self.vertices.iter().tuples().map(|(x, y)| glm::vec2(*x, *y))
    }

    /// texture coordinates as vectors
    pub fn uvs(&self) -> impl Iterator<Item = glm::Vec2> + '_ {
        self.tex_coords.iter().tuples().map(|(u, v)| glm::vec2(*u, *v))
    }

    /// triangles as index triples
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.iter().tuples().map(|(a, b, c)| [*a, *b, *c])
    }

    /// vertex colors as vectors
    pub fn vertex_colors(&self) -> impl Iterator<Item = glm::Vec4> + '_ {
        self.colors
            .iter()
            .tuples()
            .map(|(r, g, b, a)| glm::vec4(*r, *g, *b, *a))
    }
}
