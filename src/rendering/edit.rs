use crate::glm;
use crate::rendering::batch_cache::BatchCache;
use crate::utils::tools::{rotate_about, to_radians};

/// translates the quad of a written character (the canvas y axis points down, so ``dy`` is subtracted)
pub fn move_char(cache: &mut BatchCache, index: usize, dx: f32, dy: f32) -> bool {
    let Some(mut corners) = cache.corners(index) else {
        log::warn!("cannot move character {index}: only {} written", cache.char_count());
        return false;
    };
    let delta = glm::vec2(dx, -dy);
    for corner in corners.iter_mut() {
        *corner += delta;
    }
    cache.set_corners(index, &corners)
}

/// rotates the quad of a written character around its current center
/// (apply ``move_char`` first when combining both, the center is taken from the current corners)
pub fn rotate_char(cache: &mut BatchCache, index: usize, angle: f32, is_degrees: bool) -> bool {
    let Some(mut corners) = cache.corners(index) else {
        log::warn!("cannot rotate character {index}: only {} written", cache.char_count());
        return false;
    };
    let angle = to_radians(angle, is_degrees);
    let center = (corners[0] + corners[2]) / 2.0;
    for corner in corners.iter_mut() {
        *corner = rotate_about(corner, &center, angle);
    }
    cache.set_corners(index, &corners)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{DEFAULT_PEN_COLOR, GLYPH_QUAD_CORNERS};

    fn cache_with_unit_quad() -> BatchCache {
        let mut cache = BatchCache::new(DEFAULT_PEN_COLOR);
        cache
            .push_glyph(&GLYPH_QUAD_CORNERS, &GLYPH_QUAD_CORNERS)
            .unwrap();
        cache
    }

    #[test]
    fn move_flips_y() {
        let mut cache = cache_with_unit_quad();
        assert!(move_char(&mut cache, 0, 2.0, 3.0));
        let corners = cache.corners(0).unwrap();
        assert_eq!(corners[0], glm::vec2(2.0, -3.0));
        assert_eq!(corners[2], glm::vec2(3.0, -2.0));
    }

    #[test]
    fn rotation_keeps_the_center() {
        let mut cache = cache_with_unit_quad();
        assert!(rotate_char(&mut cache, 0, 90.0, true));
        let corners = cache.corners(0).unwrap();
        // top-left (0, 0) turns around (0.5, 0.5) into (1, 0)
        assert!((corners[0] - glm::vec2(1.0, 0.0)).norm() < 1e-5);
        let center = (corners[0] + corners[2]) / 2.0;
        assert!((center - glm::vec2(0.5, 0.5)).norm() < 1e-5);
    }

    #[test]
    fn rotation_follows_the_moved_center() {
        let mut cache = cache_with_unit_quad();
        move_char(&mut cache, 0, 4.0, 0.0);
        rotate_char(&mut cache, 0, std::f32::consts::FRAC_PI_2, false);
        let corners = cache.corners(0).unwrap();
        let center = (corners[0] + corners[2]) / 2.0;
        assert!((center - glm::vec2(4.5, 0.5)).norm() < 1e-5);
        assert!((corners[0] - glm::vec2(5.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn unwritten_characters_are_ignored() {
        let mut cache = cache_with_unit_quad();
        assert!(!move_char(&mut cache, 1, 1.0, 1.0));
        assert!(!rotate_char(&mut cache, 7, 1.0, false));
    }
}
