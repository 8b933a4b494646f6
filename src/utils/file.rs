use crate::error::{Result, TypeballError};
use crate::utils::constants::{DESCRIPTION_EXTENSION, IMAGE_EXTENSION};
use std::path::{Path, PathBuf};

/// yields the atlas image path for a font path stem
pub fn get_image_path(path_stem: impl AsRef<Path>) -> PathBuf {
    with_extension(path_stem.as_ref(), IMAGE_EXTENSION)
}

/// yields the font description path for a font path stem
pub fn get_description_path(path_stem: impl AsRef<Path>) -> PathBuf {
    with_extension(path_stem.as_ref(), DESCRIPTION_EXTENSION)
}

/// appends the extension to the stem (stems may contain dots themselves)
fn with_extension(path_stem: &Path, extension: &str) -> PathBuf {
    let mut full = path_stem.as_os_str().to_owned();
    full.push(".");
    full.push(extension);
    PathBuf::from(full)
}

/// fails with ``ResourceNotFound`` if the file does not exist
pub(crate) fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(TypeballError::ResourceNotFound(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_with_dots_keep_their_name() {
        assert_eq!(
            get_image_path("fonts/mono.v2"),
            PathBuf::from("fonts/mono.v2.png")
        );
        assert_eq!(
            get_description_path("fonts/mono"),
            PathBuf::from("fonts/mono.json")
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let err = require_file(Path::new("does/not/exist.png")).unwrap_err();
        assert!(matches!(err, TypeballError::ResourceNotFound(p) if p.ends_with("exist.png")));
    }
}
