use crate::error::{Result, TypeballError};
use crate::rendering::batch_cache::BatchSnapshot;
use crate::rendering::data::DecodedImage;
use std::fmt;
use std::path::Path;

/// receives the image path of every created font
pub type PathSink = Box<dyn FnMut(&Path)>;
/// receives the decoded RGBA bytes, width and height of every created font
pub type RawSink = Box<dyn FnMut(&[u8], usize, usize)>;
/// receives finished batches from ``Engine::render``
pub type RenderSink = Box<dyn FnMut(BatchSnapshot)>;

/// the single texture upload mechanism of an engine
#[derive(Default)]
pub enum TextureSink {
    #[default]
    None,
    Path(PathSink),
    Raw(RawSink),
}

impl TextureSink {
    /// stores the sink if none is registered yet
    pub(crate) fn register(&mut self, sink: TextureSink) -> Result<()> {
        if !matches!(self, TextureSink::None) {
            return Err(TypeballError::DuplicateSinkRegistration);
        }
        *self = sink;
        Ok(())
    }

    /// whether the sink needs the decoded image
    pub(crate) fn wants_pixels(&self) -> bool {
        matches!(self, TextureSink::Raw(_))
    }

    /// hands a freshly created font's atlas to the sink
    pub(crate) fn notify(&mut self, image_path: &Path, image: Option<&DecodedImage>) {
        match self {
            TextureSink::None => {}
            TextureSink::Path(sink) => sink(image_path),
            TextureSink::Raw(sink) => {
                if let Some(image) = image {
                    sink(&image.data, image.width, image.height);
                }
            }
        }
    }
}

impl fmt::Debug for TextureSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            TextureSink::None => "None",
            TextureSink::Path(_) => "Path",
            TextureSink::Raw(_) => "Raw",
        };
        write!(f, "TextureSink::{kind}")
    }
}
