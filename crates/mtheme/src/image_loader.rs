//! Loading the images referenced by `<image filename=...>` draw ops.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Result, ThemeError};
use crate::types::Pixbuf;

/// Source of decoded images for a theme being loaded.
pub trait ImageLoader {
    fn load(&self, path: &Path) -> Result<Pixbuf>;
}

/// Reads image files from disk and decodes them with the `image` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileImageLoader;

impl FileImageLoader {
    /// Decode an in-memory image file (PNG).
    pub fn decode(path: &Path, bytes: &[u8]) -> Result<Pixbuf> {
        let decoded = image::load_from_memory(bytes).map_err(|err| ThemeError::Image {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Ok(Pixbuf::from(decoded.to_rgba8()))
    }
}

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<Pixbuf> {
        let bytes = std::fs::read(path).map_err(|err| ThemeError::Image {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        Self::decode(path, &bytes)
    }
}

/// Serves images registered up front. Useful for themes parsed from memory.
#[derive(Clone, Debug, Default)]
pub struct MemoryImageLoader {
    images: HashMap<PathBuf, Pixbuf>,
}

impl MemoryImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image(mut self, path: impl Into<PathBuf>, pixbuf: Pixbuf) -> Self {
        self.images.insert(path.into(), pixbuf);
        self
    }
}

impl ImageLoader for MemoryImageLoader {
    fn load(&self, path: &Path) -> Result<Pixbuf> {
        self.images.get(path).cloned().ok_or_else(|| ThemeError::Image {
            path: path.display().to_string(),
            message: "no such image".to_string(),
        })
    }
}
