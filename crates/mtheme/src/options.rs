//! Where themes are looked up and how their resources are loaded.

use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::image_loader::{FileImageLoader, ImageLoader};

/// File name of a theme document inside its theme directory.
pub const THEME_FILENAME: &str = "metacity-theme-1.xml";

/// System-wide theme root searched last.
pub const SYSTEM_THEME_DIR: &str = "/usr/share/metacity/themes";

/// Configuration for [`load_theme`](crate::load_theme) and
/// [`parse_theme`](crate::parse_theme).
#[derive(Clone)]
pub struct LoadOptions {
    /// Theme name; also the directory name searched for.
    pub theme_name: String,
    /// Directories tried in order. Each must contain [`THEME_FILENAME`].
    pub search_dirs: Vec<PathBuf>,
    pub file_name: String,
    /// Directory image file names are resolved against. Set by the loader
    /// to the directory the theme was found in.
    pub base_dir: PathBuf,
    pub image_loader: Rc<dyn ImageLoader>,
}

impl LoadOptions {
    /// Options with the standard search path for `theme_name`.
    pub fn new(theme_name: impl Into<String>) -> Self {
        let theme_name = theme_name.into();
        let search_dirs = default_search_dirs(&theme_name);
        Self {
            theme_name,
            search_dirs,
            file_name: THEME_FILENAME.to_string(),
            base_dir: PathBuf::from("."),
            image_loader: Rc::new(FileImageLoader),
        }
    }

    pub fn with_search_dirs(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_dirs = dirs;
        self
    }

    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = dir.into();
        self
    }

    pub fn with_image_loader(mut self, loader: impl ImageLoader + 'static) -> Self {
        self.image_loader = Rc::new(loader);
        self
    }

    pub(crate) fn image_path(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("theme_name", &self.theme_name)
            .field("search_dirs", &self.search_dirs)
            .field("file_name", &self.file_name)
            .field("base_dir", &self.base_dir)
            .finish_non_exhaustive()
    }
}

/// `./themes/<name>` (debug builds only), `./<name>`,
/// `$HOME/.metacity/themes/<name>`, then the system directory.
pub fn default_search_dirs(theme_name: &str) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if cfg!(debug_assertions) {
        dirs.push(Path::new("./themes").join(theme_name));
    }
    dirs.push(Path::new(".").join(theme_name));
    if let Some(home) = std::env::var_os("HOME") {
        dirs.push(
            PathBuf::from(home)
                .join(".metacity")
                .join("themes")
                .join(theme_name),
        );
    }
    dirs.push(Path::new(SYSTEM_THEME_DIR).join(theme_name));
    dirs
}
