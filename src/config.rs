use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;
pub const DEFAULT_TITLE: &str = "SDL Tutorial";
pub const DEFAULT_IMAGES_DIR: &str = "images";

/// Window and media settings for one lesson run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub images_dir: PathBuf,
}

impl SessionConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_images_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.images_dir = dir.into();
        self
    }

    /// `<images_dir>/<name>.<ext>`
    pub fn image_path(&self, name: &str, ext: &str) -> PathBuf {
        self.images_dir.join(name).with_extension(ext)
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            images_dir: PathBuf::from(DEFAULT_IMAGES_DIR),
        }
    }
}
