// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::{SessionConfig, DEFAULT_HEIGHT, DEFAULT_IMAGES_DIR, DEFAULT_TITLE, DEFAULT_WIDTH};
use crate::lessons::LessonKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "blit-lessons")]
#[command(about = "Window, image and primitive drawing lessons", long_about = None)]
pub struct Cli {
    /// Lesson to run
    #[arg(value_enum, default_value_t = LessonKind::Geometry)]
    pub lesson: LessonKind,

    /// Viewport width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Window title
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Directory holding the lesson images
    #[arg(long = "images", default_value = DEFAULT_IMAGES_DIR)]
    pub images_dir: PathBuf,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new(self.width, self.height)
            .with_title(self.title.clone())
            .with_images_dir(self.images_dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_defaults() {
        let cli = Cli::try_parse_from(["blit-lessons"]).unwrap();
        assert_eq!(cli.lesson, LessonKind::Geometry);
        assert_eq!(cli.session_config(), SessionConfig::default());
    }

    #[test]
    fn parses_lesson_and_options() {
        let cli = Cli::try_parse_from([
            "blit-lessons",
            "key-presses",
            "--width",
            "320",
            "--height",
            "200",
            "--images",
            "assets",
        ])
        .unwrap();

        assert_eq!(cli.lesson, LessonKind::KeyPresses);
        let config = cli.session_config();
        assert_eq!((config.width, config.height), (320, 200));
        assert_eq!(config.images_dir(), std::path::Path::new("assets"));
    }

    #[test]
    fn rejects_unknown_lesson() {
        assert!(Cli::try_parse_from(["blit-lessons", "shaders"]).is_err());
    }
}
