use std::fmt::Display;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while starting a lesson
///
/// None of these are recovered from: the caller tears down whatever was
/// acquired and exits.
#[derive(Debug, Error)]
pub enum Error {
    /// The window, surface or GPU device could not be created
    #[error("{what} could not be initialized: {message}")]
    Init { what: &'static str, message: String },

    /// The image file is missing or malformed
    #[error("unable to load image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The decoded image cannot be attached to the render context
    #[error("unable to create texture from {}: {source}", path.display())]
    Bind {
        path: PathBuf,
        #[source]
        source: BindFailure,
    },
}

/// Why a render context refused to create a texture
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindFailure {
    #[error("render context is closed")]
    ContextClosed,

    #[error("image has no pixels")]
    Empty,

    #[error("{width}x{height} exceeds the maximum texture dimension {max}")]
    TooLarge { width: u32, height: u32, max: u32 },
}

impl Error {
    pub fn init(what: &'static str, err: impl Display) -> Self {
        Self::Init {
            what,
            message: err.to_string(),
        }
    }

    /// True for errors raised while loading media rather than starting up
    pub fn is_media(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::Bind { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_error_message() {
        let err = Error::init("window", "no display");
        assert_eq!(err.to_string(), "window could not be initialized: no display");
        assert!(!err.is_media());
    }

    #[test]
    fn bind_error_is_media() {
        let err = Error::Bind {
            path: PathBuf::from("images/dots.png"),
            source: BindFailure::ContextClosed,
        };
        assert!(err.is_media());
        assert!(err.to_string().contains("images/dots.png"));
        assert!(err.to_string().ends_with("render context is closed"));
    }
}
