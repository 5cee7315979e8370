use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No directory selected")]
    NoDirectorySelected,

    #[error("No .{extension} image found in {}", dir.display())]
    NoImageFound { dir: PathBuf, extension: String },

    #[error("Not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error means no usable input image was located
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Error::NoDirectorySelected | Error::NoImageFound { .. } | Error::NotAFile(_)
        )
    }

    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_missing_input() {
        assert!(Error::NoDirectorySelected.is_missing_input());
        assert!(Error::NotAFile(PathBuf::from("disk.dd")).is_missing_input());
        assert!(
            Error::NoImageFound {
                dir: PathBuf::from("/images"),
                extension: "dd".to_string(),
            }
            .is_missing_input()
        );

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::Io(io_err).is_missing_input());
    }

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert!(Error::Io(io_err).is_not_found());
        assert!(!Error::NoDirectorySelected.is_not_found());
    }

    #[test]
    fn test_no_image_found_message() {
        let err = Error::NoImageFound {
            dir: PathBuf::from("/images"),
            extension: "dd".to_string(),
        };
        assert_eq!(err.to_string(), "No .dd image found in /images");
    }
}
