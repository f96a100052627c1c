use std::path::PathBuf;

/// Errors that can occur while carving an image.
#[derive(Debug, thiserror::Error)]
pub enum CarveError {
    /// The requested seam count cannot be carved from an image of this width.
    #[error("{}", describe_seam_count(.seams, .width))]
    InvalidSeamCount { seams: usize, width: usize },

    /// The pixel grid has no rows or no columns.
    #[error("image has no pixels ({width}x{height})")]
    EmptyImage { width: usize, height: usize },

    /// The input image could not be read or decoded.
    #[error("failed to load image {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output extension does not name a format that can be written.
    #[error("cannot write images with the extension of {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    /// The carved image could not be encoded or written.
    #[error("failed to save image {}: {}", .path.display(), .source)]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, CarveError>;

fn describe_seam_count(seams: &usize, width: &usize) -> String {
    if *width <= 1 {
        format!(
            "cannot remove {} seam(s): an image {} pixel(s) wide is too narrow to carve",
            seams, width
        )
    } else {
        format!(
            "cannot remove {} seam(s) from an image {} pixels wide; the count must be between 1 and {}",
            seams,
            width,
            width - 1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seam_count_message_names_the_valid_range() {
        let err = CarveError::InvalidSeamCount { seams: 9, width: 5 };
        assert_eq!(
            err.to_string(),
            "cannot remove 9 seam(s) from an image 5 pixels wide; the count must be between 1 and 4"
        );
    }

    #[test]
    fn single_column_is_too_narrow() {
        let message = CarveError::InvalidSeamCount { seams: 1, width: 1 }.to_string();
        assert!(message.contains("too narrow to carve"), "{}", message);
        assert!(!message.contains("between 1 and 0"));
    }
}
