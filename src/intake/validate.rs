/// Client-side file acceptance policy
///
/// Pure checks over a candidate's declared media type and byte size.
/// Nothing here reads the file contents.

use std::io;
use std::path::Path;
use thiserror::Error;

/// Largest accepted upload in bytes (10 MB)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Media types the classifier accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Declared media type from a file extension.
    /// `.jpg` and `.jpeg` are the same type.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// MIME type sent as the upload part's content type
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// A file offered by the user, reduced to what the acceptance policy needs.
/// Only lives for the duration of one `validate` call.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Declared media type (None when the extension is not a known image type)
    pub kind: Option<ImageKind>,
    /// Byte size on disk
    pub size: u64,
}

impl Candidate {
    /// Build a candidate from a dropped or browsed path
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let size = std::fs::metadata(path)?.len();
        Ok(Self {
            kind: ImageKind::from_path(path),
            size,
        })
    }
}

/// Why a candidate was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a valid image file (JPEG, JPG, or PNG)")]
    UnsupportedType,
    #[error("File size should be less than 10MB")]
    TooLarge,
}

/// Accept or reject a candidate.
///
/// The type check runs before the size check, so an oversized file of an
/// unknown type reports the type problem.
pub fn validate(candidate: &Candidate) -> Result<ImageKind, ValidationError> {
    let kind = candidate.kind.ok_or(ValidationError::UnsupportedType)?;

    if candidate.size > MAX_UPLOAD_BYTES {
        return Err(ValidationError::TooLarge);
    }

    Ok(kind)
}
