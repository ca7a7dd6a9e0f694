/// Transport encoding for accepted photos
///
/// Turns a validated file into the two representations the rest of the app
/// works with: a data-URL preview that is bit-identical to the source bytes,
/// and the raw payload that goes out as the multipart upload. Both come from
/// a single read, so either the whole AcceptedImage exists or none of it does.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::GenericImageView;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task;

use super::validate::ImageKind;

/// Multipart field name the classification endpoint expects
pub const UPLOAD_FIELD: &str = "file";

/// Fixed filename sent with every upload, regardless of the source file's name
pub const UPLOAD_FILENAME: &str = "upload.jpg";

/// A validated photo, ready for preview and upload.
///
/// Replaced wholesale on re-upload; nothing mutates an AcceptedImage after
/// construction.
#[derive(Debug, Clone)]
pub struct AcceptedImage {
    /// Declared media type, preserved as the upload's content type
    pub kind: ImageKind,
    /// Original file bytes, exactly as read
    pub bytes: Vec<u8>,
    /// Self-contained preview: a data URL over the unmodified bytes
    pub preview: String,
    /// Decoded pixel width, for the preview caption
    pub width: u32,
    /// Decoded pixel height, for the preview caption
    pub height: u32,
    /// Intake generation, used to drop stale async completions
    pub generation: u64,
}

impl AcceptedImage {
    /// Payload size for the preview caption, e.g. "2.1 MB"
    pub fn size_label(&self) -> String {
        format!("{:.1} MB", self.bytes.len() as f64 / 1024.0 / 1024.0)
    }
}

/// The file could not be read or is not a decodable image
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Could not load the image: {0}")]
pub struct EncodeError(pub String);

/// Encode an accepted file for preview and upload
///
/// Reading and decoding are IO/CPU heavy, so the work runs on the blocking
/// pool while the interface stays responsive.
pub async fn encode(
    path: PathBuf,
    kind: ImageKind,
    generation: u64,
) -> Result<AcceptedImage, EncodeError> {
    task::spawn_blocking(move || encode_blocking(path, kind, generation))
        .await
        .map_err(|e| EncodeError(format!("task join error: {}", e)))?
}

/// Blocking implementation of photo encoding
fn encode_blocking(
    path: PathBuf,
    kind: ImageKind,
    generation: u64,
) -> Result<AcceptedImage, EncodeError> {
    let bytes = std::fs::read(&path).map_err(|e| EncodeError(e.to_string()))?;

    // The preview must stay bit-identical to the source, so the dimension
    // probe decodes a throwaway copy and the original bytes are kept as-is.
    let (width, height) = image::load_from_memory(&bytes)
        .map(|img| img.dimensions())
        .map_err(|e| EncodeError(format!("not a decodable image: {}", e)))?;

    let preview = format!("data:{};base64,{}", kind.mime(), STANDARD.encode(&bytes));

    println!(
        "📸 Encoded {}x{} {} ({} bytes)",
        width,
        height,
        kind.mime(),
        bytes.len()
    );

    Ok(AcceptedImage {
        kind,
        bytes,
        preview,
        width,
        height,
        generation,
    })
}

/// Recover the original bytes from a preview data URL
pub fn preview_bytes(preview: &str) -> Option<Vec<u8>> {
    let (_, payload) = preview.split_once(";base64,")?;
    STANDARD.decode(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// A tiny but fully valid PNG, built through the image crate itself
    fn tiny_png() -> Vec<u8> {
        let pixels = image::RgbaImage::from_pixel(2, 3, image::Rgba([180, 120, 90, 255]));
        let mut cursor = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(pixels)
            .write_to(&mut cursor, image::ImageFormat::Png)
            .expect("encoding a test PNG cannot fail");
        cursor.into_inner()
    }

    fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("derma-lens-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).expect("failed to write test fixture");
        path
    }

    #[tokio::test]
    async fn test_preview_round_trips_to_original_bytes() {
        let source = tiny_png();
        let path = temp_file("roundtrip.png", &source);

        let encoded = encode(path.clone(), ImageKind::Png, 1).await.unwrap();

        assert!(encoded.preview.starts_with("data:image/png;base64,"));
        assert_eq!(preview_bytes(&encoded.preview), Some(source.clone()));
        assert_eq!(encoded.bytes, source);
        assert_eq!((encoded.width, encoded.height), (2, 3));
        assert_eq!(encoded.generation, 1);

        let _ = std::fs::remove_file(path);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_encode_error() {
        let result = encode(PathBuf::from("/nonexistent/photo.jpg"), ImageKind::Jpeg, 1).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_undecodable_bytes_are_an_encode_error() {
        // Right extension, wrong contents
        let path = temp_file("not-an-image.png", b"definitely not a png");
        let result = encode(path.clone(), ImageKind::Png, 1).await;
        assert!(result.is_err());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_preview_bytes_rejects_non_data_urls() {
        assert_eq!(preview_bytes("https://example.com/photo.png"), None);
    }
}
