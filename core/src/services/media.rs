//! Base64 image intake and the blob store boundary.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

use crate::errors::{DomainResult, ValidationError};

/// File extension given to every converted image
pub const IMAGE_EXTENSION: &str = "jpg";

/// Where decoded images end up
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Write `bytes` under a fresh random name and return a URL that serves them
    async fn put(&self, bytes: &[u8], extension: &str) -> DomainResult<String>;
}

/// Append `=` until the length is a multiple of four
pub fn pad_base64(encoded: &str) -> String {
    let missing = (4 - encoded.len() % 4) % 4;
    let mut padded = String::with_capacity(encoded.len() + missing);
    padded.push_str(encoded);
    padded.extend(std::iter::repeat('=').take(missing));
    padded
}

/// Decode standard base64, tolerating missing padding
///
/// `field` names the input in the validation error.
pub fn decode_base64_lenient(field: &str, encoded: &str) -> Result<Vec<u8>, ValidationError> {
    let trimmed = encoded.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(field));
    }
    STANDARD
        .decode(pad_base64(trimmed))
        .map_err(|_| ValidationError::invalid_format(field))
}

/// Turns uploaded base64 images into stored files
pub struct MediaService<B: BlobStore + ?Sized> {
    store: Arc<B>,
}

impl<B: BlobStore + ?Sized> MediaService<B> {
    pub fn new(store: Arc<B>) -> Self {
        Self { store }
    }

    /// Decode `encoded` and store it as a `.jpg`, returning its public URL
    pub async fn convert_image(&self, encoded: &str) -> DomainResult<String> {
        let bytes = decode_base64_lenient("Hax_Value", encoded)?;
        let url = self.store.put(&bytes, IMAGE_EXTENSION).await?;
        tracing::info!(bytes = bytes.len(), url = %url, event = "image_converted", "Stored converted image");
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        stored: Mutex<Vec<(Vec<u8>, String)>>,
    }

    #[async_trait]
    impl BlobStore for RecordingStore {
        async fn put(&self, bytes: &[u8], extension: &str) -> DomainResult<String> {
            let mut stored = self.stored.lock().unwrap();
            stored.push((bytes.to_vec(), extension.to_string()));
            Ok(format!("http://localhost:8000/static/{}.{}", stored.len(), extension))
        }
    }

    #[test]
    fn test_pad_base64() {
        assert_eq!(pad_base64("aGk"), "aGk=");
        assert_eq!(pad_base64("aA"), "aA==");
        assert_eq!(pad_base64("aGVsbG8h"), "aGVsbG8h");
        assert_eq!(pad_base64(""), "");
    }

    #[test]
    fn test_decode_lenient() {
        assert_eq!(decode_base64_lenient("photo", "aGk").unwrap(), b"hi".to_vec());
        assert_eq!(decode_base64_lenient("photo", "aGk=").unwrap(), b"hi".to_vec());
        assert_eq!(
            decode_base64_lenient("photo", "***"),
            Err(ValidationError::invalid_format("photo"))
        );
        assert_eq!(
            decode_base64_lenient("photo", "  "),
            Err(ValidationError::required("photo"))
        );
    }

    #[tokio::test]
    async fn test_convert_image_stores_jpg() {
        let store = Arc::new(RecordingStore::default());
        let service = MediaService::new(store.clone());

        let url = service.convert_image("/9j/4AAQ").await.unwrap();

        assert_eq!(url, "http://localhost:8000/static/1.jpg");
        let stored = store.stored.lock().unwrap();
        assert_eq!(stored[0].0, vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
        assert_eq!(stored[0].1, "jpg");
    }

    #[tokio::test]
    async fn test_convert_image_rejects_garbage() {
        let service = MediaService::new(Arc::new(RecordingStore::default()));
        assert!(matches!(
            service.convert_image("not base64!").await,
            Err(DomainError::ValidationErr(ValidationError::InvalidFormat { .. }))
        ));
    }
}
