//! Endpoint clients, one per service category.
//!
//! Each method checks its arguments locally, resolves any image or audio
//! reference, merges the common fields with its own and hands the result to
//! the transport. A failed local check never reaches the network.

pub mod effects;
pub mod endpoints;
pub mod image;
pub mod nlp;
pub mod ocr;
pub mod speech;
pub mod validate;

pub use effects::EffectsClient;
pub use image::{IdentifyScene, ImageClient};
pub use nlp::NlpClient;
pub use ocr::{IdCardSide, LicenseKind, OcrClient};
pub use speech::{AsrChunk, AudioFormat, SpeechClient, TtaRequest, TtsRequest};

use crate::client::ApiContext;
use crate::request::Params;
use crate::resource::is_image_url;
use crate::Result;

/// An image argument that is either uploaded or fetched by the service itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Local path, downloadable image URL or base64; resolved before sending.
    Data(String),
    /// Sent as `image_url` for the service to fetch.
    Url(String),
}

impl ImageSource {
    pub fn data(reference: impl Into<String>) -> Self {
        ImageSource::Data(reference.into())
    }

    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url(url.into())
    }

    /// Treat image URLs as service-fetched and everything else as data.
    pub fn detect(reference: &str) -> Self {
        if is_image_url(reference) {
            ImageSource::Url(reference.to_string())
        } else {
            ImageSource::Data(reference.to_string())
        }
    }
}

impl From<&str> for ImageSource {
    fn from(reference: &str) -> Self {
        ImageSource::Data(reference.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(reference: String) -> Self {
        ImageSource::Data(reference)
    }
}

/// Resolve `reference` and check the payload stays below `limit` bytes.
pub(crate) async fn load_payload(
    ctx: &ApiContext,
    name: &str,
    reference: &str,
    limit: usize,
) -> Result<String> {
    validate::non_empty(name, reference)?;
    let encoded = ctx.resolve(reference, Some(limit)).await?;
    validate::encoded_below(name, &encoded, limit)?;
    Ok(encoded)
}

/// Add `image` or `image_url` to `params` depending on the source.
pub(crate) async fn with_image_source(
    ctx: &ApiContext,
    params: Params,
    source: &ImageSource,
    limit: usize,
) -> Result<Params> {
    match source {
        ImageSource::Data(reference) => {
            let image = load_payload(ctx, "image", reference, limit).await?;
            Ok(params.with("image", image))
        }
        ImageSource::Url(url) => {
            validate::http_url("image_url", url)?;
            Ok(params.with("image_url", url.as_str()))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_image_source() {
        assert_eq!(
            ImageSource::detect("https://example.com/plate.jpg"),
            ImageSource::Url("https://example.com/plate.jpg".to_string())
        );
        assert_eq!(
            ImageSource::detect("/tmp/plate.jpg"),
            ImageSource::Data("/tmp/plate.jpg".to_string())
        );
    }
}
