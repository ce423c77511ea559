//! Resource resolution for upload-style calls
//!
//! Image and audio arguments are plain strings that may name a local file,
//! point at a downloadable image, or already hold base64 data. [`Resolver`]
//! turns any of these into the base64 payload the endpoints expect.

pub mod temp;

pub use temp::{ScratchFile, TempFileAllocator};

use crate::{Error, Result};
use base64::Engine as _;
use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

static IMAGE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^https?://\S+\.(?:jpe?g|bmp|png)$").expect("image URL pattern is valid")
});

/// True when `reference` is an http(s) URL ending in a supported image extension.
pub fn is_image_url(reference: &str) -> bool {
    IMAGE_URL.is_match(reference)
}

/// Byte length of the data a base64 string decodes to.
///
/// Line breaks, spaces and up to two trailing `=` are discounted; the string
/// is not otherwise validated.
pub fn decoded_len(encoded: &str) -> usize {
    let is_wrap = |b: &u8| matches!(b, b'\r' | b'\n' | b' ');
    let data = encoded.bytes().filter(|b| !is_wrap(b)).count();
    let padding = encoded
        .bytes()
        .rev()
        .filter(|b| !is_wrap(b))
        .take_while(|&b| b == b'=')
        .take(2)
        .count();
    (data - padding) * 3 / 4
}

/// What a caller-supplied resource string turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRef {
    LocalPath(PathBuf),
    RemoteUrl(String),
    InlineBase64(String),
}

impl ResourceRef {
    /// Classify `reference`, checking for a local file first, then an image URL.
    pub async fn classify(reference: &str) -> Self {
        let is_file = tokio::fs::metadata(reference)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);

        if is_file {
            ResourceRef::LocalPath(PathBuf::from(reference))
        } else if is_image_url(reference) {
            ResourceRef::RemoteUrl(reference.to_string())
        } else {
            ResourceRef::InlineBase64(reference.to_string())
        }
    }
}

/// Turns resource references into base64 payloads.
#[derive(Debug, Clone)]
pub struct Resolver {
    http: reqwest::Client,
    temp: TempFileAllocator,
}

impl Resolver {
    pub fn new(http: reqwest::Client, temp: TempFileAllocator) -> Self {
        Self { http, temp }
    }

    /// Resolve `reference` to base64.
    ///
    /// Local files are read, image URLs are downloaded through a scratch file,
    /// and anything else is returned unchanged. When `limit` is set, file or
    /// downloaded payloads of `limit` bytes or more fail with
    /// [`Error::PayloadTooLarge`]; pass-through strings are not checked here.
    pub async fn resolve(&self, reference: &str, limit: Option<usize>) -> Result<String> {
        match ResourceRef::classify(reference).await {
            ResourceRef::LocalPath(path) => {
                tracing::debug!("Reading resource from local file {}", path.display());
                let bytes = tokio::fs::read(&path).await.map_err(|e| {
                    Error::Resolution(format!("Failed to read {}: {}", path.display(), e))
                })?;
                encode_within(&bytes, limit)
            }
            ResourceRef::RemoteUrl(url) => {
                tracing::debug!("Downloading resource from {}", url);
                let bytes = self.download(&url, limit).await?;
                encode_within(&bytes, limit)
            }
            ResourceRef::InlineBase64(data) => Ok(data),
        }
    }

    pub fn temp(&self) -> &TempFileAllocator {
        &self.temp
    }

    async fn download(&self, url: &str, limit: Option<usize>) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to download {}: {}", url, e);
            Error::Resolution(format!("Failed to download {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!("Download of {} failed with status {}", url, status);
            return Err(Error::Resolution(format!(
                "Download of {} failed with status {}",
                url, status
            )));
        }

        if let (Some(limit), Some(declared)) = (limit, response.content_length()) {
            let size = usize::try_from(declared).unwrap_or(usize::MAX);
            if size >= limit {
                return Err(Error::PayloadTooLarge { size, limit });
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Resolution(format!("Failed to read body of {}: {}", url, e)))?;

        let scratch = self.temp.scratch();
        let staged = stage(&scratch, &body).await;
        scratch.remove().await;
        staged
    }
}

/// Write `body` to the scratch file and read it back.
async fn stage(scratch: &ScratchFile, body: &[u8]) -> Result<Vec<u8>> {
    tokio::fs::write(scratch.path(), body).await.map_err(|e| {
        Error::Resolution(format!(
            "Failed to write scratch file {}: {}",
            scratch.path().display(),
            e
        ))
    })?;
    tokio::fs::read(scratch.path()).await.map_err(|e| {
        Error::Resolution(format!(
            "Failed to read scratch file {}: {}",
            scratch.path().display(),
            e
        ))
    })
}

fn encode_within(bytes: &[u8], limit: Option<usize>) -> Result<String> {
    if let Some(limit) = limit {
        if bytes.len() >= limit {
            return Err(Error::PayloadTooLarge {
                size: bytes.len(),
                limit,
            });
        }
    }
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}
