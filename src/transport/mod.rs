//! Signed HTTP transport
//!
//! Sends one signed request per call to the Tencent AI open platform and
//! decodes the `{ret, msg, data}` envelope.

pub mod client;
pub mod mock;

pub use client::{build_http_client, HttpTransport};
pub use mock::{MockTransport, RecordedCall};

use crate::models::ApiResponse;
use crate::request::Params;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Sign `params` with `app_key` and post them to `endpoint`.
    ///
    /// Responses with a non-zero `ret` are returned as [`crate::Error::Remote`].
    async fn request(&self, endpoint: &str, app_key: &str, params: Params)
        -> Result<ApiResponse>;
}
