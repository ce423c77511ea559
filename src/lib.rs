//! Async client for the Tencent AI open platform (ai.qq.com)
//!
//! Wraps the image recognition, OCR, image effect, NLP and speech endpoints
//! as typed methods. Every call is checked locally, has its image or audio
//! argument resolved to base64, and is signed before it is posted.

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod request;
pub mod resource;
pub mod transport;

pub use client::{ApiContext, TencentAi};
pub use error::{Error, Result};
pub use models::{ApiResponse, Config};
