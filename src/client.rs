//! Client construction shared by every endpoint group.

use crate::api::{EffectsClient, ImageClient, NlpClient, OcrClient, SpeechClient};
use crate::models::{ApiResponse, Config};
use crate::request::Params;
use crate::resource::{Resolver, TempFileAllocator};
use crate::transport::{build_http_client, HttpTransport, Transport};
use crate::Result;
use std::sync::Arc;

/// Configuration, transport and resolver handed to each endpoint client.
#[derive(Clone)]
pub struct ApiContext {
    config: Arc<Config>,
    transport: Arc<dyn Transport>,
    resolver: Resolver,
}

impl ApiContext {
    /// Build a context that talks to the live service.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let http = build_http_client(&config)?;
        let transport = HttpTransport::new_with_client(config.base_url.clone(), http.clone());
        let resolver = Resolver::new(http, TempFileAllocator::new(&config.scratch_dir));

        Ok(Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
            resolver,
        })
    }

    /// Build a context around a caller-supplied transport.
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let resolver = Resolver::new(
            build_http_client(&config)?,
            TempFileAllocator::new(&config.scratch_dir),
        );

        Ok(Self {
            config: Arc::new(config),
            transport,
            resolver,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    pub(crate) fn params(&self) -> Params {
        Params::common(&self.config.app_id)
    }

    pub(crate) async fn resolve(&self, reference: &str, limit: Option<usize>) -> Result<String> {
        self.resolver.resolve(reference, limit).await
    }

    pub(crate) async fn call(&self, endpoint: &str, params: Params) -> Result<ApiResponse> {
        self.transport
            .request(endpoint, &self.config.app_key, params)
            .await
    }
}

/// All endpoint groups behind one configuration.
#[derive(Clone)]
pub struct TencentAi {
    pub image: ImageClient,
    pub ocr: OcrClient,
    pub effects: EffectsClient,
    pub nlp: NlpClient,
    pub speech: SpeechClient,
}

impl TencentAi {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::from_context(ApiContext::new(config)?))
    }

    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        Ok(Self::from_context(ApiContext::with_transport(
            config, transport,
        )?))
    }

    pub fn from_context(context: ApiContext) -> Self {
        Self {
            image: ImageClient::from_context(context.clone()),
            ocr: OcrClient::from_context(context.clone()),
            effects: EffectsClient::from_context(context.clone()),
            nlp: NlpClient::from_context(context.clone()),
            speech: SpeechClient::from_context(context),
        }
    }
}
