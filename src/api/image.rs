use super::validate::{self, MB};
use super::{endpoints, load_payload, with_image_source, ImageSource};
use crate::client::ApiContext;
use crate::models::ApiResponse;
use crate::Result;

/// Recognition target for [`ImageClient::identify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifyScene {
    #[default]
    Vehicle,
    Flower,
}

impl IdentifyScene {
    fn code(self) -> i64 {
        match self {
            IdentifyScene::Vehicle => 1,
            IdentifyScene::Flower => 2,
        }
    }
}

/// Only JPEG is accepted by the scene and object recognisers.
const FORMAT_JPG: i64 = 1;

/// Image recognition endpoints. Images must be smaller than 1 MB.
#[derive(Clone)]
pub struct ImageClient {
    ctx: ApiContext,
}

impl ImageClient {
    pub fn from_context(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// Adult-content detection.
    pub async fn porn(&self, source: impl Into<ImageSource>) -> Result<ApiResponse> {
        let params = with_image_source(&self.ctx, self.ctx.params(), &source.into(), MB).await?;
        self.ctx.call(endpoints::VISION_PORN, params).await
    }

    /// Violence and terrorism detection.
    pub async fn terrorism(&self, source: impl Into<ImageSource>) -> Result<ApiResponse> {
        let params = with_image_source(&self.ctx, self.ctx.params(), &source.into(), MB).await?;
        self.ctx.call(endpoints::IMAGE_TERRORISM, params).await
    }

    /// Scene recognition, returning up to `topk` (1-5) labels.
    pub async fn scener(&self, image: &str, topk: i64) -> Result<ApiResponse> {
        self.ranked(endpoints::VISION_SCENER, image, topk).await
    }

    /// Object recognition, returning up to `topk` (1-5) labels.
    pub async fn objectr(&self, image: &str, topk: i64) -> Result<ApiResponse> {
        self.ranked(endpoints::VISION_OBJECTR, image, topk).await
    }

    async fn ranked(&self, endpoint: &str, image: &str, topk: i64) -> Result<ApiResponse> {
        validate::in_range("topk", topk, 1..=5)?;
        let image = load_payload(&self.ctx, "image", image, MB).await?;
        let params = self
            .ctx
            .params()
            .with("image", image)
            .with("format", FORMAT_JPG)
            .with("topk", topk);
        self.ctx.call(endpoint, params).await
    }

    pub async fn tag(&self, image: &str) -> Result<ApiResponse> {
        self.image_only(endpoints::IMAGE_TAG, image).await
    }

    pub async fn identify(&self, image: &str, scene: IdentifyScene) -> Result<ApiResponse> {
        let image = load_payload(&self.ctx, "image", image, MB).await?;
        let params = self
            .ctx
            .params()
            .with("image", image)
            .with("scene", scene.code());
        self.ctx.call(endpoints::VISION_IMGIDENTIFY, params).await
    }

    /// Describe the image in one sentence. `session_id` is at most 64 bytes.
    pub async fn to_text(&self, image: &str, session_id: &str) -> Result<ApiResponse> {
        validate::text_bytes("session_id", session_id, 64)?;
        let image = load_payload(&self.ctx, "image", image, MB).await?;
        let params = self
            .ctx
            .params()
            .with("image", image)
            .with("session_id", session_id);
        self.ctx.call(endpoints::VISION_IMGTOTEXT, params).await
    }

    pub async fn fuzzy(&self, image: &str) -> Result<ApiResponse> {
        self.image_only(endpoints::IMAGE_FUZZY, image).await
    }

    pub async fn food(&self, image: &str) -> Result<ApiResponse> {
        self.image_only(endpoints::IMAGE_FOOD, image).await
    }

    async fn image_only(&self, endpoint: &str, image: &str) -> Result<ApiResponse> {
        let image = load_payload(&self.ctx, "image", image, MB).await?;
        self.ctx
            .call(endpoint, self.ctx.params().with("image", image))
            .await
    }
}
