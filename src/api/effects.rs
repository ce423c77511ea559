use super::validate::{self, KB_500, MB};
use super::{endpoints, load_payload};
use crate::client::ApiContext;
use crate::models::ApiResponse;
use crate::Result;
use std::ops::RangeInclusive;

/// Face and filter effects. Source images are capped at 500 KB except for
/// [`EffectsClient::vision_filter`], which accepts up to 1 MB.
#[derive(Clone)]
pub struct EffectsClient {
    ctx: ApiContext,
}

impl EffectsClient {
    pub fn from_context(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// Face makeup, `cosmetic` in 1-23.
    pub async fn face_cosmetic(&self, image: &str, cosmetic: i64) -> Result<ApiResponse> {
        self.coded(endpoints::PTU_FACE_COSMETIC, image, "cosmetic", cosmetic, 1..=23)
            .await
    }

    /// Face costume, `decoration` in 1-22.
    pub async fn face_decoration(&self, image: &str, decoration: i64) -> Result<ApiResponse> {
        self.coded(
            endpoints::PTU_FACE_DECORATION,
            image,
            "decoration",
            decoration,
            1..=22,
        )
        .await
    }

    /// P-Tu filter, `filter` in 1-32.
    pub async fn ptu_filter(&self, image: &str, filter: i64) -> Result<ApiResponse> {
        self.coded(endpoints::PTU_IMG_FILTER, image, "filter", filter, 1..=32)
            .await
    }

    /// AI Lab filter, `filter` in 1-65.
    pub async fn vision_filter(
        &self,
        image: &str,
        filter: i64,
        session_id: &str,
    ) -> Result<ApiResponse> {
        validate::in_range("filter", filter, 1..=65)?;
        validate::text_bytes("session_id", session_id, 64)?;
        let image = load_payload(&self.ctx, "image", image, MB).await?;
        let params = self
            .ctx
            .params()
            .with("image", image)
            .with("filter", filter)
            .with("session_id", session_id);
        self.ctx.call(endpoints::VISION_IMG_FILTER, params).await
    }

    /// Face merge against template `model` in 1-50.
    pub async fn face_merge(&self, image: &str, model: i64) -> Result<ApiResponse> {
        self.coded(endpoints::PTU_FACE_MERGE, image, "model", model, 1..=50)
            .await
    }

    /// Photo sticker, `sticker` in 1-31.
    pub async fn face_sticker(&self, image: &str, sticker: i64) -> Result<ApiResponse> {
        self.coded(endpoints::PTU_FACE_STICKER, image, "sticker", sticker, 1..=31)
            .await
    }

    pub async fn face_age(&self, image: &str) -> Result<ApiResponse> {
        let image = load_payload(&self.ctx, "image", image, KB_500).await?;
        self.ctx
            .call(endpoints::PTU_FACE_AGE, self.ctx.params().with("image", image))
            .await
    }

    async fn coded(
        &self,
        endpoint: &str,
        image: &str,
        field: &str,
        code: i64,
        range: RangeInclusive<i64>,
    ) -> Result<ApiResponse> {
        validate::in_range(field, code, range)?;
        let image = load_payload(&self.ctx, "image", image, KB_500).await?;
        let params = self.ctx.params().with("image", image).with(field, code);
        self.ctx.call(endpoint, params).await
    }
}
