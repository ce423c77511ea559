use super::validate::MB;
use super::{endpoints, load_payload, with_image_source, ImageSource};
use crate::client::ApiContext;
use crate::models::ApiResponse;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdCardSide {
    #[default]
    Front,
    Back,
}

/// Which document [`OcrClient::driver_license`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LicenseKind {
    /// Vehicle registration (行驶证).
    Vehicle,
    /// Driving licence (驾驶证).
    #[default]
    Driver,
}

/// OCR endpoints. Source images are JPG, PNG or BMP, smaller than 1 MB.
#[derive(Clone)]
pub struct OcrClient {
    ctx: ApiContext,
}

impl OcrClient {
    pub fn from_context(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn id_card(&self, image: &str, side: IdCardSide) -> Result<ApiResponse> {
        let card_type = match side {
            IdCardSide::Front => 0,
            IdCardSide::Back => 1,
        };
        self.image_with(endpoints::OCR_IDCARD, image, Some(("card_type", card_type)))
            .await
    }

    pub async fn business_card(&self, image: &str) -> Result<ApiResponse> {
        self.image_with(endpoints::OCR_BUSINESS_CARD, image, None)
            .await
    }

    pub async fn driver_license(&self, image: &str, kind: LicenseKind) -> Result<ApiResponse> {
        let code = match kind {
            LicenseKind::Vehicle => 0,
            LicenseKind::Driver => 1,
        };
        self.image_with(endpoints::OCR_DRIVER_LICENSE, image, Some(("type", code)))
            .await
    }

    pub async fn biz_license(&self, image: &str) -> Result<ApiResponse> {
        self.image_with(endpoints::OCR_BIZ_LICENSE, image, None).await
    }

    pub async fn credit_card(&self, image: &str) -> Result<ApiResponse> {
        self.image_with(endpoints::OCR_CREDIT_CARD, image, None).await
    }

    pub async fn general(&self, image: &str) -> Result<ApiResponse> {
        self.image_with(endpoints::OCR_GENERAL, image, None).await
    }

    /// Licence plate recognition. URL sources are fetched by the service.
    pub async fn plate(&self, source: impl Into<ImageSource>) -> Result<ApiResponse> {
        let params = with_image_source(&self.ctx, self.ctx.params(), &source.into(), MB).await?;
        self.ctx.call(endpoints::OCR_PLATE, params).await
    }

    /// Handwriting recognition. URL sources are fetched by the service.
    pub async fn handwriting(&self, source: impl Into<ImageSource>) -> Result<ApiResponse> {
        let params = with_image_source(&self.ctx, self.ctx.params(), &source.into(), MB).await?;
        self.ctx.call(endpoints::OCR_HANDWRITING, params).await
    }

    async fn image_with(
        &self,
        endpoint: &str,
        image: &str,
        extra: Option<(&str, i64)>,
    ) -> Result<ApiResponse> {
        let image = load_payload(&self.ctx, "image", image, MB).await?;
        let mut params = self.ctx.params().with("image", image);
        if let Some((key, value)) = extra {
            params.insert(key, value);
        }
        self.ctx.call(endpoint, params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{b64_of_size, int, mock_context, text, PNG_B64};
    use crate::transport::MockTransport;
    use crate::Error;

    fn client() -> (OcrClient, MockTransport) {
        let (ctx, transport) = mock_context();
        (OcrClient::from_context(ctx), transport)
    }

    #[tokio::test]
    async fn test_id_card_side_codes() {
        let (client, transport) = client();

        client.id_card(PNG_B64, IdCardSide::Back).await.unwrap();
        let call = transport.last_call().unwrap();
        assert_eq!(call.endpoint, endpoints::OCR_IDCARD);
        assert_eq!(int(&call, "card_type"), 1);

        client.id_card(PNG_B64, IdCardSide::Front).await.unwrap();
        assert_eq!(int(&transport.last_call().unwrap(), "card_type"), 0);
    }

    #[tokio::test]
    async fn test_driver_license_type() {
        let (client, transport) = client();

        client
            .driver_license(PNG_B64, LicenseKind::default())
            .await
            .unwrap();
        assert_eq!(int(&transport.last_call().unwrap(), "type"), 1);

        client
            .driver_license(PNG_B64, LicenseKind::Vehicle)
            .await
            .unwrap();
        assert_eq!(int(&transport.last_call().unwrap(), "type"), 0);
    }

    #[tokio::test]
    async fn test_image_only_endpoints() {
        let (client, transport) = client();

        client.business_card(PNG_B64).await.unwrap();
        client.biz_license(PNG_B64).await.unwrap();
        client.credit_card(PNG_B64).await.unwrap();
        client.general(PNG_B64).await.unwrap();

        let seen: Vec<String> = transport
            .get_calls()
            .into_iter()
            .map(|c| c.endpoint)
            .collect();
        assert_eq!(
            seen,
            vec![
                endpoints::OCR_BUSINESS_CARD,
                endpoints::OCR_BIZ_LICENSE,
                endpoints::OCR_CREDIT_CARD,
                endpoints::OCR_GENERAL,
            ]
        );
    }

    #[tokio::test]
    async fn test_plate_url_detected() {
        let (client, transport) = client();

        client
            .plate(ImageSource::detect("https://example.com/car.png"))
            .await
            .unwrap();

        let call = transport.last_call().unwrap();
        assert_eq!(text(&call, "image_url"), "https://example.com/car.png");
        assert!(!call.params.contains_key("image"));
    }

    #[tokio::test]
    async fn test_handwriting_inline_payload() {
        let (client, transport) = client();

        client.handwriting(PNG_B64).await.unwrap();

        let call = transport.last_call().unwrap();
        assert_eq!(call.endpoint, endpoints::OCR_HANDWRITING);
        assert_eq!(text(&call, "image"), PNG_B64);
    }

    #[tokio::test]
    async fn test_rejects_empty_and_oversized_images() {
        let (client, transport) = client();

        assert!(matches!(client.general("").await, Err(Error::Validation(_))));
        assert!(matches!(
            client.general(&b64_of_size(MB + 10)).await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            client.plate(ImageSource::url("ftp://example.com/a.png")).await,
            Err(Error::Validation(_))
        ));
        assert_eq!(transport.get_call_count(), 0);
    }
}
