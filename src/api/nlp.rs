use super::validate::{self, MB};
use super::{endpoints, load_payload};
use crate::client::ApiContext;
use crate::models::ApiResponse;
use crate::Result;

const MAX_TEXT_BYTES: usize = 1024;

/// Natural language endpoints.
///
/// The word-level analysers (`seg`, `pos`, `ner`, `syn`, `com`) expect GBK
/// text on the service side; strings are sent as given.
#[derive(Clone)]
pub struct NlpClient {
    ctx: ApiContext,
}

impl NlpClient {
    pub fn from_context(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    /// Word segmentation.
    pub async fn seg(&self, text: &str) -> Result<ApiResponse> {
        self.text_only(endpoints::NLP_WORDSEG, text).await
    }

    /// Part-of-speech tagging.
    pub async fn pos(&self, text: &str) -> Result<ApiResponse> {
        self.text_only(endpoints::NLP_WORDPOS, text).await
    }

    /// Named entity recognition.
    pub async fn ner(&self, text: &str) -> Result<ApiResponse> {
        self.text_only(endpoints::NLP_WORDNER, text).await
    }

    /// Synonym lookup.
    pub async fn syn(&self, text: &str) -> Result<ApiResponse> {
        self.text_only(endpoints::NLP_WORDSYN, text).await
    }

    /// Intent and slot parsing.
    pub async fn com(&self, text: &str) -> Result<ApiResponse> {
        self.text_only(endpoints::NLP_WORDCOM, text).await
    }

    /// Sentiment polarity.
    pub async fn text_polar(&self, text: &str) -> Result<ApiResponse> {
        self.text_only(endpoints::NLP_TEXTPOLAR, text).await
    }

    /// Small-talk chat. `question` is at most 300 bytes, `session` at most 32.
    pub async fn text_chat(&self, question: &str, session: &str) -> Result<ApiResponse> {
        validate::text_bytes("question", question, 300)?;
        validate::text_bytes("session", session, 32)?;
        let params = self
            .ctx
            .params()
            .with("question", question)
            .with("session", session);
        self.ctx.call(endpoints::NLP_TEXTCHAT, params).await
    }

    /// Translate `text` from `source` to `target` language codes (e.g. `zh`, `en`).
    pub async fn text_translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<ApiResponse> {
        validate::text_bytes("text", text, MAX_TEXT_BYTES)?;
        validate::non_empty("source", source)?;
        validate::non_empty("target", target)?;
        let params = self
            .ctx
            .params()
            .with("text", text)
            .with("source", source)
            .with("target", target);
        self.ctx.call(endpoints::NLP_TEXTTRANSLATE, params).await
    }

    /// Detect the language of `text`.
    ///
    /// `candidate_langs` restricts the answer (e.g. `["zh", "en", "jp"]`);
    /// `force` makes the service pick one of them even on low confidence.
    pub async fn text_detect(
        &self,
        text: &str,
        candidate_langs: &[&str],
        force: bool,
    ) -> Result<ApiResponse> {
        validate::text_bytes("text", text, MAX_TEXT_BYTES)?;
        let mut params = self
            .ctx
            .params()
            .with("text", text)
            .with("force", i64::from(force));
        if !candidate_langs.is_empty() {
            params.insert("candidate_langs", candidate_langs.join("|"));
        }
        self.ctx.call(endpoints::NLP_TEXTDETECT, params).await
    }

    /// OCR and translate the text in an image.
    ///
    /// `scene` is `word` for single words or `doc` for whole documents.
    pub async fn image_translate(
        &self,
        image: &str,
        session_id: &str,
        scene: &str,
        source: &str,
        target: &str,
    ) -> Result<ApiResponse> {
        validate::text_bytes("session_id", session_id, 64)?;
        if scene != "word" && scene != "doc" {
            return Err(crate::Error::Validation(format!(
                "scene must be 'word' or 'doc', got '{}'",
                scene
            )));
        }
        validate::non_empty("source", source)?;
        validate::non_empty("target", target)?;
        let image = load_payload(&self.ctx, "image", image, MB).await?;
        let params = self
            .ctx
            .params()
            .with("image", image)
            .with("session_id", session_id)
            .with("scene", scene)
            .with("source", source)
            .with("target", target);
        self.ctx.call(endpoints::NLP_IMAGETRANSLATE, params).await
    }

    async fn text_only(&self, endpoint: &str, text: &str) -> Result<ApiResponse> {
        validate::text_bytes("text", text, MAX_TEXT_BYTES)?;
        self.ctx
            .call(endpoint, self.ctx.params().with("text", text))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{int, mock_context, text, PNG_B64};
    use crate::transport::MockTransport;
    use crate::Error;

    fn client() -> (NlpClient, MockTransport) {
        let (ctx, transport) = mock_context();
        (NlpClient::from_context(ctx), transport)
    }

    #[tokio::test]
    async fn test_word_endpoints_send_text() {
        let (client, transport) = client();

        client.seg("中国 人啊，a c !  hello word").await.unwrap();
        client.pos("腾讯人工智能").await.unwrap();
        client.ner("最近张学友在深圳开了一场演唱会").await.unwrap();
        client.syn("今天的天气怎么样").await.unwrap();
        client.com("今天深圳的天气怎么样？明天呢").await.unwrap();
        client.text_polar("今天的天气不错呀!()english").await.unwrap();

        let calls = transport.get_calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0].endpoint, endpoints::NLP_WORDSEG);
        assert_eq!(text(&calls[1], "text"), "腾讯人工智能");
        assert_eq!(calls[5].endpoint, endpoints::NLP_TEXTPOLAR);
    }

    #[tokio::test]
    async fn test_empty_or_long_text_rejected() {
        let (client, transport) = client();

        assert!(matches!(client.seg("").await, Err(Error::Validation(_))));
        assert!(matches!(
            client.pos(&"字".repeat(400)).await,
            Err(Error::Validation(_))
        ));
        assert_eq!(transport.get_call_count(), 0);
    }

    #[tokio::test]
    async fn test_text_chat_fields_and_limits() {
        let (client, transport) = client();

        client.text_chat("今天的天气不错呀?!()", "test").await.unwrap();
        let call = transport.last_call().unwrap();
        assert_eq!(call.endpoint, endpoints::NLP_TEXTCHAT);
        assert_eq!(text(&call, "question"), "今天的天气不错呀?!()");
        assert_eq!(text(&call, "session"), "test");

        assert!(client.text_chat("hi", &"s".repeat(33)).await.is_err());
        assert!(client.text_chat("", "test").await.is_err());
        assert_eq!(transport.get_call_count(), 1);
    }

    #[tokio::test]
    async fn test_text_detect_joins_candidates() {
        let (client, transport) = client();

        client
            .text_detect("hello", &["zh", "en", "jp"], true)
            .await
            .unwrap();

        let call = transport.last_call().unwrap();
        assert_eq!(text(&call, "candidate_langs"), "zh|en|jp");
        assert_eq!(int(&call, "force"), 1);

        client.text_detect("hello", &[], false).await.unwrap();
        let call = transport.last_call().unwrap();
        assert!(!call.params.contains_key("candidate_langs"));
        assert_eq!(int(&call, "force"), 0);
    }

    #[tokio::test]
    async fn test_text_translate() {
        let (client, transport) = client();

        client.text_translate("你好", "zh", "en").await.unwrap();
        let call = transport.last_call().unwrap();
        assert_eq!(call.endpoint, endpoints::NLP_TEXTTRANSLATE);
        assert_eq!(text(&call, "target"), "en");

        assert!(client.text_translate("你好", "", "en").await.is_err());
    }

    #[tokio::test]
    async fn test_image_translate_validates_scene() {
        let (client, transport) = client();

        assert!(matches!(
            client
                .image_translate(PNG_B64, "sid", "page", "zh", "en")
                .await,
            Err(Error::Validation(_))
        ));

        client
            .image_translate(PNG_B64, "sid", "doc", "zh", "en")
            .await
            .unwrap();
        let call = transport.last_call().unwrap();
        assert_eq!(call.endpoint, endpoints::NLP_IMAGETRANSLATE);
        assert_eq!(text(&call, "scene"), "doc");
        assert_eq!(transport.get_call_count(), 1);
    }
}
