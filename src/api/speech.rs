use super::endpoints;
use super::validate;
use crate::client::ApiContext;
use crate::models::ApiResponse;
use crate::resource::decoded_len;
use crate::Result;

/// Audio container accepted by the recognisers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioFormat {
    Pcm,
    #[default]
    Wav,
    Amr,
    Silk,
}

impl AudioFormat {
    fn code(self) -> i64 {
        match self {
            AudioFormat::Pcm => 1,
            AudioFormat::Wav => 2,
            AudioFormat::Amr => 3,
            AudioFormat::Silk => 4,
        }
    }
}

const SAMPLE_RATES: [i64; 2] = [8000, 16000];

/// Text-to-speech options (AI Lab voices).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsRequest {
    pub text: String,
    /// 1 male, 5 gentle female, 6 lively female, 7 clear female.
    pub speaker: i64,
    /// 1 PCM, 2 WAV, 3 MP3.
    pub format: i64,
    pub volume: i64,
    pub speed: i64,
    pub aht: i64,
    pub apc: i64,
}

impl TtsRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        validate::text_bytes("text", &self.text, 150)?;
        validate::one_of("speaker", self.speaker, &[1, 5, 6, 7])?;
        validate::one_of("format", self.format, &[1, 2, 3])?;
        validate::in_range("volume", self.volume, -10..=10)?;
        validate::in_range("speed", self.speed, 50..=200)?;
        validate::in_range("aht", self.aht, -24..=24)?;
        validate::in_range("apc", self.apc, 0..=100)?;
        Ok(())
    }
}

impl Default for TtsRequest {
    fn default() -> Self {
        Self {
            text: String::new(),
            speaker: 1,
            format: 2,
            volume: 0,
            speed: 100,
            aht: 0,
            apc: 58,
        }
    }
}

/// Text-to-speech options (Youtu voices).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TtaRequest {
    pub text: String,
    /// 0 female, 1 female (English), 2 male, -1 female (Cantonese).
    pub model_type: i64,
    /// -2 (0.6x) through 2 (1.5x).
    pub speed: i64,
}

impl TtaRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// One slice of a streamed recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsrChunk {
    /// Local path or base64 of this slice.
    pub speech_chunk: String,
    pub speech_id: String,
    /// Byte offset of this slice within the whole stream.
    pub seq: i64,
    pub end: bool,
    pub format: AudioFormat,
    pub rate: i64,
}

/// Speech synthesis and recognition endpoints.
///
/// Audio arguments may be a local file path or base64; audio URLs are not
/// downloaded.
#[derive(Clone)]
pub struct SpeechClient {
    ctx: ApiContext,
}

impl SpeechClient {
    pub fn from_context(ctx: ApiContext) -> Self {
        Self { ctx }
    }

    pub async fn tts(&self, request: &TtsRequest) -> Result<ApiResponse> {
        request.validate()?;
        let params = self
            .ctx
            .params()
            .with("text", &request.text)
            .with("speaker", request.speaker)
            .with("format", request.format)
            .with("volume", request.volume)
            .with("speed", request.speed)
            .with("aht", request.aht)
            .with("apc", request.apc);
        self.ctx.call(endpoints::AAI_TTS, params).await
    }

    pub async fn tta(&self, request: &TtaRequest) -> Result<ApiResponse> {
        validate::text_bytes("text", &request.text, 300)?;
        validate::one_of("model_type", request.model_type, &[-1, 0, 1, 2])?;
        validate::in_range("speed", request.speed, -2..=2)?;
        let params = self
            .ctx
            .params()
            .with("text", &request.text)
            .with("model_type", request.model_type)
            .with("speed", request.speed);
        self.ctx.call(endpoints::AAI_TTA, params).await
    }

    /// One-shot recognition of a short clip.
    pub async fn asr(&self, speech: &str, format: AudioFormat, rate: i64) -> Result<ApiResponse> {
        validate::one_of("rate", rate, &SAMPLE_RATES)?;
        let speech = self.load_audio("speech", speech).await?;
        let params = self
            .ctx
            .params()
            .with("speech", speech)
            .with("format", format.code())
            .with("rate", rate);
        self.ctx.call(endpoints::AAI_ASR, params).await
    }

    /// Streamed recognition (AI Lab).
    pub async fn asr_stream(&self, chunk: &AsrChunk) -> Result<ApiResponse> {
        let params = self.chunk_params(chunk).await?;
        self.ctx.call(endpoints::AAI_ASRS, params).await
    }

    /// Streamed recognition (WeChat AI). `cont_res` asks for intermediate results.
    pub async fn wx_asr_stream(&self, chunk: &AsrChunk, cont_res: bool) -> Result<ApiResponse> {
        let params = self
            .chunk_params(chunk)
            .await?
            .with("bits", 16)
            .with("cont_res", i64::from(cont_res));
        self.ctx.call(endpoints::AAI_WXASRS, params).await
    }

    async fn chunk_params(&self, chunk: &AsrChunk) -> Result<crate::request::Params> {
        validate::non_empty("speech_id", &chunk.speech_id)?;
        validate::one_of("rate", chunk.rate, &SAMPLE_RATES)?;
        if chunk.seq < 0 {
            return Err(crate::Error::Validation(format!(
                "seq must not be negative, got {}",
                chunk.seq
            )));
        }

        let speech_chunk = self.load_audio("speech_chunk", &chunk.speech_chunk).await?;
        let len = decoded_len(&speech_chunk) as i64;

        Ok(self
            .ctx
            .params()
            .with("format", chunk.format.code())
            .with("rate", chunk.rate)
            .with("seq", chunk.seq)
            .with("len", len)
            .with("end", i64::from(chunk.end))
            .with("speech_id", &chunk.speech_id)
            .with("speech_chunk", speech_chunk))
    }

    async fn load_audio(&self, name: &str, reference: &str) -> Result<String> {
        validate::non_empty(name, reference)?;
        self.ctx.resolve(reference, None).await
    }
}
