use anyhow::{Context, Result};
use base64::Engine as _;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tencent_ai::api::speech::TtsRequest;
use tencent_ai::request::{sign, Params};
use tencent_ai::resource::{Resolver, TempFileAllocator};
use tencent_ai::transport::build_http_client;
use tencent_ai::{ApiResponse, Config, TencentAi};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "tencent-ai")]
#[command(about = "Call Tencent AI open platform endpoints")]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the signature for a set of fields.
    Sign {
        /// Field as key=value; repeatable.
        #[arg(short, long = "param", value_parser = parse_pair)]
        params: Vec<(String, String)>,
        /// Secret to sign with; defaults to TENCENT_AI_APP_KEY.
        #[arg(long)]
        app_key: Option<String>,
    },
    /// Resolve a file path, image URL or base64 string and print the base64.
    Resolve {
        reference: String,
        #[arg(long)]
        limit: Option<usize>,
    },
    Image {
        #[arg(value_enum)]
        action: ImageAction,
        image: String,
    },
    Ocr {
        #[arg(value_enum)]
        action: OcrAction,
        image: String,
    },
    Nlp {
        #[arg(value_enum)]
        action: NlpAction,
        text: String,
    },
    Chat {
        question: String,
        #[arg(long, default_value = "tencent-ai-cli")]
        session: String,
    },
    /// Synthesize speech and write the audio to a file.
    Tts {
        text: String,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long, default_value_t = 1)]
        speaker: i64,
        #[arg(long, default_value_t = 2)]
        format: i64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ImageAction {
    Porn,
    Terrorism,
    Scener,
    Objectr,
    Tag,
    Fuzzy,
    Food,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OcrAction {
    General,
    BusinessCard,
    BizLicense,
    CreditCard,
    Plate,
    Handwriting,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NlpAction {
    Seg,
    Pos,
    Ner,
    Syn,
    Com,
    Polar,
}

fn parse_pair(input: &str) -> std::result::Result<(String, String), String> {
    input
        .split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("Invalid field '{}'. Expected key=value", input))
}

fn print_data(response: &ApiResponse) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&response.data)?);
    Ok(())
}

async fn run(command: Command) -> Result<()> {
    match command {
        Command::Sign { params, app_key } => {
            let app_key = match app_key {
                Some(key) => key,
                None => Config::from_env()?.app_key,
            };
            let params = params
                .into_iter()
                .fold(Params::new(), |acc, (key, value)| acc.with(key, value));
            println!("{}", sign(&params, &app_key)?);
        }
        Command::Resolve { reference, limit } => {
            let config = Config::from_env()?;
            let resolver = Resolver::new(
                build_http_client(&config)?,
                TempFileAllocator::new(&config.scratch_dir),
            );
            println!("{}", resolver.resolve(&reference, limit).await?);
        }
        Command::Image { action, image } => {
            let ai = TencentAi::from_env()?;
            let response = match action {
                ImageAction::Porn => ai.image.porn(image.as_str()).await?,
                ImageAction::Terrorism => ai.image.terrorism(image.as_str()).await?,
                ImageAction::Scener => ai.image.scener(&image, 5).await?,
                ImageAction::Objectr => ai.image.objectr(&image, 5).await?,
                ImageAction::Tag => ai.image.tag(&image).await?,
                ImageAction::Fuzzy => ai.image.fuzzy(&image).await?,
                ImageAction::Food => ai.image.food(&image).await?,
            };
            print_data(&response)?;
        }
        Command::Ocr { action, image } => {
            let ai = TencentAi::from_env()?;
            let response = match action {
                OcrAction::General => ai.ocr.general(&image).await?,
                OcrAction::BusinessCard => ai.ocr.business_card(&image).await?,
                OcrAction::BizLicense => ai.ocr.biz_license(&image).await?,
                OcrAction::CreditCard => ai.ocr.credit_card(&image).await?,
                OcrAction::Plate => ai.ocr.plate(image.as_str()).await?,
                OcrAction::Handwriting => ai.ocr.handwriting(image.as_str()).await?,
            };
            print_data(&response)?;
        }
        Command::Nlp { action, text } => {
            let ai = TencentAi::from_env()?;
            let response = match action {
                NlpAction::Seg => ai.nlp.seg(&text).await?,
                NlpAction::Pos => ai.nlp.pos(&text).await?,
                NlpAction::Ner => ai.nlp.ner(&text).await?,
                NlpAction::Syn => ai.nlp.syn(&text).await?,
                NlpAction::Com => ai.nlp.com(&text).await?,
                NlpAction::Polar => ai.nlp.text_polar(&text).await?,
            };
            print_data(&response)?;
        }
        Command::Chat { question, session } => {
            let ai = TencentAi::from_env()?;
            let response = ai.nlp.text_chat(&question, &session).await?;
            print_data(&response)?;
        }
        Command::Tts {
            text,
            output,
            speaker,
            format,
        } => {
            let ai = TencentAi::from_env()?;
            let request = TtsRequest {
                speaker,
                format,
                ..TtsRequest::new(text)
            };
            let response = ai.speech.tts(&request).await?;
            let speech = response
                .data
                .get("speech")
                .and_then(|s| s.as_str())
                .context("No speech in tts response")?;
            let audio = base64::engine::general_purpose::STANDARD
                .decode(speech)
                .context("Failed to decode tts audio")?;
            tokio::fs::write(&output, audio).await?;
            info!("Wrote audio to {}", output.display());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tencent_ai=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = CliArgs::parse();

    match run(args.command).await {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("Request failed: {:#}", e);
            std::process::exit(1);
        }
    }
}
