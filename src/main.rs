//! Terminal driver for a simulated interview.
//!
//! Reads the activity description and then one answer per line from stdin,
//! printing each question to stdout. Logs go to stderr.

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use inquiry_interview::adapters::renderer::{
    AnthropicQuestionRenderer, AnthropicRendererConfig, ResilientQuestionRenderer,
    TemplateQuestionRenderer,
};
use inquiry_interview::application::{
    ConductTurnCommand, ConductTurnError, ConductTurnHandler, StartInterviewCommand,
    StartInterviewHandler,
};
use inquiry_interview::config::{
    AppConfig, LoggingConfig, RendererConfig, RendererProvider, ValidationError,
};
use inquiry_interview::domain::interview::{InterviewEngine, QuestionCatalog};
use inquiry_interview::ports::QuestionRenderer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging);

    let catalog = match &config.interview.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading question catalog");
            QuestionCatalog::from_path(path)?
        }
        None => QuestionCatalog::builtin().clone(),
    };
    let engine = Arc::new(InterviewEngine::new(
        Arc::new(catalog),
        config.interview.thresholds(),
    ));
    let renderer = build_renderer(&config.renderer)?;
    info!(renderer = renderer.name(), "renderer ready");

    let start = StartInterviewHandler::new(engine.clone(), renderer.clone());
    let turns = ConductTurnHandler::new(engine, renderer);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    stdout
        .write_all(b"Describe the inquiry activity you want to talk about:\n> ")
        .await?;
    stdout.flush().await?;

    let Some(activity) = lines.next_line().await? else {
        return Ok(());
    };

    let started = start
        .handle(StartInterviewCommand { activity })
        .await?;
    let mut session = started.session;
    let mut question = started.question;

    loop {
        let prompt = format!("\n[{}] {}\n> ", session.phase(), question.text);
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let Some(answer) = lines.next_line().await? else {
            break;
        };

        let cmd = ConductTurnCommand {
            question_id: question.question_id.clone(),
            answer,
        };
        let result = match turns.handle(&mut session, cmd).await {
            Ok(result) => result,
            Err(ConductTurnError::Renderer(err)) => {
                warn!(error = %err, "render failed, asking again");
                turns.resume(&mut session).await?
            }
            Err(err) => return Err(err.into()),
        };

        match result.question {
            Some(next) => question = next,
            None => {
                stdout
                    .write_all(b"\nThank you, that concludes the interview.\n")
                    .await?;
                break;
            }
        }
    }

    info!(
        session_id = %session.id(),
        turns = session.transcript().len(),
        finished = session.is_finished(),
        elapsed_secs = session.elapsed_secs(),
        "interview ended"
    );
    Ok(())
}

fn init_tracing(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

fn build_renderer(config: &RendererConfig) -> Result<Arc<dyn QuestionRenderer>, Box<dyn Error>> {
    match config.provider {
        RendererProvider::Template => Ok(Arc::new(TemplateQuestionRenderer::new())),
        RendererProvider::Anthropic => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .ok_or(ValidationError::MissingRequired("ANTHROPIC_API_KEY"))?;

            // HTTP timeout sits above the wrapper's so the wrapper decides.
            let anthropic = AnthropicRendererConfig::new(api_key)
                .with_model(config.model.clone())
                .with_base_url(config.base_url.clone())
                .with_timeout(config.timeout() + Duration::from_secs(1));
            let primary = Arc::new(AnthropicQuestionRenderer::new(anthropic)?);

            Ok(Arc::new(
                ResilientQuestionRenderer::new(primary, TemplateQuestionRenderer::new())
                    .with_timeout(config.timeout()),
            ))
        }
    }
}
