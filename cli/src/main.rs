//! CLI entrypoint for consultation-assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use consult_application::{
    Entitlement, OutputRenderer, StreamingClient, SubmissionController, SubmitError,
};
use consult_domain::{ConsultationForm, SessionStatus};
use consult_infrastructure::{
    ConfigLoader, FileConfig, HttpConsultationTransport, Severity, gate_from_config,
    token_provider_from_config,
};
use consult_presentation::{Cli, ConsoleRenderer, OutcomeFormatter, UpsellView};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const EXIT_FAILED: u8 = 1;
const EXIT_NOT_ENTITLED: u8 = 2;
const EXIT_CANCELLED: u8 = 130;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    info!("Starting consultation-assistant");

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    if cli.show_config {
        println!("{}", ConfigLoader::describe_config_sources());
        println!("{}", ConfigLoader::render(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    report_config_issues(&config)?;

    // === Authorization gate ===
    let gate = gate_from_config(&config.entitlement);
    let Some(entitlement) = Entitlement::check(&gate) else {
        info!(required_plan = gate.required_plan(), "Account lacks the required plan");
        print!("{}", UpsellView::render(gate.required_plan()));
        return Ok(ExitCode::from(EXIT_NOT_ENTITLED));
    };

    // === Form ===
    let mut form = ConsultationForm::new()
        .with_patient_name(cli.patient.clone().unwrap_or_default())
        .with_notes(read_notes(&cli)?);
    if let Some(date) = &cli.date {
        form = form.with_visit_date(date.clone());
    }
    let request = match form.to_request() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", OutcomeFormatter::submit_error(&SubmitError::Validation(e)));
            return Ok(ExitCode::from(EXIT_FAILED));
        }
    };

    // === Dependency Injection ===
    let transport = HttpConsultationTransport::new(
        config.endpoint.url.clone(),
        config.endpoint.connect_timeout(),
    )
    .context("Failed to set up the HTTP client")?;
    let client = StreamingClient::new(Arc::new(transport))
        .with_params(config.stream.to_stream_params());
    let show_progress = config.output.show_progress && !cli.quiet;
    let renderer: Arc<dyn OutputRenderer> = Arc::new(ConsoleRenderer::new(show_progress));
    let mut controller = SubmissionController::new(
        entitlement,
        client,
        token_provider_from_config(&config.auth),
        renderer,
    );

    if !cli.quiet {
        print!("{}", OutcomeFormatter::header(&request));
    }

    if let Err(e) = controller.submit(request).await {
        eprintln!("{}", OutcomeFormatter::submit_error(&e));
        return Ok(ExitCode::from(EXIT_FAILED));
    }

    let outcome = tokio::select! {
        outcome = controller.wait() => outcome,
        Ok(()) = tokio::signal::ctrl_c() => {
            info!("Interrupted, cancelling consultation");
            controller.cancel();
            controller.wait().await
        }
    };

    let Some(outcome) = outcome else {
        bail!("Consultation session ended without an outcome");
    };
    debug!("{}", OutcomeFormatter::outcome_summary(&outcome));

    Ok(ExitCode::from(exit_code(outcome.status)))
}

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(non_blocking)
                .with_ansi(false)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
            Ok(None)
        }
    }
}

/// Command-line flags take precedence over every config source.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(url) = &cli.endpoint {
        config.endpoint.url = url.clone();
    }
    if let Some(secs) = cli.idle_timeout {
        config.stream.idle_timeout_secs = secs;
    }
}

fn report_config_issues(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("{} {}", "Config error:".red().bold(), issue.message),
            Severity::Warning => {
                warn!(field = issue.field, "{}", issue.message);
                eprintln!("{} {}", "Config warning:".yellow().bold(), issue.message);
            }
        }
    }
    if issues.iter().any(|issue| issue.severity == Severity::Error) {
        bail!("Invalid configuration");
    }
    Ok(())
}

fn read_notes(cli: &Cli) -> Result<String> {
    match (&cli.notes, &cli.notes_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) if path.as_path() == Path::new("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read notes from stdin")?;
            Ok(buf)
        }
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read notes from {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

fn exit_code(status: SessionStatus) -> u8 {
    match status {
        SessionStatus::Complete => 0,
        SessionStatus::Cancelled => EXIT_CANCELLED,
        SessionStatus::Requesting | SessionStatus::Streaming | SessionStatus::Failed => {
            EXIT_FAILED
        }
    }
}
