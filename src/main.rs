use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use swarmscope::cli::{Cli, Commands};
use swarmscope::config::{self, AppConfig};
use swarmscope::dashboard::Snapshot;
use swarmscope::dashboard::health::HealthSettings;
use swarmscope::dashboard::notifications::{NotificationCenter, NotificationFilter};
use swarmscope::dashboard::{capabilities, templates};
use swarmscope::report::{self, ToolClassification};
use swarmscope::transcript::load_transcript;

fn env_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
}

/// Route logs for the rest of the run. The dashboard owns the terminal, so
/// `watch` logs to the configured file or nowhere.
fn init_tracing(watch: bool, config: &AppConfig) -> anyhow::Result<()> {
    if !watch {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(std::io::stderr)
            .init();
        return Ok(());
    }

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    Ok(())
}

/// Text renderers end lines with '\n'; JSON does not.
fn emit(output: String) {
    println!("{}", output.trim_end());
}

fn health_settings(config: &AppConfig) -> HealthSettings {
    HealthSettings {
        assumed_response_time_ms: config.assumed_response_time_ms,
    }
}

fn snapshot_of(transcript: &Path, config: &AppConfig) -> anyhow::Result<Snapshot> {
    let messages = load_transcript(transcript)?;
    Ok(Snapshot::derive(
        &messages,
        &health_settings(config),
        Utc::now(),
    ))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config warnings go to stderr even in watch mode; the terminal is not
    // taken over until the dashboard starts.
    let startup_logger = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(startup_logger, || config::load_config(&cli))?;

    init_tracing(matches!(cli.command, Commands::Watch { .. }), &config)?;
    tracing::debug!(?config, "Config loaded");

    let format = config.format;
    match cli.command {
        Commands::State { transcript, .. } => {
            let snapshot = snapshot_of(&transcript, &config)?;
            let state = &snapshot.state;
            emit(report::render(format, state, || report::state_text(state))?);
        }
        Commands::Health { transcript, .. } => {
            let snapshot = snapshot_of(&transcript, &config)?;
            let health = &snapshot.health;
            emit(report::render(format, health, || report::health_text(health))?);
        }
        Commands::Notifications {
            transcript, limit, ..
        } => {
            let snapshot = snapshot_of(&transcript, &config)?;
            let mut center = NotificationCenter::new();
            center.sync(snapshot.notifications);

            let mut feed = center.visible(NotificationFilter::All);
            if let Some(limit) = limit {
                feed.truncate(limit);
            }
            let now = Utc::now();
            emit(report::render(format, &feed, || report::notifications_text(&feed, now))?);
        }
        Commands::Templates {
            tag, id, prompt, ..
        } => match id {
            Some(id) => {
                let template = templates::find(&id)
                    .with_context(|| format!("No template with id '{id}'"))?;
                let launch = templates::launch_prompt(template, prompt.as_deref());
                emit(report::render(format, &launch, || launch.clone())?);
            }
            None => {
                let matching: Vec<_> = match &tag {
                    Some(tag) => templates::with_tag(tag),
                    None => templates::catalog().iter().collect(),
                };
                emit(report::render(format, &matching, || report::templates_text(&matching))?);
            }
        },
        Commands::Capabilities { category, .. } => {
            let matching: Vec<_> = match category {
                Some(category) => capabilities::by_category(category),
                None => capabilities::catalog().iter().collect(),
            };
            emit(report::render(format, &matching, || report::capabilities_text(&matching))?);
        }
        Commands::Classify { names, .. } => {
            let results: Vec<_> = names.iter().map(|n| ToolClassification::of(n)).collect();
            emit(report::render(format, &results, || report::classifications_text(&results))?);
        }
        Commands::Watch { transcript, .. } => {
            swarmscope::tui::run_tui(&config, &transcript)
                .await
                .context("Dashboard exited with an error")?;
        }
    }

    Ok(())
}
