mod doctor_cmd;
mod terminal_page;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use nacelle_config::{config_dir, config_file_path, load_config, HostConfig};
use nacelle_core::HostError;
use nacelle_module::{attach, hello, LocalModule, ModuleHandle};
use nacelle_page::PageController;

use terminal_page::TerminalPage;

#[derive(Parser)]
#[command(name = "nacelle")]
#[command(about = "Nacelle — host-page controller for native plugin modules")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive the load-and-submit page flow against the built-in greeting module
    Run {
        /// Value submitted through the form's name field
        #[arg(short, long)]
        name: Option<String>,
        /// Config file path (defaults to the config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Diagnose configuration and environment
    Doctor {
        /// Config file path (defaults to the config directory)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Commands {
    fn config_path(&self) -> PathBuf {
        let explicit = match self {
            Commands::Run { config, .. } => config.clone(),
            Commands::Doctor { config } => config.clone(),
        };
        explicit.unwrap_or_else(|| config_file_path(&config_dir()))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.command.config_path();
    let config = load_config(&config_path).await?;

    logging::init_logger(
        config.logging.dir.as_deref().map(Path::new),
        &config.logging.level,
    );

    match cli.command {
        Commands::Run { name, .. } => run_page(config, name).await?,
        Commands::Doctor { .. } => doctor_cmd::run(&config_path, &config)?,
    }

    Ok(())
}

/// One full page pass: attach the embed, wait for the load event, submit the
/// form once.
async fn run_page(config: HostConfig, name: Option<String>) -> Result<()> {
    let page = Arc::new(TerminalPage::new(&config.page, name.unwrap_or_default()));
    let descriptor = config.module.descriptor();

    let (mut embed, notifier) = attach(descriptor.clone());
    let module = Arc::new(LocalModule::new(
        descriptor.clone(),
        hello::builtin_registry(),
        notifier,
    ));

    let mut controller = PageController::new(
        page.clone(),
        config.page.status_element_id.as_str(),
        config.page.name_field_id.as_str(),
    );
    controller.handle_page_load(descriptor, ModuleHandle::new(module.clone()));

    module.begin_load().await;
    match embed.next_event().await {
        Some(event) => controller.handle_embed_event(event),
        None => return Err(HostError::ChannelClosed("embed events".into()).into()),
    }

    let outcome = controller.handle_form_submit().await;
    info!(?outcome, "Form submission handled");
    Ok(())
}
