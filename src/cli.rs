//! Command line interface
//!
//! With no subcommand the interactive TUI starts. The other subcommands
//! fetch once, print to stdout and exit.

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};

use crate::api::types::NO_VIBE;
use crate::api::{PromptApi, RandomRequest};
use crate::app::archive::{format_archive_date, ArchiveState};
use crate::engine::{Config, PromptRecord, PromptRenderer};
use crate::error::WdidError;
use crate::share;

#[derive(Parser, Debug)]
#[command(name = "wdid", version, about = "Drawing prompts in your terminal")]
pub struct Cli {
    /// Base URL of the prompt service
    #[arg(long, env = "WDID_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Log file (defaults to the platform data directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Interactive terminal UI (default)
    Tui,

    /// Print today's prompt
    Daily {
        /// Print escaped HTML markup instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Print a random prompt
    Random {
        /// Include a scene
        #[arg(long)]
        scene: bool,

        #[arg(long, default_value = NO_VIBE)]
        vibe: String,

        #[arg(long, default_value = "any")]
        animal_rarity: String,

        #[arg(long, default_value = "any")]
        object_rarity: String,

        #[arg(long)]
        html: bool,
    },

    /// Print one page of past daily prompts
    Archive {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

impl Cli {
    /// Defaults overridden by flags and environment
    pub fn config(&self) -> Config {
        Config::default().with_api(self.api_url.clone(), self.timeout)
    }
}

fn write_prompt(
    record: &PromptRecord,
    html: bool,
    out: &mut impl Write,
) -> Result<(), WdidError> {
    let rendered = PromptRenderer::new().render(record)?;
    if html {
        writeln!(out, "{}", rendered.markup())?;
    } else {
        writeln!(out, "{}", rendered.plain_text())?;
    }
    Ok(())
}

pub fn print_daily(
    api: &dyn PromptApi,
    config: &Config,
    html: bool,
    out: &mut impl Write,
) -> Result<(), WdidError> {
    let record = api.daily()?;
    write_prompt(&record, html, out)?;
    let hashtag = record
        .hashtag
        .clone()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| {
            share::daily_hashtag(&config.links.hashtag_prefix, Local::now().date_naive())
        });
    writeln!(out, "{}", hashtag)?;
    Ok(())
}

pub fn print_random(
    api: &dyn PromptApi,
    request: &RandomRequest,
    html: bool,
    out: &mut impl Write,
) -> Result<(), WdidError> {
    let record = api.random(request)?;
    write_prompt(&record, html, out)
}

pub fn print_archive(
    api: &dyn PromptApi,
    config: &Config,
    page: usize,
    out: &mut impl Write,
) -> Result<(), WdidError> {
    let mut archive = ArchiveState::new(config.archive.items_per_page);
    archive.load(api.archive()?);
    if let Some(notice) = &archive.notice {
        writeln!(out, "{}", notice.headline)?;
        return Ok(());
    }
    archive.page = page.clamp(1, archive.total_pages());

    for entry in archive.page_entries() {
        let date = entry
            .date
            .as_deref()
            .map(format_archive_date)
            .unwrap_or_default();
        let prompt = entry.record.prompt.as_deref().unwrap_or_default();
        let hashtag = entry
            .record
            .hashtag
            .as_deref()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(config.archive.default_hashtag.as_str());
        writeln!(out, "{:<18} {}  {}", date, prompt, hashtag)?;
    }
    writeln!(out, "{}", archive.page_info())?;
    Ok(())
}

/// Run a one-shot subcommand against `api`, writing to `out`
pub fn run_command(
    command: &Commands,
    api: &dyn PromptApi,
    config: &Config,
    out: &mut impl Write,
) -> Result<(), WdidError> {
    match command {
        Commands::Tui => Ok(()),
        Commands::Daily { html } => print_daily(api, config, *html, out),
        Commands::Random {
            scene,
            vibe,
            animal_rarity,
            object_rarity,
            html,
        } => {
            let request = RandomRequest::new(*scene, vibe, animal_rarity, object_rarity);
            print_random(api, &request, *html, out)
        }
        Commands::Archive { page } => print_archive(api, config, *page, out),
    }
}
