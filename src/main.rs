//! Terminal article reader - Entry Point

use artv::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    ResolvedConfig,
};
use artv::markup::MarkdownProjector;
use artv::model::{AppSettings, SavedUiState};
use artv::source::{load_article_file, load_saved_state, save_saved_state};
use artv::view::{run_article, ColorConfig, ShellOptions};
use artv::viewmodel::{ArticleViewModel, MemoryArticleRepository};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Read a markdown article in the terminal
#[derive(Parser, Debug)]
#[command(name = "artv")]
#[command(version)]
#[command(about = "Terminal article reader with in-document search")]
pub struct Args {
    /// Path to the markdown article
    pub file: PathBuf,

    /// Start with search mode open on this query
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Leave the bottom bar where a gesture stops instead of snapping it
    #[arg(long)]
    pub no_snap: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = resolve_config(&args)?;

    init_logging(&config)?;

    let loaded = load_article_file(&args.file)?;
    info!(id = %loaded.data.id, title = %loaded.data.title, "Article loaded");

    let article_id = loaded.data.id.clone();
    let mut repository = MemoryArticleRepository::new(AppSettings {
        is_dark_mode: config.dark_mode,
        is_big_text: config.big_text,
    });
    repository.insert_article(loaded.data, loaded.content);
    let viewmodel = ArticleViewModel::new(article_id, repository, Box::new(MarkdownProjector));

    let initial = initial_ui_state(&config.state_file_path, args.search.as_deref());
    let options = ShellOptions::from_config(&config, ColorConfig::from_env_and_args(args.no_color));

    let saved = run_article(viewmodel, options, initial.as_ref())?;
    save_saved_state(&config.state_file_path, &saved)?;
    info!("Exiting");

    Ok(())
}

/// Defaults → Config File → Env Vars → CLI Args
fn resolve_config(args: &Args) -> Result<ResolvedConfig, artv::config::ConfigError> {
    let config_file = load_config_with_precedence(args.config.clone())?;
    let merged = merge_config(config_file);
    let with_env = apply_env_overrides(merged);

    // Flags only override when explicitly set
    let dark_override = args.dark.then_some(true);
    let snap_override = args.no_snap.then_some(false);

    Ok(apply_cli_overrides(with_env, dark_override, snap_override))
}

fn init_logging(config: &ResolvedConfig) -> Result<(), artv::logging::LoggingError> {
    artv::logging::init(&config.log_file_path)?;
    info!(config = ?config, "Configuration loaded and resolved");
    Ok(())
}

/// Saved flags from the last run, or a fresh search when `--search` is given.
///
/// An unreadable state file is logged and ignored.
fn initial_ui_state(path: &Path, search: Option<&str>) -> Option<SavedUiState> {
    if let Some(query) = search {
        return Some(SavedUiState {
            is_search: true,
            search_query: Some(query.to_string()),
            search_position: 0,
            is_focused_search: false,
        });
    }
    match load_saved_state(path) {
        Ok(saved) => saved,
        Err(err) => {
            warn!(error = %err, "Ignoring unreadable UI state");
            None
        }
    }
}
