//! linkshelf command-line interface.
//!
//! Drives the bookmark service directly: list, add, update, delete and check
//! saved URLs, and inspect or change settings.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use linkshelf::app::App;
use linkshelf::logging;
use linkshelf::services::bookmark_service::BookmarkServiceTrait;
use linkshelf::services::settings_engine::SettingsEngineTrait;
use linkshelf::types::bookmark::{Bookmark, BookmarkInput};
use linkshelf::types::page::{page_numbers, PageMarker};
use linkshelf::types::url_match::UrlMatchMode;

/// Command-line arguments for linkshelf
#[derive(Parser)]
#[command(name = "linkshelf", version, about = "Save, list and check bookmarked URLs")]
struct Args {
    /// Path to the settings file
    #[arg(long, global = true, env = "LINKSHELF_CONFIG")]
    config: Option<String>,

    /// Keep bookmarks in memory only (nothing is written to disk)
    #[arg(long, global = true)]
    memory: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List bookmarks, newest first
    List {
        /// Show only this page
        #[arg(long)]
        page: Option<usize>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Save a URL
    Add {
        url: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Replace the URL (and optionally title/description) of a bookmark
    Update {
        id: String,
        url: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a bookmark by id
    Delete { id: String },
    /// Check whether a URL is already saved
    Check {
        url: String,
        /// exact, case-insensitive or substring (defaults to the configured mode)
        #[arg(long)]
        mode: Option<UrlMatchMode>,
    },
    /// Delete every bookmark
    Clear,
    /// Read or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print a setting by dot path, or all settings
    Get { key: Option<String> },
    /// Set a setting by dot path; the value is parsed as JSON, falling back to a string
    Set { key: String, value: String },
    /// Restore default settings
    Reset,
    /// Print the settings file location
    Path,
}

fn print_bookmarks(bookmarks: &[Bookmark]) {
    for bm in bookmarks {
        let title = bm.title_or_empty();
        if title.is_empty() {
            println!("{}  {}", bm.id, bm.url);
        } else {
            println!("{}  {}  ({})", bm.id, bm.url, title);
        }
    }
}

fn format_markers(markers: &[PageMarker], current: usize) -> String {
    markers
        .iter()
        .map(|m| match m {
            PageMarker::Number(n) if *n == current => format!("[{}]", n),
            PageMarker::Number(n) => n.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a `config set` value as JSON, keeping bare words like `exact` as strings.
fn parse_config_value(raw: String) -> serde_json::Value {
    serde_json::from_str(&raw).unwrap_or(serde_json::Value::String(raw))
}

fn run(args: Args) -> Result<()> {
    let mut app = if args.memory {
        App::open_ephemeral(args.config)?
    } else {
        App::open(args.config)?
    };

    match args.command {
        Command::List { page, json } => match page {
            None => {
                let bookmarks = app.bookmarks.list_bookmarks();
                if json {
                    println!("{}", serde_json::to_string_pretty(&bookmarks)?);
                } else {
                    println!("You have {} bookmarks", bookmarks.len());
                    print_bookmarks(&bookmarks);
                }
            }
            Some(page) => {
                let page = app.bookmarks.list_page(page);
                if json {
                    println!("{}", serde_json::to_string_pretty(&page)?);
                } else {
                    print_bookmarks(&page.items);
                    println!(
                        "Page {} of {}  {}",
                        page.page,
                        page.total_pages,
                        format_markers(&page_numbers(page.page, page.total_pages), page.page)
                    );
                }
            }
        },
        Command::Add {
            url,
            title,
            description,
        } => {
            let input = BookmarkInput {
                url,
                title,
                description,
            };
            let bm = app.bookmarks.add_bookmark(input);
            println!("{}", serde_json::to_string_pretty(&bm)?);
        }
        Command::Update {
            id,
            url,
            title,
            description,
        } => {
            let input = BookmarkInput {
                url,
                title,
                description,
            };
            match app.bookmarks.update_bookmark(&id, input) {
                Some(bm) => println!("{}", serde_json::to_string_pretty(&bm)?),
                None => bail!("Bookmark not found: {}", id),
            }
        }
        Command::Delete { id } => {
            if !app.bookmarks.delete_bookmark(&id) {
                bail!("Bookmark not found: {}", id);
            }
            println!("Deleted {}", id);
        }
        Command::Check { url, mode } => {
            let exists = match mode {
                Some(mode) => app.bookmarks.url_exists_with(&url, mode),
                None => app.bookmarks.url_exists(&url),
            };
            if exists {
                println!("Saved: {}", url.trim());
            } else {
                println!("URL not found in your bookmarks");
                std::process::exit(1);
            }
        }
        Command::Clear => {
            if !app.bookmarks.clear_bookmarks() {
                bail!("Failed to clear bookmarks");
            }
            println!("Cleared all bookmarks");
        }
        Command::Config { action } => match action {
            ConfigAction::Get { key } => {
                let value = match key {
                    Some(key) => app.settings_engine.get_value(&key)?,
                    None => serde_json::to_value(app.settings_engine.get_settings())?,
                };
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            ConfigAction::Set { key, value } => {
                let value = parse_config_value(value);
                app.settings_engine
                    .set_value(&key, value)
                    .with_context(|| format!("Failed to set '{}'", key))?;
                println!("Updated {}", key);
            }
            ConfigAction::Reset => {
                app.settings_engine.reset()?;
                println!("Settings reset to defaults");
            }
            ConfigAction::Path => println!("{}", app.settings_engine.get_config_path()),
        },
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);
    run(args)
}
