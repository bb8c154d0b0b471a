//! Terminal view for the book list.
//!
//! # Responsibility
//! - Compose the catalog repository with the book list view model.
//! - Render published rows as title/subtitle cells on stdout.
//!
//! Logging is enabled only when `BOOKSHELF_LOG_DIR` is set; the level comes
//! from `BOOKSHELF_LOG_LEVEL` and falls back to the build default.

use bookshelf_core::{
    default_log_level, init_logging, BookListViewModel, BookRowViewData, FixedBookRepository,
};
use log::info;
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "BOOKSHELF_LOG_DIR";
const LOG_LEVEL_ENV: &str = "BOOKSHELF_LOG_LEVEL";

fn main() -> ExitCode {
    if let Err(err) = configure_logging() {
        eprintln!("bookshelf: {err}");
        return ExitCode::FAILURE;
    }

    let repo = match FixedBookRepository::try_catalog() {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("bookshelf: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut view_model = BookListViewModel::new(repo);
    view_model.subscribe(|rows| {
        if !rows.is_empty() {
            println!("{}", render_list(rows));
        }
    });

    // On-appear trigger.
    view_model.fetch_books();
    info!(
        "event=cli_render module=cli status=ok rows={}",
        view_model.books().len()
    );
    ExitCode::SUCCESS
}

fn configure_logging() -> Result<(), String> {
    let Some(log_dir) = env_value(LOG_DIR_ENV) else {
        return Ok(());
    };
    let level = env_value(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, &log_dir)
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn render_list(rows: &[BookRowViewData]) -> String {
    rows.iter()
        .map(render_cell)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_cell(row: &BookRowViewData) -> String {
    format!("{}\n  {}", row.title, row.subtitle)
}
