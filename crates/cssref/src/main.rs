//! `cssref` command-line interface.

use std::borrow::Cow;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use cssref::logging::{self, targets};
use cssref::prelude::*;

/// A CSS property reference with syntax-highlighted declarations.
#[derive(Debug, Parser)]
#[command(name = "cssref", version, about)]
struct Cli {
    /// Color theme (overrides the config file).
    #[arg(long, global = true, value_name = "THEME")]
    theme: Option<ThemeMode>,

    /// When to use ANSI colors: auto, always or never.
    #[arg(long, global = true, value_name = "WHEN")]
    color: Option<ColorMode>,

    /// Config file to use instead of the default location.
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog file to use instead of the built-in catalog.
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Log at debug level unless CSSREF_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List categories with their property counts.
    Categories,

    /// Show the properties of a category (default: the first one).
    List {
        category: Option<String>,

        /// Only properties whose name, description or values contain this.
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show one property.
    Show { property: String },

    /// Search every category.
    Search {
        #[arg(required = true)]
        query: Vec<String>,
    },

    /// Highlight declarations given as arguments, or one per line on stdin.
    Highlight { declarations: Vec<String> },

    /// Print the classified spans of a declaration.
    Tokens {
        declaration: String,

        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Write the catalog, or a search over it, as a standalone HTML page.
    ExportHtml {
        /// Only include properties matching this search.
        #[arg(short, long)]
        query: Option<String>,

        /// Output file (default: stdout).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };
    if let Some(mode) = cli.theme {
        config.theme = mode;
    }
    if let Some(color) = cli.color {
        config.color = color;
    }
    let theme = config.theme()?;

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog.clone());
    let catalog: Cow<'static, Catalog> = match catalog_path {
        Some(path) => Cow::Owned(Catalog::load(&path)?),
        None => Cow::Borrowed(Catalog::builtin()),
    };

    tracing::debug!(
        target: targets::CLI,
        theme = %config.theme,
        color = %config.color,
        command = ?cli.command,
        "dispatching"
    );

    let stdout = std::io::stdout();
    let colors = config.color.enabled(stdout.is_terminal());
    let terminal = TerminalRenderer::new(&theme, colors);
    let mut out = stdout.lock();

    match cli.command {
        Command::Categories => terminal.write_categories(&mut out, &catalog)?,

        Command::List { category, filter } => {
            let category = match category.as_deref() {
                Some(id) => match catalog.category(id) {
                    Some(category) => category,
                    None => bail!("unknown category '{id}' (see `cssref categories`)"),
                },
                None => match catalog.first_category() {
                    Some(category) => category,
                    None => bail!("catalog has no categories"),
                },
            };
            let query = SearchQuery::new(filter.as_deref().unwrap_or_default());
            terminal.write_category(&mut out, category, &query)?;
        }

        Command::Show { property } => match catalog.property(&property) {
            Some((category, found)) => {
                terminal.write_property(&mut out, found, Some(&category.name))?;
            }
            None => bail!("unknown property '{property}' (try `cssref search {property}`)"),
        },

        Command::Search { query } => {
            let query = SearchQuery::new(&query.join(" "));
            terminal.write_search(&mut out, &catalog, &query)?;
        }

        Command::Highlight { declarations } => {
            if declarations.is_empty() {
                for line in std::io::stdin().lock().lines() {
                    let line = line.context("failed to read stdin")?;
                    terminal.write_highlighted(&mut out, &line)?;
                }
            } else {
                for declaration in &declarations {
                    terminal.write_highlighted(&mut out, declaration)?;
                }
            }
        }

        Command::Tokens { declaration, json } => {
            if json {
                let spans = classify(&declaration);
                serde_json::to_writer_pretty(&mut out, &spans)
                    .context("failed to write JSON")?;
                writeln!(out)?;
            } else {
                terminal.write_tokens(&mut out, &declaration)?;
            }
        }

        Command::ExportHtml { query, output } => {
            let renderer = HtmlRenderer::new(theme);
            let html = match query.as_deref() {
                Some(query) => renderer.search_page(&catalog, &SearchQuery::new(query))?,
                None => renderer.catalog_page(&catalog)?,
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, html)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    tracing::info!(target: targets::CLI, path = %path.display(), "wrote html");
                }
                None => out.write_all(html.as_bytes())?,
            }
        }
    }

    out.flush()?;
    Ok(())
}
