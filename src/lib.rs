// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod payloads;
pub mod ports;
pub mod util;

use crate::application::{check_payload, NoteCreator, NoteFeed, RunViewer};
use crate::cli::args::{Args, Command};
use crate::domain::{DomainError, NoteDraft, Run};
use crate::infrastructure::{Config, HtmlWriter, JsonStore};
use crate::ports::{HtmlPresenter, NoteView};
use crate::util::text::first_line;
use crate::util::time::RelativeTime;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting runboard with arguments");

    let config_path = args.config.clone().or_else(Config::default_path);
    let config = Config::load_or_default(config_path.as_deref())?;
    let data_dir = args
        .data_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.payload_dir));
    debug!(?config_path, ?data_dir, "Resolved locations");

    match args.command {
        Command::Notes {
            root_id,
            only_root,
            json,
            open,
            output,
        } => {
            let root_run = find_root_run(&data_dir, &root_id)?;
            let mut feed = NoteFeed::new(JsonStore::new(&data_dir)?);
            let views = feed.feed(&root_run, only_root, &RelativeTime::new())?;
            info!(root_id = %root_run.id, notes = views.len(), "Rendering notes");

            if json {
                println!("{}", serde_json::to_string_pretty(&views)?);
            } else if open || output.is_some() {
                write_page(&config, &root_run, &views, output.as_deref(), open)?;
            } else {
                print_notes(&views);
            }
        }
        Command::Add {
            root_id,
            author,
            run,
            text,
        } => {
            let mut creator = NoteCreator::new(JsonStore::new(&data_dir)?);
            let note = creator.create_note(NoteDraft {
                author_id: author,
                note: text,
                root_id,
                run_id: run,
            })?;
            println!("{}", note.id);
        }
        Command::Check { kind, file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            println!("{}", check_payload(kind, &raw)?);
        }
        Command::Graph { root_id } => {
            let mut viewer = RunViewer::new(JsonStore::new(&data_dir)?);
            let graph = viewer.view_graph(&root_id)?;
            for (depth, run) in graph.depth_first() {
                let ports = graph
                    .artifacts_for(&run.id)
                    .map(|map| format!(" in:{} out:{}", map.input.len(), map.output.len()))
                    .unwrap_or_default();
                println!(
                    "{}{} [{}] {}{}",
                    "  ".repeat(depth),
                    run.label(),
                    run.short_id(),
                    run.future_state.as_deref().unwrap_or("-"),
                    ports
                );
            }
        }
        Command::Config { init } => {
            let config = match config_path.as_deref() {
                Some(path) if init && !path.exists() => {
                    info!(?path, "Writing default config");
                    Config::create_default(path)?
                }
                _ => config,
            };
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Root run from the saved graphs. Notes can outlive their graph snapshot, so
/// an unknown id still yields a bare run to anchor the badges.
fn find_root_run(data_dir: &Path, root_id: &str) -> Result<Run> {
    let mut viewer = RunViewer::new(JsonStore::new(data_dir)?);
    match viewer.view_run(root_id) {
        Ok(run) => Ok(run),
        Err(DomainError::RunNotFound(_)) => {
            debug!(root_id, "Root run not saved, using bare id");
            Ok(Run::new(root_id))
        }
        Err(e) => Err(e.into()),
    }
}

fn write_page(
    config: &Config,
    root_run: &Run,
    views: &[NoteView],
    output: Option<&Path>,
    open: bool,
) -> Result<()> {
    let presenter = HtmlPresenter::with_theme(config.theme.clone(), config.display.avatar_size);
    let title = format!("{}: {}", config.display.page_title, root_run.label());
    let html = presenter.render_page(&title, views);

    let mut writer = HtmlWriter::new();
    let path = match output {
        Some(path) => {
            writer.write_to(path, &html)?;
            path.to_path_buf()
        }
        None => writer.create_temp_file(&html)?,
    };
    info!(?path, "Wrote notes page");

    if open {
        writer.open_in_browser(&path)?;
    }
    Ok(())
}

fn print_notes(views: &[NoteView]) {
    if views.is_empty() {
        println!("No notes");
        return;
    }
    for view in views {
        let marker = if view.badge.emphasized { "*" } else { " " };
        println!(
            "{} {}: {} ({} on run {})",
            marker,
            view.author_name,
            first_line(&view.body),
            view.time_ago,
            view.badge.text
        );
    }
}
