// src/cli/args.rs
use crate::payloads::PayloadKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding saved payloads (overrides config)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the notes next to a root run
    Notes {
        /// Root run being viewed
        #[arg(value_name = "ROOT_ID")]
        root_id: String,

        /// Only notes attached to this root run
        #[arg(long)]
        only_root: bool,

        /// Output note views as JSON
        #[arg(long, conflicts_with_all = ["open", "output"])]
        json: bool,

        /// Open the rendered page in the browser
        #[arg(long)]
        open: bool,

        /// Write the rendered page to a file
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Add a note to a root run
    Add {
        /// Root run the note is attached to
        #[arg(value_name = "ROOT_ID")]
        root_id: String,

        /// Author id, must be a known author
        #[arg(short, long, value_name = "AUTHOR_ID")]
        author: String,

        /// Specific run inside the graph the note refers to
        #[arg(long, value_name = "RUN_ID")]
        run: Option<String>,

        /// Note text
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Validate a saved payload file
    Check {
        /// Payload shape to decode
        #[arg(value_enum, value_name = "KIND")]
        kind: PayloadKind,

        /// JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the run tree of a saved graph
    Graph {
        /// Root run id
        #[arg(value_name = "ROOT_ID")]
        root_id: String,
    },

    /// Show the effective configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}
