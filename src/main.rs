//! `lite` binary: argument parsing, terminal setup, and the editor loop.

use anyhow::Result;
use clap::Parser;
use lite::buffer::Document;
use lite::config::Config;
use lite::editor::Editor;
use lite::logging;
use lite::terminal::{TerminalGuard, Tty};
use std::path::PathBuf;

const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

#[derive(Parser, Debug)]
#[command(name = "lite", version, about = "A small terminal text editor")]
struct Args {
    /// File to open
    file: Option<PathBuf>,

    /// Path to a TOML config file (defaults to ./lite.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append diagnostics to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref())?;
    let config = Config::load(args.config.as_deref())?;

    // Load before touching the terminal so a bad path is reported on the normal screen.
    let doc = match &args.file {
        Some(path) => Document::open(path, config.tab_stop)?,
        None => Document::new(config.tab_stop),
    };

    let mut tty = Tty::open()?;
    let _guard = TerminalGuard::new()?;

    let mut editor = Editor::new(config, doc);
    editor.set_status(HELP_MESSAGE);
    editor.run(&mut tty)
}
