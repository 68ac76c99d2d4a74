//! `tagview` — parse and render restricted HTML files.
//!
//! Usage: `tagview <path>`. The file is parsed into a tag tree and the
//! tree is rendered depth-first to stdout. Any parse or render failure
//! is reported on stderr and exits with code 1; argument errors exit
//! with clap's usage code (2).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[command(name = "tagview")]
#[command(about = "Parse and render restricted HTML files")]
#[command(version)]
struct Cli {
    /// Path to the markup file to render.
    path: PathBuf,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&cli.path)
        .with_context(|| format!("can't access markup file {}", cli.path.display()))?;

    let tree = markup::parse(&text)?;
    log::debug!(target: "tagview", "parsed {} nodes from {}", markup::node_count(&tree), cli.path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    markup::render(&tree, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(error) = run(&cli) {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
