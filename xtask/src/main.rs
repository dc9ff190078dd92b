//! Development tasks for vtube.
//!
//! Run with `cargo run -p xtask -- <task>`. Currently the only task is
//! man-page generation from the CLI definitions in the main crate.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "vtube development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Debug, Subcommand)]
enum Task {
    /// Generate man pages from the CLI definitions
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
    }
}

fn generate_man_pages(out_dir: &PathBuf) -> Result<()> {
    fs::create_dir_all(out_dir)?;

    let cmd = vtube::cli::Cli::command();

    let mut buffer = Vec::new();
    Man::new(cmd.clone()).render(&mut buffer)?;
    fs::write(out_dir.join("vtube.1"), &buffer)?;

    // One page per subcommand, named vtube-<sub>
    for sub in cmd.get_subcommands() {
        let name = format!("vtube-{}", sub.get_name());
        let mut buffer = Vec::new();
        Man::new(sub.clone().name(Box::leak(name.clone().into_boxed_str()) as &'static str)).render(&mut buffer)?;
        fs::write(out_dir.join(format!("{}.1", name)), &buffer)?;
    }

    println!("man pages written to {}", out_dir.display());
    Ok(())
}
