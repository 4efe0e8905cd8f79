use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "imgstubdev CLI (alpha)", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SeedPick {
    Frames,
    Finals,
    Both,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScanPick {
    Posters,
    Frames,
    Finals,
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Provision placeholders from the embedded catalog
    Seed {
        /// which catalog lists to provision
        #[arg(long, value_enum, default_value_t = SeedPick::Both)]
        only: SeedPick,

        /// directory under which /frames and /final live
        #[arg(long = "base-dir", default_value = "public")]
        base_dir: PathBuf,

        /// print detailed progress
        #[arg(long)]
        debug: bool,
    },

    /// Extract image paths from the site config and provision them
    Scan {
        /// site config carrying poster/frame/finalImage entries
        #[arg(long, default_value = "src/data/config.ts")]
        config: PathBuf,

        #[arg(long, value_enum, default_value_t = ScanPick::All)]
        only: ScanPick,

        #[arg(long = "base-dir", default_value = "public")]
        base_dir: PathBuf,

        #[arg(long)]
        debug: bool,
    },

    /// Audit placeholder state without touching anything
    Status {
        /// audit the scanned config instead of the embedded catalog
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long = "base-dir", default_value = "public")]
        base_dir: PathBuf,
    },
}
