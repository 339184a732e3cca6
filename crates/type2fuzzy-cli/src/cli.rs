//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use type2fuzzy_reduce::Information;

#[derive(Parser)]
#[command(name = "type2fuzzy")]
#[command(author, version, about = "Type-2 fuzzy set slicing and type reduction", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (overrides the default search)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Don't load configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Decimal places centroid values are rounded to
    #[arg(long, global = true)]
    pub precision: Option<u32>,

    /// Reducer narration: none or full
    #[arg(long, global = true)]
    pub information: Option<Information>,

    /// Log level filter (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(short = 'F', long, global = true, value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Type-reduce a set read from a file
    Reduce {
        /// File holding the set representation
        file: PathBuf,

        /// Reduction algorithm
        #[arg(short, long, value_enum, default_value = "partial-centroid")]
        method: ReductionMethod,

        /// Number of z-slices for Hagras reduction
        #[arg(long)]
        slices: Option<usize>,

        /// Cap on the embedded sets Mendel-John enumerates
        #[arg(long)]
        max_embedded_sets: Option<usize>,

        /// Reduce z-slices on the thread pool
        #[arg(long)]
        parallel: bool,

        /// Also print the defuzzified crisp value
        #[arg(short, long)]
        defuzzify: bool,

        /// Input is an interval type-2 set (Karnik-Mendel only)
        #[arg(long)]
        interval: bool,
    },

    /// Print the footprint of uncertainty of a general type-2 set
    Fou {
        /// File holding the set representation
        file: PathBuf,
    },

    /// Print the interval type-2 set at secondary level z
    Zslice {
        /// File holding the set representation
        file: PathBuf,

        /// Secondary grade in [0, 1]
        #[arg(short, long)]
        z: f64,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Show configuration file path
    Path,
    /// Initialize default configuration file
    Init,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReductionMethod {
    KarnikMendel,
    MendelJohn,
    PartialCentroid,
    Hagras,
}

impl ReductionMethod {
    pub fn name(self) -> &'static str {
        match self {
            ReductionMethod::KarnikMendel => "karnik-mendel",
            ReductionMethod::MendelJohn => "mendel-john",
            ReductionMethod::PartialCentroid => "partial-centroid",
            ReductionMethod::Hagras => "hagras",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable set representation
    #[default]
    Text,
    /// JSON report
    Json,
}
