use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cng_locator_core::station::StationLabels;

#[derive(Parser)]
#[command(
    name = "cng_locator",
    version,
    about = "Find nearby CNG stations and plan refuelling stops along a route"
)]
pub struct Cli {
    /// Path to a config.toml (defaults to the OS config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Station search / route-plan backend base URL
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// OSRM routing engine base URL
    #[arg(long, global = true)]
    pub router_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Print request diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stations within a radius of a location, nearest first
    Near(NearArgs),

    /// Plan a driving route with refuelling stops
    Route(RouteArgs),

    /// List the built-in vehicle models
    Models {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Great-circle distance between two "lat, lng" points
    Distance {
        #[arg(allow_hyphen_values = true)]
        from: String,
        #[arg(allow_hyphen_values = true)]
        to: String,
    },

    /// Inspect the configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCmd,
    },
}

#[derive(Args)]
pub struct NearArgs {
    /// Search center as "lat, lng"
    #[arg(long, allow_hyphen_values = true)]
    pub at: String,

    /// Radius in km (defaults to the configured radius)
    #[arg(long)]
    pub radius: Option<u32>,

    /// Wording used for station units
    #[arg(long, value_enum, default_value_t = LabelSet::Pumps)]
    pub labels: LabelSet,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct RouteArgs {
    /// Start as "lat, lng"
    #[arg(long, allow_hyphen_values = true)]
    pub from: String,

    /// Destination as "lat, lng"
    #[arg(long, allow_hyphen_values = true)]
    pub to: String,

    /// Vehicle model key or name (see `models`)
    #[arg(long)]
    pub model: Option<String>,

    /// Current fuel level in percent (0-100)
    #[arg(long)]
    pub fuel: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Print JSON instead of text
    #[arg(long, conflicts_with = "csv")]
    pub json: bool,

    /// Print CSV instead of text
    #[arg(long)]
    pub csv: bool,

    /// Write JSON/CSV output to a file instead of stdout
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl OutputArgs {
    pub fn is_machine(&self) -> bool {
        self.json || self.csv
    }
}

#[derive(Subcommand)]
pub enum ConfigCmd {
    /// Print the effective configuration as TOML
    Show,
    /// Print the default config file location
    Path,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LabelSet {
    Pumps,
    Chargers,
}

impl From<LabelSet> for StationLabels {
    fn from(set: LabelSet) -> Self {
        match set {
            LabelSet::Pumps => StationLabels::PUMPS,
            LabelSet::Chargers => StationLabels::CHARGERS,
        }
    }
}
