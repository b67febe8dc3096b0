use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full calculation result as pretty-printed JSON
    Json,
    /// Markdown report (inputs, scenario table, insights)
    Markdown,
    /// Human-readable terminal output
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "roicast")]
#[command(about = "Business-case ROI and payback projection engine", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project ROI, payback, and scenario cashflows from a case file
    Calculate {
        /// Case file (JSON with initiative, risks, confidence)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Identifier for the generated report (defaults to a timestamp id)
        #[arg(long = "report-id")]
        report_id: Option<String>,

        /// Persist the result as JSON under this directory, keyed by report id
        #[arg(long)]
        store: Option<PathBuf>,

        /// Skip plausibility validation of template inputs
        #[arg(long = "no-validate")]
        no_validate: bool,
    },

    /// Create a starter .roicast.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// List the business-model templates and their default assumptions
    Templates {
        /// Emit the catalog as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}
