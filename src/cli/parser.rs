use crate::export::ExportFormat;
use crate::models::contractions::Contractions;
use crate::models::moment::Moment;
use clap::{Parser, Subcommand};

/// Command-line interface definition for pregtrack
#[derive(Parser)]
#[command(
    name = "pregtrack",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple pregnancy tracker: log daily symptoms, get advice and time contractions",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a custom table)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record a new observation
    Add {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Moment of the day (defaults to the configured one)
        #[arg(long, value_enum)]
        moment: Option<Moment>,

        /// Fatigue level (0 = none, 10 = exhausted)
        #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=10))]
        fatigue: u8,

        /// Body pain: back, pelvis, legs…
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(0..=10))]
        pain: u8,

        /// Nausea or digestive discomfort
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=10))]
        nausea: u8,

        /// Headache / migraine
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=10))]
        headache: u8,

        /// Reflux or heartburn
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=10))]
        reflux: u8,

        /// Sleep quality (0 = very bad night, 10 = excellent night)
        #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(0..=10))]
        sleep: u8,

        /// Mood (0 = very low, 10 = very good)
        #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(0..=10))]
        mood: u8,

        /// Contractions felt
        #[arg(long, value_enum, default_value_t = Contractions::None)]
        contractions: Contractions,

        /// Free-text remarks (optional)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show the latest observation with its wellness index and advice
    Summary,

    /// List observations for a month
    List {
        /// Month to show (YYYY-MM), defaults to the most recent one
        #[arg(long, short)]
        month: Option<String>,
    },

    /// List the months that have observations
    Months,

    /// Draw the symptom chart for a month
    Chart {
        /// Month to draw (YYYY-MM), defaults to the most recent one
        #[arg(long, short)]
        month: Option<String>,
    },

    /// General wellness tips
    Tips,

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the audit log")]
        print: bool,
    },

    /// Create a backup copy of the data file
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (zip)
        #[arg(long)]
        compress: bool,
    },

    /// Export observations
    Export {
        /// Export format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Only export one month (YYYY-MM); all rows if omitted
        #[arg(long, short)]
        month: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Interactive session: to-do list, notes and contraction timer
    Session,
}
