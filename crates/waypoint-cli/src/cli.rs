use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use waypoint_core::VERSION;

/// Waypoint - a travel photo journal in your terminal
#[derive(Parser)]
#[command(name = "waypoint")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal file
    #[arg(short, long, global = true, env = "WAYPOINT_JOURNAL")]
    pub journal: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Reference to the captured photo (e.g. file:///...)
    #[arg(value_name = "IMAGE_URI")]
    pub image_uri: String,

    /// Human-readable location description
    #[arg(long)]
    pub address: String,

    /// Latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,

    /// Longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,

    /// Entry title
    #[arg(long)]
    pub title: Option<String>,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Add tags to the entry
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Weather snapshot as a JSON object
    #[arg(long, value_name = "JSON")]
    pub weather: Option<String>,

    /// Set custom date/time (ISO-8601 or YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Replace the title
    #[arg(long)]
    pub title: Option<String>,

    /// Replace the notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Replace the address
    #[arg(long)]
    pub address: Option<String>,

    /// Replace the tags
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Replace the weather snapshot (JSON object)
    #[arg(long, value_name = "JSON")]
    pub weather: Option<String>,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for the `clear` command
#[derive(Args)]
pub struct ClearArgs {
    /// Skip the confirmation requirement
    #[arg(long)]
    pub yes: bool,
}

/// Arguments for the `theme` command
#[derive(Args)]
pub struct ThemeArgs {
    /// Set the theme (light, dark, system); omit to show the current one
    #[arg(value_name = "THEME")]
    pub set: Option<String>,
}

/// Arguments for the `doctor` command
#[derive(Args)]
pub struct DoctorArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new travel entry
    Add(AddArgs),

    /// List entries, newest first
    List(ListArgs),

    /// Show a specific entry by ID
    Show(ShowArgs),

    /// Edit an existing entry (full-record replacement)
    Edit(EditArgs),

    /// Remove an entry by ID
    Remove(RemoveArgs),

    /// Remove all entries
    Clear(ClearArgs),

    /// Print the number of entries
    Count,

    /// Show or set the theme preference
    Theme(ThemeArgs),

    /// Inspect the raw stored collection
    Doctor(DoctorArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
