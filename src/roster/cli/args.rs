use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Student record manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Student data file (overrides ROSTER_FILE and the configured data-file)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    #[command(alias = "a", display_order = 1)]
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        age: u32,

        #[arg(long)]
        major: String,

        #[arg(long, allow_negative_numbers = true)]
        gpa: f64,

        #[arg(long)]
        email: String,
    },

    /// List all students
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Show one student
    #[command(alias = "v", display_order = 3)]
    View {
        /// Student id (or a unique prefix of at least 4 characters)
        id: String,
    },

    /// Change some fields of a student
    #[command(alias = "e", display_order = 4)]
    Update {
        /// Student id (or a unique prefix of at least 4 characters)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        age: Option<u32>,

        #[arg(long)]
        major: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        gpa: Option<f64>,

        #[arg(long)]
        email: Option<String>,
    },

    /// Delete a student
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Student id (or a unique prefix of at least 4 characters)
        id: String,
    },

    /// Search students by name (case-insensitive)
    #[command(alias = "s", display_order = 6)]
    Search {
        /// Part of the name; empty matches everyone
        #[arg(default_value = "")]
        query: String,
    },

    /// Run the interactive menu (default)
    #[command(display_order = 7)]
    Menu,

    /// Print the path of the data file
    #[command(display_order = 8)]
    Path,

    /// Get or set configuration
    #[command(display_order = 9)]
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
