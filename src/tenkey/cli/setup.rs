use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tenkey::model::Mode;

#[derive(Parser, Debug)]
#[command(name = "tenkey", bin_name = "tenkey", version)]
#[command(about = "Typing drills for numbers, birthdays and phone numbers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Area-code JSON file (defaults to the config value, then ./area-codes.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub area_codes: Option<PathBuf>,

    /// Seed the generator for a repeatable sequence of targets
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start typing right away in a mode (number, birthday, phone)
    #[command(alias = "p")]
    Practice { mode: Mode },

    /// Print generated targets without the typing screen
    #[command(alias = "g")]
    Generate {
        mode: Mode,

        /// How many targets to print
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Show the region of a phone number
    Region {
        /// The number, in any notation (e.g. 03-1234-5678)
        #[arg(required = true, num_args = 1..)]
        number: Vec<String>,
    },

    /// List the loaded area codes
    Codes,

    /// Get or set configuration
    Config {
        /// Configuration key (area-codes, year-min, year-max, history-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
