use clap::{Parser, Subcommand, ValueEnum};

pub const DEFAULT_ROSTER_SOURCE: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Parser, Debug)]
#[command(name = "roster", version, about = "People roster query CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_ROSTER_SOURCE,
        help = "Roster source (url, json file, or 'sample')"
    )]
    pub source: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every loaded record
    List,
    /// First record with a matching name
    Find { name: String },
    /// All records with a matching name, in roster order
    Filter { name: String },
    /// Walk the roster and print each matching record as it is visited
    Scan { name: String },
    /// All names, in roster order
    Names,
    /// Whether at least one record matches the name
    Exists { name: String },
    /// Whether a predicate holds for every record
    Every {
        #[arg(value_enum)]
        check: EveryCheck,
        #[arg(long, default_value_t = 18, help = "Minimum age for the adult check")]
        min_age: u32,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EveryCheck {
    /// Every record has an age of at least --min-age
    Adult,
    /// Every record has a non-empty city
    Located,
}

impl EveryCheck {
    pub fn label(&self) -> &'static str {
        match self {
            EveryCheck::Adult => "adult",
            EveryCheck::Located => "located",
        }
    }
}
