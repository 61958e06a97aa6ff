//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fieldtag")]
#[command(about = "Parse field annotation tags into keys and options", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output format (text, toml). Defaults to the config value
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Config file (default: $FIELDTAG_CONFIG, else built-in defaults)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse a raw tag string (e.g. "required,max=10")
    Parse {
        /// Comma-separated keys and name=value options
        raw: String,
    },

    /// Parse one tag out of a field's annotations (e.g. 'json:"id,omitempty"')
    Field {
        /// The field's full annotation string
        field_tags: String,

        /// Tag name to read (default: config tag_name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Print whether a raw tag contains a key (case-sensitive)
    HasKey {
        raw: String,
        key: String,
    },

    /// Print the value of an option in a raw tag
    #[command(name = "option")]
    OptionValue {
        raw: String,
        name: String,
    },
}
