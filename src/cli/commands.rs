//! CLI command definitions

use crate::domain::IdFormat;
use crate::error::Result;
use crate::infrastructure::StoreConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "poststore")]
#[command(about = "Read, sort and look up blog posts from a JSON data file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Store root (default: POSTSTORE_ROOT, then the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Directory holding the data file, overriding poststore.toml
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Locale used to order titles (e.g., en, de, fr-CA)
    #[arg(long, global = true)]
    pub locale: Option<String>,

    /// Return string ids from `show`, like `list` and `ids`
    #[arg(long, global = true)]
    pub string_ids: bool,

    /// Log the parsed document when listing ids
    #[arg(long, global = true)]
    pub dump: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all posts ordered by title
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print route params for every post id
    Ids,

    /// Print one post, or the not-found placeholder
    Show {
        /// Post id as used in routes
        id: String,
    },

    /// Print the resolved configuration
    Config,
}

impl Cli {
    /// Load the store config for the selected root and apply flag overrides
    pub fn resolve_config(&self) -> Result<StoreConfig> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => StoreConfig::discover_root()?,
        };

        let mut config = StoreConfig::load_from_dir(&root)?;
        if let Some(data_dir) = &self.data_dir {
            // An absolute override replaces the root entirely.
            config.data_dir = root.join(data_dir);
        }
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if self.string_ids {
            config.id_format = IdFormat::String;
        }
        if self.dump {
            config.dump_parsed = true;
        }

        Ok(config)
    }
}
