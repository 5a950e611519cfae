//! CLI schema for the vocab binary.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use vocab::format::FormatRegistry;

#[derive(Parser, Debug)]
#[command(name = "vocab")]
#[command(about = "Manage an english/spanish vocabulary collection")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
    /// Store file to use instead of the configured one
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Enable debug logging (overrides the configured level)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every category and its words in display order
    List,
    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage words inside a category
    Word {
        #[command(subcommand)]
        action: WordAction,
    },
    /// Export the collection to a document
    Export {
        /// Output file (defaults to vocabulary_<millis>.<ext>)
        path: Option<PathBuf>,

        /// Document format (defaults to the output extension, else pdf)
        #[arg(long, short = 'f', value_enum)]
        format: Option<ExportFormat>,

        /// Document title (PDF only)
        #[arg(long)]
        title: Option<String>,
    },
    /// Import words from an exported PDF or a JSON file
    Import {
        path: PathBuf,

        /// Show what would be imported without changing the store
        #[arg(long)]
        dry_run: bool,
    },
    /// Show or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Category subcommands.
#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// Create an empty category
    Add {
        name: String,
        /// Hex color such as #667eea
        #[arg(long, short = 'c')]
        color: Option<String>,
    },
    /// Rename a category
    Rename { name: String, new_name: String },
    /// Change a category's color
    Recolor { name: String, color: String },
    /// Delete a category and all of its words
    Delete { name: String },
    /// Set the display order; listed categories get positions 0, 1, 2...
    Reorder {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

/// Word subcommands. Word positions are 1-based on the command line.
#[derive(Subcommand, Debug)]
pub enum WordAction {
    /// Append a word to a category
    Add {
        category: String,
        #[command(flatten)]
        fields: WordFields,
    },
    /// Replace the word at a position
    Update {
        category: String,
        position: usize,
        #[command(flatten)]
        fields: WordFields,
    },
    /// Delete the word at a position
    Delete { category: String, position: usize },
}

/// Word contents.
#[derive(clap::Args, Debug)]
pub struct WordFields {
    pub english: String,
    pub spanish: String,

    /// Synonyms (comma-separated)
    #[arg(long, short = 's', value_delimiter = ',')]
    pub synonyms: Vec<String>,

    /// Example sentence (repeatable)
    #[arg(long = "example", short = 'e')]
    pub examples: Vec<String>,
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write a default configuration file if none exists
    Init,
}

/// Export formats selectable on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Json,
}

impl ExportFormat {
    /// Registry id of the format.
    pub fn id(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Json => "json",
        }
    }

    /// Registry id to export with: the explicit choice, else the format
    /// matching the output extension, else PDF.
    pub fn resolve(
        choice: Option<Self>,
        path: Option<&Path>,
        registry: &FormatRegistry,
    ) -> &'static str {
        if let Some(choice) = choice {
            return choice.id();
        }
        path.and_then(|path| registry.for_path(path))
            .map_or(ExportFormat::Pdf.id(), |format| format.id())
    }
}

/// Convert a 1-based command-line position to a word index.
pub fn word_index(position: usize) -> Option<usize> {
    position.checked_sub(1)
}
