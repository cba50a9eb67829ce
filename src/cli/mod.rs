//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the txapi binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::TranslationMode;

/// Transifex API command-line interface.
///
/// Connection settings come from the `TRANSIFEX_*` environment variables.
#[derive(Parser, Debug)]
#[command(name = "txapi", about = "Transifex API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Default resource slug (overrides TRANSIFEX_RESOURCE).
    #[arg(long, global = true)]
    pub resource: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show project details.
    Project,

    /// List the project's languages.
    Languages,

    /// List the project's resources.
    Resources,

    /// Show a single resource.
    Resource {
        /// Resource slug (defaults to the configured resource).
        slug: Option<String>,
    },

    /// Create a new resource.
    CreateResource {
        /// Slug of the new resource.
        #[arg(long)]
        slug: String,

        /// Display name of the new resource.
        #[arg(long)]
        name: String,

        /// File format handler, e.g. PO.
        #[arg(long = "type")]
        i18n_type: String,

        /// Initial source file.
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Delete a resource.
    DeleteResource {
        /// Resource slug (defaults to the configured resource).
        slug: Option<String>,
    },

    /// Download a resource translation.
    Translation {
        /// Language code, e.g. fr or en_US.
        lang: String,

        /// Which strings to include.
        #[arg(long)]
        mode: Option<TranslationMode>,
    },

    /// Fetch the translation strings of a resource.
    Strings {
        /// Language code, e.g. fr or en_US.
        lang: String,
    },

    /// Upload new source content for a resource.
    Upload {
        /// Source file to upload.
        #[arg(long)]
        file: PathBuf,

        /// File format handler, e.g. PO.
        #[arg(long = "type")]
        i18n_type: String,

        /// Display name (defaults to the slug).
        #[arg(long)]
        name: Option<String>,
    },
}
