//! CLI argument definitions for the media export.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use media_export_core::ExportOptions;
use media_export_model::{CategoryId, DEFAULT_CATEGORY_SLUG, MediaKind};

/// Environment variable providing the default output directory.
pub const OUTPUT_DIR_ENV_VAR: &str = "MEDIA_EXPORT_OUTPUT_DIR";

/// Environment variable overriding the default-category slug.
pub const DEFAULT_SLUG_ENV_VAR: &str = "MEDIA_EXPORT_DEFAULT_SLUG";

#[derive(Parser)]
#[command(
    name = "media-export",
    version,
    about = "Export the media library as CSV, leaving out chosen categories",
    long_about = "Export the titles, file names and URLs of a media library as a \
                  semicolon separated CSV (UTF-8 with BOM).\n\n\
                  Media attached to entries of an excluded category, or carrying \
                  an excluded category themselves, are left out."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Do not report span close events in JSON logs.
    #[arg(long = "no-log-spans", global = true)]
    pub no_log_spans: bool,

    /// Allow media titles and URLs to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the CSV export from a repository snapshot.
    Export(ExportArgs),

    /// List the categories that can be excluded.
    Categories(CategoriesArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// JSON snapshot of the content repository.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Category id to exclude (repeatable or comma separated).
    ///
    /// Values that are not positive integers are ignored.
    #[arg(long = "exclude", value_name = "ID", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Directory receiving the export file.
    #[arg(
        long = "output-dir",
        value_name = "DIR",
        env = OUTPUT_DIR_ENV_VAR
    )]
    pub output_dir: Option<PathBuf>,

    /// Stream the CSV to standard output instead of writing a file.
    ///
    /// Takes precedence over `--output-dir`.
    #[arg(long = "stdout")]
    pub stdout: bool,

    /// Restrict the export to one family of attachments.
    #[arg(long = "kind", value_enum, default_value = "any")]
    pub kind: MediaKindArg,

    #[command(flatten)]
    pub default_category: DefaultCategoryArgs,
}

#[derive(Parser)]
pub struct CategoriesArgs {
    /// JSON snapshot of the content repository.
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    #[command(flatten)]
    pub default_category: DefaultCategoryArgs,
}

/// How the default ("uncategorized") category is found.
#[derive(Args)]
pub struct DefaultCategoryArgs {
    /// Slug identifying the default category.
    #[arg(
        long = "default-slug",
        value_name = "SLUG",
        env = DEFAULT_SLUG_ENV_VAR,
        default_value = DEFAULT_CATEGORY_SLUG
    )]
    pub default_slug: String,

    /// Default category id used when the slug is not found.
    #[arg(long = "fallback-default-id", value_name = "ID", default_value_t = 1)]
    pub fallback_default_id: u64,
}

impl DefaultCategoryArgs {
    #[must_use]
    pub fn apply(&self, options: ExportOptions) -> ExportOptions {
        options
            .with_default_slug(self.default_slug.clone())
            .with_fallback_default_category(CategoryId::new(self.fallback_default_id))
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MediaKindArg {
    Any,
    Image,
    Video,
    Audio,
    Document,
}

impl From<MediaKindArg> for MediaKind {
    fn from(kind: MediaKindArg) -> Self {
        match kind {
            MediaKindArg::Any => MediaKind::Any,
            MediaKindArg::Image => MediaKind::Image,
            MediaKindArg::Video => MediaKind::Video,
            MediaKindArg::Audio => MediaKind::Audio,
            MediaKindArg::Document => MediaKind::Document,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
