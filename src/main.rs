use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use colored::*;

use chatmark_lib::config::{self, LoadedConfig};
use chatmark_lib::exit_codes::{self, exit};
use chatmark_lib::output::{OutputFormat, OutputFormatter};

mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Ignore all configuration files and use built-in defaults
    #[arg(long, global = true, conflicts_with = "config")]
    no_config: bool,

    /// Output format: text or json
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Command to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve code block language tokens to highlight keys
    Language {
        /// Language names or aliases (e.g. py, C++, golang)
        #[arg(required = true)]
        tokens: Vec<String>,
    },

    /// Resolve a file extension to a highlight key
    Extension {
        /// Extension with or without the leading dot
        extension: String,
    },

    /// List all known languages and aliases
    Languages,

    /// Compute the render size of an inline image
    ImageSize {
        /// Author-declared width
        #[arg(long)]
        width: Option<f64>,

        /// Author-declared height
        #[arg(long)]
        height: Option<f64>,

        /// Width from image metadata
        #[arg(long)]
        known_width: Option<f64>,

        /// Height from image metadata
        #[arg(long)]
        known_height: Option<f64>,

        /// Layout width available to the image
        #[arg(long)]
        layout_width: Option<f64>,

        /// The image is in a reply thread post
        #[arg(long)]
        reply: bool,

        /// The client is a tablet
        #[arg(long)]
        tablet: bool,
    },

    /// Check whether a cursor offset in a draft is inside a code block
    Cursor {
        /// Draft file, or - for stdin
        file: String,

        /// Cursor position in UTF-16 code units, as reported by text inputs
        offset: usize,

        /// Exit with code 1 when the cursor is outside any code block
        #[arg(long)]
        check: bool,
    },

    /// List fenced code blocks of a Markdown file with their languages
    Scan {
        /// Markdown file, or - for stdin
        file: String,

        /// Exit with code 1 when a block has an unknown language
        #[arg(long)]
        strict: bool,
    },

    /// Create a default configuration file
    Init {
        /// Where to write the file
        #[arg(default_value = ".chatmark.toml")]
        path: PathBuf,
    },

    /// Print the JSON schema of the configuration file
    Schema,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (detected from $SHELL if omitted)
        shell: Option<Shell>,

        /// List available shells
        #[arg(long)]
        list: bool,
    },

    /// Show version information
    Version,
}

/// Shared state handed to command handlers.
pub struct Context {
    pub loaded: LoadedConfig,
    pub formatter: Box<dyn OutputFormatter>,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_context(cli: &Cli) -> Context {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let loaded = match config::load_config(cli.config.as_deref(), &cwd, cli.no_config) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            exit::tool_error();
        }
    };
    if let Some(path) = loaded.source.path() {
        log::debug!("Loaded configuration from {}", path.display());
    }

    let use_colors = std::io::stdout().is_terminal();
    if !use_colors {
        colored::control::set_override(false);
    }

    Context {
        loaded,
        formatter: cli.format.create_formatter(use_colors),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Language { tokens } => commands::language::handle_language(&load_context(&cli), tokens),
        Commands::Extension { extension } => commands::language::handle_extension(&load_context(&cli), extension),
        Commands::Languages => commands::language::handle_languages(&load_context(&cli)),
        Commands::ImageSize {
            width,
            height,
            known_width,
            known_height,
            layout_width,
            reply,
            tablet,
        } => commands::image_size::handle_image_size(
            &load_context(&cli),
            commands::image_size::ImageSizeArgs {
                width: *width,
                height: *height,
                known_width: *known_width,
                known_height: *known_height,
                layout_width: *layout_width,
                reply: *reply,
                tablet: *tablet,
            },
        ),
        Commands::Cursor { file, offset, check } => {
            commands::cursor::handle_cursor(&load_context(&cli), file, *offset, *check)
        }
        Commands::Scan { file, strict } => commands::scan::handle_scan(&load_context(&cli), file, *strict),
        Commands::Init { path } => commands::init::handle_init(path),
        Commands::Schema => commands::schema::handle_schema(),
        Commands::Completions { shell, list } => {
            commands::completions::handle_completions(*shell, *list);
            Ok(exit_codes::SUCCESS)
        }
        Commands::Version => {
            commands::version::handle_version();
            Ok(exit_codes::SUCCESS)
        }
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            exit::tool_error();
        }
    }
}
