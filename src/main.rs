//! CLI entry point for valtree

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use valtree::{
    BuildError, ConfigError, CopyError, DecodeError, Decoder, DepthLimit, FunctionDisplay,
    Settings, StdoutClipboard, TreeBuilder, TreeFormatter, copy_node,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "valtree")]
#[command(about = "Inspect a JSON value as a collapsible tree")]
#[command(version)]
struct Args {
    /// JSON file to inspect ("-" or nothing reads stdin)
    input: Option<PathBuf>,

    /// Start with branches expanded (up to --max-depth)
    #[arg(short = 'e', long = "expand")]
    expand: bool,

    /// Expand branches shallower than N levels (-1 or "all" for no limit)
    #[arg(
        short = 'L',
        long = "max-depth",
        value_name = "N",
        allow_negative_numbers = true
    )]
    max_depth: Option<DepthLimit>,

    /// How functions are shown
    #[arg(short = 'F', long = "functions", value_name = "MODE")]
    functions: Option<FunctionDisplay>,

    /// Read plain JSON without decoding `$`-tagged values
    #[arg(long = "plain")]
    plain: bool,

    /// Show item counts next to collapsed branches
    #[arg(short = 'c', long = "count")]
    count: bool,

    /// Draw indent guides
    #[arg(short = 'g', long = "guides")]
    guides: bool,

    /// Header line printed above the tree
    #[arg(long = "title")]
    title: Option<String>,

    /// Control color output: auto, always, never [default: auto]
    #[arg(long = "color", value_name = "WHEN")]
    color: Option<ColorMode>,

    /// Print the copy text of the node at ADDRESS instead of the tree
    #[arg(long = "copy", value_name = "ADDRESS", conflicts_with = "list_expanded")]
    copy: Option<String>,

    /// Print the addresses that start expanded, one per line
    #[arg(long = "list-expanded")]
    list_expanded: bool,

    /// Settings file (JSON); flags override its values
    #[arg(long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log tree building to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read '{path}': {source}")]
    Input { path: String, source: io::Error },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Copy(#[from] CopyError),

    #[error("no node at address '{0}'")]
    UnknownAddress(String),

    #[error("value at '{0}' has no JSON form to copy")]
    NothingToCopy(String),

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "valtree=debug" } else { "valtree=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("valtree: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let settings = load_settings(args)?;

    let text = read_input(args.input.as_ref())?;
    let decoder = if args.plain {
        Decoder::plain()
    } else {
        Decoder::tagged()
    };
    let value = decoder.decode_str(&text)?;

    let Some(root) = TreeBuilder::new(settings.build.clone()).build(&value)? else {
        eprintln!("valtree: root value is a hidden function, nothing to show");
        return Ok(());
    };

    if let Some(address) = &args.copy {
        let node = root
            .find(address)
            .ok_or_else(|| CliError::UnknownAddress(address.clone()))?;
        return match copy_node(node, &mut StdoutClipboard)? {
            Some(_) => Ok(()),
            None => Err(CliError::NothingToCopy(address.clone())),
        };
    }

    let expanded = settings.expansion.plan(&root);

    if args.list_expanded {
        let mut stdout = io::stdout().lock();
        for address in &expanded {
            writeln!(stdout, "{}", address)?;
        }
        return Ok(());
    }

    TreeFormatter::new(settings.render).print(&root, &expanded)?;
    Ok(())
}

/// Settings file values with command-line flags applied on top.
fn load_settings(args: &Args) -> Result<Settings, CliError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    if let Some(mode) = args.functions {
        settings.build.function_display = mode;
    }
    if args.expand {
        settings.expansion.default_expanded = true;
    }
    if let Some(depth) = args.max_depth {
        settings.expansion.max_depth = depth;
    }
    if args.count {
        settings.render.show_items_count = true;
    }
    if args.guides {
        settings.render.show_indent_guides = true;
    }
    if args.title.is_some() {
        settings.render.title = args.title.clone();
    }
    settings.render.use_color = match args.color {
        Some(mode) => should_use_color(mode),
        None => settings.render.use_color && should_use_color(ColorMode::Auto),
    };

    Ok(settings)
}

fn read_input(input: Option<&PathBuf>) -> Result<String, CliError> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| CliError::Input {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| CliError::Input {
                    path: "-".to_string(),
                    source,
                })?;
            Ok(text)
        }
    }
}
