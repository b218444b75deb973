mod config;
mod output;
mod test_runner;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing_subscriber::EnvFilter;

use headsplit::{HeaderSpec, Splitter, splitter::classify::Line};

use config::{Config, ConfigError};
use output::Format;

const SUBCOMMANDS: &[&str] = &["split", "test", "help", "-h", "--help", "-V", "--version"];
const GLOBAL_FLAGS: &[&str] = &["--no-color", "-v", "-vv", "-vvv", "--verbose"];

#[derive(Parser)]
#[command(name = "headsplit", version, about = "Split markdown into header-scoped blocks")]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a markdown file and print its blocks
    Split(SplitArgs),

    /// Run .test.md fixture files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct SplitArgs {
    /// Markdown file to split, or `-` for stdin
    file: String,

    /// TOML config file (defaults to ./headsplit.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Header to split on, as MARKER=LABEL. Repeatable; replaces the configured list
    #[arg(short = 'H', long = "header", value_parser = config::parse_header_arg)]
    headers: Vec<HeaderSpec>,

    /// Never treat lines inside fenced code blocks as headers
    #[arg(long)]
    skip_fenced_code: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the effective header list and exit
    #[arg(long)]
    list_headers: bool,

    /// Validate config and input, print a summary instead of blocks
    #[arg(long)]
    check: bool,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.md file or directory containing them
    path: String,

    /// Run only tests in these categories (subfolder names). Repeatable.
    #[arg(short, long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    // `headsplit file.md` is shorthand for `headsplit split file.md`.
    let mut args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args
        .iter()
        .skip(1)
        .position(|a| !GLOBAL_FLAGS.contains(&a.as_str()))
        .map(|i| i + 1)
    {
        if !SUBCOMMANDS.contains(&args[pos].as_str()) {
            args.insert(pos, "split".to_string());
        }
    }

    let cli = Cli::parse_from(&args);
    init_tracing(cli.verbose, cli.no_color);

    match cli.command {
        Command::Split(split_args) => do_split(split_args, cli.no_color),
        Command::Test(test_args) => {
            let path = Path::new(&test_args.path);
            if test_args.list_categories {
                test_runner::list_categories(path);
                return;
            }
            let exit_code = test_runner::run_tests(path, cli.no_color, &test_args.category);
            process::exit(exit_code);
        }
    }
}

fn init_tracing(verbose: u8, no_color: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}

fn do_split(args: SplitArgs, no_color: bool) {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let splitter = match resolve_splitter(&args) {
        Ok(s) => s,
        Err(Failure::Message(message)) => {
            eprintln!("error: {}", message);
            process::exit(1);
        }
        Err(Failure::Config { path, source, error }) => {
            let mut files = SimpleFiles::new();
            let file_id = files.add(path.display().to_string(), source);
            let writer = StandardStream::stderr(color_choice);
            let config = term::Config::default();
            let diagnostic = error.to_diagnostic(file_id);
            let _ = term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic);
            process::exit(1);
        }
    };

    // --list-headers: print the effective header list
    if args.list_headers {
        for spec in splitter.specs() {
            println!("{}", spec);
        }
        if splitter.skips_fenced_code() {
            println!("(fenced code blocks are not split)");
        }
        return;
    }

    let document = match read_input(&args.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: cannot read '{}': {}", args.file, e);
            process::exit(1);
        }
    };

    let blocks = splitter.split(&document);

    // --check: summarize instead of printing blocks
    if args.check {
        let headers = splitter
            .classify_lines(&document)
            .iter()
            .filter(|line| matches!(line, Line::Header { .. }))
            .count();
        eprintln!(
            "ok: {}: {} header line(s), {} block(s)",
            args.file,
            headers,
            blocks.len()
        );
        return;
    }

    let stdout = std::io::stdout();
    if let Err(e) = output::write_blocks(&mut stdout.lock(), &blocks, args.format) {
        eprintln!("error: cannot write output: {}", e);
        process::exit(1);
    }
}

enum Failure {
    Message(String),
    Config {
        path: PathBuf,
        source: String,
        error: ConfigError,
    },
}

/// Header list precedence: `--header` flags, then the config file, then the defaults.
fn resolve_splitter(args: &SplitArgs) -> Result<Splitter, Failure> {
    let cwd = PathBuf::from(".");
    let (config, config_file) = match Config::locate(args.config.as_deref(), &cwd) {
        Some(path) => {
            let source = std::fs::read_to_string(&path).map_err(|e| {
                Failure::Message(format!("cannot read '{}': {}", path.display(), e))
            })?;
            tracing::info!(path = %path.display(), "loading config");
            match Config::parse(&source) {
                Ok(config) => (config, Some((path, source))),
                Err(error) => return Err(Failure::Config { path, source, error }),
            }
        }
        None => (Config::default(), None),
    };

    let skip_fenced_code = args.skip_fenced_code || config.skip_fenced_code;

    if !args.headers.is_empty() {
        tracing::info!(count = args.headers.len(), "using headers from the command line");
        return Splitter::new(args.headers.iter().cloned())
            .map(|s| s.skip_fenced_code(skip_fenced_code))
            .map_err(|e| Failure::Message(e.to_string()));
    }

    config
        .splitter()
        .map(|s| s.skip_fenced_code(skip_fenced_code))
        .map_err(|error| match config_file {
            Some((path, source)) => Failure::Config { path, source, error },
            None => Failure::Message(error.to_string()),
        })
}

fn read_input(file: &str) -> std::io::Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(file)
    }
}
