//! codepad - print source files with syntax highlighting

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use codepad::config::Config;
use codepad::error::Result;
use codepad::syntax::{highlight_lines, CompiledLanguage, LanguageId};
use codepad::terminal::Terminal;

/// Print source code with syntax highlighting
#[derive(Parser, Debug)]
#[command(name = "codepad")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to highlight (reads stdin when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Language to highlight as (detected from the file extension otherwise)
    #[arg(short, long, value_name = "NAME")]
    language: Option<LanguageId>,

    /// Prefix each line with its number
    #[arg(short = 'n', long)]
    line_numbers: bool,

    /// Disable colors
    #[arg(long)]
    no_color: bool,

    /// List supported languages and exit
    #[arg(long)]
    list_languages: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn run(args: Args) -> Result<()> {
    if args.list_languages {
        print_languages();
        return Ok(());
    }

    let config = Config::load();

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let language = args
        .language
        .or_else(|| args.file.as_deref().and_then(LanguageId::from_path))
        .or(config.default_language);
    info!(language = ?language, bytes = text.len(), "highlighting");

    let lines = match language {
        Some(id) => highlight_lines(&text, id),
        None => {
            debug!("no language detected, printing without highlighting");
            CompiledLanguage::identity().highlight_lines(&text)
        }
    };

    let color = config.color && !args.no_color;
    let line_numbers = config.show_line_numbers || args.line_numbers;
    let mut terminal = Terminal::new(io::stdout().lock(), color, line_numbers);
    terminal.write_lines(&lines, &config.theme)
}

fn print_languages() {
    for id in LanguageId::ALL {
        println!("{:<12}{}  (.{})", id.name(), id.display_name(), id.extensions().join(", ."));
    }
}
