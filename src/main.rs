use std::{io, process};

use clap::Parser;
use colored::Colorize;
use minicompiler::{
    driver::driver::{run, Options},
    errors::errors::{Error, ErrorTip},
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Tokenizes .min source files", long_about = None)]
struct Cli {
    /// Source file to tokenize, must end in `.min`
    file: String,

    /// Do not write the `<file>.lex` token dump
    #[arg(long)]
    no_lex_file: bool,

    /// Print the token dump to stdout
    #[arg(long)]
    print_tokens: bool,

    /// Print the source before scanning
    #[arg(long)]
    debug_source: bool,

    /// Disable colored error output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        Options {
            write_lex_file: !cli.no_lex_file,
            print_tokens: cli.print_tokens,
            debug_source: cli.debug_source,
            ..Options::new(cli.file.as_str())
        }
    }
}

fn report_fatal(error: &Error) -> ! {
    debug!(kind = error.get_error_name(), "fatal");

    eprintln!("{} {}", "ERROR:".red(), error);
    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        eprintln!("{} {}", "tip:".yellow(), tip);
    }
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let options = Options::from(&cli);
    debug!(?options, "starting");

    if let Err(e) = run(&options, &mut io::stdout().lock()) {
        report_fatal(&e);
    }
}
