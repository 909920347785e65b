use anyhow::Result;
use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;
use minus::Pager;
use std::path::PathBuf;
use tokdiff::areas::comparator::{CompareOptions, CompareSummary, Comparator};
use tokdiff::artifacts::core::{PagerWriter, logging};
use tokdiff::artifacts::diff::Algorithm;
use tokdiff::artifacts::tokens::safe_tokens::SafeTokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

#[derive(Parser)]
#[command(
    name = "tokdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare bracketed token streams of two files or directory trees",
    long_about = "This tool extracts [KIND:field:...] tokens from two files, or from every \
    same-named file of two directory trees, aligns the token streams and prints the \
    token-level differences. Changes confined to safe token kinds are not reported.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, value_name = "PATH_A", help = "The original file or directory")]
    path_a: PathBuf,
    #[arg(index = 2, value_name = "PATH_B", help = "The file or directory to compare against")]
    path_b: PathBuf,
    #[arg(long = "safe", value_name = "KIND", help = "Also ignore changes to this token kind")]
    safe: Vec<String>,
    #[arg(
        long = "unsafe",
        value_name = "KIND",
        help = "Report changes to this token kind even if it is safe by default"
    )]
    unsafe_kinds: Vec<String>,
    #[arg(long, help = "Start from an empty safe-token set")]
    no_default_safe: bool,
    #[arg(long, value_enum, default_value_t = Algorithm::Matcher, help = "The token alignment algorithm")]
    algorithm: Algorithm,
    #[arg(long, value_name = "EXT", default_value = "txt", help = "Extension of the files compared inside directories")]
    ext: String,
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto, help = "When to colorize the output")]
    color: ColorChoice,
    #[arg(long, help = "Never page the output")]
    no_pager: bool,
    #[arg(long, help = "Exit with status 1 when differences were reported")]
    exit_code: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase diagnostic verbosity")]
    verbose: u8,
}

impl Cli {
    fn options(&self) -> CompareOptions {
        let safe_tokens = if self.no_default_safe {
            SafeTokens::empty()
        } else {
            SafeTokens::default()
        };

        CompareOptions::new(
            safe_tokens
                .with_kinds(self.safe.iter().cloned())
                .without_kinds(&self.unsafe_kinds),
            self.algorithm,
            self.ext.trim_start_matches('.').to_string(),
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, std::io::stderr().is_terminal());

    let stdout_is_terminal = std::io::stdout().is_terminal();
    colored::control::set_override(match cli.color {
        ColorChoice::Auto => stdout_is_terminal,
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    });

    let use_pager =
        stdout_is_terminal && !cli.no_pager && std::env::var_os("NO_PAGER").is_none();

    let summary = if use_pager {
        let pager = Pager::new();
        let comparator = Comparator::new(Box::new(PagerWriter::new(pager.clone())), cli.options());
        let result = comparator.compare_paths(&cli.path_a, &cli.path_b);

        // show whatever was reported before a failure, then surface it
        minus::page_all(pager)?;
        result?
    } else {
        let comparator = Comparator::new(Box::new(std::io::stdout()), cli.options());
        comparator.compare_paths(&cli.path_a, &cli.path_b)?
    };

    exit_with_status(&cli, &summary);

    Ok(())
}

fn exit_with_status(cli: &Cli, summary: &CompareSummary) {
    if cli.exit_code && summary.has_differences() {
        std::process::exit(1);
    }
}
