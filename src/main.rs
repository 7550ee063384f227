use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use bibirble::Settings;
use bibirble::reveal::reveal_text;
use bibirble::scripture::{
    area_of, build_sections, find_passage, list_books, load_passages, resolve_data_path,
    write_passages,
};

#[derive(Parser, Debug)]
#[command(
    name = "bibirble",
    version,
    about = "Build and query the scripture sections file"
)]
struct Cli {
    /// Log extraction details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract passages from every book file and write the sections file (default)
    Build(BuildArgs),
    /// List the books present in a sections file
    Books(DataArgs),
    /// Show the testament and area of a book
    Area {
        /// Book name, e.g. "1corinthians"
        book: String,
    },
    /// Print a passage with only the first chunks of words visible
    Reveal(RevealArgs),
    /// Manage the settings file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug, Default)]
struct BuildArgs {
    /// Directory containing one <book>.json file per book
    #[arg(long, value_name = "DIR")]
    input_dir: Option<PathBuf>,

    /// Output path for the sections file
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct DataArgs {
    /// Sections file to read (searched for when omitted)
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct RevealArgs {
    #[arg(long)]
    book: String,

    #[arg(long)]
    chapter: i64,

    #[arg(long)]
    verse: i64,

    /// Chunks uncovered after the first; the whole passage when omitted
    #[arg(long)]
    stage: Option<usize>,

    #[command(flatten)]
    data: DataArgs,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default settings file
    Init,
    /// Print the settings file location
    Path,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Command::Build(BuildArgs::default())) {
        Command::Build(args) => cmd_build(args),
        Command::Books(args) => cmd_books(args),
        Command::Area { book } => cmd_area(&book),
        Command::Reveal(args) => cmd_reveal(args),
        Command::Config(command) => cmd_config(command),
    }
}

fn load_settings() -> Result<Settings> {
    Settings::load().context("failed to load settings")
}

fn cmd_build(args: BuildArgs) -> Result<()> {
    let settings = load_settings()?;
    let input_dir = args.input_dir.unwrap_or_else(|| settings.input_dir.clone());
    let output = args.output.unwrap_or_else(|| settings.output.clone());

    let passages = build_sections(&input_dir, Some(&output))
        .with_context(|| format!("failed to build sections from {}", input_dir.display()))?;
    write_passages(&output, &passages)
        .with_context(|| format!("failed to write {}", output.display()))?;

    tracing::info!(path = %output.display(), passages = passages.len(), "wrote sections");
    println!("Total sections saved: {}", passages.len());
    Ok(())
}

fn load_data(args: &DataArgs) -> Result<Vec<bibirble::Passage>> {
    let settings = load_settings()?;
    let preferred = args.data.as_deref().or(settings.data_path.as_deref());
    let path = resolve_data_path(preferred)?;
    tracing::debug!(path = %path.display(), "reading sections");
    load_passages(&path).with_context(|| format!("failed to read {}", path.display()))
}

fn cmd_books(args: DataArgs) -> Result<()> {
    let passages = load_data(&args)?;
    for book in list_books(&passages) {
        println!("{book}");
    }
    Ok(())
}

fn cmd_area(book: &str) -> Result<()> {
    let info = area_of(book).ok_or_else(|| anyhow!("unknown book: {book}"))?;
    println!("{}: {}", info.testament, info.area);
    Ok(())
}

fn cmd_reveal(args: RevealArgs) -> Result<()> {
    let passages = load_data(&args.data)?;
    let passage = find_passage(&passages, &args.book, args.chapter, args.verse).ok_or_else(|| {
        anyhow!(
            "no passage at {} {}:{}",
            args.book,
            args.chapter,
            args.verse
        )
    })?;
    println!("{}", reveal_text(&passage.text, args.stage));
    Ok(())
}

fn cmd_config(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Init => match Settings::init_default()? {
            Some(path) => println!("Wrote default settings to {}", path.display()),
            None => println!("No config directory available on this platform"),
        },
        ConfigCommand::Path => match Settings::get_config_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("<none>"),
        },
    }
    Ok(())
}
