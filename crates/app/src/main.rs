mod render;

use std::fmt;
use std::path::PathBuf;

use prep_core::model::{FilterOptions, SortOption, Subject};
use services::{Clock, DashboardService};
use storage::repository::ChapterRepository;
use storage::sample::sample_chapters;
use storage::{InMemoryRepository, JsonChapterSource};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSubject { raw: String },
    InvalidStatus { raw: String },
    InvalidDifficulty { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSubject { raw } => write!(f, "invalid --subject value: {raw}"),
            ArgsError::InvalidStatus { raw } => write!(f, "invalid --status value: {raw}"),
            ArgsError::InvalidDifficulty { raw } => {
                write!(f, "invalid --difficulty value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- list  [options]");
    eprintln!("  cargo run -p app -- stats [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data <chapters.json>     chapter catalog (built-in sample when omitted)");
    eprintln!("  --subject <name>           Physics (default), Chemistry, or Mathematics");
    eprintln!("  --sort <field-dir>         e.g. name-asc, accuracy-desc, progress-desc");
    eprintln!("  --class <label>            facet toggle, repeatable");
    eprintln!("  --unit <label>             facet toggle, repeatable");
    eprintln!("  --status <label>           facet toggle, repeatable");
    eprintln!("  --difficulty <label>       facet toggle, repeatable");
    eprintln!("  --weak-only                only chapters flagged weak");
    eprintln!("  --not-started-only         only chapters not yet started");
    eprintln!("  --query <text>             search names, tags, and descriptions");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PREP_DATA, PREP_SUBJECT");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    List,
    Stats,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "list" => Some(Self::List),
            "stats" => Some(Self::Stats),
            _ => None,
        }
    }
}

struct Args {
    data: Option<PathBuf>,
    subject: Subject,
    sort: SortOption,
    options: FilterOptions,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut data = std::env::var("PREP_DATA").ok().map(PathBuf::from);
        let mut subject = std::env::var("PREP_SUBJECT")
            .ok()
            .and_then(|value| value.parse::<Subject>().ok())
            .unwrap_or(Subject::Physics);
        let mut sort = SortOption::default();
        let mut options = FilterOptions::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data" => {
                    let value = require_value(args, "--data")?;
                    data = Some(PathBuf::from(value));
                }
                "--subject" => {
                    let value = require_value(args, "--subject")?;
                    subject = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSubject { raw: value })?;
                }
                "--sort" => {
                    let value = require_value(args, "--sort")?;
                    // Unknown fields fall back to name ordering by contract.
                    sort = SortOption::parse(&value);
                }
                "--class" => {
                    let value = require_value(args, "--class")?;
                    options.toggle_class(value);
                }
                "--unit" => {
                    let value = require_value(args, "--unit")?;
                    options.toggle_unit(value);
                }
                "--status" => {
                    let value = require_value(args, "--status")?;
                    let status = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidStatus { raw: value })?;
                    options.toggle_status(status);
                }
                "--difficulty" => {
                    let value = require_value(args, "--difficulty")?;
                    let difficulty = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidDifficulty { raw: value })?;
                    options.toggle_difficulty(difficulty);
                }
                "--weak-only" => options.show_weak_only = true,
                "--not-started-only" => options.show_not_started_only = true,
                "--query" => {
                    options.query = require_value(args, "--query")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            data,
            subject,
            sort,
            options,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: the list view when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::List,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::List,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let args = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Pick the repository collaborator in the binary glue so the service
    // stays source-agnostic.
    let repository: Box<dyn ChapterRepository> = match &args.data {
        Some(path) => {
            log::debug!("loading chapters from {}", path.display());
            Box::new(JsonChapterSource::new(path))
        }
        None => {
            log::debug!("no --data given, using the built-in sample catalog");
            Box::new(InMemoryRepository::with_chapters(sample_chapters()))
        }
    };

    let service = DashboardService::load(repository.as_ref()).await?;
    log::info!(
        "loaded {} chapters, subject {}, sort {}",
        service.chapters().len(),
        args.subject,
        args.sort
    );

    let clock = Clock::default_clock();
    match cmd {
        Command::List => {
            let view = service.chapter_view(args.subject, &args.options, args.sort);
            print!("{}", render::render_list(&view, clock.now()));
        }
        Command::Stats => {
            let stats = service.subject_stats(args.subject);
            print!("{}", render::render_stats(args.subject, &stats));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
