//! Circuit Diagrams CLI
//!
//! Usage:
//!   circuit-diagrams [OPTIONS] <INPUT>
//!
//! Options:
//!   -o, --output <DIR>         Output root for lesson directories
//!   -s, --stylesheet <FILE>    Stylesheet file for color palette (TOML format)
//!       --prefix <PREFIX>      File-name prefix of shard files in a directory
//!       --lesson <ID>          Only process this lesson
//!       --artifact <ARTIFACT>  With --lesson, print one diagram to stdout
//!       --log-level <LEVEL>    Log level filter
//!   -h, --help                 Print help

use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use circuit_diagrams::batch::{self, DEFAULT_SHARD_PREFIX};
use circuit_diagrams::{run_batch, Artifact, BatchOptions, DiagramConfig, DiagramGenerator, Stylesheet};

#[derive(Parser, Debug)]
#[command(name = "circuit-diagrams")]
#[command(about = "Generate step-by-step circuit diagrams for electronics lessons")]
struct Cli {
    /// Shard file, or directory of shard files
    input: PathBuf,

    /// Output root for lesson directories
    #[arg(short, long, default_value = "diagrams")]
    output: PathBuf,

    /// Stylesheet file for color palette (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// File-name prefix of shard files in an input directory
    #[arg(long, default_value = DEFAULT_SHARD_PREFIX)]
    prefix: String,

    /// Only process the lesson with this id
    #[arg(long)]
    lesson: Option<u32>,

    /// Print one diagram (main, final or step-N) of --lesson to stdout
    #[arg(long, requires = "lesson")]
    artifact: Option<Artifact>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting circuit-diagrams");
    debug!(cli:?; "Parsed arguments");

    // Load stylesheet
    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading stylesheet '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };
    let config = DiagramConfig::new().with_stylesheet(stylesheet);

    if let (Some(id), Some(artifact)) = (cli.lesson, cli.artifact) {
        print_artifact(&cli, id, artifact, config);
        return;
    }

    let mut options = BatchOptions::new(&cli.input, &cli.output).with_shard_prefix(&cli.prefix);
    if let Some(id) = cli.lesson {
        options = options.with_lesson(id);
    }

    let report = match run_batch(&options, &config) {
        Ok(report) => report,
        Err(err) => {
            error!(err:err; "Batch failed");
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };

    for lesson in &report.lessons {
        match &lesson.outcome {
            Ok(()) => println!(
                "level {:03} {}: {} diagrams",
                lesson.id, lesson.title, lesson.diagrams_written
            ),
            Err(e) => eprintln!("level {:03} {}: {}", lesson.id, lesson.title, e),
        }
    }
    for skipped in &report.skipped {
        eprintln!("skipped: {}", skipped);
    }
    println!(
        "Processed {} lessons, generated {} diagrams",
        report.lesson_count(),
        report.diagram_count()
    );

    if report.failures() > 0 {
        process::exit(1);
    }
}

fn print_artifact(cli: &Cli, id: u32, artifact: Artifact, config: DiagramConfig) {
    let lessons = match batch::load_lessons(&cli.input, &cli.prefix) {
        Ok((lessons, _)) => lessons,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let Some(lesson) = lessons.iter().find(|l| l.id == id) else {
        eprintln!("Error: lesson {} not found in '{}'", id, cli.input.display());
        process::exit(1);
    };

    let generator = DiagramGenerator::new(lesson, config);
    println!("{}", artifact.render(&generator));
}
