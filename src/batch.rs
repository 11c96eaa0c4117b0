//! Batch generation over lesson shards
//!
//! A shard is a JSON array of lesson records. A batch reads one shard file,
//! or every `<prefix>*.json` file of a directory in file-name order, and
//! writes each lesson's diagrams to `level-{id:03}/` under the output root.
//! Bad shards and bad records are skipped, and a lesson that fails to write
//! is reported. Neither stops the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{debug, info, warn};

use crate::diagram::DiagramGenerator;
use crate::error::{BatchError, LessonError, PersistError};
use crate::lesson::{parse_shard, LessonSpec};
use crate::DiagramConfig;

/// Default file-name prefix of shard files
pub const DEFAULT_SHARD_PREFIX: &str = "levels-";

/// One diagram of a lesson
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Step(u32),
    Main,
    Final,
}

impl Artifact {
    /// File name the artifact is written under
    pub fn file_name(&self) -> String {
        match self {
            Artifact::Step(n) => format!("step-{n}.svg"),
            Artifact::Main => "main-diagram.svg".to_string(),
            Artifact::Final => "final-view.svg".to_string(),
        }
    }

    pub fn render(&self, generator: &DiagramGenerator) -> String {
        match self {
            Artifact::Step(n) => generator.step_diagram(*n),
            Artifact::Main => generator.main_diagram(),
            Artifact::Final => generator.final_view(),
        }
    }
}

impl FromStr for Artifact {
    type Err = String;

    /// Parse `main`, `final` or `step-N`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Artifact::Main),
            "final" => Ok(Artifact::Final),
            _ => s
                .strip_prefix("step-")
                .and_then(|n| n.parse().ok())
                .map(Artifact::Step)
                .ok_or_else(|| format!("unknown artifact '{s}', expected main, final or step-N")),
        }
    }
}

/// What to read and where to write
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// A shard file or a directory of shards
    pub input: PathBuf,
    /// Root under which lesson directories are created
    pub output: PathBuf,
    pub shard_prefix: String,
    /// Only process the lesson with this id
    pub lesson: Option<u32>,
}

impl BatchOptions {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            shard_prefix: DEFAULT_SHARD_PREFIX.to_string(),
            lesson: None,
        }
    }

    pub fn with_shard_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.shard_prefix = prefix.into();
        self
    }

    pub fn with_lesson(mut self, id: u32) -> Self {
        self.lesson = Some(id);
        self
    }
}

/// Outcome of writing one lesson's diagrams
#[derive(Debug)]
pub struct LessonReport {
    pub id: u32,
    pub title: String,
    /// Step numbers whose diagrams were written, in order
    pub steps_written: Vec<u32>,
    /// Total files written, including the main and final diagrams
    pub diagrams_written: usize,
    pub outcome: Result<(), PersistError>,
}

impl LessonReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct BatchReport {
    pub lessons: Vec<LessonReport>,
    /// Shards and records that could not be loaded
    pub skipped: Vec<LessonError>,
}

impl BatchReport {
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn diagram_count(&self) -> usize {
        self.lessons.iter().map(|l| l.diagrams_written).sum()
    }

    /// Number of lessons that failed to persist
    pub fn failures(&self) -> usize {
        self.lessons.iter().filter(|l| !l.is_success()).count()
    }
}

/// Output directory for a lesson
pub fn lesson_dir(output: &Path, id: u32) -> PathBuf {
    output.join(format!("level-{id:03}"))
}

/// Shard files to read for `input`, in processing order
pub fn shard_paths(input: &Path, prefix: &str) -> Result<Vec<PathBuf>, BatchError> {
    if !input.exists() {
        return Err(BatchError::InputNotFound {
            path: input.to_path_buf(),
        });
    }
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let list_err = |source| BatchError::ListShards {
        path: input.to_path_buf(),
        source,
    };
    let mut paths = vec![];
    for entry in fs::read_dir(input).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        let is_shard = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix) && n.ends_with(".json"));
        if is_shard {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Read every lesson from the shards of `input`.
///
/// Returns the lessons in shard order together with everything that had to
/// be skipped.
pub fn load_lessons(
    input: &Path,
    prefix: &str,
) -> Result<(Vec<LessonSpec>, Vec<LessonError>), BatchError> {
    let mut lessons = vec![];
    let mut skipped = vec![];

    for path in shard_paths(input, prefix)? {
        info!(path:? = path; "Reading shard");
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(source) => {
                let err = LessonError::ReadShard { path, source };
                warn!(err:err = err; "Skipping shard");
                skipped.push(err);
                continue;
            }
        };
        let records = match parse_shard(&source) {
            Ok(records) => records,
            Err(source) => {
                let err = LessonError::ParseShard { path, source };
                warn!(err:err = err; "Skipping shard");
                skipped.push(err);
                continue;
            }
        };
        for (index, record) in records.into_iter().enumerate() {
            match record {
                Ok(lesson) => lessons.push(lesson),
                Err(source) => {
                    let err = LessonError::MalformedRecord {
                        path: path.clone(),
                        index,
                        source,
                    };
                    warn!(err:err = err; "Skipping lesson record");
                    skipped.push(err);
                }
            }
        }
    }

    Ok((lessons, skipped))
}

/// Write one lesson's step, main and final diagrams into `dir`.
///
/// Stops at the first file that cannot be written; what was written before
/// it is still reported.
pub fn write_lesson(generator: &DiagramGenerator, dir: &Path) -> LessonReport {
    let lesson = generator.lesson();
    let mut report = LessonReport {
        id: lesson.id,
        title: lesson.title.clone(),
        steps_written: vec![],
        diagrams_written: 0,
        outcome: Ok(()),
    };

    if let Err(source) = fs::create_dir_all(dir) {
        report.outcome = Err(PersistError::CreateDir {
            path: dir.to_path_buf(),
            source,
        });
        return report;
    }

    let steps = lesson.step_numbers();
    if steps.len() < lesson.instructions.len() {
        warn!(
            lesson_id = lesson.id,
            instructions = lesson.instructions.len(),
            distinct = steps.len();
            "Duplicate step numbers, drawing the first instruction of each"
        );
    }
    let artifacts = steps
        .into_iter()
        .map(Artifact::Step)
        .chain([Artifact::Main, Artifact::Final]);
    for artifact in artifacts {
        let path = dir.join(artifact.file_name());
        if let Err(source) = fs::write(&path, artifact.render(generator)) {
            report.outcome = Err(PersistError::WriteArtifact { path, source });
            return report;
        }
        debug!(path:? = path; "Wrote diagram");
        if let Artifact::Step(n) = artifact {
            report.steps_written.push(n);
        }
        report.diagrams_written += 1;
    }

    report
}

fn check_output(output: &Path) -> Result<(), BatchError> {
    if output.is_dir() {
        return Ok(());
    }
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            Err(BatchError::OutputNotFound {
                path: output.to_path_buf(),
            })
        }
        _ => Ok(()),
    }
}

/// Generate and write diagrams for every lesson selected by `options`
pub fn run_batch(options: &BatchOptions, config: &DiagramConfig) -> Result<BatchReport, BatchError> {
    check_output(&options.output)?;
    let (lessons, skipped) = load_lessons(&options.input, &options.shard_prefix)?;
    let mut report = BatchReport {
        lessons: vec![],
        skipped,
    };

    for lesson in lessons
        .iter()
        .filter(|l| options.lesson.map_or(true, |id| l.id == id))
    {
        info!(lesson_id = lesson.id, title = lesson.title.as_str(); "Processing lesson");
        let generator = DiagramGenerator::new(lesson, config.clone());
        let lesson_report = write_lesson(&generator, &lesson_dir(&options.output, lesson.id));
        if let Err(err) = &lesson_report.outcome {
            warn!(lesson_id = lesson.id, err:% = err; "Failed to persist lesson diagrams");
        }
        report.lessons.push(lesson_report);
    }

    info!(
        lessons = report.lesson_count(),
        diagrams = report.diagram_count(),
        skipped = report.skipped.len();
        "Batch complete"
    );
    Ok(report)
}
