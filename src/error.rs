//! Error types for lesson input, artifact output and batch runs
//!
//! Diagram synthesis itself cannot fail. Everything here comes from the
//! filesystem or from malformed lesson records.

use std::path::PathBuf;

use thiserror::Error;

/// A lesson record (or a whole shard of them) that could not be loaded
#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Failed to read shard {}: {source}", path.display())]
    ReadShard {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Shard {} is not a JSON array of lessons: {source}", path.display())]
    ParseShard {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Malformed lesson record #{index} in {}: {source}", path.display())]
    MalformedRecord {
        path: PathBuf,
        index: usize,
        source: serde_json::Error,
    },
}

/// A generated diagram that could not be written out
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteArtifact {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Conditions that stop a batch run before any lesson is processed
#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Input path {} does not exist", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to list shards in {}: {source}", path.display())]
    ListShards {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output root may be created, but its parent must already exist
    #[error("Parent directory of output {} does not exist", path.display())]
    OutputNotFound { path: PathBuf },
}
