//! Errors raised while loading, parsing and rendering performance logs.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::common_types::{LineNumber, OntologyName};

/// A log could not be parsed. Lines are counted from 1.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    /// A measurement line does not yield a reasoner name and a time.
    #[error("line {line}: malformed log line: {reason}")]
    MalformedLog {
        /// offending line
        line: LineNumber,
        /// what is wrong with it
        reason: String,
    },

    /// A measurement line appears before any ontology header.
    #[error("line {line}: measurement found before any ontology header")]
    OrphanMeasurement {
        /// offending line
        line: LineNumber,
    },
}

impl ParseError {
    pub(crate) fn malformed<S: Into<String>>(line: LineNumber, reason: S) -> Self {
        ParseError::MalformedLog {
            line,
            reason: reason.into(),
        }
    }

    /// Line on which the error was found.
    pub fn line(&self) -> LineNumber {
        match self {
            ParseError::MalformedLog { line, .. } | ParseError::OrphanMeasurement { line } => *line,
        }
    }
}

/// Error for the whole crate.
#[derive(Debug, Error)]
pub enum PerfError {
    /// The input log cannot be opened or read.
    #[error("{}: cannot read log file: {}", path.display(), source)]
    FileNotFound {
        /// path we tried to read
        path: PathBuf,
        /// underlying io error
        source: io::Error,
    },

    /// The input log was read but is not a valid performance log.
    #[error("{}: {}", path.display(), source)]
    Parse {
        /// file being parsed
        path: PathBuf,
        /// what went wrong and where
        source: ParseError,
    },

    /// A json export holds timings no log could have produced.
    #[error("{}: invalid performance log: {}", path.display(), reason)]
    InvalidLog {
        /// file being loaded
        path: PathBuf,
        /// broken invariant
        reason: String,
    },

    /// The chart of one ontology could not be produced.
    #[error("cannot render chart for '{ontology}': {source}")]
    RenderFailure {
        /// ontology whose chart failed
        ontology: OntologyName,
        /// cause of the failure
        source: Box<PerfError>,
    },

    /// An IO Error
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),

    /// Json (de)serialization failed
    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PerfError {
    pub(crate) fn render_failure<S: Into<OntologyName>>(ontology: S, source: PerfError) -> Self {
        PerfError::RenderFailure {
            ontology: ontology.into(),
            source: Box::new(source),
        }
    }
}
