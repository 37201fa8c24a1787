//! Provide structures holding all parsed timings.
use crate::common_types::{OntologyName, ReasonerName, Seconds};
use crate::error::{ParseError, PerfError};
use crate::parser::{classify, Line, ParserConfiguration};
use indexmap::IndexMap;
use serde_derive::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, warn};

/// One reasoner time observed for an ontology.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Measurement {
    /// who ran
    pub reasoner: ReasonerName,
    /// how long it took
    pub seconds: Seconds,
}

/// Everything found in a performance log:
/// - the performance table, measurements of each ontology in file order
/// - the reasoner registry, all distinct reasoners in first-occurrence order.
///
/// Built once per parse and read-only afterwards.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PerformanceLog {
    ontologies: IndexMap<OntologyName, Vec<Measurement>>,
    reasoners: Vec<ReasonerName>,
}

impl PerformanceLog {
    /// Parse log content, aborting on the first bad line.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        PerformanceLog::parse_with(text, ParserConfiguration::default())
    }

    /// Parse log content with the given configuration.
    pub fn parse_with(text: &str, config: ParserConfiguration) -> Result<Self, ParseError> {
        let mut log = PerformanceLog::default();
        // ontology receiving measurements
        let mut current: Option<OntologyName> = None;

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let classified = match classify(raw, line) {
                Ok(classified) => classified,
                // only measurement lines can be malformed
                Err(ParseError::MalformedLog { .. }) if current.is_none() => {
                    return Err(ParseError::OrphanMeasurement { line })
                }
                Err(e @ ParseError::MalformedLog { .. }) if config.skip_malformed => {
                    warn!("skipping {}", e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            match classified {
                Line::Blank => (),
                Line::Ignored => debug!("line {}: ignored '{}'", line, raw.trim()),
                Line::Header(name) => {
                    if log.ontologies.insert(name.to_owned(), Vec::new()).is_some() {
                        warn!(
                            "line {}: ontology '{}' seen again, dropping its previous measurements",
                            line, name
                        );
                    }
                    current = Some(name.to_owned());
                }
                Line::Measurement(reasoner, seconds) => {
                    let ontology = current
                        .as_ref()
                        .ok_or(ParseError::OrphanMeasurement { line })?;
                    if !log.reasoners.iter().any(|r| r == reasoner) {
                        log.reasoners.push(reasoner.to_owned());
                    }
                    if let Some(measurements) = log.ontologies.get_mut(ontology) {
                        measurements.push(Measurement {
                            reasoner: reasoner.to_owned(),
                            seconds,
                        });
                    }
                }
            }
        }
        Ok(log)
    }

    /// Read and parse a log file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PerfError> {
        PerformanceLog::load_with(path, ParserConfiguration::default())
    }

    /// Read and parse a log file with the given configuration.
    pub fn load_with<P: AsRef<Path>>(
        path: P,
        config: ParserConfiguration,
    ) -> Result<Self, PerfError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| PerfError::FileNotFound {
            path: path.to_owned(),
            source,
        })?;
        PerformanceLog::parse_with(&text, config).map_err(|source| PerfError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Load a log previously exported with `save`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, PerfError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PerfError::FileNotFound {
            path: path.to_owned(),
            source,
        })?;
        let log: PerformanceLog = serde_json::from_reader(file)?;
        log.check().map_err(|reason| PerfError::InvalidLog {
            path: path.to_owned(),
            reason,
        })?;
        Ok(log)
    }

    /// Verify what parsing guarantees: non-empty names, distinct registered
    /// reasoners and non-negative finite times.
    fn check(&self) -> Result<(), String> {
        for (index, reasoner) in self.reasoners.iter().enumerate() {
            if reasoner.trim().is_empty() {
                return Err("empty reasoner name in registry".to_owned());
            }
            if self.reasoners[..index].contains(reasoner) {
                return Err(format!("reasoner '{}' registered twice", reasoner));
            }
        }
        for (ontology, measurements) in &self.ontologies {
            if ontology.trim().is_empty() {
                return Err("empty ontology name".to_owned());
            }
            for measurement in measurements {
                if !self.reasoners.contains(&measurement.reasoner) {
                    return Err(format!(
                        "reasoner '{}' of ontology '{}' is not registered",
                        measurement.reasoner, ontology
                    ));
                }
                if !measurement.seconds.is_finite() || measurement.seconds < 0.0 {
                    return Err(format!(
                        "invalid time {} for '{}' on ontology '{}'",
                        measurement.seconds, measurement.reasoner, ontology
                    ));
                }
            }
        }
        Ok(())
    }

    /// Export table and registry as json.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PerfError> {
        let file = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// All reasoners, in first-occurrence order.
    pub fn reasoners(&self) -> &[ReasonerName] {
        &self.reasoners
    }

    /// Measurements of given ontology, in file order.
    pub fn measurements(&self, ontology: &str) -> Option<&[Measurement]> {
        self.ontologies.get(ontology).map(Vec::as_slice)
    }

    /// Loop on all ontologies and their measurements.
    pub fn ontologies(&self) -> impl Iterator<Item = (&OntologyName, &[Measurement])> {
        self.ontologies
            .iter()
            .map(|(name, measurements)| (name, measurements.as_slice()))
    }

    /// Number of ontologies.
    pub fn len(&self) -> usize {
        self.ontologies.len()
    }

    /// Did we find any ontology at all ?
    pub fn is_empty(&self) -> bool {
        self.ontologies.is_empty()
    }
}
