//! Types shared by the parser, the table builder and the renderers.

/// name of an ontology, keys the performance table
pub type OntologyName = String;
/// name of a reasoner, one column of the aligned table
pub type ReasonerName = String;
/// elapsed time in seconds
pub type Seconds = f64;
/// 1-based line number in a log file
pub type LineNumber = usize;

/// Time used in aligned rows for reasoners without any measurement.
pub const MISSING_TIME: Seconds = 0.0;
