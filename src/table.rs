//! Align each ontology's measurements on the global reasoner order.
use crate::common_types::{OntologyName, ReasonerName, Seconds, MISSING_TIME};
use crate::log::{Measurement, PerformanceLog};
use indexmap::IndexMap;
use std::collections::HashMap;

/// One row of times per ontology, one column per reasoner (registry order).
/// Reasoners without measurement for an ontology get `MISSING_TIME`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedTable {
    reasoners: Vec<ReasonerName>,
    /// `None` where a reasoner was not measured
    cells: IndexMap<OntologyName, Vec<Option<Seconds>>>,
    rows: IndexMap<OntologyName, Vec<Seconds>>,
}

/// Time of the first measurement for each reasoner.
fn first_times(measurements: &[Measurement]) -> HashMap<&str, Seconds> {
    let mut times = HashMap::with_capacity(measurements.len());
    for measurement in measurements {
        times
            .entry(measurement.reasoner.as_str())
            .or_insert(measurement.seconds);
    }
    times
}

impl AlignedTable {
    /// Build all rows, ontologies kept in log order.
    pub fn new(log: &PerformanceLog) -> Self {
        let reasoners = log.reasoners().to_vec();
        let cells: IndexMap<OntologyName, Vec<Option<Seconds>>> = log
            .ontologies()
            .map(|(ontology, measurements)| {
                let times = first_times(measurements);
                let cells = reasoners
                    .iter()
                    .map(|reasoner| times.get(reasoner.as_str()).copied())
                    .collect();
                (ontology.clone(), cells)
            })
            .collect();
        let rows = cells
            .iter()
            .map(|(ontology, cells)| {
                let row = cells
                    .iter()
                    .map(|time| time.unwrap_or(MISSING_TIME))
                    .collect();
                (ontology.clone(), row)
            })
            .collect();
        AlignedTable {
            reasoners,
            cells,
            rows,
        }
    }

    /// Column labels.
    pub fn reasoners(&self) -> &[ReasonerName] {
        &self.reasoners
    }

    /// Times of given ontology, if any.
    pub fn row(&self, ontology: &str) -> Option<&[Seconds]> {
        self.rows.get(ontology).map(Vec::as_slice)
    }

    /// Loop on all (ontology, row) in log order.
    pub fn rows(&self) -> impl Iterator<Item = (&OntologyName, &[Seconds])> {
        self.rows.iter().map(|(name, row)| (name, row.as_slice()))
    }

    /// Loop on all ontologies with `None` for reasoners lacking a measurement.
    pub fn measured_rows(&self) -> impl Iterator<Item = (&OntologyName, &[Option<Seconds>])> {
        self.cells.iter().map(|(name, cells)| (name, cells.as_slice()))
    }

    /// Number of ontologies.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Is there no ontology ?
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
