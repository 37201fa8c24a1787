//! This crate turns text logs of reasoner benchmark timings into bar charts
//! comparing execution times per ontology.
//! Logs are parsed into a `PerformanceLog`, aligned on the global reasoner
//! order into an `AlignedTable` and each ontology is then handed to a `ChartRenderer`.
#![deny(missing_docs)]
#![warn(clippy::all)]

mod common_types;
pub use crate::common_types::{LineNumber, OntologyName, ReasonerName, Seconds, MISSING_TIME};
pub mod error;
pub use crate::error::{ParseError, PerfError};
mod parser;
pub use crate::parser::ParserConfiguration;
mod log;
pub use crate::log::{Measurement, PerformanceLog};
mod table;
pub use crate::table::AlignedTable;
mod stats;
pub use crate::stats::{time_string, ReasonerStats, Stats};
pub(crate) mod svg;
pub use crate::svg::{fill_svg_file, write_svg_file, Rectangle, Scene};
mod render;
pub use crate::render::{
    render_all, BarChart, ChartRenderer, RenderOptions, RenderSummary, SvgRenderer,
};
mod report;
pub use crate::report::write_html_report;
