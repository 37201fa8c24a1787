//! Per reasoner statistics over all ontologies of an `AlignedTable`.
use crate::common_types::{ReasonerName, Seconds};
use crate::table::AlignedTable;
use itertools::Itertools;

/// Convert seconds to human readable string.
pub fn time_string(seconds: Seconds) -> String {
    match seconds {
        s if s < 1e-6 => format!("{:.0}ns", s * 1e9),
        s if s < 1e-3 => format!("{:.2}us", s * 1e6),
        s if s < 1.0 => format!("{:.2}ms", s * 1e3),
        s if s < 60.0 => format!("{:.2}s", s),
        s => format!("{}m{:.2}s", (s / 60.0).floor(), s % 60.0),
    }
}

/// What we know about one reasoner. Only ontologies where it was
/// measured are taken into account.
#[derive(Debug, Clone, PartialEq)]
pub struct ReasonerStats {
    /// reasoner name
    pub reasoner: ReasonerName,
    /// on how many ontologies it was measured
    pub measured: usize,
    /// sum of its times
    pub total: Seconds,
    /// mean time (0 if never measured)
    pub mean: Seconds,
    /// median time (0 if never measured)
    pub median: Seconds,
    /// on how many ontologies it was (possibly jointly) the fastest
    pub fastest: usize,
}

/// This struct mainly supplies the statistics displayed in html reports.
pub struct Stats {
    reasoners: Vec<ReasonerStats>,
}

impl Stats {
    /// Compute statistics for all reasoners of the table.
    pub fn new(table: &AlignedTable) -> Self {
        // for each reasoner all its measured times
        let mut times: Vec<Vec<Seconds>> = vec![Vec::new(); table.reasoners().len()];
        let mut fastest = vec![0; table.reasoners().len()];
        for (_, cells) in table.measured_rows() {
            let present: Vec<(usize, Seconds)> = cells
                .iter()
                .enumerate()
                .filter_map(|(column, time)| time.map(|time| (column, time)))
                .collect();
            let best = present
                .iter()
                .map(|(_, time)| *time)
                .fold(None, |best: Option<Seconds>, time| {
                    Some(best.map_or(time, |b| b.min(time)))
                });
            for &(column, time) in &present {
                times[column].push(time);
                if Some(time) == best {
                    fastest[column] += 1;
                }
            }
        }
        let reasoners = table
            .reasoners()
            .iter()
            .zip(times)
            .zip(fastest)
            .map(|((reasoner, mut times), fastest)| {
                times.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                let total: Seconds = times.iter().sum();
                let measured = times.len();
                ReasonerStats {
                    reasoner: reasoner.clone(),
                    measured,
                    total,
                    mean: if measured == 0 {
                        0.0
                    } else {
                        total / measured as f64
                    },
                    median: median(&times),
                    fastest,
                }
            })
            .collect();
        Stats { reasoners }
    }

    /// Statistics in registry order.
    pub fn reasoners(&self) -> &[ReasonerStats] {
        &self.reasoners
    }

    /// Reasoner names sorted from lowest to highest mean time, unmeasured ones last.
    pub fn ranking(&self) -> Vec<&str> {
        self.reasoners
            .iter()
            .filter(|s| s.measured > 0)
            .sorted_by(|a, b| {
                a.mean
                    .partial_cmp(&b.mean)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .chain(self.reasoners.iter().filter(|s| s.measured == 0))
            .map(|s| s.reasoner.as_str())
            .collect()
    }
}

/// sorted input
fn median(times: &[Seconds]) -> Seconds {
    match times.len() {
        0 => 0.0,
        n if n % 2 == 1 => times[n / 2],
        n => (times[n / 2 - 1] + times[n / 2]) / 2.0,
    }
}
