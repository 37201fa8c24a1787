//! Turn aligned rows into bar charts, one per ontology.
use crate::common_types::{OntologyName, ReasonerName, Seconds};
use crate::error::PerfError;
use crate::stats::time_string;
use crate::svg::{write_svg_file, Anchor, Label, Rectangle, Scene, COLORS};
use crate::table::AlignedTable;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;
/// part of each slot covered by its bar
const BAR_FILL: f64 = 0.6;
const Y_TICKS: usize = 5;

/// Chart sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// width in pixels
    pub width: u32,
    /// height in pixels
    pub height: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            width: 1000,
            height: 600,
        }
    }
}

/// What a renderer gets: a title and parallel labels and heights.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart<'a> {
    /// ontology the chart is about
    pub ontology: &'a str,
    /// chart title
    pub title: String,
    /// one label per bar
    pub labels: &'a [ReasonerName],
    /// one height per bar
    pub heights: &'a [Seconds],
}

impl<'a> BarChart<'a> {
    /// Chart of given ontology.
    pub fn new(ontology: &'a str, labels: &'a [ReasonerName], heights: &'a [Seconds]) -> Self {
        BarChart {
            ontology,
            title: format!("Execution times for {}", ontology),
            labels,
            heights,
        }
    }

    /// Lay the chart out as rectangles, lines and labels.
    pub fn scene(&self, options: RenderOptions) -> Scene {
        let width = f64::from(options.width);
        let height = f64::from(options.height);
        let plot_width = (width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let plot_height = (height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        let bottom = MARGIN_TOP + plot_height;

        let highest = self.heights.iter().cloned().fold(0.0, f64::max);
        let scale_max = if highest > 0.0 { highest } else { 1.0 };
        let yscale = plot_height / scale_max;

        let mut scene = Scene {
            width: options.width,
            height: options.height,
            ..Default::default()
        };
        let label = |text: String, position, size, anchor, rotation| Label {
            text,
            position,
            size,
            anchor,
            rotation,
        };

        scene.labels.push(label(
            self.title.clone(),
            (width / 2.0, MARGIN_TOP / 2.0),
            20,
            Anchor::Middle,
            None,
        ));
        scene.labels.push(label(
            "Time (s)".to_owned(),
            (MARGIN_LEFT / 4.0, MARGIN_TOP + plot_height / 2.0),
            14,
            Anchor::Middle,
            Some(-90.0),
        ));
        scene.labels.push(label(
            "Reasoner".to_owned(),
            (MARGIN_LEFT + plot_width / 2.0, height - MARGIN_BOTTOM / 4.0),
            14,
            Anchor::Middle,
            None,
        ));

        // axes
        scene
            .lines
            .push(((MARGIN_LEFT, MARGIN_TOP), (MARGIN_LEFT, bottom)));
        scene
            .lines
            .push(((MARGIN_LEFT, bottom), (MARGIN_LEFT + plot_width, bottom)));
        for tick in 0..=Y_TICKS {
            let value = scale_max * tick as f64 / Y_TICKS as f64;
            let y = bottom - value * yscale;
            scene.lines.push(((MARGIN_LEFT - 5.0, y), (MARGIN_LEFT, y)));
            scene.labels.push(label(
                format!("{:.2}", value),
                (MARGIN_LEFT - 8.0, y + 4.0),
                11,
                Anchor::End,
                None,
            ));
        }

        let slot = plot_width / self.labels.len().max(1) as f64;
        for (index, (name, time)) in self.labels.iter().zip(self.heights).enumerate() {
            let center = MARGIN_LEFT + slot * (index as f64 + 0.5);
            let bar_width = slot * BAR_FILL;
            let bar_height = time * yscale;
            scene.rectangles.push(Rectangle::new(
                COLORS[index % COLORS.len()],
                1.0,
                (center - bar_width / 2.0, bottom - bar_height),
                (bar_width, bar_height),
            ));
            scene.labels.push(label(
                name.clone(),
                (center, bottom + 18.0),
                12,
                Anchor::Middle,
                None,
            ));
            scene.labels.push(label(
                time_string(*time),
                (center, bottom - bar_height - 5.0),
                11,
                Anchor::Middle,
                None,
            ));
        }
        scene
    }
}

/// Anything able to display bar charts.
pub trait ChartRenderer {
    /// Produce one chart.
    fn render(&mut self, chart: &BarChart) -> Result<(), PerfError>;
}

/// Saves each chart as an svg file in a directory.
#[derive(Debug)]
pub struct SvgRenderer {
    output_dir: PathBuf,
    options: RenderOptions,
    used_names: HashSet<String>,
    written: Vec<PathBuf>,
}

impl SvgRenderer {
    /// Renderer writing into given directory (created when needed).
    pub fn new<P: AsRef<Path>>(output_dir: P, options: RenderOptions) -> Self {
        SvgRenderer {
            output_dir: output_dir.as_ref().to_owned(),
            options,
            used_names: HashSet::new(),
            written: Vec::new(),
        }
    }

    /// All files written so far.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Pick a file name for given ontology, never the same twice.
    fn file_name(&mut self, ontology: &str) -> String {
        let base = sanitize(ontology);
        let mut name = base.clone();
        let mut suffix = 1;
        while self.used_names.contains(&name) {
            suffix += 1;
            name = format!("{}-{}", base, suffix);
        }
        self.used_names.insert(name.clone());
        format!("{}.svg", name)
    }
}

impl ChartRenderer for SvgRenderer {
    fn render(&mut self, chart: &BarChart) -> Result<(), PerfError> {
        fs::create_dir_all(&self.output_dir)?;
        let name = self.file_name(chart.ontology);
        let path = self.output_dir.join(name);
        write_svg_file(&chart.scene(self.options), &path)?;
        info!("saved chart of '{}' in {}", chart.ontology, path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Keep ascii alphanumerics, '-' and '_', replace the rest by '_'.
fn sanitize(ontology: &str) -> String {
    let name: String = ontology
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if name.is_empty() {
        "ontology".to_owned()
    } else {
        name
    }
}

/// Outcome of rendering a whole table.
#[derive(Debug, Default)]
pub struct RenderSummary {
    /// ontologies with a chart
    pub rendered: Vec<OntologyName>,
    /// one `RenderFailure` per failing ontology
    pub failures: Vec<PerfError>,
}

impl RenderSummary {
    /// Did every chart get rendered ?
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render all ontologies in table order. A failing chart does not stop
/// the others.
pub fn render_all<R: ChartRenderer>(table: &AlignedTable, renderer: &mut R) -> RenderSummary {
    let mut summary = RenderSummary::default();
    for (ontology, row) in table.rows() {
        let chart = BarChart::new(ontology, table.reasoners(), row);
        match renderer.render(&chart) {
            Ok(()) => summary.rendered.push(ontology.clone()),
            Err(e) => {
                let failure = PerfError::render_failure(ontology.as_str(), e);
                error!("{}", failure);
                summary.failures.push(failure);
            }
        }
    }
    summary
}
