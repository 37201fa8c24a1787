//! Html page gathering all charts and statistics of a table.
use crate::error::PerfError;
use crate::render::{BarChart, RenderOptions};
use crate::stats::{time_string, Stats};
use crate::svg::{fill_svg_file, COLORS};
use crate::table::AlignedTable;
use itertools::Itertools;
use quick_xml::escape::escape;
use std::fs::File;
use std::io::prelude::*;
use std::io::BufWriter;
use std::path::Path;

/// Write an html file comparing all reasoners:
/// statistics tables followed by one chart per ontology.
pub fn write_html_report<P: AsRef<Path>>(
    path: P,
    table: &AlignedTable,
    options: RenderOptions,
) -> Result<(), PerfError> {
    let mut html_file = BufWriter::new(File::create(path)?);
    fill_html_report(&mut html_file, table, options)?;
    html_file.flush()?;
    Ok(())
}

fn fill_html_report<W: Write>(
    html_file: &mut W,
    table: &AlignedTable,
    options: RenderOptions,
) -> Result<(), PerfError> {
    write!(html_file, "<!DOCTYPE html>")?;
    write!(
        html_file,
        "<html><head><meta charset=\"utf-8\"><title>Reasoners comparison</title></head><body><center>"
    )?;
    match table.reasoners().split_last() {
        Some((last, first)) if !first.is_empty() => write!(
            html_file,
            "<H1> Comparing {} and {}</H1>",
            first.iter().map(|r| escape(r)).join(", "),
            escape(last)
        )?,
        Some((single, _)) => write!(html_file, "<H1> Timings of {}</H1>", escape(single))?,
        None => write!(html_file, "<H1> No reasoner found</H1>")?,
    }

    write!(
        html_file,
        "<H2>Execution times over {} ontologies ",
        table.len()
    )?;
    for (reasoner, color) in table.reasoners().iter().zip(COLORS.iter().cycle()) {
        write!(
            html_file,
            "<span style=\"color:rgb({},{},{})\">&#9632;</span> {} ",
            (color[0] * 255.0) as u32,
            (color[1] * 255.0) as u32,
            (color[2] * 255.0) as u32,
            escape(reasoner)
        )?;
    }
    write!(html_file, "</H2>")?;

    let statistics = Stats::new(table);
    write!(html_file, "<H2> The statistics are</H2>")?;
    write!(
        html_file,
        "<table><tr><th>reasoner</th><th>ontologies</th><th>total</th><th>mean</th><th>median</th><th>fastest on</th></tr>",
    )?;
    for stats in statistics.reasoners() {
        write!(
            html_file,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&stats.reasoner),
            stats.measured,
            time_string(stats.total),
            time_string(stats.mean),
            time_string(stats.median),
            stats.fastest
        )?;
    }
    write!(html_file, "</table>")?;
    write!(
        html_file,
        "<p>Ranking by mean time: {}</p>",
        statistics.ranking().into_iter().map(escape).join(" &lt; ")
    )?;

    write!(html_file, "<H2> Times per ontology</H2>")?;
    write!(html_file, "<table><tr><th>ontology</th>")?;
    for reasoner in table.reasoners() {
        write!(html_file, "<th>{}</th>", escape(reasoner))?;
    }
    write!(html_file, "</tr>")?;
    for (ontology, cells) in table.measured_rows() {
        write!(html_file, "<tr><td>{}</td>", escape(ontology))?;
        for cell in cells {
            match cell {
                Some(time) => write!(html_file, "<td>{}</td>", time_string(*time))?,
                None => write!(html_file, "<td>-</td>")?,
            }
        }
        write!(html_file, "</tr>")?;
    }
    write!(html_file, "</table>")?;

    for (ontology, row) in table.rows() {
        let scene = BarChart::new(ontology, table.reasoners(), row).scene(options);
        fill_svg_file(&scene, html_file)?;
        writeln!(html_file, "<p>")?;
    }
    write!(html_file, "</center></body></html>")?;
    Ok(())
}
