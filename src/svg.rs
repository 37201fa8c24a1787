//! Small module with display related functions.

use quick_xml::escape::escape;
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufWriter, Error};
use std::path::Path;

pub(crate) type Point = (f64, f64);

/// colors used for each reasoner
pub(crate) const COLORS: [[f32; 3]; 8] = [
    [0.53, 0.81, 0.92],
    [1.0, 0.6, 0.2],
    [0.4, 0.75, 0.4],
    [0.85, 0.35, 0.35],
    [0.6, 0.5, 0.8],
    [0.65, 0.5, 0.4],
    [0.9, 0.55, 0.8],
    [0.5, 0.5, 0.5],
];

/// Bars are drawn as rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    /// color (rgb)
    pub color: [f32; 3],
    /// opacity
    pub opacity: f32,
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
    /// width
    pub width: f64,
    /// height
    pub height: f64,
}

impl Rectangle {
    /// Creates a new rectangle
    pub fn new(
        color: [f32; 3],
        opacity: f32,
        position: (f64, f64),
        sizes: (f64, f64),
    ) -> Rectangle {
        Rectangle {
            color,
            opacity,
            x: position.0,
            y: position.1,
            width: sizes.0,
            height: sizes.1,
        }
    }
}

/// Text anchoring, as understood by svg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Anchor {
    Middle,
    End,
}

/// Some text to display.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Label {
    pub(crate) text: String,
    pub(crate) position: Point,
    pub(crate) size: u32,
    pub(crate) anchor: Anchor,
    /// rotation in degrees around the label position
    pub(crate) rotation: Option<f64>,
}

/// Everything in a chart. All coordinates are in pixels,
/// (0, 0) being the top left corner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    /// total width
    pub width: u32,
    /// total height
    pub height: u32,
    /// bars
    pub rectangles: Vec<Rectangle>,
    /// axes and grid lines
    pub(crate) lines: Vec<(Point, Point)>,
    pub(crate) labels: Vec<Label>,
}

/// saves a scene as an svg file.
pub fn write_svg_file<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), Error> {
    let mut file = BufWriter::new(File::create(path)?);
    file.write_all(b"<?xml version=\"1.0\"?>\n")?;
    fill_svg_file(scene, &mut file)?;
    file.flush()
}

/// fill given file with svg content for the given scene.
/// this is used both for standalone charts and for charts embedded in html.
pub fn fill_svg_file<W: Write>(scene: &Scene, file: &mut W) -> Result<(), Error> {
    // Header
    writeln!(
        file,
        "<svg width=\"{}\" height=\"{}\" version=\"1.1\" xmlns=\"http://www.w3.org/2000/svg\">",
        scene.width, scene.height,
    )?;
    writeln!(
        file,
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"white\"/>",
        scene.width, scene.height
    )?;

    // we start by lines so they will end up below bars
    for (start, end) in &scene.lines {
        writeln!(
            file,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"black\" stroke-width=\"1.0\"/>",
            start.0, start.1, end.0, end.1
        )?;
    }

    for rectangle in &scene.rectangles {
        writeln!(
            file,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"rgba({},{},{},{})\"/>",
            rectangle.x,
            rectangle.y,
            rectangle.width,
            rectangle.height,
            (rectangle.color[0] * 255.0) as u32,
            (rectangle.color[1] * 255.0) as u32,
            (rectangle.color[2] * 255.0) as u32,
            rectangle.opacity,
        )?;
    }

    for label in &scene.labels {
        let anchor = match label.anchor {
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        let transform = label
            .rotation
            .map(|angle| {
                format!(
                    " transform=\"rotate({} {} {})\"",
                    angle, label.position.0, label.position.1
                )
            })
            .unwrap_or_default();
        writeln!(
            file,
            "<text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" text-anchor=\"{}\"{}>{}</text>",
            label.position.0,
            label.position.1,
            label.size,
            anchor,
            transform,
            escape(&label.text)
        )?;
    }
    file.write_all(b"</svg>\n")?;
    Ok(())
}
