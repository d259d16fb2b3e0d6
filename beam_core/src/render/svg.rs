//! SVG drawing of the shear force and bending moment diagrams
//!
//! Two stacked panels share the x-axis: shear on top, moment below. Each
//! curve is shaded between itself and zero, one colour above the axis and
//! another below. Where the curve crosses zero between two samples the
//! crossing point is interpolated, so the shading changes colour exactly on
//! the axis.

use serde::{Deserialize, Serialize};

use crate::calculations::SamplePoint;
use crate::errors::BeamResult;

use super::{check_samples, DiagramRenderer};

/// Size and labelling of the rendered diagram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramStyle {
    /// Overall width (px)
    pub width_px: f64,
    /// Height of each of the two panels (px)
    pub panel_height_px: f64,
    pub length_unit: String,
    pub force_unit: String,
    pub moment_unit: String,
    /// Number of grid intervals along each axis
    pub grid_divisions: usize,
}

impl Default for DiagramStyle {
    fn default() -> Self {
        DiagramStyle {
            width_px: 1200.0,
            panel_height_px: 300.0,
            length_unit: "m".to_string(),
            force_unit: "kN".to_string(),
            moment_unit: "kNm".to_string(),
            grid_divisions: 5,
        }
    }
}

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 50.0;
const FILL_OPACITY: f64 = 0.3;

/// Renders the two-panel diagram as a standalone SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    pub style: DiagramStyle,
}

impl DiagramRenderer for SvgRenderer {
    fn media_type(&self) -> &'static str {
        "image/svg+xml"
    }

    fn render(&self, samples: &[SamplePoint]) -> BeamResult<String> {
        check_samples(samples)?;

        let style = &self.style;
        let height = style.panel_height_px * 2.0;
        let x_label = format!("Position along the beam ({})", style.length_unit);

        let shear = Panel {
            title: "Shear Force Diagram",
            y_label: format!("Shear Force ({})", style.force_unit),
            line_color: "blue",
            positive_color: "blue",
            negative_color: "red",
            points: samples.iter().map(|s| (s.x_m, s.shear_kn)).collect(),
        };
        let moment = Panel {
            title: "Bending Moment Diagram",
            y_label: format!("Bending Moment ({})", style.moment_unit),
            line_color: "green",
            positive_color: "green",
            negative_color: "orange",
            points: samples.iter().map(|s| (s.x_m, s.moment_knm)).collect(),
        };

        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.0} {h:.0}\" font-family=\"sans-serif\">\n\
             <rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n",
            w = style.width_px,
            h = height,
        );
        for (i, panel) in [shear, moment].iter().enumerate() {
            let frame = Frame {
                left: MARGIN_LEFT,
                top: style.panel_height_px * i as f64 + MARGIN_TOP,
                width: (style.width_px - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
                height: (style.panel_height_px - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
            };
            svg.push_str(&panel.draw(&frame, &x_label, style.grid_divisions.max(1)));
        }
        svg.push_str("</svg>\n");
        Ok(svg)
    }
}

/// Plot area of one panel, in px
struct Frame {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

/// Data range of one panel mapped onto its frame
struct Scale {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Scale {
    /// Fit the data, always keeping y = 0 in view, with 10% headroom
    fn fit(points: &[(f64, f64)]) -> Self {
        let (x_min, x_max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| (lo.min(x), hi.max(x)));
        let (y_lo, y_hi) = points
            .iter()
            .fold((0.0f64, 0.0f64), |(lo, hi), &(_, y)| (lo.min(y), hi.max(y)));

        let (x_min, x_max) = if x_max > x_min { (x_min, x_max) } else { (x_min - 0.5, x_min + 0.5) };
        let pad = (y_hi - y_lo) * 0.1;
        let (y_min, y_max) = if pad > 0.0 { (y_lo - pad, y_hi + pad) } else { (-1.0, 1.0) };

        Scale { x_min, x_max, y_min, y_max }
    }

    fn px(&self, frame: &Frame, x: f64) -> f64 {
        frame.left + (x - self.x_min) / (self.x_max - self.x_min) * frame.width
    }

    fn py(&self, frame: &Frame, y: f64) -> f64 {
        frame.top + (self.y_max - y) / (self.y_max - self.y_min) * frame.height
    }
}

struct Panel {
    title: &'static str,
    y_label: String,
    line_color: &'static str,
    positive_color: &'static str,
    negative_color: &'static str,
    points: Vec<(f64, f64)>,
}

impl Panel {
    fn draw(&self, frame: &Frame, x_label: &str, divisions: usize) -> String {
        let scale = Scale::fit(&self.points);
        let mut out = String::from("<g>\n");

        out.push_str(&grid(frame, &scale, divisions));

        let with_crossings = insert_zero_crossings(&self.points);
        out.push_str(&shaded_area(frame, &scale, &with_crossings, |y| y.max(0.0), self.positive_color));
        out.push_str(&shaded_area(frame, &scale, &with_crossings, |y| y.min(0.0), self.negative_color));

        let zero_y = scale.py(frame, 0.0);
        out.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{zero_y:.2}\" x2=\"{:.2}\" y2=\"{zero_y:.2}\" stroke=\"black\" stroke-width=\"1\"/>\n",
            frame.left,
            frame.left + frame.width,
        ));

        let curve: Vec<String> = self
            .points
            .iter()
            .map(|&(x, y)| format!("{:.2},{:.2}", scale.px(frame, x), scale.py(frame, y)))
            .collect();
        out.push_str(&format!(
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\"/>\n",
            curve.join(" "),
            self.line_color,
        ));

        out.push_str(&format!(
            "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"black\"/>\n",
            frame.left, frame.top, frame.width, frame.height,
        ));
        out.push_str(&text(frame.left + frame.width / 2.0, frame.top - 10.0, "middle", 16.0, self.title, None));
        out.push_str(&text(
            frame.left + frame.width / 2.0,
            frame.top + frame.height + 40.0,
            "middle",
            13.0,
            x_label,
            None,
        ));
        let label_x = frame.left - 60.0;
        let label_y = frame.top + frame.height / 2.0;
        out.push_str(&text(
            label_x,
            label_y,
            "middle",
            13.0,
            &self.y_label,
            Some(format!("rotate(-90 {label_x:.2} {label_y:.2})")),
        ));

        out.push_str("</g>\n");
        out
    }
}

/// Light grid with tick labels along both axes
fn grid(frame: &Frame, scale: &Scale, divisions: usize) -> String {
    let mut out = String::new();
    for i in 0..=divisions {
        let t = i as f64 / divisions as f64;

        let x = scale.x_min + (scale.x_max - scale.x_min) * t;
        let px = scale.px(frame, x);
        out.push_str(&format!(
            "<line x1=\"{px:.2}\" y1=\"{:.2}\" x2=\"{px:.2}\" y2=\"{:.2}\" stroke=\"#dddddd\"/>\n",
            frame.top,
            frame.top + frame.height,
        ));
        out.push_str(&text(px, frame.top + frame.height + 16.0, "middle", 11.0, &format!("{x:.2}"), None));

        let y = scale.y_min + (scale.y_max - scale.y_min) * t;
        let py = scale.py(frame, y);
        out.push_str(&format!(
            "<line x1=\"{:.2}\" y1=\"{py:.2}\" x2=\"{:.2}\" y2=\"{py:.2}\" stroke=\"#dddddd\"/>\n",
            frame.left,
            frame.left + frame.width,
        ));
        out.push_str(&text(frame.left - 6.0, py + 4.0, "end", 11.0, &format!("{y:.2}"), None));
    }
    out
}

/// Polygon between the clamped curve and y = 0
fn shaded_area(
    frame: &Frame,
    scale: &Scale,
    points: &[(f64, f64)],
    clamp: impl Fn(f64) -> f64,
    color: &str,
) -> String {
    let (Some(&(x_first, _)), Some(&(x_last, _))) = (points.first(), points.last()) else {
        return String::new();
    };
    if points.iter().all(|&(_, y)| clamp(y) == 0.0) {
        return String::new();
    }

    let mut vertices = Vec::with_capacity(points.len() + 2);
    vertices.push((x_first, 0.0));
    vertices.extend(points.iter().map(|&(x, y)| (x, clamp(y))));
    vertices.push((x_last, 0.0));

    let coords: Vec<String> = vertices
        .iter()
        .map(|&(x, y)| format!("{:.2},{:.2}", scale.px(frame, x), scale.py(frame, y)))
        .collect();
    format!(
        "<polygon points=\"{}\" fill=\"{color}\" fill-opacity=\"{FILL_OPACITY}\" stroke=\"none\"/>\n",
        coords.join(" "),
    )
}

/// Add `(x, 0)` wherever the curve changes sign between two samples
fn insert_zero_crossings(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(points.len() * 2);
    for (i, &(x, y)) in points.iter().enumerate() {
        if let Some(&(x0, y0)) = i.checked_sub(1).and_then(|j| points.get(j)) {
            if (y0 < 0.0 && y > 0.0) || (y0 > 0.0 && y < 0.0) {
                let t = y0 / (y0 - y);
                out.push((x0 + (x - x0) * t, 0.0));
            }
        }
        out.push((x, y));
    }
    out
}

fn text(x: f64, y: f64, anchor: &str, size: f64, content: &str, transform: Option<String>) -> String {
    let transform = transform
        .map(|t| format!(" transform=\"{t}\""))
        .unwrap_or_default();
    format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"{anchor}\" font-size=\"{size}\"{transform}>{}</text>\n",
        escape(content),
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x_m: f64, shear_kn: f64, moment_knm: f64) -> SamplePoint {
        SamplePoint { x_m, shear_kn, moment_knm }
    }

    #[test]
    fn test_labels_present() {
        let samples = [sample(0.0, 5.0, 0.0), sample(5.0, -5.0, 25.0), sample(10.0, -5.0, 0.0)];
        let svg = SvgRenderer::default().render(&samples).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Shear Force Diagram"));
        assert!(svg.contains("Bending Moment Diagram"));
        assert_eq!(svg.matches("Position along the beam (m)").count(), 2);
        assert!(svg.contains("Shear Force (kN)"));
        assert!(svg.contains("Bending Moment (kNm)"));
    }

    #[test]
    fn test_sign_shading() {
        // Shear has both signs, moment is sagging only
        let samples = [sample(0.0, 5.0, 0.0), sample(5.0, -5.0, 25.0), sample(10.0, -5.0, 0.0)];
        let svg = SvgRenderer::default().render(&samples).unwrap();

        assert!(svg.contains("fill=\"blue\""));
        assert!(svg.contains("fill=\"red\""));
        assert!(svg.contains("fill=\"green\""));
        assert!(!svg.contains("fill=\"orange\""));
    }

    #[test]
    fn test_all_zero_draws_no_shading() {
        let samples = [sample(0.0, 0.0, 0.0), sample(4.0, 0.0, 0.0)];
        let svg = SvgRenderer::default().render(&samples).unwrap();
        assert!(!svg.contains("<polygon"));
        assert_eq!(svg.matches("<polyline").count(), 2);
    }

    #[test]
    fn test_zero_crossing_interpolated() {
        let points = [(0.0, 2.0), (4.0, -6.0), (6.0, -6.0)];
        let out = insert_zero_crossings(&points);
        assert_eq!(out, vec![(0.0, 2.0), (1.0, 0.0), (4.0, -6.0), (6.0, -6.0)]);
    }

    #[test]
    fn test_touching_zero_is_not_a_crossing() {
        let points = [(0.0, 0.0), (1.0, 3.0), (2.0, 0.0)];
        assert_eq!(insert_zero_crossings(&points), points.to_vec());
    }

    #[test]
    fn test_custom_units_escaped() {
        let style = DiagramStyle {
            force_unit: "<kip>".to_string(),
            ..DiagramStyle::default()
        };
        let svg = SvgRenderer { style }.render(&[sample(0.0, 1.0, 0.0), sample(1.0, 1.0, 1.0)]).unwrap();
        assert!(svg.contains("Shear Force (&lt;kip&gt;)"));
    }

    #[test]
    fn test_single_sample_renders() {
        let svg = SvgRenderer::default().render(&[sample(0.0, 0.0, 0.0)]).unwrap();
        assert!(svg.contains("<polyline"));
    }

    #[test]
    fn test_media_type() {
        assert_eq!(SvgRenderer::default().media_type(), "image/svg+xml");
    }
}
