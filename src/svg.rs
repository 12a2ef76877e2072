//! SVG rendering of a point set and a query rectangle.
//!
//! Pure function of its arguments; no shared canvas.

use std::collections::HashSet;
use std::fmt::Write;

use crate::{Point, Rect};

/// Canvas settings for [`render_svg`].
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    /// Canvas width in pixels
    pub width: f64,
    /// Canvas height in pixels
    pub height: f64,
    /// Blank border around the plot area
    pub margin: f64,
    /// Radius of point markers
    pub point_radius: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 640.0,
            margin: 50.0,
            point_radius: 12.0,
        }
    }
}

/// Maps data coordinates onto the canvas, y growing upwards.
struct Viewport {
    min_x: f64,
    min_y: f64,
    scale: f64,
    margin: f64,
    height: f64,
}

impl Viewport {
    fn fit(points: &[Point], rect: &Rect, style: &SvgStyle) -> Self {
        let (mut min_x, mut min_y) = (rect.min_x, rect.min_y);
        let (mut max_x, mut max_y) = (rect.max_x, rect.max_y);
        for p in points {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        let span_x = f64::from(max_x) - f64::from(min_x);
        let span_y = f64::from(max_y) - f64::from(min_y);
        let plot_w = style.width - 2.0 * style.margin;
        let plot_h = style.height - 2.0 * style.margin;
        let scale = (plot_w / span_x.max(1.0)).min(plot_h / span_y.max(1.0));

        Self {
            min_x: f64::from(min_x),
            min_y: f64::from(min_y),
            scale,
            margin: style.margin,
            height: style.height,
        }
    }

    fn map(&self, x: i32, y: i32) -> (f64, f64) {
        let sx = self.margin + (f64::from(x) - self.min_x) * self.scale;
        let sy = self.height - self.margin - (f64::from(y) - self.min_y) * self.scale;
        (sx, sy)
    }
}

/// Renders `points` as labeled discs, `rect` as a translucent green box, and
/// marks the members of `result`.
///
/// # Example
/// ```
/// use std::collections::HashSet;
/// use rangetree::{render_svg, Point, Rect, SvgStyle};
/// let points = vec![Point::with_label(1, 1, "A"), Point::with_label(4, 4, "B")];
/// let result: HashSet<Point> = [Point::new(1, 1)].into_iter().collect();
/// let svg = render_svg(&points, &result, &Rect::new(0, 0, 2, 2), &SvgStyle::default());
/// assert!(svg.starts_with("<?xml"));
/// assert_eq!(svg.matches("<circle").count(), 2);
/// assert_eq!(svg.matches("class=\"hit\"").count(), 1);
/// ```
pub fn render_svg(
    points: &[Point],
    result: &HashSet<Point>,
    rect: &Rect,
    style: &SvgStyle,
) -> String {
    let view = Viewport::fit(points, rect, style);
    let mut svg = String::new();

    // writing into a String cannot fail
    let _ = writeln!(svg, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>");
    let _ = writeln!(
        svg,
        "<svg width=\"{w}\" height=\"{h}\" xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {w} {h}\">",
        w = style.width,
        h = style.height
    );
    svg.push_str("  <defs>\n");
    svg.push_str("    <style>\n");
    svg.push_str("      .region { fill: green; fill-opacity: 0.2; stroke: green; stroke-width: 2; }\n");
    svg.push_str("      .point { fill: orange; }\n");
    svg.push_str("      .hit { fill: orange; stroke: green; stroke-width: 3; }\n");
    svg.push_str("      .label { fill: white; font-weight: bold; text-anchor: middle; dominant-baseline: central; }\n");
    svg.push_str("    </style>\n");
    svg.push_str("  </defs>\n\n");

    let (x0, y0) = view.map(rect.min_x, rect.max_y);
    let (x1, y1) = view.map(rect.max_x, rect.min_y);
    let _ = writeln!(
        svg,
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" class=\"region\"/>\n",
        x0,
        y0,
        (x1 - x0).max(0.0),
        (y1 - y0).max(0.0)
    );

    svg.push_str("  <g id=\"points\">\n");
    for p in points {
        let (cx, cy) = view.map(p.x, p.y);
        let class = if result.contains(p) { "hit" } else { "point" };
        let _ = writeln!(
            svg,
            "    <circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{:.2}\" class=\"{class}\"/>",
            style.point_radius
        );
        if let Some(label) = p.label() {
            let _ = writeln!(
                svg,
                "    <text x=\"{cx:.2}\" y=\"{cy:.2}\" class=\"label\">{label}</text>"
            );
        }
    }
    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{Point, Rect, SvgStyle, render_svg};

    #[test]
    fn test_render_is_deterministic() {
        let points = vec![Point::with_label(0, 0, "A"), Point::with_label(10, 5, "B")];
        let result = HashSet::new();
        let rect = Rect::new(2, 1, 8, 7);
        let style = SvgStyle::default();
        let first = render_svg(&points, &result, &rect, &style);
        let second = render_svg(&points, &result, &rect, &style);
        assert_eq!(first, second, "no hidden state between renders");
        assert_eq!(first.matches("class=\"hit\"").count(), 0, "no results to highlight");
        assert!(first.contains(">B</text>"), "labels are drawn");
    }

    #[test]
    fn test_render_single_point_and_degenerate_rect() {
        let points = vec![Point::new(3, 3)];
        let result: HashSet<Point> = points.iter().cloned().collect();
        let svg = render_svg(&points, &result, &Rect::new(3, 3, 3, 3), &SvgStyle::default());
        assert!(!svg.contains("NaN"), "zero spans must not divide by zero");
        assert!(!svg.contains("<text"), "unlabeled points have no text");
        assert_eq!(svg.matches("class=\"hit\"").count(), 1, "the point is a hit");
    }
}
