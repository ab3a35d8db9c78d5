//! SVG rendering of editor frames.

use specedit_session::{Canvas, Colour, CommandId, MarkEdge, Rect};
use std::fmt::Write as _;

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_Y: f64 = 20.0;

/// [`Canvas`] that builds an SVG document.
pub struct SvgCanvas {
    width: f64,
    height: f64,
    body: String,
    enabled: Vec<(CommandId, bool)>,
}

impl SvgCanvas {
    /// A canvas of `width` x `height` pixels including margins.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            body: String::new(),
            enabled: Vec::new(),
        }
    }

    /// Commands the editor enabled or disabled while drawing.
    pub fn command_states(&self) -> &[(CommandId, bool)] {
        &self.enabled
    }

    /// The finished document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body
        )
    }

    fn plot_width(&self) -> f64 {
        self.width - MARGIN_LEFT - MARGIN_RIGHT
    }

    fn plot_height(&self) -> f64 {
        self.height - 2.0 * MARGIN_Y
    }

    fn px(&self, x: f64) -> f64 {
        MARGIN_LEFT + x * self.plot_width()
    }

    // SVG's y axis points down.
    fn py(&self, y: f64) -> f64 {
        MARGIN_Y + (1.0 - y) * self.plot_height()
    }

    fn rect_attrs(&self, rect: Rect) -> String {
        let x = self.px(rect.x0.min(rect.x1));
        let y = self.py(rect.y0.max(rect.y1));
        let w = (rect.x1 - rect.x0).abs() * self.plot_width();
        let h = (rect.y1 - rect.y0).abs() * self.plot_height();
        format!("x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\"")
    }
}

fn colour_name(colour: Colour) -> &'static str {
    match colour {
        Colour::White => "white",
        Colour::Black => "black",
        Colour::Red => "red",
    }
}

impl Canvas for SvgCanvas {
    fn fill_rectangle(&mut self, rect: Rect, colour: Colour) {
        let attrs = self.rect_attrs(rect);
        let _ = writeln!(self.body, "<rect {attrs} fill=\"{}\"/>", colour_name(colour));
    }

    fn rectangle(&mut self, rect: Rect, colour: Colour) {
        let attrs = self.rect_attrs(rect);
        let _ = writeln!(
            self.body,
            "<rect {attrs} fill=\"none\" stroke=\"{}\"/>",
            colour_name(colour)
        );
    }

    fn polyline(&mut self, points: &[(f64, f64)], colour: Colour) {
        let coords: Vec<String> = points
            .iter()
            .map(|&(x, y)| format!("{:.2},{:.2}", self.px(x), self.py(y)))
            .collect();
        let _ = writeln!(
            self.body,
            "<polyline points=\"{}\" fill=\"none\" stroke=\"{}\"/>",
            coords.join(" "),
            colour_name(colour)
        );
    }

    fn range_mark(&mut self, _value_db: f64, label: &str, edge: MarkEdge) {
        let y = match edge {
            MarkEdge::Top => self.py(1.0) + 4.0,
            MarkEdge::Bottom => self.py(0.0),
        };
        let _ = writeln!(
            self.body,
            "<text x=\"{:.2}\" y=\"{y:.2}\" text-anchor=\"end\" font-size=\"11\">{label}</text>",
            MARGIN_LEFT - 4.0
        );
    }

    fn horizontal_hair(&mut self, y: f64, label: &str, colour: Colour) {
        let py = self.py(y);
        let colour = colour_name(colour);
        let _ = writeln!(
            self.body,
            "<line x1=\"{:.2}\" y1=\"{py:.2}\" x2=\"{:.2}\" y2=\"{py:.2}\" stroke=\"{colour}\" stroke-dasharray=\"4 2\"/>",
            self.px(0.0),
            self.px(1.0)
        );
        let _ = writeln!(
            self.body,
            "<text x=\"{:.2}\" y=\"{:.2}\" text-anchor=\"end\" font-size=\"11\" fill=\"{colour}\">{label}</text>",
            MARGIN_LEFT - 4.0,
            py + 4.0
        );
    }

    fn set_command_enabled(&mut self, command: CommandId, enabled: bool) {
        self.enabled.push((command, enabled));
    }
}
