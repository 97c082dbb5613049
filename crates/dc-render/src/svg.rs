//! SVG export for frames.

use std::fmt::Write;

use crate::{DrawCmd, Frame, MarkerKind, StrokeStyle};

impl Frame {
    /// Serialise the frame as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        self.write_svg(&mut out).expect("writing to a String cannot fail");
        out
    }

    fn write_svg(&self, out: &mut String) -> std::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;
        for cmd in &self.commands {
            match cmd {
                DrawCmd::Clear { color } => writeln!(
                    out,
                    r#"<rect width="100%" height="100%" fill="{}"/>"#,
                    color.hex()
                )?,
                DrawCmd::Rect { origin, width, height, fill, label } => {
                    writeln!(
                        out,
                        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                        origin.x, origin.y, width, height, fill.hex()
                    )?;
                    if let Some(label) = label {
                        writeln!(
                            out,
                            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="12">{}</text>"#,
                            origin.x + width / 2.0,
                            origin.y + height / 2.0,
                            escape(label)
                        )?;
                    }
                }
                DrawCmd::Polyline { points, color, width, style } => {
                    let pts: Vec<String> =
                        points.iter().map(|p| format!("{:.1},{:.1}", p.x, p.y)).collect();
                    write!(
                        out,
                        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}""#,
                        pts.join(" "),
                        color.hex(),
                        width
                    )?;
                    match style {
                        StrokeStyle::Solid  => {}
                        StrokeStyle::Dashed => write!(out, r#" stroke-dasharray="8 6""#)?,
                        StrokeStyle::Dotted => write!(out, r#" stroke-dasharray="2 4""#)?,
                    }
                    writeln!(out, "/>")?;
                }
                DrawCmd::Marker { kind, center, radius, label } => {
                    writeln!(
                        out,
                        r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="2"/>"#,
                        center.x, center.y, radius, kind.color().hex()
                    )?;
                    if let Some(label) = label {
                        let dy = if *kind == MarkerKind::Destination { -14.0 } else { 20.0 };
                        writeln!(
                            out,
                            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="11">{}</text>"#,
                            center.x,
                            center.y + dy,
                            escape(label)
                        )?;
                    }
                }
                DrawCmd::Ring { center, radius, color, opacity } => writeln!(
                    out,
                    r#"<circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none" stroke="{}" stroke-opacity="{:.2}" stroke-width="2"/>"#,
                    center.x, center.y, radius, color.hex(), opacity
                )?,
                DrawCmd::Text { at, text, color, size } => writeln!(
                    out,
                    r#"<text x="{:.1}" y="{:.1}" fill="{}" font-size="{:.0}">{}</text>"#,
                    at.x, at.y, color.hex(), size, escape(text)
                )?,
            }
        }
        writeln!(out, "</svg>")
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _   => out.push(c),
        }
    }
    out
}
