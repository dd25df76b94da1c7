// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! SVG serialization of a `Scene`.

use std::fmt;

use super::{Arrow, DrawPrimitive, FontStyle, Rect, Scene, Segment, TextRun, VerticalAnchor};

const ARROWHEAD_ID: &str = "swimlane-arrowhead";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgOptions {
    /// Pixels per diagram unit.
    pub px_per_unit: f64,
    /// Pixels per font point.
    pub font_px_per_pt: f64,
    pub stroke_width: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { px_per_unit: 60.0, font_px_per_pt: 4.0 / 3.0, stroke_width: 1.5 }
    }
}

/// Borrowing SVG view over a scene; formatting it writes the whole document.
#[derive(Debug, Clone, Copy)]
pub struct SvgDocument<'a> {
    scene: &'a Scene,
    options: SvgOptions,
}

impl<'a> SvgDocument<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self::with_options(scene, SvgOptions::default())
    }

    pub fn with_options(scene: &'a Scene, options: SvgOptions) -> Self {
        Self { scene, options }
    }

    pub fn width_px(&self) -> f64 {
        self.scene.bounds.width() * self.options.px_per_unit
    }

    pub fn height_px(&self) -> f64 {
        self.scene.bounds.height() * self.options.px_per_unit
    }

    fn px(&self, x: f64) -> f64 {
        (x - self.scene.bounds.min_x) * self.options.px_per_unit
    }

    /// Diagram y grows upward, SVG y grows downward.
    fn py(&self, y: f64) -> f64 {
        (self.scene.bounds.max_y - y) * self.options.px_per_unit
    }

    fn write_rect(&self, f: &mut fmt::Formatter<'_>, rect: &Rect) -> fmt::Result {
        let radius = if rect.rounded { self.options.px_per_unit * 0.1 } else { 0.0 };
        writeln!(
            f,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{radius:.2}" class="participant"/>"#,
            self.px(rect.origin.x),
            self.py(rect.origin.y + rect.height),
            rect.width * self.options.px_per_unit,
            rect.height * self.options.px_per_unit,
        )
    }

    fn write_segment(&self, f: &mut fmt::Formatter<'_>, segment: &Segment) -> fmt::Result {
        let class = if segment.dashed { "lifeline" } else { "line" };
        writeln!(
            f,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" class="{class}"/>"#,
            self.px(segment.from.x),
            self.py(segment.from.y),
            self.px(segment.to.x),
            self.py(segment.to.y),
        )
    }

    fn write_arrow(&self, f: &mut fmt::Formatter<'_>, arrow: &Arrow) -> fmt::Result {
        let (x1, y) = (self.px(arrow.from.x), self.py(arrow.from.y));
        let x2 = self.px(arrow.to.x);

        if arrow.is_self_message() {
            let loop_w = self.options.px_per_unit * 0.5;
            let loop_h = self.options.px_per_unit * 0.2;
            return writeln!(
                f,
                r#"<path d="M {x1:.2} {y:.2} h {loop_w:.2} v {loop_h:.2} h {:.2}" class="message" marker-end="url(#{ARROWHEAD_ID})"/>"#,
                -loop_w,
            );
        }

        writeln!(
            f,
            r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" class="message" marker-end="url(#{ARROWHEAD_ID})"/>"#,
        )
    }

    fn write_text(&self, f: &mut fmt::Formatter<'_>, text: &TextRun) -> fmt::Result {
        let baseline = match text.vertical {
            VerticalAnchor::Bottom => "auto",
            VerticalAnchor::Center => "central",
        };
        let style = match text.style {
            FontStyle::Normal => "",
            FontStyle::Italic => r#" font-style="italic""#,
        };
        writeln!(
            f,
            r#"<text x="{:.2}" y="{:.2}" font-size="{:.2}" text-anchor="middle" dominant-baseline="{baseline}"{style}>{}</text>"#,
            self.px(text.anchor.x),
            self.py(text.anchor.y),
            text.font_size * self.options.font_px_per_pt,
            escape_xml(&text.text),
        )
    }
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width_px(), self.height_px());
        let stroke = self.options.stroke_width;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w:.2} {h:.2}" width="{w:.2}" height="{h:.2}">"#
        )?;
        writeln!(f, "<defs>")?;
        writeln!(
            f,
            r#"<marker id="{ARROWHEAD_ID}" markerWidth="10" markerHeight="7" refX="9" refY="3.5" orient="auto">"#
        )?;
        writeln!(f, r#"<polygon points="0 0, 10 3.5, 0 7" fill="black"/>"#)?;
        writeln!(f, "</marker>")?;
        writeln!(f, "<style>")?;
        writeln!(f, ".participant {{ fill: white; stroke: black; stroke-width: {stroke}; }}")?;
        writeln!(f, ".lifeline {{ stroke: gray; stroke-width: 1; stroke-dasharray: 4,3; }}")?;
        writeln!(f, ".line {{ stroke: black; stroke-width: {stroke}; }}")?;
        writeln!(f, ".message {{ stroke: black; stroke-width: {stroke}; fill: none; }}")?;
        writeln!(f, "text {{ font-family: sans-serif; fill: black; }}")?;
        writeln!(f, "</style>")?;
        writeln!(f, "</defs>")?;
        writeln!(f, r#"<rect width="100%" height="100%" fill="white"/>"#)?;

        for primitive in &self.scene.primitives {
            match primitive {
                DrawPrimitive::Rect(rect) => self.write_rect(f, rect)?,
                DrawPrimitive::Line(segment) => self.write_segment(f, segment)?,
                DrawPrimitive::Arrow(arrow) => self.write_arrow(f, arrow)?,
                DrawPrimitive::Text(text) => self.write_text(f, text)?,
            }
        }

        write!(f, "</svg>")
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
