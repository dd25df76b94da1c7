// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Drawable primitives and the renderers that produce or consume them.
//!
//! `Canvas` turns a `Board` into a `Scene`: positioned rectangles, line segments, arrows and text
//! runs in abstract diagram units with y growing upward. The scene is resolution independent;
//! `grid` and `svg` are two surfaces that draw it.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod canvas;
pub mod grid;
pub mod svg;
pub mod text;

pub use canvas::{Canvas, CanvasError};
pub use grid::{rasterize_scene, render_scene_unicode, CharGrid, GridError, GridScale};
pub use svg::{SvgDocument, SvgOptions};
pub use text::{wrap_text, WrappedLines};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned extent of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// How a text run sits relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
    /// The anchor is on the text's bottom edge.
    Bottom,
    /// The anchor is on the text's vertical center.
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    Normal,
    Italic,
}

/// Participant header box. `origin` is the lower-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rect {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
    pub rounded: bool,
}

impl Rect {
    pub fn centered(center: Point, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(center.x - width / 2.0, center.y - height / 2.0),
            width,
            height,
            rounded: true,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.origin.x + self.width / 2.0, self.origin.y + self.height / 2.0)
    }
}

/// Plain line segment; lifelines are dashed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub dashed: bool,
}

/// Message arrow. The head is always drawn at `to`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Arrow {
    pub from: Point,
    pub to: Point,
    pub line_no: usize,
}

impl Arrow {
    pub fn is_self_message(&self) -> bool {
        self.from.x == self.to.x
    }
}

/// One line of text, horizontally centered on `anchor.x`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TextRun {
    pub anchor: Point,
    pub text: String,
    pub font_size: f64,
    pub style: FontStyle,
    pub vertical: VerticalAnchor,
    /// Source line of the event this text belongs to; `None` for header labels.
    pub line_no: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DrawPrimitive {
    Rect(Rect),
    Line(Segment),
    Arrow(Arrow),
    Text(TextRun),
}

/// Output of one canvas render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    pub figure_size: [f64; 2],
    pub bounds: Bounds,
    pub primitives: Vec<DrawPrimitive>,
}

impl Scene {
    pub fn rects(&self) -> impl Iterator<Item = &Rect> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            DrawPrimitive::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            DrawPrimitive::Line(segment) => Some(segment),
            _ => None,
        })
    }

    pub fn arrows(&self) -> impl Iterator<Item = &Arrow> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            DrawPrimitive::Arrow(arrow) => Some(arrow),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextRun> + '_ {
        self.primitives.iter().filter_map(|p| match p {
            DrawPrimitive::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Text runs emitted for the event on `line_no`, top to bottom.
    pub fn texts_for_line(&self, line_no: usize) -> Vec<&TextRun> {
        self.texts().filter(|t| t.line_no == Some(line_no)).collect()
    }
}

/// JSON Schema describing the serialized `Scene`.
pub fn scene_json_schema() -> schemars::Schema {
    schemars::schema_for!(Scene)
}
