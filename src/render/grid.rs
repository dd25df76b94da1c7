// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Unicode character-grid preview of a `Scene`.
//!
//! Diagram units are mapped onto cells with a fixed `GridScale`; y is flipped so the header row
//! ends up at the top of the text.

use std::fmt;

use super::text::{text_len, truncate_with_ellipsis};
use super::{Arrow, DrawPrimitive, Point, Rect, Scene, Segment, TextRun};

pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';
pub const BOX_TOP_LEFT: char = '┌';
pub const BOX_TOP_RIGHT: char = '┐';
pub const BOX_BOTTOM_LEFT: char = '└';
pub const BOX_BOTTOM_RIGHT: char = '┘';
pub const BOX_TEE_RIGHT: char = '├';
pub const BOX_TEE_LEFT: char = '┤';
pub const BOX_TEE_DOWN: char = '┬';
pub const BOX_TEE_UP: char = '┴';
pub const BOX_CROSS: char = '┼';

pub const ARROW_HEAD_RIGHT: char = '▶';
pub const ARROW_HEAD_LEFT: char = '◀';
pub const SELF_MESSAGE_MARKER: char = '↺';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edges(u8);

impl Edges {
    const NONE: Self = Self(0);
    const LEFT: Self = Self(1 << 0);
    const RIGHT: Self = Self(1 << 1);
    const UP: Self = Self(1 << 2);
    const DOWN: Self = Self(1 << 3);

    fn is_empty(self) -> bool {
        self.0 == 0
    }

    fn contains(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn edges_of(ch: char) -> Option<Edges> {
    let edges = match ch {
        BOX_HORIZONTAL => Edges::LEFT.union(Edges::RIGHT),
        BOX_VERTICAL => Edges::UP.union(Edges::DOWN),
        BOX_TOP_LEFT => Edges::RIGHT.union(Edges::DOWN),
        BOX_TOP_RIGHT => Edges::LEFT.union(Edges::DOWN),
        BOX_BOTTOM_LEFT => Edges::RIGHT.union(Edges::UP),
        BOX_BOTTOM_RIGHT => Edges::LEFT.union(Edges::UP),
        BOX_TEE_RIGHT => Edges::UP.union(Edges::DOWN).union(Edges::RIGHT),
        BOX_TEE_LEFT => Edges::UP.union(Edges::DOWN).union(Edges::LEFT),
        BOX_TEE_DOWN => Edges::LEFT.union(Edges::RIGHT).union(Edges::DOWN),
        BOX_TEE_UP => Edges::LEFT.union(Edges::RIGHT).union(Edges::UP),
        BOX_CROSS => Edges::LEFT.union(Edges::RIGHT).union(Edges::UP).union(Edges::DOWN),
        _ => return None,
    };
    Some(edges)
}

fn char_of(edges: Edges) -> char {
    match edges.0 {
        0 => ' ',
        1..=3 => BOX_HORIZONTAL,
        4 | 8 | 12 => BOX_VERTICAL,
        10 => BOX_TOP_LEFT,
        9 => BOX_TOP_RIGHT,
        6 => BOX_BOTTOM_LEFT,
        5 => BOX_BOTTOM_RIGHT,
        14 => BOX_TEE_RIGHT,
        13 => BOX_TEE_LEFT,
        11 => BOX_TEE_DOWN,
        7 => BOX_TEE_UP,
        _ => BOX_CROSS,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid area overflow: {width}*{height}")]
    AreaOverflow { width: usize, height: usize },
    #[error("out of bounds: ({x},{y}) for {width}x{height} grid")]
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
    #[error("scene bounds are not a finite, non-negative extent")]
    InvalidBounds,
}

/// A fixed-size, bounds-checked character grid.
///
/// Plain characters overwrite (last writer wins). Box-drawing characters merge into junctions
/// with the strokes already present in the cell and its neighbours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<char>,
    edges: Vec<Edges>,
}

impl CharGrid {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        Self::new_filled(width, height, ' ')
    }

    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, GridError> {
        let len = width.checked_mul(height).ok_or(GridError::AreaOverflow { width, height })?;
        Ok(Self { width, height, cells: vec![fill; len], edges: vec![Edges::NONE; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, GridError> {
        let idx = self.index_of(x, y)?;
        Ok(self.render_at(x, y, idx))
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), GridError> {
        let idx = self.index_of(x, y)?;
        match edges_of(ch) {
            Some(edges) => self.edges[idx] = self.edges[idx].union(edges),
            None => {
                self.cells[idx] = ch;
                self.edges[idx] = Edges::NONE;
            }
        }
        Ok(())
    }

    /// Writes `text` starting at column `x`, which may be negative; cells outside the row are
    /// skipped.
    pub fn write_clipped(&mut self, x: isize, y: usize, text: &str) -> Result<(), GridError> {
        self.check_row(y)?;
        for (offset, ch) in text.chars().enumerate() {
            let Some(col) = x.checked_add(offset as isize) else {
                break;
            };
            if col < 0 {
                continue;
            }
            let col = col as usize;
            if col >= self.width {
                break;
            }
            self.set(col, y, ch)?;
        }
        Ok(())
    }

    pub fn draw_hline(&mut self, x0: usize, x1: usize, y: usize) -> Result<(), GridError> {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        self.index_of(max_x, y)?;
        for x in min_x..=max_x {
            self.set(x, y, BOX_HORIZONTAL)?;
        }
        Ok(())
    }

    pub fn draw_vline(&mut self, x: usize, y0: usize, y1: usize) -> Result<(), GridError> {
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        self.index_of(x, max_y)?;
        for y in min_y..=max_y {
            self.set(x, y, BOX_VERTICAL)?;
        }
        Ok(())
    }

    /// Draws a single-line box with corners at `(x0, y0)` and `(x1, y1)`. Nothing is drawn when
    /// a corner is out of bounds.
    pub fn draw_box(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) -> Result<(), GridError> {
        let (min_x, max_x) = (x0.min(x1), x0.max(x1));
        let (min_y, max_y) = (y0.min(y1), y0.max(y1));
        self.index_of(max_x, max_y)?;

        if min_y == max_y {
            return self.draw_hline(min_x, max_x, min_y);
        }
        if min_x == max_x {
            return self.draw_vline(min_x, min_y, max_y);
        }

        for x in (min_x + 1)..max_x {
            self.set(x, min_y, BOX_HORIZONTAL)?;
            self.set(x, max_y, BOX_HORIZONTAL)?;
        }
        for y in (min_y + 1)..max_y {
            self.set(min_x, y, BOX_VERTICAL)?;
            self.set(max_x, y, BOX_VERTICAL)?;
        }
        self.set(min_x, min_y, BOX_TOP_LEFT)?;
        self.set(max_x, min_y, BOX_TOP_RIGHT)?;
        self.set(min_x, max_y, BOX_BOTTOM_LEFT)?;
        self.set(max_x, max_y, BOX_BOTTOM_RIGHT)
    }

    fn check_row(&self, y: usize) -> Result<(), GridError> {
        if y < self.height {
            Ok(())
        } else {
            Err(self.out_of_bounds(0, y))
        }
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> GridError {
        GridError::OutOfBounds { x, y, width: self.width, height: self.height }
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, GridError> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(self.out_of_bounds(x, y))
        }
    }

    fn render_at(&self, x: usize, y: usize, idx: usize) -> char {
        let edges = self.edges[idx];
        if edges.is_empty() {
            return self.cells[idx];
        }
        let connected = self.connected_edges(x, y, edges);
        char_of(if connected.is_empty() { edges } else { connected })
    }

    /// Keeps only the strokes that meet a matching stroke in the neighbouring cell.
    fn connected_edges(&self, x: usize, y: usize, edges: Edges) -> Edges {
        let neighbours = [
            (Edges::LEFT, Edges::RIGHT, x.checked_sub(1).map(|nx| (nx, y))),
            (Edges::RIGHT, Edges::LEFT, Some((x + 1, y)).filter(|(nx, _)| *nx < self.width)),
            (Edges::UP, Edges::DOWN, y.checked_sub(1).map(|ny| (x, ny))),
            (Edges::DOWN, Edges::UP, Some((x, y + 1)).filter(|(_, ny)| *ny < self.height)),
        ];

        neighbours.into_iter().fold(Edges::NONE, |acc, (own, facing, at)| {
            match at {
                Some((nx, ny)) if edges.contains(own)
                    && self.edges[ny * self.width + nx].contains(facing) =>
                {
                    acc.union(own)
                }
                _ => acc,
            }
        })
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.render_at(x, y, y * self.width + x))?;
            }
            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}

/// Cells per diagram unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridScale {
    pub cols_per_unit: f64,
    pub rows_per_unit: f64,
}

impl Default for GridScale {
    fn default() -> Self {
        Self { cols_per_unit: 8.0, rows_per_unit: 6.0 }
    }
}

#[derive(Debug, Clone, Copy)]
struct CellBox {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl CellBox {
    fn contains(&self, x: usize, y: usize) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }

    fn inner_width(&self) -> usize {
        (self.x1 - self.x0).saturating_sub(1)
    }
}

struct Raster<'a> {
    scene: &'a Scene,
    scale: GridScale,
    grid: CharGrid,
    boxes: Vec<CellBox>,
}

impl Raster<'_> {
    fn col_f(&self, x: f64) -> f64 {
        ((x - self.scene.bounds.min_x) * self.scale.cols_per_unit).round()
    }

    fn row_f(&self, y: f64) -> f64 {
        ((self.scene.bounds.max_y - y) * self.scale.rows_per_unit).round()
    }

    fn col(&self, x: f64) -> usize {
        clamp_cell(self.col_f(x), self.grid.width())
    }

    fn row(&self, y: f64) -> usize {
        clamp_cell(self.row_f(y), self.grid.height())
    }

    fn cell(&self, point: Point) -> (usize, usize) {
        (self.col(point.x), self.row(point.y))
    }

    fn draw(&mut self, primitive: &DrawPrimitive) -> Result<(), GridError> {
        match primitive {
            DrawPrimitive::Rect(rect) => self.draw_rect(rect),
            DrawPrimitive::Line(segment) => self.draw_segment(segment),
            DrawPrimitive::Arrow(arrow) => self.draw_arrow(arrow),
            DrawPrimitive::Text(text) => self.draw_text(text),
        }
    }

    /// Boxes always get at least one interior row for their label.
    fn draw_rect(&mut self, rect: &Rect) -> Result<(), GridError> {
        let (x0, bottom) = self.cell(rect.origin);
        let (x1, top) = self.cell(Point::new(rect.origin.x + rect.width, rect.origin.y + rect.height));
        let center = self.row(rect.center().y);
        let y0 = top.min(center.saturating_sub(1));
        let y1 = bottom.max(center + 1).min(self.grid.height().saturating_sub(1));

        self.grid.draw_box(x0, y0, x1, y1)?;
        self.boxes.push(CellBox { x0: x0.min(x1), y0, x1: x0.max(x1), y1 });
        Ok(())
    }

    fn draw_segment(&mut self, segment: &Segment) -> Result<(), GridError> {
        let (x0, y0) = self.cell(segment.from);
        let (x1, y1) = self.cell(segment.to);
        if x0 == x1 {
            self.grid.draw_vline(x0, y0, y1)
        } else if y0 == y1 {
            self.grid.draw_hline(x0, x1, y0)
        } else {
            // Only axis-aligned segments are produced; draw the L-shaped approximation.
            self.grid.draw_hline(x0, x1, y0)?;
            self.grid.draw_vline(x1, y0, y1)
        }
    }

    fn draw_arrow(&mut self, arrow: &Arrow) -> Result<(), GridError> {
        let (from, row) = self.cell(arrow.from);
        let to = self.col(arrow.to.x);
        let last_col = self.grid.width().saturating_sub(1);

        if from == to {
            let end = (from + 1).min(last_col);
            self.grid.draw_hline(from, end, row)?;
            if end < last_col {
                self.grid.set(end + 1, row, SELF_MESSAGE_MARKER)?;
            }
            return Ok(());
        }

        self.grid.draw_hline(from, to, row)?;
        if to > from {
            self.grid.set(to - 1, row, ARROW_HEAD_RIGHT)
        } else {
            self.grid.set(to + 1, row, ARROW_HEAD_LEFT)
        }
    }

    fn draw_text(&mut self, text: &TextRun) -> Result<(), GridError> {
        let row_f = self.row_f(text.anchor.y);
        if row_f < 0.0 || row_f >= self.grid.height() as f64 {
            tracing::trace!(text = %text.text, "text row outside preview grid");
            return Ok(());
        }
        let row = row_f as usize;
        let center = self.col_f(text.anchor.x);

        let header = (text.line_no.is_none())
            .then(|| {
                let col = clamp_cell(center, self.grid.width());
                self.boxes.iter().rev().find(|b| b.contains(col, row))
            })
            .flatten();
        let content = match header {
            Some(cell_box) => truncate_with_ellipsis(&text.text, cell_box.inner_width()),
            None => text.text.clone(),
        };

        let start = center as isize - (text_len(&content) / 2) as isize;
        self.grid.write_clipped(start, row, &content)
    }
}

fn clamp_cell(value: f64, len: usize) -> usize {
    if value <= 0.0 {
        0
    } else {
        (value as usize).min(len.saturating_sub(1))
    }
}

/// Rasterizes `scene` onto a grid sized from its bounds.
pub fn rasterize_scene(scene: &Scene, scale: GridScale) -> Result<CharGrid, GridError> {
    let bounds = scene.bounds;
    let cols = bounds.width() * scale.cols_per_unit;
    let rows = bounds.height() * scale.rows_per_unit;
    if !cols.is_finite() || !rows.is_finite() || cols < 0.0 || rows < 0.0 {
        return Err(GridError::InvalidBounds);
    }
    let width = cols.round() as usize + 1;
    let height = rows.round() as usize + 1;

    let mut raster = Raster { scene, scale, grid: CharGrid::new(width, height)?, boxes: Vec::new() };
    for primitive in &scene.primitives {
        raster.draw(primitive)?;
    }

    tracing::debug!(width, height, primitives = scene.primitives.len(), "rasterized scene");
    Ok(raster.grid)
}

/// Renders `scene` as Unicode text with trailing whitespace trimmed from every row.
pub fn render_scene_unicode(scene: &Scene, scale: GridScale) -> Result<String, GridError> {
    let grid = rasterize_scene(scene, scale)?;
    let text = grid.to_string();
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.trim_end());
    }
    Ok(out)
}
