// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{
    compute_positions, merge_timeline, CanvasConfig, ConfigError, ParticipantPositions,
};
use crate::model::{Action, Board, Direction, Event, Note};

use super::text::wrap_text;
use super::{
    Arrow, Bounds, DrawPrimitive, FontStyle, Point, Rect, Scene, Segment, TextRun, VerticalAnchor,
};

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("cannot render an empty diagram: no participants are declared")]
    EmptyDiagram,
    #[error("no position for participant '{participant}' referenced on line {line_no}")]
    MissingPosition { participant: String, line_no: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Single-use layout and draw pass over one `Board`.
///
/// Positions are computed once on construction. `render` consumes the canvas, walks the global
/// timeline and moves one shared vertical cursor downward: one `line_height` per event plus
/// `line_substep` for every wrapped text line beyond the first.
#[derive(Debug)]
pub struct Canvas<'a> {
    board: &'a Board,
    config: CanvasConfig,
    positions: ParticipantPositions,
    cursor_y: f64,
    events: Vec<DrawPrimitive>,
}

impl<'a> Canvas<'a> {
    pub fn new(board: &'a Board, config: CanvasConfig) -> Self {
        let positions = compute_positions(board.names(), &config);
        let cursor_y = config.top_y - config.header_gap;
        Self { board, config, positions, cursor_y, events: Vec::new() }
    }

    pub fn positions(&self) -> &ParticipantPositions {
        &self.positions
    }

    pub fn render(mut self) -> Result<Scene, CanvasError> {
        self.config.validate()?;
        let (Some(min_x), Some(max_x)) = (self.positions.min_x(), self.positions.max_x()) else {
            return Err(CanvasError::EmptyDiagram);
        };

        let timeline = merge_timeline(self.board);
        for entry in &timeline {
            self.cursor_y -= self.config.line_height;
            let line_count = match entry.event {
                Event::Action(action) => self.emit_action(entry.owner.name(), action)?,
                Event::Note(note) => self.emit_note(note)?,
            };
            self.cursor_y -= line_count.saturating_sub(1) as f64 * self.config.line_substep;
        }

        let mut primitives = self.header_primitives();
        primitives.append(&mut self.events);

        let bounds = Bounds {
            min_x: min_x - self.config.margin_x,
            min_y: self.cursor_y - self.config.margin_y,
            max_x: max_x + self.config.margin_x,
            max_y: self.config.top_y + self.config.margin_y,
        };

        tracing::debug!(
            participants = self.positions.len(),
            events = timeline.len(),
            primitives = primitives.len(),
            final_y = self.cursor_y,
            "rendered canvas"
        );

        Ok(Scene { figure_size: self.config.figure_size, bounds, primitives })
    }

    fn x_of(&self, participant: &str, line_no: usize) -> Result<f64, CanvasError> {
        self.positions.get(participant).ok_or_else(|| CanvasError::MissingPosition {
            participant: participant.to_owned(),
            line_no,
        })
    }

    /// Returns the number of label lines emitted.
    fn emit_action(&mut self, sender: &str, action: &Action) -> Result<usize, CanvasError> {
        let line_no = action.line_no();
        let sender_x = self.x_of(sender, line_no)?;
        let target_x = self.x_of(action.to(), line_no)?;
        let (from_x, to_x) = match action.direction() {
            Direction::Forward => (sender_x, target_x),
            Direction::Backward => (target_x, sender_x),
        };

        let y = self.cursor_y;
        self.events.push(DrawPrimitive::Arrow(Arrow {
            from: Point::new(from_x, y),
            to: Point::new(to_x, y),
            line_no,
        }));

        let lines = wrap_text(action.text(), self.config.max_text_width);
        let line_count = lines.len();
        let mid_x = (from_x + to_x) / 2.0;
        // The first line sits highest; the block grows upward away from the arrow.
        let top_offset =
            self.config.label_offset + line_count.saturating_sub(1) as f64 * self.config.line_substep;

        for (i, line) in lines.into_iter().enumerate() {
            self.events.push(DrawPrimitive::Text(TextRun {
                anchor: Point::new(mid_x, y + top_offset - i as f64 * self.config.text_line_step),
                text: line,
                font_size: self.config.font_size,
                style: FontStyle::Normal,
                vertical: VerticalAnchor::Bottom,
                line_no: Some(line_no),
            }));
        }

        Ok(line_count)
    }

    /// Returns the number of note lines emitted.
    fn emit_note(&mut self, note: &Note) -> Result<usize, CanvasError> {
        let line_no = note.line_no();
        let x = self.x_of(note.subject(), line_no)?;

        let lines = wrap_text(note.text(), self.config.max_text_width);
        let line_count = lines.len();
        let top_y =
            self.cursor_y + line_count.saturating_sub(1) as f64 * self.config.line_substep;

        for (i, line) in lines.into_iter().enumerate() {
            let text = if i == 0 { format!("{}{line}", self.config.note_marker) } else { line };
            self.events.push(DrawPrimitive::Text(TextRun {
                anchor: Point::new(x, top_y - i as f64 * self.config.text_line_step),
                text,
                font_size: self.config.font_size,
                style: FontStyle::Italic,
                vertical: VerticalAnchor::Center,
                line_no: Some(line_no),
            }));
        }

        Ok(line_count)
    }

    /// Header box, label and lifeline per participant. Lifelines run down to the final cursor.
    fn header_primitives(&self) -> Vec<DrawPrimitive> {
        let top_y = self.config.top_y;
        let box_bottom = top_y - self.config.box_height / 2.0;
        let lifeline_end = self.cursor_y.min(box_bottom);

        let mut out = Vec::with_capacity(self.positions.len() * 3 + self.events.len());
        for (name, x) in self.positions.iter() {
            out.push(DrawPrimitive::Rect(Rect::centered(
                Point::new(x, top_y),
                self.config.box_width,
                self.config.box_height,
            )));
            out.push(DrawPrimitive::Text(TextRun {
                anchor: Point::new(x, top_y),
                text: name.to_owned(),
                font_size: self.config.header_font_size,
                style: FontStyle::Normal,
                vertical: VerticalAnchor::Center,
                line_no: None,
            }));
            out.push(DrawPrimitive::Line(Segment {
                from: Point::new(x, box_bottom),
                to: Point::new(x, lifeline_end),
                dashed: true,
            }));
        }
        out
    }
}

#[cfg(test)]
mod tests;
