// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Swimlane: a tiny sequence-diagram DSL.
//!
//! Text goes through two stages:
//! - `format::parse_board` turns source lines into a `model::Board` of participants and their
//!   line-numbered events.
//! - `render::Canvas` lays the board out and emits a `render::Scene` of positioned primitives,
//!   which `render::svg` and `render::grid` can draw.

pub mod format;
pub mod layout;
pub mod model;
pub mod render;

use format::BoardParseError;
use layout::CanvasConfig;
use render::{Canvas, CanvasError, Scene};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] BoardParseError),
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// Parses `source` and renders it in one step.
pub fn render_source(source: &str, config: CanvasConfig) -> Result<Scene, Error> {
    let board = format::parse_board(source)?;
    Ok(Canvas::new(&board, config).render()?)
}
