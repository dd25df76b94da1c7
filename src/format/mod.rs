// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram source parsing.
//!
//! The DSL is flat and line-oriented: `participant` declarations, `A->B: text` / `A<-B: text`
//! actions and `note over A: text` notes. Everything else is ignored.

pub mod board;

pub use board::{classify_line, parse_board, BoardParseError, ReferenceRole, Statement};
