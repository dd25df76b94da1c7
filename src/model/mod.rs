// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A `Board` owns participants in declaration order; each participant owns its actions and notes,
//! keyed by the source line they were written on.

pub mod board;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod name;

pub use board::{Action, Board, Direction, Event, Note, Participant};
pub use name::{validate_participant_name, NameError};
