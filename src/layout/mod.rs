// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout for the swimlane diagram.
//!
//! This module computes horizontal participant positions and the global event timeline that the
//! canvas walks to advance its vertical cursor.

pub mod config;
pub mod positions;
pub mod timeline;

pub use config::{CanvasConfig, ConfigError};
pub use positions::{compute_positions, participant_spacing, ParticipantPositions};
pub use timeline::{merge_timeline, TimelineEntry};
