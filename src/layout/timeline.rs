// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::model::{Board, Event, Participant};

/// One row of the global timeline: an event and the participant that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry<'a> {
    pub owner: &'a Participant,
    pub event: &'a Event,
}

impl TimelineEntry<'_> {
    pub fn line_no(&self) -> usize {
        self.event.line_no()
    }
}

/// Merges every participant's events into one sequence ordered by source line.
///
/// A line index already taken keeps its first owner in declaration order; later events claiming
/// the same index are dropped.
pub fn merge_timeline(board: &Board) -> Vec<TimelineEntry<'_>> {
    let mut by_line = BTreeMap::<usize, TimelineEntry<'_>>::new();

    for owner in board.participants() {
        for event in owner.events() {
            match by_line.entry(event.line_no()) {
                Entry::Vacant(slot) => {
                    slot.insert(TimelineEntry { owner, event });
                }
                Entry::Occupied(taken) => {
                    tracing::trace!(
                        line_no = event.line_no(),
                        kept = taken.get().owner.name(),
                        dropped = owner.name(),
                        "suppressing duplicate timeline index"
                    );
                }
            }
        }
    }

    by_line.into_values().collect()
}
