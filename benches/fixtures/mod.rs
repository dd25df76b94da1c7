// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::fmt::Write as _;

use swimlane::model::{Board, Event};
use swimlane::render::{DrawPrimitive, Scene};

const FILLER_WORDS: [&str; 8] = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel"];

fn words_to_len(prefix: &str, target_len: usize) -> String {
    let mut out = String::with_capacity(target_len + 8);
    out.push_str(prefix);
    let mut idx = 0usize;
    while out.len() < target_len {
        out.push(' ');
        out.push_str(FILLER_WORDS[idx % FILLER_WORDS.len()]);
        idx += 1;
    }
    out
}

pub fn checksum_board(board: &Board) -> u64 {
    let mut acc = 0u64;
    for participant in board.participants() {
        acc = acc.wrapping_mul(131).wrapping_add(participant.name().len() as u64);
        for event in participant.events() {
            let kind = match event {
                Event::Action(action) => 1 + action.direction() as u64,
                Event::Note(_) => 7,
            };
            acc = acc.wrapping_mul(131).wrapping_add(kind);
            acc = acc.wrapping_mul(131).wrapping_add(event.line_no() as u64);
            acc = acc.wrapping_mul(131).wrapping_add(event.text().len() as u64);
        }
    }
    acc
}

pub fn checksum_scene(scene: &Scene) -> u64 {
    let mut acc = scene.bounds.min_y.to_bits();
    for primitive in &scene.primitives {
        let tag = match primitive {
            DrawPrimitive::Rect(rect) => rect.origin.x.to_bits(),
            DrawPrimitive::Line(segment) => segment.to.y.to_bits(),
            DrawPrimitive::Arrow(arrow) => arrow.from.y.to_bits() ^ arrow.line_no as u64,
            DrawPrimitive::Text(text) => text.anchor.y.to_bits() ^ text.text.len() as u64,
        };
        acc = acc.wrapping_mul(131).wrapping_add(tag);
    }
    acc
}

pub mod dsl {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Params {
        pub participants: usize,
        pub events: usize,
        /// Every n-th event is a note; 0 disables notes.
        pub note_every: usize,
        pub long_text: bool,
    }

    impl Params {
        pub const fn new(
            participants: usize,
            events: usize,
            note_every: usize,
            long_text: bool,
        ) -> Self {
            Self { participants, events, note_every, long_text }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum Case {
        Small,
        SmallLongText,
        Medium,
        LargeLongText,
    }

    impl Case {
        pub const fn id(self) -> &'static str {
            match self {
                Self::Small => "small",
                Self::SmallLongText => "small_long_text",
                Self::Medium => "medium",
                Self::LargeLongText => "large_long_text",
            }
        }

        pub const fn params(self) -> Params {
            match self {
                Self::Small => Params::new(4, 40, 5, false),
                Self::SmallLongText => Params::new(4, 40, 5, true),
                Self::Medium => Params::new(12, 400, 4, false),
                Self::LargeLongText => Params::new(30, 2_000, 3, true),
            }
        }
    }

    fn participant_name(idx: usize) -> String {
        format!("P{idx:03}")
    }

    fn event_text(idx: usize, long_text: bool) -> String {
        let prefix = format!("event {idx:05}");
        if long_text {
            words_to_len(&prefix, 120)
        } else {
            prefix
        }
    }

    /// DSL source with blank separator lines and interleaved owners.
    pub fn source(params: Params) -> String {
        assert!(params.participants >= 2, "participants must be >= 2");

        let mut out = String::new();
        for idx in 0..params.participants {
            let _ = writeln!(out, "participant {}", participant_name(idx));
        }
        out.push('\n');

        for idx in 0..params.events {
            let owner = participant_name(idx % params.participants);
            let other = participant_name((idx + 1) % params.participants);
            let text = event_text(idx, params.long_text);
            if params.note_every > 0 && idx % params.note_every == params.note_every - 1 {
                let _ = writeln!(out, "note over {owner}: {text}");
            } else if idx % 2 == 0 {
                let _ = writeln!(out, "{owner}->{other}: {text}");
            } else {
                let _ = writeln!(out, "{owner}<-{other}: {text}");
            }
        }

        out
    }

    pub fn fixture(case: Case) -> String {
        source(case.params())
    }
}
