// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::model::name::IDENT_PATTERN;
use crate::model::{Action, Board, Direction, NameError, Note};

static PARTICIPANT_REGEX: OnceLock<Regex> = OnceLock::new();
static ACTION_REGEX: OnceLock<Regex> = OnceLock::new();
static NOTE_REGEX: OnceLock<Regex> = OnceLock::new();

fn participant_regex() -> &'static Regex {
    PARTICIPANT_REGEX.get_or_init(|| {
        Regex::new(&format!(r"participant\s+(?P<name>{IDENT_PATTERN})"))
            .expect("valid participant regex")
    })
}

fn action_regex() -> &'static Regex {
    ACTION_REGEX.get_or_init(|| {
        Regex::new(&format!(
            r"(?P<sender>{IDENT_PATTERN})(?P<op>->|<-)(?P<target>{IDENT_PATTERN}):(?P<text>.+)"
        ))
        .expect("valid action regex")
    })
}

fn note_regex() -> &'static Regex {
    NOTE_REGEX.get_or_init(|| {
        Regex::new(&format!(r"note over (?P<subject>{IDENT_PATTERN}):(?P<text>.+)"))
            .expect("valid note regex")
    })
}

/// How an undeclared name was referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceRole {
    Sender,
    Target,
    Subject,
}

impl fmt::Display for ReferenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sender => f.write_str("sender"),
            Self::Target => f.write_str("target"),
            Self::Subject => f.write_str("note subject"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error(
        "{role} '{name}' on line {line_no} is not a declared participant (expected 'participant {name}')"
    )]
    UndeclaredParticipant { line_no: usize, name: String, role: ReferenceRole },
    #[error("invalid participant declaration '{name}': {reason}")]
    InvalidParticipant { name: String, reason: NameError },
}

/// A recognized line of DSL source, borrowing from the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statement<'a> {
    Action { sender: &'a str, direction: Direction, target: &'a str, text: &'a str },
    Note { subject: &'a str, text: &'a str },
}

fn match_start(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(usize::MAX, |m| m.start())
}

fn action_statement<'a>(caps: &Captures<'a>) -> Option<Statement<'a>> {
    Some(Statement::Action {
        sender: caps.name("sender")?.as_str(),
        direction: Direction::from_token(caps.name("op")?.as_str())?,
        target: caps.name("target")?.as_str(),
        text: caps.name("text")?.as_str().trim(),
    })
}

fn note_statement<'a>(caps: &Captures<'a>) -> Option<Statement<'a>> {
    Some(Statement::Note {
        subject: caps.name("subject")?.as_str(),
        text: caps.name("text")?.as_str().trim(),
    })
}

/// Classifies one physical line.
///
/// Both patterns are searched anywhere in the line. When both hit, the match starting further
/// left wins; the two grammars can never start at the same offset.
pub fn classify_line(line: &str) -> Option<Statement<'_>> {
    let action = action_regex().captures(line);
    let note = note_regex().captures(line);

    match (action, note) {
        (Some(action), Some(note)) if match_start(&note) < match_start(&action) => {
            note_statement(&note)
        }
        (Some(action), _) => action_statement(&action),
        (None, Some(note)) => note_statement(&note),
        (None, None) => None,
    }
}

fn undeclared(line_no: usize, name: &str, role: ReferenceRole) -> BoardParseError {
    BoardParseError::UndeclaredParticipant { line_no, name: name.to_owned(), role }
}

/// Parses DSL text into a `Board`.
///
/// Declarations are collected from the whole text first, so an action may appear before the
/// `participant` line that declares its endpoints. Unrecognized lines are ignored. Referencing a
/// name that is never declared fails with the offending line and name.
pub fn parse_board(text: &str) -> Result<Board, BoardParseError> {
    let mut board = Board::new();

    for caps in participant_regex().captures_iter(text) {
        let Some(name) = caps.name("name") else {
            continue;
        };
        let name = name.as_str().trim();
        board.declare(name).map_err(|reason| BoardParseError::InvalidParticipant {
            name: name.to_owned(),
            reason,
        })?;
    }

    let mut ignored = 0usize;
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;

        let Some(statement) = classify_line(line) else {
            if !line.trim().is_empty() {
                ignored += 1;
                tracing::trace!(line_no, line, "ignoring unrecognized line");
            }
            continue;
        };

        match statement {
            Statement::Action { sender, direction, target, text } => {
                if !board.contains(sender) {
                    return Err(undeclared(line_no, sender, ReferenceRole::Sender));
                }
                if !board.contains(target) {
                    return Err(undeclared(line_no, target, ReferenceRole::Target));
                }
                let owner = board
                    .participant_mut(sender)
                    .ok_or_else(|| undeclared(line_no, sender, ReferenceRole::Sender))?;
                owner.push_event(Action::new(line_no, direction, target, text));
            }
            Statement::Note { subject, text } => {
                let owner = board
                    .participant_mut(subject)
                    .ok_or_else(|| undeclared(line_no, subject, ReferenceRole::Subject))?;
                owner.push_event(Note::new(line_no, subject, text));
            }
        }
    }

    board.sort_events();

    tracing::debug!(
        participants = board.len(),
        events = board.event_count(),
        ignored,
        "parsed board"
    );
    Ok(board)
}
