// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use smol_str::SmolStr;

use super::name::{validate_participant_name, NameError};

/// Which end of an action carries the arrowhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `A->B`: the sender points at the target.
    Forward,
    /// `A<-B`: the target points back at the sender.
    Backward,
}

impl Direction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "->" => Some(Self::Forward),
            "<-" => Some(Self::Backward),
            _ => None,
        }
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Self::Forward => "->",
            Self::Backward => "<-",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    line_no: usize,
    direction: Direction,
    to: SmolStr,
    text: String,
}

impl Action {
    pub fn new(
        line_no: usize,
        direction: Direction,
        to: impl Into<SmolStr>,
        text: impl Into<String>,
    ) -> Self {
        Self { line_no, direction, to: to.into(), text: text.into() }
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    line_no: usize,
    subject: SmolStr,
    text: String,
}

impl Note {
    pub fn new(line_no: usize, subject: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        Self { line_no, subject: subject.into(), text: text.into() }
    }

    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    Action(Action),
    Note(Note),
}

impl Event {
    /// 1-based source line; the global ordering key across all participants.
    pub fn line_no(&self) -> usize {
        match self {
            Self::Action(action) => action.line_no(),
            Self::Note(note) => note.line_no(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Action(action) => action.text(),
            Self::Note(note) => note.text(),
        }
    }
}

impl From<Action> for Event {
    fn from(value: Action) -> Self {
        Self::Action(value)
    }
}

impl From<Note> for Event {
    fn from(value: Note) -> Self {
        Self::Note(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    name: SmolStr,
    events: Vec<Event>,
}

impl Participant {
    fn new(name: SmolStr) -> Self {
        Self { name, events: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn push_event(&mut self, event: impl Into<Event>) {
        self.events.push(event.into());
    }

    /// Stable: equal line numbers keep their insertion order.
    pub fn sort_events(&mut self) {
        self.events.sort_by_key(Event::line_no);
    }
}

/// Parsed diagram: participants in declaration order, each owning its events.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    participants: Vec<Participant>,
    #[serde(skip)]
    index_by_name: BTreeMap<SmolStr, usize>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`, or returns the existing participant if it was declared before.
    pub fn declare(&mut self, name: &str) -> Result<&mut Participant, NameError> {
        validate_participant_name(name)?;

        let idx = match self.index_by_name.get(name) {
            Some(&idx) => idx,
            None => {
                let name = SmolStr::new(name);
                let idx = self.participants.len();
                self.participants.push(Participant::new(name.clone()));
                self.index_by_name.insert(name, idx);
                idx
            }
        };
        Ok(&mut self.participants[idx])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_by_name.contains_key(name)
    }

    pub fn participant(&self, name: &str) -> Option<&Participant> {
        let idx = *self.index_by_name.get(name)?;
        self.participants.get(idx)
    }

    pub fn participant_mut(&mut self, name: &str) -> Option<&mut Participant> {
        let idx = *self.index_by_name.get(name)?;
        self.participants.get_mut(idx)
    }

    /// Participants in declaration order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.participants.iter().map(Participant::name)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.participants.iter().map(|p| p.events().len()).sum()
    }

    pub fn sort_events(&mut self) {
        for participant in &mut self.participants {
            participant.sort_events();
        }
    }
}
