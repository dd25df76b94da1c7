// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use regex::Regex;

/// Identifier pattern shared by participant declarations, actions and notes.
pub(crate) const IDENT_PATTERN: &str = r"\w+";

static NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn name_regex() -> &'static Regex {
    NAME_REGEX.get_or_init(|| {
        Regex::new(&format!("^{IDENT_PATTERN}$")).expect("valid participant name regex")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("participant name must not be empty")]
    Empty,
    #[error("participant name must not contain whitespace: {name:?}")]
    ContainsWhitespace { name: String },
    #[error("participant name contains invalid character '{ch}': {name:?}")]
    InvalidChar { name: String, ch: char },
}

/// Accepts exactly the names the DSL can spell: one or more word characters.
pub fn validate_participant_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if name.chars().any(char::is_whitespace) {
        return Err(NameError::ContainsWhitespace { name: name.to_owned() });
    }
    if name_regex().is_match(name) {
        return Ok(());
    }

    let ch = name
        .chars()
        .find(|c| !c.is_alphanumeric() && *c != '_')
        .unwrap_or('?');
    Err(NameError::InvalidChar { name: name.to_owned(), ch })
}
