// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use super::config::CanvasConfig;

/// Horizontal lifeline positions, kept in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantPositions {
    entries: Vec<(SmolStr, f64)>,
    index_by_name: BTreeMap<SmolStr, usize>,
    spacing: f64,
}

impl ParticipantPositions {
    pub fn get(&self, name: &str) -> Option<f64> {
        let idx = *self.index_by_name.get(name)?;
        self.entries.get(idx).map(|(_, x)| *x)
    }

    /// `(name, x)` pairs, left to right.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(name, x)| (name.as_str(), *x))
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_width(&self) -> f64 {
        self.entries.len() as f64 * self.spacing
    }

    pub fn min_x(&self) -> Option<f64> {
        self.entries.first().map(|(_, x)| *x)
    }

    pub fn max_x(&self) -> Option<f64> {
        self.entries.last().map(|(_, x)| *x)
    }
}

/// Column spacing: at least `min_spacing`, widened so the longest name fits.
pub fn participant_spacing<'a>(
    names: impl IntoIterator<Item = &'a str>,
    config: &CanvasConfig,
) -> f64 {
    let max_label_width = names
        .into_iter()
        .map(|name| name.chars().count() as f64 * config.char_width)
        .fold(0.0_f64, f64::max);
    config.min_spacing.max(max_label_width + config.spacing_pad)
}

/// Places participants left to right at evenly spaced x positions centered on zero.
///
/// Duplicate names keep their first position. The result depends only on the names and their
/// order.
pub fn compute_positions<'a>(
    names: impl IntoIterator<Item = &'a str>,
    config: &CanvasConfig,
) -> ParticipantPositions {
    let mut unique = Vec::<&str>::new();
    let mut index_by_name = BTreeMap::<SmolStr, usize>::new();
    for name in names {
        if index_by_name.contains_key(name) {
            continue;
        }
        index_by_name.insert(SmolStr::new(name), unique.len());
        unique.push(name);
    }

    let spacing = participant_spacing(unique.iter().copied(), config);
    let total_width = unique.len() as f64 * spacing;
    let start_x = -(total_width / 2.0) + (spacing / 2.0);

    let entries = unique
        .iter()
        .enumerate()
        .map(|(i, name)| (SmolStr::new(name), start_x + (i as f64 * spacing)))
        .collect::<Vec<_>>();

    ParticipantPositions { entries, index_by_name, spacing }
}
