// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Swimlane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// Layout constants for one render pass, in abstract diagram units (y grows upward).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Nominal output size, carried through to the scene for renderers that want it.
    pub figure_size: [f64; 2],
    /// Wrap width for labels and notes, in characters.
    pub max_text_width: usize,
    /// Cursor advance per event.
    pub line_height: f64,
    /// Extra cursor advance per wrapped line beyond the first.
    pub line_substep: f64,
    /// Distance between consecutive wrapped text lines.
    pub text_line_step: f64,
    /// Gap between an arrow and the bottom of its label.
    pub label_offset: f64,
    pub box_width: f64,
    pub box_height: f64,
    pub min_spacing: f64,
    /// Estimated label width per character, used for participant spacing.
    pub char_width: f64,
    pub spacing_pad: f64,
    /// Center line of the participant header boxes.
    pub top_y: f64,
    /// Distance from `top_y` to the cursor start; the first event sits one `line_height` lower.
    pub header_gap: f64,
    pub margin_x: f64,
    pub margin_y: f64,
    pub font_size: f64,
    pub header_font_size: f64,
    /// Prefix for the first line of every note.
    pub note_marker: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            figure_size: [12.0, 8.0],
            max_text_width: 30,
            line_height: 0.5,
            line_substep: 0.1,
            text_line_step: 0.2,
            label_offset: 0.15,
            box_width: 1.5,
            box_height: 0.4,
            min_spacing: 2.5,
            char_width: 0.08,
            spacing_pad: 1.0,
            top_y: 10.0,
            header_gap: 1.0,
            margin_x: 2.0,
            margin_y: 1.0,
            font_size: 8.0,
            header_font_size: 10.0,
            note_marker: "note: ".to_owned(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid canvas config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("canvas config field `{field}` must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("canvas config field `{field}` must be > 0, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("canvas config field `{field}` must be >= 0, got {value}")]
    Negative { field: &'static str, value: f64 },
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if finite(field, value)? >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl CanvasConfig {
    /// Parses a (possibly partial) JSON object; missing fields keep their defaults.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_text_width(mut self, max_text_width: usize) -> Self {
        self.max_text_width = max_text_width;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("figure_size[0]", self.figure_size[0])?;
        positive("figure_size[1]", self.figure_size[1])?;
        positive("line_height", self.line_height)?;
        positive("text_line_step", self.text_line_step)?;
        positive("box_width", self.box_width)?;
        positive("box_height", self.box_height)?;
        positive("min_spacing", self.min_spacing)?;
        positive("font_size", self.font_size)?;
        positive("header_font_size", self.header_font_size)?;

        non_negative("line_substep", self.line_substep)?;
        non_negative("label_offset", self.label_offset)?;
        non_negative("char_width", self.char_width)?;
        non_negative("spacing_pad", self.spacing_pad)?;
        non_negative("header_gap", self.header_gap)?;
        non_negative("margin_x", self.margin_x)?;
        non_negative("margin_y", self.margin_y)?;

        finite("top_y", self.top_y)?;
        Ok(())
    }
}
