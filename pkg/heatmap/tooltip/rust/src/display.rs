// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::fmt::Debug;

use serde::Serialize;

use crate::frame::{DataFrame, Field, FieldConfig, FieldValue};

/// A value rendered for display, split the way a tooltip lays it out.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FormattedValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// NaN when the raw value is not numeric.
    pub numeric: f64,
}

impl FormattedValue {
    /// Plain stringification with numeric coercion, used when a field has no
    /// display processor.
    pub fn plain(value: &FieldValue) -> Self {
        FormattedValue {
            prefix: None,
            text: value.to_string(),
            suffix: None,
            numeric: value.as_f64().unwrap_or(f64::NAN),
        }
    }
}

pub fn formatted_value_to_string(value: &FormattedValue) -> String {
    format!(
        "{}{}{}",
        value.prefix.as_deref().unwrap_or_default(),
        value.text,
        value.suffix.as_deref().unwrap_or_default()
    )
}

/// Per-field value formatter supplied by whoever built the frame.
pub trait DisplayProcessor: Debug + Send + Sync {
    fn display(&self, value: &FieldValue) -> FormattedValue;
}

/// Formats numbers with the field's configured decimals and unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UnitDisplay {
    pub unit: Option<String>,
    pub decimals: Option<u32>,
}

impl UnitDisplay {
    pub fn from_config(config: &FieldConfig) -> Option<Self> {
        if config.unit.is_none() && config.decimals.is_none() {
            return None;
        }
        Some(UnitDisplay {
            unit: config.unit.clone(),
            decimals: config.decimals,
        })
    }

    fn suffix(&self) -> Option<String> {
        match self.unit.as_deref() {
            None | Some("") | Some("none") => None,
            Some("percent") => Some("%".to_string()),
            Some(unit) => Some(format!(" {unit}")),
        }
    }
}

impl DisplayProcessor for UnitDisplay {
    fn display(&self, value: &FieldValue) -> FormattedValue {
        let Some(numeric) = value.as_f64().filter(|n| n.is_finite()) else {
            return FormattedValue::plain(value);
        };
        let text = match self.decimals {
            Some(decimals) => format!("{:.*}", decimals as usize, numeric),
            None => FieldValue::Number(numeric).to_string(),
        };
        FormattedValue {
            prefix: None,
            text,
            suffix: self.suffix(),
            numeric,
        }
    }
}

/// Formats a raw value through the field's processor, falling back to plain
/// stringification.
pub fn display_field_value(field: &Field, value: &FieldValue) -> FormattedValue {
    match &field.display {
        Some(display) => display.display(value),
        None => FormattedValue::plain(value),
    }
}

/// Human readable name of the field at `index`, disambiguated against the
/// other fields of `frame`.
pub fn field_display_name(frame: &DataFrame, index: usize) -> String {
    let Some(field) = frame.field(index) else {
        return String::new();
    };

    if let Some(display_name) = &field.config.display_name {
        return display_name.clone();
    }

    if let Some(labels) = field.labels.as_ref().filter(|l| !l.is_empty()) {
        let labels = labels
            .iter()
            .map(|(k, v)| format!("{k}=\"{v}\""))
            .collect::<Vec<_>>()
            .join(", ");
        return format!("{} {{{labels}}}", field.name);
    }

    let same_name = |f: &&Field| f.name == field.name;
    let total = frame.fields().iter().filter(same_name).count();
    if total <= 1 {
        return field.name.clone();
    }
    let position = frame
        .fields()
        .iter()
        .take(index + 1)
        .filter(same_name)
        .count();
    format!("{} {position}", field.name)
}
