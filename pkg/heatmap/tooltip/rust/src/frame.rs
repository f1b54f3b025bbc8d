// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Columnar data frames as produced by the query pipeline.
//!
//! The JSON form mirrors the pipeline's wire format: camelCase keys, field
//! types as lowercase strings and raw values as plain JSON scalars.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::display::{DisplayProcessor, UnitDisplay};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    /// Epoch milliseconds.
    Time,
    String,
    Boolean,
    #[default]
    #[serde(other)]
    Other,
}

/// A single raw cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl FieldValue {
    /// Numeric coercion. Strings are parsed, booleans and nulls are not numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::String(s) => s.trim().parse().ok(),
            FieldValue::Null | FieldValue::Bool(_) => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) if n.is_infinite() && n.is_sign_positive() => {
                write!(f, "Infinity")
            }
            FieldValue::Number(n) if n.is_infinite() => write!(f, "-Infinity"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HideFrom {
    #[serde(default)]
    pub tooltip: bool,
    #[serde(default)]
    pub viz: bool,
    #[serde(default)]
    pub legend: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldConfig {
    #[serde(default)]
    pub hide_from: HideFrom,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Overrides the name shown to users.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    #[serde(default)]
    pub custom: CustomFieldConfig,
}

/// A named, typed column.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default)]
    pub values: Vec<FieldValue>,
    #[serde(default)]
    pub config: FieldConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(skip)]
    pub display: Option<Arc<dyn DisplayProcessor>>,
}

impl Field {
    pub fn new<V>(name: &str, field_type: FieldType, values: impl IntoIterator<Item = V>) -> Self
    where
        V: Into<FieldValue>,
    {
        Field {
            name: name.to_string(),
            field_type,
            values: values.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn hidden_from_tooltip(mut self) -> Self {
        self.config.custom.hide_from.tooltip = true;
        self
    }

    pub fn with_display(mut self, display: Arc<dyn DisplayProcessor>) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.config.display_name = Some(display_name.to_string());
        self
    }

    pub fn with_labels<'a>(mut self, labels: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        self.labels = Some(
            labels
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        );
        self
    }

    pub fn is_hidden_from_tooltip(&self) -> bool {
        self.config.custom.hide_from.tooltip
    }

    pub fn value(&self, row: usize) -> Option<&FieldValue> {
        self.values.get(row)
    }

    /// Numeric view of the column. Values that do not coerce become NaN so
    /// that positions stay aligned with rows.
    pub fn numbers(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|v| v.as_f64().unwrap_or(f64::NAN))
            .collect()
    }
}

#[derive(Deserialize)]
struct RawFrame {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    fields: Vec<Field>,
}

impl TryFrom<RawFrame> for DataFrame {
    type Error = Error;

    fn try_from(raw: RawFrame) -> Result<Self> {
        DataFrame::new(raw.name, raw.fields)
    }
}

/// An ordered set of equal-length fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "RawFrame")]
pub struct DataFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    fields: Vec<Field>,
}

impl DataFrame {
    /// Builds a frame, rejecting fields whose lengths differ from the first.
    pub fn new(name: Option<String>, fields: Vec<Field>) -> Result<Self> {
        if let Some(first) = fields.first() {
            let expected = first.values.len();
            if let Some(bad) = fields.iter().find(|f| f.values.len() != expected) {
                return Err(Error::FieldLengthMismatch {
                    field: bad.name.clone(),
                    expected,
                    actual: bad.values.len(),
                });
            }
        }
        Ok(DataFrame { name, fields })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of rows.
    pub fn length(&self) -> usize {
        self.fields.first().map_or(0, |f| f.values.len())
    }

    /// Attaches a unit/decimals display processor to every field whose
    /// config asks for one and that has no processor yet.
    pub fn with_config_display(mut self) -> Self {
        for field in &mut self.fields {
            if field.display.is_none()
                && let Some(display) = UnitDisplay::from_config(&field.config)
            {
                field.display = Some(Arc::new(display));
            }
        }
        self
    }
}
