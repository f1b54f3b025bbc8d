// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use log::trace;
use serde::Serialize;

use crate::display::{display_field_value, field_display_name, formatted_value_to_string};
use crate::frame::{DataFrame, FieldValue};
use crate::layout::names;

/// One tooltip row: a field of the hovered data row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayValue {
    /// Display name, disambiguated against the frame.
    pub name: String,
    pub field_name: String,
    pub value: FieldValue,
    pub value_string: String,
    /// Set on the field at the hovered column.
    pub highlight: bool,
}

/// Extracts the tooltip-visible values of `row`.
///
/// A visible `traceID` field is moved to the front. When the frame has no
/// visible `traceID`, the frame's first field takes its place, even when that
/// field is hidden, in which case it is simply left out.
///
/// Returns `None` when there is no frame, no row, or no visible field.
pub fn extract_row_display_values(
    frame: Option<&DataFrame>,
    row: Option<usize>,
    column: Option<usize>,
) -> Option<Vec<DisplayValue>> {
    let (frame, row) = (frame?, row?);

    let visible: Vec<usize> = frame
        .fields()
        .iter()
        .enumerate()
        .filter(|(_, f)| !f.is_hidden_from_tooltip())
        .map(|(idx, _)| idx)
        .collect();

    let promoted = visible
        .iter()
        .copied()
        .find(|&idx| frame.field(idx).is_some_and(|f| f.name == names::TRACE_ID))
        .unwrap_or(0);

    let mut ordered = Vec::with_capacity(visible.len());
    if visible.contains(&promoted) {
        ordered.push(promoted);
    }
    ordered.extend(visible.iter().copied().filter(|&idx| idx != promoted));

    if ordered.is_empty() {
        trace!("row {row}: no tooltip-visible fields");
        return None;
    }

    let values = ordered
        .into_iter()
        .filter_map(|idx| {
            let field = frame.field(idx)?;
            let value = field.value(row).cloned().unwrap_or_default();
            let formatted = display_field_value(field, &value);
            Some(DisplayValue {
                name: field_display_name(frame, idx),
                field_name: field.name.clone(),
                value_string: formatted_value_to_string(&formatted),
                value,
                highlight: column == Some(idx),
            })
        })
        .collect();

    Some(values)
}
