// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use log::debug;
use serde::Serialize;

use crate::buckets::{BucketsMinMax, resolve_bucket_min_max};
use crate::display_values::{DisplayValue, extract_row_display_values};
use crate::format::{FormatContext, format_milliseconds, x_disp};
use crate::frame::{Field, FieldType, FieldValue};
use crate::heatmap::{HeatmapData, hover_cell_color};
use crate::layout::{FieldRole, Layout, select_field};

/// Everything a hover tooltip shows for one heatmap cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub row: usize,
    pub layout: Layout,
    pub display_values: Vec<DisplayValue>,
    pub buckets: BucketsMinMax,
    /// `min - max` of the x bucket, formatted like the x axis.
    pub x_range: String,
    /// Width of a time bucket, e.g. `5 minutes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<FieldValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_color: Option<String>,
}

/// Builds the tooltip of the cell at `row`. `column` marks the hovered field.
///
/// Returns `None` when the data has no frame, the row is outside the frame,
/// or no field is tooltip-visible.
pub fn build_tooltip(
    data: &HeatmapData,
    row: usize,
    column: Option<usize>,
    ctx: &FormatContext,
) -> Option<Tooltip> {
    let frame = data.heatmap.as_ref()?;
    if row >= frame.length() {
        debug!("row {row} is outside a frame of {} rows", frame.length());
        return None;
    }

    let display_values = extract_row_display_values(Some(frame), Some(row), column)?;

    let layout = data.layout();
    let x_field = select_field(frame, FieldRole::X, layout);
    let y_field = select_field(frame, FieldRole::Y, layout);
    let count_field = select_field(frame, FieldRole::Count, layout);

    let x_values = x_field.map(Field::numbers).unwrap_or_default();
    let y_values = y_field.map(Field::numbers).unwrap_or_default();
    let buckets = resolve_bucket_min_max(data, &x_values, &y_values, row);

    let x_range = format!(
        "{} - {}",
        x_disp(buckets.x_bucket_min, x_field, ctx),
        x_disp(buckets.x_bucket_max, x_field, ctx)
    );

    let width = buckets.x_bucket_max - buckets.x_bucket_min;
    let bucket_width = (x_field.is_some_and(|f| f.field_type == FieldType::Time)
        && width.is_finite()
        && width > 0.0)
        .then(|| format_milliseconds(width));

    Some(Tooltip {
        row,
        layout,
        display_values,
        buckets,
        x_range,
        bucket_width,
        count: count_field.and_then(|f| f.value(row)).cloned(),
        cell_color: hover_cell_color(data, row).cell_color.map(str::to_string),
    })
}
