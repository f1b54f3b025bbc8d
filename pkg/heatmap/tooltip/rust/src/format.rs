// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::display::formatted_value_to_string;
use crate::frame::{Field, FieldType, FieldValue};

const TOOLTIP_TIME_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Rendering settings a tooltip needs from its surroundings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatContext {
    /// Offset time axes are shown in.
    pub utc_offset: UtcOffset,
}

impl Default for FormatContext {
    fn default() -> Self {
        FormatContext {
            utc_offset: UtcOffset::UTC,
        }
    }
}

fn format_epoch_millis(millis: f64, offset: UtcOffset) -> Option<String> {
    if !millis.is_finite() {
        return None;
    }
    let nanos = (millis * 1_000_000.0).round() as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()?
        .checked_to_offset(offset)?
        .format(TOOLTIP_TIME_FORMAT)
        .ok()
}

/// Formats an x axis value: through the field's display processor when it
/// has one, as a timestamp for time fields, as a plain number otherwise.
pub fn x_disp(value: f64, x_field: Option<&Field>, ctx: &FormatContext) -> String {
    let raw = FieldValue::Number(value);
    if let Some(display) = x_field.and_then(|f| f.display.as_ref()) {
        return formatted_value_to_string(&display.display(&raw));
    }

    if x_field.is_some_and(|f| f.field_type == FieldType::Time)
        && let Some(formatted) = format_epoch_millis(value, ctx.utc_offset)
    {
        return formatted;
    }

    raw.to_string()
}

const MILLIS_PER_UNIT: [(&str, f64); 8] = [
    ("year", 1000.0 * 60.0 * 60.0 * 24.0 * 365.0),
    ("month", 1000.0 * 60.0 * 60.0 * 24.0 * 30.0),
    ("week", 1000.0 * 60.0 * 60.0 * 24.0 * 7.0),
    ("day", 1000.0 * 60.0 * 60.0 * 24.0),
    ("hour", 1000.0 * 60.0 * 60.0),
    ("minute", 1000.0 * 60.0),
    ("second", 1000.0),
    ("millisecond", 1.0),
];

/// Renders a duration in its largest whole unit, e.g. `2 hours`.
///
/// Months are 30 days and years 365 days. Durations under one millisecond
/// render as `0 milliseconds`.
pub fn format_milliseconds(milliseconds: f64) -> String {
    let (unit, value) = MILLIS_PER_UNIT
        .iter()
        .find(|(_, size)| milliseconds >= *size)
        .map_or(("millisecond", 0), |&(unit, size)| {
            (unit, (milliseconds / size).floor() as i64)
        });

    if value == 1 {
        format!("{value} {unit}")
    } else {
        format!("{value} {unit}s")
    }
}
