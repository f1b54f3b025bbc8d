// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Data shaping for heatmap hover tooltips.
//!
//! Given a heatmap frame and a hovered row, this crate picks the x/y/count
//! columns, extracts the tooltip-visible values of the row, infers bucket
//! sizes the heatmap transform did not record, and resolves the boundaries of
//! the hovered cell. All functions are pure.

// Correctness
#![deny(clippy::indexing_slicing)]
#![deny(clippy::string_slice)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::undocumented_unsafe_blocks)]
// Panicking code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unimplemented)]
#![deny(clippy::todo)]
// Debug code that shouldn't be in production
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

pub mod buckets;
pub mod config;
pub mod display;
pub mod display_values;
mod errors;
pub mod format;
pub mod frame;
pub mod heatmap;
pub mod layout;
pub mod tooltip;

// Re-export the public API
pub use buckets::{BucketSizes, BucketsMinMax, infer_bucket_sizes, interval, resolve_bucket_min_max};
pub use display::{DisplayProcessor, FormattedValue, UnitDisplay, formatted_value_to_string};
pub use display_values::{DisplayValue, extract_row_display_values};
pub use errors::{Error, Result};
pub use format::{FormatContext, format_milliseconds, x_disp};
pub use frame::{DataFrame, Field, FieldConfig, FieldType, FieldValue};
pub use heatmap::{HeatmapColors, HeatmapData, hover_cell_color};
pub use layout::{FieldRole, Layout, select_field};
pub use tooltip::{Tooltip, build_tooltip};
