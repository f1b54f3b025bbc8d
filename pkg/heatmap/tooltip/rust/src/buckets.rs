// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

//! Bucket geometry for heatmap cells.
//!
//! Dense heatmaps store one row per cell in x-major order: the y value varies
//! fastest, so `y_bucket_count` consecutive rows share the same x. Sizes that
//! the heatmap transform did not record are inferred from that layout.

use log::{debug, warn};
use serde::Serialize;

use crate::display_values::{DisplayValue, extract_row_display_values};
use crate::errors::{Error, Result};
use crate::heatmap::HeatmapData;
use crate::layout::names;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketSizes {
    pub x_bucket_count: usize,
    pub y_bucket_count: usize,
    pub x_bucket_size: f64,
    pub y_bucket_size: f64,
}

/// Boundaries of the hovered cell. NaN marks a boundary that could not be
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketsMinMax {
    pub x_bucket_min: f64,
    pub x_bucket_max: f64,
    pub y_bucket_min: f64,
    pub y_bucket_max: f64,
}

/// Distance from the first value to the first value that differs from it,
/// or 0 when all values are equal.
pub fn interval(values: &[f64]) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return 0.0;
    };
    rest.iter()
        .find(|&&v| v != first)
        .map_or(0.0, |&v| v - first)
}

fn infer_y_bucket_count(x_len: usize, y_values: &[f64]) -> Result<usize> {
    let Some(&first) = y_values.first() else {
        return Err(Error::InsufficientData {
            axis: "y",
            what: "bucket count",
            needed: 1,
            actual: 0,
        });
    };
    let last_index = y_values
        .iter()
        .rposition(|&v| v == first)
        .ok_or(Error::NonNumericValue {
            axis: "y",
            index: 0,
        })?;

    x_len
        .checked_sub(last_index)
        .filter(|&count| count > 0)
        .ok_or(Error::InvalidBucketCount { x_len, last_index })
}

fn resolve_y_bucket_count(data: &HeatmapData, x_len: usize, y_values: &[f64]) -> Result<usize> {
    match data.y_bucket_count {
        Some(0) => Err(Error::ZeroBucketCount),
        Some(count) => Ok(count),
        None => infer_y_bucket_count(x_len, y_values),
    }
}

fn resolve_y_bucket_size(data: &HeatmapData, y_values: &[f64]) -> Result<f64> {
    match (data.y_bucket_size, y_values) {
        (Some(size), _) => Ok(size),
        (None, [first, second, ..]) => Ok(second - first),
        (None, _) => Err(Error::InsufficientData {
            axis: "y",
            what: "bucket size",
            needed: 2,
            actual: y_values.len(),
        }),
    }
}

fn resolve_x_bucket_size(data: &HeatmapData, x_values: &[f64]) -> f64 {
    data.x_bucket_size.unwrap_or_else(|| interval(x_values))
}

/// Bucket counts and widths for both axes. Values already known on `data`
/// are used as is; the rest are inferred from the cell coordinates.
///
/// When the x values do not split evenly into `y_bucket_count` columns the x
/// bucket count is rounded down.
pub fn infer_bucket_sizes(
    data: &HeatmapData,
    x_values: &[f64],
    y_values: &[f64],
) -> Result<BucketSizes> {
    let x_len = x_values.len();
    let y_bucket_count = resolve_y_bucket_count(data, x_len, y_values)?;

    let x_bucket_count = match data.x_bucket_count {
        Some(count) => count,
        None => {
            if x_len % y_bucket_count != 0 {
                warn!(
                    "{x_len} cells do not divide into {y_bucket_count} y buckets, rounding x bucket count down"
                );
            }
            x_len / y_bucket_count
        }
    };

    Ok(BucketSizes {
        x_bucket_count,
        y_bucket_count,
        x_bucket_size: resolve_x_bucket_size(data, x_values),
        y_bucket_size: resolve_y_bucket_size(data, y_values)?,
    })
}

fn logged<T>(row: usize, what: &str, value: Result<T>) -> Option<T> {
    value
        .inspect_err(|e| debug!("row {row}: cannot infer {what}: {e}"))
        .ok()
}

const BOUNDARY_FIELDS: [&str; 4] = [names::X_MIN, names::X_MAX, names::Y_MIN, names::Y_MAX];

fn explicit_bound(display_values: &[DisplayValue], name: &str) -> f64 {
    display_values
        .iter()
        .find(|dv| dv.field_name == name)
        .and_then(|dv| dv.value.as_f64())
        .unwrap_or(f64::NAN)
}

/// Resolves the `[min, max)` interval of the cell at `row` on both axes.
///
/// Boundaries present as tooltip-visible fields are taken verbatim. Missing
/// ones are derived from the cell coordinates and the bucket sizes, in the
/// order `xMin`, `xMax`, `yMin`, `yMax`; a frame missing both x bounds ends
/// up with `x_values[row]` as its upper bound. A missing y bound replaces
/// both y bounds.
pub fn resolve_bucket_min_max(
    data: &HeatmapData,
    x_values: &[f64],
    y_values: &[f64],
    row: usize,
) -> BucketsMinMax {
    let display_values =
        extract_row_display_values(data.heatmap.as_ref(), Some(row), None).unwrap_or_default();

    let mut bounds = BucketsMinMax {
        x_bucket_min: explicit_bound(&display_values, names::X_MIN),
        x_bucket_max: explicit_bound(&display_values, names::X_MAX),
        y_bucket_min: explicit_bound(&display_values, names::Y_MIN),
        y_bucket_max: explicit_bound(&display_values, names::Y_MAX),
    };

    let missing: Vec<&str> = BOUNDARY_FIELDS
        .into_iter()
        .filter(|name| !display_values.iter().any(|dv| dv.field_name == *name))
        .collect();
    if missing.is_empty() {
        return bounds;
    }

    // Sizes are resolved independently: a failed inference only blanks the
    // boundaries computed from it.
    let x_bucket_size = resolve_x_bucket_size(data, x_values);
    let y_bucket_size =
        logged(row, "y bucket size", resolve_y_bucket_size(data, y_values)).unwrap_or(f64::NAN);
    let y_bucket_count = logged(
        row,
        "y bucket count",
        resolve_y_bucket_count(data, x_values.len(), y_values),
    );
    let x_at_row = x_values.get(row).copied().unwrap_or(f64::NAN);
    let y_at_row = y_bucket_count
        .and_then(|count| row.checked_rem(count))
        .and_then(|idx| y_values.get(idx))
        .copied()
        .unwrap_or(f64::NAN);

    for name in missing {
        match name {
            names::X_MIN => {
                bounds.x_bucket_min = x_at_row;
                bounds.x_bucket_max = x_at_row + x_bucket_size;
            }
            names::X_MAX => {
                bounds.x_bucket_max = x_at_row;
                bounds.x_bucket_min = x_at_row - x_bucket_size;
            }
            _ => {
                bounds.y_bucket_min = y_at_row;
                bounds.y_bucket_max = y_at_row + y_bucket_size;
            }
        }
    }

    bounds
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::frame::{DataFrame, Field, FieldType};

    fn dense(x: &[f64], y: &[f64]) -> HeatmapData {
        let counts = vec![1.0; x.len()];
        HeatmapData::new(
            DataFrame::new(
                None,
                vec![
                    Field::new("xMin", FieldType::Time, x.iter().copied()),
                    Field::new("yMin", FieldType::Number, y.iter().copied()),
                    Field::new("count", FieldType::Number, counts),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_interval() {
        assert_eq!(interval(&[]), 0.0);
        assert_eq!(interval(&[3.0, 3.0, 3.0]), 0.0);
        assert_eq!(interval(&[10.0, 10.0, 10.0, 25.0, 25.0]), 15.0);
        assert_eq!(interval(&[10.0, 4.0]), -6.0);
    }

    #[test]
    fn test_infer_y_bucket_count_from_last_repeat() {
        let data = HeatmapData::default();
        let sizes = infer_bucket_sizes(&data, &[0.0, 0.0, 1.0, 1.0], &[1.0, 1.0, 2.0, 2.0]).unwrap();
        assert_eq!(sizes.y_bucket_count, 3);
        assert_eq!(sizes.x_bucket_count, 1);
        assert_eq!(sizes.y_bucket_size, 0.0);
        assert_eq!(sizes.x_bucket_size, 1.0);
    }

    #[test]
    fn test_infer_dense_grid() {
        let x = [0.0, 0.0, 0.0, 60.0, 60.0, 60.0];
        let y = [10.0, 20.0, 30.0, 10.0, 20.0, 30.0];
        let sizes = infer_bucket_sizes(&HeatmapData::default(), &x, &y).unwrap();
        assert_eq!(
            sizes,
            BucketSizes {
                x_bucket_count: 2,
                y_bucket_count: 3,
                x_bucket_size: 60.0,
                y_bucket_size: 10.0,
            }
        );
    }

    #[test]
    fn test_known_sizes_win() {
        let data = HeatmapData {
            x_bucket_count: Some(7),
            y_bucket_count: Some(2),
            x_bucket_size: Some(5.0),
            y_bucket_size: Some(0.5),
            ..Default::default()
        };
        let sizes = infer_bucket_sizes(&data, &[], &[]).unwrap();
        assert_eq!(
            sizes,
            BucketSizes {
                x_bucket_count: 7,
                y_bucket_count: 2,
                x_bucket_size: 5.0,
                y_bucket_size: 0.5,
            }
        );
    }

    #[test]
    fn test_insufficient_y_values() {
        let data = HeatmapData::default();
        assert_eq!(
            infer_bucket_sizes(&data, &[1.0], &[]).unwrap_err(),
            Error::InsufficientData {
                axis: "y",
                what: "bucket count",
                needed: 1,
                actual: 0,
            }
        );
        assert_eq!(
            infer_bucket_sizes(&data, &[1.0], &[4.0]).unwrap_err(),
            Error::InsufficientData {
                axis: "y",
                what: "bucket size",
                needed: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_invalid_bucket_counts() {
        let data = HeatmapData::default();
        assert_eq!(
            infer_bucket_sizes(&data, &[1.0], &[4.0, 5.0, 4.0]).unwrap_err(),
            Error::InvalidBucketCount {
                x_len: 1,
                last_index: 2,
            }
        );
        assert_eq!(
            infer_bucket_sizes(&data, &[1.0], &[f64::NAN, 1.0]).unwrap_err(),
            Error::NonNumericValue { axis: "y", index: 0 }
        );
        let zero = HeatmapData {
            y_bucket_count: Some(0),
            ..Default::default()
        };
        assert_eq!(
            infer_bucket_sizes(&zero, &[1.0], &[1.0, 2.0]).unwrap_err(),
            Error::ZeroBucketCount
        );
    }

    #[test]
    fn test_uneven_division_rounds_down() {
        let sizes = infer_bucket_sizes(
            &HeatmapData::default(),
            &[0.0, 0.0, 1.0, 1.0, 2.0],
            &[1.0, 2.0, 1.0, 2.0, 1.0],
        )
        .unwrap();
        assert_eq!(sizes.y_bucket_count, 1);
        assert_eq!(sizes.x_bucket_count, 5);

        let sizes = infer_bucket_sizes(
            &HeatmapData {
                y_bucket_count: Some(2),
                ..Default::default()
            },
            &[0.0, 0.0, 1.0, 1.0, 2.0],
            &[1.0, 2.0, 1.0, 2.0, 1.0],
        )
        .unwrap();
        assert_eq!(sizes.x_bucket_count, 2);
    }

    #[test]
    fn test_resolve_explicit_bounds() {
        let frame = DataFrame::new(
            None,
            vec![
                Field::new("xMin", FieldType::Number, [0.0, 5.0]),
                Field::new("xMax", FieldType::Number, [5.0, 10.0]),
                Field::new("yMin", FieldType::Number, [1.0, 1.0]),
                Field::new("yMax", FieldType::Number, [2.0, 2.0]),
                Field::new("count", FieldType::Number, [3.0, 4.0]),
            ],
        )
        .unwrap();
        // Bucket sizes cannot be inferred from these inputs, so any inferred
        // bound would come out as NaN.
        let bounds = resolve_bucket_min_max(&HeatmapData::new(frame), &[], &[], 1);
        assert_eq!(
            bounds,
            BucketsMinMax {
                x_bucket_min: 5.0,
                x_bucket_max: 10.0,
                y_bucket_min: 1.0,
                y_bucket_max: 2.0,
            }
        );
    }

    #[test]
    fn test_resolve_missing_xmax() {
        let frame = DataFrame::new(
            None,
            vec![
                Field::new("xMin", FieldType::Number, [1.0, 3.0]),
                Field::new("yMin", FieldType::Number, [1.0, 1.0]),
                Field::new("yMax", FieldType::Number, [2.0, 2.0]),
            ],
        )
        .unwrap();
        let data = HeatmapData {
            x_bucket_size: Some(2.0),
            y_bucket_count: Some(1),
            y_bucket_size: Some(1.0),
            ..HeatmapData::new(frame)
        };
        let bounds = resolve_bucket_min_max(&data, &[5.0, 7.0], &[1.0, 1.0], 1);
        assert_eq!(bounds.x_bucket_min, 5.0);
        assert_eq!(bounds.x_bucket_max, 7.0);
        assert_eq!(bounds.y_bucket_min, 1.0);
        assert_eq!(bounds.y_bucket_max, 2.0);
    }

    #[test]
    fn test_resolve_dense_infers_y_bounds() {
        let x = [0.0, 0.0, 0.0, 60.0, 60.0, 60.0];
        let y = [10.0, 20.0, 30.0, 10.0, 20.0, 30.0];
        let data = dense(&x, &y);
        let bounds = resolve_bucket_min_max(&data, &x, &y, 4);
        // xMax is missing, so the row's x value becomes the upper bound.
        assert_eq!(
            bounds,
            BucketsMinMax {
                x_bucket_min: 0.0,
                x_bucket_max: 60.0,
                y_bucket_min: 20.0,
                y_bucket_max: 30.0,
            }
        );
    }

    #[test]
    fn test_resolve_both_x_missing_ends_at_row_value() {
        let frame = DataFrame::new(
            None,
            vec![
                Field::new("x", FieldType::Number, [100.0, 200.0]),
                Field::new("y", FieldType::Number, [1.0, 1.0]),
            ],
        )
        .unwrap();
        let data = HeatmapData {
            x_bucket_size: Some(100.0),
            y_bucket_count: Some(1),
            y_bucket_size: Some(1.0),
            ..HeatmapData::new(frame)
        };
        let bounds = resolve_bucket_min_max(&data, &[100.0, 200.0], &[1.0, 1.0], 1);
        assert_eq!(bounds.x_bucket_min, 100.0);
        assert_eq!(bounds.x_bucket_max, 200.0);
        assert_eq!(bounds.y_bucket_min, 1.0);
        assert_eq!(bounds.y_bucket_max, 2.0);
    }

    #[test]
    fn test_resolve_short_arrays_yield_nan() {
        let data = dense(&[0.0], &[1.0]);
        let bounds = resolve_bucket_min_max(&data, &[0.0], &[1.0], 3);
        assert!(bounds.x_bucket_min.is_nan());
        assert!(bounds.x_bucket_max.is_nan());
        // One y bucket, so row 3 still maps to y[0]; its size cannot be inferred.
        assert_eq!(bounds.y_bucket_min, 1.0);
        assert!(bounds.y_bucket_max.is_nan());
    }

    #[test]
    fn test_resolve_failed_y_size_keeps_other_bounds() {
        let data = HeatmapData {
            x_bucket_size: Some(2.0),
            ..dense(&[7.0], &[1.0])
        };
        let bounds = resolve_bucket_min_max(&data, &[7.0], &[1.0], 0);
        assert_eq!(bounds.x_bucket_min, 5.0);
        assert_eq!(bounds.x_bucket_max, 7.0);
        assert_eq!(bounds.y_bucket_min, 1.0);
        assert!(bounds.y_bucket_max.is_nan());
    }

    #[test]
    fn test_resolve_failed_y_count_keeps_x_bounds() {
        let data = HeatmapData {
            x_bucket_size: Some(10.0),
            y_bucket_count: Some(0),
            ..dense(&[0.0, 10.0], &[1.0, 2.0])
        };
        let bounds = resolve_bucket_min_max(&data, &[0.0, 10.0], &[1.0, 2.0], 1);
        assert_eq!(bounds.x_bucket_min, 0.0);
        assert_eq!(bounds.x_bucket_max, 10.0);
        assert!(bounds.y_bucket_min.is_nan());
        assert!(bounds.y_bucket_max.is_nan());
    }

    #[test]
    fn test_resolve_hidden_bound_is_inferred() {
        let frame = DataFrame::new(
            None,
            vec![
                Field::new("xMin", FieldType::Number, [0.0, 10.0]),
                Field::new("xMax", FieldType::Number, [99.0, 99.0]).hidden_from_tooltip(),
                Field::new("yMin", FieldType::Number, [1.0, 1.0]),
                Field::new("yMax", FieldType::Number, [2.0, 2.0]),
            ],
        )
        .unwrap();
        let data = HeatmapData {
            x_bucket_size: Some(10.0),
            ..HeatmapData::new(frame)
        };
        let bounds = resolve_bucket_min_max(&data, &[40.0, 50.0], &[1.0, 1.0], 1);
        assert_eq!(bounds.x_bucket_max, 50.0);
        assert_eq!(bounds.x_bucket_min, 40.0);
        assert_eq!(bounds.y_bucket_min, 1.0);
        assert_eq!(bounds.y_bucket_max, 2.0);
    }

    #[test]
    fn test_resolve_missing_ymax_overrides_explicit_ymin() {
        let frame = DataFrame::new(
            None,
            vec![
                Field::new("xMin", FieldType::Number, [0.0, 0.0]),
                Field::new("xMax", FieldType::Number, [5.0, 5.0]),
                Field::new("yMin", FieldType::Number, [100.0, 200.0]),
            ],
        )
        .unwrap();
        let data = HeatmapData {
            y_bucket_count: Some(2),
            y_bucket_size: Some(0.5),
            ..HeatmapData::new(frame)
        };
        let bounds = resolve_bucket_min_max(&data, &[0.0, 0.0], &[3.0, 4.0], 1);
        assert_eq!(bounds.x_bucket_min, 0.0);
        assert_eq!(bounds.x_bucket_max, 5.0);
        assert_eq!(bounds.y_bucket_min, 4.0);
        assert_eq!(bounds.y_bucket_max, 4.5);
    }

    #[test]
    fn test_resolve_without_frame_infers_everything() {
        let data = HeatmapData {
            y_bucket_count: Some(2),
            ..Default::default()
        };
        let x = [0.0, 0.0, 10.0, 10.0];
        let y = [1.0, 2.0, 1.0, 2.0];
        let bounds = resolve_bucket_min_max(&data, &x, &y, 3);
        assert_eq!(bounds.x_bucket_min, 0.0);
        assert_eq!(bounds.x_bucket_max, 10.0);
        assert_eq!(bounds.y_bucket_min, 2.0);
        assert_eq!(bounds.y_bucket_max, 3.0);
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let x = [0.0, 0.0, 60.0, 60.0];
        let y = [10.0, 20.0, 10.0, 20.0];
        let data = dense(&x, &y);
        assert_eq!(
            resolve_bucket_min_max(&data, &x, &y, 2),
            resolve_bucket_min_max(&data, &x, &y, 2)
        );
    }
}
