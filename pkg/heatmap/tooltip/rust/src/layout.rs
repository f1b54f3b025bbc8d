// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::frame::{DataFrame, Field};

/// Field names shared with the producers of heatmap frames.
pub mod names {
    pub const X: &str = "x";
    pub const X_MIN: &str = "xMin";
    pub const X_MAX: &str = "xMax";
    pub const Y: &str = "y";
    pub const Y_MIN: &str = "yMin";
    pub const Y_MAX: &str = "yMax";
    pub const COUNT: &str = "count";
    pub const X_LAYOUT: &str = "xLayout";
    pub const Y_LAYOUT: &str = "yLayout";
    pub const TRACE_ID: &str = "traceID";
}

/// How a heatmap frame encodes its buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Bucket boundaries are named columns (`xMin`, `xMax`, `yMin`, `yMax`).
    Sparse,
    /// x, y and count live at positions 0, 1 and 2; sizes are inferred.
    Dense,
}

impl Layout {
    /// Infers the layout from field names, for producers that do not tag
    /// their frames.
    ///
    /// A frame is sparse when it carries both bounds of one axis, or an
    /// explicit `xLayout`/`yLayout` column.
    pub fn detect(frame: &DataFrame) -> Layout {
        let has = |name: &str| frame.fields().iter().any(|f| f.name == name);
        let both_x = has(names::X_MIN) && has(names::X_MAX);
        let both_y = has(names::Y_MIN) && has(names::Y_MAX);
        if both_x || both_y || has(names::X_LAYOUT) || has(names::Y_LAYOUT) {
            Layout::Sparse
        } else {
            Layout::Dense
        }
    }

    pub fn is_sparse(self) -> bool {
        self == Layout::Sparse
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Sparse => write!(f, "sparse"),
            Layout::Dense => write!(f, "dense"),
        }
    }
}

/// The part a column plays in a heatmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    X,
    Y,
    Count,
}

impl FieldRole {
    fn sparse_names(self) -> &'static [&'static str] {
        match self {
            FieldRole::X => &[names::X, names::X_MIN, names::X_MAX],
            FieldRole::Y => &[names::Y, names::Y_MIN, names::Y_MAX],
            FieldRole::Count => &[names::COUNT],
        }
    }

    fn dense_position(self) -> usize {
        match self {
            FieldRole::X => 0,
            FieldRole::Y => 1,
            FieldRole::Count => 2,
        }
    }
}

/// Returns the column filling `role`.
///
/// Sparse frames are searched by name and the first field in frame order
/// whose name matches wins; dense frames are read by position.
pub fn select_field(frame: &DataFrame, role: FieldRole, layout: Layout) -> Option<&Field> {
    match layout {
        Layout::Sparse => {
            let wanted = role.sparse_names();
            frame
                .fields()
                .iter()
                .find(|f| wanted.contains(&f.name.as_str()))
        }
        Layout::Dense => frame.field(role.dense_position()),
    }
}
