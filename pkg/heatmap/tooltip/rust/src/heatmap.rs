// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use serde::{Deserialize, Serialize};

use crate::frame::DataFrame;
use crate::layout::Layout;

/// Palette assignment computed by the heatmap transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatmapColors {
    pub palette: Vec<String>,
    /// Palette index per row, `None` for cells that are not coloured.
    #[serde(default)]
    pub values: Vec<Option<usize>>,
}

/// Precomputed heatmap view. Known bucket counts and sizes take precedence
/// over anything inferred from the frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapData {
    #[serde(default)]
    pub heatmap: Option<DataFrame>,
    /// Unset when the producer did not tag the frame.
    #[serde(default)]
    pub layout: Option<Layout>,
    #[serde(default)]
    pub x_bucket_count: Option<usize>,
    #[serde(default)]
    pub y_bucket_count: Option<usize>,
    #[serde(default)]
    pub x_bucket_size: Option<f64>,
    #[serde(default)]
    pub y_bucket_size: Option<f64>,
    #[serde(default)]
    pub heatmap_colors: Option<HeatmapColors>,
}

impl HeatmapData {
    pub fn new(heatmap: DataFrame) -> Self {
        HeatmapData {
            heatmap: Some(heatmap),
            ..Default::default()
        }
    }

    /// The tagged layout, or the one detected from the frame's field names.
    pub fn layout(&self) -> Layout {
        match (self.layout, &self.heatmap) {
            (Some(layout), _) => layout,
            (None, Some(frame)) => Layout::detect(frame),
            (None, None) => Layout::Dense,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverCellColor<'a> {
    pub cell_color: Option<&'a str>,
    pub color_palette: &'a [String],
}

/// Colour of the cell at `row`, with the palette it was drawn from.
pub fn hover_cell_color(data: &HeatmapData, row: usize) -> HoverCellColor<'_> {
    let Some(colors) = &data.heatmap_colors else {
        return HoverCellColor {
            cell_color: None,
            color_palette: &[],
        };
    };

    let cell_color = colors
        .values
        .get(row)
        .copied()
        .flatten()
        .and_then(|idx| colors.palette.get(idx))
        .map(String::as_str);

    HoverCellColor {
        cell_color,
        color_palette: &colors.palette,
    }
}
