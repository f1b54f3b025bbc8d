// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dd_heatmap_tooltip::config::{get_log_level, load_config};
use dd_heatmap_tooltip::{HeatmapData, build_tooltip};
use log::debug;

#[derive(Parser, Debug)]
#[command(name = "heatmap-tooltip")]
#[command(about = "Shows the tooltip of one heatmap cell from a heatmap JSON dump", long_about = None)]
struct Args {
    /// Path to the heatmap JSON (frame, known bucket sizes, colors)
    #[arg(short, long)]
    data: PathBuf,

    /// Row of the hovered cell
    #[arg(short, long)]
    row: usize,

    /// Index of the hovered field
    #[arg(short, long)]
    column: Option<usize>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_heatmap(path: &Path) -> Result<HeatmapData> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let mut data: HeatmapData =
        serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
    data.heatmap = data.heatmap.map(|frame| frame.with_config_display());
    Ok(data)
}

#[allow(clippy::print_stdout)]
fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    let log_level = get_log_level(&config);
    simple_logger::init_with_level(log_level)?;
    debug!("Log level set to: {:?}", log_level);

    let ctx = config.format_context()?;
    let data = load_heatmap(&args.data)?;
    debug!(
        "Loaded heatmap with {} rows ({} layout)",
        data.heatmap.as_ref().map_or(0, |f| f.length()),
        data.layout()
    );

    let tooltip = build_tooltip(&data, args.row, args.column, &ctx)
        .ok_or_else(|| anyhow!("no tooltip data for row {}", args.row))?;

    println!("{}", serde_json::to_string_pretty(&tooltip)?);
    Ok(())
}
