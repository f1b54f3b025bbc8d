// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;
use serde::Deserialize;
use time::UtcOffset;

use crate::format::FormatContext;

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct TooltipConfig {
    #[serde(default)]
    pub log_level: Option<String>,
    /// Offset applied to time axes, in minutes east of UTC.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl TooltipConfig {
    pub fn format_context(&self) -> Result<FormatContext> {
        let seconds = self
            .utc_offset_minutes
            .checked_mul(60)
            .context("utc_offset_minutes is out of range")?;
        let utc_offset = UtcOffset::from_whole_seconds(seconds)
            .with_context(|| format!("invalid utc_offset_minutes: {}", self.utc_offset_minutes))?;
        Ok(FormatContext { utc_offset })
    }
}

/// Loads the YAML config file. A missing file yields the defaults; a file
/// that cannot be read or parsed is an error.
pub fn load_config(path: Option<&Path>) -> Result<TooltipConfig> {
    let Some(path) = path else {
        return Ok(TooltipConfig::default());
    };

    if !path.exists() {
        warn!(
            "Config file not found at {}. Using defaults.",
            path.display()
        );
        return Ok(TooltipConfig::default());
    }

    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if contents.trim().is_empty() {
        return Ok(TooltipConfig::default());
    }
    let config: TooltipConfig =
        serde_yaml::from_str(&contents).with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Unknown levels silently default to Info.
fn parse_log_level(level: &str) -> log::Level {
    match level.to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "info" => log::Level::Info,
        "warn" | "warning" => log::Level::Warn,
        "error" | "critical" => log::Level::Error,
        // log has no level below Error, so "off" logs errors only
        "off" => log::Level::Error,
        _ => log::Level::Info,
    }
}

/// Gets the log level from configuration.
/// Priority: DD_LOG_LEVEL > LOG_LEVEL > config file > default Info
pub fn get_log_level(config: &TooltipConfig) -> log::Level {
    if let Ok(level) = env::var("DD_LOG_LEVEL") {
        return parse_log_level(&level);
    }

    if let Ok(level) = env::var("LOG_LEVEL") {
        return parse_log_level(&level);
    }

    config
        .log_level
        .as_deref()
        .map(parse_log_level)
        .unwrap_or(log::Level::Info)
}
