// Unless explicitly stated otherwise all files in this repository are licensed
// under the Apache License Version 2.0.
// This product includes software developed at Datadog (https://www.datadoghq.com/).
// Copyright 2026-present Datadog, Inc.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("field {field} has {actual} values, expected {expected}")]
    FieldLengthMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    #[error("not enough {axis} values to infer {what}: need {needed}, got {actual}")]
    InsufficientData {
        axis: &'static str,
        what: &'static str,
        needed: usize,
        actual: usize,
    },

    #[error("{axis} value at index {index} is not a number")]
    NonNumericValue { axis: &'static str, index: usize },

    #[error("inferred y bucket count is not positive ({x_len} x values, first y repeats at {last_index})")]
    InvalidBucketCount { x_len: usize, last_index: usize },

    #[error("y bucket count must be positive")]
    ZeroBucketCount,
}

pub type Result<T> = std::result::Result<T, Error>;
