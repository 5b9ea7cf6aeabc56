// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Only two things can go wrong: the embedded payload is missing or broken, or
//! the host hands over a bad widget configuration. Payload errors never leave
//! the widget; they become the `Failure` loading state. Config errors surface
//! at construction time, before there is a widget to fail.

use crate::types::RecordId;
use thiserror::Error;

/// The search payload could not be obtained or understood.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Neither a resident payload nor an inline reference was supplied.
    #[error("no search data available: payload is neither resident nor referenced inline")]
    Missing,

    /// The inline payload is not valid search data.
    #[error("malformed search data: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two rows share an id, so results could not be resolved unambiguously.
    #[error("duplicate record id {0} in search data")]
    DuplicateId(RecordId),
}

/// The widget configuration is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration JSON could not be parsed.
    #[error("invalid widget configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric option that must be positive was zero.
    #[error("widget option `{option}` must be greater than zero")]
    Zero {
        /// Name of the offending option.
        option: &'static str,
    },

    /// A boost was negative or not a finite number.
    #[error("boost for field `{field}` must be a finite, non-negative number (got {value})")]
    InvalidBoost {
        /// Field the boost applies to.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
