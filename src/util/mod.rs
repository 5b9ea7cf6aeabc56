// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Token normalization shared by the index builder and the query engine (the
//! two must agree, or nothing matches), plus the case-insensitive matching and
//! HTML escaping the result renderer needs.

pub mod html;
pub mod normalize;

pub use normalize::{normalize_token, tokenize};
