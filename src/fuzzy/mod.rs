// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! The vocabulary of a documentation index is small (identifiers, not prose),
//! so a bounded DP per vocabulary term is fast enough and keeps wildcard
//! anchoring and edit distance in one routine.

mod levenshtein;

pub use levenshtein::*;
