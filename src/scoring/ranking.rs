// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.

use crate::search::Hit;
use std::cmp::Ordering;

/// Compare two hits for ranking.
///
/// Sort order:
/// 1. **Score** - higher wins
/// 2. **Record id** - ascending, so equal scores keep payload order
///
/// Scores are finite (boosts are validated), so `total_cmp` agrees with the
/// numeric order.
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}
