// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: where the rubber meets the road.
//!
//! Everything culminates here. The index is built, the query is parsed, now
//! you actually find things. The two-stage strategy (substring → fuzzy) gives
//! users precise results when they type correctly and still catches the typo
//! when they don't.

mod evaluate;
pub mod tiered;

pub use evaluate::*;
pub use tiered::*;
