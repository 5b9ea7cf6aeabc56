// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The field boost dominates. A record whose name contains the query outranks
//! one that only matches through its parent, and within a field the token the
//! query covers most completely wins. `Foo` beats `Foobar` for `foo`.

mod core;
pub mod ranking;

pub use self::core::*;
