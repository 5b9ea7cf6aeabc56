// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental search for generated documentation sites.
//!
//! The crate drives the search box of a doc site: it builds a text index from
//! the site's search payload in small batches, answers every keystroke with a
//! two-stage query (substring first, one-typo fuzzy only when that finds
//! nothing), and renders highlighted result rows. The widget itself is a
//! state machine; the host page feeds it events and applies its effects.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌──────────────┐   ┌────────────┐
//! │ source.rs  │──▶│  index/    │──▶│   search/    │──▶│ render.rs  │
//! │ (payload)  │   │ (batched   │   │ (*term* then │   │ (<li> rows │
//! │            │   │  builder)  │   │  *term~1*)   │   │  + <b>)    │
//! └────────────┘   └────────────┘   └──────────────┘   └────────────┘
//!        ▲                ▲                 ▲                 │
//!        └────────────────┴──── widget/ ────┴─────────────────┘
//!                     (events in, effects out)
//! ```
//!
//! # Usage
//!
//! ```
//! use docsift::{build_index, search, BoostOptions, SearchOptions};
//! use docsift::testing::foo_bar_data;
//!
//! let index = build_index(foo_bar_data().rows, BoostOptions::default());
//! let outcome = search(&index, "foo", SearchOptions::default());
//! assert_eq!(outcome.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod query;
pub mod render;
pub mod scoring;
pub mod search;
pub mod source;
pub mod testing;
pub mod types;
pub mod util;
pub mod widget;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{BoostOptions, WidgetConfig};
pub use error::{ConfigError, SourceError};
pub use fuzzy::{levenshtein_within, match_distance, Anchor};
pub use index::{build_index, BatchedBuild, BuildStep, Index, IndexBuilder};
pub use query::{Clause, Query};
pub use render::{render_record, render_results, RenderedResult};
pub use search::{evaluate, search, Hit, SearchOptions, SearchOutcome, Stage};
pub use source::{parse_payload, DataSource};
pub use types::{Record, RecordId, SearchData};
pub use widget::{Effect, Event, Key, KeyStroke, LoadingState, SearchWidget, Task};
