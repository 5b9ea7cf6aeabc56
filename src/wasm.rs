// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the search widget.
//!
//! The page glue is a thin loop: it turns DOM listeners into event objects,
//! hands them to [`SearchWidgetHandle::dispatch`], and applies the returned
//! effect array. `schedule` effects become `setTimeout` calls that dispatch
//! `{type: "timer", data: task}` when they fire.
//!
//! ```js
//! const widget = new SearchWidgetHandle(JSON.stringify({ base: el.dataset.base }), payloadText);
//! field.addEventListener("focusin", () => apply(widget.dispatch({ type: "focusIn" })));
//! ```

use crate::config::WidgetConfig;
use crate::search::{search, SearchOptions, SearchOutcome};
use crate::source::{parse_payload, DataSource};
use crate::widget::{Event, SearchWidget};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

/// Outcome summary for one ad-hoc search, for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchOutput {
    ids: Vec<u32>,
    stage: Option<crate::search::Stage>,
}

impl From<SearchOutcome> for SearchOutput {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            stage: outcome.stage(),
            ids: outcome.hits.iter().map(|hit| hit.id.get()).collect(),
        }
    }
}

/// A search widget driven from JavaScript.
#[wasm_bindgen]
pub struct SearchWidgetHandle {
    widget: SearchWidget,
}

#[wasm_bindgen]
impl SearchWidgetHandle {
    /// Create a widget from a JSON configuration and the raw payload text.
    ///
    /// A missing payload is not an error here: the widget enters its failure
    /// state on first focus, as it would for a malformed one.
    #[wasm_bindgen(constructor)]
    pub fn new(config: &str, payload: Option<String>) -> Result<SearchWidgetHandle, JsValue> {
        let config = WidgetConfig::from_json(config).map_err(|e| format!("Invalid config: {}", e))?;
        let source = payload.map_or(DataSource::Unavailable, DataSource::Inline);
        Ok(SearchWidgetHandle {
            widget: SearchWidget::new(config, source),
        })
    }

    /// Feed one event object, get back the effects to apply.
    #[wasm_bindgen]
    pub fn dispatch(&mut self, event: JsValue) -> Result<JsValue, JsValue> {
        let event: Event = from_value(event).map_err(|e| format!("Invalid event: {}", e))?;
        let effects = self.widget.dispatch(event);
        to_value(&effects).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current loading state name: `idle`, `loading`, `ready` or `failure`.
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        self.widget.loading_state().as_str().to_string()
    }

    #[wasm_bindgen]
    pub fn query(&self) -> String {
        self.widget.query().to_string()
    }
}

/// Run the two-stage search once over a payload, outside any widget.
///
/// Useful for tooling and for checking a payload without a page.
#[wasm_bindgen(js_name = searchPayload)]
pub fn search_payload(
    payload: &str,
    query: &str,
    config: Option<String>,
) -> Result<JsValue, JsValue> {
    let config = match config {
        Some(json) => WidgetConfig::from_json(&json).map_err(|e| format!("Invalid config: {}", e))?,
        None => WidgetConfig::default(),
    };
    let data = parse_payload(payload).map_err(|e| format!("Invalid payload: {}", e))?;
    let index = crate::index::build_index(data.rows, config.boost);
    let outcome = search(&index, query, SearchOptions::from(&config));
    to_value(&SearchOutput::from(outcome)).map_err(|e| JsValue::from_str(&e.to_string()))
}
