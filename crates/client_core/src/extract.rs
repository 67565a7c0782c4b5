//! Response-shape sniffing.
//!
//! Both the user list and the total count are located by walking a fixed,
//! ordered table of named strategies. The order is part of the contract: list
//! strategies stop at the first match, total sources overwrite one another in
//! table order so the last present source wins.

use serde_json::Value;
use shared::{
    domain::UserRecord,
    loose::{is_truthy, parse_numeric_text, present, to_number},
    protocol::{RawUsersResponse, UsersPage},
};

pub struct ListStrategy {
    pub name: &'static str,
    pub pick: fn(&Value) -> Option<&Vec<Value>>,
}

pub const LIST_STRATEGIES: &[ListStrategy] = &[
    ListStrategy {
        name: "bare_array",
        pick: bare_array,
    },
    ListStrategy {
        name: "users",
        pick: users_key,
    },
    ListStrategy {
        name: "data",
        pick: data_key,
    },
    ListStrategy {
        name: "results",
        pick: results_key,
    },
    ListStrategy {
        name: "items",
        pick: items_key,
    },
    ListStrategy {
        name: "first_array_value",
        pick: first_array_value,
    },
];

fn bare_array(body: &Value) -> Option<&Vec<Value>> {
    body.as_array()
}

fn users_key(body: &Value) -> Option<&Vec<Value>> {
    body.get("users").and_then(Value::as_array)
}

fn data_key(body: &Value) -> Option<&Vec<Value>> {
    body.get("data").and_then(Value::as_array)
}

fn results_key(body: &Value) -> Option<&Vec<Value>> {
    body.get("results").and_then(Value::as_array)
}

fn items_key(body: &Value) -> Option<&Vec<Value>> {
    body.get("items").and_then(Value::as_array)
}

// Array-index keys come first in ascending order, then the rest in document
// order (needs serde_json's `preserve_order`).
fn first_array_value(body: &Value) -> Option<&Vec<Value>> {
    let object = body.as_object()?;
    let mut indexed: Vec<(u32, &Value)> = object
        .iter()
        .filter_map(|(key, value)| array_index(key).map(|index| (index, value)))
        .collect();
    indexed.sort_unstable_by_key(|(index, _)| *index);

    indexed
        .into_iter()
        .map(|(_, value)| value)
        .chain(
            object
                .iter()
                .filter(|(key, _)| array_index(key).is_none())
                .map(|(_, value)| value),
        )
        .find_map(Value::as_array)
}

/// Canonical decimal form of an index below `u32::MAX`; `"01"` and `"-1"` are plain keys.
fn array_index(key: &str) -> Option<u32> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    key.parse::<u32>().ok().filter(|index| *index != u32::MAX)
}

/// Returns the name of the strategy that matched alongside the records.
pub fn extract_users(body: &Value) -> (Option<&'static str>, Vec<UserRecord>) {
    for strategy in LIST_STRATEGIES {
        if let Some(list) = (strategy.pick)(body) {
            let users = list.iter().cloned().map(UserRecord::from).collect();
            return (Some(strategy.name), users);
        }
    }
    (None, Vec::new())
}

pub struct TotalSource {
    pub name: &'static str,
    /// `Some` overwrites the running total, `None` leaves it untouched.
    pub read: fn(&RawUsersResponse, Option<f64>, u32) -> Option<f64>,
}

pub const TOTAL_SOURCES: &[TotalSource] = &[
    TotalSource {
        name: "x_total_count_header",
        read: header_total,
    },
    TotalSource {
        name: "total",
        read: body_total,
    },
    TotalSource {
        name: "totalCount",
        read: body_total_count,
    },
    TotalSource {
        name: "count",
        read: body_count,
    },
    TotalSource {
        name: "meta",
        read: meta_total,
    },
    TotalSource {
        name: "totalPages",
        read: derived_from_total_pages,
    },
];

fn header_total(raw: &RawUsersResponse, _running: Option<f64>, _page_size: u32) -> Option<f64> {
    raw.total_header
        .as_deref()
        .filter(|header| !header.is_empty())
        .map(parse_numeric_text)
}

fn body_total(raw: &RawUsersResponse, _running: Option<f64>, _page_size: u32) -> Option<f64> {
    present(&raw.body, "total").map(to_number)
}

fn body_total_count(
    raw: &RawUsersResponse,
    _running: Option<f64>,
    _page_size: u32,
) -> Option<f64> {
    present(&raw.body, "totalCount").map(to_number)
}

fn body_count(raw: &RawUsersResponse, _running: Option<f64>, _page_size: u32) -> Option<f64> {
    present(&raw.body, "count").map(to_number)
}

fn meta_total(raw: &RawUsersResponse, _running: Option<f64>, _page_size: u32) -> Option<f64> {
    let meta = raw.body.get("meta").filter(|meta| is_truthy(meta))?;
    if present(meta, "total").is_none() && present(meta, "totalCount").is_none() {
        return None;
    }
    // A falsy `meta.total` falls through to `meta.totalCount`, even when that key is absent.
    let chosen = meta
        .get("total")
        .filter(|total| is_truthy(total))
        .or_else(|| meta.get("totalCount"));
    Some(chosen.map_or(f64::NAN, to_number))
}

// Only consulted when nothing before it produced a truthy total. A legitimate
// zero from an earlier source is therefore replaced by the page-count estimate.
fn derived_from_total_pages(
    raw: &RawUsersResponse,
    running: Option<f64>,
    page_size: u32,
) -> Option<f64> {
    let unset = running.map_or(true, |total| total == 0.0 || total.is_nan());
    if !unset {
        return None;
    }
    present(&raw.body, "totalPages").map(|pages| to_number(pages) * f64::from(page_size))
}

pub fn extract_total(raw: &RawUsersResponse, page_size: u32) -> Option<u64> {
    let mut running = None;
    for source in TOTAL_SOURCES {
        if let Some(total) = (source.read)(raw, running, page_size) {
            tracing::trace!(source = source.name, total, "total source present");
            running = Some(total);
        }
    }
    running.filter(|total| total.is_finite()).map(whole_count)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_count(total: f64) -> u64 {
    total.max(0.0).ceil() as u64
}

pub fn normalize(raw: &RawUsersResponse, page_size: u32) -> UsersPage {
    let (strategy, users) = extract_users(&raw.body);
    let total = extract_total(raw, page_size);
    tracing::debug!(
        strategy = strategy.unwrap_or("none"),
        users = users.len(),
        ?total,
        "normalized users response"
    );
    UsersPage { users, total }
}

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
