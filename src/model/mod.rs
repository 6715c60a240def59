// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Domain models and core data structures.
//!
//! This module defines the cassette entity as served by the remote catalog,
//! the catalog mapping itself, and the ordering used when presenting it.

pub(crate) mod mount;

use std::collections::HashMap;

use serde::Deserialize;

/// A named media item served by the cassette server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Cassette {
    pub(crate) uuid: String,
    pub(crate) name: String,
    pub(crate) url: String,
    pub(crate) created_at: String,
    #[serde(default)]
    pub(crate) labels: Vec<String>,
    #[serde(default)]
    pub(crate) image_url: Option<String>,
}

/// The full collection of cassettes keyed by uuid, unordered as received.
pub(crate) type Catalog = HashMap<String, Cassette>;

/// Flattens a catalog into display order.
///
/// Cassettes are ordered by `created_at` descending. The comparison is on the
/// raw timestamp strings, which only holds because the server emits
/// fixed-width ISO-8601 timestamps. Equal timestamps fall back to the uuid so
/// the table does not reshuffle between renders.
pub(crate) fn display_order(catalog: Catalog) -> Vec<Cassette> {
    let mut cassettes: Vec<Cassette> = catalog.into_values().collect();
    cassettes.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.uuid.cmp(&b.uuid))
    });
    cassettes
}

#[cfg(test)]
pub(crate) fn cassette(uuid: &str, name: &str, created_at: &str) -> Cassette {
    Cassette {
        uuid: uuid.to_string(),
        name: name.to_string(),
        url: format!("http://example.com/{}", uuid),
        created_at: created_at.to_string(),
        labels: vec![],
        image_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_order_is_newest_first() {
        let catalog: Catalog = [
            cassette("old", "Old", "2021-01-01T00:00:00Z"),
            cassette("new", "New", "2022-06-01T00:00:00Z"),
            cassette("mid", "Mid", "2021-09-30T12:00:00Z"),
        ]
        .into_iter()
        .map(|c| (c.uuid.clone(), c))
        .collect();

        let names: Vec<String> = display_order(catalog).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["New", "Mid", "Old"]);
    }

    #[test]
    fn display_order_breaks_ties_by_uuid() {
        let catalog: Catalog = [
            cassette("b", "B", "2021-01-01T00:00:00Z"),
            cassette("a", "A", "2021-01-01T00:00:00Z"),
        ]
        .into_iter()
        .map(|c| (c.uuid.clone(), c))
        .collect();

        let uuids: Vec<String> = display_order(catalog).into_iter().map(|c| c.uuid).collect();
        assert_eq!(uuids, vec!["a", "b"]);
    }

    #[test]
    fn optional_fields_default_when_absent() {
        let json = r#"{"uuid":"u","name":"N","url":"http://x","created_at":"2020-01-01T00:00:00Z"}"#;
        let cassette: Cassette = serde_json::from_str(json).unwrap();
        assert!(cassette.labels.is_empty());
        assert_eq!(cassette.image_url, None);
    }
}
