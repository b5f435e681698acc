// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use crate::table::TableView;
use crate::text;
use indexmap::IndexMap;
/// Counts of distinct present values, descending by count; ties keep
/// first-encountered view order. Missing cells never contribute. An absent
/// column yields no counts rather than an error.
pub fn value_counts(view: &TableView<'_>, label: &str) -> Vec<(String, usize)> {
    let values = match view.column_values(label) {
        Some(values) => values,
        None => return Vec::new(),
    };
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values.flatten() {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    rank(counts)
}
/// `value_counts` truncated to the first `limit` entries; truncation only,
/// never re-ordering.
pub fn top_values(view: &TableView<'_>, label: &str, limit: usize) -> Vec<(String, usize)> {
    let mut ranked = value_counts(view, label);
    ranked.truncate(limit);
    ranked
}
/// Counts over the full set of distinct values in first-encountered order,
/// for histogram-style sections.
pub fn category_counts(view: &TableView<'_>, label: &str) -> Vec<(String, usize)> {
    let values = match view.column_values(label) {
        Some(values) => values,
        None => return Vec::new(),
    };
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values.flatten() {
        *counts.entry(value.to_string()).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}
/// Arithmetic mean of mappable ordinal answers per column. Cells the scale
/// does not map are excluded from numerator and denominator; zero mappable
/// cells (or an absent column) is undefined, never 0.
pub fn ordinal_means<F>(
    view: &TableView<'_>,
    columns: &[&str],
    scale: F,
) -> Vec<(String, Option<f64>)>
where
    F: Fn(&str) -> Option<f64>,
{
    columns
        .iter()
        .map(|column| {
            let mean = view.column_values(column).and_then(|values| {
                let mut sum = 0.0;
                let mut mapped = 0usize;
                for value in values.flatten() {
                    if let Some(score) = scale(value) {
                        sum += score;
                        mapped += 1;
                    }
                }
                if mapped == 0 {
                    None
                } else {
                    Some(sum / mapped as f64)
                }
            });
            ((*column).to_string(), mean)
        })
        .collect()
}
/// First `limit` present values in view order.
pub fn head_values(view: &TableView<'_>, label: &str, limit: usize) -> Vec<String> {
    match view.column_values(label) {
        Some(values) => values
            .flatten()
            .take(limit)
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
/// Token counts over all present cells of a free-text column, ranked like
/// `value_counts` and truncated to `limit`.
pub fn word_frequencies(view: &TableView<'_>, label: &str, limit: usize) -> Vec<(String, usize)> {
    let values = match view.column_values(label) {
        Some(values) => values,
        None => return Vec::new(),
    };
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for cell in values.flatten() {
        for token in text::tokens(cell) {
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    let mut ranked = rank(counts);
    ranked.truncate(limit);
    ranked
}
fn rank(counts: IndexMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    // stable sort preserves insertion order between equal counts
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}
