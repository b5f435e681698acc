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

use crate::schema::Question;
use crate::table::{ResponseTable, TableView};
use itertools::Itertools;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
/// Accepted values per filterable question. An absent entry or an empty set
/// leaves that question unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    accepted: HashMap<Question, HashSet<String>>,
}
impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_accepted<I, S>(mut self, question: Question, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_accepted(question, values);
        self
    }
    pub fn set_accepted<I, S>(&mut self, question: Question, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let accepted: HashSet<String> = values.into_iter().map(Into::into).collect();
        if accepted.is_empty() {
            self.accepted.remove(&question);
        } else {
            self.accepted.insert(question, accepted);
        }
    }
    pub fn accepted(&self, question: Question) -> Option<&HashSet<String>> {
        self.accepted.get(&question)
    }
    pub fn is_unconstrained(&self) -> bool {
        self.accepted.is_empty()
    }
    /// True when the row satisfies every constrained question: disjunction
    /// within a question's accepted set, conjunction across questions. Rows
    /// with a missing cell never match a constrained question; a constrained
    /// question whose column is absent from the snapshot constrains nothing.
    pub fn matches(&self, table: &ResponseTable, row: usize) -> bool {
        self.accepted.iter().all(|(question, accepted)| {
            if !table.has_column(question.label()) {
                return true;
            }
            table
                .value(row, question.label())
                .map_or(false, |value| accepted.contains(value))
        })
    }
}
/// Rows surviving the selection, in snapshot order. The snapshot itself is
/// never mutated.
pub fn apply_filters<'a>(table: &'a ResponseTable, selection: &FilterSelection) -> TableView<'a> {
    if selection.is_unconstrained() {
        return table.view();
    }
    let indices: Vec<usize> = (0..table.row_count())
        .into_par_iter()
        .filter(|&row| selection.matches(table, row))
        .collect();
    TableView::with_indices(table, indices)
}
/// Distinct present values of a filterable question in the unfiltered
/// snapshot, first-encountered order. Options never depend on the other
/// filters' current state.
pub fn filter_options(table: &ResponseTable, question: Question) -> Vec<String> {
    let view = table.view();
    match view.column_values(question.label()) {
        Some(values) => values.flatten().unique().map(str::to_string).collect(),
        None => Vec::new(),
    }
}
