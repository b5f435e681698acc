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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotId(String);
impl SnapshotId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
impl Default for SnapshotId {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl AsRef<str> for SnapshotId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SnapshotMeta {
    pub id: SnapshotId,
    pub origin: String,
    pub fetched_at: DateTime<Utc>,
    pub row_count: usize,
    pub column_count: usize,
}
/// One fetched survey snapshot: ordered column labels plus row-major cells.
/// Empty cells are `None`; the table is immutable once constructed.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Option<String>>>,
    pub metadata: SnapshotMeta,
}
impl ResponseTable {
    pub fn new(
        columns: Vec<String>,
        mut rows: Vec<Vec<Option<String>>>,
        origin: impl Into<String>,
    ) -> Self {
        let width = columns.len();
        for row in &mut rows {
            // rows are normalised to header width
            row.resize(width, None);
        }
        let mut index = HashMap::with_capacity(width);
        for (position, label) in columns.iter().enumerate() {
            // first occurrence wins for duplicate labels
            index.entry(label.clone()).or_insert(position);
        }
        let metadata = SnapshotMeta {
            id: SnapshotId::new(),
            origin: origin.into(),
            fetched_at: Utc::now(),
            row_count: rows.len(),
            column_count: width,
        };
        Self {
            columns,
            index,
            rows,
            metadata,
        }
    }
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
    pub fn column_labels(&self) -> &[String] {
        &self.columns
    }
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }
    pub fn has_column(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }
    pub fn value(&self, row: usize, label: &str) -> Option<&str> {
        let column = self.column_index(label)?;
        self.cell(row, column)
    }
    pub fn row(&self, row: usize) -> Option<&[Option<String>]> {
        self.rows.get(row).map(Vec::as_slice)
    }
    pub fn view(&self) -> TableView<'_> {
        TableView {
            table: self,
            row_indices: None,
        }
    }
}
/// Non-owning row-index subset of a snapshot. `None` indices means all rows.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    table: &'a ResponseTable,
    row_indices: Option<Arc<[usize]>>,
}
impl<'a> TableView<'a> {
    pub fn with_indices(table: &'a ResponseTable, indices: Vec<usize>) -> Self {
        Self {
            table,
            row_indices: Some(indices.into()),
        }
    }
    pub fn table(&self) -> &'a ResponseTable {
        self.table
    }
    pub fn row_count(&self) -> usize {
        self.row_indices
            .as_ref()
            .map_or(self.table.row_count(), |indices| indices.len())
    }
    /// Absolute row index of the view's nth row.
    pub fn row_index(&self, nth: usize) -> Option<usize> {
        match &self.row_indices {
            Some(indices) => indices.get(nth).copied(),
            None => (nth < self.table.row_count()).then_some(nth),
        }
    }
    pub fn iter_indices(&self) -> ViewRows<'a, '_> {
        ViewRows { view: self, nth: 0 }
    }
    /// Per-row cells of one column, in view order; `None` when the snapshot
    /// lacks the column.
    pub fn column_values(&self, label: &str) -> Option<ColumnValues<'a, '_>> {
        let column = self.table.column_index(label)?;
        Some(ColumnValues {
            view: self,
            column,
            nth: 0,
        })
    }
}
pub struct ViewRows<'a, 'b> {
    view: &'b TableView<'a>,
    nth: usize,
}
impl Iterator for ViewRows<'_, '_> {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.view.row_index(self.nth)?;
        self.nth += 1;
        Some(row)
    }
}
pub struct ColumnValues<'a, 'b> {
    view: &'b TableView<'a>,
    column: usize,
    nth: usize,
}
impl<'a> Iterator for ColumnValues<'a, '_> {
    type Item = Option<&'a str>;
    fn next(&mut self) -> Option<Self::Item> {
        let row = self.view.row_index(self.nth)?;
        self.nth += 1;
        Some(self.view.table.cell(row, self.column))
    }
}
