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

pub mod aggregate;
pub mod charts;
pub mod error;
pub mod filter;
pub mod report;
pub mod schema;
pub mod source;
pub mod table;
pub mod text;

pub use charts::Chart;
pub use error::{DashboardError, Result, SourceError};
pub use filter::{apply_filters, filter_options, FilterSelection};
pub use report::{build_report, FilterControl, Report, Section};
pub use schema::Question;
pub use source::SheetSource;
pub use table::{ResponseTable, SnapshotMeta, TableView};

/// Facade over one survey source: a `refresh` is one full cycle of
/// fetch → filter → aggregate → render, with no state carried between
/// cycles beyond the source itself.
pub struct InterestDashboard {
    source: SheetSource,
}
impl InterestDashboard {
    pub fn new() -> Self {
        Self {
            source: SheetSource::for_sheet(source::DEFAULT_SHEET_ID),
        }
    }
    pub fn with_source(source: SheetSource) -> Self {
        Self { source }
    }
    pub fn source(&self) -> &SheetSource {
        &self.source
    }
    pub async fn refresh(&self, selection: &FilterSelection) -> Result<Report> {
        let table = self.source.fetch().await?;
        Ok(build_report(&table, selection))
    }
}
impl Default for InterestDashboard {
    fn default() -> Self {
        Self::new()
    }
}
