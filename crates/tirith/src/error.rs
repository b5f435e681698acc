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

use thiserror::Error;
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Source '{url}' answered HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("Malformed CSV in sheet export: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },
    #[error("Sheet export has no header row")]
    MissingHeader,
}
impl SourceError {
    pub fn user_message(&self) -> &'static str {
        "Live survey data is unavailable right now. The dashboard will retry on the next refresh."
    }
}
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Survey data unavailable: {0}")]
    DataUnavailable(#[from] SourceError),
    #[error("Report serialisation failed: {source}")]
    Serialisation {
        #[from]
        source: serde_json::Error,
    },
}
pub type SourceResult<T> = std::result::Result<T, SourceError>;
pub type Result<T> = std::result::Result<T, DashboardError>;
