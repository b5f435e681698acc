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

use crate::error::{SourceError, SourceResult};
use crate::table::ResponseTable;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
pub const DEFAULT_SHEET_ID: &str = "1EBNzLbmHzFNX82xljJfAiPwb9yCH4E5Y7IZYSoSK6zc";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// CSV export URL of a published Google Sheet.
pub fn sheet_csv_url(sheet_id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{sheet_id}/gviz/tq?tqx=out:csv")
}
/// Fetches survey snapshots from a fixed CSV-over-HTTP endpoint. One GET per
/// cycle; any failure is surfaced to the caller and the cycle aborts. No
/// retries, no caching.
#[derive(Debug, Clone)]
pub struct SheetSource {
    client: Client,
    url: String,
}
impl SheetSource {
    pub fn new(url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            url: url.into(),
        }
    }
    pub fn for_sheet(sheet_id: &str) -> Self {
        Self::new(sheet_csv_url(sheet_id))
    }
    pub fn url(&self) -> &str {
        &self.url
    }
    pub async fn fetch(&self) -> SourceResult<ResponseTable> {
        debug!(url = %self.url, "fetching survey snapshot");
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| SourceError::Request {
                url: self.url.clone(),
                source,
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response
            .text()
            .await
            .map_err(|source| SourceError::Request {
                url: self.url.clone(),
                source,
            })?;
        let table = parse_csv(&body, &self.url)?;
        info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "survey snapshot fetched"
        );
        Ok(table)
    }
}
/// Decodes a CSV document into a snapshot. The first row is the header;
/// empty cells become missing values and short rows are padded to header
/// width.
pub fn parse_csv(data: &str, origin: &str) -> SourceResult<ResponseTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(String::is_empty) {
        return Err(SourceError::MissingHeader);
    }
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<Option<String>> = record
            .iter()
            .map(|cell| {
                if cell.is_empty() {
                    None
                } else {
                    Some(cell.to_string())
                }
            })
            .collect();
        rows.push(row);
    }
    Ok(ResponseTable::new(headers, rows, origin))
}
