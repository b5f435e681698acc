// SPDX-License-Identifier: AGPL-3.0-only
use std::net::SocketAddr;
use std::time::Duration;
use tirith::source::{sheet_csv_url, DEFAULT_SHEET_ID};

pub const DEFAULT_REFRESH_SECS: u64 = 10;

/// Runtime settings, resolved once at startup. Defaults reproduce the
/// zero-configuration behaviour of the dashboard; `TIRITH_*` variables
/// override them.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub http_addr: SocketAddr,
    pub sheet_url: String,
    pub refresh: Duration,
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        let http_addr: SocketAddr = std::env::var("TIRITH_HTTP_ADDR")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8080)));
        let sheet_url = std::env::var("TIRITH_SHEET_URL").unwrap_or_else(|_| {
            let sheet_id =
                std::env::var("TIRITH_SHEET_ID").unwrap_or_else(|_| DEFAULT_SHEET_ID.into());
            sheet_csv_url(&sheet_id)
        });
        let refresh_secs: u64 = std::env::var("TIRITH_REFRESH_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_REFRESH_SECS);
        Self {
            http_addr,
            sheet_url,
            refresh: Duration::from_secs(refresh_secs),
        }
    }
}
