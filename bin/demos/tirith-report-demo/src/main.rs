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

//! Builds dashboard reports from a bundled survey export and prints them,
//! first unfiltered and then constrained to underclassmen. Runs entirely
//! offline.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tirith::charts::Chart;
use tirith::report::{build_report, Report};
use tirith::source::parse_csv;
use tirith::{FilterSelection, Question};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let data_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_responses.csv");
    let data = fs::read_to_string(&data_path)
        .with_context(|| format!("failed to read {}", data_path.display()))?;
    let table = parse_csv(&data, &data_path.display().to_string())?;
    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        "sample export loaded"
    );

    let everyone = build_report(&table, &FilterSelection::new());
    println!("== Unfiltered ==");
    print_outline(&everyone);

    let selection = FilterSelection::new()
        .with_accepted(Question::ClassStatus, ["Freshman", "Sophomore"]);
    let underclassmen = build_report(&table, &selection);
    println!(
        "\n== Class Status in {{Freshman, Sophomore}} ({} of {} responses) ==",
        underclassmen.matching_rows, everyone.matching_rows
    );
    print_outline(&underclassmen);

    println!("\n== Filtered report as JSON ==");
    println!("{}", serde_json::to_string_pretty(&underclassmen)?);
    Ok(())
}

fn print_outline(report: &Report) {
    println!("{} | {}", report.title, report.caption);
    for section in &report.sections {
        println!("  {:<30} {}", section.title, describe(&section.chart));
    }
}

fn describe(chart: &Chart) -> String {
    match chart {
        Chart::Pie { slices } => format!("pie, {} slices", slices.len()),
        Chart::Bar { bars } => format!("bar, {} bars", bars.len()),
        Chart::Histogram { bins } => format!("histogram, {} bins", bins.len()),
        Chart::Radar { axes, scale_max } => {
            format!("radar, {} axes out of {scale_max}", axes.len())
        }
        Chart::WordCloud { words, .. } => format!("word cloud, {} words", words.len()),
        Chart::List { values } => format!("list, {} entries", values.len()),
        Chart::Table { rows, .. } => format!("table, {} rows", rows.len()),
        Chart::Empty { message } => format!("empty: {message}"),
    }
}
