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

use tirith::charts::Chart;
use tirith::report::{build_report, EXCITEMENT_EMPTY_MESSAGE};
use tirith::schema::{Question, SKILL_COLUMNS};
use tirith::table::ResponseTable;
use tirith::FilterSelection;

const SECTION_TITLES: [&str; 11] = [
    "Community Vibes",
    "Top Study Spots",
    "Favorite Food & Hangout Spots",
    "Favorite Songs",
    "Favorite Movie/Show Genres",
    "Who's Joining",
    "Skill Comfort Levels",
    "Interest Meeting Attendance",
    "What Excites Our Members",
    "Most Anticipated Event Types",
    "All Responses (Filtered)",
];

fn full_columns() -> Vec<String> {
    let mut columns: Vec<String> = vec![
        Question::ClassStatus.label().to_string(),
        Question::ExecutiveInterest.label().to_string(),
        Question::Vibe.label().to_string(),
        Question::StudySpot.label().to_string(),
        Question::FoodSpot.label().to_string(),
        Question::FavoriteSong.label().to_string(),
        Question::Genre.label().to_string(),
    ];
    columns.extend(SKILL_COLUMNS.iter().map(|column| (*column).to_string()));
    columns.push(Question::Attendance.label().to_string());
    columns.push(Question::Excitement.label().to_string());
    columns.push(Question::EventInterest.label().to_string());
    columns
}

fn row(cells: [&str; 16]) -> Vec<Option<String>> {
    cells
        .iter()
        .map(|cell| (!cell.is_empty()).then(|| (*cell).to_string()))
        .collect()
}

fn create_test_table() -> ResponseTable {
    let rows = vec![
        row([
            "Freshman",
            "Yes",
            "Chill & Social",
            "Cook Library",
            "Chick-fil-A",
            "Golden Hour",
            "Comedy",
            "Some Comfort",
            "Ok",
            "Comfortable",
            "Very Comfortable",
            "Ok",
            "Some Comfort",
            "Yes!",
            "Meeting new people",
            "Game nights",
        ]),
        row([
            "Sophomore",
            "No",
            "Focused & Driven",
            "Science Complex",
            "Panda Express",
            "N/A",
            "Action",
            "Comfortable",
            "Very Comfortable",
            "Some Comfort",
            "Ok",
            "Comfortable",
            "Very Comfortable",
            "Yes!",
            "Building new projects",
            "Workshops",
        ]),
        row([
            "Junior",
            "Maybe",
            "Creative & Artsy",
            "Cook Library",
            "The Den",
            "Vienna",
            "Drama",
            "Ok",
            "",
            "Very Comfortable",
            "Comfortable",
            "Not Comfortable",
            "Ok",
            "Maybe",
            "A creative outlet",
            "Open mic nights",
        ]),
        row([
            "Freshman",
            "No",
            "Chill & Social",
            "Union Lounge",
            "Chipotle",
            "",
            "Comedy",
            "Not Comfortable",
            "Ok",
            "Ok",
            "Some Comfort",
            "",
            "Comfortable",
            "Yes!",
            "Finding a community",
            "Game nights",
        ]),
    ];
    ResponseTable::new(full_columns(), rows, "test")
}

#[test]
fn test_sections_follow_the_fixed_order() {
    let report = build_report(&create_test_table(), &FilterSelection::new());
    let titles: Vec<&str> = report
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert_eq!(titles, SECTION_TITLES);
}

#[test]
fn test_absent_column_skips_its_section() {
    let columns: Vec<String> = full_columns()
        .into_iter()
        .filter(|column| column != Question::Genre.label())
        .collect();
    let table = ResponseTable::new(columns, Vec::new(), "test");
    let report = build_report(&table, &FilterSelection::new());
    let titles: Vec<&str> = report
        .sections
        .iter()
        .map(|section| section.title.as_str())
        .collect();
    assert!(!titles.contains(&"Favorite Movie/Show Genres"));
    assert!(titles.contains(&"Community Vibes"));
    assert!(titles.contains(&"All Responses (Filtered)"));
}

#[test]
fn test_radar_section_skipped_without_skill_columns() {
    let columns = vec![Question::Vibe.label().to_string()];
    let table = ResponseTable::new(columns, Vec::new(), "test");
    let report = build_report(&table, &FilterSelection::new());
    assert!(report
        .sections
        .iter()
        .all(|section| section.title != "Skill Comfort Levels"));
}

#[test]
fn test_excitement_section_uses_its_own_empty_message() {
    let columns = vec![Question::Excitement.label().to_string()];
    let rows = vec![vec![None], vec![None]];
    let table = ResponseTable::new(columns, rows, "test");
    let report = build_report(&table, &FilterSelection::new());
    let section = report
        .sections
        .iter()
        .find(|section| section.title == "What Excites Our Members")
        .unwrap();
    assert_eq!(
        section.chart,
        Chart::Empty {
            message: EXCITEMENT_EMPTY_MESSAGE.to_string()
        }
    );
}

#[test]
fn test_filter_controls_echo_the_selection() {
    let table = create_test_table();
    let selection = FilterSelection::new().with_accepted(Question::ClassStatus, ["Junior"]);
    let report = build_report(&table, &selection);
    let control = report
        .filters
        .iter()
        .find(|control| control.question == Question::ClassStatus)
        .unwrap();
    assert_eq!(control.selected, vec!["Junior"]);
    assert_eq!(control.prompt, "Class Status");
}

#[test]
fn test_filter_options_ignore_the_active_selection() {
    let table = create_test_table();
    let selection = FilterSelection::new().with_accepted(Question::ClassStatus, ["Freshman"]);
    let report = build_report(&table, &selection);
    let control = report
        .filters
        .iter()
        .find(|control| control.question == Question::ClassStatus)
        .unwrap();
    assert_eq!(control.options, vec!["Freshman", "Sophomore", "Junior"]);
}

#[test]
fn test_stale_selected_values_trail_the_live_ones() {
    let table = create_test_table();
    let selection =
        FilterSelection::new().with_accepted(Question::ClassStatus, ["Alumni", "Freshman"]);
    let report = build_report(&table, &selection);
    let control = report
        .filters
        .iter()
        .find(|control| control.question == Question::ClassStatus)
        .unwrap();
    assert_eq!(control.selected, vec!["Freshman", "Alumni"]);
}

#[test]
fn test_sections_reflect_the_filtered_view() {
    let table = create_test_table();
    let selection = FilterSelection::new().with_accepted(Question::ClassStatus, ["Freshman"]);
    let report = build_report(&table, &selection);
    assert_eq!(report.matching_rows, 2);
    assert_eq!(report.snapshot.row_count, 4);
    let raw = report
        .sections
        .iter()
        .find(|section| section.title == "All Responses (Filtered)")
        .unwrap();
    let Chart::Table { rows, columns } = &raw.chart else {
        panic!("expected the raw table");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(columns.len(), 16);
    let vibes = report
        .sections
        .iter()
        .find(|section| section.title == "Community Vibes")
        .unwrap();
    let Chart::Pie { slices } = &vibes.chart else {
        panic!("expected a pie");
    };
    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].label, "Chill & Social");
    assert_eq!(slices[0].count, 2);
}

#[test]
fn test_report_serialises_with_tagged_charts() {
    let report = build_report(&create_test_table(), &FilterSelection::new());
    let json = report.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "NSDC Interest Dashboard");
    assert_eq!(value["sections"][0]["chart"]["kind"], "pie");
    assert_eq!(value["matching_rows"], 4);
}
