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

use tirith::aggregate::{
    category_counts, head_values, ordinal_means, top_values, value_counts, word_frequencies,
};
use tirith::filter::{apply_filters, FilterSelection};
use tirith::schema::{comfort_score, Question};
use tirith::table::ResponseTable;

fn cell(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn create_single_column_table(label: &str, values: Vec<Option<String>>) -> ResponseTable {
    let rows = values.into_iter().map(|value| vec![value]).collect();
    ResponseTable::new(vec![label.to_string()], rows, "test")
}

#[test]
fn test_value_counts_descending() {
    let table = create_single_column_table(
        "Spot",
        vec![
            cell("Library"),
            cell("Union"),
            cell("Library"),
            cell("Library"),
            cell("Union"),
            cell("Cafe"),
        ],
    );
    let counts = value_counts(&table.view(), "Spot");
    assert_eq!(
        counts,
        vec![
            ("Library".to_string(), 3),
            ("Union".to_string(), 2),
            ("Cafe".to_string(), 1),
        ]
    );
}

#[test]
fn test_value_counts_ties_keep_first_seen_order() {
    let table = create_single_column_table(
        "Spot",
        vec![cell("Union"), cell("Library"), cell("Library"), cell("Union")],
    );
    let counts = value_counts(&table.view(), "Spot");
    assert_eq!(
        counts,
        vec![("Union".to_string(), 2), ("Library".to_string(), 2)]
    );
}

#[test]
fn test_value_counts_skip_missing_cells() {
    let table = create_single_column_table(
        "Spot",
        vec![cell("Library"), None, cell("Library"), None],
    );
    let counts = value_counts(&table.view(), "Spot");
    assert_eq!(counts, vec![("Library".to_string(), 2)]);
    let total: usize = counts.iter().map(|(_, count)| count).sum();
    assert_eq!(total, 2);
}

#[test]
fn test_value_counts_absent_column_is_empty() {
    let table = create_single_column_table("Spot", vec![cell("Library")]);
    assert!(value_counts(&table.view(), "Genre").is_empty());
}

#[test]
fn test_top_values_truncates_without_reordering() {
    let table = create_single_column_table(
        "Spot",
        vec![
            cell("Library"),
            cell("Union"),
            cell("Library"),
            cell("Cafe"),
            cell("Union"),
            cell("Library"),
            cell("Lounge"),
        ],
    );
    let full = value_counts(&table.view(), "Spot");
    let top = top_values(&table.view(), "Spot", 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top, full[..2].to_vec());
}

#[test]
fn test_top_values_with_fewer_distinct_than_limit() {
    let table = create_single_column_table("Spot", vec![cell("Library"), cell("Union")]);
    let top = top_values(&table.view(), "Spot", 5);
    assert_eq!(top.len(), 2);
}

#[test]
fn test_category_counts_stay_in_first_encountered_order() {
    let table = create_single_column_table(
        "Class",
        vec![cell("Senior"), cell("Junior"), cell("Senior"), None],
    );
    let counts = category_counts(&table.view(), "Class");
    assert_eq!(
        counts,
        vec![("Senior".to_string(), 2), ("Junior".to_string(), 1)]
    );
}

#[test]
fn test_category_counts_are_never_resorted_by_count() {
    let table = create_single_column_table(
        "Class",
        vec![
            cell("Freshman"),
            cell("Junior"),
            cell("Junior"),
            cell("Senior"),
            cell("Junior"),
        ],
    );
    let counts = category_counts(&table.view(), "Class");
    assert_eq!(
        counts,
        vec![
            ("Freshman".to_string(), 1),
            ("Junior".to_string(), 3),
            ("Senior".to_string(), 1),
        ]
    );
}

#[test]
fn test_ordinal_means_average_mappable_answers() {
    let table = create_single_column_table(
        "Skill",
        vec![
            cell("Comfortable"),
            cell("Very Comfortable"),
            cell("no idea"),
            None,
        ],
    );
    let means = ordinal_means(&table.view(), &["Skill"], comfort_score);
    assert_eq!(means.len(), 1);
    assert_eq!(means[0].0, "Skill");
    assert_eq!(means[0].1, Some(4.5));
}

#[test]
fn test_ordinal_means_with_no_mappable_answers_are_undefined() {
    let table = create_single_column_table(
        "Skill",
        vec![cell("no idea"), cell("whatever"), None],
    );
    let means = ordinal_means(&table.view(), &["Skill"], comfort_score);
    assert_eq!(means[0].1, None);
}

#[test]
fn test_ordinal_means_absent_column_is_undefined() {
    let table = create_single_column_table("Skill", vec![cell("Ok")]);
    let means = ordinal_means(&table.view(), &["Skill", "Other"], comfort_score);
    assert_eq!(means[0].1, Some(3.0));
    assert_eq!(means[1], ("Other".to_string(), None));
}

#[test]
fn test_category_counts_over_a_filtered_view() {
    let table = create_single_column_table(
        Question::ClassStatus.label(),
        vec![cell("Freshman"), cell("Freshman"), cell("Senior")],
    );
    let selection = FilterSelection::new().with_accepted(Question::ClassStatus, ["Senior"]);
    let view = apply_filters(&table, &selection);
    assert_eq!(view.row_count(), 1);
    let counts = category_counts(&view, Question::ClassStatus.label());
    assert_eq!(counts, vec![("Senior".to_string(), 1)]);
}

#[test]
fn test_head_values_take_first_present_in_order() {
    let table = create_single_column_table(
        "Song",
        vec![cell("Vienna"), None, cell("Dreams"), cell("Espresso"), cell("Golden Hour")],
    );
    let head = head_values(&table.view(), "Song", 3);
    assert_eq!(head, vec!["Vienna", "Dreams", "Espresso"]);
}

#[test]
fn test_word_frequencies_lowercase_and_drop_stop_words() {
    let table = create_single_column_table(
        "Excitement",
        vec![
            cell("Meeting new people and FOOD"),
            cell("food trucks and meeting friends"),
        ],
    );
    let words = word_frequencies(&table.view(), "Excitement", 10);
    assert_eq!(words[0], ("meeting".to_string(), 2));
    assert!(words.contains(&("food".to_string(), 2)));
    assert!(words.iter().all(|(word, _)| word != "and"));
}

#[test]
fn test_word_frequencies_respect_limit() {
    let table = create_single_column_table(
        "Excitement",
        vec![cell("alpha beta gamma delta epsilon")],
    );
    let words = word_frequencies(&table.view(), "Excitement", 3);
    assert_eq!(words.len(), 3);
}
