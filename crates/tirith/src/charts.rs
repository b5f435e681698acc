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

use serde::{Deserialize, Serialize};
pub const DEFAULT_EMPTY_MESSAGE: &str = "No responses yet.";
pub const WORD_CLOUD_WIDTH: u32 = 800;
pub const WORD_CLOUD_HEIGHT: u32 = 400;
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub percent: f64,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryBar {
    pub label: String,
    pub count: usize,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RadarAxis {
    pub label: String,
    pub mean: f64,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WordWeight {
    pub word: String,
    pub weight: usize,
}
/// Pure description of one chart; surfaces decide how to draw it. Every
/// constructor degrades to `Empty` when handed no data, so sections never
/// need a fallible render path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Chart {
    Pie { slices: Vec<PieSlice> },
    Bar { bars: Vec<CategoryBar> },
    Histogram { bins: Vec<CategoryBar> },
    Radar { axes: Vec<RadarAxis>, scale_max: f64 },
    WordCloud { words: Vec<WordWeight>, width: u32, height: u32 },
    List { values: Vec<String> },
    Table { columns: Vec<String>, rows: Vec<Vec<Option<String>>> },
    Empty { message: String },
}
impl Chart {
    /// Slices in the order handed in (descending counts), each annotated
    /// with its share of the total.
    pub fn pie(counts: Vec<(String, usize)>) -> Self {
        let total: usize = counts.iter().map(|(_, count)| count).sum();
        if total == 0 {
            return Self::no_data();
        }
        let slices = counts
            .into_iter()
            .map(|(label, count)| PieSlice {
                label,
                count,
                percent: 100.0 * count as f64 / total as f64,
            })
            .collect();
        Self::Pie { slices }
    }
    pub fn bar(counts: Vec<(String, usize)>) -> Self {
        if counts.is_empty() {
            return Self::no_data();
        }
        let bars = counts
            .into_iter()
            .map(|(label, count)| CategoryBar { label, count })
            .collect();
        Self::Bar { bars }
    }
    /// Category bins in first-encountered order across the full value set.
    pub fn histogram(counts: Vec<(String, usize)>) -> Self {
        if counts.is_empty() {
            return Self::no_data();
        }
        let bins = counts
            .into_iter()
            .map(|(label, count)| CategoryBar { label, count })
            .collect();
        Self::Histogram { bins }
    }
    /// Axes with undefined means are omitted; a radar with no defined axis
    /// degrades to the empty state.
    pub fn radar(means: Vec<(String, Option<f64>)>, scale_max: f64) -> Self {
        let axes: Vec<RadarAxis> = means
            .into_iter()
            .filter_map(|(label, mean)| mean.map(|mean| RadarAxis { label, mean }))
            .collect();
        if axes.is_empty() {
            return Self::no_data();
        }
        Self::Radar { axes, scale_max }
    }
    pub fn word_cloud(words: Vec<(String, usize)>) -> Self {
        if words.is_empty() {
            return Self::no_data();
        }
        let words = words
            .into_iter()
            .map(|(word, weight)| WordWeight { word, weight })
            .collect();
        Self::WordCloud {
            words,
            width: WORD_CLOUD_WIDTH,
            height: WORD_CLOUD_HEIGHT,
        }
    }
    pub fn list(values: Vec<String>) -> Self {
        if values.is_empty() {
            return Self::no_data();
        }
        Self::List { values }
    }
    pub fn table(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        if rows.is_empty() {
            return Self::no_data();
        }
        Self::Table { columns, rows }
    }
    pub fn no_data() -> Self {
        Self::Empty {
            message: DEFAULT_EMPTY_MESSAGE.to_string(),
        }
    }
    /// Replaces the message of an empty state; charts with data pass through.
    pub fn with_empty_message(self, message: &str) -> Self {
        match self {
            Self::Empty { .. } => Self::Empty {
                message: message.to_string(),
            },
            chart => chart,
        }
    }
    pub fn is_empty_state(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_percentages_cover_the_total() {
        let chart = Chart::pie(vec![("A".to_string(), 3), ("B".to_string(), 1)]);
        let Chart::Pie { slices } = chart else {
            panic!("expected a pie");
        };
        assert_eq!(slices[0].percent, 75.0);
        assert_eq!(slices[1].percent, 25.0);
        let total: f64 = slices.iter().map(|slice| slice.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_pie_without_counts_degrades_to_empty() {
        let chart = Chart::pie(Vec::new());
        assert!(chart.is_empty_state());
    }

    #[test]
    fn test_radar_drops_undefined_axes() {
        let chart = Chart::radar(
            vec![
                ("Public speaking".to_string(), Some(4.0)),
                ("Budgeting".to_string(), None),
            ],
            5.0,
        );
        let Chart::Radar { axes, scale_max } = chart else {
            panic!("expected a radar");
        };
        assert_eq!(axes.len(), 1);
        assert_eq!(axes[0].label, "Public speaking");
        assert_eq!(scale_max, 5.0);
    }

    #[test]
    fn test_radar_with_no_defined_axis_is_empty() {
        let chart = Chart::radar(vec![("Public speaking".to_string(), None)], 5.0);
        assert!(chart.is_empty_state());
    }

    #[test]
    fn test_table_without_rows_is_empty() {
        let chart = Chart::table(vec!["A".to_string()], Vec::new());
        assert!(chart.is_empty_state());
    }

    #[test]
    fn test_with_empty_message_replaces_only_empty_states() {
        let empty = Chart::no_data().with_empty_message("nothing here");
        assert_eq!(
            empty,
            Chart::Empty {
                message: "nothing here".to_string()
            }
        );
        let list = Chart::list(vec!["a".to_string()]).with_empty_message("nothing here");
        assert!(!list.is_empty_state());
    }
}
