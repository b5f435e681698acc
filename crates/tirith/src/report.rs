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

use crate::aggregate;
use crate::charts::Chart;
use crate::error::Result;
use crate::filter::{apply_filters, filter_options, FilterSelection};
use crate::schema::{comfort_score, skill_axis_label, Question, RATING_MAX, SKILL_COLUMNS};
use crate::table::{ResponseTable, SnapshotMeta};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
pub const DASHBOARD_TITLE: &str = "NSDC Interest Dashboard";
pub const DASHBOARD_CAPTION: &str = "A live look at who's joining, their vibes, and what excites them";
pub const EXCITEMENT_EMPTY_MESSAGE: &str = "No responses yet for excitement question.";
const TOP_SPOTS: usize = 5;
const TOP_RANKED: usize = 10;
const SONG_LIST_LEN: usize = 10;
const WORD_CLOUD_WORDS: usize = 200;
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterControl {
    pub question: Question,
    pub prompt: String,
    pub options: Vec<String>,
    pub selected: Vec<String>,
}
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub title: String,
    pub chart: Chart,
}
/// The render tree for one refresh cycle: a pure function of the snapshot
/// and the viewer's selection, consumed by the HTML, JSON and CLI surfaces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub title: String,
    pub caption: String,
    pub generated_at: DateTime<Utc>,
    pub snapshot: SnapshotMeta,
    pub matching_rows: usize,
    pub filters: Vec<FilterControl>,
    pub sections: Vec<Section>,
}
impl Report {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
pub fn build_report(table: &ResponseTable, selection: &FilterSelection) -> Report {
    let view = apply_filters(table, selection);
    let filters = Question::FILTERABLE
        .iter()
        .map(|&question| filter_control(table, selection, question))
        .collect();
    let mut sections: Vec<Section> = Vec::new();
    section_if_present(&mut sections, table, "Community Vibes", Question::Vibe, || {
        Chart::pie(aggregate::value_counts(&view, Question::Vibe.label()))
    });
    section_if_present(&mut sections, table, "Top Study Spots", Question::StudySpot, || {
        Chart::bar(aggregate::top_values(&view, Question::StudySpot.label(), TOP_SPOTS))
    });
    section_if_present(
        &mut sections,
        table,
        "Favorite Food & Hangout Spots",
        Question::FoodSpot,
        || Chart::bar(aggregate::top_values(&view, Question::FoodSpot.label(), TOP_SPOTS)),
    );
    section_if_present(&mut sections, table, "Favorite Songs", Question::FavoriteSong, || {
        Chart::list(aggregate::head_values(
            &view,
            Question::FavoriteSong.label(),
            SONG_LIST_LEN,
        ))
    });
    section_if_present(
        &mut sections,
        table,
        "Favorite Movie/Show Genres",
        Question::Genre,
        || Chart::bar(aggregate::top_values(&view, Question::Genre.label(), TOP_RANKED)),
    );
    section_if_present(&mut sections, table, "Who's Joining", Question::ClassStatus, || {
        Chart::histogram(aggregate::category_counts(&view, Question::ClassStatus.label()))
    });
    let present_skills: Vec<&str> = SKILL_COLUMNS
        .iter()
        .copied()
        .filter(|column| table.has_column(column))
        .collect();
    if present_skills.is_empty() {
        debug!("no skill columns present; radar section skipped");
    } else {
        let means = aggregate::ordinal_means(&view, &present_skills, comfort_score)
            .into_iter()
            .map(|(column, mean)| (skill_axis_label(&column).to_string(), mean))
            .collect();
        sections.push(Section {
            title: "Skill Comfort Levels".to_string(),
            chart: Chart::radar(means, RATING_MAX),
        });
    }
    section_if_present(
        &mut sections,
        table,
        "Interest Meeting Attendance",
        Question::Attendance,
        || Chart::pie(aggregate::value_counts(&view, Question::Attendance.label())),
    );
    section_if_present(
        &mut sections,
        table,
        "What Excites Our Members",
        Question::Excitement,
        || {
            Chart::word_cloud(aggregate::word_frequencies(
                &view,
                Question::Excitement.label(),
                WORD_CLOUD_WORDS,
            ))
            .with_empty_message(EXCITEMENT_EMPTY_MESSAGE)
        },
    );
    section_if_present(
        &mut sections,
        table,
        "Most Anticipated Event Types",
        Question::EventInterest,
        || Chart::bar(aggregate::top_values(&view, Question::EventInterest.label(), TOP_RANKED)),
    );
    let rows: Vec<Vec<Option<String>>> = view
        .iter_indices()
        .filter_map(|row| table.row(row).map(<[Option<String>]>::to_vec))
        .collect();
    sections.push(Section {
        title: "All Responses (Filtered)".to_string(),
        chart: Chart::table(table.column_labels().to_vec(), rows),
    });
    Report {
        title: DASHBOARD_TITLE.to_string(),
        caption: DASHBOARD_CAPTION.to_string(),
        generated_at: Utc::now(),
        snapshot: table.metadata.clone(),
        matching_rows: view.row_count(),
        filters,
        sections,
    }
}
fn section_if_present<F>(
    sections: &mut Vec<Section>,
    table: &ResponseTable,
    title: &str,
    question: Question,
    chart: F,
) where
    F: FnOnce() -> Chart,
{
    if table.has_column(question.label()) {
        sections.push(Section {
            title: title.to_string(),
            chart: chart(),
        });
    } else {
        debug!(column = %question.label(), "column absent; section skipped");
    }
}
fn filter_control(
    table: &ResponseTable,
    selection: &FilterSelection,
    question: Question,
) -> FilterControl {
    let options = filter_options(table, question);
    let selected = match selection.accepted(question) {
        Some(accepted) => {
            let mut selected: Vec<String> = options
                .iter()
                .filter(|option| accepted.contains(*option))
                .cloned()
                .collect();
            // selections no longer present in the data still constrain the
            // view; echo them after the live options in a stable order
            let mut stale: Vec<String> = accepted
                .iter()
                .filter(|value| !options.contains(value))
                .cloned()
                .collect();
            stale.sort();
            selected.extend(stale);
            selected
        }
        None => Vec::new(),
    };
    FilterControl {
        question,
        prompt: filter_prompt(question).to_string(),
        options,
        selected,
    }
}
fn filter_prompt(question: Question) -> &'static str {
    match question {
        Question::ClassStatus => "Class Status",
        Question::ExecutiveInterest => "Exec Role Interest",
        _ => question.label(),
    }
}
