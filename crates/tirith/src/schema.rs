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

/// Survey questions the dashboard consumes, matched exactly against the
/// sheet's header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    ClassStatus,
    ExecutiveInterest,
    Vibe,
    StudySpot,
    FoodSpot,
    FavoriteSong,
    Genre,
    Attendance,
    Excitement,
    EventInterest,
}
impl Question {
    pub const ALL: [Self; 10] = [
        Self::ClassStatus,
        Self::ExecutiveInterest,
        Self::Vibe,
        Self::StudySpot,
        Self::FoodSpot,
        Self::FavoriteSong,
        Self::Genre,
        Self::Attendance,
        Self::Excitement,
        Self::EventInterest,
    ];
    pub const FILTERABLE: [Self; 2] = [Self::ClassStatus, Self::ExecutiveInterest];
    pub fn label(self) -> &'static str {
        match self {
            Self::ClassStatus => "Class Status",
            Self::ExecutiveInterest => {
                "Would you like to be considered for an Executive Board role?"
            }
            Self::Vibe => "Choose the vibe that fits you best",
            Self::StudySpot => "Choose your favorite study area on campus",
            Self::FoodSpot => "Favorite Towson Hangout/Food Spots",
            Self::FavoriteSong => "What's your favorite song (Ex. type N/A if None)",
            Self::Genre => "Favorite Movie/Show Genre?",
            Self::Attendance => "Do you plan to come to our Interest Meeting",
            Self::Excitement => "What excites you most about joining a student organization?",
            Self::EventInterest => {
                "What type of events would you be most excited to plan or participate in?"
            }
        }
    }
    /// Stable short identifier used for query-string and API field names.
    pub fn key(self) -> &'static str {
        match self {
            Self::ClassStatus => "class_status",
            Self::ExecutiveInterest => "executive_interest",
            Self::Vibe => "vibe",
            Self::StudySpot => "study_spot",
            Self::FoodSpot => "food_spot",
            Self::FavoriteSong => "favorite_song",
            Self::Genre => "genre",
            Self::Attendance => "attendance",
            Self::Excitement => "excitement",
            Self::EventInterest => "event_interest",
        }
    }
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|question| question.key() == key)
    }
}
pub const SKILL_COLUMNS: [&str; 6] = [
    "Rate your comfort level with the following skills [Public speaking]",
    "Rate your comfort level with the following skills [Data analysis]",
    "Rate your comfort level with the following skills [Graphic design / social media]",
    "Rate your comfort level with the following skills [Event planning]",
    "Rate your comfort level with the following skills [Budgeting & finances]",
    "Rate your comfort level with the following skills [Coding/ Technical adept]",
];
pub const RATING_MAX: f64 = 5.0;
/// Ordinal comfort scale; answers outside the scale map to `None` and are
/// excluded from means.
pub fn comfort_score(answer: &str) -> Option<f64> {
    match answer.trim() {
        "Not Comfortable" => Some(1.0),
        "Some Comfort" => Some(2.0),
        "Ok" => Some(3.0),
        "Comfortable" => Some(4.0),
        "Very Comfortable" => Some(5.0),
        _ => None,
    }
}
/// Radar axis label: the bracketed fragment of a skill column label, or the
/// whole label when no bracket is present.
pub fn skill_axis_label(column: &str) -> &str {
    match column.rsplit_once('[') {
        Some((_, rest)) => rest.trim_end_matches(']'),
        None => column,
    }
}
