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

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z']+").expect("token pattern compiles"));
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as", "at",
        "be", "because", "been", "being", "but", "by", "can", "could", "did", "do", "does",
        "doing", "down", "during", "each", "few", "for", "from", "further", "get", "had", "has",
        "have", "having", "he", "her", "here", "hers", "him", "his", "how", "if", "in", "into",
        "is", "it", "its", "just", "like", "me", "more", "most", "my", "no", "nor", "not", "of",
        "off", "on", "once", "only", "or", "other", "our", "out", "over", "own", "so", "some",
        "such", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
        "those", "through", "to", "too", "under", "until", "up", "very", "was", "we", "were",
        "what", "when", "where", "which", "while", "who", "why", "will", "with", "would", "you",
        "your",
    ]
    .into_iter()
    .collect()
});
/// Lowercased alphabetic tokens (two or more letters) with common English
/// stop words removed.
pub fn tokens(input: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(input)
        .map(|token| token.as_str().to_lowercase())
        .filter(|token| !STOP_WORDS.contains(token.as_str()))
        .collect()
}
