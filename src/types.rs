/**
 * MusicMate
 * Copyright (C) 2026 MusicMate developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

pub type DenseVector = Vec<f64>;

/// A single rating record as supplied by the rating store. Scores range from
/// 1 to 10, so 0 stays free to act as the "unrated" marker in the matrix.
/// Timestamps use the store's `%Y-%m-%d %H:%M:%S` format, which makes their
/// lexicographic order their chronological order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub user_id: String,
    #[serde(rename = "track_name")]
    pub item_id: String,
    #[serde(rename = "rating")]
    pub score: f64,
    #[serde(default)]
    pub timestamp: String,
}

impl Rating {
    pub fn new(user_id: &str, item_id: &str, score: f64, timestamp: &str) -> Rating {
        Rating {
            user_id: user_id.to_string(),
            item_id: item_id.to_string(),
            score,
            timestamp: timestamp.to_string(),
        }
    }
}

/// A user similar to the target, identified by its row in the rating matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub user: u32,
    pub distance: f64,
}

/// A ranked recommendation: an item the target user has not rated yet, scored
/// by the summed ratings of the target's neighbors.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Candidate {
    pub item: String,
    pub score: f64,
}

/// Why a recommendation request produced an empty list. These are normal
/// cold-start outcomes, not failures, and each carries a stable code so that
/// the presentation layer can pick a dedicated message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    NoRatingsForUser,
    InsufficientUsers,
    NoNewItems,
}

impl EmptyReason {
    pub fn code(&self) -> &'static str {
        match *self {
            EmptyReason::NoRatingsForUser => "no_ratings_for_user",
            EmptyReason::InsufficientUsers => "insufficient_users",
            EmptyReason::NoNewItems => "no_new_items",
        }
    }
}

/// Outcome of a full recommendation request.
#[derive(Clone, Debug, PartialEq)]
pub enum Recommendation {
    Ranked(Vec<Candidate>),
    Empty(EmptyReason),
}
