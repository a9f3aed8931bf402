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

use std::error::Error;
use std::fmt;

/// Expected cold-start conditions of the recommendation pipeline. All three
/// are control-flow signals for the caller, not crashes: a fresh installation
/// runs into every one of them before enough ratings exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecommendError {
    /// The rating snapshot contains no records at all.
    EmptyDataset,
    /// The target user has no row in the matrix, i.e. no ratings yet.
    UnknownUser(String),
    /// Fewer than two distinct users in the snapshot, so there is nobody
    /// to compare the target against. Carries the number of users found.
    InsufficientUsers(usize),
}

impl fmt::Display for RecommendError {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RecommendError::EmptyDataset => {
                write!(formatter, "no ratings in the dataset yet")
            },
            RecommendError::UnknownUser(ref user) => {
                write!(formatter, "user '{}' has not rated anything yet", user)
            },
            RecommendError::InsufficientUsers(found) => {
                write!(formatter, "need ratings from at least 2 users, found {}", found)
            },
        }
    }
}

impl Error for RecommendError {}
