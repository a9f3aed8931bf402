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
use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::stdout;
use std::path::Path;

use csv;

use types::{Candidate, Rating, Recommendation};

/// Reads a headered ratings CSV with the columns
/// `user_id,track_name,rating,timestamp`. A missing timestamp column
/// deserializes as the empty string, which orders before any real timestamp.
pub fn read_ratings(path: &str) -> Result<Vec<Rating>, Box<dyn Error>> {

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;

    let mut ratings = Vec::new();

    for record in reader.deserialize() {
        let rating: Rating = record?;
        ratings.push(rating);
    }

    Ok(ratings)
}

/// Struct used for JSON serialization of a recommendation outcome. Field
/// names will be used in JSON; `reason` only appears for empty outcomes.
#[derive(Serialize)]
struct RecommendationOutput<'a> {
    for_user: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    recommendations: &'a [Candidate],
}

/// Output a recommendation outcome in JSON format. If an `output_path` is
/// supplied, we write to a file at the specified path, otherwise we output
/// to stdout.
pub fn write_outcome(
    user: &str,
    outcome: &Recommendation,
    output_path: Option<String>,
) -> io::Result<()> {

    let mut out: Box<dyn Write> = match output_path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout()),
    };

    let (reason, recommendations): (Option<&'static str>, &[Candidate]) = match *outcome {
        Recommendation::Ranked(ref candidates) => (None, candidates),
        Recommendation::Empty(ref reason) => (Some(reason.code()), &[]),
    };

    let outcome_as_json = json!(
        RecommendationOutput {
            for_user: user,
            reason,
            recommendations,
        });

    write!(out, "{}\n", outcome_as_json.to_string())?;

    Ok(())
}
