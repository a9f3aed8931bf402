extern crate csv;
extern crate fnv;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate serde_json;

pub mod error;
pub mod io;
pub mod matrix;
pub mod neighbors;
pub mod recommend;
pub mod stats;
pub mod store;
pub mod types;


use error::RecommendError;
use matrix::RatingMatrix;
use types::{EmptyReason, Rating, Recommendation};

/// Runs the full pipeline for one user: pivot the snapshot into a rating
/// matrix, find the nearest neighbors, aggregate their ratings into a ranked
/// list. Everything is recomputed from the snapshot on every call and no
/// state survives the request.
///
/// An empty snapshot is the only hard failure. The two other cold-start
/// conditions, a target without ratings and a snapshot with a single user,
/// come back as `Recommendation::Empty` with a reason code, since the caller
/// is expected to show a message for them rather than fail.
pub fn recommendations_for(
    ratings: &[Rating],
    user: &str,
    num_neighbors: usize,
    top_n: usize,
) -> Result<Recommendation, RecommendError> {

    let matrix = RatingMatrix::build(ratings)?;

    let found = match neighbors::nearest(&matrix, user, num_neighbors) {
        Ok(found) => found,
        Err(RecommendError::UnknownUser(_)) => {
            return Ok(Recommendation::Empty(EmptyReason::NoRatingsForUser))
        },
        Err(RecommendError::InsufficientUsers(_)) => {
            return Ok(Recommendation::Empty(EmptyReason::InsufficientUsers))
        },
        Err(other) => return Err(other),
    };

    let candidates = recommend::aggregate(&matrix, user, &found, top_n)?;

    if candidates.is_empty() {
        Ok(Recommendation::Empty(EmptyReason::NoNewItems))
    } else {
        Ok(Recommendation::Ranked(candidates))
    }
}
