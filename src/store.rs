use std::error::Error;

use io;
use types::Rating;

/// Capability the engine needs from the surrounding system: a full snapshot
/// of all rating records. The engine never mutates the store; persistence,
/// edits and deletes are the collaborator's business. Implementations hand
/// out a fresh value per call, so concurrent requests never share state.
pub trait RatingStore {
    fn snapshot(&self) -> Result<Vec<Rating>, Box<dyn Error>>;
}

/// Rating store backed by a headered CSV file with the columns
/// `user_id,track_name,rating,timestamp`.
pub struct CsvRatingStore {
    path: String,
}

impl CsvRatingStore {

    pub fn new(path: &str) -> CsvRatingStore {
        CsvRatingStore { path: path.to_string() }
    }
}

impl RatingStore for CsvRatingStore {

    fn snapshot(&self) -> Result<Vec<Rating>, Box<dyn Error>> {
        io::read_ratings(&self.path)
    }
}

/// In-memory store for programmatic use and as a test double.
pub struct InMemoryRatingStore {
    ratings: Vec<Rating>,
}

impl InMemoryRatingStore {

    pub fn new(ratings: Vec<Rating>) -> InMemoryRatingStore {
        InMemoryRatingStore { ratings }
    }
}

impl RatingStore for InMemoryRatingStore {

    fn snapshot(&self) -> Result<Vec<Rating>, Box<dyn Error>> {
        Ok(self.ratings.clone())
    }
}
