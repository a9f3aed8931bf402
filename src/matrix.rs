use fnv::FnvHashMap;

use error::RecommendError;
use stats::{DataDictionary, Renaming};
use types::{DenseVector, Rating};

/// Dense user-by-item rating matrix. Rows are users, columns are tracks, both
/// in dictionary encounter order, and 0.0 marks "not rated". Legal scores
/// start at 1, so the marker never collides with a real rating.
///
/// The matrix is rebuilt from the full snapshot on every request and only
/// lives for the duration of that request.
pub struct RatingMatrix {
    dict: DataDictionary,
    renaming: Renaming,
    rows: Vec<DenseVector>,
}

impl RatingMatrix {

    /// Pivots the rating snapshot into a dense matrix. Duplicate ratings for
    /// the same (user, track) pair resolve last-write-wins by timestamp; on
    /// equal timestamps the later record in the snapshot wins.
    pub fn build(ratings: &[Rating]) -> Result<RatingMatrix, RecommendError> {

        if ratings.is_empty() {
            return Err(RecommendError::EmptyDataset);
        }

        let dict = DataDictionary::from_ratings(ratings);
        let renaming = Renaming::from(&dict);

        let mut rows: Vec<DenseVector> = vec![vec![0.0; dict.num_items()]; dict.num_users()];

        let mut written_at: FnvHashMap<(u32, u32), String> =
            FnvHashMap::with_capacity_and_hasher(ratings.len(), Default::default());

        for rating in ratings {

            let cell = match (dict.user_index(&rating.user_id), dict.item_index(&rating.item_id)) {
                (Some(user), Some(item)) => (user, item),
                // Unreachable, the dictionary was built from the same snapshot
                _ => continue,
            };

            let stale = written_at
                .get(&cell)
                .map_or(false, |seen| rating.timestamp < *seen);

            if stale {
                continue;
            }

            written_at.insert(cell, rating.timestamp.clone());
            rows[cell.0 as usize][cell.1 as usize] = rating.score;
        }

        Ok(RatingMatrix { dict, renaming, rows })
    }

    pub fn num_users(&self) -> usize {
        self.rows.len()
    }

    pub fn num_items(&self) -> usize {
        self.dict.num_items()
    }

    pub fn user_row(&self, user: &str) -> Option<u32> {
        self.dict.user_index(user)
    }

    pub fn item_column(&self, item: &str) -> Option<u32> {
        self.dict.item_index(item)
    }

    pub fn row(&self, user: u32) -> &DenseVector {
        &self.rows[user as usize]
    }

    pub fn score(&self, user: u32, item: u32) -> f64 {
        self.rows[user as usize][item as usize]
    }

    pub fn user_name(&self, user: u32) -> &str {
        self.renaming.user_name(user)
    }

    pub fn item_name(&self, item: u32) -> &str {
        self.renaming.item_name(item)
    }
}
