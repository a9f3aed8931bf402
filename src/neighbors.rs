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

use std::cmp::Ordering;

use error::RecommendError;
use matrix::RatingMatrix;
use types::Neighbor;

/// Cosine distance (1 - cosine similarity) between two full rating rows,
/// zeros included. Users who co-rate the same tracks similarly end up close,
/// regardless of how many tracks each has rated overall.
pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let norms = norm_a.sqrt() * norm_b.sqrt();

    if norms == 0.0 {
        1.0
    } else {
        1.0 - dot / norms
    }
}

/// Finds the `k` users closest to `target_user`, nearest first, never
/// including the target itself. `k` is clamped to the number of other users
/// in the matrix, so a large `k` simply returns everyone else.
///
/// This is a brute-force scan over all rows, O(users x items) per request.
/// Intentional at the current scale of tens of users; an approximate index
/// would trade exactness for capacity we do not need yet.
pub fn nearest(
    matrix: &RatingMatrix,
    target_user: &str,
    k: usize,
) -> Result<Vec<Neighbor>, RecommendError> {

    let target = matrix
        .user_row(target_user)
        .ok_or_else(|| RecommendError::UnknownUser(target_user.to_string()))?;

    let num_users = matrix.num_users();

    if num_users < 2 {
        return Err(RecommendError::InsufficientUsers(num_users));
    }

    let target_row = matrix.row(target);

    let mut neighbors: Vec<Neighbor> = (0..num_users as u32)
        .filter(|user| *user != target)
        .map(|user| {
            Neighbor {
                user,
                distance: cosine_distance(target_row, matrix.row(user)),
            }
        })
        .collect();

    // Equal distances break ties by row index, which keeps repeated calls
    // on the same matrix stable
    neighbors.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.user.cmp(&b.user))
    });

    neighbors.truncate(k.min(num_users - 1));

    Ok(neighbors)
}

#[cfg(test)]
mod tests {

    use error::RecommendError;
    use matrix::RatingMatrix;
    use neighbors;
    use types::Rating;

    fn rating(user: &str, item: &str, score: f64) -> Rating {
        Rating::new(user, item, score, "")
    }

    #[test]
    fn cosine_distance_is_symmetric() {

        let a = vec![5.0, 0.0, 3.0, 1.0];
        let b = vec![4.0, 2.0, 0.0, 1.0];

        let ab = neighbors::cosine_distance(&a, &b);
        let ba = neighbors::cosine_distance(&b, &a);

        assert_eq!(ab, ba);
    }

    #[test]
    fn identical_rows_are_at_distance_zero() {

        let a = vec![5.0, 4.0, 0.0];

        assert!(neighbors::cosine_distance(&a, &a).abs() < 1e-12);
    }

    #[test]
    fn finds_the_co_rating_user_first() {

        // U1 and U2 agree on Yellow, U3 listens to something else entirely
        let ratings = vec![
            rating("U1", "Yellow", 5.0),
            rating("U2", "Yellow", 5.0),
            rating("U2", "Clocks", 4.0),
            rating("U3", "Paradise", 9.0),
        ];

        let matrix = RatingMatrix::build(&ratings).unwrap();
        let found = neighbors::nearest(&matrix, "U1", 1).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(matrix.user_name(found[0].user), "U2");
    }

    #[test]
    fn never_returns_the_target_and_clamps_k() {

        let ratings = vec![
            rating("U1", "Yellow", 5.0),
            rating("U2", "Yellow", 4.0),
            rating("U3", "Clocks", 3.0),
        ];

        let matrix = RatingMatrix::build(&ratings).unwrap();
        let target = matrix.user_row("U1").unwrap();

        let found = neighbors::nearest(&matrix, "U1", 10).unwrap();

        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|neighbor| neighbor.user != target));
    }

    #[test]
    fn single_user_snapshot_has_no_neighbors() {

        let ratings = vec![rating("U1", "Yellow", 5.0)];

        let matrix = RatingMatrix::build(&ratings).unwrap();
        let result = neighbors::nearest(&matrix, "U1", 3);

        assert_eq!(result.err(), Some(RecommendError::InsufficientUsers(1)));
    }

    #[test]
    fn unrated_target_is_unknown() {

        let ratings = vec![
            rating("U1", "Yellow", 5.0),
            rating("U2", "Clocks", 4.0),
        ];

        let matrix = RatingMatrix::build(&ratings).unwrap();
        let result = neighbors::nearest(&matrix, "U9", 3);

        assert_eq!(
            result.err(),
            Some(RecommendError::UnknownUser("U9".to_string()))
        );
    }

    #[test]
    fn neighbor_order_is_stable_across_calls() {

        let ratings = vec![
            rating("U1", "Yellow", 5.0),
            rating("U2", "Yellow", 5.0),
            rating("U3", "Yellow", 5.0),
        ];

        let matrix = RatingMatrix::build(&ratings).unwrap();

        let first = neighbors::nearest(&matrix, "U1", 2).unwrap();
        let second = neighbors::nearest(&matrix, "U1", 2).unwrap();

        assert_eq!(first, second);
    }
}
