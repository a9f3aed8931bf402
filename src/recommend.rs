use std::cmp::Ordering;

use fnv::FnvHashMap;

use error::RecommendError;
use matrix::RatingMatrix;
use types::{Candidate, Neighbor};

/// Aggregates the neighbors' ratings into a ranked candidate list. Every
/// track a neighbor rated that the target has not accumulates the neighbor's
/// score; the sum (not the average) is deliberate, so a track liked by
/// several neighbors outranks one liked strongly by a single neighbor.
///
/// Returns at most `top_n` candidates, highest aggregate first, ties broken
/// by column index. An empty result is the normal "nothing new to recommend"
/// outcome, not an error.
pub fn aggregate(
    matrix: &RatingMatrix,
    target_user: &str,
    neighbors: &[Neighbor],
    top_n: usize,
) -> Result<Vec<Candidate>, RecommendError> {

    let target = matrix
        .user_row(target_user)
        .ok_or_else(|| RecommendError::UnknownUser(target_user.to_string()))?;

    let target_row = matrix.row(target);

    let mut aggregates: FnvHashMap<u32, f64> =
        FnvHashMap::with_capacity_and_hasher(matrix.num_items(), Default::default());

    for neighbor in neighbors {

        let neighbor_row = matrix.row(neighbor.user);

        for (item, &score) in neighbor_row.iter().enumerate() {
            if score > 0.0 && target_row[item] == 0.0 {
                *aggregates.entry(item as u32).or_insert(0.0) += score;
            }
        }
    }

    let mut ranked: Vec<(u32, f64)> = aggregates.into_iter().collect();

    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    ranked.truncate(top_n);

    let candidates = ranked
        .into_iter()
        .map(|(item, score)| {
            Candidate {
                item: matrix.item_name(item).to_string(),
                score,
            }
        })
        .collect();

    Ok(candidates)
}

#[cfg(test)]
mod tests {

    use matrix::RatingMatrix;
    use neighbors;
    use recommend;
    use types::Rating;

    fn rating(user: &str, item: &str, score: f64) -> Rating {
        Rating::new(user, item, score, "")
    }

    #[test]
    fn scores_from_several_neighbors_sum_up() {

        // Both neighbors rated Clocks, the target did not: 5 + 3 = 8
        let ratings = vec![
            rating("U1", "Yellow", 5.0),
            rating("U2", "Yellow", 5.0),
            rating("U2", "Clocks", 5.0),
            rating("U3", "Yellow", 4.0),
            rating("U3", "Clocks", 3.0),
        ];

        let matrix = RatingMatrix::build(&ratings).unwrap();
        let found = neighbors::nearest(&matrix, "U1", 2).unwrap();

        let candidates = recommend::aggregate(&matrix, "U1", &found, 5).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].item, "Clocks");
        assert_eq!(candidates[0].score, 8.0);
    }

    #[test]
    fn never_recommends_a_track_the_target_already_rated() {

        let ratings = vec![
            rating("U1", "Yellow", 5.0),
            rating("U1", "Clocks", 2.0),
            rating("U2", "Yellow", 5.0),
            rating("U2", "Clocks", 9.0),
            rating("U2", "Paradise", 7.0),
        ];

        let matrix = RatingMatrix::build(&ratings).unwrap();
        let found = neighbors::nearest(&matrix, "U1", 1).unwrap();

        let candidates = recommend::aggregate(&matrix, "U1", &found, 5).unwrap();

        assert!(candidates.iter().all(|candidate| candidate.item != "Yellow"));
        assert!(candidates.iter().all(|candidate| candidate.item != "Clocks"));
        assert_eq!(candidates[0].item, "Paradise");
    }

    #[test]
    fn fully_covered_target_gets_no_candidates() {

        let ratings = vec![
            rating("U1", "Yellow", 5.0),
            rating("U1", "Clocks", 6.0),
            rating("U2", "Yellow", 5.0),
            rating("U2", "Clocks", 4.0),
        ];

        let matrix = RatingMatrix::build(&ratings).unwrap();
        let found = neighbors::nearest(&matrix, "U1", 1).unwrap();

        let candidates = recommend::aggregate(&matrix, "U1", &found, 5).unwrap();

        assert!(candidates.is_empty());
    }

    #[test]
    fn ranks_by_aggregate_score_and_truncates() {

        let ratings = vec![
            rating("U1", "Yellow", 5.0),
            rating("U2", "Yellow", 5.0),
            rating("U2", "Clocks", 3.0),
            rating("U2", "Paradise", 9.0),
            rating("U2", "Sparks", 6.0),
        ];

        let matrix = RatingMatrix::build(&ratings).unwrap();
        let found = neighbors::nearest(&matrix, "U1", 1).unwrap();

        let candidates = recommend::aggregate(&matrix, "U1", &found, 2).unwrap();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].item, "Paradise");
        assert_eq!(candidates[0].score, 9.0);
        assert_eq!(candidates[1].item, "Sparks");
        assert_eq!(candidates[1].score, 6.0);
    }

    #[test]
    fn neighbor_order_does_not_change_the_ranking() {

        let ratings = vec![
            rating("U1", "Yellow", 5.0),
            rating("U2", "Yellow", 5.0),
            rating("U2", "Clocks", 5.0),
            rating("U3", "Yellow", 4.0),
            rating("U3", "Clocks", 3.0),
        ];

        let matrix = RatingMatrix::build(&ratings).unwrap();

        let mut found = neighbors::nearest(&matrix, "U1", 2).unwrap();
        let forward = recommend::aggregate(&matrix, "U1", &found, 5).unwrap();

        found.reverse();
        let backward = recommend::aggregate(&matrix, "U1", &found, 5).unwrap();

        assert_eq!(forward, backward);
    }
}
