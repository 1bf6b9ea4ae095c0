//! Distance scorers.
//!
//! Each scorer assigns a candidate a scalar cost for the move; lower wins.
//! Both formulas only use differences between coordinates, so translating
//! the origin and the candidate together never changes a score.

use padnav_types::{Axis, Direction, NavigationConfig, NavigationMode, Rectangle};
use tracing::trace;

use crate::rect::{Candidate, FocusableItem};

/// A point in screen space.
pub type Point = (f64, f64);

/// Closest pair of points between `origin` and `candidate` for a move in
/// `direction`, returned as `(exit, entry)`.
///
/// Along the movement axis the exit point sits on the origin's leading edge
/// and the entry point on the candidate's trailing edge; when the rectangles
/// already overlap on that axis the two coincide. Across the movement axis
/// both points share the origin's center clamped into the common span when
/// the spans intersect, otherwise they sit on the facing edges.
pub fn entry_exit_points(origin: &Rectangle, candidate: &Rectangle, direction: Direction) -> (Point, Point) {
    let exit_primary = origin.leading_edge(direction);
    let entry_primary = if primary_gap(origin, candidate, direction) > 0.0 {
        candidate.trailing_edge(direction)
    } else {
        exit_primary
    };

    let perpendicular = direction.perpendicular();
    let (exit_secondary, entry_secondary) = if origin.spans_intersect(candidate, perpendicular) {
        let low = origin.start(perpendicular).max(candidate.start(perpendicular));
        let high = origin.end(perpendicular).min(candidate.end(perpendicular));
        let shared = origin.center(perpendicular).clamp(low, high);
        (shared, shared)
    } else if candidate.start(perpendicular) > origin.end(perpendicular) {
        (origin.end(perpendicular), candidate.start(perpendicular))
    } else {
        (origin.start(perpendicular), candidate.end(perpendicular))
    };

    match direction.axis() {
        Axis::Horizontal => ((exit_primary, exit_secondary), (entry_primary, entry_secondary)),
        Axis::Vertical => ((exit_secondary, exit_primary), (entry_secondary, entry_primary)),
    }
}

/// Signed gap between the origin's leading edge and the candidate's trailing
/// edge, positive when the candidate lies strictly ahead.
pub fn primary_gap(origin: &Rectangle, candidate: &Rectangle, direction: Direction) -> f64 {
    (candidate.trailing_edge(direction) - origin.leading_edge(direction)) * direction.sign()
}

/// Length of the shared span across the movement axis.
pub fn perpendicular_overlap(origin: &Rectangle, candidate: &Rectangle, direction: Direction) -> f64 {
    origin.overlap(candidate, direction.perpendicular())
}

/// Geometric cost:
/// `euclidean(exit, entry) + orthogonal_offset * orthogonal_weight - alignment`.
///
/// The orthogonal weight is `orthogonal_weight_lr` for horizontal moves and
/// `orthogonal_weight_ud` for vertical ones. `alignment` is the shared
/// perpendicular span as a fraction (0 to 1) of the smaller rectangle. The
/// result is not clamped.
pub fn score_geometric(origin: &Rectangle, candidate: &Rectangle, direction: Direction, config: &NavigationConfig) -> f64 {
    let (exit, entry) = entry_exit_points(origin, candidate, direction);
    let euclidean = (entry.0 - exit.0).hypot(entry.1 - exit.1);
    let orthogonal_offset = match direction.axis() {
        Axis::Horizontal => (entry.1 - exit.1).abs(),
        Axis::Vertical => (entry.0 - exit.0).abs(),
    };
    let orthogonal_weight = match direction.axis() {
        Axis::Horizontal => config.orthogonal_weight_lr,
        Axis::Vertical => config.orthogonal_weight_ud,
    };

    let perpendicular = direction.perpendicular();
    let smaller_extent = origin.extent(perpendicular).min(candidate.extent(perpendicular));
    let alignment = if smaller_extent > 0.0 {
        (perpendicular_overlap(origin, candidate, direction) / smaller_extent).min(1.0)
    } else {
        0.0
    };

    euclidean + orthogonal_offset * orthogonal_weight - alignment
}

/// Directional cost, floored at zero:
/// `primary * primary_weight + secondary * secondary_weight
///  - overlap * overlap_weight - alignment * alignment_weight`.
///
/// * `primary` is the leading/trailing edge gap, zero when overlapping.
/// * `secondary` is the center offset across the movement axis.
/// * `overlap` is the shared perpendicular span as a fraction of the origin's
///   extent, applied when `overlap_bonus` is set.
/// * `alignment` falls linearly from 1 at the origin's center line to 0 at
///   half the origin's extent, applied when `row_column_bias` is set.
pub fn score_directional(origin: &Rectangle, candidate: &Rectangle, direction: Direction, config: &NavigationConfig) -> f64 {
    let perpendicular = direction.perpendicular();
    let primary = primary_gap(origin, candidate, direction).max(0.0);
    let secondary = (candidate.center(perpendicular) - origin.center(perpendicular)).abs();

    let origin_extent = origin.extent(perpendicular);
    let overlap = if config.overlap_bonus && origin_extent > 0.0 {
        perpendicular_overlap(origin, candidate, direction) / origin_extent
    } else {
        0.0
    };

    let half_extent = origin_extent / 2.0;
    let alignment = if config.row_column_bias && half_extent > 0.0 && secondary < half_extent {
        1.0 - secondary / half_extent
    } else {
        0.0
    };

    let score = primary * config.primary_weight + secondary * config.secondary_weight
        - overlap * config.overlap_weight
        - alignment * config.alignment_weight;
    score.max(0.0)
}

/// Runs the scorer selected by `config.mode`.
pub fn score_by_mode(origin: &Rectangle, candidate: &Rectangle, direction: Direction, config: &NavigationConfig) -> f64 {
    match config.mode {
        NavigationMode::Geometric => score_geometric(origin, candidate, direction, config),
        NavigationMode::Directional => score_directional(origin, candidate, direction, config),
    }
}

/// Lowest-cost candidate; ties go to the earliest candidate in input order.
/// Candidates with a non-finite score are skipped.
pub fn best_candidate<'a, I: FocusableItem>(
    origin: &Candidate<I>,
    filtered: &[&'a Candidate<I>],
    direction: Direction,
    config: &NavigationConfig,
) -> Option<&'a Candidate<I>> {
    let mut best: Option<(&'a Candidate<I>, f64)> = None;
    for candidate in filtered {
        let score = score_by_mode(&origin.rect, &candidate.rect, direction, config);
        trace!(candidate = ?candidate.item.id(), score, "scored candidate");
        if !score.is_finite() {
            continue;
        }
        if best.is_none_or(|(_, best_score)| score < best_score) {
            best = Some((*candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{block, rect};

    fn directional() -> NavigationConfig {
        NavigationConfig {
            mode: NavigationMode::Directional,
            ..NavigationConfig::default()
        }
    }

    #[test]
    fn entry_exit_points_use_facing_edges_when_apart() {
        let origin = rect(0.0, 0.0, 100.0, 50.0);
        let below_right = rect(120.0, 200.0, 220.0, 250.0);
        let (exit, entry) = entry_exit_points(&origin, &below_right, Direction::Right);
        assert_eq!(exit, (100.0, 50.0));
        assert_eq!(entry, (120.0, 200.0));

        let above_right = rect(120.0, -100.0, 220.0, -60.0);
        let (exit, entry) = entry_exit_points(&origin, &above_right, Direction::Right);
        assert_eq!(exit, (100.0, 0.0));
        assert_eq!(entry, (120.0, -60.0));
    }

    #[test]
    fn entry_exit_points_share_the_clamped_center_when_overlapping() {
        let origin = rect(0.0, 0.0, 100.0, 50.0);
        let candidate = rect(120.0, 30.0, 220.0, 80.0);
        let (exit, entry) = entry_exit_points(&origin, &candidate, Direction::Right);
        assert_eq!(exit, (100.0, 30.0));
        assert_eq!(entry, (120.0, 30.0));

        let below = rect(20.0, 90.0, 60.0, 120.0);
        let (exit, entry) = entry_exit_points(&origin, &below, Direction::Down);
        assert_eq!(exit, (50.0, 50.0));
        assert_eq!(entry, (50.0, 90.0));
    }

    #[test]
    fn geometric_score_prefers_same_row() {
        let config = NavigationConfig::default();
        let origin = rect(0.0, 0.0, 100.0, 50.0);
        let same_row = rect(120.0, 0.0, 220.0, 50.0);
        let far_below = rect(120.0, 200.0, 220.0, 250.0);
        let row_score = score_geometric(&origin, &same_row, Direction::Right, &config);
        assert_eq!(row_score, 19.0);
        let below_score = score_geometric(&origin, &far_below, Direction::Right, &config);
        assert!(below_score > 4500.0);
    }

    #[test]
    fn geometric_weight_depends_on_axis() {
        let config = NavigationConfig::default();
        let origin = rect(0.0, 0.0, 10.0, 10.0);
        // 10px gap along the move, 10px drift across it, no overlap.
        let horizontal = rect(20.0, 20.0, 30.0, 30.0);
        let vertical = rect(20.0, 20.0, 30.0, 30.0);
        let lr = score_geometric(&origin, &horizontal, Direction::Right, &config);
        let ud = score_geometric(&origin, &vertical, Direction::Down, &config);
        let diagonal = 200.0_f64.sqrt();
        assert!((lr - (diagonal + 300.0)).abs() < 1e-9);
        assert!((ud - (diagonal + 20.0)).abs() < 1e-9);
    }

    #[test]
    fn geometric_score_goes_negative_only_for_touching_aligned_rectangles() {
        let config = NavigationConfig::default();
        let origin = rect(0.0, 0.0, 100.0, 50.0);
        let overlapping = rect(80.0, 0.0, 180.0, 50.0);
        assert_eq!(score_geometric(&origin, &overlapping, Direction::Right, &config), -1.0);
    }

    #[test]
    fn directional_score_combines_weighted_terms() {
        let config = directional();
        let origin = rect(0.0, 0.0, 100.0, 50.0);
        // gap 20, center offset 10, overlap 40/50, alignment 1 - 10/25.
        let candidate = rect(120.0, 10.0, 220.0, 60.0);
        let expected = 20.0 * 1.0 + 10.0 * 0.5 - 0.8 * 5.0 - 0.6 * 5.0;
        let score = score_directional(&origin, &candidate, Direction::Right, &config);
        assert!((score - expected).abs() < 1e-9, "score {score} expected {expected}");
    }

    #[test]
    fn directional_score_floors_at_zero() {
        let config = directional();
        let origin = rect(0.0, 0.0, 100.0, 50.0);
        let adjacent = rect(100.0, 0.0, 200.0, 50.0);
        assert_eq!(score_directional(&origin, &adjacent, Direction::Right, &config), 0.0);
    }

    #[test]
    fn directional_bonuses_can_be_disabled() {
        let config = NavigationConfig {
            overlap_bonus: false,
            row_column_bias: false,
            ..directional()
        };
        let origin = rect(0.0, 0.0, 100.0, 50.0);
        let candidate = rect(120.0, 10.0, 220.0, 60.0);
        assert_eq!(score_directional(&origin, &candidate, Direction::Right, &config), 25.0);
    }

    #[test]
    fn best_candidate_breaks_ties_by_input_order() {
        let config = NavigationConfig::default();
        let origin = block("origin", 0.0, 0.0, 100.0, 50.0);
        let first = block("first", 120.0, 0.0, 220.0, 50.0);
        let twin = block("twin", 120.0, 0.0, 220.0, 50.0);
        let filtered = vec![&first, &twin];
        let best = best_candidate(&origin, &filtered, Direction::Right, &config).unwrap();
        assert_eq!(best.item.id, "first");

        let reversed = vec![&twin, &first];
        let best = best_candidate(&origin, &reversed, Direction::Right, &config).unwrap();
        assert_eq!(best.item.id, "twin");
    }

    #[test]
    fn best_candidate_of_nothing_is_none() {
        let origin = block("origin", 0.0, 0.0, 100.0, 50.0);
        assert!(best_candidate(&origin, &[], Direction::Up, &NavigationConfig::default()).is_none());
    }
}
