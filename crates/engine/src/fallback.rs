//! Fallback strategies for directional mode.
//!
//! Consulted only when the cone filter leaves nothing and the configured
//! strategy is not [`FallbackStrategy::None`]. Both strategies work on the
//! unfiltered candidate set and break ties by input order.

use padnav_types::{Axis, Direction, FallbackStrategy, Rectangle};
use tracing::debug;

use crate::rect::{Candidate, FocusableItem};

/// Applies `strategy`, returning `None` for [`FallbackStrategy::None`].
pub fn resolve_fallback<'a, I: FocusableItem>(
    strategy: FallbackStrategy,
    origin: &Candidate<I>,
    candidates: &'a [Candidate<I>],
    direction: Direction,
) -> Option<&'a Candidate<I>> {
    let resolved = match strategy {
        FallbackStrategy::None => None,
        FallbackStrategy::Nearest => fallback_nearest(origin, candidates),
        FallbackStrategy::Wrap => fallback_wrap(origin, candidates, direction),
    };
    debug!(
        %strategy,
        %direction,
        resolved = ?resolved.map(|candidate| candidate.item.id()),
        "fallback consulted"
    );
    resolved
}

/// Candidate whose center is closest to the origin's center, regardless of
/// direction.
pub fn fallback_nearest<'a, I: FocusableItem>(origin: &Candidate<I>, candidates: &'a [Candidate<I>]) -> Option<&'a Candidate<I>> {
    argmin(origin, candidates, |_| true, |rect| origin.rect.center_distance(rect))
}

/// Wraps around to the far side of the layout.
///
/// Only candidates lying toward the opposite edge qualify: moving left
/// considers items whose left edge is right of the origin's left edge, moving
/// right those whose right edge is left of the origin's right edge, and
/// likewise for up and down. Among them the one nearest the far edge wins,
/// with the perpendicular center offset added as a penalty.
pub fn fallback_wrap<'a, I: FocusableItem>(
    origin: &Candidate<I>,
    candidates: &'a [Candidate<I>],
    direction: Direction,
) -> Option<&'a Candidate<I>> {
    argmin(
        origin,
        candidates,
        |rect| lies_toward_opposite_edge(&origin.rect, rect, direction),
        |rect| wrap_score(&origin.rect, rect, direction),
    )
}

/// Whether `candidate` sits toward the edge opposite `direction`.
pub fn lies_toward_opposite_edge(origin: &Rectangle, candidate: &Rectangle, direction: Direction) -> bool {
    match direction {
        Direction::Left => candidate.left > origin.left,
        Direction::Right => candidate.right < origin.right,
        Direction::Up => candidate.top > origin.top,
        Direction::Down => candidate.bottom < origin.bottom,
    }
}

/// Position of the candidate's wrap-target edge plus its perpendicular
/// center offset; lower is closer to where a wrapped move should land.
pub fn wrap_score(origin: &Rectangle, candidate: &Rectangle, direction: Direction) -> f64 {
    let position = match direction {
        Direction::Right => candidate.left,
        Direction::Left => -candidate.right,
        Direction::Down => candidate.top,
        Direction::Up => -candidate.bottom,
    };
    let offset = match direction.axis() {
        Axis::Horizontal => (candidate.center_y - origin.center_y).abs(),
        Axis::Vertical => (candidate.center_x - origin.center_x).abs(),
    };
    position + offset
}

fn argmin<'a, I: FocusableItem>(
    origin: &Candidate<I>,
    candidates: &'a [Candidate<I>],
    eligible: impl Fn(&Rectangle) -> bool,
    cost: impl Fn(&Rectangle) -> f64,
) -> Option<&'a Candidate<I>> {
    let mut best: Option<(&'a Candidate<I>, f64)> = None;
    for candidate in candidates {
        if candidate.is_same_item(origin) || !eligible(&candidate.rect) {
            continue;
        }
        let value = cost(&candidate.rect);
        if value.is_finite() && best.is_none_or(|(_, best_value)| value < best_value) {
            best = Some((candidate, value));
        }
    }
    best.map(|(candidate, _)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{block, square};

    #[test]
    fn nearest_ignores_direction() {
        let origin = square("origin", 50.0, 50.0, 20.0);
        let candidates = vec![
            origin.clone(),
            square("far-right", 400.0, 50.0, 20.0),
            square("below", 50.0, 200.0, 20.0),
            square("above-left", 0.0, 0.0, 20.0),
        ];
        let nearest = fallback_nearest(&origin, &candidates).unwrap();
        assert_eq!(nearest.item.id, "above-left");
    }

    #[test]
    fn nearest_breaks_ties_by_input_order() {
        let origin = square("origin", 50.0, 50.0, 20.0);
        let candidates = vec![square("left", 0.0, 50.0, 20.0), square("right", 100.0, 50.0, 20.0)];
        assert_eq!(fallback_nearest(&origin, &candidates).unwrap().item.id, "left");
    }

    #[test]
    fn wrap_left_from_row_start_lands_on_row_end() {
        let origin = block("first", 0.0, 0.0, 100.0, 50.0);
        let candidates = vec![
            origin.clone(),
            block("second", 120.0, 0.0, 220.0, 50.0),
            block("third", 240.0, 0.0, 340.0, 50.0),
            block("next-row-end", 240.0, 300.0, 340.0, 350.0),
        ];
        let wrapped = fallback_wrap(&origin, &candidates, Direction::Left).unwrap();
        assert_eq!(wrapped.item.id, "third");
        assert!(wrapped.rect.left > origin.rect.left);
    }

    #[test]
    fn wrap_right_from_row_end_lands_on_row_start() {
        let origin = block("third", 240.0, 0.0, 340.0, 50.0);
        let candidates = vec![
            block("first", 0.0, 0.0, 100.0, 50.0),
            block("second", 120.0, 0.0, 220.0, 50.0),
            origin.clone(),
        ];
        assert_eq!(fallback_wrap(&origin, &candidates, Direction::Right).unwrap().item.id, "first");
    }

    #[test]
    fn wrap_down_from_column_end_lands_on_column_top() {
        let origin = block("bottom", 0.0, 200.0, 100.0, 250.0);
        let candidates = vec![block("top", 0.0, 0.0, 100.0, 50.0), block("middle", 0.0, 100.0, 100.0, 150.0)];
        assert_eq!(fallback_wrap(&origin, &candidates, Direction::Down).unwrap().item.id, "top");
    }

    #[test]
    fn wrap_without_qualifying_candidates_is_none() {
        let origin = block("origin", 0.0, 0.0, 100.0, 50.0);
        let candidates = vec![block("stacked", 0.0, 100.0, 100.0, 150.0)];
        assert!(fallback_wrap(&origin, &candidates, Direction::Left).is_none());
    }

    #[test]
    fn none_strategy_never_resolves() {
        let origin = square("origin", 50.0, 50.0, 20.0);
        let candidates = vec![square("other", 100.0, 50.0, 20.0)];
        assert!(resolve_fallback(FallbackStrategy::None, &origin, &candidates, Direction::Up).is_none());
        assert!(resolve_fallback(FallbackStrategy::Nearest, &origin, &candidates, Direction::Up).is_some());
    }
}
