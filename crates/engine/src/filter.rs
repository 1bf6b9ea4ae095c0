//! Direction filters.
//!
//! A filter narrows the candidate set to the items plausibly lying in the
//! requested direction. Both filters preserve input order and never return
//! the origin itself.

use padnav_types::{Axis, Direction, NavigationConfig, NavigationMode, Rectangle};

use crate::rect::{Candidate, FocusableItem};

/// Half-plane test: keeps candidates whose center lies strictly past the
/// origin's center along the movement axis.
pub fn filter_geometric<'a, I: FocusableItem>(
    origin: &Candidate<I>,
    candidates: &'a [Candidate<I>],
    direction: Direction,
) -> Vec<&'a Candidate<I>> {
    candidates
        .iter()
        .filter(|candidate| !candidate.is_same_item(origin) && is_past_center(&origin.rect, &candidate.rect, direction))
        .collect()
}

/// Cone test: keeps candidates whose center lies ahead of the origin's
/// leading edge and within `cone_angle` degrees of the movement axis.
pub fn filter_cone<'a, I: FocusableItem>(
    origin: &Candidate<I>,
    candidates: &'a [Candidate<I>],
    direction: Direction,
    cone_angle: f64,
) -> Vec<&'a Candidate<I>> {
    candidates
        .iter()
        .filter(|candidate| !candidate.is_same_item(origin) && is_within_cone(&origin.rect, &candidate.rect, direction, cone_angle))
        .collect()
}

/// Runs the filter selected by `config.mode`.
pub fn filter_by_mode<'a, I: FocusableItem>(
    config: &NavigationConfig,
    origin: &Candidate<I>,
    candidates: &'a [Candidate<I>],
    direction: Direction,
) -> Vec<&'a Candidate<I>> {
    match config.mode {
        NavigationMode::Geometric => filter_geometric(origin, candidates, direction),
        NavigationMode::Directional => filter_cone(origin, candidates, direction, config.cone_angle),
    }
}

/// Cone apex: the midpoint of the origin's edge facing `direction`.
pub fn cone_apex(origin: &Rectangle, direction: Direction) -> (f64, f64) {
    match direction.axis() {
        Axis::Horizontal => (origin.leading_edge(direction), origin.center_y),
        Axis::Vertical => (origin.center_x, origin.leading_edge(direction)),
    }
}

pub fn is_past_center(origin: &Rectangle, candidate: &Rectangle, direction: Direction) -> bool {
    let axis = direction.axis();
    (candidate.center(axis) - origin.center(axis)) * direction.sign() > 0.0
}

pub fn is_within_cone(origin: &Rectangle, candidate: &Rectangle, direction: Direction, cone_angle: f64) -> bool {
    match cone_offsets(origin, candidate, direction) {
        Some((primary, secondary)) => secondary.abs().atan2(primary).to_degrees() <= cone_angle,
        None => false,
    }
}

/// Offsets of the candidate center from the apex as `(along, across)` the
/// movement axis, or `None` when the center is not ahead of the apex.
pub fn cone_offsets(origin: &Rectangle, candidate: &Rectangle, direction: Direction) -> Option<(f64, f64)> {
    let (apex_x, apex_y) = cone_apex(origin, direction);
    let dx = candidate.center_x - apex_x;
    let dy = candidate.center_y - apex_y;
    let (primary, secondary) = match direction.axis() {
        Axis::Horizontal => (dx * direction.sign(), dy),
        Axis::Vertical => (dy * direction.sign(), dx),
    };
    (primary > 0.0).then_some((primary, secondary))
}
