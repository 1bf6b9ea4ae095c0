//! Item geometry and visibility classification.
//!
//! The engine never touches a host's element model directly. Hosts expose
//! their elements through [`FocusableItem`], and every measurement made for a
//! request is captured once in a [`Candidate`].

use std::fmt::Debug;

use padnav_types::{ElementKind, GeometryError, Rectangle};
use tracing::debug;

/// Host element as seen by the navigation engine.
///
/// Only [`FocusableItem::id`] and [`FocusableItem::measure`] are required; the
/// style and interactivity accessors default to a plain, visible,
/// non-interactive element.
pub trait FocusableItem {
    /// Identity used to exclude the origin from its own candidate set.
    type Id: Eq + Clone + Debug;

    fn id(&self) -> Self::Id;

    /// Reads the current on-screen rectangle.
    fn measure(&self) -> Result<Rectangle, GeometryError>;

    /// `false` when the element is laid out with `display: none`.
    fn is_displayed(&self) -> bool {
        true
    }

    /// `true` when the element is styled `visibility: hidden`.
    fn is_visibility_hidden(&self) -> bool {
        false
    }

    /// Explicit tab priority, if the element declares one.
    fn tab_index(&self) -> Option<i32> {
        None
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Other
    }

    fn is_disabled(&self) -> bool {
        false
    }
}

/// An item paired with the rectangle measured for the current request.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<I> {
    pub item: I,
    pub rect: Rectangle,
}

impl<I: FocusableItem> Candidate<I> {
    /// Measures `item`, degrading to [`Rectangle::ZERO`] on failure.
    pub fn measure(item: I) -> Self {
        let rect = get_rect(&item);
        Self { item, rect }
    }

    /// Whether both candidates wrap the same host item.
    pub fn is_same_item(&self, other: &Candidate<I>) -> bool {
        self.item.id() == other.item.id()
    }
}

/// Reads an item's rectangle, surfacing failures to the caller.
pub fn measure_rect<I: FocusableItem>(item: &I) -> Result<Rectangle, GeometryError> {
    item.measure()
}

/// Reads an item's rectangle, returning [`Rectangle::ZERO`] when geometry is
/// unavailable so one bad element cannot abort a request.
pub fn get_rect<I: FocusableItem>(item: &I) -> Rectangle {
    match item.measure() {
        Ok(rect) => rect,
        Err(error) => {
            debug!(item = ?item.id(), %error, "geometry read failed; using zero rectangle");
            Rectangle::ZERO
        }
    }
}

/// Rendered, not hidden, and of non-zero size.
pub fn is_visible<I: FocusableItem>(item: &I) -> bool {
    is_visible_with_rect(item, &get_rect(item))
}

/// Visible and either carries a non-negative tab priority or is an enabled
/// interactive element.
pub fn is_focusable<I: FocusableItem>(item: &I) -> bool {
    is_focusable_with_rect(item, &get_rect(item))
}

pub(crate) fn is_visible_with_rect<I: FocusableItem>(item: &I, rect: &Rectangle) -> bool {
    item.is_displayed() && !item.is_visibility_hidden() && !rect.is_empty()
}

pub(crate) fn is_focusable_with_rect<I: FocusableItem>(item: &I, rect: &Rectangle) -> bool {
    if !is_visible_with_rect(item, rect) {
        return false;
    }
    if item.tab_index().is_some_and(|priority| priority >= 0) {
        return true;
    }
    item.kind().is_interactive() && !item.is_disabled()
}

/// Measures every item once and keeps the focusable ones, in input order.
pub(crate) fn focusable_candidates<I: FocusableItem>(items: impl IntoIterator<Item = I>) -> Vec<Candidate<I>> {
    items
        .into_iter()
        .map(Candidate::measure)
        .filter(|candidate| is_focusable_with_rect(&candidate.item, &candidate.rect))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Element {
        id: u32,
        geometry: Option<(f64, f64, f64, f64)>,
        displayed: bool,
        hidden: bool,
        tab_index: Option<i32>,
        kind: ElementKind,
        disabled: bool,
    }

    impl Element {
        fn button(id: u32) -> Self {
            Self {
                id,
                geometry: Some((0.0, 0.0, 40.0, 20.0)),
                displayed: true,
                hidden: false,
                tab_index: None,
                kind: ElementKind::Button,
                disabled: false,
            }
        }
    }

    impl FocusableItem for Element {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn measure(&self) -> Result<Rectangle, GeometryError> {
            match self.geometry {
                Some((x, y, w, h)) => Rectangle::from_origin_size(x, y, w, h),
                None => Err(GeometryError::Unavailable {
                    reason: "detached".to_string(),
                }),
            }
        }

        fn is_displayed(&self) -> bool {
            self.displayed
        }

        fn is_visibility_hidden(&self) -> bool {
            self.hidden
        }

        fn tab_index(&self) -> Option<i32> {
            self.tab_index
        }

        fn kind(&self) -> ElementKind {
            self.kind
        }

        fn is_disabled(&self) -> bool {
            self.disabled
        }
    }

    #[test]
    fn unreadable_geometry_degrades_to_zero_rectangle() {
        let element = Element {
            geometry: None,
            ..Element::button(1)
        };
        assert!(measure_rect(&element).is_err());
        assert_eq!(get_rect(&element), Rectangle::ZERO);
        assert!(!is_visible(&element));
        assert!(!is_focusable(&element));
    }

    #[test]
    fn hidden_or_undisplayed_items_are_invisible() {
        assert!(is_visible(&Element::button(1)));
        assert!(!is_visible(&Element {
            displayed: false,
            ..Element::button(1)
        }));
        assert!(!is_visible(&Element {
            hidden: true,
            ..Element::button(1)
        }));
        assert!(!is_visible(&Element {
            geometry: Some((0.0, 0.0, 40.0, 0.0)),
            ..Element::button(1)
        }));
    }

    #[test]
    fn disabled_interactive_items_are_not_focusable() {
        assert!(is_focusable(&Element::button(1)));
        assert!(!is_focusable(&Element {
            disabled: true,
            ..Element::button(1)
        }));
    }

    #[test]
    fn tab_priority_makes_plain_items_focusable() {
        let plain = Element {
            kind: ElementKind::Other,
            ..Element::button(1)
        };
        assert!(!is_focusable(&plain));
        assert!(is_focusable(&Element {
            tab_index: Some(0),
            ..plain.clone()
        }));
        assert!(!is_focusable(&Element {
            tab_index: Some(-1),
            ..plain
        }));
    }

    #[test]
    fn focusable_candidates_keep_input_order() {
        let items = vec![
            Element::button(3),
            Element {
                geometry: None,
                ..Element::button(4)
            },
            Element::button(1),
        ];
        let ids: Vec<u32> = focusable_candidates(items).iter().map(|c| c.item.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
