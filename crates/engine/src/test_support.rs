//! Synthetic items for unit tests.

use padnav_types::{GeometryError, Rectangle};

use crate::rect::{Candidate, FocusableItem};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Block {
    pub id: &'static str,
    pub rect: Rectangle,
}

impl FocusableItem for Block {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        self.id
    }

    fn measure(&self) -> Result<Rectangle, GeometryError> {
        Ok(self.rect)
    }

    fn tab_index(&self) -> Option<i32> {
        Some(0)
    }
}

pub(crate) fn rect(left: f64, top: f64, right: f64, bottom: f64) -> Rectangle {
    Rectangle::from_edges(left, top, right, bottom).expect("valid test rectangle")
}

pub(crate) fn block(id: &'static str, left: f64, top: f64, right: f64, bottom: f64) -> Candidate<Block> {
    Candidate {
        item: Block {
            id,
            rect: rect(left, top, right, bottom),
        },
        rect: rect(left, top, right, bottom),
    }
}

/// Square of side `size` centered on `(x, y)`.
pub(crate) fn square(id: &'static str, x: f64, y: f64, size: f64) -> Candidate<Block> {
    let half = size / 2.0;
    block(id, x - half, y - half, x + half, y + half)
}

pub(crate) fn ids<'a>(candidates: impl IntoIterator<Item = &'a Candidate<Block>>) -> Vec<&'static str> {
    candidates.into_iter().map(|candidate| candidate.item.id).collect()
}
