#![allow(dead_code)]

use std::cell::RefCell;

use padnav_engine::{FocusHost, FocusableItem};
use padnav_types::{ElementKind, GeometryError, Rectangle};

/// Page element with optional geometry; `None` simulates a detached node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: &'static str,
    pub geometry: Option<Rectangle>,
    pub kind: ElementKind,
    pub panel: &'static str,
}

impl FocusableItem for Element {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        self.id
    }

    fn measure(&self) -> Result<Rectangle, GeometryError> {
        self.geometry.ok_or_else(|| GeometryError::Unavailable {
            reason: format!("{} is detached", self.id),
        })
    }

    fn kind(&self) -> ElementKind {
        self.kind
    }
}

pub fn button(id: &'static str, left: f64, top: f64, right: f64, bottom: f64) -> Element {
    Element {
        id,
        geometry: Some(Rectangle::from_edges(left, top, right, bottom).expect("valid rectangle")),
        kind: ElementKind::Button,
        panel: "main",
    }
}

/// Button of side `size` centered on `(x, y)`.
pub fn centered(id: &'static str, x: f64, y: f64, size: f64) -> Element {
    let half = size / 2.0;
    button(id, x - half, y - half, x + half, y + half)
}

pub fn detached(id: &'static str) -> Element {
    Element {
        geometry: None,
        ..button(id, 0.0, 0.0, 1.0, 1.0)
    }
}

/// In-memory page recording focus changes and scroll requests.
#[derive(Debug, Default)]
pub struct Page {
    pub elements: Vec<Element>,
    pub focused: Option<&'static str>,
    pub scrolled: RefCell<Vec<&'static str>>,
}

impl Page {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    pub fn focused_on(mut self, id: &'static str) -> Self {
        self.focused = Some(id);
        self
    }

    pub fn element(&self, id: &str) -> Element {
        self.elements
            .iter()
            .find(|element| element.id == id)
            .cloned()
            .unwrap_or_else(|| panic!("no element {id}"))
    }
}

impl FocusHost for Page {
    type Item = Element;
    type Scope = str;

    fn focusable_items(&self, scope: Option<&str>) -> Vec<Element> {
        self.elements
            .iter()
            .filter(|element| scope.is_none_or(|panel| element.panel == panel))
            .cloned()
            .collect()
    }

    fn active_item(&self) -> Option<Element> {
        self.focused.map(|id| self.element(id))
    }

    fn focus(&mut self, item: &Element) {
        self.focused = Some(item.id);
    }

    fn scroll_into_view(&self, item: &Element) {
        self.scrolled.borrow_mut().push(item.id);
    }
}
