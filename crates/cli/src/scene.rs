//! JSON scene files: a flat list of boxes standing in for a rendered page.
//!
//! ```json
//! {
//!   "items": [
//!     { "id": "play", "left": 0, "top": 0, "width": 100, "height": 50, "kind": "button" },
//!     { "id": "menu", "left": 0, "top": 80, "width": 100, "height": 50, "scope": "sidebar" }
//!   ],
//!   "focused": "play"
//! }
//! ```

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use padnav_engine::{FocusHost, FocusableItem};
use padnav_types::{ElementKind, GeometryError, Rectangle};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("failed to read scene {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse scene {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("duplicate item id '{id}'")]
    DuplicateId { id: String },
    #[error("no item with id '{id}'")]
    UnknownItem { id: String },
}

/// Scene file contents. Item order is document order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Scene {
    pub items: Vec<SceneItem>,
    #[serde(default)]
    pub focused: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SceneItem {
    pub id: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub kind: ElementKind,
    #[serde(default)]
    pub tab_index: Option<i32>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default = "default_displayed")]
    pub displayed: bool,
    /// Container name used by `--scope`.
    #[serde(default)]
    pub scope: Option<String>,
}

fn default_displayed() -> bool {
    true
}

impl FocusableItem for SceneItem {
    type Id = String;

    fn id(&self) -> String {
        self.id.clone()
    }

    fn measure(&self) -> Result<Rectangle, GeometryError> {
        Rectangle::from_origin_size(self.left, self.top, self.width, self.height)
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

/// In-memory focus host backed by a loaded scene.
#[derive(Debug, Default)]
pub struct SceneHost {
    items: IndexMap<String, SceneItem>,
    focused: Option<String>,
    scrolled: RefCell<Vec<String>>,
}

impl SceneHost {
    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let content = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene: Scene = serde_json::from_str(&content).map_err(|source| SceneError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let host = Self::from_scene(scene)?;
        info!(path = %path.display(), items = host.items.len(), "loaded scene");
        Ok(host)
    }

    pub fn from_scene(scene: Scene) -> Result<Self, SceneError> {
        let mut items = IndexMap::with_capacity(scene.items.len());
        for item in scene.items {
            if items.contains_key(&item.id) {
                return Err(SceneError::DuplicateId { id: item.id });
            }
            items.insert(item.id.clone(), item);
        }
        if let Some(id) = &scene.focused
            && !items.contains_key(id)
        {
            return Err(SceneError::UnknownItem { id: id.clone() });
        }
        Ok(Self {
            items,
            focused: scene.focused,
            scrolled: RefCell::new(Vec::new()),
        })
    }

    pub fn item(&self, id: &str) -> Result<&SceneItem, SceneError> {
        self.items.get(id).ok_or_else(|| SceneError::UnknownItem { id: id.to_string() })
    }

    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Ids passed to [`FocusHost::scroll_into_view`], oldest first.
    pub fn scrolled(&self) -> Vec<String> {
        self.scrolled.borrow().clone()
    }
}

impl FocusHost for SceneHost {
    type Item = SceneItem;
    type Scope = str;

    fn focusable_items(&self, scope: Option<&str>) -> Vec<SceneItem> {
        self.items
            .values()
            .filter(|item| scope.is_none_or(|scope| item.scope.as_deref() == Some(scope)))
            .cloned()
            .collect()
    }

    fn active_item(&self) -> Option<SceneItem> {
        self.focused.as_ref().and_then(|id| self.items.get(id)).cloned()
    }

    fn focus(&mut self, item: &SceneItem) {
        debug!(item = %item.id, "focus moved");
        self.focused = Some(item.id.clone());
    }

    fn scroll_into_view(&self, item: &SceneItem) {
        debug!(item = %item.id, "scrolling into view");
        self.scrolled.borrow_mut().push(item.id.clone());
    }
}
