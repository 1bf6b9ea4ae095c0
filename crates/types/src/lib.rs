//! Shared data types for padnav.
//!
//! Plain geometry and configuration values exchanged between the navigation
//! engine and the hosts that embed it. Nothing here performs navigation.

pub mod config;
pub mod geometry;

use serde::{Deserialize, Serialize};

pub use config::{ConfigPatch, FallbackStrategy, NavigationConfig, NavigationMode, ParseOptionError, ScrollBehavior};
pub use geometry::{Axis, Direction, GeometryError, ParseDirectionError, Rectangle};

/// Kind of element as reported by the host.
///
/// The named variants are the naturally interactive kinds that accept focus
/// without an explicit tab priority; everything else is [`ElementKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementKind {
    /// A link that has a navigation target.
    Link,
    Button,
    /// Single-line text entry.
    TextInput,
    /// Select boxes, checkboxes, radio buttons.
    ChoiceInput,
    /// Text areas.
    MultilineInput,
    #[default]
    Other,
}

impl ElementKind {
    /// Whether the kind is focusable without an explicit tab priority.
    pub const fn is_interactive(self) -> bool {
        !matches!(self, ElementKind::Other)
    }
}
