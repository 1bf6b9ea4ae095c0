//! # Padnav Engine
//!
//! Spatial navigation for remote-control and D-pad input. Given the focused
//! item and a direction, the engine picks the next item to focus using only
//! on-screen geometry: no element tree and no adjacency graph.
//!
//! ## Pipeline
//!
//! - **`rect`**: measures items and classifies them visible/focusable.
//! - **`filter`**: keeps candidates lying in the requested direction, by
//!   half-plane test (geometric mode) or angular cone (directional mode).
//! - **`score`**: ranks the survivors; lower cost wins, ties go to the
//!   earliest candidate.
//! - **`fallback`**: in directional mode, picks the nearest item or wraps to
//!   the opposite edge when the cone is empty.
//! - **`navigator`**: the public entry points tying the stages together.
//! - **`config`**: validated configuration and its JSON file.
//!
//! ## Usage
//!
//! ```rust
//! use padnav_engine::{FocusHost, FocusableItem, NavigationOptions, Navigator};
//! use padnav_types::{Direction, GeometryError, Rectangle};
//!
//! #[derive(Clone)]
//! struct Tile {
//!     id: u32,
//!     rect: Rectangle,
//! }
//!
//! impl FocusableItem for Tile {
//!     type Id = u32;
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//!     fn measure(&self) -> Result<Rectangle, GeometryError> {
//!         Ok(self.rect)
//!     }
//!     fn tab_index(&self) -> Option<i32> {
//!         Some(0)
//!     }
//! }
//!
//! struct Row {
//!     tiles: Vec<Tile>,
//!     focused: Option<usize>,
//! }
//!
//! impl FocusHost for Row {
//!     type Item = Tile;
//!     type Scope = ();
//!     fn focusable_items(&self, _scope: Option<&()>) -> Vec<Tile> {
//!         self.tiles.clone()
//!     }
//!     fn active_item(&self) -> Option<Tile> {
//!         self.focused.map(|index| self.tiles[index].clone())
//!     }
//!     fn focus(&mut self, item: &Tile) {
//!         self.focused = self.tiles.iter().position(|tile| tile.id == item.id);
//!     }
//! }
//!
//! let tiles = (0..3)
//!     .map(|index| Tile {
//!         id: index,
//!         rect: Rectangle::from_origin_size(index as f64 * 120.0, 0.0, 100.0, 50.0).unwrap(),
//!     })
//!     .collect();
//! let mut row = Row { tiles, focused: Some(0) };
//!
//! let navigator = Navigator::new();
//! assert!(navigator.navigate(&mut row, Direction::Right, &NavigationOptions::default()));
//! assert_eq!(row.focused, Some(1));
//! ```

pub mod config;
pub mod fallback;
pub mod filter;
pub mod navigator;
pub mod rect;
pub mod score;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use config::{ConfigError, ConfigStore, default_config_path, load_config_from_path, parse_patch};
pub use fallback::{fallback_nearest, fallback_wrap, resolve_fallback};
pub use filter::{cone_apex, filter_by_mode, filter_cone, filter_geometric};
pub use navigator::{FocusHost, NavigationError, NavigationOptions, Navigator};
pub use rect::{Candidate, FocusableItem, get_rect, is_focusable, is_visible, measure_rect};
pub use score::{best_candidate, score_by_mode, score_directional, score_geometric};
