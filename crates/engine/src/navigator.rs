//! Navigation orchestrator.
//!
//! [`Navigator`] wires the stages together for one request: measure the
//! origin and its candidates, run the mode's direction filter, score what
//! survives (or consult the fallback when nothing does), and hand the winner
//! back to the host.

use padnav_types::{ConfigPatch, Direction, NavigationConfig, NavigationMode, ParseDirectionError, ScrollBehavior};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::{ConfigError, ConfigStore};
use crate::fallback::resolve_fallback;
use crate::filter::filter_by_mode;
use crate::rect::{Candidate, FocusableItem, focusable_candidates, is_focusable, measure_rect};
use crate::score::best_candidate;

/// Programmer errors raised by the navigation entry points.
///
/// Data problems (no candidates, unreadable geometry) are never errors; they
/// resolve to "no move".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<ParseDirectionError> for NavigationError {
    fn from(error: ParseDirectionError) -> Self {
        NavigationError::InvalidArgument(error.to_string())
    }
}

/// What the embedding UI layer provides to the engine.
pub trait FocusHost {
    type Item: FocusableItem + Clone;
    /// A container that limits enumeration, such as a panel or menu.
    type Scope: ?Sized;

    /// Items inside `scope` (the whole document when `None`), in stable
    /// document order. The engine applies the focusability checks itself.
    fn focusable_items(&self, scope: Option<&Self::Scope>) -> Vec<Self::Item>;

    /// The currently focused item, if any.
    fn active_item(&self) -> Option<Self::Item>;

    /// Whether `item` is the document root, which counts as "nothing focused".
    fn is_root(&self, _item: &Self::Item) -> bool {
        false
    }

    /// Moves focus to `item`.
    fn focus(&mut self, item: &Self::Item);

    /// Called before a directional-mode target is returned when
    /// `scrollBehavior` is `scrollFirst`. Hosts that do not scroll can leave
    /// the default.
    fn scroll_into_view(&self, _item: &Self::Item) {}
}

/// Per-request options.
pub struct NavigationOptions<'a, I, S: ?Sized> {
    /// Limits candidate enumeration to this container.
    pub scope: Option<&'a S>,
    /// Explicit candidate list, replacing enumeration entirely.
    pub candidates: Option<&'a [I]>,
}

impl<I, S: ?Sized> Default for NavigationOptions<'_, I, S> {
    fn default() -> Self {
        Self {
            scope: None,
            candidates: None,
        }
    }
}

impl<'a, I, S: ?Sized> NavigationOptions<'a, I, S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn within(mut self, scope: &'a S) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_candidates(mut self, candidates: &'a [I]) -> Self {
        self.candidates = Some(candidates);
        self
    }
}

/// Spatial navigation engine bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    store: ConfigStore,
}

impl Navigator {
    /// Navigator using the built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: NavigationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            store: ConfigStore::with_config(config)?,
        })
    }

    /// Validates and merges `patch`; see [`ConfigStore::configure`].
    pub fn configure(&mut self, patch: &ConfigPatch) -> Result<NavigationConfig, ConfigError> {
        self.store.configure(patch)
    }

    /// Validates and merges an untyped JSON object.
    pub fn configure_value(&mut self, options: &Value) -> Result<NavigationConfig, ConfigError> {
        self.store.configure_value(options)
    }

    /// Copy of the active configuration.
    pub fn config(&self) -> NavigationConfig {
        self.store.config()
    }

    pub fn reset_config(&mut self) {
        self.store.reset();
    }

    /// Chooses the item focus should move to from `origin` in `direction`.
    ///
    /// Returns `None` when there are no candidates, when the origin cannot be
    /// measured, or when nothing lies in the requested direction and the
    /// fallback (directional mode only) finds nothing either.
    pub fn find_next_focusable<H: FocusHost>(
        &self,
        host: &H,
        origin: &H::Item,
        direction: Direction,
        options: &NavigationOptions<'_, H::Item, H::Scope>,
    ) -> Option<H::Item> {
        let config = self.store.current();

        let origin = match measure_rect(origin) {
            Ok(rect) => Candidate {
                item: origin.clone(),
                rect,
            },
            Err(error) => {
                warn!(origin = ?origin.id(), %error, "origin geometry unavailable; no move");
                return None;
            }
        };

        let items = match options.candidates {
            Some(items) => items.to_vec(),
            None => host.focusable_items(options.scope),
        };
        let candidates: Vec<Candidate<H::Item>> = focusable_candidates(items)
            .into_iter()
            .filter(|candidate| !candidate.is_same_item(&origin))
            .collect();
        if candidates.is_empty() {
            debug!(%direction, "no focusable candidates");
            return None;
        }

        let filtered = filter_by_mode(config, &origin, &candidates, direction);
        debug!(
            %direction,
            mode = %config.mode,
            candidates = candidates.len(),
            filtered = filtered.len(),
            "direction filter applied"
        );

        let chosen = if filtered.is_empty() {
            match config.mode {
                NavigationMode::Directional => resolve_fallback(config.fallback, &origin, &candidates, direction),
                NavigationMode::Geometric => None,
            }
        } else {
            best_candidate(&origin, &filtered, direction, config)
        };
        let chosen = chosen.map(|candidate| candidate.item.clone());

        if let Some(item) = &chosen
            && config.mode == NavigationMode::Directional
            && config.scroll_behavior == ScrollBehavior::ScrollFirst
        {
            host.scroll_into_view(item);
        }

        debug!(%direction, next = ?chosen.as_ref().map(|item| item.id()), "navigation resolved");
        chosen
    }

    /// First focusable item inside `scope`, in document order.
    pub fn find_first_focusable<H: FocusHost>(&self, host: &H, scope: Option<&H::Scope>) -> Option<H::Item> {
        host.focusable_items(scope).into_iter().find(is_focusable)
    }

    /// Moves focus one step in `direction`.
    ///
    /// With nothing focused (or the root focused) the first focusable item
    /// in the scope receives focus. Returns whether focus was moved.
    pub fn navigate<H: FocusHost>(
        &self,
        host: &mut H,
        direction: Direction,
        options: &NavigationOptions<'_, H::Item, H::Scope>,
    ) -> bool {
        let active = host.active_item().filter(|item| !host.is_root(item));

        let Some(origin) = active else {
            return match self.find_first_focusable(host, options.scope) {
                Some(first) => {
                    debug!(item = ?first.id(), "nothing focused; focusing first item");
                    host.focus(&first);
                    true
                }
                None => false,
            };
        };

        match self.find_next_focusable(host, &origin, direction, options) {
            Some(next) => {
                host.focus(&next);
                true
            }
            None => false,
        }
    }

    /// [`Navigator::navigate`] for a raw direction name such as `"left"`.
    ///
    /// Anything other than the four direction literals is rejected with
    /// [`NavigationError::InvalidArgument`].
    pub fn navigate_named<H: FocusHost>(
        &self,
        host: &mut H,
        direction: &str,
        options: &NavigationOptions<'_, H::Item, H::Scope>,
    ) -> Result<bool, NavigationError> {
        let direction: Direction = direction.parse()?;
        Ok(self.navigate(host, direction, options))
    }
}
