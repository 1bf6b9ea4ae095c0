//! Navigation configuration: validation, the in-memory store, and the
//! optional JSON file that seeds it.

mod io;
mod store;
mod validation;

pub use io::{default_config_path, expand_tilde, load_config_from_path, load_patch_from_path, save_patch_to_path};
pub use store::ConfigStore;
pub use validation::{ConfigError, parse_patch, validate_config, validate_patch};
