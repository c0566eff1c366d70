pub mod targets;

pub use targets::{DEFAULT_ASSET_PATH, ESCAPED_NEWLINE, TARGET_KEYS, default_asset_path};
