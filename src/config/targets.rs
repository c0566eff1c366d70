use std::path::{Path, PathBuf};

/// Keys whose string values carry preset equations and may span lines.
pub const TARGET_KEYS: &[&str] = &["init_eqs_str", "frame_eqs_str", "pixel_eqs_str"];

/// Two characters: a backslash followed by `n`.
pub const ESCAPED_NEWLINE: &str = "\\n";

/// Asset location relative to the project root.
pub const DEFAULT_ASSET_PATH: &str = "js/lib/butterchurn-presets.min.js";

pub fn default_asset_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_ASSET_PATH)
}
