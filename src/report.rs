use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Outcome of one run over the asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub path: PathBuf,
    pub blocks_replaced: usize,
    /// False only for dry runs.
    pub written: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blocks replaced: {}", self.blocks_replaced)
    }
}
