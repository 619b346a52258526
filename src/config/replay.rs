use crate::counter::CounterParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `mask_replay` tool.
///
/// Frames come either from an explicit `frames` list or from every `.png` in
/// `input_dir`, in file-name order. An explicit list wins when both are set.
#[derive(Clone, Debug, Deserialize)]
pub struct ReplayConfig {
    #[serde(default)]
    pub input_dir: Option<PathBuf>,
    #[serde(default)]
    pub frames: Vec<PathBuf>,
    #[serde(default)]
    pub params: CounterParams,
    /// Debounce interval after each counted crossing.
    #[serde(default)]
    pub cooldown_ms: u64,
    /// Mask values strictly above this are foreground.
    #[serde(default = "default_mask_threshold")]
    pub mask_threshold: u8,
    #[serde(default)]
    pub output: ReplayOutputConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReplayOutputConfig {
    #[serde(rename = "report_json")]
    pub report_json: Option<PathBuf>,
}

fn default_mask_threshold() -> u8 {
    127
}

impl ReplayConfig {
    /// Frame paths in replay order.
    pub fn frame_paths(&self) -> Result<Vec<PathBuf>, String> {
        if !self.frames.is_empty() {
            return Ok(self.frames.clone());
        }
        let dir = self
            .input_dir
            .as_ref()
            .ok_or("Config needs either `frames` or `input_dir`")?;
        let entries = fs::read_dir(dir)
            .map_err(|e| format!("Failed to list {}: {e}", dir.display()))?;
        let mut paths = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| format!("Failed to list {}: {e}", dir.display()))?
                .path();
            let is_png = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
            if is_png {
                paths.push(path);
            }
        }
        paths.sort();
        if paths.is_empty() {
            return Err(format!("No .png masks found in {}", dir.display()));
        }
        Ok(paths)
    }
}

pub fn parse_config(json: &str) -> Result<ReplayConfig, String> {
    serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {e}"))
}

pub fn load_config(path: &Path) -> Result<ReplayConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}
