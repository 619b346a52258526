//! I/O helpers for motion masks and JSON.
//!
//! - `load_mask_image`: read a PNG into an owned 8-bit mask buffer.
//! - `write_json_file`: pretty-print a counter report or replay summary to disk.
use super::{MaskU8, MotionMask};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Owned 8-bit mask buffer with a foreground threshold and borrowed view
/// conversion.
#[derive(Clone, Debug)]
pub struct GrayMaskU8 {
    width: usize,
    height: usize,
    threshold: u8,
    data: Vec<u8>,
}

impl GrayMaskU8 {
    /// Construct an owned mask given raw row-major bytes.
    pub fn new(width: usize, height: usize, threshold: u8, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height, "mask buffer size mismatch");
        Self {
            width,
            height,
            threshold,
            data,
        }
    }

    /// Borrow as a read-only `MaskU8` view
    pub fn as_view(&self) -> MaskU8<'_> {
        MaskU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            threshold: self.threshold,
            data: &self.data,
        }
    }

    /// Number of foreground cells, used for replay diagnostics.
    pub fn foreground_count(&self) -> usize {
        self.data.iter().filter(|&&v| v > self.threshold).count()
    }
}

impl MotionMask for GrayMaskU8 {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.data[y * self.width + x] > self.threshold
    }
}

/// Load a mask image from disk, converting to 8-bit grayscale.
pub fn load_mask_image(path: &Path, threshold: u8) -> Result<GrayMaskU8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.into_raw();
    Ok(GrayMaskU8::new(width, height, threshold, data))
}

/// Writes a [`CounterReport`](crate::CounterReport) or replay summary as
/// pretty JSON, creating missing parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize report {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write report {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create report dir {}: {e}", dir.display())),
        _ => Ok(()),
    }
}
