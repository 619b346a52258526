use super::traits::MotionMask;

/// Borrowed 8-bit mask view. A cell is foreground when its value is strictly
/// above `threshold` (binary masks use 0/255 with the default threshold 0).
#[derive(Clone, Debug)]
pub struct MaskU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub threshold: u8,
    pub data: &'a [u8],
}

impl<'a> MaskU8<'a> {
    /// Tightly packed binary mask.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            threshold: 0,
            data,
        }
    }

    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> MotionMask for MaskU8<'a> {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        x < self.w && y < self.h && self.get(x, y) > self.threshold
    }
}
