/// Per-frame binary foreground grid produced by a motion detector.
///
/// The counter queries the mask many times per tick and assumes each query is
/// an O(1) lookup into an already-materialised grid. Implementations must keep
/// their answers stable for the duration of one tick.
pub trait MotionMask {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// `true` when the cell at column `x`, row `y` belongs to a moving object.
    /// Row 0 is the top of the frame.
    fn is_foreground(&self, x: usize, y: usize) -> bool;
}

impl<M: MotionMask + ?Sized> MotionMask for &M {
    #[inline]
    fn width(&self) -> usize {
        (**self).width()
    }
    #[inline]
    fn height(&self) -> usize {
        (**self).height()
    }
    #[inline]
    fn is_foreground(&self, x: usize, y: usize) -> bool {
        (**self).is_foreground(x, y)
    }
}
