/// Binary mask with the listed bands filled over the full height.
///
/// Bands follow the counter layout: band `offset` covers columns
/// `line_x + offset * sparsity .. line_x + (offset + 1) * sparsity`.
pub fn band_mask(
    width: usize,
    height: usize,
    line_x: usize,
    sparsity: usize,
    offsets: &[i8],
) -> Vec<u8> {
    assert!(width > 0 && height > 0, "mask dimensions must be positive");
    let mut mask = vec![0u8; width * height];
    for &offset in offsets {
        let start = line_x as isize + offset as isize * sparsity as isize;
        assert!(start >= 0, "band {offset} starts left of the mask");
        let start = start as usize;
        let end = (start + sparsity).min(width);
        for y in 0..height {
            mask[y * width + start..y * width + end].fill(255);
        }
    }
    mask
}

/// Binary mask with a solid rectangle `[x0, x1) x [y0, y1)` clipped to the mask.
pub fn rect_mask(
    width: usize,
    height: usize,
    x0: usize,
    x1: usize,
    y0: usize,
    y1: usize,
) -> Vec<u8> {
    let mut mask = vec![0u8; width * height];
    for y in y0.min(height)..y1.min(height) {
        mask[y * width + x0.min(width)..y * width + x1.min(width)].fill(255);
    }
    mask
}
