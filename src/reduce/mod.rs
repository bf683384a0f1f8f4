
use crate::dims::mip_size;
use crate::pixel::Pixel;

/// Downsamples one mip level by averaging each 2×2 block of source pixels.
///
/// Packed `u32` pixels average each 8-bit channel independently with floor
/// division; `f32` pixels average directly. This is the traditional mipmap
/// reduction for color textures.
///
/// Odd source dimensions round down: the trailing row or column is never
/// read. If the output would be zero-sized (a source dimension of 0 or 1),
/// the call returns without touching `dest`.
///
/// # Parameters
/// - `dest`: destination buffer, at least `mip_size(width, height)` pixels
/// - `src`: source image buffer, at least `width * height` pixels
/// - `width`: width of the source image in pixels
/// - `height`: height of the source image in pixels
///
/// # Panics
/// If either buffer is smaller than its image.
pub fn reduce_average<T: Pixel>(dest: &mut [T], src: &[T], width: usize, height: usize) {
    let (new_width, new_height) = mip_size(width, height);
    if new_width == 0 || new_height == 0 {
        return;
    }
    // Check the buffer contracts once, before the loops.
    assert!(src.len() >= width * height);
    assert!(dest.len() >= new_width * new_height);

    reduce_blocks(src, width, new_width, new_height, |i, a, b, c, d| {
        dest[i] = T::block_average(a, b, c, d);
    });
}

/// Downsamples one mip level keeping the smallest sample of each 2×2 block.
///
/// Same contract as [`reduce_average`]. Intended for depth data, where the
/// nearest value of a footprint is the conservative choice.
pub fn reduce_min<T: Pixel>(dest: &mut [T], src: &[T], width: usize, height: usize) {
    let (new_width, new_height) = mip_size(width, height);
    if new_width == 0 || new_height == 0 {
        return;
    }
    assert!(src.len() >= width * height);
    assert!(dest.len() >= new_width * new_height);

    reduce_blocks(src, width, new_width, new_height, |i, a, b, c, d| {
        dest[i] = T::block_min(a, b, c, d);
    });
}

/// Downsamples one mip level keeping the largest sample of each 2×2 block.
///
/// Same contract as [`reduce_average`].
pub fn reduce_max<T: Pixel>(dest: &mut [T], src: &[T], width: usize, height: usize) {
    let (new_width, new_height) = mip_size(width, height);
    if new_width == 0 || new_height == 0 {
        return;
    }
    assert!(src.len() >= width * height);
    assert!(dest.len() >= new_width * new_height);

    reduce_blocks(src, width, new_width, new_height, |i, a, b, c, d| {
        dest[i] = T::block_max(a, b, c, d);
    });
}

/// Downsamples one mip level into both extremes of each 2×2 block at once.
///
/// Writes the per-block (per-channel for packed pixels) minimum to
/// `min_dest` and maximum to `max_dest` in a single pass over the source,
/// sharing comparisons that separate [`reduce_min`] and [`reduce_max`]
/// calls would repeat. Both destination buffers follow the
/// [`reduce_average`] contract.
pub fn reduce_min_max<T: Pixel>(
    min_dest: &mut [T],
    max_dest: &mut [T],
    src: &[T],
    width: usize,
    height: usize,
) {
    let (new_width, new_height) = mip_size(width, height);
    if new_width == 0 || new_height == 0 {
        return;
    }
    assert!(src.len() >= width * height);
    assert!(min_dest.len() >= new_width * new_height);
    assert!(max_dest.len() >= new_width * new_height);

    reduce_blocks(src, width, new_width, new_height, |i, a, b, c, d| {
        let (lo, hi) = T::block_min_max(a, b, c, d);
        min_dest[i] = lo;
        max_dest[i] = hi;
    });
}

/// Walks the 2×2 source blocks of one downsampling pass, handing each
/// block to `reduce` along with the output index it maps to.
///
/// Shared by every kernel; the policy is monomorphized in, so the hot loop
/// carries no per-pixel dispatch.
fn reduce_blocks<T: Pixel>(
    src: &[T],
    width: usize,
    new_width: usize,
    new_height: usize,
    mut reduce: impl FnMut(usize, T, T, T, T),
) {
    for y in 0..new_height {
        let row0 = &src[width * (2 * y)..];
        let row1 = &src[width * (2 * y + 1)..];
        let out_row = y * new_width;
        for x in 0..new_width {
            let a = row0[2 * x];
            let b = row1[2 * x];
            let c = row0[2 * x + 1];
            let d = row1[2 * x + 1];
            reduce(out_row + x, a, b, c, d);
        }
    }
}
