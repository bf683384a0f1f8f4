#[cfg(test)]
mod tests;

use smallvec::SmallVec;

/// Dimensions of the next mip level: both axes halved, rounding down.
///
/// No validation is performed; a zero input dimension yields zero.
#[must_use]
pub fn mip_size(width: usize, height: usize) -> (usize, usize) {
    (width >> 1, height >> 1)
}

/// Number of times both dimensions can be halved while both stay above 1.
///
/// This is how many levels a full mip chain holds below the base image.
/// Either starting dimension at 1 or 0 gives a chain of 0 levels. The
/// stopping boundary is exact: `mip_levels(5, 5) == 2` (5 → 2 → 1).
#[must_use]
pub fn mip_levels(mut width: usize, mut height: usize) -> usize {
    let mut levels = 0;
    while width > 1 && height > 1 {
        width >>= 1;
        height >>= 1;
        levels += 1;
    }
    levels
}

/// Dimensions of every level a full mip chain would contain, finest first.
///
/// Holds `mip_levels(width, height)` entries; entry `n + 1` is
/// [`mip_size`] of entry `n`, and the base image itself is not included.
/// Lets callers size all chain buffers up front. Stays inline up to 16
/// levels, which covers base images up to 65536×65536.
#[must_use]
pub fn mip_sizes(width: usize, height: usize) -> SmallVec<[(usize, usize); 16]> {
    let mut sizes = SmallVec::new();
    let (mut w, mut h) = (width, height);
    while w > 1 && h > 1 {
        (w, h) = mip_size(w, h);
        sizes.push((w, h));
    }
    sizes
}
