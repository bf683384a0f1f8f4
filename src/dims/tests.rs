#![allow(clippy::unwrap_used, reason = "allow in test files")]

use quickcheck_macros::quickcheck;

use super::*;

#[test]
fn mip_size_halves_rounding_down() {
    assert_eq!(mip_size(4, 4), (2, 2));
    assert_eq!(mip_size(5, 5), (2, 2));
    assert_eq!(mip_size(1, 7), (0, 3));
    assert_eq!(mip_size(0, 0), (0, 0));
    assert_eq!(mip_size(1920, 1080), (960, 540));
}

#[quickcheck]
fn mip_size_is_floor_halving(width: usize, height: usize) -> bool {
    mip_size(width, height) == (width / 2, height / 2)
}

#[test]
fn mip_levels_worked_examples() {
    assert_eq!(mip_levels(1, 1), 0);
    assert_eq!(mip_levels(4, 4), 2);
    // 5 -> 2 -> 1; the chain stops once a dimension reaches 1.
    assert_eq!(mip_levels(5, 5), 2);
    assert_eq!(mip_levels(0, 64), 0);
    assert_eq!(mip_levels(64, 1), 0);
    assert_eq!(mip_levels(2, 2), 1);
    assert_eq!(mip_levels(1024, 1024), 10);
    // The narrow axis limits the chain.
    assert_eq!(mip_levels(1024, 2), 1);
}

#[quickcheck]
fn mip_levels_recurses_on_halved_dimensions(width: u16, height: u16) -> bool {
    let (w, h) = (usize::from(width), usize::from(height));
    if w > 1 && h > 1 {
        mip_levels(w, h) == 1 + mip_levels(w / 2, h / 2)
    } else {
        mip_levels(w, h) == 0
    }
}

#[test]
fn mip_sizes_lists_whole_chain() {
    let sizes = mip_sizes(640, 480);
    assert_eq!(sizes.len(), mip_levels(640, 480));
    assert_eq!(sizes[0], (320, 240));
    assert_eq!(sizes.last(), Some(&(2, 1)));

    assert!(mip_sizes(1, 1).is_empty());
    assert!(mip_sizes(0, 512).is_empty());
}

#[quickcheck]
fn mip_sizes_halves_level_by_level(width: u16, height: u16) -> bool {
    let (mut w, mut h) = (usize::from(width), usize::from(height));
    let sizes = mip_sizes(w, h);
    if sizes.len() != mip_levels(w, h) {
        return false;
    }
    for &(sw, sh) in &sizes {
        if (sw, sh) != mip_size(w, h) {
            return false;
        }
        (w, h) = (sw, sh);
    }
    true
}
