//! Mipmap downsampling kernels for 2D textures.
//!
//! Generates one mip level at a time from caller-supplied buffers: each
//! output pixel reduces a 2×2 block of source pixels by average, minimum,
//! maximum, or both extremes in a single pass. Two pixel encodings are
//! supported, `u32` pixels packed as four independent 8-bit channels
//! (32-bit color data, byte-order agnostic) and single-channel `f32`
//! pixels (depth data).
//!
//! The kernels never allocate and never retain buffer references. Callers
//! own every buffer and size them with [`mip_size`], [`mip_levels`], or
//! [`mip_sizes`] before downsampling; a full chain is built by looping and
//! feeding each level's output back in as the next level's input. Odd
//! source dimensions round down, dropping the trailing row or column.

// Performance
#![warn(clippy::imprecise_flops)]
#![warn(clippy::inline_always)]
#![warn(clippy::large_types_passed_by_value)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::redundant_clone)]
#![warn(clippy::suboptimal_flops)]
// Readability/Code Intention
#![warn(clippy::checked_conversions)]
#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::match_bool)]
#![warn(clippy::needless_continue)]
#![warn(clippy::range_plus_one)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::tests_outside_test_module)]
// Correctness/Safety
#![warn(clippy::dbg_macro)]
#![deny(clippy::expl_impl_clone_on_copy)]
#![warn(clippy::mixed_read_write_in_expression)]
#![warn(clippy::suspicious_operation_groupings)]
#![warn(clippy::unwrap_used)]
// Annoyances
#![allow(clippy::needless_range_loop)]
#![allow(clippy::uninlined_format_args)]

mod dims;
mod pixel;
mod reduce;

pub use dims::{mip_levels, mip_size, mip_sizes};
pub use pixel::Pixel;
pub use reduce::{reduce_average, reduce_max, reduce_min, reduce_min_max};
