//! Multiple-precision arithmetic kernels.
//!
//! These operate on raw little-endian limb slices, leaving sign handling
//! to the `BigInt` wrappers. Both follow The Art of Computer Programming
//! vol. 2, 3rd ed., §4.3.1: multiplication is Algorithm M, division is
//! Algorithm D.

pub(crate) mod division;
pub(crate) mod multiplication;
