#![forbid(unsafe_code)]

/// Kernel v1: numeric contract is frozen. Behavioral changes require kernel_v2.
pub const KERNEL_VERSION: u32 = 1;

pub mod arithmetic;
pub mod conformance;
pub mod hashing;
