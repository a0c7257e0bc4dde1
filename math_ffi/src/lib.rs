// `#[no_mangle]` trips the unsafe_code lint, so this crate cannot carry
// the kernel's forbid(unsafe_code). No unsafe blocks live here.
#![allow(unsafe_code)]

//! C ABI surface for the frozen Math Kernel v1.0.
//!
//! Exposes the three kernel operations as exported C-convention
//! symbols so a host runtime (CPython extension loader, ctypes, a C
//! program) can call them directly.
//!
//! No numeric logic lives here; every export delegates to the kernel.
//!
//! Width contract: every parameter and return value is a signed 64-bit
//! integer on both sides of the boundary. Hosts must bind the symbols
//! with that exact width; narrowing on the host side changes the
//! wrapping behavior and breaks conformance.

use math_kernel::arithmetic;

/// Kernel version behind this boundary. Hosts check this before
/// trusting the numeric contract.
#[no_mangle]
pub extern "C" fn kernel_version() -> u32 {
    math_kernel::KERNEL_VERSION
}

/// `x * x`, wrapping on i64 overflow.
#[no_mangle]
pub extern "C" fn square(x: i64) -> i64 {
    arithmetic::square(x)
}

/// `x * x * x`, wrapping on i64 overflow.
#[no_mangle]
pub extern "C" fn cube(x: i64) -> i64 {
    arithmetic::cube(x)
}

/// Factorial with the kernel's sentinel contract: negative input
/// returns 0, overflow wraps.
#[no_mangle]
pub extern "C" fn factorial(x: i64) -> i64 {
    arithmetic::factorial(x)
}
