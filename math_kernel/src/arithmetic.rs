/// Math Kernel v1: Arithmetic Primitives
///
/// All values: plain i64, passed and returned by value.
/// No state. No I/O. Every function is total and deterministic.
///
/// Overflow policy: the reference implementation silently wraps, so the
/// sentinel-returning functions below use `wrapping_mul` and wrap in every
/// build profile. The `checked_*` variants never wrap.

use thiserror::Error;

/// Error kind for the checked variants.
///
/// The plain functions never produce this: `factorial` signals negative
/// input with the sentinel `0`, and overflow wraps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("factorial is undefined for negative input {0}")]
    NegativeInput(i64),
    #[error("{op}({input}) overflows i64")]
    Overflow { op: &'static str, input: i64 },
}

/// `x * x`, wrapping on i64 overflow.
pub fn square(x: i64) -> i64 {
    x.wrapping_mul(x)
}

/// `x * x * x`, wrapping on i64 overflow. Sign parity is preserved:
/// odd powers of a negative input stay negative (absent wrap).
pub fn cube(x: i64) -> i64 {
    x.wrapping_mul(x).wrapping_mul(x)
}

/// Factorial with the kernel's sentinel contract:
///   x < 0        -> 0   (sentinel: out-of-domain input, not an error)
///   x == 0, 1    -> 1
///   x >= 2       -> 2 * 3 * ... * x, wrapping on i64 overflow
///
/// Iterative accumulator, not recursion: stack depth is constant in x.
/// `0` is never a genuine factorial of a non-negative input, so callers
/// can read it unambiguously as "negative input supplied".
pub fn factorial(x: i64) -> i64 {
    if x < 0 {
        return 0;
    }
    let mut acc: i64 = 1;
    let mut k: i64 = 2;
    while k <= x {
        acc = acc.wrapping_mul(k);
        k += 1;
    }
    acc
}

/// `x * x` with overflow detection.
pub fn checked_square(x: i64) -> Result<i64, ArithmeticError> {
    x.checked_mul(x)
        .ok_or(ArithmeticError::Overflow { op: "square", input: x })
}

/// `x * x * x` with overflow detection.
pub fn checked_cube(x: i64) -> Result<i64, ArithmeticError> {
    x.checked_mul(x)
        .and_then(|xx| xx.checked_mul(x))
        .ok_or(ArithmeticError::Overflow { op: "cube", input: x })
}

/// Factorial with a distinct error per failure mode instead of the
/// sentinel. Strictly additive: the plain `factorial` keeps the frozen
/// v1 contract.
pub fn checked_factorial(x: i64) -> Result<i64, ArithmeticError> {
    if x < 0 {
        return Err(ArithmeticError::NegativeInput(x));
    }
    let mut acc: i64 = 1;
    let mut k: i64 = 2;
    while k <= x {
        acc = acc
            .checked_mul(k)
            .ok_or(ArithmeticError::Overflow { op: "factorial", input: x })?;
        k += 1;
    }
    Ok(acc)
}
