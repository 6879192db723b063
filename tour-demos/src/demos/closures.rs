//! Closures, decorators and memoization.

use num_bigint::BigUint;
use tour_kit::{Demo, DemoError, Transcript, decorate};
use tour_kit_macros::AutoRegisterDemo;

use crate::utils::closure::{encloser, get_text, h1};
use crate::utils::memo::memoise;

#[derive(AutoRegisterDemo)]
#[demo(name = "closures", order = 3, tags = ["functions", "closures"])]
pub struct ClosuresDemo;

/// Index of the Fibonacci number checked at the end of the demo.
pub const FIB_INDEX: u32 = 100;
/// `fib(100)`, past the range of `u64`.
pub const FIB_EXPECTED: u128 = 354_224_848_179_261_915_075;

#[decorate(h1)]
fn decorated_text(name: &str) -> String {
    format!("Hello, {name}!")
}

#[decorate(h1)]
#[decorate(h1)]
fn twice_decorated_text(name: &str) -> String {
    format!("Hello, {name}!")
}

/// Memoized recursive Fibonacci, exact for any index.
pub fn fibonacci(n: u32) -> BigUint {
    let fib = memoise(|fib: &dyn Fn(&u32) -> BigUint, n: &u32| match *n {
        0 => BigUint::from(0u8),
        1 => BigUint::from(1u8),
        n => fib(&(n - 1)) + fib(&(n - 2)),
    });
    fib.get(&n)
}

fn check_fibonacci() -> anyhow::Result<()> {
    let actual = fibonacci(FIB_INDEX);
    tracing::debug!(%actual, "fib({FIB_INDEX})");
    anyhow::ensure!(
        actual == BigUint::from(FIB_EXPECTED),
        "fib({FIB_INDEX}) = {actual}, expected {FIB_EXPECTED}"
    );
    Ok(())
}

impl Demo for ClosuresDemo {
    fn run(transcript: &mut Transcript) -> Result<(), DemoError> {
        let closure1 = encloser(1);
        transcript.line(closure1(1));

        let closure2 = encloser(2);
        transcript.line(closure2(1));

        let get_text = h1(get_text);
        transcript.line(get_text("Joe"));

        transcript.line(decorated_text("Joe"));
        transcript.line(twice_decorated_text("Joe"));

        check_fibonacci().map_err(|e| DemoError::AssertionFailed(e.to_string()))
    }
}
