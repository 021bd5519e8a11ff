//! Four ways to compute the n-th Fibonacci number

use rankbench_core::BenchFn;

/// Closed form (Binet); exact while `f64` holds the result, up to about n = 70
pub fn fib_equation(n: u64) -> u64 {
    let sqrt5 = 5f64.sqrt();
    let k1 = (1.0 + sqrt5) / 2.0;
    let k2 = (1.0 - sqrt5) / 2.0;
    let n = n as i32;
    ((k1.powi(n) - k2.powi(n)) / sqrt5).round() as u64
}

/// Iterative, linear time
pub fn fib_for(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    let (mut n1, mut n2) = (0u64, 1u64);
    for _ in 0..n {
        let nth = n1.wrapping_add(n2);
        n1 = n2;
        n2 = nth;
    }
    n1
}

/// Naive recursion, exponential time
pub fn fib_recursive(n: u64) -> u64 {
    if n <= 1 {
        n
    } else {
        fib_recursive(n - 1).wrapping_add(fib_recursive(n - 2))
    }
}

/// Recursion with a memo table
pub fn fib_recursive_memo(n: u64) -> u64 {
    fn step(n: usize, memo: &mut [u64]) -> u64 {
        if n <= 1 {
            return n as u64;
        }
        if memo[n] == 0 {
            memo[n] = step(n - 1, memo).wrapping_add(step(n - 2, memo));
        }
        memo[n]
    }

    let n = n as usize;
    let mut memo = vec![0u64; n + 1];
    step(n, &mut memo)
}

/// The four implementations, registered under their names
pub fn functions() -> Vec<BenchFn<u64>> {
    vec![
        BenchFn::unary("fib_equation", fib_equation),
        BenchFn::unary("fib_for", fib_for),
        BenchFn::unary("fib_recursive", fib_recursive),
        BenchFn::unary("fib_recursive_memo", fib_recursive_memo),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: [u64; 13] = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

    #[test]
    fn test_small_values() {
        for (n, expected) in FIRST.iter().enumerate() {
            let n = n as u64;
            assert_eq!(fib_equation(n), *expected, "fib_equation({n})");
            assert_eq!(fib_for(n), *expected, "fib_for({n})");
            assert_eq!(fib_recursive(n), *expected, "fib_recursive({n})");
            assert_eq!(fib_recursive_memo(n), *expected, "fib_recursive_memo({n})");
        }
    }

    #[test]
    fn test_implementations_agree() {
        for n in 0..=50 {
            let expected = fib_for(n);
            assert_eq!(fib_equation(n), expected, "n = {n}");
            assert_eq!(fib_recursive_memo(n), expected, "n = {n}");
        }
        assert_eq!(fib_recursive(25), fib_for(25));
        assert_eq!(fib_for(50), 12_586_269_025);
    }

    #[test]
    fn test_functions_are_registered_in_order() {
        let names: Vec<String> = functions().iter().map(|f| f.name().to_string()).collect();
        assert_eq!(
            names,
            ["fib_equation", "fib_for", "fib_recursive", "fib_recursive_memo"]
        );
    }
}
