//! Sorting a random vector of integers
//!
//! The quadratic sorts take the vector by value and sort it in place; each
//! timed call gets a fresh unsorted copy.

use rand::Rng;
use rankbench_core::BenchFn;

/// `len` random integers drawn from `[-interval, interval)`
pub fn random_data(len: usize, interval: i64) -> Vec<i64> {
    let interval = interval.max(1);
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen_range(-interval..interval)).collect()
}

/// Plain bubble sort
pub fn bubble_sort(mut arr: Vec<i64>) -> Vec<i64> {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
    arr
}

/// Bubble sort that stops after a pass without swaps
pub fn bubble_sort_early_exit(mut arr: Vec<i64>) -> Vec<i64> {
    let mut n = arr.len();
    while n > 1 {
        let mut swapped = false;
        for j in 0..n - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        n -= 1;
    }
    arr
}

/// Insertion sort
pub fn insertion_sort(mut arr: Vec<i64>) -> Vec<i64> {
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && arr[j - 1] > arr[j] {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
    arr
}

/// Standard library stable sort
pub fn std_sort(mut arr: Vec<i64>) -> Vec<i64> {
    arr.sort();
    arr
}

/// Standard library unstable sort
pub fn std_sort_unstable(mut arr: Vec<i64>) -> Vec<i64> {
    arr.sort_unstable();
    arr
}

/// Every sort, registered under its name
pub fn functions() -> Vec<BenchFn<Vec<i64>>> {
    vec![
        BenchFn::unary("bubble_sort", bubble_sort),
        BenchFn::unary("bubble_sort_early_exit", bubble_sort_early_exit),
        BenchFn::unary("insertion_sort", insertion_sort),
        BenchFn::unary("std_sort", std_sort),
        BenchFn::unary("std_sort_unstable", std_sort_unstable),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorts() -> [(&'static str, fn(Vec<i64>) -> Vec<i64>); 5] {
        [
            ("bubble_sort", bubble_sort),
            ("bubble_sort_early_exit", bubble_sort_early_exit),
            ("insertion_sort", insertion_sort),
            ("std_sort", std_sort),
            ("std_sort_unstable", std_sort_unstable),
        ]
    }

    #[test]
    fn test_random_data_bounds() {
        let data = random_data(500, 10);
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|x| (-10..10).contains(x)));
    }

    #[test]
    fn test_sorts_agree_with_std() {
        let data = random_data(300, 50);
        let mut expected = data.clone();
        expected.sort();

        for (name, sort) in sorts() {
            assert_eq!(sort(data.clone()), expected, "{name}");
        }
    }

    #[test]
    fn test_edge_inputs() {
        for (name, sort) in sorts() {
            assert_eq!(sort(vec![]), Vec::<i64>::new(), "{name}");
            assert_eq!(sort(vec![7]), vec![7], "{name}");
            assert_eq!(sort(vec![2, 2, 1]), vec![1, 2, 2], "{name}");
            assert_eq!(sort(vec![3, -1, 0, -5]), vec![-5, -1, 0, 3], "{name}");
        }
    }

    #[test]
    fn test_functions_match_sorts() {
        let names: Vec<String> = functions().iter().map(|f| f.name().to_string()).collect();
        let expected: Vec<&str> = sorts().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, expected);
    }
}
