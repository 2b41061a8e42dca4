#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome<T> {
    /// Exact element found.
    Found(T),
    /// No exact match; carries the smallest element greater than the target
    /// seen during the search, or None when the target exceeds every element.
    NotFound { upper_bound: Option<T> },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchReport<T> {
    /// Number of bisection steps performed.
    pub iterations: usize,
    pub outcome: Outcome<T>,
}

/// Bisect an ascending slice for `target`, counting iterations and tracking the
/// tightest upper bound observed when the target is absent.
///
/// The slice must be sorted ascending; the result is unspecified otherwise.
pub fn bounded_search<T: PartialOrd + Copy>(values: &[T], target: T) -> SearchReport<T> {
    let mut left: isize = 0;
    let mut right: isize = values.len() as isize - 1;
    let mut iterations = 0;
    let mut upper_bound: Option<T> = None;

    while left <= right {
        iterations += 1;
        let mid = (left + right) / 2;
        let value = values[mid as usize];

        if value == target {
            return SearchReport {
                iterations,
                outcome: Outcome::Found(value),
            };
        } else if value < target {
            left = mid + 1;
        } else {
            // value > target: the midpoint is the tightest bound so far
            upper_bound = Some(value);
            right = mid - 1;
        }
    }

    SearchReport {
        iterations,
        outcome: Outcome::NotFound { upper_bound },
    }
}
