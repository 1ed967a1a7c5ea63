//! Reference bubble sort
//!
//! Kept deliberately simple: repeated passes swapping adjacent out-of-order
//! pairs until a pass makes no swap. Stable, in place, O(n²) comparisons.

/// Sorts `items` in non-decreasing order
///
/// # Example
///
/// ```rust
/// use rust_list_heaps::sort::bubble_sort;
///
/// let mut values = [3, 1, 2];
/// bubble_sort(&mut values);
/// assert_eq!(values, [1, 2, 3]);
/// ```
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let mut unsorted_len = items.len();
    while unsorted_len > 1 {
        let mut last_swap = 0;
        for i in 1..unsorted_len {
            if items[i - 1] > items[i] {
                items.swap(i - 1, i);
                last_swap = i;
            }
        }
        // Everything from the last swap onward is already in place.
        unsorted_len = last_swap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_reversed_input() {
        let mut values: Vec<_> = (0..50).rev().collect();
        bubble_sort(&mut values);
        assert_eq!(values, (0..50).collect::<Vec<_>>());
    }

    #[derive(Debug, Clone, Copy)]
    struct Tagged(i32, char);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn test_is_stable() {
        let mut tagged = [Tagged(2, 'a'), Tagged(1, 'b'), Tagged(2, 'c'), Tagged(1, 'd')];
        bubble_sort(&mut tagged);
        let order: Vec<char> = tagged.iter().map(|t| t.1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i32; 0] = [];
        bubble_sort(&mut empty);
        let mut single = [7];
        bubble_sort(&mut single);
        assert_eq!(single, [7]);
    }
}
