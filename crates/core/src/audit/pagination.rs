//! Client-side pagination math
//!
//! Pagination runs purely over the in-memory result set: page N of size S
//! shows records `[(N-1)*S, N*S)`. Pages are 1-based; page 1 is also used
//! for an empty result set.

/// Number of pages needed for `len` records at `page_size` per page
///
/// An empty set still occupies one (empty) page so the view always has a
/// valid cursor.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(page_size)
    }
}

/// Half-open index range `[start, end)` of the records on `page`
///
/// A page past the end yields an empty range; callers prevent that by
/// disabling navigation rather than clamping.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> (usize, usize) {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = (start + page_size).min(len);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pages_and_remainder() {
        // 23 records at 10 per page: pages 1-2 full, page 3 holds 21..23.
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(page_bounds(1, 10, 23), (0, 10));
        assert_eq!(page_bounds(2, 10, 23), (10, 20));
        assert_eq!(page_bounds(3, 10, 23), (20, 23));
    }

    #[test]
    fn exact_multiple_has_no_ragged_page() {
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(page_bounds(2, 10, 20), (10, 20));
    }

    #[test]
    fn empty_set_is_one_empty_page() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(page_bounds(1, 10, 0), (0, 0));
    }

    #[test]
    fn out_of_range_page_is_empty() {
        assert_eq!(page_bounds(5, 10, 23), (23, 23));
    }

    #[test]
    fn single_short_page() {
        assert_eq!(total_pages(7, 10), 1);
        assert_eq!(page_bounds(1, 10, 7), (0, 7));
    }
}
