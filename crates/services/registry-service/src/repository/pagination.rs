//! Page/page-size normalisation and slicing.

use domain::{Page, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// Resolve the requested page parameters: a page below 1 becomes 1 and a
/// page size below 1 becomes the default. No upper bound is applied.
fn resolve(page: i32, page_size: i32) -> (i32, i32) {
    let page = if page < 1 { DEFAULT_PAGE_NUMBER } else { page };
    let page_size = if page_size < 1 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    (page, page_size)
}

/// Cut one page out of an already filtered and sorted result set.
///
/// A page starting past the end is empty, not an error.
pub fn paginate<T>(items: Vec<T>, page: i32, page_size: i32) -> Page<T> {
    let (page, page_size) = resolve(page, page_size);
    let total = items.len();

    // 64-bit arithmetic keeps huge page numbers from overflowing.
    let start = (i64::from(page) - 1) * i64::from(page_size);
    let start = usize::try_from(start).unwrap_or(usize::MAX);

    let items = if start >= total {
        Vec::new()
    } else {
        let end = start.saturating_add(page_size as usize).min(total);
        items.into_iter().skip(start).take(end - start).collect()
    };

    Page {
        items,
        total: i32::try_from(total).unwrap_or(i32::MAX),
        page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Vec<u32> {
        vec![1, 2, 3, 4, 5]
    }

    #[test]
    fn test_first_page() {
        let page = paginate(five(), 1, 3);
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!((page.total, page.page, page.page_size), (5, 1, 3));
    }

    #[test]
    fn test_partial_last_page() {
        let page = paginate(five(), 2, 3);
        assert_eq!(page.items, vec![4, 5]);
        assert_eq!((page.total, page.page, page.page_size), (5, 2, 3));
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = paginate(five(), 3, 3);
        assert!(page.items.is_empty());
        assert_eq!((page.total, page.page, page.page_size), (5, 3, 3));
    }

    #[test]
    fn test_invalid_parameters_are_coerced() {
        let page = paginate(five(), 0, 0);
        assert_eq!(page.items, five());
        assert_eq!((page.page, page.page_size), (1, 10));

        let page = paginate(five(), -4, -1);
        assert_eq!((page.page, page.page_size), (1, 10));
    }

    #[test]
    fn test_no_upper_bound_on_page_size() {
        let page = paginate(five(), 1, 1000);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.page_size, 1000);
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let page = paginate(five(), i32::MAX, i32::MAX);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_empty_input() {
        let page = paginate(Vec::<u32>::new(), 1, 10);
        assert!(page.items.is_empty());
        assert_eq!((page.total, page.page, page.page_size), (0, 1, 10));
    }
}
