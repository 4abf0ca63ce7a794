use super::view::ViewState;

/// One page of an ordered view. `page` is 1-based and already clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub total_pages: usize,
    pub start_index: usize,
    /// `start_index + page_size`, not clamped to `total_records`
    pub end_index: usize,
}

pub fn paginate(total_records: usize, page: usize, page_size: usize) -> PageWindow {
    let page_size = page_size.max(1);
    let total_pages = total_records.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start_index = (page - 1) * page_size;
    PageWindow {
        page,
        page_size,
        total_records,
        total_pages,
        start_index,
        end_index: start_index + page_size,
    }
}

impl PageWindow {
    pub fn display_end(&self) -> usize {
        self.end_index.min(self.total_records)
    }

    /// `"101-120 / 120"`, or `"0-0 / 0"` for an empty view.
    pub fn label(&self) -> String {
        if self.total_records == 0 {
            return "0-0 / 0".to_string();
        }
        format!(
            "{}-{} / {}",
            self.start_index + 1,
            self.display_end(),
            self.total_records
        )
    }

    pub fn slice<'a, T>(&self, ordered: &'a [T]) -> &'a [T] {
        let start = self.start_index.min(ordered.len());
        let end = self.display_end().min(ordered.len());
        &ordered[start..end]
    }

    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// No-op on the first page.
pub fn go_previous(view: &mut ViewState, total_records: usize) {
    let window = paginate(total_records, view.page, view.page_size);
    view.page = if window.is_first() {
        window.page
    } else {
        window.page - 1
    };
}

/// No-op on the last page.
pub fn go_next(view: &mut ViewState, total_records: usize) {
    let window = paginate(total_records, view.page, view.page_size);
    view.page = if window.is_last() {
        window.page
    } else {
        window.page + 1
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_third_page_of_120() {
        let window = paginate(120, 3, 50);
        assert_eq!(window.start_index, 100);
        assert_eq!(window.end_index, 150);
        assert_eq!(window.display_end(), 120);
        assert_eq!(window.total_pages, 3);
        assert_eq!(window.label(), "101-120 / 120");
    }

    #[test]
    fn test_total_pages_has_a_floor_of_one() {
        for (total, expected) in [(0, 1), (1, 1), (50, 1), (51, 2), (100, 2), (101, 3)] {
            assert_eq!(paginate(total, 1, 50).total_pages, expected, "total={}", total);
        }
        assert_eq!(paginate(0, 1, 50).label(), "0-0 / 0");
    }

    #[test]
    fn test_page_is_clamped() {
        assert_eq!(paginate(10, 7, 5).page, 2);
        assert_eq!(paginate(10, 0, 5).page, 1);
    }

    #[test]
    fn test_slice() {
        let rows: Vec<usize> = (0..12).collect();
        assert_eq!(paginate(12, 3, 5).slice(&rows), &[10, 11]);
        assert!(paginate(0, 1, 5).slice(&rows[..0]).is_empty());
    }

    #[test]
    fn test_boundaries_are_no_ops() {
        let mut view = ViewState::new(50, None);
        go_previous(&mut view, 120);
        assert_eq!(view.page, 1);
        go_next(&mut view, 120);
        go_next(&mut view, 120);
        go_next(&mut view, 120);
        assert_eq!(view.page, 3);
        go_previous(&mut view, 120);
        assert_eq!(view.page, 2);
    }
}
