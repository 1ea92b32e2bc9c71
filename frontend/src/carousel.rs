use std::ops::Range;
use std::rc::Rc;

use yew::functional::Reducible;

use crate::config::{BREAKPOINT_LARGE, BREAKPOINT_MEDIUM};

/// Index after `index` in a ring of `len` slots. Stays put on an empty ring.
pub fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 {
        return index;
    }
    (index + 1) % len
}

/// Index before `index` in a ring of `len` slots. Stays put on an empty ring.
pub fn wrap_prev(index: usize, len: usize) -> usize {
    if len == 0 {
        return index;
    }
    (index % len + len - 1) % len
}

/// Cards per page for a given viewport width: 1 on phones, 2 on tablets, 3 on desktop.
pub fn items_per_page(viewport_width: f64) -> usize {
    if viewport_width >= BREAKPOINT_LARGE {
        3
    } else if viewport_width >= BREAKPOINT_MEDIUM {
        2
    } else {
        1
    }
}

/// Page cursor over a fixed-length collection.
///
/// `page` always stays below `page_count()`, or at 0 when the collection is
/// empty. Changing the page size clamps the cursor instead of letting it dangle
/// past the last page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    len: usize,
    per_page: usize,
    page: usize,
}

impl Pager {
    pub fn new(len: usize, per_page: usize) -> Self {
        Self {
            len,
            per_page: per_page.max(1),
            page: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.per_page)
    }

    pub fn next(&mut self) {
        self.page = wrap_next(self.page, self.page_count());
    }

    pub fn prev(&mut self) {
        self.page = wrap_prev(self.page, self.page_count());
    }

    pub fn set_per_page(&mut self, per_page: usize) {
        self.per_page = per_page.max(1);
        let total = self.page_count();
        if self.page >= total {
            self.page = total.saturating_sub(1);
        }
    }

    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.page * self.per_page).min(self.len);
        let end = (start + self.per_page).min(self.len);
        start..end
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }
}

pub enum PagerAction {
    Next,
    Prev,
    Resize(usize),
}

impl Reducible for Pager {
    type Action = PagerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut pager = (*self).clone();
        match action {
            PagerAction::Next => pager.next(),
            PagerAction::Prev => pager.prev(),
            PagerAction::Resize(per_page) => {
                if per_page.max(1) == pager.per_page {
                    return self;
                }
                pager.set_per_page(per_page);
            }
        }
        Rc::new(pager)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_step_at_640_and_1024() {
        assert_eq!(items_per_page(320.0), 1);
        assert_eq!(items_per_page(639.9), 1);
        assert_eq!(items_per_page(640.0), 2);
        assert_eq!(items_per_page(1023.0), 2);
        assert_eq!(items_per_page(1024.0), 3);
        assert_eq!(items_per_page(1920.0), 3);
    }

    #[test]
    fn seven_items_three_per_page() {
        let items: Vec<u32> = (0..7).collect();
        let mut pager = Pager::new(items.len(), 3);
        assert_eq!(pager.page_count(), 3);
        assert_eq!(pager.visible(&items), &[0, 1, 2]);

        pager.prev();
        assert_eq!(pager.page(), 2);
        assert_eq!(pager.visible(&items), &[6]);

        pager.next();
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn next_cycles_back_to_start() {
        for len in 0..20 {
            for per_page in 1..=3 {
                let mut pager = Pager::new(len, per_page);
                pager.next();
                let start = pager.page();
                for _ in 0..pager.page_count() {
                    pager.next();
                }
                assert_eq!(pager.page(), start, "len={len} per_page={per_page}");
            }
        }
    }

    #[test]
    fn empty_collection_is_a_no_op() {
        let mut pager = Pager::new(0, 3);
        assert_eq!(pager.page_count(), 0);
        pager.next();
        pager.prev();
        assert_eq!(pager.page(), 0);
        assert!(pager.visible::<u8>(&[]).is_empty());
        pager.set_per_page(1);
        assert_eq!(pager.page(), 0);
    }

    #[test]
    fn shrinking_page_count_clamps_page() {
        let mut pager = Pager::new(19, 1);
        for _ in 0..18 {
            pager.next();
        }
        assert_eq!(pager.page(), 18);

        pager.set_per_page(3);
        assert_eq!(pager.page_count(), 7);
        assert_eq!(pager.page(), 6);
        assert_eq!(pager.visible_range(), 18..19);

        pager.set_per_page(2);
        assert_eq!(pager.page(), 6);
    }

    #[test]
    fn zero_per_page_is_treated_as_one() {
        let mut pager = Pager::new(4, 0);
        assert_eq!(pager.per_page(), 1);
        pager.set_per_page(0);
        assert_eq!(pager.page_count(), 4);
    }

    #[test]
    fn reducer_keeps_state_on_same_page_size() {
        let pager = Rc::new(Pager::new(10, 2));
        let same = pager.clone().reduce(PagerAction::Resize(2));
        assert!(Rc::ptr_eq(&pager, &same));

        let moved = pager.reduce(PagerAction::Next).reduce(PagerAction::Resize(3));
        assert_eq!(moved.page(), 1);
        assert_eq!(moved.per_page(), 3);
    }

    #[test]
    fn wrap_helpers_match_modulo_arithmetic() {
        assert_eq!(wrap_next(5, 6), 0);
        assert_eq!(wrap_prev(0, 6), 5);
        assert_eq!(wrap_prev(3, 6), 2);
        assert_eq!(wrap_next(0, 0), 0);
        assert_eq!(wrap_prev(0, 0), 0);
    }
}
