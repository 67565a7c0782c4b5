//! Paging state owned by a single controller instance.

use shared::domain::{PageNumber, PAGE_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagingState {
    pub current_page: PageNumber,
    pub page_size: u32,
    /// `None` until a response reveals a total.
    pub total_items: Option<u64>,
    /// Sequence number of the most recently issued fetch; 0 before the first one.
    pub latest_request: u64,
}

impl Default for PagingState {
    fn default() -> Self {
        Self {
            current_page: PageNumber::FIRST,
            page_size: PAGE_SIZE,
            total_items: None,
            latest_request: 0,
        }
    }
}

impl PagingState {
    /// Marks `page` as the navigation target and returns the sequence number
    /// the resulting response must carry to be applied.
    pub fn begin_request(&mut self, page: PageNumber) -> u64 {
        self.latest_request += 1;
        self.current_page = page;
        self.latest_request
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        self.latest_request == seq
    }

    pub fn total_known(&self) -> bool {
        self.total_items.is_some()
    }

    /// Known totals give `ceil(total / page_size)` (at least 1). Without one,
    /// two pages past the current one are offered speculatively.
    pub fn total_pages(&self) -> u32 {
        match self.total_items {
            Some(total) => {
                let pages = total.div_ceil(u64::from(self.page_size.max(1))).max(1);
                u32::try_from(pages).unwrap_or(u32::MAX)
            }
            None => self.current_page.get().saturating_add(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(current: u32, total: Option<u64>) -> PagingState {
        PagingState {
            current_page: PageNumber::new(current),
            total_items: total,
            ..PagingState::default()
        }
    }

    #[test]
    fn known_total_rounds_up() {
        assert_eq!(state(1, Some(25)).total_pages(), 3);
        assert_eq!(state(1, Some(30)).total_pages(), 3);
        assert_eq!(state(1, Some(31)).total_pages(), 4);
    }

    #[test]
    fn known_zero_total_still_has_one_page() {
        assert_eq!(state(1, Some(0)).total_pages(), 1);
    }

    #[test]
    fn unknown_total_offers_two_pages_ahead() {
        assert_eq!(state(2, None).total_pages(), 4);
        assert_eq!(state(1, None).total_pages(), 3);
    }

    #[test]
    fn each_request_gets_a_fresh_sequence_number() {
        let mut paging = PagingState::default();
        let first = paging.begin_request(PageNumber::new(2));
        let second = paging.begin_request(PageNumber::new(3));
        assert!(second > first);
        assert!(!paging.is_latest(first));
        assert!(paging.is_latest(second));
        assert_eq!(paging.current_page, PageNumber::new(3));
    }
}
