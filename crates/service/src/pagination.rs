//! Offset pagination shared by the list endpoints.
//!
//! The cursor is the number of rows already consumed; the response carries
//! the next cursor only while more pages exist.

use serde::{Deserialize, Serialize};

/// Pagination inputs as they arrive on the query string.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct PageQuery {
    pub limit: u64,
    #[serde(default)]
    pub cursor: Option<u64>,
}

/// Response metadata for one page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<u64>,
    pub has_next_page: bool,
    pub total_items: u64,
    pub current_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub metadata: PageMeta,
}

impl PageQuery {
    pub fn skip(&self) -> u64 {
        self.cursor.unwrap_or(0)
    }

    /// Items per page, never zero.
    pub fn take(&self) -> u64 {
        self.limit.max(1)
    }

    /// Compute metadata for `total` matching rows. The cursor is absent on
    /// the terminal page.
    pub fn meta(&self, total: u64) -> PageMeta {
        let skip = self.skip();
        let limit = self.take();
        let next = skip + limit;
        let has_next_page = next < total;
        PageMeta {
            cursor: has_next_page.then_some(next),
            has_next_page,
            total_items: total,
            current_page: skip / limit + 1,
            total_pages: total.div_ceil(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(limit: u64, cursor: Option<u64>) -> PageQuery {
        PageQuery { limit, cursor }
    }

    #[test]
    fn has_next_page_matches_offset_math() {
        for total in 0..40u64 {
            for limit in 1..7u64 {
                for skip in 0..40u64 {
                    let meta = q(limit, Some(skip)).meta(total);
                    assert_eq!(meta.has_next_page, skip + limit < total);
                }
            }
        }
    }

    #[test]
    fn first_page_defaults() {
        let meta = q(10, None).meta(25);
        assert_eq!(meta.cursor, Some(10));
        assert!(meta.has_next_page);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.total_items, 25);
    }

    #[test]
    fn terminal_page_has_no_cursor() {
        let meta = q(10, Some(20)).meta(25);
        assert_eq!(meta.cursor, None);
        assert!(!meta.has_next_page);
        assert_eq!(meta.current_page, 3);
    }

    #[test]
    fn cursor_iteration_visits_each_record_exactly_once() {
        let total = 23u64;
        let limit = 5u64;
        let mut seen = Vec::new();
        let mut cursor = None;
        loop {
            let page = q(limit, cursor);
            let skip = page.skip();
            for i in skip..(skip + page.take()).min(total) {
                seen.push(i);
            }
            let meta = page.meta(total);
            match meta.cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }
        let expected: Vec<u64> = (0..total).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn cursor_absent_in_serialized_terminal_page() {
        let meta = q(10, Some(20)).meta(25);
        let json = serde_json::to_value(&meta).unwrap();
        assert!(json.get("cursor").is_none());
        assert_eq!(json["hasNextPage"], false);
    }

    #[test]
    fn zero_limit_is_clamped() {
        let meta = q(0, None).meta(3);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.current_page, 1);
    }
}
