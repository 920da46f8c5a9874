use crate::domain::common::entities::app_errors::CoreError;

pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Validated pagination window for listing queries.
///
/// `page` is remembered so the data-access layer can tell an explicitly
/// requested page past the end of the result set (not found) apart from an
/// implicit first page that happens to be empty (valid empty listing).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    limit: i64,
    page: i64,
}

impl Pagination {
    pub fn from_raw(limit: Option<i64>, page: Option<i64>) -> Result<Self, CoreError> {
        let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
        let page = page.unwrap_or(1);
        if limit < 1 || page < 1 {
            return Err(CoreError::BadRequest);
        }
        // The window must stay representable; a page whose offset cannot be
        // computed is as malformed as a negative one.
        page.checked_sub(1)
            .and_then(|skipped| skipped.checked_mul(limit))
            .ok_or(CoreError::BadRequest)?;
        Ok(Self { limit, page })
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.limit
    }

    pub fn is_out_of_range(&self, rows_returned: usize) -> bool {
        self.page > 1 && rows_returned == 0
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_LIMIT,
            page: 1,
        }
    }
}
