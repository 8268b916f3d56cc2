/*
 * Responsibility
 * - `?page=N` query for list endpoints (10 items per page, 1-based)
 */
use serde::Deserialize;

pub const ITEMS_PER_PAGE: i64 = 10;

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
}

impl PageQuery {
    /// Returns `(limit, offset)`.
    pub fn limit_offset(&self) -> Result<(i64, i64), &'static str> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err("page must be >= 1");
        }
        let offset = (page - 1)
            .checked_mul(ITEMS_PER_PAGE)
            .ok_or("page is out of range")?;
        Ok((ITEMS_PER_PAGE, offset))
    }
}
