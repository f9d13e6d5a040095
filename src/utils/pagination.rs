use serde::{Deserialize, Serialize};

#[derive(Default, Deserialize)]
pub struct PaginationQuery {
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub page: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_optional_u64")]
    pub limit: Option<u64>,
}

fn deserialize_optional_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) => s.parse::<u64>().map(Some).map_err(Error::custom),
        None => Ok(None),
    }
}

#[derive(Serialize)]
pub struct PaginationInfo {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_items: u64,
    pub items_per_page: u64,
}

#[derive(Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationInfo,
}

impl PaginationQuery {
    pub fn get_page(&self) -> u64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn get_limit(&self) -> u64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }

    pub fn get_offset(&self) -> u64 {
        (self.get_page() - 1) * self.get_limit()
    }
}

impl PaginationInfo {
    pub fn new(current_page: u64, total_items: u64, items_per_page: u64) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(items_per_page)
        };

        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page,
        }
    }
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, pagination: PaginationInfo) -> Self {
        Self { data, pagination }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let query = PaginationQuery::default();
        assert_eq!(query.get_page(), 1);
        assert_eq!(query.get_limit(), 20);
        assert_eq!(query.get_offset(), 0);
    }

    #[test]
    fn offset_follows_page_and_limit() {
        let query = PaginationQuery {
            page: Some(3),
            limit: Some(15),
        };
        assert_eq!(query.get_offset(), 30);
    }

    #[test]
    fn limit_is_clamped() {
        let query = PaginationQuery {
            page: Some(0),
            limit: Some(10_000),
        };
        assert_eq!(query.get_page(), 1);
        assert_eq!(query.get_limit(), 100);
    }

    #[test]
    fn page_counts_round_up() {
        let info = PaginationInfo::new(1, 41, 20);
        assert_eq!(info.total_pages, 3);
        let empty = PaginationInfo::new(1, 0, 20);
        assert_eq!(empty.total_pages, 1);
    }
}
