use serde::Serialize;

use super::error::IndexerError;

/// Group key under which the read API reports an asset's collection.
pub const GROUP_KEY_COLLECTION: &str = "collection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetSortBy {
    Created,
    Updated,
    RecentAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetSorting {
    pub sort_by: AssetSortBy,
    pub sort_direction: SortDirection,
}

/// Pagination and sorting for list queries.
///
/// **Page** numbers and **before/after** cursors are mutually exclusive.
/// When neither is set the first page is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetListOptions {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub sort_by: Option<AssetSorting>,
}

impl AssetListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_before(mut self, before: String) -> Self {
        self.before = Some(before);
        self
    }

    pub fn with_after(mut self, after: String) -> Self {
        self.after = Some(after);
        self
    }

    pub fn with_sort_by(mut self, sort_by: AssetSortBy, sort_direction: SortDirection) -> Self {
        self.sort_by = Some(AssetSorting {
            sort_by,
            sort_direction,
        });
        self
    }

    pub fn validate(&self) -> Result<(), IndexerError> {
        if self.page.is_some() && (self.before.is_some() || self.after.is_some()) {
            return Err(IndexerError::InvalidArgument(
                "Only one of page or before/after may be provided".to_string(),
            ));
        }
        Ok(())
    }

    /// Page number sent on the wire.
    pub(crate) fn effective_page(&self) -> Option<u64> {
        match (self.page, &self.before, &self.after) {
            (Some(page), _, _) => Some(page),
            (None, None, None) => Some(1),
            _ => None,
        }
    }
}
