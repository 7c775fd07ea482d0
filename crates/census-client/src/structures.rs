//! Queries against `/v1/structures`.
//!
//! Two kinds of request are issued here: existence checks for a batch of
//! element symbols, and single-record sorted queries used to read the
//! smallest and largest value of a count field.

use census_core::CountBounds;
use serde::Deserialize;

use crate::{
    OptimadeClient,
    error::ClientError,
    http::{check_response, endpoint},
};

/// Build an OPTIMADE filter matching structures that contain any of
/// `symbols`: `elements HAS ANY "H", "He"`.
#[must_use]
pub fn has_any_filter(symbols: &[&str]) -> String {
    let quoted: Vec<String> = symbols.iter().map(|s| format!("\"{s}\"")).collect();
    format!("elements HAS ANY {}", quoted.join(", "))
}

/// Per-structure count properties with min/max statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    Elements,
    Sites,
}

impl CountField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Elements => "nelements",
            Self::Sites => "nsites",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

#[derive(Deserialize)]
struct DataPage {
    data: Vec<serde_json::Value>,
}

impl OptimadeClient {
    /// Whether at least one structure at `provider_url` contains any of
    /// `symbols`.
    ///
    /// Only one record is requested; the total count is never read.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or a
    /// body without a `data` array.
    pub async fn any_structures(
        &self,
        provider_url: &str,
        symbols: &[&str],
    ) -> Result<bool, ClientError> {
        let url = format!(
            "{}?filter={}&page_limit=1",
            endpoint(provider_url, "v1/structures"),
            urlencoding::encode(&has_any_filter(symbols))
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let page: DataPage = resp.json().await?;
        Ok(!page.data.is_empty())
    }

    /// Read the smallest (ascending) or largest (descending) value of `field`.
    ///
    /// Returns `Ok(None)` when the provider answers but the first record has
    /// no numeric value for the field.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or a
    /// malformed body.
    pub async fn count_bound(
        &self,
        provider_url: &str,
        field: CountField,
        order: SortOrder,
    ) -> Result<Option<u64>, ClientError> {
        let sign = match order {
            SortOrder::Ascending => "",
            SortOrder::Descending => "-",
        };
        let name = field.as_str();
        let url = format!(
            "{}?sort={sign}{name}&response_format=json&response_fields={name}&page_limit=1",
            endpoint(provider_url, "v1/structures"),
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let page: DataPage = resp.json().await?;
        Ok(first_attribute(&page, name))
    }

    /// Min and max of `field`. Failures become `None` bounds.
    pub async fn count_bounds(&self, provider_url: &str, field: CountField) -> CountBounds {
        let (min, max) = tokio::join!(
            self.count_bound(provider_url, field, SortOrder::Ascending),
            self.count_bound(provider_url, field, SortOrder::Descending),
        );
        let or_log = |result: Result<Option<u64>, ClientError>, bound: &str| {
            result.unwrap_or_else(|error| {
                tracing::debug!(provider_url, field = field.as_str(), bound, %error, "count query failed");
                None
            })
        };
        CountBounds {
            min: or_log(min, "min"),
            max: or_log(max, "max"),
        }
    }
}

fn first_attribute(page: &DataPage, name: &str) -> Option<u64> {
    page.data
        .first()?
        .get("attributes")?
        .get(name)?
        .as_u64()
}
