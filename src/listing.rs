use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PokeApiError;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Summary entry of a listing. Deliberately not resolved into a full record.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ResourceStub {
    pub id: i32,
    pub name: String,
    pub url: String,
}

/// One page of a paginated listing endpoint.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<ResourceStub>,
}

#[derive(Debug, Deserialize)]
struct RawListing {
    count: Option<u32>,
    next: Option<String>,
    previous: Option<String>,
    results: Option<Vec<RawListingItem>>,
}

#[derive(Debug, Deserialize)]
struct RawListingItem {
    name: String,
    url: String,
}

impl ListingPage {
    /// Adapt a decoded listing response into a page of stubs.
    pub fn from_value(raw: Value) -> Result<Self, PokeApiError> {
        let listing: RawListing = serde_json::from_value(raw).map_err(|e| {
            PokeApiError::MalformedResponse(format!("invalid listing response: {}", e))
        })?;

        let results = listing
            .results
            .unwrap_or_default()
            .into_iter()
            .map(|item| {
                Ok(ResourceStub {
                    id: id_from_url(&item.url)?,
                    name: item.name,
                    url: item.url,
                })
            })
            .collect::<Result<Vec<_>, PokeApiError>>()?;

        tracing::trace!("Adapted listing page with {} results", results.len());

        Ok(Self {
            count: listing.count.unwrap_or(0),
            next: listing.next,
            previous: listing.previous,
            results,
        })
    }

    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// Numeric id carried by the last path segment of a resource URL.
///
/// A trailing `/` is ignored, so `.../pokemon/25/` and `.../pokemon/25` both
/// yield 25.
pub fn id_from_url(url: &str) -> Result<i32, PokeApiError> {
    let segment = url.trim_end_matches('/').rsplit('/').next().unwrap_or_default();
    segment.parse::<i32>().map_err(|e| {
        PokeApiError::MalformedResponse(format!("no numeric id at the end of {}: {}", url, e))
    })
}
