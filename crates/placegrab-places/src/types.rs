//! Places Web Service response types.
//!
//! Only the fields this tool reads are modeled; everything else in the
//! provider's payload is ignored by serde.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Text search
// ---------------------------------------------------------------------------

/// Raw `textsearch/json` envelope.
#[derive(Debug, Deserialize)]
pub struct TextSearchResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One text-search hit. Only `place_id` is used downstream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// One page of search hits plus the token for the next page, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchPage {
    pub results: Vec<PlaceSummary>,
    pub next_page_token: Option<String>,
}

impl From<TextSearchResponse> for SearchPage {
    fn from(response: TextSearchResponse) -> Self {
        // A blank token is as good as none.
        let next_page_token = response
            .next_page_token
            .filter(|token| !token.trim().is_empty());
        Self {
            results: response.results,
            next_page_token,
        }
    }
}

// ---------------------------------------------------------------------------
// Place details
// ---------------------------------------------------------------------------

/// Raw `details/json` envelope.
#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    #[serde(default)]
    pub result: Option<PlaceDetail>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Contact details for a single place. `Default` is the empty detail used
/// when a lookup fails.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub website: Option<String>,
}

impl PlaceDetail {
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.geometry.as_ref()?.location.as_ref()?.lat
    }

    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.geometry.as_ref()?.location.as_ref()?.lng
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub location: Option<Location>,
}

/// Coordinates are read independently; either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_page_drops_blank_token() {
        let response: TextSearchResponse = serde_json::from_value(serde_json::json!({
            "status": "OK",
            "results": [{ "place_id": "abc" }],
            "next_page_token": ""
        }))
        .unwrap();
        let page = SearchPage::from(response);
        assert_eq!(page.results.len(), 1);
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn zero_results_response_has_no_hits() {
        let response: TextSearchResponse =
            serde_json::from_value(serde_json::json!({ "status": "ZERO_RESULTS", "results": [] }))
                .unwrap();
        let page = SearchPage::from(response);
        assert!(page.results.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn detail_coordinates_are_independent() {
        let detail: PlaceDetail = serde_json::from_value(serde_json::json!({
            "name": "Bir Hospital",
            "geometry": { "location": { "lng": 85.3136 } }
        }))
        .unwrap();
        assert_eq!(detail.latitude(), None);
        assert_eq!(detail.longitude(), Some(85.3136));
    }

    #[test]
    fn detail_without_geometry_has_no_coordinates() {
        let detail = PlaceDetail::default();
        assert_eq!(detail.latitude(), None);
        assert_eq!(detail.longitude(), None);
    }

    #[test]
    fn detail_ignores_unmodeled_fields() {
        let detail: PlaceDetail = serde_json::from_value(serde_json::json!({
            "name": "Teaching Hospital",
            "rating": 4.1,
            "website": "https://example.org",
            "geometry": {
                "location": { "lat": 27.7358, "lng": 85.3303 },
                "viewport": {}
            }
        }))
        .unwrap();
        assert_eq!(detail.website.as_deref(), Some("https://example.org"));
        assert_eq!(detail.latitude(), Some(27.7358));
    }
}
