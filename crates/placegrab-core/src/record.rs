use serde::Serialize;

/// Placeholder written for a missing phone number or website.
pub const NOT_AVAILABLE: &str = "N/A";

/// One flattened row of the output file.
///
/// Field order here is the column order of the CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Address")]
    pub address: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude")]
    pub longitude: Option<f64>,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "PlaceID")]
    pub place_id: String,
}

impl OutputRecord {
    /// Column names in output order.
    pub const HEADER: [&'static str; 8] = [
        "Category",
        "Name",
        "Phone",
        "Address",
        "Latitude",
        "Longitude",
        "Website",
        "PlaceID",
    ];
}
