use placegrab_core::{OutputRecord, NOT_AVAILABLE};
use placegrab_places::PlaceDetail;

/// Maps a detail response onto the output schema.
///
/// Phone and website fall back to `"N/A"`; the other optional columns are
/// left empty.
#[must_use]
pub fn flatten_detail(detail: PlaceDetail, category: &str, place_id: &str) -> OutputRecord {
    let latitude = detail.latitude();
    let longitude = detail.longitude();

    OutputRecord {
        category: category.to_owned(),
        name: detail.name,
        phone: detail
            .formatted_phone_number
            .unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        address: detail.formatted_address,
        latitude,
        longitude,
        website: detail.website.unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        place_id: place_id.to_owned(),
    }
}
