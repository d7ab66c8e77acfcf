use placegrab_places::{PlaceDetail, PlacesProvider, DETAIL_FIELDS};

/// Looks up contact details for one place.
///
/// A failed lookup is logged and replaced by an empty [`PlaceDetail`] so the
/// place still yields a row.
pub async fn fetch_detail_or_empty<P>(provider: &P, place_id: &str) -> PlaceDetail
where
    P: PlacesProvider + ?Sized,
{
    match provider.details(place_id, &DETAIL_FIELDS).await {
        Ok(detail) => detail,
        Err(err) => {
            tracing::warn!(place_id, error = %err, "detail lookup failed, writing placeholder row");
            PlaceDetail::default()
        }
    }
}
