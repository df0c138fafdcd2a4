use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Outcome of resolving one trip's three stops and two legs.
///
/// Every part is optional: an unresolved stop or leg is simply absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTrip {
    pub current: Option<LatLng>,
    pub pickup: Option<LatLng>,
    pub dropoff: Option<LatLng>,
    pub current_to_pickup: Option<Vec<LatLng>>,
    pub pickup_to_dropoff: Option<Vec<LatLng>>,
}
