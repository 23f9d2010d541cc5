use crate::geo::GeoPoint;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Defined by the host page once the Maps API has loaded.
    #[wasm_bindgen(catch, js_name = showPanorama)]
    fn show_panorama(lat: f64, lon: f64) -> Result<(), JsValue>;
}

/// Points the page's panorama at `point`.
/// A missing or failing hook is logged, not fatal.
pub fn show(point: &GeoPoint) {
    if let Err(e) = show_panorama(point.lat, point.lon) {
        log::warn!("panorama hook failed for {}: {:?}", point, e);
    }
}
