pub mod config;
pub mod distance;
pub mod models;
pub mod near;
pub mod route;

use cng_locator_core::geo::GeoBounds;

/// Margin added around markers when reporting the map extent, in degrees.
pub const MAP_PADDING_DEG: f64 = 0.01;

/// `"Map extent: S, W -> N, E (center lat, lng)"` for a padded box.
pub fn extent_text(bounds: GeoBounds) -> String {
    let b = bounds.padded(MAP_PADDING_DEG);
    format!(
        "Map extent: {:.4}, {:.4} -> {:.4}, {:.4} (center {})",
        b.south,
        b.west,
        b.north,
        b.east,
        b.center()
    )
}
