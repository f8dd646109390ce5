pub mod bounds;
pub mod distance;
pub mod point;

pub use bounds::GeoBounds;
pub use distance::{EARTH_RADIUS_KM, distance_km};
pub use point::GeoPoint;
