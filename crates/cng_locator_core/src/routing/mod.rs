pub mod osrm;
pub mod route;
pub mod segments;

pub use route::Route;
pub use segments::{RouteSegment, build_segments};
