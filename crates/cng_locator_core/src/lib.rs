pub mod api;
pub mod config;
pub mod error;
pub mod geo;
pub mod normalize;
pub mod plan;
pub mod routing;
pub mod session;
pub mod station;
pub mod vehicle;

pub use error::{LocatorError, Result};
