pub mod calculations;
pub mod geometry;
pub mod models;
pub mod navigation;

pub use calculations::{
    InvalidReason, PricingCalculator, PricingError, TotalDisplay, calculate_total,
};
pub use geometry::WindowGeometry;
pub use models::*;
pub use navigation::{NavAction, NavigationError, Navigator, ViewState};
