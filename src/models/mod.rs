pub mod compliance;
pub mod geo;
pub mod stats;
pub mod trip;
