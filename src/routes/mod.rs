//! Route configuration

/// Router assembly
pub mod router;

/// API endpoint wiring
pub mod api_routes;

pub use router::create_router;
