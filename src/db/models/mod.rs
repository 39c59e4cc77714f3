// Sub-modules organized by functional domain
pub mod api;
pub mod assignment;
pub mod attendance;
pub mod auth;
pub mod department;
pub mod leave;
pub mod role;
pub mod shift;
pub mod staff;
pub mod swap;

// Re-export all models so call sites can use `crate::db::models::*`

// API response structures
pub use api::*;

// Authentication and user models
pub use auth::*;

// Scheduling domain models
pub use assignment::*;
pub use attendance::*;
pub use department::*;
pub use leave::*;
pub use role::*;
pub use shift::*;
pub use staff::*;
pub use swap::*;
