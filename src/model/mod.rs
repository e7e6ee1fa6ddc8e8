//! Shared API data transfer objects.
//!
//! These structs define the normative JSON shapes of every response the API
//! produces. Database entities are converted into DTOs at the controller and
//! service boundary; entity types never serialize directly.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
