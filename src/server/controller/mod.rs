//! HTTP controller endpoints for the Holocron web API.
//!
//! Controllers handle HTTP requests, extract path and body parameters, call
//! into repositories and services, and return JSON responses with the
//! appropriate status codes. All endpoints are annotated with utoipa for
//! OpenAPI documentation.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
