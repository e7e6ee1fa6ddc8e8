//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. Each
//! repository borrows a connection for its lifetime and is constructed per
//! request; there is no process-wide storage handle.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
