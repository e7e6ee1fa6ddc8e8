//! Service layer for business logic and orchestration.
//!
//! Services coordinate multiple repositories for operations that a single
//! repository cannot answer on its own, such as resolving favorite rows into
//! their fully serialized target entities.

pub mod favorite;
