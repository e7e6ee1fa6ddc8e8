//! Tests for favorite controller endpoints.
//!
//! This module contains integration tests for the favorites subsystem's
//! HTTP endpoints: listing a user's resolved favorites and adding or
//! removing planet and character favorites.

mod add_favorite_person;
mod add_favorite_planet;

use super::*;
