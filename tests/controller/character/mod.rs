//! Tests for character controller endpoints.

mod get_people;

use super::*;
