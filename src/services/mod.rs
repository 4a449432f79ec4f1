//! Domain services used by HTTP routes.
//!
//! Service modules own validation and persistence so route handlers stay
//! focused on protocol translation.

pub mod notes;
