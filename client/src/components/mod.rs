//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing sections in source order. Only `navbar`
//! touches shared state (the theme toggle); the rest are fixed markup.

pub mod cta;
pub mod features;
pub mod footer;
pub mod hero;
pub mod live_preview;
pub mod navbar;
pub mod testimonials;
