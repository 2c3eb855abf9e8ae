//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-facing concerns (full-page navigation, file inputs, image URLs)
//! live here behind small functions so pages and components stay free of
//! `web_sys` calls.

pub mod active;
pub mod file_input;
pub mod image_url;
pub mod navigation;
