//! Utility helpers shared across component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Class composition and variant tokens are kept out of the components so
//! the props-to-classes mapping can be tested without rendering.

pub mod class_names;
pub mod variant;
