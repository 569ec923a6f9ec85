//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are props-to-markup mappings. Branch selection and expand
//! state live in `crate::state`; class tokens live in `crate::util`.

pub mod content_with_loading;
pub mod loading_spinner;
pub mod section_card;
pub mod skeleton;
