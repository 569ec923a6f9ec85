//! Render-state models.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components derive their branch selection and expand/collapse behavior from
//! these plain structs, so the decision logic is testable without a DOM.

pub mod display;
pub mod expand;
