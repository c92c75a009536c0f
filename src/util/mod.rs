//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure text
//! processing from page and component logic to improve reuse and
//! testability.

pub mod clipboard;
pub mod emphasis;
