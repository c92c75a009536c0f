//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form, result card, and toast stack while reading
//! shared state from Leptos context providers.

pub mod keyword_form;
pub mod rhyme_card;
pub mod toast_stack;
