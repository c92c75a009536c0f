//! Application state modules provided as Leptos contexts.
//!
//! DESIGN
//! ======
//! State structs are plain Rust values with mutating methods, wrapped in
//! `RwSignal` at the app root. Keeping them Leptos-free lets the request
//! and notification invariants run under native `cargo test`.

pub mod rhyme;
pub mod toast;
