//! Storefront state and pure domain logic.
//!
//! DESIGN
//! ======
//! Nothing here touches the DOM. Components read these models through Leptos
//! context and re-render from them, which keeps filtering, theme persistence,
//! and detail resolution testable natively.

pub mod catalog;
pub mod detail;
pub mod filter;
pub mod theme;
