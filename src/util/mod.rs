//! Utility helpers shared across storefront UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Browser calls are gated on the `csr` feature and degrade to no-ops
//! natively so the rest of the crate tests without a DOM.

pub mod dark_mode;
pub mod escape;
pub mod navigation;
pub mod storage;
