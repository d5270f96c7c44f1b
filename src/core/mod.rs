//! Core infrastructure
//!
//! Cross-cutting support shared by every other module (logging).

pub mod logging;
