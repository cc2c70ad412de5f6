//! Radio Control Logic
//!
//! The radio driver interface, the receive hook, and the sweep/fixed
//! repetition controller built on top of them.

pub mod driver;
pub mod rx;
pub mod sweep;
