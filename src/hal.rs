//! Hardware Abstraction Layer
//!
//! Safe wrappers over the SCM3C board support package (C, linked by
//! `build.rs`). This is the only module allowed to use `unsafe`; everything
//! above it sees the collaborator traits.
#![allow(unsafe_code)]

mod bsp;

pub mod calibration;
pub mod delay;
pub mod mote;
pub mod power;
pub mod radio;
