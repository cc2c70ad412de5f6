//! Build script for SCM sweep firmware
//!
//! Handles:
//! - Memory layout configuration
//! - Linking the SCM3C board support package (embedded builds)

use std::env;
use std::path::PathBuf;

fn main() {
    // Tell Cargo to re-run this if the linker script changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SCM3C_BSP_DIR");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    // Link memory.x from project directory
    println!("cargo:rustc-link-search={}", manifest_dir.display());

    // Host test builds have no BSP
    if env::var_os("CARGO_FEATURE_EMBEDDED").is_none() {
        return;
    }

    // cortex-m-rt and defmt linker scripts for the firmware binary
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    let bsp_dir = env::var_os("SCM3C_BSP_DIR")
        .map_or_else(|| manifest_dir.join("vendor/scm3c-bsp/lib"), PathBuf::from);

    println!("cargo:rerun-if-changed={}", bsp_dir.join("libscm3c_bsp.a").display());
    println!("cargo:rustc-link-search={}", bsp_dir.display());
    println!("cargo:rustc-link-lib=static=scm3c_bsp");
}
