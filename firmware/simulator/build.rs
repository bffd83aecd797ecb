//! Build script for the sprite clock simulator.
//!
//! On Windows the SDL2 import library and DLL are expected under
//! `firmware/vendor/sdl2/`. Other platforms use the system SDL2.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    if env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let Some(sdl2_dir) = env::var_os("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .and_then(|manifest| manifest.parent().map(|firmware| firmware.join("vendor").join("sdl2")))
    else {
        return;
    };
    println!("cargo:rerun-if-changed={}", sdl2_dir.display());

    if !sdl2_dir.is_dir() {
        println!("cargo:warning=SDL2 not found in {}", sdl2_dir.display());
        return;
    }
    println!("cargo:rustc-link-search=native={}", sdl2_dir.display());

    if let Some(profile_dir) = env::var_os("OUT_DIR").as_deref().and_then(|out| profile_dir(Path::new(out))) {
        copy_dll(&sdl2_dir.join("SDL2.dll"), &profile_dir.join("SDL2.dll"));
    }
}

/// `target/<profile>` for an `OUT_DIR` of `target/<profile>/build/<pkg>/out`.
fn profile_dir(out_dir: &Path) -> Option<PathBuf> {
    out_dir.ancestors().nth(3).map(Path::to_path_buf)
}

fn copy_dll(
    src: &Path,
    dst: &Path,
) {
    if !src.exists() || dst.exists() {
        return;
    }
    if let Err(e) = fs::copy(src, dst) {
        println!("cargo:warning=Failed to copy SDL2.dll: {e}");
    }
}
