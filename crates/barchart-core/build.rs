// File: crates/barchart-core/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Skia's font manager needs RegOpenKeyExW and friends.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
