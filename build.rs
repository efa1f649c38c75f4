//! Build script for Freezer Door
//!
//! Stamps the binary with its compile time.

fn main() {
    println!("cargo:rerun-if-changed=src");

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    println!("cargo:rustc-env=FREEZER_BUILD_TIMESTAMP={}", timestamp);
}
