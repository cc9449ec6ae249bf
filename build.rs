use std::env::var;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let rustc = var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = match Command::new(&rustc).arg("-V").output() {
        Ok(output) if output.status.success() => {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        }
        Ok(output) => {
            println!("cargo::warning=build.rs: `{rustc} -V` failed: {output:?}");
            String::from("unknown")
        }
        Err(e) => {
            println!("cargo::warning=build.rs: could not run `{rustc} -V`: {e}");
            String::from("unknown")
        }
    };

    // "rustc 1.85.0 (abcdef123 2025-01-01)" -> "1.85.0"
    let semver = version
        .split_whitespace()
        .nth(1)
        .unwrap_or("unknown")
        .to_string();

    println!("cargo:rustc-env=RUSTC_VERSION={version}");
    println!("cargo:rustc-env=RUSTC_SEMVER={semver}");
}
