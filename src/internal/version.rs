// src/internal/version.rs

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build information gathered by the build script.
pub fn get_version_info() -> String {
    let build_date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");
    let build_timestamp = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let rustc_semver = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");
    let cargo_target_triple = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");
    let sysinfo_os = option_env!("VERGEN_SYSINFO_OS_VERSION").unwrap_or("unknown");

    format!(
        "slf4rs version {}\n\
         Built: {} ({}) on {}\n\
         Rust: {}\n\
         Target: {}",
        VERSION, build_date, build_timestamp, sysinfo_os, rustc_semver, cargo_target_triple
    )
}
