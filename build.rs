//  BUILD.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 10:02:11
//  Last edited:
//    16 Oct 2026, 17:40:38
//  Auto updated?
//    Yes
//
//  Description:
//!   Resolves the build-wide verbosity threshold and generates the
//!   `VERBOSITY`-constant plus the per-level cfgs from it.
//

use std::env;
use std::fs;
use std::path::PathBuf;


/***** CONSTANTS *****/
/// The environment variable that overrides any `verbosity-*`-feature.
const VERBOSITY_ENV: &str = "SERIAL_VERBOSITY";

/// All levels, in order, as `(variant, cfg suffix)`.
///
/// The index in this list is the numeric value of the level.
const LEVELS: [(&str, &str); 6] =
    [("None", "none"), ("Fatal", "fatal"), ("Error", "error"), ("Warning", "warning"), ("Info", "info"), ("Debug", "debug")];





/***** HELPER FUNCTIONS *****/
/// Parses a verbosity given by the user.
///
/// # Arguments
/// - `raw`: The raw value. May be an integer, or a level name (case-insensitive, optionally
///   prefixed with `LOG_`).
///
/// # Returns
/// The numeric value of the level, or [`None`] if it wasn't one we recognize.
fn parse_verbosity(raw: &str) -> Option<usize> {
    let raw: &str = raw.trim();
    if let Ok(num) = raw.parse::<usize>() {
        return if num < LEVELS.len() { Some(num) } else { None };
    }
    let name: String = raw.to_lowercase();
    let name: &str = name.strip_prefix("log_").unwrap_or(&name);
    LEVELS.iter().position(|(_, suffix)| *suffix == name)
}

/// Finds the threshold selected by the `verbosity-*`-features.
///
/// # Returns
/// The most restrictive level enabled, or [`None`] if no feature was given at all.
fn feature_verbosity() -> Option<usize> {
    LEVELS.iter().position(|(_, suffix)| env::var_os(format!("CARGO_FEATURE_VERBOSITY_{}", suffix.to_uppercase())).is_some())
}





/***** ENTRYPOINT *****/
fn main() {
    println!("cargo::rerun-if-changed=build.rs");
    println!("cargo::rerun-if-env-changed={VERBOSITY_ENV}");
    for (_, suffix) in &LEVELS[1..] {
        println!("cargo::rustc-check-cfg=cfg(serial_log_{suffix})");
    }

    // Resolve the threshold
    let verbosity: usize = match env::var(VERBOSITY_ENV) {
        Ok(raw) => match parse_verbosity(&raw) {
            Some(verbosity) => verbosity,
            None => panic!(
                "Unknown verbosity '{raw}' given in ${VERBOSITY_ENV} (expected one of NONE, FATAL, ERROR, WARNING, INFO, DEBUG or an integer in \
                 0..=5)"
            ),
        },
        Err(env::VarError::NotUnicode(raw)) => panic!("Non-UTF-8 verbosity {raw:?} given in ${VERBOSITY_ENV}"),
        Err(env::VarError::NotPresent) => feature_verbosity().unwrap_or(0),
    };

    // Write the constant
    let out_dir: PathBuf = PathBuf::from(env::var_os("OUT_DIR").unwrap_or_else(|| panic!("Cargo did not set $OUT_DIR")));
    let (variant, _) = LEVELS[verbosity];
    let code: String = format!(
        "/// The build-wide verbosity threshold.\n///\n/// Calls at a level more verbose than this are removed from the binary.\npub const VERBOSITY: \
         crate::Level = crate::Level::{variant};\n"
    );
    let path: PathBuf = out_dir.join("verbosity.rs");
    if let Err(err) = fs::write(&path, code) {
        panic!("Failed to write '{}': {err}", path.display());
    }

    // Tell the crate which of the per-level wrappers survive
    for (_, suffix) in &LEVELS[1..=verbosity] {
        println!("cargo::rustc-cfg=serial_log_{suffix}");
    }
}
