//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 09:47:55
//  Last edited:
//    17 Oct 2026, 11:36:22
//  Auto updated?
//    Yes
//
//  Description:
//!   Logging macros gated by a build-wide verbosity threshold.
//!
//!   Calls at a level the threshold does not admit are not skipped at
//!   runtime, but removed from the binary: their format strings, formatting
//!   code and argument expressions never make it into the compiled artifact.
//!   Admitted calls write one line to stdout of the form:
//!   ```plain
//!   [src/main.rs                   : 42  ] Log test!
//!   ```
//!
//!   # Configuration
//!   The threshold ([`VERBOSITY`]) is fixed when this crate is built. It is
//!   taken from the `SERIAL_VERBOSITY` environment variable if given (e.g.,
//!   `SERIAL_VERBOSITY=FATAL` or `SERIAL_VERBOSITY=1`), or else from the
//!   `verbosity-*` features, where the most restrictive one wins. Without
//!   either, nothing is logged.
//!
//!   Individual modules may deviate from the threshold for named levels;
//!   see [`switch`].
//

// Let the `overrides!{}`-macro refer to us by name in our own tests
extern crate self as serial_log;

// Declare modules
pub mod emit;
#[doc(hidden)]
pub mod gate;
pub mod level;
mod macros;
pub mod switch;

// Imports
pub use level::{Level, RawLevel, admits_raw};
#[cfg(feature = "macros")]
pub use serial_log_macros::overrides;
#[doc(inline)]
pub use crate::warning as warn;


/***** CONSTANTS *****/
include!(concat!(env!("OUT_DIR"), "/verbosity.rs"));





/***** LIBRARY FUNCTIONS *****/
/// Returns whether a level only known at runtime is admitted by the build-wide threshold.
///
/// # Arguments
/// - `level`: The [`Level`], or its number, to check.
///
/// # Returns
/// True if a call at `level` would produce output, false otherwise.
#[inline]
pub fn enabled(level: impl RawLevel) -> bool { admits_raw(level.raw(), VERBOSITY) }





/***** TESTS *****/
#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_enabled_runtime() {
        for level in Level::ALL {
            assert_eq!(enabled(level), level.admits(VERBOSITY));
            assert_eq!(enabled(level as u8), level.admits(VERBOSITY));
        }
        assert!(!enabled(9u8));
    }

    #[cfg(feature = "macros")]
    mod chatty {
        use crate::Level;
        use crate::tests::Capture;

        crate::overrides! {
            #![crate = crate]
            INFO = DEBUG,
            DEBUG as FATAL,
            WARNING = NONE,
        }

        /// Logs through every slot as if the global threshold were FATAL.
        pub fn run(cap: &Capture) {
            crate::__gated!(switch::INFO.threshold_or(Level::Fatal), switch::INFO.level, |site, message| cap.write(site, message), "info");
            crate::__gated!(switch::DEBUG.threshold_or(Level::Fatal), switch::DEBUG.level, |site, message| cap.write(site, message), "debug");
            crate::__gated!(switch::WARNING.threshold_or(Level::Fatal), switch::WARNING.level, |site, message| cap.write(site, message), "warning");
            crate::__gated!(switch::FATAL.threshold_or(Level::Fatal), switch::FATAL.level, |site, message| cap.write(site, message), "fatal");
            crate::__gated!(switch::ERROR.threshold_or(Level::Fatal), switch::ERROR.level, |site, message| cap.write(site, message), "error");
        }
    }

    mod quiet {
        use crate::tests::Capture;
        use crate::{Level, switch};

        /// Logs through every slot as if the global threshold were FATAL.
        pub fn run(cap: &Capture) {
            crate::__gated!(switch::INFO.threshold_or(Level::Fatal), switch::INFO.level, |site, message| cap.write(site, message), "info");
            crate::__gated!(switch::DEBUG.threshold_or(Level::Fatal), switch::DEBUG.level, |site, message| cap.write(site, message), "debug");
            crate::__gated!(switch::FATAL.threshold_or(Level::Fatal), switch::FATAL.level, |site, message| cap.write(site, message), "fatal");
        }
    }

    #[cfg(feature = "macros")]
    #[test]
    fn test_module_overrides() {
        crate::tests::setup_logger();

        let cap = crate::tests::Capture::new();
        chatty::run(&cap);
        assert_eq!(cap.messages(), vec!["info", "debug", "fatal"]);
        assert_eq!(cap.levels(), vec![Level::Info, Level::Fatal, Level::Fatal]);
    }

    #[test]
    fn test_module_defaults() {
        crate::tests::setup_logger();

        let cap = crate::tests::Capture::new();
        quiet::run(&cap);
        assert_eq!(cap.messages(), vec!["fatal"]);
    }

    #[cfg(feature = "macros")]
    #[test]
    fn test_module_overrides_real_threshold() {
        use serial_log::log_switch;

        mod local {
            serial_log::overrides! { INFO = DEBUG }

            pub fn admits() -> bool { switch::INFO.admits(crate::VERBOSITY) }
        }

        // Whatever we're built with, the local INFO is gated by DEBUG
        assert!(local::admits());
        log_switch!(FATAL, "Default FATAL switch, {}", "admitted if the global threshold says so");
    }
}
