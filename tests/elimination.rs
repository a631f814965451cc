//  ELIMINATION.rs
//    by Lut99
//
//  Created:
//    16 Oct 2026, 13:20:44
//  Last edited:
//    17 Oct 2026, 12:05:19
//  Auto updated?
//    Yes
//
//  Description:
//!   Checks that disabled log calls really are gone from the binary, by
//!   looking for their format strings in the executable of this very test.
//!
//!   The needles are stored reversed, and only turned around behind a
//!   `black_box()`, so that the searched-for text does not end up in the
//!   executable through the test itself (not even when optimized).
//

use std::cell::Cell;
use std::fs;
use std::hint::black_box;

use serial_log::Level;


/***** HELPERS *****/
/// Reads the executable of the running test.
fn own_executable() -> Vec<u8> {
    let path = std::env::current_exe().unwrap_or_else(|err| panic!("Failed to find own executable: {err}"));
    fs::read(&path).unwrap_or_else(|err| panic!("Failed to read own executable '{}': {err}", path.display()))
}

/// Returns whether `haystack` contains the reverse of `reversed`.
fn contains_reversed(haystack: &[u8], reversed: &str) -> bool {
    let needle: Vec<u8> = black_box(reversed).bytes().rev().collect();
    haystack.windows(needle.len()).any(|window| window == needle.as_slice())
}

/// A sink that should never be reached. Still uses the message, so that retained calls keep their format strings.
fn unreachable_sink(site: &serial_log::emit::CallSite, message: std::fmt::Arguments) {
    panic!("Suppressed call at {}:{} was executed: {message}", site.file, site.line);
}





/***** MODULES *****/
/// Silences its WARNING-switch entirely, and always hears its INFO-switch.
#[cfg(feature = "macros")]
mod muted {
    use serial_log::{log_switch, overrides};

    overrides! {
        WARNING = NONE,
        INFO = DEBUG,
    }

    pub fn run() {
        log_switch!(WARNING, "XQZ-swch-1 muted warning");
        log_switch!(INFO, "XQZ-swch-2 local info");
    }
}





/***** TESTS *****/
#[test]
fn test_suppressed_constant_call_is_eliminated() {
    serial_log::__gated!(Level::Fatal, Level::Info, unreachable_sink, "XQZ-elim-1 Log test!");
    serial_log::__gated!(Level::Fatal, Level::Debug, unreachable_sink, "XQZ-elim-2 Hello {}", 42);
    serial_log::log!(Level::None, "XQZ-elim-3 never a real level");

    let exe: Vec<u8> = own_executable();
    assert!(!contains_reversed(&exe, "!tset goL 1-mile-ZQX"));
    assert!(!contains_reversed(&exe, " olleH 2-mile-ZQX"));
    assert!(!contains_reversed(&exe, "level laer a reven 3-mile-ZQX"));
}

#[test]
fn test_runtime_call_is_retained() {
    // The level is opaque to the compiler, so this must stay a real branch
    let level: u8 = black_box(9);
    serial_log::__gated_dyn!(Level::Fatal, level, unreachable_sink, "XQZ-kept-1 Hello debug level {level}");

    let exe: Vec<u8> = own_executable();
    assert!(contains_reversed(&exe, " level gubed olleH 1-tpek-ZQX"));
}

#[test]
fn test_suppressed_arguments_are_not_evaluated() {
    let evaluated: Cell<bool> = Cell::new(false);
    let touch = || {
        evaluated.set(true);
        0
    };
    serial_log::__gated!(Level::Error, Level::Warning, unreachable_sink, "{}", touch());
    serial_log::log!(Level::None, "{}", touch());
    assert!(!evaluated.get());
}

#[test]
fn test_wrappers_match_threshold() {
    // Whatever threshold we are built with, a wrapper that is disabled must leave no trace
    serial_log::debug!("XQZ-wrap-5 debug wrapper");
    let exe: Vec<u8> = own_executable();
    if !serial_log::enabled!(Level::Debug) {
        assert!(!contains_reversed(&exe, "repparw gubed 5-parw-ZQX"));
    } else {
        assert!(contains_reversed(&exe, "repparw gubed 5-parw-ZQX"));
    }
}

#[cfg(feature = "macros")]
#[test]
fn test_switch_calls_follow_local_threshold() {
    muted::run();
    let exe: Vec<u8> = own_executable();
    assert!(!contains_reversed(&exe, "gninraw detum 1-hcws-ZQX"));
    assert!(contains_reversed(&exe, "ofni lacol 2-hcws-ZQX"));
}
