//  LIB.rs
//    by Lut99
//
//  Created:
//    15 Oct 2026, 09:58:14
//  Last edited:
//    17 Oct 2026, 10:02:36
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the `overrides!{}`-macro for the `serial-log`-crate.
//

// Modules
mod common;
mod overrides;

// Imports
use proc_macro::TokenStream;
use syn::parse::Parser as _;


/***** LIBRARY *****/
/// Declares module-local overrides of the `serial-log` switches.
///
/// Expands to a private module called `switch` that re-exports all default switches from
/// `serial_log::switch`, except for the ones overridden here. Calls through
/// `log_switch!()` in the same module then use the overridden ones, while the rest of the program is
/// left untouched.
///
/// # Syntax
/// ```plain
/// overrides! {
///     #![crate = ::serial_log]    // Optional; the path to the `serial-log`-crate
///     INFO = DEBUG,               // Gates INFO-calls by DEBUG instead of the global threshold
///     DEBUG as FATAL,             // Makes DEBUG-calls as if they were FATAL
///     WARNING as INFO = INFO,     // Both
/// }
/// ```
/// Switches are one of `FATAL`, `ERROR`, `WARNING`, `INFO` or `DEBUG`; levels are those plus
/// `NONE`, or their number (`0..=5`). Both are case-insensitive and may be prefixed with `LOG_`.
#[proc_macro]
pub fn overrides(input: TokenStream) -> TokenStream {
    match overrides::overrides.parse2(input.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.into_compile_error().into(),
    }
}
