//  MACROS.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 13:16:50
//  Last edited:
//    17 Oct 2026, 11:31:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the logging macros.
//!
//!   There are two paths:
//!   - [`log!()`] and friends, which only accept constant levels. Their
//!     admission check is evaluated at compile time and disabled calls leave
//!     no trace in the binary. Their arguments are not evaluated either.
//!   - [`log_dyn!()`], which accepts a level determined at runtime. It
//!     compiles to an ordinary branch, so its format string always ends up
//!     in the binary.
//


/***** INTERNAL *****/
/// Implements the compile-time gated logging path against an explicit threshold and sink.
#[doc(hidden)]
#[macro_export]
macro_rules! __gated {
    ($threshold:expr, $level:expr, $sink:expr, $($arg:tt)+) => {
        <$crate::gate::Gate<{ $crate::Level::admits($level, $threshold) }> as $crate::gate::Pass>::pass(|| {
            ($sink)(&$crate::emit::CallSite::new(::core::file!(), ::core::line!(), $level), ::core::format_args!($($arg)+))
        })
    };
}

/// Implements the runtime-checked logging path against an explicit threshold and sink.
#[doc(hidden)]
#[macro_export]
macro_rules! __gated_dyn {
    ($threshold:expr, $level:expr, $sink:expr, $($arg:tt)+) => {
        if let ::core::option::Option::Some(level) = $crate::Level::admitted($crate::RawLevel::raw($level), $threshold) {
            ($sink)(&$crate::emit::CallSite::new(::core::file!(), ::core::line!(), level), ::core::format_args!($($arg)+))
        }
    };
}





/***** LIBRARY *****/
/// Logs a message at a constant level.
///
/// The level must be a constant expression of type [`Level`](crate::Level). If it is not admitted
/// by the build-wide [`VERBOSITY`](crate::VERBOSITY), the call is removed entirely: the format
/// string is not in the binary and the arguments are never evaluated. Passing a runtime value as
/// level is a compile error; use [`log_dyn!()`] for that.
///
/// # Example
/// ```rust
/// use serial_log::{Level, log};
///
/// log!(Level::Info, "Log test!");
/// log!(Level::Warning, "{} retries left", 3);
/// ```
///
/// A level that is only known at runtime is refused:
/// ```compile_fail
/// use serial_log::{Level, log};
///
/// let level: Level = Level::Info;
/// log!(level, "Log test!");
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)+) => {
        $crate::__gated!($crate::VERBOSITY, $level, $crate::emit::emit, $($arg)+)
    };
}

/// Logs a message through a [`Switch`](crate::switch::Switch) in scope of the caller.
///
/// The first argument is the name of a slot (`FATAL`, `ERROR`, `WARNING`, `INFO` or `DEBUG`), which
/// is looked up as `switch::<NAME>` where the macro is called. That is either the default
/// [`serial_log::switch`](crate::switch) imported by the caller, or a module-local one declared
/// with `overrides!{}`. Just like [`log!()`], disabled calls are removed from the binary.
///
/// # Example
/// ```rust
/// use serial_log::{log_switch, switch};
///
/// log_switch!(DEBUG, "Log test of module!");
/// ```
#[macro_export]
macro_rules! log_switch {
    ($name:ident, $($arg:tt)+) => {
        $crate::__gated!(switch::$name.threshold_or($crate::VERBOSITY), switch::$name.level, $crate::emit::emit, $($arg)+)
    };
}

/// Logs a message at a level only known at runtime.
///
/// The level may be a [`Level`](crate::Level) or a plain `u8`; numbers above
/// [`Level::Debug`](crate::Level::Debug) are never admitted. Unlike [`log!()`], this is an
/// ordinary runtime check, so the format string always ends up in the binary.
///
/// # Example
/// ```rust
/// use serial_log::log_dyn;
///
/// for i in 3u8..9 {
///     log_dyn!(i, "Hello debug level {i}");
/// }
/// ```
#[macro_export]
macro_rules! log_dyn {
    ($level:expr, $($arg:tt)+) => {
        $crate::__gated_dyn!($crate::VERBOSITY, $level, $crate::emit::emit, $($arg)+)
    };
}

/// Returns whether a constant level is admitted by the build-wide threshold.
///
/// The result is a constant, so this can be used in `const` contexts and in conditions that should
/// fold away.
///
/// # Example
/// ```rust
/// use serial_log::{Level, enabled};
///
/// const CHATTY: bool = enabled!(Level::Debug);
/// assert_eq!(CHATTY, Level::Debug.admits(serial_log::VERBOSITY));
/// ```
#[macro_export]
macro_rules! enabled {
    ($level:expr) => {
        <$crate::gate::Gate<{ $crate::Level::admits($level, $crate::VERBOSITY) }> as $crate::gate::Pass>::OPEN
    };
}



/// Logs a message at [`Level::Fatal`](crate::Level::Fatal).
///
/// If the build-wide threshold does not admit FATAL, this macro expands to nothing at all.
#[cfg(serial_log_fatal)]
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Fatal, $($arg)+)
    };
}
/// Logs a message at [`Level::Fatal`](crate::Level::Fatal).
///
/// The build-wide threshold does not admit FATAL, so this macro expands to nothing at all.
#[cfg(not(serial_log_fatal))]
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        ()
    };
}

/// Logs a message at [`Level::Error`](crate::Level::Error).
///
/// If the build-wide threshold does not admit ERROR, this macro expands to nothing at all.
#[cfg(serial_log_error)]
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Error, $($arg)+)
    };
}
/// Logs a message at [`Level::Error`](crate::Level::Error).
///
/// The build-wide threshold does not admit ERROR, so this macro expands to nothing at all.
#[cfg(not(serial_log_error))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        ()
    };
}

/// Logs a message at [`Level::Warning`](crate::Level::Warning). Also available as `warn!()`.
///
/// If the build-wide threshold does not admit WARNING, this macro expands to nothing at all.
#[cfg(serial_log_warning)]
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Warning, $($arg)+)
    };
}
/// Logs a message at [`Level::Warning`](crate::Level::Warning). Also available as `warn!()`.
///
/// The build-wide threshold does not admit WARNING, so this macro expands to nothing at all.
#[cfg(not(serial_log_warning))]
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        ()
    };
}

/// Logs a message at [`Level::Info`](crate::Level::Info).
///
/// If the build-wide threshold does not admit INFO, this macro expands to nothing at all.
#[cfg(serial_log_info)]
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Info, $($arg)+)
    };
}
/// Logs a message at [`Level::Info`](crate::Level::Info).
///
/// The build-wide threshold does not admit INFO, so this macro expands to nothing at all.
#[cfg(not(serial_log_info))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        ()
    };
}

/// Logs a message at [`Level::Debug`](crate::Level::Debug).
///
/// If the build-wide threshold does not admit DEBUG, this macro expands to nothing at all.
#[cfg(serial_log_debug)]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::log!($crate::Level::Debug, $($arg)+)
    };
}
/// Logs a message at [`Level::Debug`](crate::Level::Debug).
///
/// The build-wide threshold does not admit DEBUG, so this macro expands to nothing at all.
#[cfg(not(serial_log_debug))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        ()
    };
}





/***** TESTS *****/
