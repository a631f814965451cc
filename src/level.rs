//  LEVEL.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 10:21:47
//  Last edited:
//    16 Oct 2026, 16:58:12
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the severity [`Level`]s and the rule deciding which of them a
//!   threshold admits.
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};
use std::str::FromStr;

use enum_debug::EnumDebug;


/***** ERRORS *****/
/// Defines errors occurring when parsing [`Level`]s.
#[derive(Debug)]
pub enum Error {
    /// The given name is not a level we know.
    UnknownName { raw: String },
    /// The given number is not in the range of levels.
    OutOfRange { raw: u8 },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> FResult {
        match self {
            Self::UnknownName { raw } => {
                write!(f, "Unknown level '{raw}' (expected one of ")?;
                for (i, level) in Level::ALL.iter().enumerate() {
                    if i > 0 && i < Level::ALL.len() - 1 {
                        write!(f, ", ")?;
                    } else if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{level}")?;
                }
                write!(f, ")")
            },
            Self::OutOfRange { raw } => write!(f, "Level {raw} is out of range (expected 0..={})", Level::Debug as u8),
        }
    }
}
impl error::Error for Error {}





/***** LIBRARY FUNCTIONS *****/
/// Decides whether a raw, runtime-determined level is admitted by a threshold.
///
/// This is the same rule as [`Level::admits()`], except that it accepts any number. Numbers above
/// [`Level::Debug`] count as even more verbose, and are thus never admitted.
///
/// # Arguments
/// - `raw`: The numeric level of the call.
/// - `threshold`: The threshold to check against.
///
/// # Returns
/// True if a call at `raw` should produce output, false otherwise.
#[inline]
pub const fn admits_raw(raw: u8, threshold: Level) -> bool { raw != Level::None as u8 && raw <= threshold as u8 }





/***** LIBRARY *****/
/// The severity of a log call, ordered from least to most verbose.
///
/// A threshold admits every level that is numerically smaller or equal to it. [`Level::None`] is
/// special in both roles: as a threshold it admits nothing, and as the level of a call it is never
/// admitted.
#[derive(Clone, Copy, Debug, EnumDebug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum Level {
    /// Nothing at all.
    None    = 0,
    /// The program cannot continue.
    Fatal   = 1,
    /// Something failed.
    Error   = 2,
    /// Something looks off.
    Warning = 3,
    /// Progress updates.
    Info    = 4,
    /// Everything else.
    Debug   = 5,
}
impl Level {
    /// All levels, in order.
    pub const ALL: [Self; 6] = [Self::None, Self::Fatal, Self::Error, Self::Warning, Self::Info, Self::Debug];


    /// Returns whether a call at this level is admitted by the given threshold.
    ///
    /// Being a `const fn`, this is what the logging macros evaluate at compile time.
    ///
    /// # Arguments
    /// - `threshold`: The maximum level that may produce output.
    ///
    /// # Returns
    /// True if `self` is not [`Level::None`] and is at most as verbose as `threshold`.
    #[inline]
    pub const fn admits(self, threshold: Self) -> bool { admits_raw(self as u8, threshold) }

    /// Returns the level belonging to a raw number, but only if it is admitted by the threshold.
    ///
    /// This is used by the runtime-checked logging path to go from a number back to a level.
    ///
    /// # Arguments
    /// - `raw`: The numeric level of the call.
    /// - `threshold`: The threshold to check against.
    ///
    /// # Returns
    /// The [`Level`] with value `raw`, or [`None`] if `raw` is not admitted by `threshold`.
    #[inline]
    pub const fn admitted(raw: u8, threshold: Self) -> Option<Self> {
        if admits_raw(raw, threshold) {
            // Within 1..=threshold, so always a valid index
            Some(Self::ALL[raw as usize])
        } else {
            None
        }
    }

    /// Returns the name of this level as it appears in configuration.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }
}

impl Display for Level {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { f.pad(self.name()) }
}
impl FromStr for Level {
    type Err = Error;

    /// Parses a level from its name (case-insensitive, with or without a `LOG_` prefix) or from
    /// its number.
    #[inline]
    fn from_str(s: &str) -> Result<Self, Error> {
        let trimmed: &str = s.trim();
        if let Ok(raw) = trimmed.parse::<u8>() {
            return Self::try_from(raw);
        }
        let upper: String = trimmed.to_uppercase();
        let name: &str = upper.strip_prefix("LOG_").unwrap_or(&upper);
        Self::ALL.into_iter().find(|level| level.name() == name).ok_or_else(|| Error::UnknownName { raw: s.into() })
    }
}
impl TryFrom<u8> for Level {
    type Error = Error;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Error> { Self::ALL.get(value as usize).copied().ok_or(Error::OutOfRange { raw: value }) }
}
impl From<Level> for u8 {
    #[inline]
    fn from(value: Level) -> Self { value as u8 }
}



/// Abstracts over things that can be passed as a runtime-determined level.
///
/// Implemented for [`Level`] itself and for plain numbers, so loops over `u8`s work too.
pub trait RawLevel {
    /// Returns the numeric value of this level.
    fn raw(self) -> u8;
}
impl RawLevel for Level {
    #[inline]
    fn raw(self) -> u8 { self as u8 }
}
impl RawLevel for u8 {
    #[inline]
    fn raw(self) -> u8 { self }
}
impl<T: Copy + RawLevel> RawLevel for &T {
    #[inline]
    fn raw(self) -> u8 { (*self).raw() }
}





/***** TESTS *****/
