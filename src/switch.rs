//  SWITCH.rs
//    by Lut99
//
//  Created:
//    15 Oct 2026, 09:31:02
//  Last edited:
//    17 Oct 2026, 11:02:40
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the [`Switch`]es through which a module can log more (or
//!   less) than the rest of the program.
//!
//!   A switch is a named level slot (`FATAL`, `ERROR`, `WARNING`, `INFO` or
//!   `DEBUG`) used through [`log_switch!()`](crate::log_switch!()). Modules
//!   that do not override anything import this module as-is:
//!   ```rust
//!   use serial_log::{log_switch, switch};
//!
//!   log_switch!(INFO, "Only shown if INFO is admitted by the global threshold");
//!   ```
//!   whereas modules that want to deviate declare their own `switch` with
//!   `overrides!{}`, which shadows the chosen slots and re-exports the rest
//!   from here:
//!   ```rust
//!   # mod radio {
//!   use serial_log::{log_switch, overrides};
//!
//!   overrides! {
//!       // INFO-calls in this module are gated against DEBUG instead of the global threshold
//!       INFO = DEBUG,
//!       // DEBUG-calls in this module count as if they were FATAL
//!       DEBUG as FATAL,
//!   }
//!
//!   pub fn tune() {
//!       log_switch!(INFO, "Tuning...");
//!       log_switch!(DEBUG, "Tuned to {} MHz", 433);
//!   }
//!   # }
//!   # radio::tune();
//!   ```
//

use crate::level::Level;


/***** HELPER MACROS *****/
/// Defines a switch for every given level, behaving exactly like that same level.
macro_rules! default_switches {
    ($($variant:ident),+ $(,)?) => {
        paste::paste! {
            $(
                #[doc = concat!("The switch for [`Level::", stringify!($variant), "`]. By default, behaves exactly like that level.")]
                pub const [<$variant:upper>]: Switch = Switch::new(Level::$variant);
            )+
        }
    };
}





/***** LIBRARY *****/
/// A named level slot, possibly overridden by a module.
///
/// There are two ways to override a slot, which may be combined:
/// - [remapping](Switch::remap()) it, after which calls through the slot are made at another
///   [`Level`] (and gated against the global threshold as usual); and
/// - giving it a [local threshold](Switch::with_threshold()), which replaces the global threshold
///   for calls through this slot.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Switch {
    /// The level at which calls through this switch are made.
    pub level:     Level,
    /// If given, the threshold that replaces the global one for calls through this switch.
    pub threshold: Option<Level>,
}
impl Switch {
    /// Constructor for a Switch that behaves exactly like the given level.
    ///
    /// # Arguments
    /// - `level`: The [`Level`] of the slot.
    ///
    /// # Returns
    /// A new Switch without any overrides.
    #[inline]
    pub const fn new(level: Level) -> Self { Self { level, threshold: None } }

    /// Makes calls through this switch happen at another level.
    ///
    /// # Arguments
    /// - `level`: The [`Level`] to make calls at instead.
    ///
    /// # Returns
    /// A copy of `self` with the level replaced.
    #[inline]
    pub const fn remap(self, level: Level) -> Self { Self { level, threshold: self.threshold } }

    /// Gates calls through this switch by a local threshold instead of the global one.
    ///
    /// # Arguments
    /// - `threshold`: The local threshold [`Level`].
    ///
    /// # Returns
    /// A copy of `self` with the threshold replaced.
    #[inline]
    pub const fn with_threshold(self, threshold: Level) -> Self { Self { level: self.level, threshold: Some(threshold) } }

    /// Returns the threshold that applies to calls through this switch.
    ///
    /// # Arguments
    /// - `global`: The global threshold, used if this switch has no local one.
    #[inline]
    pub const fn threshold_or(self, global: Level) -> Level {
        match self.threshold {
            Some(threshold) => threshold,
            None => global,
        }
    }

    /// Returns whether calls through this switch are admitted.
    ///
    /// # Arguments
    /// - `global`: The global threshold, used if this switch has no local one.
    ///
    /// # Returns
    /// True if the switch's (possibly remapped) level is admitted by its (possibly local)
    /// threshold.
    #[inline]
    pub const fn admits(self, global: Level) -> bool { self.level.admits(self.threshold_or(global)) }
}



default_switches!(Fatal, Error, Warning, Info, Debug);





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_switches() {
        assert_eq!(FATAL, Switch::new(Level::Fatal));
        assert_eq!(ERROR, Switch::new(Level::Error));
        assert_eq!(WARNING, Switch::new(Level::Warning));
        assert_eq!(INFO, Switch::new(Level::Info));
        assert_eq!(DEBUG, Switch::new(Level::Debug));
    }

    #[test]
    fn test_default_switches_follow_global() {
        for global in Level::ALL {
            for switch in [FATAL, ERROR, WARNING, INFO, DEBUG] {
                assert_eq!(switch.admits(global), switch.level.admits(global));
            }
        }
    }

    #[test]
    fn test_switch_local_threshold() {
        // More verbose than the rest of the program
        let info: Switch = INFO.with_threshold(Level::Debug);
        assert!(info.admits(Level::Fatal));
        assert!(info.admits(Level::None));
        // Less verbose than the rest of the program
        let info: Switch = INFO.with_threshold(Level::None);
        assert!(!info.admits(Level::Debug));
    }

    #[test]
    fn test_switch_remap() {
        let debug: Switch = DEBUG.remap(Level::Fatal);
        assert_eq!(debug.level, Level::Fatal);
        assert!(debug.admits(Level::Fatal));
        assert!(!debug.admits(Level::None));
        assert!(!DEBUG.admits(Level::Fatal));
    }

    #[test]
    fn test_switch_remap_and_threshold() {
        let warning: Switch = WARNING.remap(Level::Debug).with_threshold(Level::Info);
        assert!(!warning.admits(Level::Debug));
        let warning: Switch = WARNING.with_threshold(Level::Info).remap(Level::Error);
        assert_eq!(warning.threshold_or(Level::None), Level::Info);
        assert!(warning.admits(Level::None));
    }
}
