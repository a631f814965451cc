//  SMART SWITCH.rs
//    by Lut99
//
//  Created:
//    16 Oct 2026, 10:11:38
//  Last edited:
//    17 Oct 2026, 12:30:02
//  Auto updated?
//    Yes
//
//  Description:
//!   Shows which log calls survive the build-wide threshold.
//!
//!   Build with, e.g.,
//!   ```bash
//!   SERIAL_VERBOSITY=FATAL cargo run --example smart_switch --release
//!   ```
//!   and then inspect the binary with `strings`: only the format strings of
//!   admitted calls, plus the one of the runtime-checked loop, are in there.
//

use clap::Parser;
use console::style;
use enum_debug::EnumDebug as _;
use error_trace::toplevel;
use humanlog::{DebugMode, HumanLogger};
use serial_log::{Level, log, log_dyn, log_switch, switch};


/***** CONSTANTS *****/
/// The default end of the runtime-checked loop. Anything from 6 onwards is never admitted.
pub const MAX_DEBUG_LEVELS: u8 = 9;





/***** ARGUMENTS *****/
/// Defines arguments to the demo.
#[derive(Debug, Parser)]
pub struct Arguments {
    /// If given, enables more verbose logging of the demo itself.
    #[clap(long, global = true)]
    debug: bool,

    /// The first level of the runtime-checked loop.
    #[clap(long, default_value_t = 3)]
    from:  u8,
    /// The level after the last one of the runtime-checked loop.
    #[clap(long, default_value_t = MAX_DEBUG_LEVELS)]
    to:    u8,
    /// If given, only reports whether the given level is admitted by this build and then quits.
    #[clap(long)]
    level: Option<String>,
}





/***** MODULES *****/
/// A module that is only interested in its own debug output.
mod radio {
    use serial_log::{log_switch, overrides};

    overrides! {
        DEBUG as FATAL,
    }

    /// Logs through the module-local DEBUG-switch.
    pub fn tune() {
        log_switch!(DEBUG, "Log test of module!");
    }
}





/***** ENTRYPOINT *****/
fn main() {
    // Parse the CLI arguments
    let args = Arguments::parse();

    // Setup the logger
    if let Err(err) = HumanLogger::terminal(if args.debug { DebugMode::Full } else { DebugMode::HumanFriendly }).init() {
        eprintln!("WARNING: Failed to setup logger: {err} (no logging for this session)");
    }
    log::info!("{} - v{}", env!("CARGO_CRATE_NAME"), env!("CARGO_PKG_VERSION"));
    log::debug!("Built with verbosity {} ({})", serial_log::VERBOSITY, serial_log::VERBOSITY.variant());

    // Answer a question about a level if asked
    if let Some(raw) = &args.level {
        let level: Level = match raw.parse() {
            Ok(level) => level,
            Err(err) => {
                log::error!("{}", toplevel!(("Failed to parse level '{}'", raw), err));
                std::process::exit(1);
            },
        };
        println!(
            "Level {} is {} by this build (verbosity {})",
            style(level).bold(),
            if serial_log::enabled(level) { style("admitted").green() } else { style("suppressed").red() },
            serial_log::VERBOSITY
        );
        return;
    }

    // A literal level; gone from the binary unless INFO is admitted
    println!("{}", style("Constant level").bold());
    log!(Level::Info, "Log test!");

    // Through switches, once overridden and once not
    println!("{}", style("Switches").bold());
    radio::tune();
    log_switch!(DEBUG, "Log test of the default switch!");

    // The wrapper, which is an empty macro unless INFO is admitted
    println!("{}", style("Wrapper").bold());
    serial_log::info!("Check precompiler output!");

    // Levels only known at runtime; always in the binary, checked at runtime
    println!("{}", style("Runtime levels").bold());
    if args.from >= args.to {
        log::warn!("Empty range of levels {}..{}; nothing to loop over", args.from, args.to);
    }
    for i in args.from..args.to {
        log::debug!("Trying level {i} (admitted: {})", serial_log::enabled(i));
        log_dyn!(i, "Hello debug level {i}");
    }
}
