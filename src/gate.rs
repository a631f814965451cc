//  GATE.rs
//    by Lut99
//
//  Created:
//    14 Oct 2026, 11:05:30
//  Last edited:
//    16 Oct 2026, 15:12:03
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the type-level switch that makes disabled log calls
//!   disappear from the binary.
//!
//!   The macros evaluate the admission check as the const argument of a
//!   [`Gate`], and hand the actual logging over as a closure. The closed
//!   gate simply drops that closure without calling it, so its body (with
//!   the format string and the argument expressions) is never
//!   monomorphized. This does not rely on the optimizer; it holds at any
//!   `opt-level`.
//


/***** LIBRARY *****/
/// A gate that is either [open](Gate<true>) or [closed](Gate<false>) at compile time.
///
/// Not meant to be used directly; see [`log!()`](crate::log!()).
pub struct Gate<const OPEN: bool>;



/// Passes a closure through a [`Gate`], or not.
pub trait Pass {
    /// Whether this gate lets anything through.
    const OPEN: bool;

    /// Runs `f` if this gate is open. Otherwise, `f` is dropped uncalled.
    ///
    /// # Arguments
    /// - `f`: The closure to (maybe) run.
    fn pass<F: FnOnce()>(f: F);
}
impl Pass for Gate<true> {
    const OPEN: bool = true;

    #[inline(always)]
    fn pass<F: FnOnce()>(f: F) { f() }
}
impl Pass for Gate<false> {
    const OPEN: bool = false;

    #[inline(always)]
    fn pass<F: FnOnce()>(_f: F) {}
}





/***** TESTS *****/
