//  OVERRIDES.rs
//    by Lut99
//
//  Created:
//    15 Oct 2026, 10:40:05
//  Last edited:
//    17 Oct 2026, 10:21:12
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the [`overrides!()`]-macro.
//

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote, quote_spanned};
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned as _;
use syn::token::{As, Comma, Eq};
use syn::{Error, Ident, LitInt, Path};

use crate::common::{Attributes, CratePath};


/***** CONSTANTS *****/
/// The levels we know, in order, as `(name, variant)`. The index is the level's number.
const LEVELS: [(&str, &str); 6] =
    [("NONE", "None"), ("FATAL", "Fatal"), ("ERROR", "Error"), ("WARNING", "Warning"), ("INFO", "Info"), ("DEBUG", "Debug")];





/***** HELPER FUNCTIONS *****/
/// Finds a level by name.
///
/// # Arguments
/// - `name`: The name to look for. Case-insensitive, and may be prefixed with `LOG_`.
///
/// # Returns
/// The level's number, or [`None`] if we don't know it.
fn find_level(name: &str) -> Option<usize> {
    let upper: String = name.to_uppercase();
    let upper: &str = upper.strip_prefix("LOG_").unwrap_or(&upper);
    LEVELS.iter().position(|(level, _)| *level == upper)
}





/***** AST *****/
/// A level given as value of an override.
///
/// # Syntax
/// ```plain
/// DEBUG
/// log_debug
/// Level::Debug
/// 5
/// ```
struct LevelValue {
    /// The number of the level.
    index: usize,
    /// Where it was given.
    span:  Span,
}
impl Parse for LevelValue {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitInt) {
            let lit: LitInt = input.parse()?;
            let index: usize = lit.base10_parse()?;
            if index >= LEVELS.len() {
                return Err(Error::new(lit.span(), format!("Level {index} is out of range (expected 0..={})", LEVELS.len() - 1)));
            }
            return Ok(Self { index, span: lit.span() });
        }

        // Otherwise, it's a path of which we only care about the last bit
        let path: Path = input.parse()?;
        let last: &Ident = match path.segments.last() {
            Some(segment) => &segment.ident,
            None => return Err(Error::new(path.span(), "Expected a level")),
        };
        match find_level(&last.to_string()) {
            Some(index) => Ok(Self { index, span: path.span() }),
            None => Err(Error::new(
                path.span(),
                format!("Unknown level '{last}' (expected NONE, FATAL, ERROR, WARNING, INFO, DEBUG or an integer in 0..=5)"),
            )),
        }
    }
}
impl LevelValue {
    /// Serializes the level as a path to the matching `Level`-variant.
    fn serialize(&self, crate_path: &CratePath) -> TokenStream2 {
        let variant: Ident = format_ident!("{}", LEVELS[self.index].1, span = self.span);
        quote_spanned! { self.span => #crate_path::Level::#variant }
    }
}

/// One override of a switch.
///
/// # Syntax
/// ```plain
/// INFO = DEBUG
/// DEBUG as FATAL
/// DEBUG as INFO = WARNING
/// ```
struct Override {
    /// The switch to override.
    slot:      Ident,
    /// The level at which calls through the switch will be made, if any.
    remap:     Option<(As, LevelValue)>,
    /// The local threshold for calls through the switch, if any.
    threshold: Option<(Eq, LevelValue)>,
}
impl Parse for Override {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let slot: Ident = match find_level(&name.to_string()) {
            Some(0) => return Err(Error::new(name.span(), "NONE has no switch (expected FATAL, ERROR, WARNING, INFO or DEBUG)")),
            Some(index) => Ident::new(LEVELS[index].0, name.span()),
            None => return Err(Error::new(name.span(), format!("Unknown switch '{name}' (expected FATAL, ERROR, WARNING, INFO or DEBUG)"))),
        };

        // Then the override(s)
        let remap: Option<(As, LevelValue)> = if input.peek(As) { Some((input.parse()?, input.parse()?)) } else { None };
        let threshold: Option<(Eq, LevelValue)> = if input.peek(Eq) { Some((input.parse()?, input.parse()?)) } else { None };
        if remap.is_none() && threshold.is_none() {
            return Err(Error::new(slot.span(), format!("Expected `as <LEVEL>` and/or `= <LEVEL>` after '{slot}'")));
        }
        Ok(Self { slot, remap, threshold })
    }
}
impl Override {
    /// Serializes the override as a constant shadowing the default switch.
    fn serialize(&self, crate_path: &CratePath) -> TokenStream2 {
        let Self { slot, remap, threshold } = self;

        let mut value: TokenStream2 = quote_spanned! { slot.span() => #crate_path::switch::#slot };
        if let Some((_, level)) = remap {
            let level: TokenStream2 = level.serialize(crate_path);
            value = quote! { #value.remap(#level) };
        }
        if let Some((_, level)) = threshold {
            let level: TokenStream2 = level.serialize(crate_path);
            value = quote! { #value.with_threshold(#level) };
        }
        quote_spanned! { slot.span() => pub const #slot: #crate_path::switch::Switch = #value; }
    }
}





/***** LIBRARY *****/
/// Implements the `overrides!()`-macro.
///
/// # Arguments
/// - `input`: The input tokens to parse, as a [`ParseStream`].
///
/// # Returns
/// A [`TokenStream2`] declaring a module-local `switch`-module.
///
/// # Errors
/// This function errors if the input names unknown switches or levels, or names the same switch
/// twice.
pub fn overrides(input: ParseStream) -> Result<TokenStream2, Error> {
    // Parse from the input first: attributes
    let attrs: Attributes = input.parse()?;
    let crate_path: &CratePath = &attrs.crate_path;

    // Then the overrides themselves
    let overrides: Punctuated<Override, Comma> = Punctuated::parse_terminated(input)?;
    let mut seen: Vec<&Ident> = Vec::with_capacity(overrides.len());
    for over in &overrides {
        if let Some(prev) = seen.iter().find(|prev| **prev == &over.slot) {
            let mut err = Error::new(over.slot.span(), format!("Switch '{}' is overridden more than once", over.slot));
            err.combine(Error::new(prev.span(), "First overridden here"));
            return Err(err);
        }
        seen.push(&over.slot);
    }

    // Serialize
    let consts = overrides.iter().map(|over| over.serialize(crate_path));
    let span: Span = overrides.first().map(|over| over.slot.span()).unwrap_or_else(Span::call_site);
    Ok(quote_spanned! {
        span =>
        #[allow(dead_code, unused_imports)]
        mod switch {
            pub use #crate_path::switch::*;
            #(#consts)*
        }
    })
}





/***** TESTS *****/
