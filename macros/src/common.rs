//  COMMON.rs
//    by Lut99
//
//  Created:
//    15 Oct 2026, 10:12:43
//  Last edited:
//    17 Oct 2026, 09:58:30
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines things shared by (possibly future) macros of this crate.
//

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::parse::{Parse, ParseStream};
use syn::token::{Bracket, Eq, Not, Pound};
use syn::{Error, Path, Token, bracketed};


/***** LIBRARY *****/
/// The path to the `serial-log`-crate in the generated code.
#[derive(Clone)]
pub struct CratePath(pub Option<Path>);
impl Default for CratePath {
    #[inline]
    fn default() -> Self { Self(None) }
}
impl ToTokens for CratePath {
    #[inline]
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        match &self.0 {
            Some(path) => path.to_tokens(tokens),
            None => tokens.extend(quote! { ::serial_log }),
        }
    }
}



/// Defines the (inner) attributes that may be given at the top of a macro's input.
///
/// # Syntax
/// ```plain
/// #![crate = ::some::path]
/// ```
#[derive(Clone, Default)]
pub struct Attributes {
    /// The path to the `serial-log`-crate.
    pub crate_path: CratePath,
}
impl Parse for Attributes {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attrs: Self = Self::default();
        let mut crate_span: Option<Span> = None;
        while input.peek(Pound) && input.peek2(Not) {
            let _pound: Pound = input.parse()?;
            let _not: Not = input.parse()?;
            let content;
            let _bracket: Bracket = bracketed!(content in input);

            // Only `crate = ...` for now
            if !content.peek(Token![crate]) {
                return Err(content.error("Unknown attribute (expected `crate = <path>`)"));
            }
            let key: Token![crate] = content.parse()?;
            if let Some(prev) = crate_span {
                let mut err = Error::new(key.span, "Duplicate `crate`-attribute");
                err.combine(Error::new(prev, "First given here"));
                return Err(err);
            }
            crate_span = Some(key.span);
            let _eq: Eq = content.parse()?;
            attrs.crate_path = CratePath(Some(content.call(Path::parse_mod_style)?));
            if !content.is_empty() {
                return Err(content.error("Unexpected tokens after crate path"));
            }
        }
        Ok(attrs)
    }
}





/***** TESTS *****/
