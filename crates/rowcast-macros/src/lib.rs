extern crate proc_macro;

mod expand;

use proc_macro::TokenStream;

/// Derives row mapping for a named-field struct.
///
/// The derive records a static capability descriptor for the type: its field
/// table (normalized names, nullability, setter functions) and the
/// constructor strategies the mapper may use.
///
/// Strategies, controlled by the container attribute:
///
/// - default: populate an instance obtained from `Default::default()` by
///   matching column names against field names (case-insensitive,
///   underscore-insensitive).
/// - `#[rowcast(positional)]`: additionally construct from row values in
///   field declaration order; preferred over the populate path when present.
/// - `#[rowcast(no_default)]`: drop the `Default` requirement (and the
///   populate path) for types that are positional-only.
#[proc_macro_derive(FromRow, attributes(rowcast))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    match expand::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
