extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `Record` and `Destination` for a struct with named fields.
///
/// Field attributes:
///
/// - `#[db("name")]` sets the column name (or the column prefix of an
///   embedded record);
/// - `#[db("-")]` hides the field from scanning;
/// - `#[db(embed)]` promotes a nested record's columns into this record;
/// - `#[db(nested)]` makes a nested record's columns reachable as
///   `field.column`.
#[proc_macro_derive(Record, attributes(db))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowscan_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
