use super::Expand;
use crate::schema::FieldTy;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Record::fields_mut`.
    ///
    /// Destructuring `self` splits the borrow so every visible field can be
    /// handed out at once. Hidden fields are bound to `_` and reported as
    /// `FieldMut::Skip`, so their types need no rowscan traits.
    pub(super) fn expand_fields_mut(&self) -> TokenStream {
        let rowscan = &self.rowscan;
        let mut bindings = vec![];
        let mut accessors = vec![];

        for field in &self.record.fields {
            let ident = &field.ident;

            if !field.is_visible() {
                bindings.push(quote!(#ident: _));
                accessors.push(quote!(#rowscan::FieldMut::Skip));
                continue;
            }

            bindings.push(quote!(#ident));
            accessors.push(match &field.ty {
                FieldTy::Value => quote!(#rowscan::FieldMut::Value(#ident)),
                FieldTy::Record {
                    optional: false, ..
                } => quote!(#rowscan::FieldMut::Record(#ident)),
                FieldTy::Record { optional: true, .. } => {
                    quote!(#rowscan::FieldMut::OptionalRecord(#ident))
                }
            });
        }

        quote! {
            let Self { #( #bindings ),* } = self;
            vec![ #( #accessors ),* ]
        }
    }
}
