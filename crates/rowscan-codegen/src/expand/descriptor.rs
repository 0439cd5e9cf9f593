use super::Expand;
use crate::schema::{DbAttr, Field, FieldTy};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Record::descriptor`: a static built at compile time.
    pub(super) fn expand_descriptor(&self) -> TokenStream {
        let rowscan = &self.rowscan;
        let name = self.record.ident.to_string();
        let fields = self
            .record
            .fields
            .iter()
            .map(|field| self.expand_field_descriptor(field));

        quote! {
            static DESCRIPTOR: #rowscan::RecordDescriptor = #rowscan::RecordDescriptor {
                name: #name,
                fields: &[ #( #fields ),* ],
            };

            &DESCRIPTOR
        }
    }

    fn expand_field_descriptor(&self, field: &Field) -> TokenStream {
        let rowscan = &self.rowscan;
        let name = &field.name;
        let exported = field.exported;
        let embedded = field.is_embedded();

        let tag = match &field.attr.column {
            Some(column) if column.value() == DbAttr::IGNORE => quote!(#rowscan::Tag::Ignore),
            Some(column) => quote!(#rowscan::Tag::Column(#column)),
            None => quote!(#rowscan::Tag::Absent),
        };

        let ty = match &field.ty {
            FieldTy::Value => quote!(#rowscan::FieldTy::Value),
            FieldTy::Record { ty, .. } => quote! {
                #rowscan::FieldTy::Record(<#ty as #rowscan::Record>::descriptor)
            },
        };

        quote! {
            #rowscan::FieldDescriptor {
                name: #name,
                tag: #tag,
                exported: #exported,
                embedded: #embedded,
                ty: #ty,
            }
        }
    }
}
