mod descriptor;
mod fields;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowscan types
    rowscan: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowscan = &self.rowscan;
        let ident = &self.record.ident;
        let descriptor = self.expand_descriptor();
        let fields_mut = self.expand_fields_mut();

        wrap_in_const(quote! {
            impl #rowscan::Record for #ident {
                fn descriptor() -> &'static #rowscan::RecordDescriptor {
                    #descriptor
                }

                fn record_descriptor(&self) -> &'static #rowscan::RecordDescriptor {
                    <Self as #rowscan::Record>::descriptor()
                }

                #[allow(non_snake_case)]
                fn fields_mut(&mut self) -> Vec<#rowscan::FieldMut<'_>> {
                    #fields_mut
                }
            }

            impl #rowscan::Destination for #ident {
                fn shape(&mut self) -> #rowscan::Shape<'_> {
                    #rowscan::Shape::Record(self)
                }
            }
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rowscan: quote!(_rowscan::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowscan as _rowscan;
            #code
        };
    }
}
