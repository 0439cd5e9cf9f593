use super::{ErrorSet, Field};

#[derive(Debug)]
pub(crate) struct Record {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Fields, in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Record> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "generic records are not supported",
            ));
        }

        let syn::Fields::Named(named) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                ast,
                "records must be structs with named fields",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut fields = Vec::with_capacity(named.named.len());

        for field in &named.named {
            match Field::from_ast(field, &ast.ident) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        errs.check()?;

        Ok(Record {
            ident: ast.ident.clone(),
            fields,
        })
    }
}
