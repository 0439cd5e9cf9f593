use super::{ty, DbAttr, ErrorSet};

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Identifier as written, used to destructure the struct
    pub(crate) ident: syn::Ident,

    /// Identifier with any `r#` prefix removed, handed to the name mapper
    pub(crate) name: String,

    /// True for `pub` fields, in any form
    pub(crate) exported: bool,

    /// Parsed `#[db(...)]` attribute, if present
    pub(crate) attr: DbAttr,

    pub(crate) ty: FieldTy,
}

#[derive(Debug)]
pub(crate) enum FieldTy {
    /// Leaf field receiving one column value
    Value,

    /// Nested record; `ty` has any `Option` wrapper removed
    Record { ty: syn::Type, optional: bool },
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, record_ident: &syn::Ident) -> syn::Result<Field> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attr = None;

        for a in &field.attrs {
            if !a.path().is_ident("db") {
                continue;
            }

            if attr.is_some() {
                errs.push_spanned(a, "duplicate #[db] attribute");
                continue;
            }

            match DbAttr::from_ast(a) {
                Ok(parsed) => attr = Some(parsed),
                Err(err) => errs.push(err),
            }
        }

        errs.check()?;

        let attr = attr.unwrap_or_default();

        let ty = if attr.embed.is_some() || attr.nested.is_some() {
            let mut record_ty = field.ty.clone();
            rewrite_self(&mut record_ty, record_ident);

            match ty::option_inner(&record_ty) {
                Some(inner) => FieldTy::Record {
                    ty: inner.clone(),
                    optional: true,
                },
                None => FieldTy::Record {
                    ty: record_ty,
                    optional: false,
                },
            }
        } else {
            FieldTy::Value
        };

        Ok(Field {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            exported: !matches!(field.vis, syn::Visibility::Inherited),
            attr,
            ty,
        })
    }

    pub(crate) fn is_embedded(&self) -> bool {
        self.attr.embed.is_some()
    }

    /// Whether the generated accessor hands out this field at all.
    ///
    /// Mirrors the resolver: ignored fields and private, non-embedded fields
    /// never appear in a column map.
    pub(crate) fn is_visible(&self) -> bool {
        (self.exported || self.is_embedded()) && !self.attr.is_ignore()
    }
}

fn rewrite_self(ty: &mut syn::Type, record: &syn::Ident) {
    use syn::visit_mut::VisitMut;

    struct RewriteSelf<'a>(&'a syn::Ident);

    impl VisitMut for RewriteSelf<'_> {
        fn visit_path_mut(&mut self, path: &mut syn::Path) {
            syn::visit_mut::visit_path_mut(self, path);

            if path.is_ident("Self") {
                path.segments[0].ident = self.0.clone();
            }
        }
    }

    RewriteSelf(record).visit_type_mut(ty);
}
