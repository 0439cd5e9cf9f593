/// Parsed `#[db(...)]` field attribute.
///
/// Allowed syntax:
///
/// ```text
/// #[db("name")]          column name, or column prefix for embedded records
/// #[db("-")]             ignore the field (and its subtree)
/// #[db(embed)]           promote the record's columns into the parent
/// #[db(nested)]          record reachable as `field.column`
/// #[db("post", embed)]   options combine, in any order
/// ```
#[derive(Debug, Default)]
pub(crate) struct DbAttr {
    pub(crate) column: Option<syn::LitStr>,
    pub(crate) embed: Option<kw::embed>,
    pub(crate) nested: Option<kw::nested>,
}

pub(crate) mod kw {
    syn::custom_keyword!(embed);
    syn::custom_keyword!(nested);
}

impl DbAttr {
    pub(crate) const IGNORE: &'static str = "-";

    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<DbAttr> {
        attr.parse_args()
    }

    pub(crate) fn is_ignore(&self) -> bool {
        self.column
            .as_ref()
            .is_some_and(|column| column.value() == Self::IGNORE)
    }
}

impl syn::parse::Parse for DbAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = DbAttr::default();

        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.column.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                let column: syn::LitStr = input.parse()?;
                if column.value().is_empty() {
                    return Err(syn::Error::new(column.span(), "column name cannot be empty"));
                }
                result.column = Some(column);
            } else if lookahead.peek(kw::embed) {
                if result.embed.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate `embed`"));
                }
                result.embed = Some(input.parse()?);
            } else if lookahead.peek(kw::nested) {
                if result.nested.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate `nested`"));
                }
                result.nested = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
            if input.is_empty() {
                break;
            }
        }

        if let (Some(embed), Some(_)) = (&result.embed, &result.nested) {
            return Err(syn::Error::new(
                embed.span,
                "a field cannot be both `embed` and `nested`",
            ));
        }

        Ok(result)
    }
}
