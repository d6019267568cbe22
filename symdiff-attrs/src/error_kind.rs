use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    punctuated::Punctuated,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    MetaNameValue,
    Path,
    Result,
    Token,
};

/// The `name = expr` tags collected from every `#[error(...)]` attribute on a struct.
#[derive(Debug, Default)]
struct Tags {
    message: Option<Expr>,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl Tags {
    fn slot(&mut self, path: &Path) -> Result<&mut Option<Expr>> {
        if path.is_ident("message") {
            Ok(&mut self.message)
        } else if path.is_ident("labels") {
            Ok(&mut self.labels)
        } else if path.is_ident("help") {
            Ok(&mut self.help)
        } else {
            Err(syn::Error::new_spanned(path, "expected one of `message`, `labels` or `help`"))
        }
    }

    /// Reads the tags off the struct's attributes. A tag may appear at most once, though it may
    /// be spread over several `error` attributes.
    fn collect(item: &ItemStruct) -> Result<Self> {
        let mut tags = Self::default();
        let error_attrs = item.attrs.iter().filter(|attr| attr.path().is_ident("error"));

        for attr in error_attrs {
            let pairs = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;
            for MetaNameValue { path, value, .. } in pairs {
                if tags.slot(&path)?.replace(value).is_some() {
                    return Err(syn::Error::new_spanned(path, "tag given more than once"));
                }
            }
        }

        Ok(tags)
    }
}

/// A struct deriving [`ErrorKind`], together with the report information from its attributes.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    fields: Fields,
    message: Expr,
    labels: Option<Expr>,
    help: Option<Expr>,
}

impl ErrorKindTarget {
    pub fn from_item(item: ItemStruct) -> Result<Self> {
        let Tags { message, labels, help } = Tags::collect(&item)?;
        let message = message.ok_or_else(|| syn::Error::new_spanned(
            &item.ident,
            "`ErrorKind` requires an `#[error(message = ...)]` attribute",
        ))?;

        Ok(Self {
            name: item.ident,
            fields: item.fields,
            message,
            labels,
            help,
        })
    }

    /// Binds each named field to a local of the same name, so tag expressions can refer to them.
    fn bind_fields(&self) -> TokenStream2 {
        let name = &self.name;
        match &self.fields {
            Fields::Named(named) => {
                let idents = named.named.iter().filter_map(|field| field.ident.as_ref());
                quote! { let #name { #(#idents),* } = self; }
            },
            Fields::Unnamed(_) => quote_spanned! {
                name.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs");
            },
            Fields::Unit => TokenStream2::new(),
        }
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let bindings = self.bind_fields();
        let message = &self.message;
        let label_texts = match &self.labels {
            Some(labels) => quote! { #labels },
            None => quote! { ::std::vec::Vec::<::std::string::String>::new() },
        };
        let help = self.help.iter();

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #bindings

                let mut report_labels = ::std::vec::Vec::new();
                for (text, span) in (#label_texts).into_iter().zip(spans) {
                    let text = text.to_string();
                    let label = ::ariadne::Label::new((src_id, span.clone()))
                        .with_color(::symdiff_error::EXPR);
                    report_labels.push(if text.is_empty() { label } else { label.with_message(text) });
                }

                let start = spans.first().map_or(0, |span| span.start);
                #[allow(unused_mut)]
                let mut report = ::ariadne::Report::build(::ariadne::ReportKind::Error, src_id, start)
                    .with_message(#message)
                    .with_labels(report_labels);
                #( report.set_help(#help); )*
                report.finish()
            }
        });
    }
}
