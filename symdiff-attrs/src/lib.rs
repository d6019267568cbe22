mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemStruct};

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any kind of struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```ignore
/// use symdiff_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of input", labels = ["add something here"])]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts, one for each span the error points at.              |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated
/// with the members of the struct in scope, so they can be used in the expression (tuple structs
/// are not supported).
///
/// The generated code refers to the `ariadne` and `symdiff_error` crates, so both must be
/// dependencies of the crate using the derive.
///
/// [`ErrorKind`]: https://docs.rs/symdiff-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as ItemStruct);
    let target = match ErrorKindTarget::from_item(item) {
        Ok(target) => target,
        Err(err) => return err.to_compile_error().into(),
    };
    let name = &target.name;
    quote! {
        impl ::symdiff_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            #target
        }
    }.into()
}
