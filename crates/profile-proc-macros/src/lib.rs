// profile-core/profile-proc-macros
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use proc_macro::TokenStream;

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Ident};

/// Derives `From<&AppDependencies>` for a service struct.
///
/// Fields marked with `#[inject]` are cloned from the field of the same name in
/// `crate::app::deps::AppDependencies`. `#[inject(other_name)]` clones `other_name` instead.
/// All remaining fields are initialized via `Default::default()`.
#[proc_macro_derive(InjectDependencies, attributes(inject))]
pub fn inject_dependencies(stream: TokenStream) -> TokenStream {
    let input = parse_macro_input!(stream as DeriveInput);

    let Data::Struct(struct_data) = &input.data else {
        panic!("InjectDependencies can only be derived for structs.")
    };

    let Fields::Named(fields) = &struct_data.fields else {
        panic!("InjectDependencies requires a struct with named fields.")
    };

    let mut field_initialization = Vec::with_capacity(fields.named.len());

    for field in fields.named.iter() {
        let Some(ref ident) = field.ident else {
            continue;
        };

        let Some(attr) = field.attrs.iter().find(|attr| attr.path().is_ident("inject")) else {
            field_initialization.push(quote! { #ident: Default::default() });
            continue;
        };

        let source: Ident = match &attr.meta {
            syn::Meta::Path(_) => ident.clone(),
            syn::Meta::List(_) => match attr.parse_args::<Ident>() {
                Ok(source) => source,
                Err(err) => return err.to_compile_error().into(),
            },
            syn::Meta::NameValue(_) => {
                return syn::Error::new_spanned(attr, "expected #[inject] or #[inject(field)]")
                    .to_compile_error()
                    .into()
            }
        };

        field_initialization.push(quote! { #ident: deps.#source.clone() });
    }

    let name = &input.ident;
    let expanded = quote! {
        impl From<&crate::app::deps::AppDependencies> for #name {
            fn from(deps: &crate::app::deps::AppDependencies) -> Self {
                Self {
                    #(#field_initialization,)*
                }
            }
        }
    };

    TokenStream::from(expanded)
}
