//! `#[derive(SerDe)]` for postwire.
//!
//! Structs write their fields in declaration order. Enums write the zero-based index of
//! the variant, then the variant's fields in declaration order.

#![recursion_limit = "128"]

extern crate proc_macro;

mod bounds;
mod de;
mod ser;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::*;

fn struct_impl(ast: &DeriveInput, sd: &DataStruct) -> proc_macro2::TokenStream {
    let ser = ser::struct_impl::wire_ser(ast, sd);
    let de = de::struct_impl::wire_de(ast, sd);

    quote! {
        #ser
        #de
    }
}

fn enum_impl(ast: &DeriveInput, ed: &DataEnum) -> proc_macro2::TokenStream {
    let ser = ser::enum_impl::wire_ser(ast, ed);
    let de = de::enum_impl::wire_de(ast, ed);

    quote! {
        #ser
        #de
    }
}

/// Derives `postwire::encoding::Ser` and `postwire::encoding::De`.
#[proc_macro_derive(SerDe)]
pub fn serde_derive(input: TokenStream) -> TokenStream {
    // Construct a representation of Rust code as a syntax tree
    // that we can manipulate
    let ast = parse_macro_input!(input as DeriveInput);

    // Build the trait implementations
    impl_serde_macro(&ast).into()
}

fn impl_serde_macro(ast: &DeriveInput) -> proc_macro2::TokenStream {
    match &ast.data {
        Data::Struct(sd) => struct_impl(ast, sd),
        Data::Enum(ed) => enum_impl(ast, ed),
        Data::Union(du) => {
            Error::new_spanned(du.union_token, "SerDe can't be derived for unions")
                .to_compile_error()
        }
    }
}

/// Identifiers used to bind a variant's fields in match arms.
pub(crate) fn field_bindings(fields: &Fields) -> Vec<Ident> {
    (0..fields.len())
        .map(|i| Ident::new(&format!("__field{}", i), Span::call_site()))
        .collect()
}
