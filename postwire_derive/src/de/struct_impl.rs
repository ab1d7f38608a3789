use crate::bounds::de_generics;
use quote::quote;
use syn::*;

pub(crate) fn wire_de(ast: &DeriveInput, data: &DataStruct) -> proc_macro2::TokenStream {
    let name = &ast.ident;

    // struct literals evaluate their fields in the order they're written, which is
    // declaration order here
    let impl_de = match &data.fields {
        // C-style structs
        Fields::Named(fields) => {
            let field_idents = fields.named.iter().map(|field| field.ident.clone());

            quote! {
                ::std::result::Result::Ok(#name {
                    #(#field_idents: ::postwire::encoding::De::de(__d)?,)*
                })
            }
        }
        // Tuple structs
        Fields::Unnamed(fields) => {
            let reads = fields
                .unnamed
                .iter()
                .map(|_| quote! { ::postwire::encoding::De::de(__d)? });

            quote! {
                ::std::result::Result::Ok(#name(#(#reads),*))
            }
        }
        // Unit-like structs
        Fields::Unit => quote! { ::std::result::Result::Ok(#name) },
    };

    let generics = de_generics(&ast.generics);
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = ast.generics.split_for_impl();

    quote! {
        impl #impl_generics ::postwire::encoding::De<'de> for #name #ty_generics #where_clause {
            fn de<__D: ::postwire::encoding::Deserializer<'de>>(
                __d: &mut __D,
            ) -> ::std::result::Result<Self, ::postwire::errors::DecodingError> {
                #impl_de
            }
        }
    }
}
