use crate::bounds::de_generics;
use quote::quote;
use syn::*;

pub(crate) fn wire_de(ast: &DeriveInput, data: &DataEnum) -> proc_macro2::TokenStream {
    let name = &ast.ident;
    let variant_count = data.variants.len() as u32;
    let target = format!("enum `{}` with {} variants", name, variant_count);

    let arms = data.variants.iter().enumerate().map(|(index, variant)| {
        let variant_ident = &variant.ident;
        let index = index as u32;

        let constructor = match &variant.fields {
            // C-style variant
            Fields::Named(fields) => {
                let field_idents = fields.named.iter().map(|field| field.ident.clone());
                quote! {
                    #name::#variant_ident {
                        #(#field_idents: ::postwire::encoding::De::de(__d)?,)*
                    }
                }
            }
            // Named-tuple variant
            Fields::Unnamed(fields) => {
                let reads = fields
                    .unnamed
                    .iter()
                    .map(|_| quote! { ::postwire::encoding::De::de(__d)? });
                quote! { #name::#variant_ident(#(#reads),*) }
            }
            // Unit-like variant
            Fields::Unit => quote! { #name::#variant_ident },
        };

        quote! {
            #index => ::std::result::Result::Ok(#constructor),
        }
    });

    let generics = de_generics(&ast.generics);
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = ast.generics.split_for_impl();

    quote! {
        impl #impl_generics ::postwire::encoding::De<'de> for #name #ty_generics #where_clause {
            fn de<__D: ::postwire::encoding::Deserializer<'de>>(
                __d: &mut __D,
            ) -> ::std::result::Result<Self, ::postwire::errors::DecodingError> {
                match ::postwire::encoding::Deserializer::read_discriminant(__d, #variant_count)? {
                    #(#arms)*
                    // read_discriminant already rejects these
                    __other => ::std::result::Result::Err(::postwire::errors::DecodingError::out_of_bounds(
                        __other,
                        #target,
                    )),
                }
            }
        }
    }
}
