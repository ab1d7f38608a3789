use crate::{bounds::ser_generics, field_bindings};
use quote::quote;
use syn::*;

pub(crate) fn wire_ser(ast: &DeriveInput, data: &DataEnum) -> proc_macro2::TokenStream {
    let name = &ast.ident;

    let branches = data.variants.iter().enumerate().map(|(index, variant)| {
        let variant_ident = &variant.ident;
        let index = index as u32;
        let bindings = field_bindings(&variant.fields);

        let pattern = match &variant.fields {
            // C-style
            Fields::Named(fields) => {
                let field_idents = fields.named.iter().map(|field| field.ident.clone());
                let binds = bindings.iter();
                quote! { #name::#variant_ident { #(#field_idents: #binds),* } }
            }
            // Tuple
            Fields::Unnamed(_) => {
                let binds = bindings.iter();
                quote! { #name::#variant_ident(#(#binds),*) }
            }
            // Unit-like
            Fields::Unit => quote! { #name::#variant_ident },
        };

        quote! {
            #pattern => {
                ::postwire::encoding::SerializerExt::put_discriminant(__s, #index);
                #(::postwire::encoding::Ser::ser(#bindings, __s);)*
            }
        }
    });

    // an empty enum has no values, and matching through a reference needs an arm
    let body = if data.variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#branches)*
            }
        }
    };

    let generics = ser_generics(&ast.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::postwire::encoding::Ser for #name #ty_generics #where_clause {
            fn ser<__S: ::postwire::encoding::Serializer>(&self, __s: &mut __S) {
                #body
            }
        }
    }
}
