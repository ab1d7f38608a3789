use crate::bounds::ser_generics;
use quote::quote;
use syn::*;

pub(crate) fn wire_ser(ast: &DeriveInput, data: &DataStruct) -> proc_macro2::TokenStream {
    let name = &ast.ident;

    let impl_ser = match &data.fields {
        // C-style structs
        Fields::Named(fields) => {
            let field_idents = fields.named.iter().map(|field| field.ident.clone());

            quote! {
                #(::postwire::encoding::Ser::ser(&self.#field_idents, __s);)*
            }
        }
        // Tuple structs
        Fields::Unnamed(fields) => {
            let indices = (0..fields.unnamed.len()).map(Index::from);

            quote! {
                #(::postwire::encoding::Ser::ser(&self.#indices, __s);)*
            }
        }
        // Unit-like structs have nothing to write
        Fields::Unit => quote! {},
    };

    let generics = ser_generics(&ast.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics ::postwire::encoding::Ser for #name #ty_generics #where_clause {
            fn ser<__S: ::postwire::encoding::Serializer>(&self, __s: &mut __S) {
                #impl_ser
            }
        }
    }
}
