use proc_macro2::Span;
use syn::*;

/// Adds a `Ser` bound to every type parameter.
pub(crate) fn ser_generics(generics: &Generics) -> Generics {
    let mut g = generics.clone();
    for param in g.type_params_mut() {
        param.bounds.push(parse_quote!(::postwire::encoding::Ser));
    }
    g
}

/// Adds a leading `'de` lifetime that outlives every other lifetime parameter, and a
/// `De<'de>` bound to every type parameter.
pub(crate) fn de_generics(generics: &Generics) -> Generics {
    let mut g = generics.clone();
    for param in g.type_params_mut() {
        param.bounds.push(parse_quote!(::postwire::encoding::De<'de>));
    }

    let mut de = LifetimeDef::new(Lifetime::new("'de", Span::call_site()));
    for lt in generics.lifetimes() {
        de.bounds.push(lt.lifetime.clone());
    }
    g.params.insert(0, GenericParam::Lifetime(de));
    g
}
