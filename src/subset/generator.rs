use proc_macro2::{Span, TokenStream};
use quote::quote;

use crate::{
    idents::{ContainerIdent, SupersetRef, VariantIdent},
    subset::parser::{ContainerAnnotation, ParsedEnumSubset},
};

/// A struct holding all the data necessary to generate a TokenStream.
/// Once constructed, the code generation should not fail.
pub struct EnumSubsetGenerator {
    subset_enum: ContainerIdent,
    superset: SupersetRef,
    cases: Vec<VariantIdent>,
}

impl EnumSubsetGenerator {
    pub fn generate(self) -> TokenStream {
        let subset_enum = &self.subset_enum;
        let superset = &self.superset;
        let binding = superset.binding_ident();

        // Arm order follows the declaration order of the cases. It is not
        // semantically significant but keeps the generated code stable.
        let forward_arms = self
            .cases
            .iter()
            .map(|case| quote! { #subset_enum::#case => #superset::#case, })
            .collect::<Vec<_>>();

        let reverse_arms = self
            .cases
            .iter()
            .map(|case| quote! { #superset::#case => Some(#subset_enum::#case), })
            .collect::<Vec<_>>();

        // `match *self` rather than `match self` so that a subset without
        // cases still compiles down to an empty match.
        quote! {
            impl #subset_enum {
                pub fn as_superset(&self) -> #superset {
                    match *self {
                        #(#forward_arms)*
                    }
                }

                pub fn from_superset(#binding: #superset) -> Option<Self> {
                    match #binding {
                        #(#reverse_arms)*
                        _ => None,
                    }
                }
            }
        }
    }
}

impl TryFrom<ParsedEnumSubset> for EnumSubsetGenerator {
    type Error = syn::Error;

    fn try_from(
        ParsedEnumSubset {
            subset_enum,
            container_annotations,
            cases,
        }: ParsedEnumSubset,
    ) -> Result<Self, Self::Error> {
        // The first annotated superset wins; any further ones are ignored.
        let superset = container_annotations
            .into_iter()
            .map(|ContainerAnnotation(superset)| superset)
            .next()
            .ok_or_else(|| {
                syn::Error::new(
                    Span::call_site(),
                    "EnumSubset should have a superset defined with #[enum_subset(Superset)]",
                )
            })?;

        Ok(EnumSubsetGenerator {
            subset_enum,
            superset,
            cases,
        })
    }
}
