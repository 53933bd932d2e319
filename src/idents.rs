use std::fmt::Display;

use quote::ToTokens;
use syn::{Ident, Path};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContainerIdent(pub Ident);

impl Display for ContainerIdent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ToTokens for ContainerIdent {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        self.0.to_tokens(tokens);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariantIdent(pub Ident);

impl ToTokens for VariantIdent {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        self.0.to_tokens(tokens);
    }
}

/// The superset enum as written in the annotation. The path is kept verbatim
/// so that namespaced references like `stocks::Database` render with their
/// full path in the generated code.
#[derive(Debug, Clone)]
pub struct SupersetRef(pub Path);

impl SupersetRef {
    /// Identifier of the last path segment, e.g. `Database` for
    /// `stocks::Database`.
    pub fn local_name(&self) -> &Ident {
        &self
            .0
            .segments
            .last()
            .expect("A parsed path should always have at least one segment")
            .ident
    }

    /// Parameter name for the generated constructor: the local name with
    /// only its first character lower-cased, e.g. `database` for
    /// `stocks::Database`. The rest of the identifier is left untouched.
    pub fn binding_ident(&self) -> Ident {
        let local_name = self.local_name();
        let name = local_name.to_string();
        let mut chars = name.chars();
        let binding: String = match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => name,
        };
        Ident::new(&binding, local_name.span())
    }
}

impl ToTokens for SupersetRef {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        self.0.to_tokens(tokens);
    }
}
