//! Holders for generated source fragments
//!
//! Plain records the generation passes hand around. All of them support
//! structural comparison via [`grameq::Record`], so passes can detect
//! that regenerating an artifact produced the same result.

use grameq::EqPolicy;

/// Declaration/implementation pair for one generated function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFunction {
    /// Name of the function in the target language
    pub name: String,

    /// Generated declaration, if the target language separates one
    pub declaration: Option<String>,

    /// Generated implementation body
    pub implementation: Option<String>,
}

impl GeneratedFunction {
    /// Create a holder with neither part generated yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declaration: None,
            implementation: None,
        }
    }

    /// Copy of this holder with the declaration set
    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.declaration = Some(declaration.into());
        self
    }

    /// Copy of this holder with the implementation set
    pub fn with_implementation(mut self, implementation: impl Into<String>) -> Self {
        self.implementation = Some(implementation.into());
        self
    }
}

grameq::impl_record!(GeneratedFunction { name, declaration, implementation });

/// Generated function exposing read access to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAccessor {
    /// The generated accessor function itself
    pub func: GeneratedFunction,

    /// Name of the accessed field
    pub field: String,

    /// Type of the accessed field, in target-language syntax
    pub field_type: String,
}

grameq::impl_record!(FieldAccessor { func, field, field_type });

/// Public/private parts of a generated type declaration
///
/// Equality covers the public surface only: two declarations with the
/// same public part are interchangeable for dependent code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Name of the declared type
    pub type_name: String,

    /// Part other generated units may reference
    pub public_part: String,

    /// Implementation-only part
    pub private_part: String,
}

grameq::impl_record!(TypeDeclaration { type_name, public_part, private_part },
    policy: EqPolicy::Exclude(&["private_part"]));

/// Spec/body pair for one generated parser rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedParser {
    /// Name of the parser rule
    pub name: String,

    /// Generated subprogram specification
    pub spec: String,

    /// Generated subprogram body
    pub body: String,
}

grameq::impl_record!(GeneratedParser { name, spec, body });
