//! Top-level names declared by one generated artifact.
//!
//! Generated identifiers are built by concatenation (`FlexDirection` +
//! `Row`), so two distinct table entries can produce the same name. Each
//! renderer declares everything it will emit here before rendering starts.

use std::collections::HashMap;

use crate::codegen::error::GenerateError;
use crate::codegen::Language;

#[derive(Debug)]
pub struct Namespace {
    language: Language,
    owners: HashMap<String, String>,
}

impl Namespace {
    pub fn new(language: Language) -> Self {
        Namespace {
            language,
            owners: HashMap::new(),
        }
    }

    /// Claim names the generated code depends on, such as keywords and
    /// imported items.
    pub fn reserve(mut self, names: &[&str], owner: &str) -> Self {
        for name in names {
            self.owners
                .entry(name.to_string())
                .or_insert_with(|| owner.to_string());
        }
        self
    }

    /// Declare `identifier`, failing if anything already owns it.
    pub fn declare(
        &mut self,
        identifier: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<(), GenerateError> {
        let identifier = identifier.into();
        if let Some(first) = self.owners.get(&identifier) {
            return Err(GenerateError::IdentifierCollision {
                language: self.language,
                identifier,
                first: first.clone(),
                second: owner.into(),
            });
        }
        self.owners.insert(identifier, owner.into());
        Ok(())
    }
}
