//! Class/package name collision avoidance.

use std::collections::HashSet;

use crate::{
    deobfuscation::conditions::Action,
    symbols::{SymbolRef, SymbolSet},
};

/// Forces renaming packages whose name equals a class short name.
///
/// Java sources cannot contain a package and a class that resolve to the same
/// simple name in one scope. The set of class names (aliases where present)
/// is collected once per run by [`CollisionCondition::init`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionCondition {
    class_names: HashSet<String>,
}

impl CollisionCondition {
    /// Creates an empty condition; call [`CollisionCondition::init`] before use.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the class short names of the run.
    pub fn init(&mut self, symbols: &SymbolSet) {
        self.class_names = symbols
            .classes()
            .iter()
            .map(|cls| cls.alias.clone().unwrap_or_else(|| cls.name.clone()))
            .collect();
    }

    /// Evaluates the symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        match symbol {
            SymbolRef::Package(pkg) => {
                let name = pkg.alias.as_deref().unwrap_or(&pkg.name);
                if self.class_names.contains(name) {
                    Action::ForceRename
                } else {
                    Action::NoAction
                }
            }
            _ => Action::NoAction,
        }
    }
}
