//! Baseline exclusions every rename mode starts with.

use crate::{deobfuscation::conditions::Action, symbols::SymbolRef};

/// Forbids renaming symbols that must keep their current name.
///
/// A symbol is excluded when the decompiler flagged it `keep`, when it already
/// carries an alias from a user or a previous pass, and for constructors and
/// static initializers whose names are fixed by the VM.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseCondition;

impl BaseCondition {
    /// Evaluates the symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        if symbol.is_kept() || symbol.existing_alias().is_some() {
            return Action::ForbidRename;
        }
        match symbol {
            SymbolRef::Method(method, _)
                if method.is_constructor || method.is_static_initializer =>
            {
                Action::ForbidRename
            }
            _ => Action::NoAction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{ClassSymbol, MethodSymbol};

    #[test]
    fn test_special_methods_forbidden() {
        let cls = ClassSymbol::new("p.a");
        let init = MethodSymbol::new("<init>");
        let clinit = MethodSymbol::new("<clinit>");
        let plain = MethodSymbol::new("a");

        let cond = BaseCondition;
        assert_eq!(cond.evaluate(&SymbolRef::Method(&init, &cls)), Action::ForbidRename);
        assert_eq!(cond.evaluate(&SymbolRef::Method(&clinit, &cls)), Action::ForbidRename);
        assert_eq!(cond.evaluate(&SymbolRef::Method(&plain, &cls)), Action::NoAction);
    }

    #[test]
    fn test_kept_and_aliased_forbidden() {
        let mut kept = ClassSymbol::new("p.a");
        kept.keep = true;
        let mut aliased = ClassSymbol::new("p.b");
        aliased.alias = Some("Renamed".to_string());

        let cond = BaseCondition;
        assert_eq!(cond.evaluate(&SymbolRef::Class(&kept)), Action::ForbidRename);
        assert_eq!(cond.evaluate(&SymbolRef::Class(&aliased)), Action::ForbidRename);
        assert_eq!(
            cond.evaluate(&SymbolRef::Class(&ClassSymbol::new("p.c"))),
            Action::NoAction
        );
    }
}
