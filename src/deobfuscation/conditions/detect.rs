//! Detection-driven conditions backed by the pattern and entropy classifiers.

use crate::{
    deobfuscation::{conditions::Action, entropy::EntropyClassifier, patterns::PatternClassifier},
    symbols::SymbolRef,
};

/// Forces renaming names that match an obfuscator signature.
///
/// Compiler-generated names are recognized and skipped per symbol kind:
/// lambda and numbered classes (`Foo$$Lambda$1`, `Foo$1`), numbered methods
/// and fields (`access$000`, `this$0`), and the VM special methods.
#[derive(Debug, Clone, Default)]
pub struct PatternCondition {
    classifier: PatternClassifier,
}

impl PatternCondition {
    /// Creates the condition around a classifier.
    #[must_use]
    pub fn new(classifier: PatternClassifier) -> Self {
        PatternCondition { classifier }
    }

    /// Evaluates the symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        let name = symbol.name();
        if name.is_empty() {
            return Action::NoAction;
        }

        let synthetic = match symbol {
            SymbolRef::Package(_) => false,
            SymbolRef::Class(cls) => {
                self.classifier.is_lambda(&cls.full_name)
                    || self.classifier.is_numeric_suffix(&cls.full_name)
            }
            SymbolRef::Field(..) => self.classifier.is_numeric_suffix(name),
            SymbolRef::Method(method, _) => {
                method.is_constructor
                    || method.is_static_initializer
                    || self.classifier.is_numeric_suffix(name)
            }
        };
        if synthetic {
            return Action::NoAction;
        }

        if self.classifier.matches_obfuscator_pattern(name) {
            Action::ForceRename
        } else {
            Action::NoAction
        }
    }
}

/// Forces renaming names whose Shannon entropy exceeds the threshold.
///
/// Names shorter than the classifier's minimum length get no verdict.
#[derive(Debug, Clone, Default)]
pub struct EntropyCondition {
    classifier: EntropyClassifier,
}

impl EntropyCondition {
    /// Creates the condition around a classifier.
    #[must_use]
    pub fn new(classifier: EntropyClassifier) -> Self {
        EntropyCondition { classifier }
    }

    /// Evaluates the symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        match self.classifier.is_high_entropy(symbol.name()) {
            Some(true) => Action::ForceRename,
            Some(false) | None => Action::NoAction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{ClassSymbol, FieldSymbol, MethodSymbol, PackageSymbol, TypeRef};

    #[test]
    fn test_pattern_forces_short_names() {
        let cond = PatternCondition::default();
        let cls = ClassSymbol::new("com.a.b");
        let pkg = PackageSymbol::new("com.a");
        let field = FieldSymbol::new("c", Some(TypeRef::Int));
        let method = MethodSymbol::new("d");

        assert_eq!(cond.evaluate(&SymbolRef::Class(&cls)), Action::ForceRename);
        assert_eq!(cond.evaluate(&SymbolRef::Package(&pkg)), Action::ForceRename);
        assert_eq!(cond.evaluate(&SymbolRef::Field(&field, &cls)), Action::ForceRename);
        assert_eq!(cond.evaluate(&SymbolRef::Method(&method, &cls)), Action::ForceRename);
    }

    #[test]
    fn test_pattern_skips_synthetic() {
        let cond = PatternCondition::default();
        let lambda = ClassSymbol::new("com.x.Main$$Lambda$1");
        let anon = ClassSymbol::new("com.x.Main$1");
        let this0 = FieldSymbol::new("this$0", None);
        let init = MethodSymbol::new("<init>");
        let access = MethodSymbol::new("access$000");

        assert_eq!(cond.evaluate(&SymbolRef::Class(&lambda)), Action::NoAction);
        assert_eq!(cond.evaluate(&SymbolRef::Class(&anon)), Action::NoAction);
        assert_eq!(cond.evaluate(&SymbolRef::Field(&this0, &anon)), Action::NoAction);
        assert_eq!(cond.evaluate(&SymbolRef::Method(&init, &anon)), Action::NoAction);
        assert_eq!(cond.evaluate(&SymbolRef::Method(&access, &anon)), Action::NoAction);
    }

    #[test]
    fn test_pattern_ignores_normal_names() {
        let cond = PatternCondition::default();
        let cls = ClassSymbol::new("com.example.MainActivity");
        let method = MethodSymbol::new("onCreate");

        assert_eq!(cond.evaluate(&SymbolRef::Class(&cls)), Action::NoAction);
        assert_eq!(cond.evaluate(&SymbolRef::Method(&method, &cls)), Action::NoAction);
    }

    #[test]
    fn test_entropy_condition() {
        let cond = EntropyCondition::default();
        let cls = ClassSymbol::new("com.example.Holder");
        let random = FieldSymbol::new("qWeRtYuIoP3x", None);
        let short = FieldSymbol::new("ab", None);
        let normal = FieldSymbol::new("userName", None);

        assert_eq!(cond.evaluate(&SymbolRef::Field(&random, &cls)), Action::ForceRename);
        assert_eq!(cond.evaluate(&SymbolRef::Field(&short, &cls)), Action::NoAction);
        assert_eq!(cond.evaluate(&SymbolRef::Field(&normal, &cls)), Action::NoAction);
    }
}
