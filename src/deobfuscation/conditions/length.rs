//! Length and identifier-validity condition.

use crate::{deobfuscation::conditions::Action, symbols::SymbolRef};

const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Returns `true` if the name is a usable Java identifier.
///
/// The first character must be a letter, `_` or `$`; the rest letters,
/// digits, `_` or `$`. Reserved words are rejected.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return false;
    }
    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return false;
    }
    !RESERVED_WORDS.contains(&name)
}

/// Forces renaming names that are too short, too long or not valid identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthCondition {
    min_length: usize,
    max_length: usize,
}

impl Default for LengthCondition {
    fn default() -> Self {
        Self::new(3, 64)
    }
}

impl LengthCondition {
    /// Creates the condition with inclusive length bounds.
    #[must_use]
    pub fn new(min_length: usize, max_length: usize) -> Self {
        LengthCondition {
            min_length,
            max_length,
        }
    }

    /// Evaluates the symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        if let SymbolRef::Method(method, _) = symbol {
            if method.is_constructor || method.is_static_initializer {
                return Action::NoAction;
            }
        }

        let name = symbol.name();
        let len = name.chars().count();
        if len < self.min_length || len > self.max_length || !is_valid_identifier(name) {
            Action::ForceRename
        } else {
            Action::NoAction
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{ClassSymbol, FieldSymbol, MethodSymbol};

    #[test]
    fn test_identifier_validity() {
        assert!(is_valid_identifier("userName"));
        assert!(is_valid_identifier("_private"));
        assert!(is_valid_identifier("$jacocoData"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1abc"));
        assert!(!is_valid_identifier("a-b"));
        assert!(!is_valid_identifier("class"));
    }

    #[test]
    fn test_length_bounds() {
        let cond = LengthCondition::new(3, 8);
        let cls = ClassSymbol::new("p.Main");
        let short = FieldSymbol::new("ab", None);
        let ok = FieldSymbol::new("count", None);
        let long = FieldSymbol::new("veryLongName", None);
        let reserved = FieldSymbol::new("goto", None);

        assert_eq!(cond.evaluate(&SymbolRef::Field(&short, &cls)), Action::ForceRename);
        assert_eq!(cond.evaluate(&SymbolRef::Field(&ok, &cls)), Action::NoAction);
        assert_eq!(cond.evaluate(&SymbolRef::Field(&long, &cls)), Action::ForceRename);
        assert_eq!(cond.evaluate(&SymbolRef::Field(&reserved, &cls)), Action::ForceRename);
    }

    #[test]
    fn test_special_methods_abstain() {
        let cond = LengthCondition::default();
        let cls = ClassSymbol::new("p.Main");
        let init = MethodSymbol::new("<init>");
        assert_eq!(cond.evaluate(&SymbolRef::Method(&init, &cls)), Action::NoAction);
    }
}
