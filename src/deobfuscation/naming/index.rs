//! Compact index-based alias synthesis.

use log::debug;

use crate::{
    deobfuscation::naming::{format_hint, AliasProvider, AliasRegistry, NamingIndex},
    symbols::{ClassResolver, ClassSymbol, FieldSymbol, MethodSymbol, PackageSymbol, SymbolKind},
};

/// Generator for sequential names with an original-name hint.
///
/// | Kind | Shape | Example |
/// |------|-------|---------|
/// | Package | `p` + 3-digit index + hint | `p000a` |
/// | Class | kind prefix + `C` + 4-digit index + hint | `InterfaceC0001b` |
/// | Field | `f` + index + hint | `f0c` |
/// | Method | `m` + index + hint | `m3d` |
#[derive(Debug, Clone)]
pub struct IndexAliasProvider {
    index: NamingIndex,
    registry: AliasRegistry,
    max_length: usize,
}

impl Default for IndexAliasProvider {
    fn default() -> Self {
        Self::new(NamingIndex::default(), 64, "_")
    }
}

impl IndexAliasProvider {
    /// Creates a provider.
    ///
    /// # Arguments
    ///
    /// * `index` - Starting counters.
    /// * `max_length` - Longest original name kept verbatim as hint.
    /// * `separator` - Separator for duplicate suffixes.
    pub fn new(index: NamingIndex, max_length: usize, separator: impl Into<String>) -> Self {
        IndexAliasProvider {
            index,
            registry: AliasRegistry::new(separator),
            max_length,
        }
    }

    fn class_prefix(cls: &ClassSymbol) -> &'static str {
        if cls.flags.is_enum() {
            "Enum"
        } else if cls.flags.is_interface() {
            "Interface"
        } else if cls.flags.is_abstract() {
            "Abstract"
        } else {
            ""
        }
    }

    fn emit(&mut self, kind: SymbolKind, candidate: String) -> String {
        let alias = self.registry.unique(kind, candidate);
        debug!("{kind} alias {alias}");
        alias
    }
}

impl AliasProvider for IndexAliasProvider {
    fn id(&self) -> &'static str {
        "index"
    }

    fn for_package(&mut self, pkg: &PackageSymbol) -> String {
        let idx = self.index.next(SymbolKind::Package);
        let candidate = format!("p{idx:03}{}", format_hint(&pkg.name, self.max_length));
        self.emit(SymbolKind::Package, candidate)
    }

    fn for_class(&mut self, cls: &ClassSymbol, _resolver: &dyn ClassResolver) -> String {
        let idx = self.index.next(SymbolKind::Class);
        let candidate = format!(
            "{}C{idx:04}{}",
            Self::class_prefix(cls),
            format_hint(&cls.name, self.max_length)
        );
        self.emit(SymbolKind::Class, candidate)
    }

    fn for_field(&mut self, field: &FieldSymbol, _owner: &ClassSymbol) -> String {
        let idx = self.index.next(SymbolKind::Field);
        let candidate = format!("f{idx}{}", format_hint(&field.name, self.max_length));
        self.emit(SymbolKind::Field, candidate)
    }

    fn for_method(&mut self, method: &MethodSymbol, _owner: &ClassSymbol) -> String {
        let idx = self.index.next(SymbolKind::Method);
        let candidate = format!("m{idx}{}", format_hint(&method.name, self.max_length));
        self.emit(SymbolKind::Method, candidate)
    }

    fn index(&self) -> NamingIndex {
        self.index
    }
}
