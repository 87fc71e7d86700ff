//! Rename pass over a symbol set.
//!
//! The [`RenamePass`] is the main entry point for planning renames. It binds
//! one symbol set to a resolved mode, the initialized rename condition of that
//! mode and a fresh alias provider, then walks every symbol once and records
//! the aliases in a [`RenamePlan`] for the rewrite pass that applies them.

use std::fmt;

use log::{debug, info};

use crate::{
    deobfuscation::{
        conditions::RenameCondition,
        config::DeobfuscationConfig,
        factory::ModeFactory,
        mode::DeobfuscationMode,
        naming::{AliasProvider, NamingIndex},
    },
    symbols::{SymbolKind, SymbolRef, SymbolSet},
    Result,
};

/// One planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    /// Kind of the renamed symbol
    pub kind: SymbolKind,
    /// Stable identity of the symbol, see [`SymbolRef::path`]
    pub path: String,
    /// The name found in the program
    pub original: String,
    /// The replacement name
    pub alias: String,
}

impl fmt::Display for RenameEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.kind, self.path, self.alias)
    }
}

/// Result of a rename pass.
///
/// Entries are ordered packages first, then classes, fields and methods, each
/// group in symbol-set order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    /// Mode the plan was produced with, never `Auto`
    pub mode: DeobfuscationMode,
    /// Planned renames
    pub entries: Vec<RenameEntry>,
    /// Naming counters after the run, usable to seed a follow-up run
    pub index: NamingIndex,
}

impl RenamePlan {
    /// Returns the number of planned renames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is renamed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the entry of a symbol path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&RenameEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Returns the alias planned for a symbol path.
    #[must_use]
    pub fn alias_of(&self, path: &str) -> Option<&str> {
        self.get(path).map(|e| e.alias.as_str())
    }

    /// Returns the entries of one symbol kind.
    pub fn of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &RenameEntry> {
        self.entries.iter().filter(move |e| e.kind == kind)
    }

    /// Returns the number of renames of one symbol kind.
    #[must_use]
    pub fn count(&self, kind: SymbolKind) -> usize {
        self.of_kind(kind).count()
    }
}

impl fmt::Display for RenamePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rename plan ({}): {} packages, {} classes, {} fields, {} methods",
            self.mode,
            self.count(SymbolKind::Package),
            self.count(SymbolKind::Class),
            self.count(SymbolKind::Field),
            self.count(SymbolKind::Method)
        )?;
        for entry in &self.entries {
            writeln!(f, "  {entry}")?;
        }
        Ok(())
    }
}

/// One rename run over a symbol set.
///
/// Holds all per-run state: the rename condition initialized for this symbol
/// set and the alias provider with its naming index. A pass is consumed by
/// [`RenamePass::run`]; create a new one for every run.
///
/// # Example
///
/// ```rust
/// use symscope::deobfuscation::{DeobfuscationMode, ModeFactory, RenamePass};
/// use symscope::symbols::{ClassSymbol, FieldSymbol, SymbolSet};
///
/// let set = SymbolSet::builder()
///     .class(ClassSymbol::new("com.example.a").with_field(FieldSymbol::new("b", None)))
///     .build();
///
/// let factory = ModeFactory::default();
/// let plan = RenamePass::new(&set, DeobfuscationMode::Default, &factory).run();
///
/// assert_eq!(plan.alias_of("com.example.a"), Some("C0000a"));
/// assert_eq!(plan.alias_of("com.example.a.b"), Some("f0b"));
/// ```
pub struct RenamePass<'a> {
    symbols: &'a SymbolSet,
    mode: DeobfuscationMode,
    condition: Option<RenameCondition>,
    provider: Option<Box<dyn AliasProvider>>,
}

impl<'a> RenamePass<'a> {
    /// Creates a pass for a symbol set.
    ///
    /// `Auto` is resolved here through the codebase analyzer; the resulting
    /// mode is reported by [`RenamePass::mode`].
    ///
    /// # Arguments
    ///
    /// * `symbols` - The symbols to rename.
    /// * `mode` - The requested mode.
    /// * `factory` - Source of conditions and alias providers.
    #[must_use]
    pub fn new(symbols: &'a SymbolSet, mode: DeobfuscationMode, factory: &ModeFactory) -> Self {
        let mode = factory.resolve(mode, symbols);
        let condition = factory.rename_condition(mode).map(|mut condition| {
            condition.init(symbols);
            condition
        });
        let provider = factory.alias_provider(mode);

        RenamePass {
            symbols,
            mode,
            condition,
            provider,
        }
    }

    /// Creates a pass from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfig`] if the configuration is invalid.
    pub fn with_config(
        symbols: &'a SymbolSet,
        mode: DeobfuscationMode,
        config: DeobfuscationConfig,
    ) -> Result<Self> {
        let factory = ModeFactory::new(config)?;
        Ok(Self::new(symbols, mode, &factory))
    }

    /// Returns the resolved mode.
    #[must_use]
    pub fn mode(&self) -> DeobfuscationMode {
        self.mode
    }

    /// Decides whether one symbol should be renamed.
    ///
    /// Always `false` when the mode is disabled.
    #[must_use]
    pub fn decide(&self, symbol: &SymbolRef<'_>) -> bool {
        self.condition
            .as_ref()
            .is_some_and(|condition| condition.decide(symbol))
    }

    /// Decides and, if positive, synthesizes the alias for one symbol.
    ///
    /// Every call with a positive verdict advances the naming index.
    pub fn rename(&mut self, symbol: &SymbolRef<'_>) -> Option<String> {
        if !self.decide(symbol) {
            return None;
        }
        let provider = self.provider.as_mut()?;
        let alias = provider.name(symbol, self.symbols);
        debug!("rename {symbol} -> {alias}");
        Some(alias)
    }

    /// Walks every symbol once and collects the planned renames.
    pub fn run(mut self) -> RenamePlan {
        let symbols = self.symbols;
        let mut entries = Vec::new();

        if self.mode.is_enabled() {
            for symbol in symbols.symbols() {
                if let Some(alias) = self.rename(&symbol) {
                    entries.push(RenameEntry {
                        kind: symbol.kind(),
                        path: symbol.path(),
                        original: symbol.name().to_string(),
                        alias,
                    });
                }
            }
        }

        let plan = RenamePlan {
            mode: self.mode,
            entries,
            index: self
                .provider
                .as_ref()
                .map(|provider| provider.index())
                .unwrap_or_default(),
        };
        info!(
            "Rename plan ({}): {} of {} classes renamed, {} renames total",
            plan.mode,
            plan.count(SymbolKind::Class),
            symbols.class_count(),
            plan.len()
        );
        plan
    }
}

impl fmt::Debug for RenamePass<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenamePass")
            .field("mode", &self.mode)
            .field("condition", &self.condition)
            .field("provider", &self.provider.as_ref().map(|p| p.id()))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        deobfuscation::ObfuscatorTool,
        symbols::{ClassSymbol, FieldSymbol, MethodSymbol, PackageSymbol, TypeRef},
        test,
    };

    #[test]
    fn test_disabled_plans_nothing() {
        let set = SymbolSet::builder().class(ClassSymbol::new("a.b")).build();
        let factory = ModeFactory::default();
        let pass = RenamePass::new(&set, DeobfuscationMode::Disabled, &factory);
        assert!(!pass.decide(&SymbolRef::Class(&set.classes()[0])));
        let plan = pass.run();
        assert!(plan.is_empty());
        assert_eq!(plan.index, NamingIndex::default());
    }

    #[test]
    fn test_plan_order_and_entries() {
        let set = SymbolSet::builder()
            .package(PackageSymbol::new("com"))
            .class(
                ClassSymbol::new("com.ab.x")
                    .with_field(FieldSymbol::new("y", Some(TypeRef::Int)))
                    .with_method(MethodSymbol::new("<init>"))
                    .with_method(MethodSymbol::new("z")),
            )
            .build();
        let plan = RenamePass::new(&set, DeobfuscationMode::Default, &ModeFactory::default()).run();

        let kinds: Vec<SymbolKind> = plan.entries.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SymbolKind::Package,
                SymbolKind::Class,
                SymbolKind::Field,
                SymbolKind::Method
            ]
        );
        assert_eq!(plan.alias_of("com"), None);
        assert_eq!(plan.alias_of("com.ab"), Some("p000ab"));
        assert_eq!(plan.alias_of("com.ab.x"), Some("C0000x"));
        assert_eq!(plan.alias_of("com.ab.x.y"), Some("f0y"));
        assert_eq!(plan.alias_of("com.ab.x.z()"), Some("m0z"));
        assert_eq!(plan.get("com.ab.x.z()").map(|e| e.original.as_str()), Some("z"));
        assert_eq!(plan.index, NamingIndex::seeded(1, 1, 1, 1));
    }

    #[test]
    fn test_auto_mode_is_resolved() {
        let set = SymbolSet::builder().class(ClassSymbol::new("a.a")).build();
        let pass = RenamePass::new(&set, DeobfuscationMode::Auto, &ModeFactory::default());
        assert_eq!(pass.mode(), DeobfuscationMode::Aggressive);
        assert_eq!(pass.run().mode, DeobfuscationMode::Aggressive);
    }

    #[test]
    fn test_invalid_config() {
        let set = SymbolSet::default();
        let config = DeobfuscationConfig::new().with_dedup_separator("");
        assert!(RenamePass::with_config(&set, DeobfuscationMode::Default, config).is_err());
    }

    #[test]
    fn test_enhanced_plan_for_proguard_app() {
        let set = test::proguard_app();
        let plan =
            RenamePass::new(&set, DeobfuscationMode::Enhanced, &ModeFactory::default()).run();

        // package "a" collides with class "a"
        assert_eq!(plan.alias_of("com.example.a"), Some("pkg000"));
        assert_eq!(plan.alias_of("com.example.app"), None);
        assert_eq!(plan.alias_of("com.example.app.MainActivity"), None);
        assert_eq!(plan.alias_of("com.example.app.a"), Some("ActivityC0000a"));
        assert_eq!(plan.alias_of("com.example.app.b"), Some("C0001Serb"));
        assert_eq!(plan.alias_of("com.example.a.c"), Some("ActivityC0002c"));
        assert_eq!(plan.alias_of("com.example.app.R"), None);
        assert_eq!(plan.alias_of("com.example.app.R$id"), None);
        assert_eq!(plan.alias_of("com.example.app.R$id.a"), None);
        assert_eq!(plan.alias_of("com.example.app.a.a"), Some("i0a"));
        assert_eq!(plan.alias_of("com.example.app.a.b"), Some("str1b"));
        assert_eq!(plan.alias_of("com.example.app.b.c"), Some("obj2c"));
        assert_eq!(plan.alias_of("com.example.app.a.a()"), Some("check0Boola"));
        assert_eq!(plan.alias_of("com.example.app.a.b(int)"), Some("set1b"));
        assert_eq!(
            plan.alias_of("com.example.app.MainActivity.onCreate(android.os.Bundle)"),
            None
        );
        assert_eq!(plan.len(), 9);
    }

    #[test]
    fn test_auto_on_fixtures() {
        let factory = ModeFactory::default();

        let obfuscated = test::proguard_app();
        let analyzer = factory.analyzer(&obfuscated);
        assert_eq!(analyzer.detected_tool(), Some(ObfuscatorTool::ProGuard));
        assert_eq!(
            RenamePass::new(&obfuscated, DeobfuscationMode::Auto, &factory).mode(),
            DeobfuscationMode::Aggressive
        );

        let readable = test::readable_app();
        let plan = RenamePass::new(&readable, DeobfuscationMode::Auto, &factory).run();
        assert_eq!(plan.mode, DeobfuscationMode::Conservative);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_plan_display() {
        let set = SymbolSet::builder().class(ClassSymbol::new("com.example.a")).build();
        let plan = RenamePass::new(&set, DeobfuscationMode::Default, &ModeFactory::default()).run();
        let text = plan.to_string();
        assert!(text.starts_with("Rename plan (default): 0 packages, 1 classes"));
        assert!(text.contains("  class com.example.a -> C0000a\n"));
    }
}
