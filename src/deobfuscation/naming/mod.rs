//! Deterministic alias synthesis for renamed symbols.
//!
//! An [`AliasProvider`] turns a symbol with a positive rename verdict into a
//! replacement name. Every provider owns a [`NamingIndex`] with one monotonic
//! counter per symbol kind and a [`AliasRegistry`] that keeps the emitted
//! names unique within each kind.
//!
//! # Providers
//!
//! - [`IndexAliasProvider`] - Compact `p000`/`C0000`/`f0`/`m0` names with an original-name hint
//! - [`SemanticAliasProvider`] - Names built from role prefixes, framework bases, semantic tags
//!   and type codes
//!
//! # Parameter Names
//!
//! The [`params`] module detects obfuscated method parameter names and
//! suggests type-based replacements.

mod index;
pub mod params;
mod semantic;

use std::collections::HashSet;

use md5::{Digest, Md5};

pub use index::IndexAliasProvider;
pub use semantic::SemanticAliasProvider;

use crate::symbols::{
    ClassResolver, ClassSymbol, FieldSymbol, MethodSymbol, PackageSymbol, SymbolKind, SymbolRef,
};

/// Per-kind monotonic counters used for synthesized names.
///
/// Counters can be seeded so that a resumed run continues numbering where a
/// previous run stopped. Each counter is incremented exactly once per name
/// synthesized for its kind and never reset during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NamingIndex {
    /// Next package index
    pub package: u32,
    /// Next class index
    pub class: u32,
    /// Next field index
    pub field: u32,
    /// Next method index
    pub method: u32,
}

impl NamingIndex {
    /// Creates an index seeded with explicit starting values.
    #[must_use]
    pub fn seeded(package: u32, class: u32, field: u32, method: u32) -> Self {
        NamingIndex {
            package,
            class,
            field,
            method,
        }
    }

    /// Returns the current value for a kind without advancing it.
    #[must_use]
    pub fn get(&self, kind: SymbolKind) -> u32 {
        match kind {
            SymbolKind::Package => self.package,
            SymbolKind::Class => self.class,
            SymbolKind::Field => self.field,
            SymbolKind::Method => self.method,
        }
    }

    /// Returns the current value for a kind and advances it by one.
    pub fn next(&mut self, kind: SymbolKind) -> u32 {
        let counter = match kind {
            SymbolKind::Package => &mut self.package,
            SymbolKind::Class => &mut self.class,
            SymbolKind::Field => &mut self.field,
            SymbolKind::Method => &mut self.method,
        };
        let value = *counter;
        *counter = counter.saturating_add(1);
        value
    }
}

/// Tracks emitted aliases per kind and resolves duplicates.
///
/// A candidate that was already emitted for the same kind gets the separator
/// and the smallest counter (starting at 2) that makes it unique.
#[derive(Debug, Clone)]
pub struct AliasRegistry {
    separator: String,
    packages: HashSet<String>,
    classes: HashSet<String>,
    fields: HashSet<String>,
    methods: HashSet<String>,
}

impl Default for AliasRegistry {
    fn default() -> Self {
        Self::new("_")
    }
}

impl AliasRegistry {
    /// Creates an empty registry using `separator` for duplicate suffixes.
    pub fn new(separator: impl Into<String>) -> Self {
        AliasRegistry {
            separator: separator.into(),
            packages: HashSet::new(),
            classes: HashSet::new(),
            fields: HashSet::new(),
            methods: HashSet::new(),
        }
    }

    /// Registers a candidate alias and returns the unique form to emit.
    pub fn unique(&mut self, kind: SymbolKind, candidate: String) -> String {
        let separator = &self.separator;
        let seen = match kind {
            SymbolKind::Package => &mut self.packages,
            SymbolKind::Class => &mut self.classes,
            SymbolKind::Field => &mut self.fields,
            SymbolKind::Method => &mut self.methods,
        };

        if !seen.contains(&candidate) {
            seen.insert(candidate.clone());
            return candidate;
        }

        let mut n = 2u32;
        loop {
            let alias = format!("{candidate}{separator}{n}");
            if !seen.contains(&alias) {
                seen.insert(alias.clone());
                return alias;
            }
            n += 1;
        }
    }

    /// Returns the number of aliases registered for a kind.
    #[must_use]
    pub fn count(&self, kind: SymbolKind) -> usize {
        match kind {
            SymbolKind::Package => self.packages.len(),
            SymbolKind::Class => self.classes.len(),
            SymbolKind::Field => self.fields.len(),
            SymbolKind::Method => self.methods.len(),
        }
    }
}

/// Formats the original-name hint segment of an alias.
///
/// Names longer than `max_length` are replaced by `x` and eight hex digits of
/// their MD5 digest. Shorter names keep only `[A-Za-z0-9_$]` characters.
/// An empty name yields an empty hint.
///
/// # Arguments
///
/// * `name` - The original name.
/// * `max_length` - Longest name kept verbatim.
///
/// # Returns
///
/// The hint, possibly empty.
#[must_use]
pub fn format_hint(name: &str, max_length: usize) -> String {
    if name.is_empty() {
        return String::new();
    }
    if name.chars().count() > max_length {
        let digest = Md5::digest(name.as_bytes());
        let mut hint = String::with_capacity(9);
        hint.push('x');
        for byte in &digest[..4] {
            hint.push_str(&format!("{byte:02x}"));
        }
        return hint;
    }
    sanitize(name)
}

/// Removes every character that is not `[A-Za-z0-9_$]`.
#[must_use]
pub fn sanitize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect()
}

/// Synthesizes replacement names for symbols.
///
/// Implementations own the naming index and the de-duplication state of one
/// run. Each symbol should be named at most once per run.
pub trait AliasProvider {
    /// Returns a short stable name of the provider.
    fn id(&self) -> &'static str;

    /// Synthesizes an alias for a package.
    fn for_package(&mut self, pkg: &PackageSymbol) -> String;

    /// Synthesizes an alias for a class.
    ///
    /// The resolver is used to walk the superclass chain; unresolved
    /// ancestors end the walk.
    fn for_class(&mut self, cls: &ClassSymbol, resolver: &dyn ClassResolver) -> String;

    /// Synthesizes an alias for a field of `owner`.
    fn for_field(&mut self, field: &FieldSymbol, owner: &ClassSymbol) -> String;

    /// Synthesizes an alias for a method of `owner`.
    fn for_method(&mut self, method: &MethodSymbol, owner: &ClassSymbol) -> String;

    /// Returns the current state of the naming index.
    fn index(&self) -> NamingIndex;

    /// Synthesizes an alias for any symbol kind.
    fn name(&mut self, symbol: &SymbolRef<'_>, resolver: &dyn ClassResolver) -> String {
        match symbol {
            SymbolRef::Package(pkg) => self.for_package(pkg),
            SymbolRef::Class(cls) => self.for_class(cls, resolver),
            SymbolRef::Field(field, owner) => self.for_field(field, owner),
            SymbolRef::Method(method, owner) => self.for_method(method, owner),
        }
    }
}
