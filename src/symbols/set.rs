//! The symbol set handed over by the decompiler for one rename run.

use std::collections::{HashMap, HashSet};

use crate::symbols::{ClassSymbol, PackageSymbol, SymbolRef};

/// Resolves a qualified class name to its declaring symbol.
///
/// Used for the superclass-chain walk during semantic naming. A `None` result
/// means the class is outside the analysed program (e.g. a framework class)
/// and terminates the walk.
pub trait ClassResolver {
    /// Looks up a class by qualified name.
    fn resolve(&self, name: &str) -> Option<&ClassSymbol>;
}

/// Packages and classes of one decompiled program.
///
/// Iteration order is insertion order for every kind, which keeps rename
/// plans and analyzer votes deterministic.
#[derive(Debug, Default)]
pub struct SymbolSet {
    packages: Vec<PackageSymbol>,
    classes: Vec<ClassSymbol>,
    class_index: HashMap<String, usize>,
}

impl SymbolSet {
    /// Creates a builder.
    #[must_use]
    pub fn builder() -> SymbolSetBuilder {
        SymbolSetBuilder::default()
    }

    /// Returns all packages in insertion order.
    #[must_use]
    pub fn packages(&self) -> &[PackageSymbol] {
        &self.packages
    }

    /// Returns all classes in insertion order.
    #[must_use]
    pub fn classes(&self) -> &[ClassSymbol] {
        &self.classes
    }

    /// Iterates over every field together with its enclosing class.
    pub fn fields(&self) -> impl Iterator<Item = SymbolRef<'_>> {
        self.classes
            .iter()
            .flat_map(|cls| cls.fields.iter().map(move |f| SymbolRef::Field(f, cls)))
    }

    /// Iterates over every method together with its enclosing class.
    pub fn methods(&self) -> impl Iterator<Item = SymbolRef<'_>> {
        self.classes
            .iter()
            .flat_map(|cls| cls.methods.iter().map(move |m| SymbolRef::Method(m, cls)))
    }

    /// Iterates over every symbol: packages, then classes, then fields, then methods.
    pub fn symbols(&self) -> impl Iterator<Item = SymbolRef<'_>> {
        self.packages
            .iter()
            .map(SymbolRef::Package)
            .chain(self.classes.iter().map(SymbolRef::Class))
            .chain(self.fields())
            .chain(self.methods())
    }

    /// Looks up a package by dotted full name.
    #[must_use]
    pub fn package(&self, full_name: &str) -> Option<&PackageSymbol> {
        self.packages.iter().find(|p| p.full_name == full_name)
    }

    /// Returns the number of classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if the set holds neither packages nor classes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty() && self.classes.is_empty()
    }
}

impl ClassResolver for SymbolSet {
    fn resolve(&self, name: &str) -> Option<&ClassSymbol> {
        self.class_index.get(name).map(|&idx| &self.classes[idx])
    }
}

/// Builder for [`SymbolSet`].
///
/// Packages referenced by classes, and all their parent packages, are created
/// on [`SymbolSetBuilder::build`] when not added explicitly.
#[derive(Debug, Default)]
pub struct SymbolSetBuilder {
    packages: Vec<PackageSymbol>,
    classes: Vec<ClassSymbol>,
}

impl SymbolSetBuilder {
    /// Adds a package.
    #[must_use]
    pub fn package(mut self, package: PackageSymbol) -> Self {
        self.packages.push(package);
        self
    }

    /// Adds a class.
    #[must_use]
    pub fn class(mut self, class: ClassSymbol) -> Self {
        self.classes.push(class);
        self
    }

    /// Adds several classes.
    #[must_use]
    pub fn classes(mut self, classes: impl IntoIterator<Item = ClassSymbol>) -> Self {
        self.classes.extend(classes);
        self
    }

    /// Finalizes the set.
    ///
    /// A class added twice under the same qualified name replaces the earlier
    /// definition in place.
    #[must_use]
    pub fn build(self) -> SymbolSet {
        let mut packages = self.packages;
        let mut classes: Vec<ClassSymbol> = Vec::with_capacity(self.classes.len());
        let mut class_index = HashMap::with_capacity(self.classes.len());

        for class in self.classes {
            if let Some(&idx) = class_index.get(&class.full_name) {
                classes[idx] = class;
            } else {
                class_index.insert(class.full_name.clone(), classes.len());
                classes.push(class);
            }
        }

        let mut known: HashSet<String> = packages.iter().map(|p| p.full_name.clone()).collect();
        for class in &classes {
            if class.package.is_empty() {
                continue;
            }
            let mut end = 0;
            for segment in class.package.split('.') {
                end += segment.len();
                let prefix = &class.package[..end];
                if !known.contains(prefix) {
                    known.insert(prefix.to_string());
                    packages.push(PackageSymbol::new(prefix));
                }
                end += 1;
            }
        }

        SymbolSet {
            packages,
            classes,
            class_index,
        }
    }
}
