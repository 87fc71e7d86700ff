//! Scope exclusions: whitelisted names, TLD root packages and Android `R` classes.

use std::collections::HashSet;

use crate::{deobfuscation::conditions::Action, symbols::SymbolRef};

/// Forbids renaming whitelisted packages and classes.
///
/// Entries ending in `.*` name a package; every other entry names a class by
/// its qualified name. A class inside a whitelisted package is whitelisted
/// too.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhitelistCondition {
    packages: HashSet<String>,
    classes: HashSet<String>,
}

impl WhitelistCondition {
    /// Creates the condition from whitelist entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut packages = HashSet::new();
        let mut classes = HashSet::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            match entry.strip_suffix(".*") {
                Some(pkg) => packages.insert(pkg.to_string()),
                None => classes.insert(entry.to_string()),
            };
        }
        WhitelistCondition { packages, classes }
    }

    /// Evaluates the symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        let listed = match symbol {
            SymbolRef::Package(pkg) => self.packages.contains(&pkg.full_name),
            SymbolRef::Class(cls) => {
                self.classes.contains(&cls.full_name) || self.packages.contains(&cls.package)
            }
            SymbolRef::Field(..) | SymbolRef::Method(..) => false,
        };
        if listed {
            Action::ForbidRename
        } else {
            Action::NoAction
        }
    }
}

/// Top-level domains commonly used as the root of reverse-domain package names.
const TOP_LEVEL_DOMAINS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "info", "biz", "name", "pro", "app", "dev",
    "io", "co", "me", "tv", "cc", "ai", "xyz", "online", "site", "tech", "top", "eu", "uk", "de",
    "fr", "it", "es", "nl", "be", "ch", "at", "se", "no", "fi", "dk", "pl", "cz", "sk", "hu", "ro",
    "bg", "gr", "pt", "ie", "ru", "ua", "by", "kz", "cn", "jp", "kr", "tw", "hk", "sg", "in", "id",
    "th", "vn", "my", "ph", "au", "nz", "ca", "us", "mx", "br", "ar", "cl", "za", "tr", "il", "ir",
];

/// Forbids renaming root packages named after a top-level domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TldExclusionCondition;

impl TldExclusionCondition {
    /// Evaluates the symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        match symbol {
            SymbolRef::Package(pkg) if pkg.is_root() && TOP_LEVEL_DOMAINS.contains(&pkg.name.as_str()) => {
                Action::ForbidRename
            }
            _ => Action::NoAction,
        }
    }
}

/// Forbids renaming Android resource classes (`R`, `R$id`, ...) and their fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AndroidRClassCondition;

impl AndroidRClassCondition {
    /// Evaluates the symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        let in_r = match symbol {
            SymbolRef::Package(_) | SymbolRef::Method(..) => false,
            SymbolRef::Class(cls) | SymbolRef::Field(_, cls) => {
                cls.local_name().split('$').any(|part| part == "R")
            }
        };
        if in_r {
            Action::ForbidRename
        } else {
            Action::NoAction
        }
    }
}
