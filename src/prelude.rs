//! # symscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the symscope library. Import this module to get quick access to the essential
//! types for classifying names and planning renames.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all symscope operations
pub use crate::Error;

/// The result type used throughout symscope
pub use crate::Result;

// ================================================================================================
// Symbol Model
// ================================================================================================

/// Symbols of a decompiled program
pub use crate::symbols::{ClassSymbol, FieldSymbol, MethodSymbol, PackageSymbol};

/// Symbol collections and borrowed views
pub use crate::symbols::{ClassResolver, SymbolKind, SymbolRef, SymbolSet, SymbolSetBuilder};

/// Declared types and access flags
pub use crate::symbols::{AccessFlags, TypeRef};

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Rename run, its result and its configuration
pub use crate::deobfuscation::{
    DeobfuscationConfig, DeobfuscationMode, ModeFactory, RenameEntry, RenamePass, RenamePlan,
};

/// Codebase-wide analysis
pub use crate::deobfuscation::{DeobfuscationAnalyzer, ObfuscationStats};

// ================================================================================================
// Classification
// ================================================================================================

/// Name classifiers and their results
pub use crate::deobfuscation::{
    ClassificationResult, EntropyClassifier, ObfuscatorTool, PatternClassifier, Signature,
};

// ================================================================================================
// Conditions and Naming
// ================================================================================================

/// Rename conditions and their composer
pub use crate::deobfuscation::{Action, Condition, RenameCondition};

/// Alias synthesis
pub use crate::deobfuscation::{
    AliasProvider, IndexAliasProvider, NamingIndex, SemanticAliasProvider,
};
