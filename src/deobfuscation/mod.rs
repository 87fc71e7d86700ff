//! Rename rule engine for obfuscated symbols.
//!
//! This module decides, for every package, class, field and method of a
//! decompiled program, whether its name should be replaced and synthesizes a
//! deterministic replacement. Decisions come from small independent
//! heuristics composed with a strict precedence; names come from a per-run
//! naming index.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Rename Pipeline                              │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  Input: SymbolSet + DeobfuscationMode                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Mode Resolution (Auto only)                    │   │
//! │  │  DeobfuscationAnalyzer → ObfuscationStats → recommended mode     │   │
//! │  └────────────────────────────┬────────────────────────────────────┘   │
//! │                               │                                         │
//! │                               ▼                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        ModeFactory                               │   │
//! │  │  Condition list → RenameCondition      Alias provider            │   │
//! │  └────────────────────────────┬────────────────────────────────────┘   │
//! │                               │                                         │
//! │                               ▼                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        RenamePass                                │   │
//! │  │  packages → classes → fields → methods                           │   │
//! │  │  decide (forbid > force > silence) → synthesize alias            │   │
//! │  └────────────────────────────┬────────────────────────────────────┘   │
//! │                               │                                         │
//! │                               ▼                                         │
//! │  Output: RenamePlan (kind, path, original, alias)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Components
//!
//! ## Classifiers
//!
//! - [`EntropyClassifier`] - Shannon entropy and structural obfuscator shapes
//! - [`PatternClassifier`] - Obfuscator tool signatures with confidence scoring
//!
//! ## Conditions
//!
//! The [`conditions`] module holds the closed set of [`Condition`]s and the
//! [`RenameCondition`] composer.
//!
//! ## Naming
//!
//! The [`naming`] module holds the [`AliasProvider`] trait with the
//! [`IndexAliasProvider`] and [`SemanticAliasProvider`] implementations, plus
//! parameter name helpers.
//!
//! ## Modes
//!
//! | Mode | Intent |
//! |------|--------|
//! | `disabled` | Nothing is renamed |
//! | `conservative` | Clear obfuscator signatures only, vocabulary preserved |
//! | `default` | Length-driven detection |
//! | `enhanced` | Signatures, entropy and length with semantic names |
//! | `aggressive` | Every detector, no whitelist or vocabulary protection |
//! | `auto` | Picked by [`DeobfuscationAnalyzer`] |
//!
//! # Usage
//!
//! ```rust
//! use symscope::deobfuscation::{DeobfuscationConfig, DeobfuscationMode, RenamePass};
//! use symscope::symbols::{ClassSymbol, MethodSymbol, SymbolSet};
//!
//! let set = SymbolSet::builder()
//!     .class(ClassSymbol::new("com.example.a").with_method(MethodSymbol::new("b")))
//!     .build();
//!
//! let mode: DeobfuscationMode = "enhanced".parse()?;
//! let plan = RenamePass::with_config(&set, mode, DeobfuscationConfig::default())?.run();
//!
//! for entry in &plan.entries {
//!     println!("{entry}");
//! }
//! # Ok::<(), symscope::Error>(())
//! ```

mod analyzer;
mod config;
mod detection;
mod engine;
mod entropy;
mod factory;
mod mode;
mod patterns;

pub mod conditions;
pub mod naming;

pub use analyzer::{DeobfuscationAnalyzer, ObfuscationStats};
pub use conditions::{
    Action, AndroidRClassCondition, BaseCondition, CollisionCondition, CommonWordsCondition,
    Condition, EntropyCondition, LengthCondition, PatternCondition, RenameCondition,
    TldExclusionCondition, WhitelistCondition,
};
pub use config::{DeobfuscationConfig, DEFAULT_WHITELIST};
pub use detection::{ClassificationResult, ObfuscatorTool, Signature};
pub use engine::{RenameEntry, RenamePass, RenamePlan};
pub use entropy::{
    shannon_entropy, EntropyClassifier, DEFAULT_CONFUSABLE_CHARS, DEFAULT_ENTROPY_MIN_LENGTH,
    DEFAULT_ENTROPY_THRESHOLD,
};
pub use factory::ModeFactory;
pub use mode::DeobfuscationMode;
pub use naming::{
    AliasProvider, AliasRegistry, IndexAliasProvider, NamingIndex, SemanticAliasProvider,
};
pub use patterns::PatternClassifier;
