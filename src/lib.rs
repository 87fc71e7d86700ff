// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # symscope
//!
//! Obfuscated symbol classification and deterministic rename planning for
//! decompiled Java/Android programs.
//!
//! Shrinkers and obfuscators such as ProGuard/R8, Allatori, Zelix KlassMaster
//! and DexGuard replace meaningful names with short, confusable or random
//! ones. `symscope` sits between a decompiler's symbol model and its source
//! emitter: for every package, class, field and method it decides whether the
//! name should be replaced and, if so, synthesizes a stable replacement.
//!
//! ## Features
//!
//! - **🔍 Tool attribution** - Signature library for common obfuscators with confidence scoring
//! - **📊 Entropy analysis** - Shannon entropy and structural shape detection
//! - **🧩 Composable rules** - Independent conditions with "forbid beats force beats silence"
//! - **📈 Codebase analysis** - Global obfuscation rates and automatic mode selection
//! - **🏷️ Deterministic naming** - Index-based and semantic, type-aware aliases
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use symscope::prelude::*;
//!
//! let set = SymbolSet::builder()
//!     .class(
//!         ClassSymbol::new("com.example.a")
//!             .extends("android.app.Activity")
//!             .with_field(FieldSymbol::new("b", Some(TypeRef::object("java.lang.String")))),
//!     )
//!     .build();
//!
//! let factory = ModeFactory::default();
//! let plan = RenamePass::new(&set, DeobfuscationMode::Enhanced, &factory).run();
//!
//! assert_eq!(plan.alias_of("com.example.a"), Some("ActivityC0000a"));
//! assert_eq!(plan.alias_of("com.example.a.b"), Some("str0b"));
//! ```
//!
//! ### Classifying Single Names
//!
//! ```rust
//! use symscope::deobfuscation::{ObfuscatorTool, PatternClassifier};
//!
//! let classifier = PatternClassifier::default();
//! let result = classifier.classify("lIl1");
//!
//! assert_eq!(result.tool, Some(ObfuscatorTool::Allatori));
//! assert!(result.is_confident());
//! ```
//!
//! ### Automatic Mode Selection
//!
//! ```rust
//! use symscope::prelude::*;
//!
//! let set = SymbolSet::builder()
//!     .class(ClassSymbol::new("a.a"))
//!     .class(ClassSymbol::new("a.b"))
//!     .build();
//!
//! let analyzer = DeobfuscationAnalyzer::new(&set);
//! println!("{}", analyzer.report());
//!
//! let plan = RenamePass::new(&set, DeobfuscationMode::Auto, &ModeFactory::default()).run();
//! assert_eq!(plan.mode, DeobfuscationMode::Aggressive);
//! ```
//!
//! ## Architecture
//!
//! ### Symbol Model
//! - [`symbols`] - Read-only packages, classes, fields and methods handed over by a decompiler
//!
//! ### Rename Engine
//! - [`deobfuscation`] - Classifiers, conditions, analyzer, alias providers, modes and the rename pass
//!
//! ## Logging
//!
//! The crate emits records through the [`log`](https://docs.rs/log) facade and never installs
//! a logger. Per-condition verdicts are logged at `trace`, synthesized aliases at `debug`, and
//! analysis summaries at `info`.
//!
//! ## Testing
//!
//! ```bash
//! cargo test
//! cargo bench --bench classifiers
//! ```

pub(crate) mod error;

/// Shared functionality which is used in unit- and integration-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// This module provides a curated selection of the most frequently used types
/// from across the symscope library, allowing for convenient glob imports.
///
/// # Example
///
/// ```rust
/// use symscope::prelude::*;
///
/// let classifier = PatternClassifier::default();
/// assert_eq!(classifier.detect_obfuscator_type("a"), Some(ObfuscatorTool::ProGuard));
/// ```
pub mod prelude;

/// Symbol model of a decompiled program.
///
/// Packages, classes, fields and methods with the facts the rename engine
/// inspects: names, declared types, access flags, superclass and interfaces,
/// and the decompiler's keep and alias markers.
///
/// # Key Types
///
/// - [`symbols::SymbolSet`] - Owned collection built with [`symbols::SymbolSetBuilder`]
/// - [`symbols::SymbolRef`] - Borrowed view of one symbol with its enclosing class
/// - [`symbols::ClassResolver`] - Lookup used to walk superclass chains
/// - [`symbols::TypeRef`] - Declared field, return and argument types
pub mod symbols;

/// Rename rule engine for obfuscated symbols.
///
/// # Key Components
///
/// - [`deobfuscation::PatternClassifier`] and [`deobfuscation::EntropyClassifier`] - Name classification
/// - [`deobfuscation::RenameCondition`] - Ordered composition of [`deobfuscation::Condition`]s
/// - [`deobfuscation::DeobfuscationAnalyzer`] - Codebase-wide statistics and mode recommendation
/// - [`deobfuscation::AliasProvider`] - Deterministic replacement names
/// - [`deobfuscation::ModeFactory`] - Mode-driven component assembly
/// - [`deobfuscation::RenamePass`] - One rename run producing a [`deobfuscation::RenamePlan`]
pub mod deobfuscation;

/// `symscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
/// This is used consistently throughout the crate for all fallible operations.
///
/// # Examples
///
/// ```rust
/// use symscope::{Result, deobfuscation::DeobfuscationMode};
///
/// fn select(name: &str) -> Result<DeobfuscationMode> {
///     name.parse()
/// }
/// assert!(select("auto").is_ok());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// `symscope` Error type
///
/// The main error type for all operations in this crate. Only the operator-facing surfaces
/// can fail: parsing a mode name and validating a configuration.
///
/// # Examples
///
/// ```rust
/// use symscope::{Error, deobfuscation::DeobfuscationConfig};
///
/// let config = DeobfuscationConfig::new().with_length_bounds(10, 2);
/// match config.validate() {
///     Ok(()) => println!("valid"),
///     Err(Error::InvalidConfig { message }) => println!("invalid: {message}"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
pub use error::Error;
