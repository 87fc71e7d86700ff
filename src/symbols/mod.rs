//! Symbol model consumed by the rename machinery.
//!
//! The decompiler owns the symbol graph; this module defines the read-only
//! view of it that classifiers, conditions and alias providers work on.
//!
//! # Key Components
//!
//! - [`SymbolSet`] - All packages and classes of one program, built via [`SymbolSetBuilder`]
//! - [`ClassSymbol`], [`FieldSymbol`], [`MethodSymbol`], [`PackageSymbol`] - The renameable symbols
//! - [`SymbolRef`] - Borrowed view of a single symbol with its enclosing class
//! - [`ClassResolver`] - Qualified-name lookup used for superclass-chain walks
//! - [`TypeRef`] and [`AccessFlags`] - Declared types and modifiers
//!
//! # Examples
//!
//! ```rust
//! use symscope::symbols::{ClassSymbol, ClassResolver, FieldSymbol, SymbolSet, TypeRef};
//!
//! let set = SymbolSet::builder()
//!     .class(
//!         ClassSymbol::new("com.example.a")
//!             .extends("android.app.Activity")
//!             .with_field(FieldSymbol::new("b", Some(TypeRef::Int))),
//!     )
//!     .build();
//!
//! assert!(set.resolve("com.example.a").is_some());
//! assert_eq!(set.packages().len(), 2);
//! ```

mod class;
mod flags;
mod set;
mod types;

pub use class::{ClassSymbol, FieldSymbol, MethodSymbol, PackageSymbol, SymbolKind, SymbolRef};
pub use flags::AccessFlags;
pub use set::{ClassResolver, SymbolSet, SymbolSetBuilder};
pub use types::{simple_class_name, TypeRef};
