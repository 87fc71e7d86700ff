//! Symbol set fixtures shared by unit tests.

use crate::symbols::{AccessFlags, ClassSymbol, FieldSymbol, MethodSymbol, SymbolSet, TypeRef};

/// An Android app shrunk by ProGuard/R8.
///
/// Contains one readable activity, two obfuscated classes (one of them a
/// `Serializable` singleton), the `R` resource classes, and a package named
/// like an obfuscated class.
pub fn proguard_app() -> SymbolSet {
    SymbolSet::builder()
        .class(
            ClassSymbol::new("com.example.app.MainActivity")
                .extends("android.app.Activity")
                .with_method(MethodSymbol::new("<init>"))
                .with_method(
                    MethodSymbol::new("onCreate")
                        .with_args(vec![TypeRef::object("android.os.Bundle")])
                        .overriding(),
                ),
        )
        .class(
            ClassSymbol::new("com.example.app.a")
                .extends("android.app.Activity")
                .with_field(FieldSymbol::new("a", Some(TypeRef::Int)))
                .with_field(FieldSymbol::new(
                    "b",
                    Some(TypeRef::object("java.lang.String")),
                ))
                .with_method(MethodSymbol::new("<init>"))
                .with_method(MethodSymbol::new("a").returns(Some(TypeRef::Boolean)))
                .with_method(MethodSymbol::new("b").with_args(vec![TypeRef::Int])),
        )
        .class(
            ClassSymbol::new("com.example.app.b")
                .implements("java.io.Serializable")
                .with_field(
                    FieldSymbol::new("c", Some(TypeRef::object("com.example.app.b")))
                        .with_flags(AccessFlags::PRIVATE | AccessFlags::STATIC),
                )
                .with_method(MethodSymbol::new("<init>").with_flags(AccessFlags::PRIVATE)),
        )
        .class(ClassSymbol::new("com.example.app.R"))
        .class(
            ClassSymbol::new("com.example.app.R$id").with_field(
                FieldSymbol::new("a", Some(TypeRef::Int)).with_flags(AccessFlags::STATIC),
            ),
        )
        .class(ClassSymbol::new("com.example.a.c").extends("com.example.app.a"))
        .build()
}

/// A small app with descriptive names only.
pub fn readable_app() -> SymbolSet {
    SymbolSet::builder()
        .class(
            ClassSymbol::new("org.sample.notes.NoteRepository")
                .with_field(FieldSymbol::new(
                    "database",
                    Some(TypeRef::object("org.sample.notes.NoteDatabase")),
                ))
                .with_method(MethodSymbol::new("<init>"))
                .with_method(
                    MethodSymbol::new("findByTitle")
                        .with_args(vec![TypeRef::object("java.lang.String")])
                        .returns(Some(TypeRef::object("java.util.List"))),
                ),
        )
        .class(
            ClassSymbol::new("org.sample.notes.NoteDatabase")
                .with_field(FieldSymbol::new("connection", None))
                .with_method(MethodSymbol::new("close")),
        )
        .build()
}
