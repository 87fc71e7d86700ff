//! Packages, classes, fields and methods of a decompiled program.
//!
//! These are read-only facts handed over by the decompiler. The rename
//! machinery only inspects them; the verdicts and aliases it produces are
//! returned separately as a [`crate::deobfuscation::RenamePlan`].

use std::fmt;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::symbols::{AccessFlags, TypeRef};

/// The four kinds of named symbols that can be renamed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum SymbolKind {
    /// A package (namespace)
    Package,
    /// A class, interface or enum
    Class,
    /// A field declared by a class
    Field,
    /// A method declared by a class
    Method,
}

/// A package of the decompiled program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSymbol {
    /// Dotted full name (e.g. `com.example.a`)
    pub full_name: String,
    /// Last segment of the full name (e.g. `a`)
    pub name: String,
    /// Alias assigned by the user or a previous pass
    pub alias: Option<String>,
    /// Whether the decompiler asked to keep the original name
    pub keep: bool,
}

impl PackageSymbol {
    /// Creates a package from its dotted full name.
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let name = full_name
            .rsplit('.')
            .next()
            .unwrap_or(full_name.as_str())
            .to_string();
        PackageSymbol {
            full_name,
            name,
            alias: None,
            keep: false,
        }
    }

    /// Returns `true` if this package has no parent package.
    #[must_use]
    pub fn is_root(&self) -> bool {
        !self.full_name.contains('.')
    }
}

/// A field declared by a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSymbol {
    /// Field name
    pub name: String,
    /// Declared type, `None` if unresolved
    pub field_type: Option<TypeRef>,
    /// Access flags
    pub flags: AccessFlags,
    /// Alias assigned by the user or a previous pass
    pub alias: Option<String>,
    /// Whether the decompiler asked to keep the original name
    pub keep: bool,
}

impl FieldSymbol {
    /// Creates a field with the given name and declared type.
    pub fn new(name: impl Into<String>, field_type: Option<TypeRef>) -> Self {
        FieldSymbol {
            name: name.into(),
            field_type,
            flags: AccessFlags::empty(),
            alias: None,
            keep: false,
        }
    }

    /// Sets the access flags.
    #[must_use]
    pub fn with_flags(mut self, flags: AccessFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A method declared by a class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSymbol {
    /// Method name (`<init>` for constructors, `<clinit>` for static initializers)
    pub name: String,
    /// Return type, `None` if unresolved
    pub return_type: Option<TypeRef>,
    /// Argument types in declaration order
    pub arg_types: Vec<TypeRef>,
    /// Access flags
    pub flags: AccessFlags,
    /// Whether this is an instance constructor
    pub is_constructor: bool,
    /// Whether this is the class static initializer
    pub is_static_initializer: bool,
    /// Whether this method overrides or implements an inherited method
    pub is_override: bool,
    /// Alias assigned by the user or a previous pass
    pub alias: Option<String>,
    /// Whether the decompiler asked to keep the original name
    pub keep: bool,
}

impl MethodSymbol {
    /// Creates a method returning `void` with no arguments.
    ///
    /// The constructor and static-initializer markers are derived from the
    /// JVM special names `<init>` and `<clinit>`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        MethodSymbol {
            is_constructor: name == "<init>",
            is_static_initializer: name == "<clinit>",
            name,
            return_type: Some(TypeRef::Void),
            arg_types: Vec::new(),
            flags: AccessFlags::empty(),
            is_override: false,
            alias: None,
            keep: false,
        }
    }

    /// Sets the return type.
    #[must_use]
    pub fn returns(mut self, return_type: Option<TypeRef>) -> Self {
        self.return_type = return_type;
        self
    }

    /// Sets the argument types.
    #[must_use]
    pub fn with_args(mut self, arg_types: Vec<TypeRef>) -> Self {
        self.arg_types = arg_types;
        self
    }

    /// Sets the access flags.
    #[must_use]
    pub fn with_flags(mut self, flags: AccessFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Marks the method as overriding an inherited method.
    #[must_use]
    pub fn overriding(mut self) -> Self {
        self.is_override = true;
        self
    }

    /// Returns `true` if the method returns `void`.
    #[must_use]
    pub fn returns_void(&self) -> bool {
        self.return_type == Some(TypeRef::Void)
    }

    /// Returns `true` if the method returns an object of the given class.
    #[must_use]
    pub fn returns_object(&self, class_name: &str) -> bool {
        self.return_type
            .as_ref()
            .is_some_and(|t| t.is_object_named(class_name))
    }
}

/// A class, interface or enum of the decompiled program.
///
/// Nested classes are separate symbols whose `full_name` uses the
/// `Outer$Inner` convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassSymbol {
    /// Qualified name (e.g. `com.example.a$b`)
    pub full_name: String,
    /// Short name, the part after the last `.` or `$`
    pub name: String,
    /// Dotted name of the declaring package, empty for the default package
    pub package: String,
    /// Access flags
    pub flags: AccessFlags,
    /// Qualified name of the superclass
    pub super_type: Option<String>,
    /// Qualified names of the directly implemented interfaces
    pub interfaces: Vec<String>,
    /// Declared fields
    pub fields: Vec<FieldSymbol>,
    /// Declared methods
    pub methods: Vec<MethodSymbol>,
    /// Alias assigned by the user or a previous pass
    pub alias: Option<String>,
    /// Whether the decompiler asked to keep the original name
    pub keep: bool,
}

impl ClassSymbol {
    /// Creates a class from its qualified name.
    pub fn new(full_name: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let (package, local) = match full_name.rfind('.') {
            Some(pos) => (full_name[..pos].to_string(), &full_name[pos + 1..]),
            None => (String::new(), full_name.as_str()),
        };
        let name = local.rsplit('$').next().unwrap_or(local).to_string();

        ClassSymbol {
            name,
            package,
            full_name,
            flags: AccessFlags::empty(),
            super_type: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            alias: None,
            keep: false,
        }
    }

    /// Sets the access flags.
    #[must_use]
    pub fn with_flags(mut self, flags: AccessFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the superclass.
    #[must_use]
    pub fn extends(mut self, super_type: impl Into<String>) -> Self {
        self.super_type = Some(super_type.into());
        self
    }

    /// Adds an implemented interface.
    #[must_use]
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldSymbol) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a method.
    #[must_use]
    pub fn with_method(mut self, method: MethodSymbol) -> Self {
        self.methods.push(method);
        self
    }

    /// Returns the local part of the qualified name, including any `Outer$` prefix.
    #[must_use]
    pub fn local_name(&self) -> &str {
        match self.full_name.rfind('.') {
            Some(pos) => &self.full_name[pos + 1..],
            None => &self.full_name,
        }
    }

    /// Returns `true` if this class is nested inside another class.
    #[must_use]
    pub fn is_inner(&self) -> bool {
        self.local_name().contains('$')
    }

    /// Returns the qualified name of the enclosing class for nested classes.
    #[must_use]
    pub fn outer_name(&self) -> Option<&str> {
        self.full_name
            .rfind('$')
            .filter(|pos| *pos > self.full_name.rfind('.').map_or(0, |dot| dot + 1))
            .map(|pos| &self.full_name[..pos])
    }

    /// Returns `true` if this class implements the named interface directly.
    #[must_use]
    pub fn implements_interface(&self, name: &str) -> bool {
        self.interfaces.iter().any(|i| i == name)
    }
}

/// A borrowed view of one renameable symbol.
///
/// Fields and methods carry their enclosing class so that conditions and
/// alias providers can inspect the structural context.
#[derive(Debug, Clone, Copy)]
pub enum SymbolRef<'a> {
    /// A package
    Package(&'a PackageSymbol),
    /// A class
    Class(&'a ClassSymbol),
    /// A field with its enclosing class
    Field(&'a FieldSymbol, &'a ClassSymbol),
    /// A method with its enclosing class
    Method(&'a MethodSymbol, &'a ClassSymbol),
}

impl<'a> SymbolRef<'a> {
    /// Returns the symbol's original short name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            SymbolRef::Package(pkg) => &pkg.name,
            SymbolRef::Class(cls) => &cls.name,
            SymbolRef::Field(field, _) => &field.name,
            SymbolRef::Method(method, _) => &method.name,
        }
    }

    /// Returns the symbol kind.
    #[must_use]
    pub fn kind(&self) -> SymbolKind {
        match self {
            SymbolRef::Package(_) => SymbolKind::Package,
            SymbolRef::Class(_) => SymbolKind::Class,
            SymbolRef::Field(..) => SymbolKind::Field,
            SymbolRef::Method(..) => SymbolKind::Method,
        }
    }

    /// Returns `true` if the decompiler asked to keep the original name.
    #[must_use]
    pub fn is_kept(&self) -> bool {
        match self {
            SymbolRef::Package(pkg) => pkg.keep,
            SymbolRef::Class(cls) => cls.keep,
            SymbolRef::Field(field, _) => field.keep,
            SymbolRef::Method(method, _) => method.keep,
        }
    }

    /// Returns the alias a user or a previous pass already assigned.
    #[must_use]
    pub fn existing_alias(&self) -> Option<&'a str> {
        match self {
            SymbolRef::Package(pkg) => pkg.alias.as_deref(),
            SymbolRef::Class(cls) => cls.alias.as_deref(),
            SymbolRef::Field(field, _) => field.alias.as_deref(),
            SymbolRef::Method(method, _) => method.alias.as_deref(),
        }
    }

    /// Returns the enclosing class of a field or method, or the class itself.
    #[must_use]
    pub fn class(&self) -> Option<&'a ClassSymbol> {
        match self {
            SymbolRef::Package(_) => None,
            SymbolRef::Class(cls) | SymbolRef::Field(_, cls) | SymbolRef::Method(_, cls) => {
                Some(cls)
            }
        }
    }

    /// Returns the stable textual identity of the symbol.
    ///
    /// Packages and classes use their qualified names, fields use
    /// `Class.field` and methods use `Class.method(argtypes)` so overloads stay
    /// distinct.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            SymbolRef::Package(pkg) => pkg.full_name.clone(),
            SymbolRef::Class(cls) => cls.full_name.clone(),
            SymbolRef::Field(field, cls) => format!("{}.{}", cls.full_name, field.name),
            SymbolRef::Method(method, cls) => {
                let args: Vec<String> = method.arg_types.iter().map(ToString::to_string).collect();
                format!("{}.{}({})", cls.full_name, method.name, args.join(","))
            }
        }
    }
}

impl fmt::Display for SymbolRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind(), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_name_split() {
        let cls = ClassSymbol::new("com.example.a$b");
        assert_eq!(cls.name, "b");
        assert_eq!(cls.package, "com.example");
        assert_eq!(cls.local_name(), "a$b");
        assert!(cls.is_inner());
        assert_eq!(cls.outer_name(), Some("com.example.a"));

        let top = ClassSymbol::new("Main");
        assert_eq!(top.name, "Main");
        assert_eq!(top.package, "");
        assert!(!top.is_inner());
        assert_eq!(top.outer_name(), None);
    }

    #[test]
    fn test_package_name_split() {
        let pkg = PackageSymbol::new("com.example.a");
        assert_eq!(pkg.name, "a");
        assert!(!pkg.is_root());
        assert!(PackageSymbol::new("com").is_root());
    }

    #[test]
    fn test_special_methods() {
        assert!(MethodSymbol::new("<init>").is_constructor);
        assert!(MethodSymbol::new("<clinit>").is_static_initializer);
        let m = MethodSymbol::new("a");
        assert!(!m.is_constructor);
        assert!(m.returns_void());
    }

    #[test]
    fn test_symbol_paths() {
        let cls = ClassSymbol::new("com.example.a");
        let field = FieldSymbol::new("b", Some(TypeRef::Int));
        let method = MethodSymbol::new("c").with_args(vec![TypeRef::Int, TypeRef::object("java.lang.String")]);

        assert_eq!(SymbolRef::Class(&cls).path(), "com.example.a");
        assert_eq!(SymbolRef::Field(&field, &cls).path(), "com.example.a.b");
        assert_eq!(
            SymbolRef::Method(&method, &cls).path(),
            "com.example.a.c(int,java.lang.String)"
        );
        assert_eq!(SymbolRef::Field(&field, &cls).kind(), SymbolKind::Field);
        assert_eq!(SymbolRef::Method(&method, &cls).name(), "c");
    }

    #[test]
    fn test_kind_strings() {
        assert_eq!(SymbolKind::Class.to_string(), "class");
        assert_eq!("method".parse::<SymbolKind>().ok(), Some(SymbolKind::Method));
    }
}
