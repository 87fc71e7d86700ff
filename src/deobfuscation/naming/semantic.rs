//! Context-aware alias synthesis.
//!
//! Aliases are composed from independent segments:
//!
//! 1. a structural prefix derived from the symbol's role (interface/abstract
//!    marker, field type code, getter/setter/predicate method role) and, for
//!    classes, the closest well-known framework base type
//! 2. the per-kind monotonic index
//! 3. a semantic tag recognized from the class structure
//! 4. a hint derived from the original name
//!
//! Every optional segment renders empty when disabled.

use std::collections::HashSet;

use log::debug;

use crate::{
    deobfuscation::naming::{format_hint, AliasProvider, AliasRegistry, NamingIndex},
    symbols::{
        simple_class_name, ClassResolver, ClassSymbol, FieldSymbol, MethodSymbol, PackageSymbol,
        SymbolKind, TypeRef,
    },
};

/// Superclass packages whose classes name the framework base directly.
const FRAMEWORK_SUPER_PACKAGES: &[&str] = &[
    "android.app.",
    "android.os.",
    "android.view.",
    "android.widget.",
    "android.content.",
    "androidx.",
];

/// Interface packages whose interfaces name the framework base directly.
const FRAMEWORK_INTERFACE_PACKAGES: &[&str] =
    &["java.util.concurrent.", "android.view.", "android.content."];

/// Marker interfaces and their semantic tags, in priority order.
const INTERFACE_TAGS: &[(&str, &str)] = &[
    ("Serializable", "Ser"),
    ("Parcelable", "Parcel"),
    ("Comparable", "Cmp"),
    ("Cloneable", "Clone"),
    ("Iterable", "Iter"),
    ("Collection", "Coll"),
];

const JAVA_STRING: &str = "java.lang.String";

/// Alias provider producing descriptive, structure-derived names.
///
/// | Kind | Shape | Example |
/// |------|-------|---------|
/// | Package | `pkg` + 3-digit index + meaningful part | `pkg000utils` |
/// | Class | role + base + `C` + 4-digit index + tag + hint | `IViewOnClickListenerC0001Cba` |
/// | Field | type code + index + hint | `str3b` |
/// | Method | role + index + return hint + hint | `check7Boolc` |
///
/// # Example
///
/// ```rust
/// use symscope::deobfuscation::{AliasProvider, SemanticAliasProvider};
/// use symscope::symbols::{ClassSymbol, SymbolSet};
///
/// let set = SymbolSet::builder()
///     .class(ClassSymbol::new("com.example.a").extends("android.app.Activity"))
///     .build();
///
/// let mut provider = SemanticAliasProvider::default();
/// let alias = provider.for_class(&set.classes()[0], &set);
/// assert_eq!(alias, "ActivityC0000a");
/// ```
#[derive(Debug, Clone)]
pub struct SemanticAliasProvider {
    index: NamingIndex,
    registry: AliasRegistry,
    max_length: usize,
    role_prefixes: bool,
    framework_bases: bool,
    semantic_tags: bool,
    original_hint: bool,
}

impl Default for SemanticAliasProvider {
    fn default() -> Self {
        Self::new(NamingIndex::default(), 64, "_")
    }
}

impl SemanticAliasProvider {
    /// Creates a provider with every segment enabled.
    ///
    /// # Arguments
    ///
    /// * `index` - Starting counters.
    /// * `max_length` - Longest original name kept verbatim as hint.
    /// * `separator` - Separator for duplicate suffixes.
    pub fn new(index: NamingIndex, max_length: usize, separator: impl Into<String>) -> Self {
        SemanticAliasProvider {
            index,
            registry: AliasRegistry::new(separator),
            max_length,
            role_prefixes: true,
            framework_bases: true,
            semantic_tags: true,
            original_hint: true,
        }
    }

    /// Enables or disables role prefixes and type codes.
    ///
    /// When disabled, fields use the generic code `f` and methods `m`.
    #[must_use]
    pub fn with_role_prefixes(mut self, enable: bool) -> Self {
        self.role_prefixes = enable;
        self
    }

    /// Enables or disables framework base names for classes.
    #[must_use]
    pub fn with_framework_bases(mut self, enable: bool) -> Self {
        self.framework_bases = enable;
        self
    }

    /// Enables or disables semantic class tags.
    #[must_use]
    pub fn with_semantic_tags(mut self, enable: bool) -> Self {
        self.semantic_tags = enable;
        self
    }

    /// Enables or disables the original-name hint.
    #[must_use]
    pub fn with_original_hint(mut self, enable: bool) -> Self {
        self.original_hint = enable;
        self
    }

    fn hint(&self, name: &str) -> String {
        if self.original_hint {
            format_hint(name, self.max_length)
        } else {
            String::new()
        }
    }

    fn emit(&mut self, kind: SymbolKind, candidate: String) -> String {
        let alias = self.registry.unique(kind, candidate);
        debug!("{kind} alias {alias}");
        alias
    }

    fn class_prefix(&self, cls: &ClassSymbol, resolver: &dyn ClassResolver) -> String {
        let mut prefix = String::new();
        if self.role_prefixes {
            if cls.flags.is_enum() {
                return "Enum".to_string();
            }
            if cls.flags.is_interface() {
                prefix.push('I');
            } else if cls.flags.is_abstract() {
                prefix.push_str("Abstract");
            }
        }
        if self.framework_bases && !cls.flags.is_enum() {
            prefix.push_str(&framework_base(cls, resolver));
        }
        prefix
    }
}

impl AliasProvider for SemanticAliasProvider {
    fn id(&self) -> &'static str {
        "semantic"
    }

    fn for_package(&mut self, pkg: &PackageSymbol) -> String {
        let idx = self.index.next(SymbolKind::Package);
        let meaningful = format_hint(&extract_meaningful_part(&pkg.name), self.max_length);
        let candidate = format!("pkg{idx:03}{meaningful}");
        self.emit(SymbolKind::Package, candidate)
    }

    fn for_class(&mut self, cls: &ClassSymbol, resolver: &dyn ClassResolver) -> String {
        let prefix = self.class_prefix(cls, resolver);
        let tag = if self.semantic_tags { semantic_tag(cls) } else { "" };
        let hint = self.hint(&cls.name);
        let idx = self.index.next(SymbolKind::Class);
        let candidate = format!("{prefix}C{idx:04}{tag}{hint}");
        self.emit(SymbolKind::Class, candidate)
    }

    fn for_field(&mut self, field: &FieldSymbol, _owner: &ClassSymbol) -> String {
        let code = if self.role_prefixes {
            field_type_code(field.field_type.as_ref())
        } else {
            "f"
        };
        let hint = self.hint(&field.name);
        let idx = self.index.next(SymbolKind::Field);
        let candidate = format!("{code}{idx}{hint}");
        self.emit(SymbolKind::Field, candidate)
    }

    fn for_method(&mut self, method: &MethodSymbol, _owner: &ClassSymbol) -> String {
        let (role, returns) = if self.role_prefixes {
            (method_role(method), return_hint(method.return_type.as_ref()))
        } else {
            ("m", "")
        };
        let hint = self.hint(&method.name);
        let idx = self.index.next(SymbolKind::Method);
        let candidate = format!("{role}{idx}{returns}{hint}");
        self.emit(SymbolKind::Method, candidate)
    }

    fn index(&self) -> NamingIndex {
        self.index
    }
}

/// Strips trailing digits and surrounding `_`/`$` from a package name.
///
/// Results of two characters or fewer carry no meaning and yield an empty
/// string.
#[must_use]
pub fn extract_meaningful_part(name: &str) -> String {
    let cleaned = name
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .trim_start_matches(['_', '$'])
        .trim_end_matches(['_', '$']);
    if cleaned.chars().count() <= 2 {
        String::new()
    } else {
        cleaned.to_string()
    }
}

/// Walks the superclass chain looking for a well-known framework base.
///
/// At each step the superclass is matched first, then the interfaces of the
/// current class. The walk stops at the first match, at an unresolved
/// superclass, or when the chain loops.
#[must_use]
pub fn framework_base(cls: &ClassSymbol, resolver: &dyn ClassResolver) -> String {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut current = Some(cls);

    while let Some(class) = current {
        if !visited.insert(class.full_name.as_str()) {
            break;
        }

        if let Some(base) = class.super_type.as_deref().and_then(super_base) {
            return base;
        }
        if let Some(base) = class.interfaces.iter().find_map(|i| interface_base(i)) {
            return base;
        }

        current = class.super_type.as_deref().and_then(|s| resolver.resolve(s));
    }

    String::new()
}

fn super_base(name: &str) -> Option<String> {
    if FRAMEWORK_SUPER_PACKAGES.iter().any(|p| name.starts_with(p)) {
        return Some(simple_class_name(name));
    }
    if name.starts_with("java.lang.Thread") {
        return Some("Thread".to_string());
    }
    if name.contains("Exception") {
        return Some("Exception".to_string());
    }
    None
}

fn interface_base(name: &str) -> Option<String> {
    if name == "java.lang.Runnable" {
        return Some("Runnable".to_string());
    }
    if FRAMEWORK_INTERFACE_PACKAGES
        .iter()
        .any(|p| name.starts_with(p))
    {
        return Some(simple_class_name(name));
    }
    None
}

/// Recognizes the semantic tag of a class.
///
/// Marker interfaces take priority, then the singleton, builder and callback
/// shapes. Returns an empty string when nothing matches.
#[must_use]
pub fn semantic_tag(cls: &ClassSymbol) -> &'static str {
    for interface in &cls.interfaces {
        if let Some((_, tag)) = INTERFACE_TAGS
            .iter()
            .find(|(marker, _)| interface.contains(marker))
        {
            return tag;
        }
    }

    if is_singleton(cls) {
        "Single"
    } else if is_builder(cls) {
        "Builder"
    } else if is_callback(cls) {
        "Cb"
    } else {
        ""
    }
}

/// A private constructor plus a static self-typed field or a static `*instance*` method.
#[must_use]
pub fn is_singleton(cls: &ClassSymbol) -> bool {
    let private_ctor = cls
        .methods
        .iter()
        .any(|m| m.is_constructor && m.flags.is_private());
    if !private_ctor {
        return false;
    }

    let static_instance = cls.fields.iter().any(|f| {
        f.flags.is_static()
            && f
                .field_type
                .as_ref()
                .is_some_and(|t| t.is_object_named(&cls.full_name))
    });
    let instance_getter = cls
        .methods
        .iter()
        .any(|m| m.flags.is_static() && m.name.to_lowercase().contains("instance"));

    static_instance || instance_getter
}

/// At least three self-returning methods plus a `build` or `create` method.
#[must_use]
pub fn is_builder(cls: &ClassSymbol) -> bool {
    let fluent = cls
        .methods
        .iter()
        .filter(|m| m.returns_object(&cls.full_name))
        .count();
    let finisher = cls
        .methods
        .iter()
        .any(|m| m.name == "build" || m.name == "create");
    fluent >= 3 && finisher
}

/// An interface with `on*`, `*callback*`, `*listener*` or `*handler*` methods.
#[must_use]
pub fn is_callback(cls: &ClassSymbol) -> bool {
    cls.flags.is_interface()
        && cls.methods.iter().any(|m| {
            let name = m.name.to_lowercase();
            name.starts_with("on")
                || name.contains("callback")
                || name.contains("listener")
                || name.contains("handler")
        })
}

fn field_type_code(field_type: Option<&TypeRef>) -> &'static str {
    let Some(field_type) = field_type else {
        return "field";
    };
    match field_type {
        TypeRef::Boolean => "is",
        TypeRef::Int => "i",
        TypeRef::Long => "l",
        TypeRef::Float => "f",
        TypeRef::Double => "d",
        TypeRef::Byte => "b",
        TypeRef::Short => "s",
        TypeRef::Char => "c",
        TypeRef::Array(_) => "arr",
        TypeRef::Object(name) => object_code(name),
        TypeRef::Void => "field",
    }
}

fn object_code(name: &str) -> &'static str {
    const CODES: &[(&str, &str)] = &[
        ("List", "list"),
        ("Map", "map"),
        ("Set", "set"),
        ("View", "view"),
        ("Context", "ctx"),
        ("Handler", "handler"),
        ("Intent", "intent"),
        ("Bundle", "bundle"),
    ];
    if name == JAVA_STRING {
        return "str";
    }
    CODES
        .iter()
        .find(|(marker, _)| name.contains(marker))
        .map_or("obj", |(_, code)| *code)
}

fn method_role(method: &MethodSymbol) -> &'static str {
    if method.is_override {
        return "mo";
    }
    match &method.return_type {
        None => "object",
        Some(TypeRef::Boolean) => "check",
        Some(TypeRef::Void) if method.arg_types.len() == 1 => "set",
        Some(TypeRef::Void) => "do",
        Some(_) if method.arg_types.is_empty() => "get",
        Some(_) => "m",
    }
}

fn return_hint(return_type: Option<&TypeRef>) -> &'static str {
    match return_type {
        Some(TypeRef::Boolean) => "Bool",
        Some(TypeRef::Object(name)) if name == JAVA_STRING => "Str",
        Some(TypeRef::Object(name)) if name.contains("List") => "List",
        Some(TypeRef::Object(name)) if name.contains("Map") => "Map",
        _ => "",
    }
}
