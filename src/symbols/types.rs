//! Declared types of fields, method returns and method arguments.

use std::fmt;

/// A type reference as reported by the decompiler's type system.
///
/// Only the distinctions the naming heuristics need are kept: the primitive
/// family, arrays and named object types. Declared types are always carried
/// as `Option<TypeRef>`; `None` stands for a type the decompiler could not
/// resolve.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// `void`, only valid as a method return type
    Void,
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `char`
    Char,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
    /// Array of the element type
    Array(Box<TypeRef>),
    /// Object type with its fully qualified name (e.g. `java.lang.String`)
    Object(String),
}

impl TypeRef {
    /// Creates an object type from a qualified name.
    pub fn object(name: impl Into<String>) -> Self {
        Self::Object(name.into())
    }

    /// Creates an array type with the given element type.
    #[must_use]
    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    /// Returns `true` for the primitive types (excluding `void`).
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Boolean
                | Self::Byte
                | Self::Char
                | Self::Short
                | Self::Int
                | Self::Long
                | Self::Float
                | Self::Double
        )
    }

    /// Returns the qualified name if this is an object type.
    #[must_use]
    pub fn object_name(&self) -> Option<&str> {
        match self {
            Self::Object(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the element type if this is an array type.
    #[must_use]
    pub fn array_element(&self) -> Option<&TypeRef> {
        match self {
            Self::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Returns `true` if this is the object type with the given qualified name.
    #[must_use]
    pub fn is_object_named(&self, name: &str) -> bool {
        self.object_name() == Some(name)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Void => write!(f, "void"),
            Self::Boolean => write!(f, "boolean"),
            Self::Byte => write!(f, "byte"),
            Self::Char => write!(f, "char"),
            Self::Short => write!(f, "short"),
            Self::Int => write!(f, "int"),
            Self::Long => write!(f, "long"),
            Self::Float => write!(f, "float"),
            Self::Double => write!(f, "double"),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::Object(name) => write!(f, "{name}"),
        }
    }
}

/// Returns the simple class name of a qualified name.
///
/// Everything up to the last `.` is dropped and any `$` nesting separators are
/// removed, so `android.view.View$OnClickListener` yields `ViewOnClickListener`.
#[must_use]
pub fn simple_class_name(qualified: &str) -> String {
    let start = qualified.rfind('.').map_or(0, |pos| pos + 1);
    qualified[start..].chars().filter(|c| *c != '$').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(TypeRef::Int.to_string(), "int");
        assert_eq!(TypeRef::array(TypeRef::Byte).to_string(), "byte[]");
        assert_eq!(
            TypeRef::object("java.lang.String").to_string(),
            "java.lang.String"
        );
    }

    #[test]
    fn test_accessors() {
        let list = TypeRef::object("java.util.List");
        assert_eq!(list.object_name(), Some("java.util.List"));
        assert!(list.is_object_named("java.util.List"));
        assert!(!list.is_primitive());
        assert!(TypeRef::Boolean.is_primitive());
        assert!(!TypeRef::Void.is_primitive());

        let arr = TypeRef::array(TypeRef::Int);
        assert_eq!(arr.array_element(), Some(&TypeRef::Int));
    }

    #[test]
    fn test_simple_class_name() {
        assert_eq!(simple_class_name("android.app.Activity"), "Activity");
        assert_eq!(
            simple_class_name("android.view.View$OnClickListener"),
            "ViewOnClickListener"
        );
        assert_eq!(simple_class_name("Plain"), "Plain");
    }
}
