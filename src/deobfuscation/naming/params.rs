//! Parameter name detection and type-based suggestions.
//!
//! Parameters are not renameable symbols of their own, but a rewrite pass
//! emitting source code needs readable argument names. These helpers flag
//! register-style or obfuscated parameter names and suggest replacements
//! derived from the declared argument types.

use std::{collections::HashSet, sync::LazyLock};

use regex::Regex;

use crate::symbols::{MethodSymbol, TypeRef};

static OBFUSCATED_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z]|[a-z][0-9]+|arg[0-9]+|param[0-9]+|var[0-9]+|this\$[0-9]+)$")
        .expect("obfuscated parameter pattern")
});

const RESERVED_PARAM_NAMES: &[&str] = &["this", "super", "self"];

const INT_NAMES: &[&str] = &["index", "count", "size", "position", "id", "offset", "length"];

const STRING_NAMES: &[&str] = &["str", "text", "name", "value", "message", "content"];

/// Checks if a parameter name looks generated or obfuscated.
///
/// Matches single letters, a letter followed by digits (`p0`, `r15`),
/// `argN`, `paramN`, `varN` and `this$N`. `this`, `super` and `self` are
/// never flagged.
#[must_use]
pub fn is_obfuscated_parameter_name(name: &str) -> bool {
    !name.is_empty() && !RESERVED_PARAM_NAMES.contains(&name) && OBFUSCATED_PARAM.is_match(name)
}

fn numbered(base: &str, index: usize) -> String {
    if index == 0 {
        base.to_string()
    } else {
        format!("{base}{index}")
    }
}

/// Suggests a parameter name from its declared type and position.
///
/// # Arguments
///
/// * `arg_type` - The declared type, `None` if unresolved.
/// * `index` - Zero-based parameter position.
///
/// # Returns
///
/// A suggestion such as `flag`, `index`, `str`, `context` or `param2`.
#[must_use]
pub fn suggest_parameter_name(arg_type: Option<&TypeRef>, index: usize) -> String {
    let Some(arg_type) = arg_type else {
        return format!("param{index}");
    };

    match arg_type {
        TypeRef::Boolean => numbered("flag", index),
        TypeRef::Int => INT_NAMES
            .get(index)
            .map_or_else(|| format!("n{index}"), |name| (*name).to_string()),
        TypeRef::Long | TypeRef::Short => numbered("value", index),
        TypeRef::Float | TypeRef::Double => numbered("number", index),
        TypeRef::Byte => numbered("b", index),
        TypeRef::Char => numbered("ch", index),
        TypeRef::Array(element) => {
            format!("{}Array", suggest_parameter_name(Some(element), 0))
        }
        TypeRef::Object(name) => suggest_object_name(name, index),
        TypeRef::Void => format!("param{index}"),
    }
}

fn suggest_object_name(name: &str, index: usize) -> String {
    const EXACT: &[(&str, &str)] = &[
        ("android.content.Context", "context"),
        ("android.content.Intent", "intent"),
        ("android.os.Bundle", "bundle"),
        ("android.view.View", "view"),
    ];
    const FRAMEWORK: &[(&str, &str)] = &[
        ("Activity", "activity"),
        ("Fragment", "fragment"),
        ("Handler", "handler"),
        ("Listener", "listener"),
        ("Callback", "callback"),
        ("Adapter", "adapter"),
        ("List", "list"),
        ("Map", "map"),
        ("Set", "set"),
        ("Collection", "collection"),
        ("Iterator", "iterator"),
    ];

    if name == "java.lang.String" {
        return STRING_NAMES
            .get(index)
            .map_or_else(|| format!("str{index}"), |n| (*n).to_string());
    }
    if let Some((_, suggestion)) = EXACT.iter().find(|(ty, _)| *ty == name) {
        return (*suggestion).to_string();
    }
    if let Some((_, suggestion)) = FRAMEWORK.iter().find(|(marker, _)| name.contains(marker)) {
        return (*suggestion).to_string();
    }

    match name {
        "java.lang.Object" => return "obj".to_string(),
        "java.lang.Class" => return "clazz".to_string(),
        "java.lang.Throwable" => return "exception".to_string(),
        "java.io.File" => return "file".to_string(),
        _ => {}
    }
    if name.contains("Exception") {
        return "exception".to_string();
    }
    if name.contains("InputStream") || name.contains("OutputStream") {
        return "stream".to_string();
    }
    if name.contains("Reader") || name.contains("Writer") {
        return "reader".to_string();
    }

    let start = name.rfind(['.', '$']).map_or(0, |pos| pos + 1);
    from_class_name(&name[start..], index)
}

/// Lower-cases the leading word of a class name (`UserProfile` → `user`).
fn from_class_name(class_name: &str, index: usize) -> String {
    let mut chars = class_name.chars();
    let Some(first) = chars.next() else {
        return format!("obj{index}");
    };

    let mut result: String = first.to_lowercase().collect();
    let mut last_was_upper = true;
    for c in chars {
        if result.chars().count() >= 12 {
            break;
        }
        if c.is_uppercase() {
            if !last_was_upper {
                break;
            }
            result.extend(c.to_lowercase());
            last_was_upper = true;
        } else {
            result.push(c);
            last_was_upper = false;
        }
    }

    numbered(&result, index)
}

/// Suggests names for every parameter of a method.
///
/// Duplicate suggestions get the smallest numeric suffix (from 2) that makes
/// them unique.
#[must_use]
pub fn suggest_parameter_names(method: &MethodSymbol) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    method
        .arg_types
        .iter()
        .enumerate()
        .map(|(idx, arg)| {
            let mut name = suggest_parameter_name(Some(arg), idx);
            if used.contains(&name) {
                let mut suffix = 2;
                while used.contains(&format!("{name}{suffix}")) {
                    suffix += 1;
                }
                name = format!("{name}{suffix}");
            }
            used.insert(name.clone());
            name
        })
        .collect()
}
