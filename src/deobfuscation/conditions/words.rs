//! Preservation of dictionary and programming-vocabulary names.

use std::{collections::HashSet, sync::LazyLock};

use crate::{deobfuscation::conditions::Action, symbols::SymbolRef};

const METHOD_TERMS: &[&str] = &[
    "get", "set", "is", "has", "can", "add", "put", "remove", "clear", "size", "init", "start",
    "stop", "run", "call", "execute", "invoke", "apply", "read", "write", "load", "save", "open",
    "close", "create", "destroy", "show", "hide", "enable", "disable", "update", "refresh", "reset",
    "parse", "format", "convert", "encode", "decode", "encrypt", "decrypt", "send", "receive",
    "post", "fetch", "request", "response", "bind", "unbind", "attach", "detach", "connect",
    "disconnect", "register", "unregister", "subscribe", "unsubscribe", "validate", "verify",
    "check", "test", "compare", "equals", "copy", "clone", "merge", "split", "join", "concat",
    "find", "search", "filter", "sort", "reverse", "shuffle", "log", "debug", "info", "warn",
    "error", "trace",
];

const FIELD_TERMS: &[&str] = &[
    "id", "key", "value", "name", "type", "data", "text", "title", "label", "url", "uri", "path",
    "file", "dir", "root", "home", "base", "min", "max", "count", "total", "sum", "avg", "index",
    "offset", "length", "width", "height", "x", "y", "z", "top", "left", "right", "bottom", "red",
    "green", "blue", "alpha", "color", "font", "style", "enabled", "visible", "active", "valid",
    "ready", "done", "busy", "parent", "child", "next", "prev", "first", "last", "current",
    "input", "output", "source", "target", "origin", "dest", "user", "admin", "guest", "owner",
    "author", "creator", "time", "date", "year", "month", "day", "hour", "minute", "second", "tag",
    "flag", "mode", "state", "status", "code", "result", "list", "map", "array", "queue", "stack",
    "tree", "graph", "config", "setting", "option", "param", "arg",
];

const ANDROID_TERMS: &[&str] = &[
    "view", "layout", "widget", "button", "image", "icon", "drawable", "activity", "fragment",
    "service", "receiver", "provider", "intent", "bundle", "cursor", "adapter", "holder",
    "context", "app", "application", "system", "manager", "handler", "thread", "task", "job",
    "worker", "async", "listener", "callback", "observer", "event", "action", "menu", "item",
    "dialog", "toast", "snackbar", "popup", "recycler", "scroll", "pager", "tab", "toolbar", "fab",
    "notification", "alarm", "broadcast", "permission",
];

const CLASS_TERMS: &[&str] = &[
    "Activity", "Fragment", "Service", "Receiver", "Provider", "Adapter", "Holder", "Manager",
    "Helper", "Util", "Utils", "Factory", "Builder", "Parser", "Handler", "Listener", "Callback",
    "Impl", "Base", "Abstract", "Default", "Custom", "Simple", "Model", "Entity", "Bean", "Dto",
    "Vo", "Po", "Dao", "Repository", "Controller", "Presenter", "ViewModel", "Module",
    "Component", "Inject", "Scope", "Qualifier", "Test", "Mock", "Stub", "Fake", "Spy",
];

const SHORT_TERMS: &[&str] = &[
    "on", "do", "new", "old", "tmp", "temp", "obj", "ref", "ptr", "ctx", "msg", "cmd", "evt",
    "err", "ex", "e", "i", "j", "k", "n", "m", "sb", "db", "io", "ui", "rx", "tx",
];

const CAMEL_PREFIXES: &[&str] = &["get", "set", "is", "has", "can", "on", "do", "new"];

const FRAMEWORK_SUFFIXES: &[&str] = &[
    "Listener", "Callback", "Handler", "Adapter", "Helper", "Manager", "Factory", "Builder",
    "Impl", "Activity", "Fragment", "Service", "Receiver", "Provider", "View", "Layout", "Model",
];

static COMMON_TERMS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    [METHOD_TERMS, FIELD_TERMS, ANDROID_TERMS, CLASS_TERMS, SHORT_TERMS]
        .iter()
        .flat_map(|terms| terms.iter())
        .map(|term| term.to_lowercase())
        .collect()
});

/// Returns `true` if the name is a known programming term, ignoring case.
#[must_use]
pub fn is_common_term(name: &str) -> bool {
    !name.is_empty() && COMMON_TERMS.contains(&name.to_lowercase())
}

/// Returns `true` for `getX`/`onX`-style prefixes and framework suffixes.
///
/// Names shorter than four characters never qualify.
#[must_use]
pub fn contains_common_pattern(name: &str) -> bool {
    if name.chars().count() < 4 {
        return false;
    }

    let lower = name.to_lowercase();
    let camel_prefix = CAMEL_PREFIXES.iter().any(|prefix| {
        lower.starts_with(prefix)
            && name
                .get(prefix.len()..)
                .and_then(|rest| rest.chars().next())
                .is_some_and(char::is_uppercase)
    });
    if camel_prefix {
        return true;
    }

    FRAMEWORK_SUFFIXES
        .iter()
        .any(|suffix| name.len() > suffix.len() && name.ends_with(suffix))
}

/// Returns `true` if the name mixes cases with at least one case transition.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() < 3 {
        return false;
    }

    let has_lower = chars.iter().any(|c| c.is_lowercase());
    let has_upper = chars.iter().any(|c| c.is_uppercase());
    let has_transition = chars.windows(2).any(|pair| {
        (pair[0].is_uppercase() && pair[1].is_lowercase())
            || (pair[0].is_lowercase() && pair[1].is_uppercase())
    });

    has_lower && has_upper && has_transition
}

/// Forbids renaming names that read like real vocabulary.
///
/// Packages are checked against the term list only; classes additionally
/// against the prefix/suffix patterns and camel case; fields and methods
/// against terms and patterns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommonWordsCondition;

impl CommonWordsCondition {
    /// Evaluates the symbol.
    #[must_use]
    pub fn evaluate(&self, symbol: &SymbolRef<'_>) -> Action {
        let name = symbol.name();
        let meaningful = match symbol {
            SymbolRef::Package(_) => is_common_term(name),
            SymbolRef::Class(_) => {
                is_common_term(name) || contains_common_pattern(name) || is_camel_case(name)
            }
            SymbolRef::Field(..) | SymbolRef::Method(..) => {
                is_common_term(name) || contains_common_pattern(name)
            }
        };
        if meaningful {
            Action::ForbidRename
        } else {
            Action::NoAction
        }
    }
}
