//! Validation context and utilities for schema parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// The source is shared across nested contexts; `push` only extends the path
/// used to describe where in the schema a name was found.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "typedefs.toml");
/// ctx.validate_name("BodyInit", "typedef")?;
///
/// let nested = ctx.push("typedefs").push("BodyInit");
/// nested.validate_member_name("Blob")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["typedefs", "BodyInit"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "member type in 'typedefs.BodyInit'" or just "typedef".
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a table key in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.src(), name)
    }

    /// Find the span of a quoted string value in the source.
    pub fn find_value_span(&self, value: &str) -> Option<SourceSpan> {
        find_quoted_span(self.src(), value)
    }

    /// Validate that a name is usable as a C++ identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        let span = self.find_span(name).or_else(|| self.find_value_span(name));

        if is_cpp_keyword(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self
                .source
                .invalid_identifier_error(name, self.context_for(kind), reason, span));
        }

        Ok(())
    }

    /// Validate a union member type name.
    ///
    /// Member names are spelling pieces and opaque type names, never declared
    /// on their own, so keyword spellings such as `long` are accepted.
    pub fn validate_member_name(&self, name: &str) -> Result<()> {
        if let Some(reason) = identifier_shape(name) {
            let span = self.find_value_span(name);
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for("member type"),
                reason,
                span,
            ));
        }
        Ok(())
    }
}

/// C++ keywords and alternative tokens that cannot name a type
/// Source: https://en.cppreference.com/w/cpp/keyword
pub(crate) const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break",
    "case", "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept",
    "const", "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await",
    "co_return", "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast",
    "else", "enum", "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
    "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq",
    "nullptr", "operator", "or", "or_eq", "private", "protected", "public", "register",
    "reinterpret_cast", "requires", "return", "short", "signed", "sizeof", "static",
    "static_assert", "static_cast", "struct", "switch", "template", "this", "thread_local",
    "throw", "true", "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
    "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
];

/// Check if a name is a C++ reserved keyword
pub(crate) fn is_cpp_keyword(name: &str) -> bool {
    CPP_KEYWORDS.contains(&name)
}

/// Find the span of a name in the TOML source
/// Searches for patterns like `.name]`, `.name.`, or `.name =`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    let patterns = [
        format!(".{}]", name), // [typedefs.Name]
        format!(".{}.", name), // [typedefs.Name.something]
        format!(".{} ", name), // dotted key: typedefs.Name = { ... }
        format!(".{}=", name),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    None
}

/// Find the span of a `"value"` string in the TOML source, quotes excluded
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    let quoted = format!("\"{}\"", value);
    src.find(&quoted)
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
        .or_else(|| src.find(value).map(|pos| SourceSpan::from((pos, value.len()))))
}

/// Validate that a name is a valid C++ identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    if is_cpp_keyword(name) {
        return Some("name is a C++ reserved keyword");
    }
    identifier_shape(name)
}

/// Character-level identifier rules, keywords allowed.
fn identifier_shape(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
        None => return Some("name cannot be empty"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    // Reserved for the implementation in any scope
    if name.contains("__") || (name.starts_with('_') && name[1..].starts_with(char::is_uppercase))
    {
        return Some("names with a double underscore or a leading underscore and capital are reserved");
    }

    None
}
