//! Shared utility functions for code generation.

/// Convert a relative file path to a C++ include guard
/// (e.g., "bindings/core/v8/v8_typedefs.h" -> "BINDINGS_CORE_V8_V8_TYPEDEFS_H_")
pub fn to_header_guard(path: &str) -> String {
    let mut guard: String = path
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    guard.push('_');
    guard
}

/// Check that a name is UpperCamelCase (e.g., "BlobOrString", not "blob_or_string")
pub fn is_upper_camel_case(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}
