//! Naming utilities for code generation

use heck::ToUpperCamelCase;

/// Convert a class name to a table name (snake_case)
///
/// A separator goes before an uppercase letter that follows a lowercase
/// letter or digit (`userAccount`), and before the last letter of an
/// uppercase run when a lowercase letter follows (`HTTPServer`).
pub fn to_table_name(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    let mut table_name = String::with_capacity(identifier.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                table_name.push('_');
            }
        }
        table_name.extend(c.to_lowercase());
    }

    table_name
}

/// Lowercase a class name for use as a variable or path token
/// e.g., "UserAccount" -> "useraccount"
pub fn to_lower_name(class_name: &str) -> String {
    class_name.to_lowercase()
}

/// Capitalize a package segment into a type-name suffix
/// e.g., "mapper" -> "Mapper", "repo" -> "Repo"
pub fn to_type_suffix(segment: &str) -> String {
    segment.to_upper_camel_case()
}
