//! Security utilities for OData V2 request building.
//!
//! User-provided values end up in two places: entity key literals inside a
//! resource path (`User('<id>')`) and `$filter` expressions. Both MUST go
//! through the helpers in this module.
//!
//! ## Key predicates
//!
//! ```rust
//! use sapsf_client::security::odata;
//!
//! // CORRECT - validated and percent-encoded
//! let path = odata::key_predicate_path("User", "cgrant");
//! assert_eq!(path.as_deref(), Some("User('cgrant')"));
//!
//! // A quote would terminate the literal early, so it is refused
//! assert_eq!(odata::key_predicate_path("User", "x') or ('1"), None);
//! ```
//!
//! ## Filter literals
//!
//! ```rust
//! use sapsf_client::security::odata;
//!
//! let name = odata::escape_string_literal("O'Brien");
//! let filter = format!("lastName eq '{}'", name);
//! assert_eq!(filter, "lastName eq 'O''Brien'");
//! ```

/// OData literal and identifier utilities.
pub mod odata {
    /// Escape a value for use inside a single-quoted OData string literal.
    ///
    /// OData escapes a single quote by doubling it.
    #[must_use]
    pub fn escape_string_literal(value: &str) -> String {
        value.replace('\'', "''")
    }

    /// Validate an entity set or property identifier.
    ///
    /// Identifiers start with a letter or underscore and continue with
    /// letters, digits or underscores.
    ///
    /// ```rust
    /// use sapsf_client::security::odata;
    ///
    /// assert!(odata::is_safe_identifier("User"));
    /// assert!(odata::is_safe_identifier("PerPersonal"));
    /// assert!(!odata::is_safe_identifier("User('x')"));
    /// ```
    #[must_use]
    pub fn is_safe_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
            _ => return false,
        }
        chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    }

    /// Check that a key value can be placed inside `'...'` without escaping it.
    ///
    /// Rejects empty keys, single quotes and control characters.
    #[must_use]
    pub fn is_safe_key_literal(key: &str) -> bool {
        !key.is_empty() && !key.chars().any(|ch| ch == '\'' || ch.is_control())
    }

    /// Build an entity path addressing one record: `EntitySet('<key>')`.
    ///
    /// The key is percent-encoded. Returns `None` if the entity set is not a
    /// valid identifier or the key fails [`is_safe_key_literal`].
    #[must_use]
    pub fn key_predicate_path(entity_set: &str, key: &str) -> Option<String> {
        if !is_safe_identifier(entity_set) || !is_safe_key_literal(key) {
            return None;
        }
        Some(format!(
            "{}('{}')",
            entity_set,
            super::url::encode_param(key)
        ))
    }
}

/// URL encoding utilities for parameter safety.
pub mod url {
    /// URL-encode a parameter value.
    ///
    /// ```rust
    /// use sapsf_client::security::url;
    ///
    /// assert_eq!(url::encode_param("a/../b"), "a%2F..%2Fb");
    /// ```
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }
}
