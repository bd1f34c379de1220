//! OData V2 system query options.
//!
//! ```rust
//! use sapsf_odata::QueryOptions;
//!
//! let pairs = QueryOptions::new()
//!     .select(&["userId", "username"])
//!     .top(5)
//!     .to_query_pairs();
//!
//! assert_eq!(pairs[0], ("$format".to_string(), "json".to_string()));
//! assert!(pairs.contains(&("$select".to_string(), "userId,username".to_string())));
//! ```

use sapsf_client::security::odata;
use sapsf_client::{Error, Result};

/// Builder for `$filter`, `$select`, `$expand`, `$orderby`, `$top` and `$skip`.
///
/// Only supplied options are emitted. The filter and order-by strings are opaque;
/// use [`filter_eq`](Self::filter_eq) when a filter embeds user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    filter: Option<String>,
    select: Vec<String>,
    expand: Vec<String>,
    order_by: Option<String>,
    top: Option<u32>,
    skip: Option<u32>,
}

impl QueryOptions {
    /// Create an empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a raw `$filter` expression.
    pub fn filter(mut self, expression: impl Into<String>) -> Self {
        self.filter = Some(expression.into());
        self
    }

    /// Set `$filter` to `<property> eq '<value>'` with the value escaped.
    ///
    /// Fails if the property is not a plain OData identifier.
    ///
    /// ```rust
    /// use sapsf_odata::QueryOptions;
    ///
    /// let options = QueryOptions::new().filter_eq("lastName", "O'Brien").unwrap();
    /// assert_eq!(options.filter_expression(), Some("lastName eq 'O''Brien'"));
    /// ```
    pub fn filter_eq(mut self, property: &str, value: &str) -> Result<Self> {
        if !odata::is_safe_identifier(property) {
            return Err(Error::usage(format!("invalid property name: {}", property)));
        }
        self.filter = Some(format!(
            "{} eq '{}'",
            property,
            odata::escape_string_literal(value)
        ));
        Ok(self)
    }

    /// Fields for `$select`, in order.
    pub fn select(mut self, fields: &[impl AsRef<str>]) -> Self {
        self.select = fields.iter().map(|f| f.as_ref().to_string()).collect();
        self
    }

    /// Navigation properties for `$expand`, in order.
    pub fn expand(mut self, properties: &[impl AsRef<str>]) -> Self {
        self.expand = properties.iter().map(|p| p.as_ref().to_string()).collect();
        self
    }

    /// Set `$orderby`, e.g. `"lastName asc"`.
    pub fn order_by(mut self, order: impl Into<String>) -> Self {
        self.order_by = Some(order.into());
        self
    }

    /// Set `$top`.
    pub fn top(mut self, n: u32) -> Self {
        self.top = Some(n);
        self
    }

    /// Set `$skip`.
    pub fn skip(mut self, n: u32) -> Self {
        self.skip = Some(n);
        self
    }

    /// The current `$filter` expression, if any.
    pub fn filter_expression(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Query pairs, `$format=json` first.
    ///
    /// Empty strings and lists are left out, as are `$top=0` and `$skip=0`.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("$format".to_string(), "json".to_string())];

        if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            pairs.push(("$filter".to_string(), filter.to_string()));
        }
        if !self.select.is_empty() {
            pairs.push(("$select".to_string(), self.select.join(",")));
        }
        if !self.expand.is_empty() {
            pairs.push(("$expand".to_string(), self.expand.join(",")));
        }
        if let Some(order) = self.order_by.as_deref().filter(|o| !o.is_empty()) {
            pairs.push(("$orderby".to_string(), order.to_string()));
        }
        if let Some(top) = self.top.filter(|n| *n > 0) {
            pairs.push(("$top".to_string(), top.to_string()));
        }
        if let Some(skip) = self.skip.filter(|n| *n > 0) {
            pairs.push(("$skip".to_string(), skip.to_string()));
        }

        pairs
    }
}
