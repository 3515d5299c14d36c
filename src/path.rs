//! Property path tracking for hierarchical fault codes.
//!
//! This module provides [`PropertyPath`], a stack of [`PathSegment`]s that a
//! validator pushes onto while it visits each field, and [`PathScope`], the
//! guard that pops the segment again however the visit ends.

use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};

use crate::error::{Fault, FaultKind};

/// A segment of a property path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// A named property (e.g. `customer`, `email`).
    Property(String),
    /// An element of a list-valued property (e.g. `lines[2]`).
    ListItem {
        /// The list property's name.
        name: String,
        /// The element's position.
        index: usize,
    },
}

impl PathSegment {
    /// Creates a property segment.
    pub fn property(name: impl Into<String>) -> Self {
        PathSegment::Property(name.into())
    }

    /// Creates a list item segment.
    pub fn list_item(index: usize, name: impl Into<String>) -> Self {
        PathSegment::ListItem {
            name: name.into(),
            index,
        }
    }

    /// Returns the property name this segment refers to.
    pub fn name(&self) -> &str {
        match self {
            PathSegment::Property(name) => name,
            PathSegment::ListItem { name, .. } => name,
        }
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Property(name) => write!(f, "{}", name),
            PathSegment::ListItem { name, index } => write!(f, "{}[{}]", name, index),
        }
    }
}

/// Controls how a missing-value fault is derived from a path.
///
/// # Example
///
/// ```rust
/// use faultline::{FaultKind, MissingFaultFormat, PropertyPath};
///
/// let format = MissingFaultFormat::default()
///     .with_code_separator(".")
///     .with_code_suffix("REQUIRED")
///     .with_kind(FaultKind::NotFound);
///
/// let mut path = PropertyPath::with_format(format);
/// path.push_property("customerId");
///
/// assert_eq!(path.missing_code(), "CUSTOMER.ID.REQUIRED");
/// assert_eq!(path.missing_fault().kind(), FaultKind::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFaultFormat {
    code_separator: String,
    code_suffix: String,
    message_suffix: String,
    kind: FaultKind,
}

impl MissingFaultFormat {
    /// Sets the separator placed between code words.
    pub fn with_code_separator(mut self, separator: impl Into<String>) -> Self {
        self.code_separator = separator.into();
        self
    }

    /// Sets the word appended to every derived code.
    pub fn with_code_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.code_suffix = suffix.into();
        self
    }

    /// Sets the text following the dotted path in derived messages.
    pub fn with_message_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.message_suffix = suffix.into();
        self
    }

    /// Sets the kind of derived faults.
    pub fn with_kind(mut self, kind: FaultKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns the kind of derived faults.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    fn code_words(&self, text: &str, words: &mut Vec<String>) {
        let mut word = String::new();
        let mut prev_lower = false;
        for c in text.chars() {
            if !c.is_alphanumeric() {
                if !word.is_empty() {
                    words.push(std::mem::take(&mut word));
                }
                prev_lower = false;
                continue;
            }
            if c.is_uppercase() && prev_lower && !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            prev_lower = c.is_lowercase() || c.is_numeric();
            word.extend(c.to_uppercase());
        }
        if !word.is_empty() {
            words.push(word);
        }
    }
}

impl Default for MissingFaultFormat {
    fn default() -> Self {
        Self {
            code_separator: "_".to_string(),
            code_suffix: "MISSING".to_string(),
            message_suffix: "is required.".to_string(),
            kind: FaultKind::Validation,
        }
    }
}

/// The path of the property currently being validated.
///
/// Segments are pushed when a validator enters a property and popped when it
/// leaves. Prefer [`PropertyPath::scope`] over the raw push/pop pair: the
/// returned guard pops on drop, so an early return cannot leave a stale
/// segment behind for the next sibling field.
///
/// # Example
///
/// ```rust
/// use faultline::PropertyPath;
///
/// let mut path = PropertyPath::root();
/// {
///     let mut order = path.scope("order");
///     let mut lines = order.scope("lines");
///     let item = lines.scope_item(2);
///     assert_eq!(item.current(), "order.lines[2]");
///     assert_eq!(item.missing_code(), "ORDER_LINES_2_MISSING");
/// }
/// assert!(path.is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PropertyPath {
    segments: Vec<PathSegment>,
    format: MissingFaultFormat,
}

impl PropertyPath {
    /// Creates an empty path using the default missing-fault format.
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates an empty path using the given missing-fault format.
    pub fn with_format(format: MissingFaultFormat) -> Self {
        Self {
            segments: Vec::new(),
            format,
        }
    }

    /// Returns the missing-fault format in use.
    pub fn format(&self) -> &MissingFaultFormat {
        &self.format
    }

    /// Appends a property segment.
    pub fn push_property(&mut self, name: impl Into<String>) {
        self.segments.push(PathSegment::property(name));
    }

    /// Appends a list item segment.
    pub fn push_list_item(&mut self, index: usize, name: impl Into<String>) {
        self.segments.push(PathSegment::list_item(index, name));
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Enters a property; the returned guard leaves it on drop.
    pub fn scope(&mut self, name: impl Into<String>) -> PathScope<'_> {
        let depth = self.segments.len();
        self.push_property(name);
        PathScope {
            path: self,
            depth,
            restore: None,
        }
    }

    /// Enters element `index` of the list property at the top of the path.
    ///
    /// The top segment `lines` is replaced by `lines[index]` for the life of
    /// the guard and restored on drop.
    pub fn scope_item(&mut self, index: usize) -> PathScope<'_> {
        let restore = self.segments.pop();
        let depth = self.segments.len();
        let name = restore
            .as_ref()
            .map(|segment| segment.name().to_string())
            .unwrap_or_default();
        self.push_list_item(index, name);
        PathScope {
            path: self,
            depth,
            restore,
        }
    }

    /// Returns the dotted form of the current path.
    pub fn current(&self) -> String {
        self.to_string()
    }

    /// Returns the number of segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns true if no segment has been pushed.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns an iterator over the segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Returns the last segment, or None at the root.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Derives the code of the fault reported when the current property is missing.
    pub fn missing_code(&self) -> String {
        let mut words = Vec::new();
        for segment in &self.segments {
            match segment {
                PathSegment::Property(name) => self.format.code_words(name, &mut words),
                PathSegment::ListItem { name, index } => {
                    self.format.code_words(name, &mut words);
                    words.push(index.to_string());
                }
            }
        }
        if !self.format.code_suffix.is_empty() {
            words.push(self.format.code_suffix.clone());
        }
        words.join(&self.format.code_separator)
    }

    /// Derives the message of the fault reported when the current property is missing.
    pub fn missing_message(&self) -> String {
        if self.is_root() {
            format!("value {}", self.format.message_suffix)
        } else {
            format!("{} {}", self, self.format.message_suffix)
        }
    }

    /// Derives the fault reported when the current property is missing.
    pub fn missing_fault(&self) -> Fault {
        Fault::new(self.format.kind, self.missing_code(), self.missing_message())
    }
}

impl Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

/// A guard for one entered path segment.
///
/// Dereferences to the underlying [`PropertyPath`], so nested scopes can be
/// opened through it. Dropping the guard restores the path to what it was
/// before the scope was opened.
#[derive(Debug)]
pub struct PathScope<'a> {
    path: &'a mut PropertyPath,
    depth: usize,
    restore: Option<PathSegment>,
}

impl Deref for PathScope<'_> {
    type Target = PropertyPath;

    fn deref(&self) -> &PropertyPath {
        self.path
    }
}

impl DerefMut for PathScope<'_> {
    fn deref_mut(&mut self) -> &mut PropertyPath {
        self.path
    }
}

impl Drop for PathScope<'_> {
    fn drop(&mut self) {
        self.path.segments.truncate(self.depth);
        if let Some(segment) = self.restore.take() {
            self.path.segments.push(segment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path_is_empty() {
        let path = PropertyPath::root();
        assert!(path.is_root());
        assert_eq!(path.depth(), 0);
        assert_eq!(path.current(), "");
        assert_eq!(path.missing_code(), "MISSING");
        assert_eq!(path.missing_message(), "value is required.");
    }

    #[test]
    fn test_push_and_pop() {
        let mut path = PropertyPath::root();
        path.push_property("customer");
        path.push_property("email");
        assert_eq!(path.current(), "customer.email");

        assert_eq!(path.pop(), Some(PathSegment::property("email")));
        assert_eq!(path.current(), "customer");
        path.pop();
        assert_eq!(path.pop(), None);
    }

    #[test]
    fn test_push_list_item() {
        let mut path = PropertyPath::root();
        path.push_property("order");
        path.push_list_item(3, "lines");
        path.push_property("quantity");
        assert_eq!(path.current(), "order.lines[3].quantity");
        assert_eq!(path.missing_code(), "ORDER_LINES_3_QUANTITY_MISSING");
    }

    #[test]
    fn test_scope_pops_on_drop() {
        let mut path = PropertyPath::root();
        {
            let scope = path.scope("name");
            assert_eq!(scope.current(), "name");
        }
        assert!(path.is_root());
    }

    #[test]
    fn test_scope_restores_after_manual_push_inside() {
        let mut path = PropertyPath::root();
        {
            let mut scope = path.scope("a");
            scope.push_property("leaked");
            scope.push_property("twice");
        }
        assert!(path.is_root());
    }

    #[test]
    fn test_scope_item_restores_property_segment() {
        let mut path = PropertyPath::root();
        let mut lines = path.scope("lines");
        {
            let item = lines.scope_item(0);
            assert_eq!(item.current(), "lines[0]");
        }
        assert_eq!(lines.current(), "lines");
        {
            let item = lines.scope_item(1);
            assert_eq!(item.current(), "lines[1]");
        }
        assert_eq!(lines.last(), Some(&PathSegment::property("lines")));
    }

    #[test]
    fn test_scope_item_at_root() {
        let mut path = PropertyPath::root();
        {
            let item = path.scope_item(4);
            assert_eq!(item.current(), "[4]");
        }
        assert!(path.is_root());
    }

    #[test]
    fn test_missing_code_splits_camel_case() {
        let mut path = PropertyPath::root();
        path.push_property("billingAddress");
        path.push_property("PostalCode");
        assert_eq!(path.missing_code(), "BILLING_ADDRESS_POSTAL_CODE_MISSING");
        assert_eq!(
            path.missing_message(),
            "billingAddress.PostalCode is required."
        );
    }

    #[test]
    fn test_missing_fault_uses_format() {
        let format = MissingFaultFormat::default()
            .with_code_suffix("")
            .with_message_suffix("must be provided")
            .with_kind(FaultKind::Conflict);
        let mut path = PropertyPath::with_format(format);
        path.push_property("name");

        let fault = path.missing_fault();
        assert_eq!(fault.kind(), FaultKind::Conflict);
        assert_eq!(fault.code(), "NAME");
        assert_eq!(fault.message(), "name must be provided");
    }
}
