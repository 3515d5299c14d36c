//! Per-field builders that classify and map one property.
//!
//! A [`PropertyNode`] is obtained from
//! [`ValidationContext::property`](crate::ValidationContext::property) with
//! the property's segment already on the path. It is first classified, then
//! mapped exactly once:
//!
//! | Classification | Value present | Value absent |
//! |---|---|---|
//! | [`required`](PropertyNode::required) | mapping runs, faults recorded | missing fault, `T::default()` |
//! | [`optional`](PropertyNode::optional) | mapping runs, faults recorded | `None`, no fault |
//! | [`with_default`](PropertyNode::with_default) | mapping runs, faults recorded | mapping runs on the default |
//!
//! Both steps consume the node, so a field can be neither classified twice
//! nor mapped twice. However the node ends, its path segment is popped.
//!
//! # Example
//!
//! ```rust
//! use faultline::{PropertyPath, ValidationContext};
//!
//! let mut path = PropertyPath::root();
//! let mut ctx = ValidationContext::new(&mut path);
//!
//! let quantity: u32 = ctx
//!     .property("quantity", Some("12"))
//!     .required()
//!     .map_with(|raw: &str| raw.parse::<u32>().unwrap_or(0));
//! let page_size: u32 = ctx.property("pageSize", None::<u32>).with_default(50).map();
//!
//! assert_eq!(quantity, 12);
//! assert_eq!(page_size, 50);
//! assert!(!ctx.has_failed());
//! ```

mod list;
mod mapping;
mod policy;

pub use policy::{
    Classification, Defaulted, Fallback, Optional, Required, Resolution, Unclassified,
};

use crate::error::Fault;
use crate::outcome::Outcome;
use crate::path::{PathScope, PropertyPath};
use crate::validation::record_fault;

/// The part of a validation context a node works on: the entered path
/// segment and the aggregate outcome.
pub(crate) struct FieldScope<'c> {
    path: PathScope<'c>,
    outcome: &'c mut Outcome,
}

impl<'c> FieldScope<'c> {
    pub(crate) fn new(path: PathScope<'c>, outcome: &'c mut Outcome) -> Self {
        Self { path, outcome }
    }

    /// Folds a field's own outcome into the aggregate.
    fn record<U>(&mut self, field: &Outcome<U>) {
        if let Ok(faults) = field.try_faults() {
            for fault in faults {
                record_fault(&mut *self.outcome, &self.path, fault.clone());
            }
        }
    }
}

/// A builder for one property of a parameter container.
///
/// `R` is the raw value's type and `S` the classification state. The node
/// owns the raw value, the resolved missing fault or default, and a borrow of
/// the run's path and aggregate outcome.
pub struct PropertyNode<'c, R, S = Unclassified> {
    scope: FieldScope<'c>,
    raw: Option<R>,
    state: S,
}

impl<'c, R, S> PropertyNode<'c, R, S> {
    /// Returns the path of this property.
    pub fn path(&self) -> &PropertyPath {
        &self.scope.path
    }

    /// Returns true if a raw value was supplied.
    pub fn is_present(&self) -> bool {
        self.raw.is_some()
    }

    fn with_state<N>(self, state: N) -> PropertyNode<'c, R, N> {
        PropertyNode {
            scope: self.scope,
            raw: self.raw,
            state,
        }
    }
}

impl<'c, R> PropertyNode<'c, R, Unclassified> {
    pub(crate) fn new(scope: FieldScope<'c>, raw: Option<R>) -> Self {
        Self {
            scope,
            raw,
            state: Unclassified,
        }
    }

    /// Treats a supplied value as absent when `is_absent` holds for it.
    ///
    /// ```rust
    /// use faultline::{PropertyPath, ValidationContext};
    ///
    /// let mut path = PropertyPath::root();
    /// let mut ctx = ValidationContext::new(&mut path);
    ///
    /// let name: String = ctx
    ///     .property("name", Some("   ".to_string()))
    ///     .absent_when(|s| s.trim().is_empty())
    ///     .required()
    ///     .map();
    ///
    /// assert_eq!(name, "");
    /// assert_eq!(ctx.outcome().codes(), vec!["NAME_MISSING"]);
    /// ```
    pub fn absent_when<F>(mut self, is_absent: F) -> Self
    where
        F: FnOnce(&R) -> bool,
    {
        if self.raw.as_ref().is_some_and(is_absent) {
            self.raw = None;
        }
        self
    }

    /// Requires the value, deriving the missing fault from the path.
    pub fn required(self) -> PropertyNode<'c, R, Required> {
        let missing = self.scope.path.missing_fault();
        self.with_state(Required { missing })
    }

    /// Requires the value, using `message` in the derived missing fault.
    pub fn required_with_message(
        self,
        message: impl Into<String>,
    ) -> PropertyNode<'c, R, Required> {
        let path = &self.scope.path;
        let missing = Fault::new(path.format().kind(), path.missing_code(), message);
        self.with_state(Required { missing })
    }

    /// Requires the value, recording `missing` when it is absent.
    pub fn required_or(self, missing: Fault) -> PropertyNode<'c, R, Required> {
        self.with_state(Required { missing })
    }

    /// Accepts an absent value without a fault.
    pub fn optional(self) -> PropertyNode<'c, R, Optional> {
        self.with_state(Optional)
    }

    /// Substitutes `default` for an absent value.
    pub fn with_default(self, default: R) -> PropertyNode<'c, R, Defaulted<R>> {
        self.with_state(Defaulted { default })
    }
}

impl<'c, R, S> PropertyNode<'c, R, S>
where
    S: Classification<R>,
{
    /// Resolves the raw value, runs `mapping` on it with the path extended by
    /// this property, and folds every fault into the aggregate.
    ///
    /// Returns `None` if the value was absent, missing, or failed to map.
    ///
    /// # Panics
    ///
    /// Panics if `mapping` returns an outcome with neither faults nor a value.
    fn evaluate<T, F>(self, mapping: F) -> Option<T>
    where
        F: FnOnce(R, &mut PropertyPath) -> Outcome<T>,
    {
        let PropertyNode {
            mut scope,
            raw,
            state,
        } = self;

        let mut field: Outcome<T> = Outcome::new();
        match state.resolve(raw) {
            Resolution::Present(value) => {
                let mapped = mapping(value, &mut scope.path);
                if mapped.has_failed() {
                    field.inherit_failure(&mapped);
                } else {
                    field.set_value(mapped.into_value());
                }
            }
            Resolution::Absent => {}
            Resolution::Missing(fault) => field.fail(fault),
        }

        scope.record(&field);
        field.try_into_value().ok()
    }
}
