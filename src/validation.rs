//! Validation context and the validator entry point.
//!
//! This module provides the [`ValidationContext`] type that carries the
//! property path and the aggregate outcome through one validation run, and the
//! [`Validator`] trait that turns a parameter container into a typed value.

use std::any::type_name;

use tracing::debug;

use crate::error::Fault;
use crate::node::{FieldScope, PropertyNode};
use crate::outcome::Outcome;
use crate::path::PropertyPath;

/// Validation context for one run over one parameter container.
///
/// The context borrows the [`PropertyPath`] so nested validators can continue
/// on the path their parent has already extended, and owns the aggregate
/// [`Outcome`] every field folds its faults into. A context is created per
/// run and never shared.
///
/// # Example
///
/// ```rust
/// use faultline::{PropertyPath, ValidationContext};
///
/// let mut path = PropertyPath::root();
/// let mut ctx = ValidationContext::new(&mut path);
///
/// let name: String = ctx.property("name", None::<String>).required().map();
/// let nickname = ctx.property("nickname", Some("Al".to_string())).optional().map();
///
/// assert_eq!(name, "");
/// assert_eq!(nickname.as_deref(), Some("Al"));
///
/// let outcome = ctx.finish(());
/// assert_eq!(outcome.codes(), vec!["NAME_MISSING"]);
/// ```
pub struct ValidationContext<'p> {
    path: &'p mut PropertyPath,
    outcome: Outcome,
}

impl<'p> ValidationContext<'p> {
    /// Creates a context that continues on `path`.
    pub fn new(path: &'p mut PropertyPath) -> Self {
        Self {
            path,
            outcome: Outcome::ok(),
        }
    }

    /// Enters the property `name` holding `raw`.
    ///
    /// The property's segment stays on the path until the returned node has
    /// been mapped or dropped.
    pub fn property<R>(&mut self, name: impl Into<String>, raw: Option<R>) -> PropertyNode<'_, R> {
        PropertyNode::new(FieldScope::new(self.path.scope(name), &mut self.outcome), raw)
    }

    /// Enters the property `name`, reading its raw value from `params`.
    pub fn field<P, R, F>(
        &mut self,
        params: &P,
        name: impl Into<String>,
        accessor: F,
    ) -> PropertyNode<'_, R>
    where
        F: FnOnce(&P) -> Option<R>,
    {
        let raw = accessor(params);
        self.property(name, raw)
    }

    /// Returns the current path.
    pub fn path(&self) -> &PropertyPath {
        &*self.path
    }

    /// Returns the current path for manual scoping.
    pub fn path_mut(&mut self) -> &mut PropertyPath {
        &mut *self.path
    }

    /// Returns the aggregate outcome gathered so far.
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns true if any fault has been recorded.
    pub fn has_failed(&self) -> bool {
        self.outcome.has_failed()
    }

    /// Records one fault.
    pub fn fail(&mut self, fault: Fault) {
        record_fault(&mut self.outcome, &*self.path, fault);
    }

    /// Records `other`'s faults if it has failed.
    pub fn inherit_failure<U>(&mut self, other: &Outcome<U>) {
        if let Ok(faults) = other.try_faults() {
            for fault in faults {
                record_fault(&mut self.outcome, &*self.path, fault.clone());
            }
        }
    }

    /// Records the fault built by `fault` unless `condition` holds.
    ///
    /// Returns `condition`, so cross-field rules can be chained.
    pub fn check<F>(&mut self, condition: bool, fault: F) -> bool
    where
        F: FnOnce(&PropertyPath) -> Fault,
    {
        if !condition {
            let fault = fault(&*self.path);
            self.fail(fault);
        }
        condition
    }

    /// Ends the run: `value` if nothing failed, otherwise every fault.
    pub fn finish<T>(self, value: T) -> Outcome<T> {
        if self.outcome.has_failed() {
            self.outcome.failure_as()
        } else {
            Outcome::success(value)
        }
    }
}

pub(crate) fn record_fault(outcome: &mut Outcome, path: &PropertyPath, fault: Fault) {
    debug!(path = %path, code = fault.code(), kind = %fault.kind(), "fault recorded");
    outcome.fail(fault);
}

/// Converts one parameter container into a typed value.
///
/// Implementors describe each field in [`Validator::configure`]; the provided
/// methods run it with a fresh context and discard the built value if any
/// field failed.
///
/// ```rust
/// use faultline::{Fault, Outcome, ValidationContext, Validator};
///
/// struct RenameParams {
///     name: Option<String>,
/// }
///
/// struct RenameValidator;
///
/// impl Validator for RenameValidator {
///     type Params = RenameParams;
///     type Output = String;
///
///     fn configure(&self, params: &RenameParams, ctx: &mut ValidationContext<'_>) -> String {
///         ctx.field(params, "name", |p| p.name.clone())
///             .required()
///             .map_try(|name| {
///                 if name.len() > 3 {
///                     Outcome::success(name)
///                 } else {
///                     Outcome::from(Fault::validation("NAME_TOO_SHORT", "name is too short"))
///                 }
///             })
///     }
/// }
///
/// let outcome = RenameValidator.validate(&RenameParams { name: Some("Ada".into()) });
/// assert_eq!(outcome.codes(), vec!["NAME_TOO_SHORT"]);
/// ```
pub trait Validator {
    /// The raw parameter container.
    type Params;
    /// The value built from valid parameters.
    type Output;

    /// Visits every field of `params`, recording faults into `ctx`.
    ///
    /// Failed fields contribute their fallback value, so an output can always
    /// be assembled; it is discarded when the run has failed.
    fn configure(&self, params: &Self::Params, ctx: &mut ValidationContext<'_>) -> Self::Output;

    /// Validates `params` from the root path.
    fn validate(&self, params: &Self::Params) -> Outcome<Self::Output> {
        let mut path = PropertyPath::root();
        self.validate_at(params, &mut path)
    }

    /// Validates `params` continuing on `path`, as nested validators do.
    fn validate_at(&self, params: &Self::Params, path: &mut PropertyPath) -> Outcome<Self::Output> {
        let span = tracing::debug_span!(
            "validate",
            validator = type_name::<Self>(),
            path = %path.current()
        );
        let _entered = span.enter();

        let mut ctx = ValidationContext::new(path);
        let output = self.configure(params, &mut ctx);
        let outcome = ctx.finish(output);
        debug!(faults = outcome.fault_count(), "validation finished");
        outcome
    }
}
