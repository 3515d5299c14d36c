//! Combinators that build one value from several raw parameters.
//!
//! An [`Attribute`] names one raw parameter. A tuple of attributes forms an
//! [`AttributeSet`], which the `*_attributes` methods on
//! [`ValidationContext`] combine in a single step:
//!
//! - `required_*` variants check every attribute and record one missing
//!   fault per absent attribute before giving up;
//! - `optional_*` variants quietly yield `None` if any attribute is absent;
//! - `*_try` variants fold a failing combining factory into the aggregate.
//!
//! # Example
//!
//! ```rust
//! use faultline::{Attribute, PropertyPath, ValidationContext};
//!
//! let mut path = PropertyPath::root();
//! let mut ctx = ValidationContext::new(&mut path);
//!
//! let range = ctx.required_attributes(
//!     (
//!         Attribute::new("from", None::<u32>),
//!         Attribute::new("to", None::<u32>),
//!     ),
//!     |(from, to)| from..to,
//! );
//!
//! assert!(range.is_none());
//! assert_eq!(ctx.outcome().codes(), vec!["FROM_MISSING", "TO_MISSING"]);
//! ```

use crate::error::Fault;
use crate::outcome::Outcome;
use crate::path::PropertyPath;
use crate::validation::ValidationContext;

/// One named raw parameter taking part in a combination.
#[derive(Debug, Clone)]
pub struct Attribute<A> {
    name: String,
    value: Option<A>,
    missing: Option<Fault>,
}

impl<A> Attribute<A> {
    /// Creates an attribute; its missing fault is derived from the path.
    pub fn new(name: impl Into<String>, value: Option<A>) -> Self {
        Self {
            name: name.into(),
            value,
            missing: None,
        }
    }

    /// Uses `fault` instead of the derived missing fault.
    pub fn or_fault(mut self, fault: Fault) -> Self {
        self.missing = Some(fault);
        self
    }

    /// Returns the attribute's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value, or pushes this attribute's missing fault.
    fn require(self, path: &mut PropertyPath, missing: &mut Vec<Fault>) -> Option<A> {
        if self.value.is_none() {
            let fault = match self.missing {
                Some(fault) => fault,
                None => path.scope(self.name).missing_fault(),
            };
            missing.push(fault);
            return None;
        }
        self.value
    }
}

/// A fixed group of attributes combined into one value.
///
/// Implemented for tuples of one to four [`Attribute`]s.
pub trait AttributeSet {
    /// The tuple of raw values handed to the combining function.
    type Values;

    /// Returns every value, or one missing fault per absent attribute.
    fn require(self, path: &mut PropertyPath) -> Result<Self::Values, Vec<Fault>>;

    /// Returns every value, or `None` if any attribute is absent.
    fn present(self) -> Option<Self::Values>;
}

macro_rules! attribute_set {
    ($($ty:ident => $var:ident),+) => {
        impl<$($ty),+> AttributeSet for ($(Attribute<$ty>,)+) {
            type Values = ($($ty,)+);

            fn require(self, path: &mut PropertyPath) -> Result<Self::Values, Vec<Fault>> {
                let ($($var,)+) = self;
                let mut missing = Vec::new();
                $(let $var = $var.require(path, &mut missing);)+
                match ($($var,)+) {
                    ($(Some($var),)+) => Ok(($($var,)+)),
                    _ => Err(missing),
                }
            }

            fn present(self) -> Option<Self::Values> {
                let ($($var,)+) = self;
                Some(($($var.value?,)+))
            }
        }
    };
}

attribute_set!(A => a);
attribute_set!(A => a, B => b);
attribute_set!(A => a, B => b, C => c);
attribute_set!(A => a, B => b, C => c, D => d);

impl ValidationContext<'_> {
    /// Combines attributes that must all be present.
    ///
    /// Every absent attribute records its own missing fault; `combine` runs
    /// only if none is absent.
    pub fn required_attributes<S, T, F>(&mut self, attributes: S, combine: F) -> Option<T>
    where
        S: AttributeSet,
        F: FnOnce(S::Values) -> T,
    {
        self.required_attributes_try(attributes, |values| Outcome::success(combine(values)))
    }

    /// Combines attributes that must all be present with a factory that may fail.
    ///
    /// # Panics
    ///
    /// Panics if `combine` returns an outcome with neither faults nor a value.
    pub fn required_attributes_try<S, T, F>(&mut self, attributes: S, combine: F) -> Option<T>
    where
        S: AttributeSet,
        F: FnOnce(S::Values) -> Outcome<T>,
    {
        match attributes.require(self.path_mut()) {
            Ok(values) => self.settle(combine(values)),
            Err(missing) => {
                for fault in missing {
                    self.fail(fault);
                }
                None
            }
        }
    }

    /// Combines attributes if all are present; otherwise yields `None`.
    pub fn optional_attributes<S, T, F>(&mut self, attributes: S, combine: F) -> Option<T>
    where
        S: AttributeSet,
        F: FnOnce(S::Values) -> T,
    {
        attributes.present().map(combine)
    }

    /// Combines attributes if all are present, with a factory that may fail.
    pub fn optional_attributes_try<S, T, F>(&mut self, attributes: S, combine: F) -> Option<T>
    where
        S: AttributeSet,
        F: FnOnce(S::Values) -> Outcome<T>,
    {
        let values = attributes.present()?;
        self.settle(combine(values))
    }

    fn settle<T>(&mut self, outcome: Outcome<T>) -> Option<T> {
        if outcome.has_failed() {
            self.inherit_failure(&outcome);
            None
        } else {
            Some(outcome.into_value())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_attribute_tuple() {
        let mut path = PropertyPath::root();
        let mut ctx = ValidationContext::new(&mut path);
        let doubled = ctx.required_attributes((Attribute::new("n", Some(4)),), |(n,)| n * 2);
        assert_eq!(doubled, Some(8));
    }

    #[test]
    fn test_or_fault_overrides_derived_fault() {
        let mut path = PropertyPath::root();
        let mut ctx = ValidationContext::new(&mut path);
        let custom = Fault::not_found("CURRENCY_UNKNOWN", "currency not supplied");
        let _ = ctx.required_attributes(
            (
                Attribute::new("amount", Some(10)),
                Attribute::new("currency", None::<&str>).or_fault(custom.clone()),
            ),
            |(amount, currency)| format!("{amount} {currency}"),
        );
        assert_eq!(ctx.outcome().faults(), &[custom]);
    }

    #[test]
    fn test_missing_attribute_code_includes_parent_path() {
        let mut path = PropertyPath::root();
        path.push_property("period");
        let mut ctx = ValidationContext::new(&mut path);
        let _ = ctx.required_attributes(
            (
                Attribute::new("start", Some(1)),
                Attribute::new("end", None::<i32>),
                Attribute::new("zone", None::<String>),
            ),
            |(start, end, zone)| (start, end, zone),
        );
        assert_eq!(
            ctx.outcome().codes(),
            vec!["PERIOD_END_MISSING", "PERIOD_ZONE_MISSING"]
        );
        assert_eq!(ctx.path().current(), "period");
    }

    #[test]
    fn test_optional_attributes_short_circuit() {
        let mut path = PropertyPath::root();
        let mut ctx = ValidationContext::new(&mut path);
        let mut called = false;
        let result = ctx.optional_attributes(
            (Attribute::new("a", Some(1)), Attribute::new("b", None::<i32>)),
            |(a, b)| {
                called = true;
                a + b
            },
        );
        assert_eq!(result, None);
        assert!(!called);
        assert!(!ctx.has_failed());
    }

    #[test]
    #[should_panic(expected = "has not been set")]
    fn test_factory_without_value_or_faults_panics() {
        let mut path = PropertyPath::root();
        let mut ctx = ValidationContext::new(&mut path);
        let _ = ctx.required_attributes_try(
            (Attribute::new("a", Some(1)), Attribute::new("b", Some(2))),
            |_| Outcome::<i32>::new(),
        );
    }

    #[test]
    fn test_four_attributes() {
        let mut path = PropertyPath::root();
        let mut ctx = ValidationContext::new(&mut path);
        let sum = ctx.optional_attributes(
            (
                Attribute::new("a", Some(1)),
                Attribute::new("b", Some(2)),
                Attribute::new("c", Some(3)),
                Attribute::new("d", Some(4)),
            ),
            |(a, b, c, d)| a + b + c + d,
        );
        assert_eq!(sum, Some(10));
    }
}
