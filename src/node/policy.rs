//! Classification states of a property node.
//!
//! A node starts [`Unclassified`] and is moved into exactly one of
//! [`Required`], [`Optional`] or [`Defaulted`]. Each state decides what an
//! absent raw value means ([`Classification`]) and what a failed or missing
//! field yields to the caller ([`Fallback`]).

use crate::error::Fault;

/// The state of a node that has not been classified yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unclassified;

/// The state of a node whose value must be present.
#[derive(Debug, Clone)]
pub struct Required {
    pub(crate) missing: Fault,
}

impl Required {
    /// Returns the fault recorded when the value is absent.
    pub fn missing_fault(&self) -> &Fault {
        &self.missing
    }
}

/// The state of a node whose value may be absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Optional;

/// The state of a node that substitutes a default for an absent value.
#[derive(Debug, Clone)]
pub struct Defaulted<R> {
    pub(crate) default: R,
}

impl<R> Defaulted<R> {
    /// Returns the raw value used when none is supplied.
    pub fn default_value(&self) -> &R {
        &self.default
    }
}

/// What a classification makes of the raw value.
#[derive(Debug)]
pub enum Resolution<R> {
    /// A value to run the mapping on.
    Present(R),
    /// No value, and that is acceptable.
    Absent,
    /// No value, and the given fault must be recorded.
    Missing(Fault),
}

/// Decides how a classified node treats an absent raw value.
pub trait Classification<R> {
    /// Resolves the raw value into what the mapping should see.
    fn resolve(self, raw: Option<R>) -> Resolution<R>;
}

impl<R> Classification<R> for Required {
    fn resolve(self, raw: Option<R>) -> Resolution<R> {
        match raw {
            Some(value) => Resolution::Present(value),
            None => Resolution::Missing(self.missing),
        }
    }
}

impl<R> Classification<R> for Optional {
    fn resolve(self, raw: Option<R>) -> Resolution<R> {
        match raw {
            Some(value) => Resolution::Present(value),
            None => Resolution::Absent,
        }
    }
}

impl<R> Classification<R> for Defaulted<R> {
    fn resolve(self, raw: Option<R>) -> Resolution<R> {
        Resolution::Present(raw.unwrap_or(self.default))
    }
}

/// What a classified node hands back when its mapping yields no value.
///
/// Required and defaulted fields fall back to the target type's default;
/// optional fields report absence as `None`.
pub trait Fallback<T> {
    /// The type returned by the node's mapping methods.
    type Output;

    /// Turns a mapped value, or its absence, into the output.
    fn settle(value: Option<T>) -> Self::Output;
}

impl<T: Default> Fallback<T> for Required {
    type Output = T;

    fn settle(value: Option<T>) -> T {
        value.unwrap_or_default()
    }
}

impl<T> Fallback<T> for Optional {
    type Output = Option<T>;

    fn settle(value: Option<T>) -> Option<T> {
        value
    }
}

impl<R, T: Default> Fallback<T> for Defaulted<R> {
    type Output = T;

    fn settle(value: Option<T>) -> T {
        value.unwrap_or_default()
    }
}
