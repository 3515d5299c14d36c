//! Fault types for validation failures.
//!
//! This module provides [`Fault`] for a single violation, [`Faults`] for a
//! non-empty collection of them, and [`Severity`] for classifying how many and
//! which kinds of faults were gathered.

use std::fmt::{self, Display};

use stillwater::prelude::*;

/// The classification of a fault.
///
/// Kinds are flat: no kind refines another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultKind {
    /// The request conflicts with existing state.
    Conflict,
    /// A referenced entity does not exist.
    NotFound,
    /// The input itself is malformed or missing.
    Validation,
    /// The caller may not perform the request.
    Forbidden,
}

impl Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultKind::Conflict => "conflict",
            FaultKind::NotFound => "not found",
            FaultKind::Validation => "validation",
            FaultKind::Forbidden => "forbidden",
        };
        f.write_str(name)
    }
}

/// A single recorded violation.
///
/// Faults are immutable values compared by kind, code and message.
///
/// # Example
///
/// ```rust
/// use faultline::{Fault, FaultKind};
///
/// let fault = Fault::validation("CUSTOMER_NAME_MISSING", "customer.name is required.");
///
/// assert_eq!(fault.kind(), FaultKind::Validation);
/// assert_eq!(fault.code(), "CUSTOMER_NAME_MISSING");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fault {
    kind: FaultKind,
    code: String,
    message: String,
}

impl Fault {
    /// Creates a fault of the given kind.
    pub fn new(kind: FaultKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a [`FaultKind::Conflict`] fault.
    pub fn conflict(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FaultKind::Conflict, code, message)
    }

    /// Creates a [`FaultKind::NotFound`] fault.
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FaultKind::NotFound, code, message)
    }

    /// Creates a [`FaultKind::Validation`] fault.
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FaultKind::Validation, code, message)
    }

    /// Creates a [`FaultKind::Forbidden`] fault.
    pub fn forbidden(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(FaultKind::Forbidden, code, message)
    }

    /// Returns the fault's classification.
    pub fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Returns the machine-readable code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for Fault {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Fault>();
    assert_sync::<Fault>();
};

/// How many faults an outcome holds, and whether their kinds agree.
///
/// Severity is always derived from a fault list, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// No faults.
    None,
    /// Exactly one fault.
    One,
    /// Two or more faults, all of the same kind.
    Many,
    /// Two or more faults of mixed kinds.
    ManyDifferent,
}

impl Severity {
    /// Classifies a fault list.
    pub fn of(faults: &[Fault]) -> Self {
        Self::classify(faults.iter())
    }

    fn classify<'a>(mut faults: impl Iterator<Item = &'a Fault>) -> Self {
        let Some(first) = faults.next() else {
            return Severity::None;
        };
        let mut count = 1;
        let mut mixed = false;
        for fault in faults {
            count += 1;
            mixed |= fault.kind != first.kind;
        }
        match (count, mixed) {
            (1, _) => Severity::One,
            (_, false) => Severity::Many,
            (_, true) => Severity::ManyDifferent,
        }
    }
}

/// A non-empty collection of faults.
///
/// `Faults` wraps a `NonEmptyVec<Fault>` so a failure can never be built
/// without at least one fault. It implements `Semigroup`, which lets it act
/// as the error side of a `stillwater::Validation`.
///
/// ```rust
/// use faultline::{Fault, Faults};
/// use stillwater::prelude::*;
///
/// let name = Faults::single(Fault::validation("NAME_MISSING", "name is required."));
/// let email = Faults::single(Fault::validation("EMAIL_INVALID", "email is invalid."));
///
/// let combined = name.combine(email);
/// assert_eq!(combined.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Faults(NonEmptyVec<Fault>);

impl Faults {
    /// Creates a collection holding a single fault.
    pub fn single(fault: Fault) -> Self {
        Self(NonEmptyVec::singleton(fault))
    }

    /// Creates a collection from a vec, or `None` if the vec is empty.
    pub fn from_vec(faults: Vec<Fault>) -> Option<Self> {
        NonEmptyVec::from_vec(faults).map(Self)
    }

    /// Returns the number of faults.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first fault.
    pub fn first(&self) -> &Fault {
        self.0.head()
    }

    /// Returns an iterator over the faults in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Fault> {
        self.0.iter()
    }

    /// Returns all faults with the given code.
    pub fn with_code(&self, code: &str) -> Vec<&Fault> {
        self.0.iter().filter(|f| f.code == code).collect()
    }

    /// Returns all faults of the given kind.
    pub fn of_kind(&self, kind: FaultKind) -> Vec<&Fault> {
        self.0.iter().filter(|f| f.kind == kind).collect()
    }

    /// Derives the severity of this collection.
    pub fn severity(&self) -> Severity {
        Severity::classify(self.0.iter())
    }

    /// Converts this collection into a `Vec<Fault>`.
    pub fn into_vec(self) -> Vec<Fault> {
        self.0.into_vec()
    }
}

impl From<Fault> for Faults {
    fn from(fault: Fault) -> Self {
        Self::single(fault)
    }
}

impl Semigroup for Faults {
    fn combine(self, other: Self) -> Self {
        Faults(self.0.combine(other.0))
    }
}

impl Display for Faults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} fault(s):", self.len())?;
        for (i, fault) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, fault)?;
        }
        Ok(())
    }
}

impl std::error::Error for Faults {}

impl IntoIterator for Faults {
    type Item = Fault;
    type IntoIter = std::vec::IntoIter<Fault>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Faults>();
    assert_sync::<Faults>();
};
