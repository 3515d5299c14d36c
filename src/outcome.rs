//! The fault-accumulating result type.
//!
//! An [`Outcome`] gathers zero or more [`Fault`]s instead of stopping at the
//! first one. `Outcome<T>` additionally carries a value slot that can only be
//! read while no fault is present. The unit form `Outcome` (that is,
//! `Outcome<()>`) is used where only the fault list matters.
//!
//! Faults are only ever appended: no operation removes a fault from an
//! outcome once it has been recorded.

use stillwater::Validation;

use crate::error::{Fault, Faults, OutcomeError, Severity};

/// An accumulator of faults with an optional, guarded value.
///
/// The value slot is in one of three states:
/// - unset;
/// - set and valid (no faults);
/// - set but invalid (faults exist; the value is kept but cannot be read).
///
/// # Example
///
/// ```rust
/// use faultline::{Fault, Outcome, Severity};
///
/// let mut outcome: Outcome<u32> = Outcome::success(7);
/// assert_eq!(*outcome.value(), 7);
///
/// outcome.fail(Fault::validation("AGE_TOO_LOW", "age must be at least 18"));
/// assert!(outcome.has_failed());
/// assert_eq!(outcome.severity(), Severity::One);
/// assert!(outcome.try_value().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T = ()> {
    faults: Vec<Fault>,
    value: Option<T>,
}

impl Outcome<()> {
    /// Creates a non-failed unit outcome.
    pub fn ok() -> Self {
        Self::success(())
    }
}

impl<T> Outcome<T> {
    /// Creates an outcome with no faults and no value.
    pub fn new() -> Self {
        Self {
            faults: Vec::new(),
            value: None,
        }
    }

    /// Creates a non-failed outcome holding `value`.
    pub fn success(value: T) -> Self {
        Self {
            faults: Vec::new(),
            value: Some(value),
        }
    }

    /// Creates a failed outcome with exactly one fault.
    pub fn from_fault(fault: Fault) -> Self {
        Self {
            faults: vec![fault],
            value: None,
        }
    }

    /// Creates a failed outcome from an existing fault collection.
    pub fn from_faults(faults: Faults) -> Self {
        Self {
            faults: faults.into_vec(),
            value: None,
        }
    }

    /// Returns true if at least one fault has been recorded.
    pub fn has_failed(&self) -> bool {
        !self.faults.is_empty()
    }

    /// Returns the number of recorded faults.
    pub fn fault_count(&self) -> usize {
        self.faults.len()
    }

    /// Derives the severity from the recorded faults.
    pub fn severity(&self) -> Severity {
        Severity::of(&self.faults)
    }

    /// Returns the recorded faults in insertion order.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeError::NoFaults`] if the outcome has not failed.
    pub fn faults(&self) -> &[Fault] {
        match self.try_faults() {
            Ok(faults) => faults,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the recorded faults, or [`OutcomeError::NoFaults`].
    pub fn try_faults(&self) -> Result<&[Fault], OutcomeError> {
        if self.has_failed() {
            Ok(&self.faults)
        } else {
            Err(OutcomeError::NoFaults)
        }
    }

    /// Returns the codes of all recorded faults; empty when not failed.
    pub fn codes(&self) -> Vec<&str> {
        self.faults.iter().map(Fault::code).collect()
    }

    /// Appends one fault. Any stored value is kept but becomes unreadable.
    pub fn fail(&mut self, fault: Fault) {
        self.faults.push(fault);
    }

    /// Appends `other`'s faults if it has failed; otherwise does nothing.
    ///
    /// Inheriting the same failure twice appends its faults twice.
    pub fn inherit_failure<U>(&mut self, other: &Outcome<U>) {
        if other.has_failed() {
            self.faults.extend(other.faults.iter().cloned());
        }
    }

    /// Re-types a failure, keeping the same faults.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeError::NoFaults`] if the outcome has not failed.
    pub fn failure_as<U>(&self) -> Outcome<U> {
        match self.try_failure_as() {
            Ok(outcome) => outcome,
            Err(err) => panic!("{err}"),
        }
    }

    /// Re-types a failure, or returns [`OutcomeError::NoFaults`].
    pub fn try_failure_as<U>(&self) -> Result<Outcome<U>, OutcomeError> {
        if self.has_failed() {
            Ok(Outcome {
                faults: self.faults.clone(),
                value: None,
            })
        } else {
            Err(OutcomeError::NoFaults)
        }
    }

    /// Stores a value. Existing faults are neither cleared nor hidden.
    pub fn set_value(&mut self, value: T) {
        self.value = Some(value);
    }

    /// Returns true if a value has been stored, valid or not.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the value.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeError::ValueInvalid`] if faults exist, or
    /// [`OutcomeError::ValueNotSet`] if no value was stored.
    pub fn value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Returns the value, or the reason it cannot be read.
    ///
    /// Faults take precedence: an outcome that has failed reports
    /// [`OutcomeError::ValueInvalid`] whether or not a value was stored.
    pub fn try_value(&self) -> Result<&T, OutcomeError> {
        self.check_readable()?;
        self.value.as_ref().ok_or(OutcomeError::ValueNotSet)
    }

    /// Consumes the outcome and returns the value.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Outcome::value`].
    pub fn into_value(self) -> T {
        match self.try_into_value() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Consumes the outcome and returns the value, or the reason it cannot be read.
    pub fn try_into_value(self) -> Result<T, OutcomeError> {
        self.check_readable()?;
        self.value.ok_or(OutcomeError::ValueNotSet)
    }

    /// Maps a readable value, keeping every fault.
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            value: if self.faults.is_empty() {
                self.value.map(f)
            } else {
                None
            },
            faults: self.faults,
        }
    }

    /// Converts into a `stillwater::Validation`.
    ///
    /// # Panics
    ///
    /// Panics with [`OutcomeError::ValueNotSet`] if the outcome has neither
    /// failed nor been given a value.
    pub fn into_validation(self) -> Validation<T, Faults> {
        match self.try_into_validation() {
            Ok(validation) => validation,
            Err(err) => panic!("{err}"),
        }
    }

    /// Converts into a `stillwater::Validation`, or reports an unset value.
    pub fn try_into_validation(self) -> Result<Validation<T, Faults>, OutcomeError> {
        match Faults::from_vec(self.faults) {
            Some(faults) => Ok(Validation::Failure(faults)),
            None => self
                .value
                .map(Validation::Success)
                .ok_or(OutcomeError::ValueNotSet),
        }
    }

    /// Converts into a `Result`, with the faults on the error side.
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Outcome::into_validation`].
    pub fn into_result(self) -> Result<T, Faults> {
        self.into_validation().into_result()
    }

    fn check_readable(&self) -> Result<(), OutcomeError> {
        if self.has_failed() {
            Err(OutcomeError::ValueInvalid {
                codes: self.faults.iter().map(|f| f.code().to_string()).collect(),
            })
        } else {
            Ok(())
        }
    }
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Fault> for Outcome<T> {
    fn from(fault: Fault) -> Self {
        Self::from_fault(fault)
    }
}

impl<T> From<Faults> for Outcome<T> {
    fn from(faults: Faults) -> Self {
        Self::from_faults(faults)
    }
}

impl<T> From<Validation<T, Faults>> for Outcome<T> {
    fn from(validation: Validation<T, Faults>) -> Self {
        match validation {
            Validation::Success(value) => Self::success(value),
            Validation::Failure(faults) => Self::from_faults(faults),
        }
    }
}
