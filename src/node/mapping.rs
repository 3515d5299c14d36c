//! Scalar mapping strategies.
//!
//! Every strategy reduces to the nested form: a function from the raw value
//! and the extended path to an [`Outcome`]. The simpler strategies wrap their
//! result in a successful outcome.

use super::{Classification, Fallback, PropertyNode};
use crate::outcome::Outcome;
use crate::path::PropertyPath;

impl<'c, R, S> PropertyNode<'c, R, S>
where
    S: Classification<R>,
{
    /// Takes the raw value as it is.
    pub fn map(self) -> <S as Fallback<R>>::Output
    where
        S: Fallback<R>,
    {
        <S as Fallback<R>>::settle(self.evaluate(|raw, _| Outcome::success(raw)))
    }

    /// Converts the raw value with an infallible constructor.
    pub fn map_with<T, F>(self, constructor: F) -> <S as Fallback<T>>::Output
    where
        S: Fallback<T>,
        F: FnOnce(R) -> T,
    {
        <S as Fallback<T>>::settle(self.evaluate(|raw, _| Outcome::success(constructor(raw))))
    }

    /// Converts the raw value with a factory that may fail.
    ///
    /// The factory's faults are recorded as this field's faults. A failing
    /// factory never adds the missing fault: that is reserved for an absent
    /// raw value.
    ///
    /// # Panics
    ///
    /// Panics if the factory returns an outcome with neither faults nor a value.
    ///
    /// ```rust
    /// use faultline::{Fault, Outcome, PropertyPath, ValidationContext};
    ///
    /// let mut path = PropertyPath::root();
    /// let mut ctx = ValidationContext::new(&mut path);
    ///
    /// let port: Option<u16> = ctx
    ///     .property("port", Some("http"))
    ///     .optional()
    ///     .map_try(|raw: &str| match raw.parse::<u16>() {
    ///         Ok(port) => Outcome::success(port),
    ///         Err(_) => Fault::validation("PORT_INVALID", "port must be a number").into(),
    ///     });
    ///
    /// assert_eq!(port, None);
    /// assert_eq!(ctx.outcome().codes(), vec!["PORT_INVALID"]);
    /// ```
    pub fn map_try<T, F>(self, factory: F) -> <S as Fallback<T>>::Output
    where
        S: Fallback<T>,
        F: FnOnce(R) -> Outcome<T>,
    {
        <S as Fallback<T>>::settle(self.evaluate(|raw, _| factory(raw)))
    }

    /// Converts the raw value with a nested validation pass.
    ///
    /// The pass receives the path already extended with this property, so the
    /// faults it derives carry the full dotted path. Its faults are recorded
    /// the same way as a factory's.
    pub fn map_complex<T, F>(self, nested: F) -> <S as Fallback<T>>::Output
    where
        S: Fallback<T>,
        F: FnOnce(R, &mut PropertyPath) -> Outcome<T>,
    {
        <S as Fallback<T>>::settle(self.evaluate(nested))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Fault, Outcome, PropertyPath, ValidationContext};

    fn positive(raw: i32) -> Outcome<u32> {
        if raw > 0 {
            Outcome::success(raw as u32)
        } else {
            Outcome::from_fault(Fault::validation("NOT_POSITIVE", "must be positive"))
        }
    }

    #[test]
    fn test_defaulted_runs_factory_on_default() {
        let mut path = PropertyPath::root();
        let mut ctx = ValidationContext::new(&mut path);
        let value: u32 = ctx
            .property("retries", None::<i32>)
            .with_default(-1)
            .map_try(positive);

        assert_eq!(value, 0);
        assert_eq!(ctx.outcome().codes(), vec!["NOT_POSITIVE"]);
    }

    #[test]
    fn test_optional_constructor_skipped_when_absent() {
        let mut path = PropertyPath::root();
        let mut ctx = ValidationContext::new(&mut path);
        let mut called = false;
        let value = ctx.property("tag", None::<String>).optional().map_with(|s| {
            called = true;
            s.len()
        });

        assert_eq!(value, None);
        assert!(!called);
        assert!(!ctx.has_failed());
    }

    #[test]
    fn test_complex_sees_extended_path() {
        let mut path = PropertyPath::root();
        let mut ctx = ValidationContext::new(&mut path);
        let seen = ctx
            .property("address", Some(()))
            .required()
            .map_complex(|_, path| Outcome::success(path.current()));

        assert_eq!(seen, "address");
        assert!(ctx.path().is_root());
    }

    #[test]
    #[should_panic(expected = "has not been set")]
    fn test_factory_without_value_or_faults_panics() {
        let mut path = PropertyPath::root();
        let mut ctx = ValidationContext::new(&mut path);
        let _: u8 = ctx
            .property("level", Some(9_u8))
            .required()
            .map_try(|_| Outcome::<u8>::new());
    }
}
