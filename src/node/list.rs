//! List mapping strategies.
//!
//! A list-valued property maps every element with the same strategies as a
//! scalar one. While an element is mapped the list's path segment reads
//! `name[index]`. Every element is visited; if any element fails the whole
//! list is discarded and only the failing elements' own faults are recorded.

use super::{Classification, Fallback, PropertyNode};
use crate::outcome::Outcome;
use crate::path::PropertyPath;

impl<'c, R, S> PropertyNode<'c, R, S>
where
    R: IntoIterator,
    S: Classification<R>,
{
    /// Converts every element with an infallible constructor.
    pub fn map_each_with<T, F>(self, mut constructor: F) -> <S as Fallback<Vec<T>>>::Output
    where
        S: Fallback<Vec<T>>,
        F: FnMut(R::Item) -> T,
    {
        self.map_each_complex(|item, _| Outcome::success(constructor(item)))
    }

    /// Converts every element with a factory that may fail.
    ///
    /// ```rust
    /// use faultline::{Fault, Outcome, PropertyPath, ValidationContext};
    ///
    /// let mut path = PropertyPath::root();
    /// let mut ctx = ValidationContext::new(&mut path);
    ///
    /// let ids: Option<Vec<u32>> = ctx
    ///     .property("ids", Some(vec!["1", "x", "3"]))
    ///     .optional()
    ///     .map_each_try(|raw: &str| match raw.parse::<u32>() {
    ///         Ok(id) => Outcome::success(id),
    ///         Err(_) => Fault::validation("ID_INVALID", "id must be numeric").into(),
    ///     });
    ///
    /// assert_eq!(ids, None);
    /// assert_eq!(ctx.outcome().codes(), vec!["ID_INVALID"]);
    /// ```
    pub fn map_each_try<T, F>(self, mut factory: F) -> <S as Fallback<Vec<T>>>::Output
    where
        S: Fallback<Vec<T>>,
        F: FnMut(R::Item) -> Outcome<T>,
    {
        self.map_each_complex(|item, _| factory(item))
    }

    /// Converts every element with a nested validation pass.
    ///
    /// Each pass receives the path ending in `name[index]`.
    ///
    /// # Panics
    ///
    /// Panics if a pass returns an outcome with neither faults nor a value.
    pub fn map_each_complex<T, F>(self, mut nested: F) -> <S as Fallback<Vec<T>>>::Output
    where
        S: Fallback<Vec<T>>,
        F: FnMut(R::Item, &mut PropertyPath) -> Outcome<T>,
    {
        let mapped = self.evaluate(|items, path| {
            let mut list: Outcome<Vec<T>> = Outcome::new();
            let mut values = Vec::new();
            for (index, item) in items.into_iter().enumerate() {
                let mut item_path = path.scope_item(index);
                let element = nested(item, &mut *item_path);
                if element.has_failed() {
                    list.inherit_failure(&element);
                } else {
                    values.push(element.into_value());
                }
            }
            list.set_value(values);
            list
        });
        <S as Fallback<Vec<T>>>::settle(mapped)
    }
}
