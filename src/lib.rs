//! # Faultline
//!
//! A validation engine that turns loosely-typed request parameters into
//! strongly-typed values while accumulating ALL faults, rather than stopping
//! at the first one.
//!
//! ## Overview
//!
//! A validator visits every field of a parameter container. For each field it
//! enters the property on a [`PropertyPath`], classifies it as required,
//! optional or defaulted, and maps the raw value into its target type. Any
//! fault is folded into one aggregate [`Outcome`], so the caller receives
//! either the fully built value or the complete list of faults, each with a
//! code derived from its dotted property path.
//!
//! ## Core Types
//!
//! - [`Fault`]: one violation (kind, code, message)
//! - [`Outcome`]: zero or more faults plus a guarded value
//! - [`PropertyPath`]: the stack of property segments being visited
//! - [`PropertyNode`]: the per-field classify-then-map builder
//! - [`Attribute`]: one raw parameter in an N-ary combination
//! - [`Validator`]: the entry point for a parameter container
//!
//! ## Example
//!
//! ```rust
//! use faultline::{Fault, Outcome, ValidationContext, Validator};
//!
//! struct CreateUserParams {
//!     name: Option<String>,
//!     age: Option<i64>,
//!     roles: Option<Vec<String>>,
//! }
//!
//! #[derive(Debug)]
//! struct CreateUser {
//!     name: String,
//!     age: u8,
//!     roles: Vec<String>,
//! }
//!
//! fn age(raw: i64) -> Outcome<u8> {
//!     match u8::try_from(raw) {
//!         Ok(age) if age >= 18 => Outcome::success(age),
//!         _ => Fault::validation("AGE_OUT_OF_RANGE", "age must be 18 to 255").into(),
//!     }
//! }
//!
//! struct CreateUserValidator;
//!
//! impl Validator for CreateUserValidator {
//!     type Params = CreateUserParams;
//!     type Output = CreateUser;
//!
//!     fn configure(&self, p: &CreateUserParams, ctx: &mut ValidationContext<'_>) -> CreateUser {
//!         CreateUser {
//!             name: ctx.field(p, "name", |p| p.name.clone()).required().map(),
//!             age: ctx.field(p, "age", |p| p.age).required().map_try(age),
//!             roles: ctx
//!                 .field(p, "roles", |p| p.roles.clone())
//!                 .with_default(vec!["member".to_string()])
//!                 .map(),
//!         }
//!     }
//! }
//!
//! let outcome = CreateUserValidator.validate(&CreateUserParams {
//!     name: None,
//!     age: Some(12),
//!     roles: None,
//! });
//!
//! assert_eq!(outcome.codes(), vec!["NAME_MISSING", "AGE_OUT_OF_RANGE"]);
//! ```

pub mod attributes;
pub mod error;
pub mod node;
pub mod outcome;
pub mod path;
pub mod validation;

pub use attributes::{Attribute, AttributeSet};
pub use error::{Fault, FaultKind, Faults, OutcomeError, Severity};
pub use node::PropertyNode;
pub use outcome::Outcome;
pub use path::{MissingFaultFormat, PathScope, PathSegment, PropertyPath};
pub use validation::{ValidationContext, Validator};

/// Type alias for `stillwater` validations carrying faults.
pub type ValidationResult<T> = stillwater::Validation<T, Faults>;
