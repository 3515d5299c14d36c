//! Errors raised by misuse of an [`Outcome`](crate::Outcome).
//!
//! These are programming errors, not validation results: they describe a
//! caller reading faults that do not exist or a value that may not be read.

/// A misuse of an outcome's accessors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OutcomeError {
    /// The fault list was read but no fault has been recorded.
    #[error("outcome has not failed, there are no faults to report")]
    NoFaults,

    /// The value was read but never set.
    #[error("outcome value has not been set")]
    ValueNotSet,

    /// The value was read while faults are present.
    #[error("outcome value is invalid because of faults: {}", .codes.join(", "))]
    ValueInvalid {
        /// Codes of every fault held by the outcome, in insertion order.
        codes: Vec<String>,
    },
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<OutcomeError>();
    assert_sync::<OutcomeError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_lists_codes() {
        let err = OutcomeError::ValueInvalid {
            codes: vec!["NAME_MISSING".to_string(), "EMAIL_INVALID".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "outcome value is invalid because of faults: NAME_MISSING, EMAIL_INVALID"
        );
    }

    #[test]
    fn test_not_set_and_no_faults_differ() {
        assert_ne!(
            OutcomeError::ValueNotSet.to_string(),
            OutcomeError::NoFaults.to_string()
        );
    }
}
