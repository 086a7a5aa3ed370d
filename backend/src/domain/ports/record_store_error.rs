//! Failure taxonomy shared by the record store repositories.

use super::define_port_error;

define_port_error! {
    /// Errors raised by record store adapters.
    ///
    /// The console reacts to all of them the same way (log, keep the list,
    /// keep the draft); the split only decides the status code reported to
    /// callers.
    pub enum RecordStoreError {
        /// The store could not be reached.
        Connection { message: String } =>
            "record store connection failed: {message}",
        /// The store did not answer in time.
        Timeout { message: String } =>
            "record store timed out: {message}",
        /// The store answered with a non-success status.
        Rejected { status: u16, message: String } =>
            "record store rejected the request ({status}): {message}",
        /// The store answered with rows the console cannot read.
        Decode { message: String } =>
            "record store returned an unreadable payload: {message}",
    }
}

impl RecordStoreError {
    /// True when the failure is about reaching the store rather than the
    /// request itself.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Connection { .. } | Self::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RecordStoreError::connection("refused"), true)]
    #[case(RecordStoreError::timeout("10s elapsed"), true)]
    #[case(RecordStoreError::rejected(400_u16, "bad column"), false)]
    #[case(RecordStoreError::decode("missing id"), false)]
    fn classifies_availability(#[case] error: RecordStoreError, #[case] expected: bool) {
        assert_eq!(error.is_unavailable(), expected);
    }

    #[rstest]
    fn rejected_message_includes_status() {
        let error = RecordStoreError::rejected(401_u16, "invalid api key");
        assert_eq!(
            error.to_string(),
            "record store rejected the request (401): invalid api key"
        );
    }
}
