//! The address submission action.
//!
//! One call per submission: wait out the simulated latency, validate, hand
//! a valid address to the [`AddressStore`], and describe the outcome as an
//! [`ActionResponse`]. Every path returns a response; nothing propagates.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

use crate::address::{FormData, ShippingAddress};
use crate::validation::{self, FieldErrors};

pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors in form";
pub const SAVED_MESSAGE: &str = "Address saved successfully!";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred";

/// Latency simulated before a submission is processed.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// Outcome of one submission.
///
/// Serialises as `{ success, message, errors?, inputs? }`. `errors` and
/// `inputs` are only present after a validation failure.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<FormData>,
}

impl ActionResponse {
    /// The state a fresh form starts in: no banner, no errors.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn saved() -> Self {
        Self { success: true, message: SAVED_MESSAGE.to_owned(), errors: None, inputs: None }
    }

    pub fn invalid(errors: FieldErrors, inputs: FormData) -> Self {
        Self {
            success: false,
            message: FIX_ERRORS_MESSAGE.to_owned(),
            errors: Some(errors),
            inputs: Some(inputs),
        }
    }

    /// Generic failure. Carries no detail about what went wrong.
    pub fn unexpected() -> Self {
        Self { success: false, message: UNEXPECTED_MESSAGE.to_owned(), errors: None, inputs: None }
    }

    /// True for a validation failure, as opposed to success or an
    /// unexpected failure.
    pub fn is_invalid(&self) -> bool {
        !self.success && self.errors.is_some()
    }
}

// ── Address store ─────────────────────────────────────────────────────────────

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("address store unavailable: {0}")]
    Unavailable(String),
}

/// Where validated addresses go.
pub trait AddressStore: Send + Sync + 'static {
    fn save(&self, address: &ShippingAddress) -> Result<(), StoreError>;
}

/// Writes each address to the log and keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogStore;

impl AddressStore for LogStore {
    fn save(&self, address: &ShippingAddress) -> Result<(), StoreError> {
        info!(
            street_address = %address.street_address,
            apartment = address.apartment.as_deref(),
            city = %address.city,
            state = %address.state,
            zip_code = %address.zip_code,
            country = %address.country,
            "address submitted",
        );
        Ok(())
    }
}

// ── Action ────────────────────────────────────────────────────────────────────

/// Unexpected failures while processing an already-received submission.
#[derive(Debug, thiserror::Error)]
enum ProcessingError {
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The submission handler.
#[derive(Debug)]
pub struct SubmitAddress<S = LogStore> {
    store: S,
    delay: Duration,
}

impl SubmitAddress<LogStore> {
    pub fn new(delay: Duration) -> Self {
        Self::with_store(LogStore, delay)
    }
}

impl<S: AddressStore> SubmitAddress<S> {
    pub fn with_store(store: S, delay: Duration) -> Self {
        Self { store, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Processes one submission.
    ///
    /// `_previous` is the state the form was rendered from. It does not
    /// influence the outcome.
    #[instrument(skip_all)]
    pub async fn submit(&self, _previous: Option<&ActionResponse>, form: FormData) -> ActionResponse {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match self.process(form) {
            Ok(response) => response,
            Err(e) => {
                error!("An unexpected error occurred: {e}");
                ActionResponse::unexpected()
            }
        }
    }

    fn process(&self, form: FormData) -> Result<ActionResponse, ProcessingError> {
        let address = match validation::validate(&form) {
            Ok(address) => address,
            Err(errors) => {
                debug!(fields = ?errors.keys().collect::<Vec<_>>(), "submission rejected");
                return Ok(ActionResponse::invalid(errors, form));
            }
        };

        self.store.save(&address)?;
        Ok(ActionResponse::saved())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::address::Field;

    fn valid_form() -> FormData {
        FormData::default()
            .with(Field::StreetAddress, "123 Main St")
            .with(Field::Apartment, "")
            .with(Field::City, "New York")
            .with(Field::State, "NY")
            .with(Field::ZipCode, "10001")
            .with(Field::Country, "United States")
    }

    #[derive(Default)]
    struct MemoryStore(Mutex<Vec<ShippingAddress>>);

    impl AddressStore for MemoryStore {
        fn save(&self, address: &ShippingAddress) -> Result<(), StoreError> {
            self.0.lock().unwrap().push(address.clone());
            Ok(())
        }
    }

    struct BrokenStore;

    impl AddressStore for BrokenStore {
        fn save(&self, _: &ShippingAddress) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("disk on fire".into()))
        }
    }

    #[tokio::test]
    async fn valid_submission_is_saved() {
        let action = SubmitAddress::with_store(MemoryStore::default(), Duration::ZERO);
        let response = action.submit(None, valid_form()).await;

        assert_eq!(response, ActionResponse::saved());
        assert_eq!(action.store.0.lock().unwrap().len(), 1);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "message": "Address saved successfully!" }),
        );
    }

    #[tokio::test]
    async fn invalid_submission_echoes_inputs_untouched() {
        let action = SubmitAddress::with_store(MemoryStore::default(), Duration::ZERO);
        let form = valid_form()
            .with(Field::City, "")
            .with(Field::ZipCode, "12 3")
            .with(Field::StreetAddress, "  padded  ");

        let response = action.submit(None, form.clone()).await;

        assert!(!response.success);
        assert!(response.is_invalid());
        assert_eq!(response.message, FIX_ERRORS_MESSAGE);
        assert_eq!(response.inputs, Some(form));
        assert_eq!(
            response.errors,
            Some(FieldErrors::from([
                (Field::City, "City is required".to_owned()),
                (Field::ZipCode, "ZIP code must be at least 5 characters".to_owned()),
            ])),
        );
        assert!(action.store.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn store_failure_becomes_generic_failure() {
        let action = SubmitAddress::with_store(BrokenStore, Duration::ZERO);
        let response = action.submit(None, valid_form()).await;

        assert_eq!(response, ActionResponse::unexpected());
        assert!(!response.is_invalid());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "An unexpected error occurred" }),
        );
    }

    #[tokio::test]
    async fn previous_state_does_not_change_the_outcome() {
        let action = SubmitAddress::new(Duration::ZERO);
        let previous = ActionResponse::invalid(FieldErrors::new(), FormData::default());
        assert_eq!(action.submit(Some(&previous), valid_form()).await, ActionResponse::saved());
    }

    #[tokio::test(start_paused = true)]
    async fn submission_waits_for_the_delay() {
        let action = SubmitAddress::new(DEFAULT_SUBMIT_DELAY);
        let started = tokio::time::Instant::now();

        action.submit(None, valid_form()).await;

        assert!(started.elapsed() >= DEFAULT_SUBMIT_DELAY);
    }

    #[test]
    fn error_map_serialises_with_form_field_names() {
        let response = ActionResponse::invalid(
            FieldErrors::from([(Field::ZipCode, "short".to_owned())]),
            FormData::default().with(Field::ZipCode, "1"),
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "success": false,
                "message": "Please fix the errors in form",
                "errors": { "zipCode": "short" },
                "inputs": { "zipCode": "1" },
            }),
        );
    }
}
