//! Errors for slot command handlers.

use crate::domain::foundation::{DomainError, ErrorCode, PackageId};
use crate::domain::pricing::PricingError;
use crate::domain::slot::SlotError;

/// Failures while opening a new slot.
///
/// Slot creation crosses three concerns (catalog lookup, pricing, registry),
/// so its error type wraps each of their failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateSlotError {
    /// The guest list could not be priced.
    Pricing(PricingError),

    /// The package id is not in the catalog.
    UnknownPackage(PackageId),

    /// The registry rejected the slot.
    Slot(SlotError),

    /// Infrastructure error.
    Infrastructure(String),
}

impl CreateSlotError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CreateSlotError::Pricing(_) => ErrorCode::InvalidGuestData,
            CreateSlotError::UnknownPackage(_) => ErrorCode::PackageNotFound,
            CreateSlotError::Slot(err) => err.code(),
            CreateSlotError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            CreateSlotError::Pricing(err) => err.to_string(),
            CreateSlotError::UnknownPackage(id) => format!("Package not found: {}", id),
            CreateSlotError::Slot(err) => err.message(),
            CreateSlotError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CreateSlotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CreateSlotError {}

impl From<PricingError> for CreateSlotError {
    fn from(err: PricingError) -> Self {
        CreateSlotError::Pricing(err)
    }
}

impl From<SlotError> for CreateSlotError {
    fn from(err: SlotError) -> Self {
        CreateSlotError::Slot(err)
    }
}

impl From<CreateSlotError> for DomainError {
    fn from(err: CreateSlotError) -> Self {
        match err {
            CreateSlotError::Slot(slot_err) => slot_err.into(),
            other => DomainError::new(other.code(), other.message()),
        }
    }
}
