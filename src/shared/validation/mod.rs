pub mod validation_result;

use async_trait::async_trait;

pub use validation_result::ValidationResult;

/// What a facade is about to do with a transfer record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Record is being created; it must not carry an identity
    New,
    /// Record replaces a stored one; identity required
    Existing,
}

/// Field-level checks for one transfer record type.
///
/// Identity and existence checks are done by the facade; implementations only
/// look at the record's own data (and may consult other services, e.g. to
/// verify referenced genres exist).
#[async_trait]
pub trait DtoValidator<D>: Send + Sync {
    async fn validate_data(&self, dto: &D, result: &mut ValidationResult);

    /// Name used in messages ("Movie", "Season", ...)
    fn record_name(&self) -> &'static str;
}
