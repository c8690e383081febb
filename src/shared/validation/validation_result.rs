use crate::shared::errors::{AppError, AppResult};

/// Collected outcome of validating one transfer record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn invalid(error: impl Into<String>) -> Self {
        Self {
            errors: vec![error.into()],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.add_error(error);
        self
    }

    /// Merge two validation results
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.errors.extend(other.errors);
        self
    }

    /// Turn collected errors into a single validation error
    pub fn into_result(self) -> AppResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(self.errors.join(" ")))
        }
    }
}
