//! Custom validator functions for request DTOs.

use std::borrow::Cow;

use validator::ValidationError;

/// Rejects empty and whitespace-only strings.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct NewItem {
///     #[validate(custom(function = "axum_helpers::validation::non_blank"))]
///     name: String,
/// }
/// ```
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(
            ValidationError::new("non_blank").with_message(Cow::Borrowed("must not be blank"))
        );
    }
    Ok(())
}
