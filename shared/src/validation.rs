pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Title exceeds maximum length of {MAX_TITLE_LENGTH}")]
    TitleTooLong,
    #[error("Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH}")]
    DescriptionTooLong,
}

pub fn validate_new_survey(title: &str, description: Option<&str>) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(ValidationError::TitleTooLong);
    }
    if description.map_or(false, |d| d.len() > MAX_DESCRIPTION_LENGTH) {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}
