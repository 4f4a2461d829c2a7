use crate::config::MessageFile;
use crate::error::AppError;

/// Validates a parsed message file.
///
/// # Validation Rules
/// - Set names cannot be empty
/// - Message text cannot be empty
/// - `max_seconds` must be at least 1: the per-message duration is sampled
///   as a random offset in `[0, max_seconds)` added to `min_seconds`, and a
///   zero-width range has no defined meaning
pub fn validate_message_file(file: &MessageFile) -> Result<(), AppError> {
    for set in &file.sets {
        if set.name.is_empty() {
            return Err(AppError::config_error("message set name cannot be empty"));
        }

        for (i, message) in set.messages.iter().enumerate() {
            if message.text.is_empty() {
                return Err(AppError::config_error(format!(
                    "message {} in set \"{}\" has empty text",
                    i, set.name
                )));
            }

            if message.max_seconds == 0 {
                return Err(AppError::config_error(format!(
                    "message \"{}\" in set \"{}\" has max_seconds = 0; must be at least 1",
                    message.text, set.name
                )));
            }
        }
    }

    Ok(())
}
