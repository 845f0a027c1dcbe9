//! Server-side input validation and sanitization.
//!
//! Client-side validation is never trusted; every text constraint is
//! re-checked here before a mutation touches the store.

/// Maximum question length.
pub const MAX_QUESTION_LENGTH: usize = 500;

/// Minimum number of options on a poll.
pub const MIN_OPTIONS: usize = 2;

/// Maximum number of options on a poll.
pub const MAX_OPTIONS: usize = 10;

/// Maximum length of a single option.
pub const MAX_OPTION_LENGTH: usize = 200;

/// Validated and sanitized poll input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPollInput {
    pub question: String,
    pub options: Vec<String>,
}

/// Validate question/options for poll creation and updates.
///
/// Empty option strings are dropped before the count bounds apply; the
/// surviving options are trimmed and must stay non-empty and within length.
/// The error string is safe to report verbatim.
pub fn validate_poll_input(
    question: &str,
    options: &[String],
) -> Result<ValidatedPollInput, String> {
    let trimmed_question = question.trim();
    if trimmed_question.is_empty() {
        return Err("Question is required.".to_string());
    }
    if question.chars().count() > MAX_QUESTION_LENGTH {
        return Err(format!(
            "Question must be less than {} characters.",
            MAX_QUESTION_LENGTH
        ));
    }

    let provided: Vec<&String> = options.iter().filter(|o| !o.is_empty()).collect();
    if provided.len() < MIN_OPTIONS {
        return Err("Please provide at least two options.".to_string());
    }
    if provided.len() > MAX_OPTIONS {
        return Err(format!("Maximum {} options allowed.", MAX_OPTIONS));
    }

    let sanitized: Vec<String> = provided
        .into_iter()
        .map(|o| o.trim().to_string())
        .filter(|o| !o.is_empty())
        .collect();
    if sanitized.len() < MIN_OPTIONS {
        return Err("Please provide at least two valid options.".to_string());
    }

    for option in &sanitized {
        if option.chars().count() > MAX_OPTION_LENGTH {
            return Err(format!(
                "Each option must be less than {} characters.",
                MAX_OPTION_LENGTH
            ));
        }
    }

    Ok(ValidatedPollInput {
        question: trimmed_question.to_string(),
        options: sanitized,
    })
}
