// Prompt text for the AI reply path.
//
// TRUST BOUNDARY: review text goes into the prompt as-is unless a sanitizer
// other than `Verbatim` is installed. Prompt injection is not mitigated here.

use std::borrow::Cow;

use crate::generation::tone::ToneBand;
use crate::models::business::display_name;
use crate::models::review::ReviewRequest;

/// Reply prompt template.
/// Replace: {business_name}, {business_display}, {review_text}, {rating}, {tone}, {focus}
pub const REPLY_PROMPT_TEMPLATE: &str = r#"You are responding to a customer review for {business_name}, a {business_display} in Tipton County, Tennessee.

Review: "{review_text}"
Rating: {rating}/5 stars

Write a {tone} response that:
- {focus}
- Keeps it under 100 words
- Sounds personal, not generic
- Uses the business name naturally
- Reflects local Tennessee hospitality
- Ends with an invitation to return or contact directly

Response:"#;

/// Hook applied to review text before it is embedded in a prompt.
pub trait ReviewSanitizer: Send + Sync {
    fn sanitize<'a>(&self, review_text: &'a str) -> Cow<'a, str>;
}

/// Default sanitizer: passes the review through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verbatim;

impl ReviewSanitizer for Verbatim {
    fn sanitize<'a>(&self, review_text: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(review_text)
    }
}

/// Builds the reply prompt for a validated request.
pub fn build_prompt(request: &ReviewRequest, sanitizer: &dyn ReviewSanitizer) -> String {
    let guidance = ToneBand::from_rating(request.rating).guidance();
    let review_text = sanitizer.sanitize(&request.review_text);

    // Caller-supplied values go in last so braces inside them are never expanded.
    REPLY_PROMPT_TEMPLATE
        .replace("{business_display}", display_name(&request.business_type))
        .replace("{rating}", &request.rating.to_string())
        .replace("{tone}", guidance.tone)
        .replace("{focus}", guidance.focus)
        .replace("{business_name}", &request.business_name)
        .replace("{review_text}", &review_text)
}
