// Template-based content generation: interview questions, resume drafts and
// cover letter saves. Every generator is deterministic; each successful run is
// tracked in the activity log by its handler.

pub mod handlers;
pub mod interview;
pub mod letter;
pub mod resume;

/// The trimmed value, or `None` when blank.
pub(crate) fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
