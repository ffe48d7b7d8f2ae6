//! Validation bounds
//!
//! Status labels are caller-supplied open text. The registry accepts any
//! label a policy-approved caller sends, but the text itself must be
//! non-empty and bounded so a label can always be logged and displayed.

/// Maximum length of a caller-supplied status label, in bytes
pub const MAX_STATUS_LABEL_LENGTH: usize = 128;
