/// String utility functions
pub struct StringUtils;

impl StringUtils {
    /// Character count after trimming, the metric used by all input
    /// length validation
    pub fn trimmed_length(s: &str) -> usize {
        s.trim().chars().count()
    }

    /// Check if string is empty or whitespace only
    pub fn is_blank(s: &str) -> bool {
        s.trim().is_empty()
    }

    /// Truncate string to max length for display, char-safe
    pub fn truncate(s: &str, max_len: usize) -> String {
        if s.chars().count() <= max_len {
            s.to_string()
        } else {
            let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", cut)
        }
    }
}
