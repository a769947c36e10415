//! Hidden keystroke trigger
//!
//! A rolling window of the last few characters typed anywhere in the
//! viewport. When the window spells the trigger sequence, the app navigates
//! away.

use tracing::info;

/// Characters kept in the window.
const WINDOW: usize = 4;

/// Typing this (any case) triggers the navigation.
pub const TRIGGER_SEQUENCE: &str = "aqua";

/// Where the trigger takes you.
pub const TRIGGER_URL: &str = "https://youtu.be/VlrQ-bOzpkQ?si=6yxGfwhlrSt90gdU";

/// Rolling window of the last four characters typed.
///
/// Never cleared, only truncated; there is no cooldown, so any push that
/// leaves the window equal to the sequence fires again.
#[derive(Debug, Default)]
pub struct KeyBuffer {
    buf: String,
}

impl KeyBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw key text, truncate to the trailing four characters, and
    /// report whether the window now matches the trigger sequence.
    ///
    /// Key text may be longer than one character; truncation counts
    /// characters, not bytes.
    pub fn push(&mut self, text: &str) -> bool {
        self.buf.push_str(text);

        let extra = self.buf.chars().count().saturating_sub(WINDOW);
        if extra > 0 {
            let cut = self
                .buf
                .char_indices()
                .nth(extra)
                .map(|(i, _)| i)
                .unwrap_or(self.buf.len());
            self.buf.drain(..cut);
        }

        let hit = self.buf.eq_ignore_ascii_case(TRIGGER_SEQUENCE);
        if hit {
            info!(sequence = TRIGGER_SEQUENCE, "trigger sequence typed");
        }
        hit
    }

    /// Current window contents.
    pub fn as_str(&self) -> &str {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_oldest_char_is_evicted() {
        let mut keys = KeyBuffer::new();

        // x, a, q, u fill the window without matching...
        assert!(!keys.push("x"));
        assert!(!keys.push("a"));
        assert!(!keys.push("q"));
        assert!(!keys.push("u"));
        assert_eq!(keys.as_str(), "xaqu");

        // ...and the fifth keystroke evicts the x and matches.
        assert!(keys.push("a"));
        assert_eq!(keys.as_str(), "aqua");

        // The next keystroke shifts the window and stops matching.
        assert!(!keys.push("z"));
        assert_eq!(keys.as_str(), "quaz");
    }

    #[test]
    fn match_is_case_insensitive() {
        let mut keys = KeyBuffer::new();
        keys.push("A");
        keys.push("Q");
        keys.push("U");
        assert!(keys.push("a"));
    }

    #[test]
    fn multi_character_key_text_is_truncated() {
        let mut keys = KeyBuffer::new();
        // Named keys arrive as whole words; only the tail survives.
        assert!(!keys.push("Shift"));
        assert_eq!(keys.as_str(), "hift");

        // A whole matching burst in one event still triggers.
        assert!(keys.push("aqua"));
    }

    #[test]
    fn repeated_matching_tail_retriggers() {
        let mut keys = KeyBuffer::new();
        assert!(keys.push("aqua"));
        // No cooldown: the same tail matching again fires again.
        assert!(keys.push("aqua"));
        assert!(!keys.push("b"));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let mut keys = KeyBuffer::new();
        keys.push("héllo");
        assert_eq!(keys.as_str(), "éllo");
        assert_eq!(keys.as_str().chars().count(), 4);
    }
}
