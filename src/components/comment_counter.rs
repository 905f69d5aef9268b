//! Comment Length Counter

use crate::config::CommentLimits;
use crate::dom::PageNode;

pub struct CommentCounter<N> {
    textarea: N,
    counter: N,
    limits: CommentLimits,
}

impl<N: PageNode> CommentCounter<N> {
    pub fn new(textarea: N, counter: N, limits: CommentLimits) -> Self {
        Self { textarea, counter, limits }
    }

    /// Refresh the counter, returning the characters left (negative when over).
    pub fn on_input(&self) -> i64 {
        // UTF-16 units, the same measure the browser's maxlength uses
        let used = self.textarea.value().encode_utf16().count() as i64;
        let remaining = self.limits.max_length - used;

        self.counter.set_text(&remaining.to_string());
        let color = if remaining < self.limits.warn_below {
            self.limits.warn_color.as_str()
        } else {
            "inherit"
        };
        self.counter.set_style("color", color);
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeNode;

    fn counter() -> (CommentCounter<FakeNode>, FakeNode, FakeNode) {
        let textarea = FakeNode::new();
        let count = FakeNode::new().with_text("1000");
        let counter = CommentCounter::new(textarea.clone(), count.clone(), CommentLimits::default());
        (counter, textarea, count)
    }

    #[test]
    fn test_counts_down() {
        let (counter, textarea, count) = counter();
        textarea.set_value("Glory to God");

        assert_eq!(counter.on_input(), 988);
        assert_eq!(count.text(), "988");
        assert_eq!(count.style("color").as_deref(), Some("inherit"));
    }

    #[test]
    fn test_warns_below_threshold() {
        let (counter, textarea, count) = counter();

        textarea.set_value(&"a".repeat(950));
        assert_eq!(counter.on_input(), 50);
        assert_eq!(count.style("color").as_deref(), Some("inherit"));

        textarea.set_value(&"a".repeat(951));
        assert_eq!(counter.on_input(), 49);
        assert_eq!(count.style("color").as_deref(), Some("#dc3545"));

        textarea.set_value("");
        counter.on_input();
        assert_eq!(count.style("color").as_deref(), Some("inherit"));
    }

    #[test]
    fn test_counts_utf16_units() {
        let (counter, textarea, _) = counter();
        // one BMP char, one astral char
        textarea.set_value("☦𝔄");
        assert_eq!(counter.on_input(), 997);
    }
}
