use std::time::Duration;

/// Truncate a string to at most `max_chars` characters without splitting a code point
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Fixed pause inserted between sequential page visits
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    delay: Duration,
}

impl Throttle {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Sleep for the configured delay; a zero delay returns immediately
    pub async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        ::log::trace!("Pausing {:?} before next request", self.delay);
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("", 3), "");
        // Multi-byte characters count as one
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
    }

    #[tokio::test]
    async fn test_zero_delay_does_not_sleep() {
        let throttle = Throttle::new(Duration::ZERO);
        let start = std::time::Instant::now();
        throttle.pause().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_pause_waits_for_delay() {
        let throttle = Throttle::new(Duration::from_millis(20));
        let start = std::time::Instant::now();
        throttle.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
