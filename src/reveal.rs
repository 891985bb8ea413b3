/// Share of an element that must be on screen before it is revealed.
pub const REVEAL_AMOUNT: f64 = 0.5;

/// One-way switch for "animate in the first time it is seen".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealLatch {
    amount: f64,
    revealed: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(REVEAL_AMOUNT)
    }
}

impl RevealLatch {
    pub fn new(amount: f64) -> Self {
        Self {
            amount: amount.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds the currently visible ratio. Returns `true` only on the call that
    /// flips the latch.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.revealed || visible_ratio < self.amount {
            return false;
        }
        self.revealed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_flips_once() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.49));
        assert!(!latch.is_revealed());

        assert!(latch.observe(0.5));
        assert!(latch.is_revealed());

        assert!(!latch.observe(1.0));
        assert!(!latch.observe(0.0));
        assert!(latch.is_revealed());
    }

    #[test]
    fn test_amount_is_clamped() {
        let mut latch = RevealLatch::new(3.0);
        assert!(latch.observe(1.0));

        let mut latch = RevealLatch::new(-1.0);
        assert!(latch.observe(0.0));
    }
}
