//=========================================================================
// Completion Flag
//=========================================================================
//
// One-way switch that ends a driver run successfully.
//
// Starts cleared, is set by `end_game`, and is never reset for the rest of
// the run. Owned by the `Runtime` handed to hooks, so each run gets its own.
//
//=========================================================================

/// Monotone `false → true` completion signal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CompletionFlag {
    ended: bool,
}

impl CompletionFlag {
    /// Creates a cleared flag.
    pub fn new() -> Self {
        Self { ended: false }
    }

    /// Sets the flag.
    ///
    /// Returns `true` only on the call that actually flipped it.
    pub fn signal(&mut self) -> bool {
        let first = !self.ended;
        self.ended = true;
        first
    }

    /// Returns whether completion has been signaled.
    pub fn is_set(&self) -> bool {
        self.ended
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_cleared() {
        assert!(!CompletionFlag::new().is_set());
        assert!(!CompletionFlag::default().is_set());
    }

    #[test]
    fn signal_sets_flag() {
        let mut flag = CompletionFlag::new();
        assert!(flag.signal());
        assert!(flag.is_set());
    }

    #[test]
    fn repeated_signal_is_idempotent() {
        let mut flag = CompletionFlag::new();
        flag.signal();
        assert!(!flag.signal(), "second signal must not report a transition");
        assert!(!flag.signal());
        assert!(flag.is_set());
    }
}
