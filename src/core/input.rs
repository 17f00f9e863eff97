//=========================================================================
// Headless Input
//=========================================================================
//
// Keyboard query stub. There is no window and no event source, so no key
// is ever down. Key codes are the raw integers generated game code uses.
//
//=========================================================================

/// Input source that never reports a pressed key.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeadlessInput;

impl HeadlessInput {
    pub fn new() -> Self {
        Self
    }

    /// Returns `false` for every key code.
    pub fn key_pressed(&self, _code: i32) -> bool {
        false
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_key_is_ever_pressed() {
        let input = HeadlessInput::new();
        for code in [i32::MIN, -1, 0, 1, 57, 1024, i32::MAX] {
            assert!(!input.key_pressed(code), "key {} reported pressed", code);
        }
    }
}
