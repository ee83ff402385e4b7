/// Best score seen in any round of this process. Never written to disk.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct HighScore {
    value: u32,
}

impl HighScore {
    #[must_use]
    pub fn value(self) -> u32 {
        self.value
    }

    /// Records a live score. Returns true when the record was refreshed.
    ///
    /// Equal scores refresh too, so the first round to tie the record
    /// re-announces it.
    pub fn record(&mut self, score: u32) -> bool {
        if score >= self.value {
            self.value = score;
            return true;
        }
        false
    }
}
