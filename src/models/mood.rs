use serde::Serialize;

/// One row of the fixed score table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodOption {
    #[serde(skip)]
    pub score: i32,
    pub emoji: &'static str,
    pub label: &'static str,
}

impl MoodOption {
    /// Key used by the summary distribution, e.g. `"🙂 Happy"`.
    pub fn display(&self) -> String {
        format!("{} {}", self.emoji, self.label)
    }
}

pub const MIN_SCORE: i32 = 1;
pub const MAX_SCORE: i32 = 5;

pub static MOOD_OPTIONS: [MoodOption; 5] = [
    MoodOption { score: 1, emoji: "😢", label: "Very Sad" },
    MoodOption { score: 2, emoji: "😕", label: "Sad" },
    MoodOption { score: 3, emoji: "😐", label: "Neutral" },
    MoodOption { score: 4, emoji: "🙂", label: "Happy" },
    MoodOption { score: 5, emoji: "😄", label: "Very Happy" },
];

/// Look up the table row for `score`, or `None` when it is outside 1..=5.
pub fn mood_for(score: i32) -> Option<&'static MoodOption> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return None;
    }
    MOOD_OPTIONS.get((score - MIN_SCORE) as usize)
}
