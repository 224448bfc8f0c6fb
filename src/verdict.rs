//! Result classification — decides how the verdict is flagged.
//!
//! Literal keyword match on "toxic" / "red flag", case-insensitive. It does
//! not read the score and it misses verdicts written without those English
//! words. Keep it that way; the UI styling depends on exactly this rule.

use serde::{Deserialize, Serialize};

const ALERT_KEYWORDS: [&str; 2] = ["toxic", "red flag"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verdict {
    /// Rendered with warning/error styling.
    Alert,
    /// Rendered with success styling.
    Neutral,
}

impl Verdict {
    /// Whether the presentation layer should throw a celebration.
    pub fn celebrate(self) -> bool {
        matches!(self, Verdict::Neutral)
    }
}

pub fn classify(result_text: &str) -> Verdict {
    let lowered = result_text.to_lowercase();
    if ALERT_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        Verdict::Alert
    } else {
        Verdict::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toxic_score_is_alert() {
        assert_eq!(classify("Your Toxic Score is 80%"), Verdict::Alert);
    }

    #[test]
    fn healthy_chat_is_neutral() {
        let verdict = classify("This looks like a healthy, happy relationship!");
        assert_eq!(verdict, Verdict::Neutral);
        assert!(verdict.celebrate());
    }

    #[test]
    fn red_flag_phrase_matches_any_case() {
        assert_eq!(classify("Huge RED FLAG energy here"), Verdict::Alert);
        assert!(!Verdict::Alert.celebrate());
    }

    #[test]
    fn keyword_inside_longer_word_still_matches() {
        assert_eq!(classify("Non-toxicity aside, ..."), Verdict::Alert);
    }

    #[test]
    fn non_english_verdict_is_always_neutral() {
        assert_eq!(classify("Bohot zehreela rishta hai, 90% score"), Verdict::Neutral);
    }

    #[test]
    fn split_phrase_does_not_match() {
        assert_eq!(classify("red\nflag"), Verdict::Neutral);
    }
}
