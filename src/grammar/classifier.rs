use regex::Regex;
use std::{fmt, sync::LazyLock};

/// Shortest token still treated as a verb. Two-letter words like "eu" fall
/// through to phrase correction.
pub const MIN_VERB_LENGTH: usize = 3;

static VERB_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-záàâãéêíóôõúçñü]+$").expect("verb token pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// A single inflected verb, answered with a conjugation table.
    VerbForm,
    /// Anything else, answered with a grammar correction.
    Phrase,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VerbForm => "verb_form",
            Self::Phrase => "phrase",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(text: &str) -> Classification {
    let candidate = text.trim().to_lowercase();

    if VERB_TOKEN.is_match(&candidate) && candidate.chars().count() >= MIN_VERB_LENGTH {
        Classification::VerbForm
    } else {
        Classification::Phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("correr")]
    #[case("falar")]
    #[case("falou")]
    #[case("falarei")]
    #[case("começar")]
    #[case("pôr")]
    #[case("três")]
    #[case("Falar")]
    #[case("CORRIA")]
    #[case("  correria \n")]
    fn test_verb_forms(#[case] input: &str) {
        assert_eq!(classify(input), Classification::VerbForm);
    }

    #[rstest]
    #[case("eu gosto de pizza")]
    #[case("Ontem eu foi ao mercado")]
    #[case("eu")]
    #[case("ir")]
    #[case("é")]
    #[case("falar!")]
    #[case("fal4r")]
    #[case("guarda-chuva")]
    #[case("falar.")]
    #[case("")]
    #[case("   ")]
    fn test_phrases(#[case] input: &str) {
        assert_eq!(classify(input), Classification::Phrase);
    }

    #[test]
    fn test_length_floor_counts_characters_not_bytes() {
        // "pôr" is 4 bytes but 3 characters.
        assert_eq!("pôr".len(), 4);
        assert_eq!(classify("pôr"), Classification::VerbForm);
        // "dê" is 3 bytes but only 2 characters.
        assert_eq!(classify("dê"), Classification::Phrase);
    }

    #[test]
    fn test_classify_is_pure() {
        for input in ["correr", "eu gosto de pizza", "eu"] {
            assert_eq!(classify(input), classify(input));
        }
    }
}
