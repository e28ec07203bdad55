//! Wallet profile domain model

use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// Locally held display name and seed phrase, session-only
///
/// The phrase is never derived into keys; only its shape is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    /// Space-normalized phrase of 12-24 alphabetic words
    pub seed_phrase: String,
}

impl Profile {
    /// Validate and build a profile from raw user input
    ///
    /// Trims the name, collapses internal whitespace in the phrase, and
    /// requires 12-24 alphabetic words.
    pub fn parse(name: &str, seed_phrase: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::validation("Wallet name is required."));
        }

        let words: Vec<&str> = seed_phrase.split_whitespace().collect();
        if words.len() < 12 || words.len() > 24 {
            return Err(Error::validation(
                "Seed phrase must contain between 12 and 24 words.",
            ));
        }
        if words
            .iter()
            .any(|word| !word.chars().all(|c| c.is_alphabetic()))
        {
            return Err(Error::validation(
                "Seed phrase should contain only alphabetic words.",
            ));
        }

        Ok(Self {
            name: name.to_string(),
            seed_phrase: words.join(" "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrase(words: usize) -> String {
        vec!["maple"; words].join(" ")
    }

    #[test]
    fn test_accepts_12_to_24_words() {
        for count in [12, 18, 24] {
            let profile = Profile::parse("Main", &phrase(count)).unwrap();
            assert_eq!(profile.seed_phrase.split(' ').count(), count);
        }
    }

    #[test]
    fn test_rejects_word_counts_out_of_range() {
        assert!(Profile::parse("Main", &phrase(11)).is_err());
        assert!(Profile::parse("Main", &phrase(25)).is_err());
        assert!(Profile::parse("Main", "").is_err());
    }

    #[test]
    fn test_rejects_non_alphabetic_tokens() {
        let mut words = phrase(12);
        words.push_str(" word2"); // 13th token has a digit
        assert!(Profile::parse("Main", &words).is_err());
    }

    #[test]
    fn test_requires_name() {
        assert!(Profile::parse("", &phrase(12)).is_err());
        assert!(Profile::parse("   ", &phrase(12)).is_err());
    }

    #[test]
    fn test_normalizes_whitespace() {
        let raw = "  alpha   beta\tgamma delta epsilon zeta eta theta iota kappa lambda mu  ";
        let profile = Profile::parse(" Main ", raw).unwrap();
        assert_eq!(profile.name, "Main");
        assert_eq!(
            profile.seed_phrase,
            "alpha beta gamma delta epsilon zeta eta theta iota kappa lambda mu"
        );
    }
}
