//! Prompt Parameters
//!
//! Typed option values interpolated into the feature templates. Every enum
//! keeps a `Custom` variant: values outside the known set are carried through
//! verbatim instead of being rejected.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

macro_rules! prompt_param {
    (
        $(#[$meta:meta])*
        $name:ident (default = $default:ident) {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
            /// Value outside the known set, kept as given
            Custom(String),
        }

        impl $name {
            /// Known wire values, in declaration order
            pub const KNOWN: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $text,)+
                    $name::Custom(value) => value.as_str(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Custom(_))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value.trim().to_lowercase().as_str() {
                    $($text => $name::$variant,)+
                    _ => $name::Custom(value.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.as_str().to_string()
            }
        }

        impl FromStr for $name {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

prompt_param! {
    /// Audience lens for the application-vision feature
    Persona (default = Default) {
        Default => "default",
        /// Technical implementations
        Engineer => "engineer",
        /// Creative and visual applications
        Designer => "designer",
        /// Academic and scientific uses
        Researcher => "researcher",
        /// Business and startup applications
        Entrepreneur => "entrepreneur",
    }
}

prompt_param! {
    /// How much detail a concept explanation goes into
    ExplanationDepth (default = Tldr) {
        Tldr => "tldr",
        Eli5 => "eli5",
        Deepdive => "deepdive",
    }
}

prompt_param! {
    /// Stylistic voice for concept explanations
    ToneMode (default = Default) {
        Default => "default",
        Gamer => "gamer",
        Chef => "chef",
        Rapper => "rapper",
        Pirate => "pirate",
        Scientist => "scientist",
    }
}

prompt_param! {
    /// Learner's current level for roadmap generation
    SkillLevel (default = Beginner) {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
}

prompt_param! {
    TimeCommitment (default = PartTime) {
        PartTime => "part-time",
        FullTime => "full-time",
    }
}

prompt_param! {
    /// Quiz difficulty, also reported per generated question
    Difficulty (default = Medium) {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
    }
}

impl ExplanationDepth {
    /// The three depths the explainer renders side by side
    pub const ALL: [ExplanationDepth; 3] = [
        ExplanationDepth::Tldr,
        ExplanationDepth::Eli5,
        ExplanationDepth::Deepdive,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_parse_case_insensitively() {
        assert_eq!(Persona::from("Engineer"), Persona::Engineer);
        assert_eq!(ToneMode::from(" pirate "), ToneMode::Pirate);
        assert_eq!(TimeCommitment::from("FULL-TIME"), TimeCommitment::FullTime);
        assert_eq!("eli5".parse::<ExplanationDepth>().unwrap(), ExplanationDepth::Eli5);
    }

    #[test]
    fn test_unknown_values_pass_through_verbatim() {
        let persona = Persona::from("Astronaut");
        assert_eq!(persona, Persona::Custom("Astronaut".to_string()));
        assert_eq!(persona.as_str(), "Astronaut");
        assert!(!persona.is_known());

        let difficulty: Difficulty = "brutal".parse().unwrap();
        assert_eq!(difficulty.to_string(), "brutal");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Persona::default(), Persona::Default);
        assert_eq!(SkillLevel::default(), SkillLevel::Beginner);
        assert_eq!(TimeCommitment::default(), TimeCommitment::PartTime);
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(ToneMode::default(), ToneMode::Default);
    }

    #[test]
    fn test_serde_as_plain_strings() {
        let json = serde_json::to_string(&TimeCommitment::PartTime).unwrap();
        assert_eq!(json, "\"part-time\"");

        let parsed: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(parsed, Difficulty::Hard);

        let custom: ToneMode = serde_json::from_str("\"poet\"").unwrap();
        assert_eq!(custom, ToneMode::Custom("poet".to_string()));
        assert_eq!(serde_json::to_string(&custom).unwrap(), "\"poet\"");
    }

    #[test]
    fn test_known_lists() {
        assert_eq!(ToneMode::KNOWN.len(), 6);
        assert_eq!(Persona::KNOWN.len(), 5);
        assert_eq!(ExplanationDepth::ALL.len(), ExplanationDepth::KNOWN.len());
    }
}
