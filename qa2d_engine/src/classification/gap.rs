//! Gap types: where the answer belongs in the declarative sentence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification result, listed in rule priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GapType {
    /// "What happened to X?": answer goes after X
    #[serde(rename = "WHAT_HAPPENED_TO")]
    WhatHappenedTo,
    #[serde(rename = "WHAT_HAPPENED")]
    WhatHappened,
    /// Wh-word left in place ("You saw what?")
    #[serde(rename = "NO_WH_MOV")]
    NoWhMovement,
    /// Adverbial or prepositional complement
    #[serde(rename = "COMPL")]
    Complement,
    #[serde(rename = "SUBJ")]
    Subject,
    /// The answer replaces a form of `do`
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "DOBJ")]
    DirectObject,
}

impl GapType {
    pub const ALL: [GapType; 7] = [
        GapType::WhatHappenedTo,
        GapType::WhatHappened,
        GapType::NoWhMovement,
        GapType::Complement,
        GapType::Subject,
        GapType::Verb,
        GapType::DirectObject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GapType::WhatHappenedTo => "WHAT_HAPPENED_TO",
            GapType::WhatHappened => "WHAT_HAPPENED",
            GapType::NoWhMovement => "NO_WH_MOV",
            GapType::Complement => "COMPL",
            GapType::Subject => "SUBJ",
            GapType::Verb => "VERB",
            GapType::DirectObject => "DOBJ",
        }
    }

    /// Gap types whose auxiliary or copula is moved back into declarative order
    pub fn moves_auxiliary(&self) -> bool {
        matches!(
            self,
            GapType::Complement | GapType::DirectObject | GapType::Verb
        )
    }
}

impl fmt::Display for GapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_names_match_display() {
        for gap in GapType::ALL {
            let json = serde_json::to_string(&gap).unwrap();
            assert_eq!(json, format!("\"{}\"", gap));
        }
    }

    #[test]
    fn test_auxiliary_moving_types() {
        assert!(GapType::Complement.moves_auxiliary());
        assert!(GapType::Verb.moves_auxiliary());
        assert!(!GapType::Subject.moves_auxiliary());
        assert!(!GapType::WhatHappened.moves_auxiliary());
    }
}
