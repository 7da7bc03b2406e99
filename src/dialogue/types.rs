use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The pending follow-up a yes/no answer resumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Task {
    None,
    ShouldListConstituenciesForRegion,
    ConstituencyMspInformation,
    AnythingFurther,
}

impl Default for Task {
    fn default() -> Self {
        Self::None
    }
}

/// Per-conversation state. Everything a follow-up needs lives here, including
/// the last surfaced MSP; nothing is shared across sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub task: Task,
    pub region: Option<String>,
    pub constituency: Option<String>,
    pub msp: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            task: Task::None,
            region: None,
            constituency: None,
            msp: None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// What the voice platform should do with the turn's speech.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Directive {
    /// Speak and keep the session open, re-prompting on silence.
    Ask {
        speech: String,
        reprompt: Option<String>,
    },
    /// Speak and end the session.
    Tell { speech: String },
    /// Say nothing (session-ended cleanup).
    Silent,
}

impl Directive {
    pub fn ask(speech: impl Into<String>) -> Self {
        Directive::Ask {
            speech: speech.into(),
            reprompt: None,
        }
    }

    pub fn ask_with_reprompt(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Directive::Ask {
            speech: speech.into(),
            reprompt: Some(reprompt.into()),
        }
    }

    pub fn tell(speech: impl Into<String>) -> Self {
        Directive::Tell {
            speech: speech.into(),
        }
    }

    pub fn speech(&self) -> Option<&str> {
        match self {
            Directive::Ask { speech, .. } | Directive::Tell { speech } => Some(speech),
            Directive::Silent => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Recognized intents, already parsed out of the platform request.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    Launch,
    SetRegion { region: String },
    SetConstituency { constituency: String },
    MspInformationByName { msp: Option<String> },
    ListRegions,
    Yes,
    No,
    Help,
    About,
    Stop,
    Cancel,
    SessionEnded,
}

/// The platform boundary: intent name plus slot values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentRequest {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, String>,
}

impl Intent {
    /// Maps a platform request to an intent. A recognized name with its
    /// required slot missing yields `None`, which the controller answers with
    /// the didn't-understand reprompt.
    pub fn from_request(request: &IntentRequest) -> Option<Intent> {
        let slot = |key: &str| request.slots.get(key).cloned();
        match request.name.as_str() {
            "LaunchRequest" => Some(Intent::Launch),
            "SetRegion" => slot("region").map(|region| Intent::SetRegion { region }),
            "SetConstituency" => {
                slot("constituency").map(|constituency| Intent::SetConstituency { constituency })
            }
            "MSPInformationByName" => Some(Intent::MspInformationByName { msp: slot("msp") }),
            "ListRegions" => Some(Intent::ListRegions),
            "About" => Some(Intent::About),
            "AMAZON.YesIntent" => Some(Intent::Yes),
            "AMAZON.NoIntent" => Some(Intent::No),
            "AMAZON.HelpIntent" => Some(Intent::Help),
            "AMAZON.StopIntent" => Some(Intent::Stop),
            "AMAZON.CancelIntent" => Some(Intent::Cancel),
            "SessionEndedRequest" => Some(Intent::SessionEnded),
            _ => None,
        }
    }
}
