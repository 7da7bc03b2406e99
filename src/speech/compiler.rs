//! Turns raw API bodies into spoken text, one compile function per entity
//! kind. All four are pure functions over the body string.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::types::{
    ConstituencyDetails, MspDetails, MspSummary, RegionConstituencyList, RegionDetails,
};
use crate::speech::text::{human_date, join_spoken};

pub const DIFFICULTIES: &str = "We seem to have run into difficulties. Please try again later.";
pub const CONSTITUENCY_NOT_FOUND: &str =
    "We were unable to find the specified constituency. What is your constituency?";
pub const REGION_NOT_FOUND: &str =
    "We were unable to find the specified region. What is your region?";
pub const MSP_NOT_FOUND: &str = "We were unable to find the MSP you requested.";

/// Outcome of compiling one API body.
///
/// `follow_up_msp` is set only for a live constituency answer: it carries the
/// representative the text offers to talk about, so the controller can stash
/// it in the session instead of in shared state.
#[derive(Debug, Clone, PartialEq)]
pub enum Compiled {
    Success {
        text: String,
        follow_up_msp: Option<String>,
    },
    /// The API answered but did not know the entity; prompts for re-entry.
    NotFound { text: String },
    /// Body did not parse as the expected shape.
    Malformed { text: String },
}

impl Compiled {
    pub fn is_error(&self) -> bool {
        !matches!(self, Compiled::Success { .. })
    }

    pub fn text(&self) -> &str {
        match self {
            Compiled::Success { text, .. } => text,
            Compiled::NotFound { text } => text,
            Compiled::Malformed { text } => text,
        }
    }

    fn success(text: String) -> Self {
        Compiled::Success {
            text,
            follow_up_msp: None,
        }
    }

    fn malformed() -> Self {
        Compiled::Malformed {
            text: DIFFICULTIES.to_string(),
        }
    }
}

/// Two-stage parse: detect the API's failure envelope before demanding the
/// full payload shape, so "not found" and "garbage" stay distinguishable.
fn parse_body<T: DeserializeOwned>(body: &str, not_found: &'static str) -> Result<T, Compiled> {
    let value: Value = serde_json::from_str(body).map_err(|_| Compiled::malformed())?;
    let failed = value
        .get("result")
        .and_then(Value::as_str)
        .map(|r| r.eq_ignore_ascii_case("failure"))
        .unwrap_or(false);
    if failed {
        return Err(Compiled::NotFound {
            text: not_found.to_string(),
        });
    }
    serde_json::from_value(value).map_err(|_| Compiled::malformed())
}

fn msp_with_party(msp: &MspSummary) -> String {
    format!("{} from {}", msp.name, msp.party.name)
}

pub fn compile_constituency(body: &str) -> Compiled {
    let details: ConstituencyDetails = match parse_body(body, CONSTITUENCY_NOT_FOUND) {
        Ok(d) => d,
        Err(c) => return c,
    };
    let constituency = details.constituency;

    if let Some(until) = &constituency.activeuntil {
        return Compiled::success(format!(
            "The {} constituency was replaced on {}. Is there anything else I can help with?",
            constituency.name,
            human_date(until)
        ));
    }

    // A live constituency always carries its member on the wire.
    let Some(msp) = constituency.msp else {
        return Compiled::malformed();
    };
    Compiled::Success {
        text: format!(
            "The {} constituency is represented by {}. Would you like to know more about {}?",
            constituency.name,
            msp_with_party(&msp),
            msp.name
        ),
        follow_up_msp: Some(msp.name),
    }
}

pub fn compile_region(body: &str) -> Compiled {
    let details: RegionDetails = match parse_body(body, REGION_NOT_FOUND) {
        Ok(d) => d,
        Err(c) => return c,
    };
    let region = details.region;

    let mut output = if let Some(until) = &region.activeuntil {
        format!(
            "The {} region was replaced on {}.",
            region.name,
            human_date(until)
        )
    } else if region.msps.is_empty() {
        format!("The {} region currently has no sitting MSP's.", region.name)
    } else {
        let members: Vec<String> = region.msps.iter().map(msp_with_party).collect();
        format!(
            "The {} region is represented by {} MSP's. These are {}.",
            region.name,
            region.msps.len(),
            join_spoken(&members)
        )
    };

    // Offered for defunct regions too; the list endpoint still answers for them.
    output.push_str(&format!(
        " Would you like to hear a list of constituencies in {}?",
        region.name
    ));
    Compiled::success(output)
}

pub fn compile_region_constituency_list(body: &str) -> Compiled {
    let details: RegionConstituencyList = match parse_body(body, REGION_NOT_FOUND) {
        Ok(d) => d,
        Err(c) => return c,
    };

    let mut output = format!(
        "The {} region has {} constituencies.",
        details.region,
        details.constituencies.len()
    );
    if !details.constituencies.is_empty() {
        let names: Vec<&str> = details
            .constituencies
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        output.push_str(&format!(" These are {}.", join_spoken(&names)));
    }
    output.push_str(" Is there anything else I can help with?");
    Compiled::success(output)
}

pub fn compile_msp(body: &str) -> Compiled {
    let details: MspDetails = match parse_body(body, MSP_NOT_FOUND) {
        Ok(d) => d,
        Err(c) => return c,
    };
    let msp = details.msp;

    // The parliament records male, female and unspecified.
    let pronoun = match msp.gender.as_deref() {
        Some("Female") => "She is",
        Some("Male") => "He is",
        _ => "They are",
    };

    let mut output = format!("{} is a member of {}.", msp.name, msp.party.name);
    if let Some(region) = &msp.region {
        output.push_str(&format!(
            " {} the elected MSP for the region {}.",
            pronoun, region.name
        ));
    } else if let Some(constituency) = &msp.constituency {
        output.push_str(&format!(
            " {} the elected MSP for the constituency {}.",
            pronoun, constituency.name
        ));
    }
    output.push_str(" Is there anything else you would like to know?");
    Compiled::success(output)
}
