//! Wire shapes of the knowyourmsp API. Every response carries a `result`
//! string; entities may carry `activeuntil` marking them defunct.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Party {
    pub name: String,
}

/// Representative as embedded in region and constituency payloads.
#[derive(Debug, Clone, Deserialize)]
pub struct MspSummary {
    pub name: String,
    pub party: Party,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Named {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct ConstituencyDetails {
    pub result: String,
    pub constituency: ConstituencyBody,
}

#[derive(Debug, Deserialize)]
pub struct ConstituencyBody {
    pub name: String,
    #[serde(default)]
    pub activeuntil: Option<String>,
    #[serde(default)]
    pub msp: Option<MspSummary>,
}

#[derive(Debug, Deserialize)]
pub struct RegionDetails {
    pub result: String,
    pub region: RegionBody,
}

#[derive(Debug, Deserialize)]
pub struct RegionBody {
    pub name: String,
    #[serde(default)]
    pub activeuntil: Option<String>,
    #[serde(default)]
    pub msps: Vec<MspSummary>,
}

#[derive(Debug, Deserialize)]
pub struct RegionConstituencyList {
    pub result: String,
    pub region: String,
    #[serde(default)]
    pub constituencies: Vec<Named>,
}

#[derive(Debug, Deserialize)]
pub struct MspDetails {
    pub result: String,
    pub msp: MspBody,
}

/// `region` and `constituency` are mutually exclusive on the wire; the
/// compiler checks region first.
#[derive(Debug, Deserialize)]
pub struct MspBody {
    pub name: String,
    pub party: Party,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub region: Option<Named>,
    #[serde(default)]
    pub constituency: Option<Named>,
}
