use std::sync::Arc;

use tracing::{info, warn};

use crate::api::client::{paths, Fetch};
use crate::reference::{ReferenceError, ReferenceTables};
use crate::speech::compiler::{
    compile_constituency, compile_msp, compile_region, compile_region_constituency_list, Compiled,
};
use crate::speech::text::join_spoken;

use super::types::{Answer, Directive, Intent, IntentRequest, Session, Task};

const SERVICE_ISSUES: &str =
    "We seem to be experiencing issues right now. Please try again later.";
const NOT_UNDERSTOOD: &str = "I did not understand the request, how can I help you?";
const NOT_UNDERSTOOD_REPROMPT: &str = "How can I help you?";
const REGION_NOT_RECOGNISED: &str =
    "I did not recognise the region, please try again or say list regions.";
const REGION_NOT_RECOGNISED_REPROMPT: &str = "Try again or list regions.";
const CONSTITUENCY_NOT_RECOGNISED: &str =
    "I did not recognise the constituency, please try again.";
const CONSTITUENCY_NOT_RECOGNISED_REPROMPT: &str = "Try again.";
const REGION_NOT_SET: &str =
    "The region does not seem to be set, which region would you like information for?";
const REGION_NOT_SET_REPROMPT: &str = "Which region would you like information for?";
const WHICH_MSP: &str = "Which MSP would you like to know about?";
const HELP: &str = "I can give you information about your constituency, for example you can say \
                    ask me tell me about the Dundee East constituency or ask me about a specific \
                    MSP by saying tell me about Shona Robison. What would you like to know?";
const HELP_REPROMPT: &str = "How would you like me to help you?";
const ABOUT: &str = "Know your MSP is a companion skill to the site know your msp dot com. We \
                     utilise the API located on data dot parliament dot scot. Our aim is to make \
                     it easy to get relevant information about the Scottish Parliament and your \
                     constituency. For more information, visit know your msp dot com.";

/// What a yes/no answer does while a task is pending.
#[derive(Debug, Clone, Copy)]
enum FollowUp {
    ListConstituencies,
    MspDetail,
    ContinuePrompt,
    DeclineToAnythingFurther,
    Farewell,
}

/// Transition table keyed by (task, answer). Yes and No under
/// ConstituencyMspInformation deliberately share a row: either answer to the
/// "know more about {msp}?" question flows into the MSP detail, and the table
/// keeps that symmetry reviewable. Pairs with no row fall back to a reprompt.
const TRANSITIONS: &[(Task, Answer, FollowUp)] = &[
    (
        Task::ShouldListConstituenciesForRegion,
        Answer::Yes,
        FollowUp::ListConstituencies,
    ),
    (
        Task::ShouldListConstituenciesForRegion,
        Answer::No,
        FollowUp::DeclineToAnythingFurther,
    ),
    (
        Task::ConstituencyMspInformation,
        Answer::Yes,
        FollowUp::MspDetail,
    ),
    (
        Task::ConstituencyMspInformation,
        Answer::No,
        FollowUp::MspDetail,
    ),
    (Task::AnythingFurther, Answer::Yes, FollowUp::ContinuePrompt),
    (Task::AnythingFurther, Answer::No, FollowUp::Farewell),
];

/// Dispatches intents, owns the reference tables and the fetch seam, and
/// mutates the per-session task state.
pub struct SkillEngine {
    tables: ReferenceTables,
    fetch: Arc<dyn Fetch>,
}

impl SkillEngine {
    pub fn new(fetch: Arc<dyn Fetch>) -> Result<Self, ReferenceError> {
        Ok(Self {
            tables: ReferenceTables::load()?,
            fetch,
        })
    }

    /// Platform entry point: parse the raw request, then handle it. An
    /// unrecognized name or missing slot gets the didn't-understand reprompt.
    pub async fn handle_request(
        &self,
        session: &mut Session,
        request: &IntentRequest,
    ) -> Directive {
        match Intent::from_request(request) {
            Some(intent) => self.handle(session, intent).await,
            None => {
                info!(intent = %request.name, "unrecognized request");
                Directive::ask_with_reprompt(NOT_UNDERSTOOD, NOT_UNDERSTOOD_REPROMPT)
            }
        }
    }

    pub async fn handle(&self, session: &mut Session, intent: Intent) -> Directive {
        match intent {
            Intent::Launch => {
                Directive::ask_with_reprompt("How may I help you?", "How may I help you?")
            }
            Intent::SetRegion { region } => self.region_details(session, &region).await,
            Intent::SetConstituency { constituency } => {
                self.constituency_details(session, &constituency).await
            }
            Intent::MspInformationByName { msp } => match msp {
                Some(name) => self.msp_details(session, &name).await,
                None => Directive::ask_with_reprompt(WHICH_MSP, WHICH_MSP),
            },
            Intent::ListRegions => self.list_regions(),
            Intent::Yes => self.follow_up(session, Answer::Yes).await,
            Intent::No => self.follow_up(session, Answer::No).await,
            Intent::Help => Directive::ask_with_reprompt(HELP, HELP_REPROMPT),
            Intent::About => Directive::tell(ABOUT),
            Intent::Stop | Intent::Cancel => Directive::tell("Goodbye!"),
            Intent::SessionEnded => Directive::Silent,
        }
    }

    async fn region_details(&self, session: &mut Session, spoken: &str) -> Directive {
        let Some(record) = self.tables.region(spoken) else {
            return Directive::ask_with_reprompt(
                REGION_NOT_RECOGNISED,
                REGION_NOT_RECOGNISED_REPROMPT,
            );
        };

        let body = match self
            .fetch
            .fetch(
                paths::REGION_DETAILS,
                &[("code", record.region_id.to_string())],
            )
            .await
        {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, region = %record.name, "region details fetch failed");
                return Directive::tell(SERVICE_ISSUES);
            }
        };

        match compile_region(&body) {
            Compiled::Success { text, .. } => {
                session.task = Task::ShouldListConstituenciesForRegion;
                session.region = Some(record.name.clone());
                Directive::ask(text)
            }
            Compiled::NotFound { text } => Directive::ask(text),
            Compiled::Malformed { text } => Directive::tell(text),
        }
    }

    async fn constituency_details(&self, session: &mut Session, spoken: &str) -> Directive {
        let Some(record) = self.tables.constituency(spoken) else {
            return self.ambiguous_constituency(spoken);
        };

        let body = match self
            .fetch
            .fetch(
                paths::CONSTITUENCY_DETAILS,
                &[("code", record.constituency_id.to_string())],
            )
            .await
        {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, constituency = %record.name, "constituency details fetch failed");
                return Directive::tell(SERVICE_ISSUES);
            }
        };

        match compile_constituency(&body) {
            Compiled::Success {
                text,
                follow_up_msp: Some(msp),
            } => {
                session.task = Task::ConstituencyMspInformation;
                session.constituency = Some(record.name.clone());
                session.msp = Some(msp);
                Directive::ask(text)
            }
            Compiled::Success { text, .. } => {
                // Defunct constituency: nothing to follow up on, the text
                // already asks whether anything else is needed.
                session.task = Task::AnythingFurther;
                session.constituency = Some(record.name.clone());
                Directive::ask(text)
            }
            Compiled::NotFound { text } => Directive::ask(text),
            Compiled::Malformed { text } => Directive::tell(text),
        }
    }

    /// The direct lookup missed; offer the candidates for an ambiguous spoken
    /// name. Leaves task state untouched: the user must re-specify in full.
    fn ambiguous_constituency(&self, spoken: &str) -> Directive {
        let Some(entry) = self.tables.ambiguous_constituency(spoken) else {
            return Directive::ask_with_reprompt(
                CONSTITUENCY_NOT_RECOGNISED,
                CONSTITUENCY_NOT_RECOGNISED_REPROMPT,
            );
        };
        Directive::ask_with_reprompt(
            format!(
                "There are {} potential matches for {}. These are {}. Which would you like?",
                entry.matches.len(),
                entry.name,
                join_spoken(&entry.matches)
            ),
            "Which would you like?",
        )
    }

    async fn constituency_list(&self, session: &mut Session) -> Directive {
        let Some(region_name) = session.region.clone() else {
            return Directive::ask_with_reprompt(REGION_NOT_SET, REGION_NOT_SET_REPROMPT);
        };
        let Some(record) = self.tables.region(&region_name) else {
            return Directive::ask_with_reprompt(
                REGION_NOT_RECOGNISED,
                REGION_NOT_RECOGNISED_REPROMPT,
            );
        };

        let body = match self
            .fetch
            .fetch(
                paths::REGION_CONSTITUENCY_LIST,
                &[("code", record.region_id.to_string())],
            )
            .await
        {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, region = %record.name, "constituency list fetch failed");
                return Directive::tell(SERVICE_ISSUES);
            }
        };

        match compile_region_constituency_list(&body) {
            Compiled::Success { text, .. } => {
                session.task = Task::AnythingFurther;
                Directive::ask(text)
            }
            Compiled::NotFound { text } => Directive::ask(text),
            Compiled::Malformed { text } => Directive::tell(text),
        }
    }

    async fn msp_details(&self, session: &mut Session, name: &str) -> Directive {
        let body = match self
            .fetch
            .fetch(paths::MSP_DETAILS, &[("msp", name.to_string())])
            .await
        {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, msp = %name, "msp details fetch failed");
                return Directive::tell(SERVICE_ISSUES);
            }
        };

        match compile_msp(&body) {
            Compiled::Success { text, .. } => {
                session.task = Task::AnythingFurther;
                session.msp = Some(name.to_string());
                Directive::ask(text)
            }
            Compiled::NotFound { text } => Directive::ask_with_reprompt(text, WHICH_MSP),
            Compiled::Malformed { text } => Directive::tell(text),
        }
    }

    fn list_regions(&self) -> Directive {
        let names = self.tables.region_names();
        Directive::ask_with_reprompt(
            format!(
                "There are {} regions in Scotland, these are {}. Which would you like?",
                names.len(),
                join_spoken(&names)
            ),
            "Which would you like?",
        )
    }

    async fn follow_up(&self, session: &mut Session, answer: Answer) -> Directive {
        let action = TRANSITIONS
            .iter()
            .find(|(task, expected, _)| *task == session.task && *expected == answer)
            .map(|(_, _, action)| *action);

        match action {
            None => Directive::ask_with_reprompt(NOT_UNDERSTOOD, NOT_UNDERSTOOD_REPROMPT),
            Some(FollowUp::ListConstituencies) => self.constituency_list(session).await,
            Some(FollowUp::MspDetail) => match session.msp.clone() {
                Some(name) => self.msp_details(session, &name).await,
                None => Directive::ask_with_reprompt(WHICH_MSP, WHICH_MSP),
            },
            Some(FollowUp::ContinuePrompt) => {
                session.task = Task::None;
                Directive::ask_with_reprompt("Great, how else can I help?", "How else can I help?")
            }
            Some(FollowUp::DeclineToAnythingFurther) => {
                session.task = Task::AnythingFurther;
                Directive::ask_with_reprompt(
                    "No problem, is there anything else I can do for you?",
                    "Is there anything else I can do for you?",
                )
            }
            Some(FollowUp::Farewell) => {
                session.task = Task::None;
                Directive::tell("Thank you, come back soon.")
            }
        }
    }
}
