//! The converse loop: one turn, many rounds.

use tracing::{debug, info, warn};
use witty_common::new_correlation_id;

use crate::actions::SAY_ACTION;
use crate::entities;
use crate::response::{ResponseTag, TaggedResponse};
use crate::ConverseError;

use super::manager::ConversationSession;
use super::types::{DispatchGuard, Step, TurnSummary};

impl ConversationSession {
    /// Run one turn: send `message`, then follow up with empty requests
    /// until the service answers `stop`.
    ///
    /// Any error aborts the turn and leaves the session id unchanged. Slots
    /// merged by earlier rounds of the aborted turn stay in the context.
    pub async fn handle_turn(&mut self, message: Option<&str>) -> Result<TurnSummary, ConverseError> {
        let turn = new_correlation_id();
        let _dispatching = DispatchGuard::enter(&self.dispatching);

        let result = self.run_rounds(message, &turn).await;

        if let Err(ref e) = result {
            warn!(turn = %turn, session = %self.id, error = %e, "Turn aborted");
        }
        result
    }

    async fn run_rounds(
        &mut self,
        message: Option<&str>,
        turn: &str,
    ) -> Result<TurnSummary, ConverseError> {
        // Only the first round carries the user's message.
        let mut message = message;
        let mut rounds = 0;

        loop {
            if rounds >= self.max_rounds {
                return Err(ConverseError::MaxRoundsExceeded(self.max_rounds));
            }
            rounds += 1;

            let snapshot = self.context.lock().await.snapshot();
            let response = self
                .transport
                .send(&snapshot, &self.id, message.take())
                .await?;

            debug!(
                turn,
                session = %self.id,
                round = rounds,
                tag = %response.tag(),
                "Converse response"
            );

            match self.dispatch(&response).await? {
                Step::FollowUp => continue,
                Step::Stop => {
                    let closed_session = self.id.rotate();
                    info!(
                        turn,
                        closed = %closed_session,
                        session = %self.id,
                        rounds,
                        "Conversation stopped, session rotated"
                    );
                    return Ok(TurnSummary {
                        rounds,
                        closed_session,
                    });
                }
            }
        }
    }

    async fn dispatch(&self, response: &TaggedResponse) -> Result<Step, ConverseError> {
        match response.tag() {
            ResponseTag::Merge => {
                let patch = entities::extract_patch(response)?;
                debug!(slots = patch.len(), "Merging entities into context");
                self.context.lock().await.merge(patch);
                Ok(Step::FollowUp)
            }
            ResponseTag::Message => {
                self.invoke(SAY_ACTION, response).await?;
                Ok(Step::FollowUp)
            }
            ResponseTag::Action => {
                let name = response.action_name().ok_or_else(|| {
                    ConverseError::Decode("action response has no `action` name".into())
                })?;
                self.invoke(name, response).await?;
                Ok(Step::FollowUp)
            }
            ResponseTag::Stop => Ok(Step::Stop),
            ResponseTag::Unrecognized(tag) => Err(ConverseError::UnrecognizedTag(tag.clone())),
        }
    }

    async fn invoke(&self, name: &str, response: &TaggedResponse) -> Result<(), ConverseError> {
        let action = self.actions.lookup(name)?;
        debug!(action = name, session = %self.id, "Executing action");

        let mut context = self.context.lock().await;
        action
            .execute(&self.id, &mut context, response)
            .map_err(|source| ConverseError::Action {
                name: name.to_string(),
                source,
            })
    }
}
