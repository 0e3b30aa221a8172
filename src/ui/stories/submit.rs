use crate::form::{FormData, SubmitHandler};
use crate::ui::core::{Action, StoryKind};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// Serializes submitted data to JSON and reports it on the action channel
pub struct ChannelSubmitHandler {
    story: StoryKind,
    sender: mpsc::UnboundedSender<Action>,
}

impl ChannelSubmitHandler {
    pub fn new(story: StoryKind, sender: mpsc::UnboundedSender<Action>) -> Self {
        Self { story, sender }
    }
}

#[async_trait]
impl SubmitHandler for ChannelSubmitHandler {
    async fn on_submit(&mut self, data: FormData) {
        let payload = match serde_json::to_string_pretty(&data) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Submit: could not serialize {} data: {}", self.story.title(), e);
                return;
            }
        };
        log::info!("Submit: {} -> {}", self.story.title(), payload);
        let _ = self.sender.send(Action::FormSubmitted {
            story: self.story,
            payload,
        });
    }
}
