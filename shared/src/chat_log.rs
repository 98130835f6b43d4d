use crate::models::{ChatMessage, ChatTurn, Role};

/// Append-only conversation owned by one chat session.
///
/// Mutated through two operations only: [`ChatLog::append_local`] for the
/// user's own message and [`ChatLog::append_remote`] for streamed reply
/// fragments.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    /// Start a conversation with the character's greeting as its first message.
    pub fn seeded(greeting: &str) -> Self {
        if greeting.trim().is_empty() {
            tracing::warn!("Character profile missing valid greeting, starting with empty chat");
            return Self::default();
        }
        Self {
            messages: vec![ChatMessage::greeting(greeting)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Appends the user's message plus an empty assistant entry, keyed by
    /// `reply_id`, that the reply will stream into.
    pub fn append_local(&mut self, content: impl Into<String>, reply_id: impl Into<String>) {
        self.messages.push(ChatMessage::new(Role::User, content));
        self.messages.push(ChatMessage {
            id: reply_id.into(),
            role: Role::Assistant,
            content: String::new(),
        });
    }

    pub fn append_remote(&mut self, reply_id: &str, fragment: &str) {
        match self.messages.iter_mut().find(|m| m.id == reply_id) {
            Some(message) => message.content.push_str(fragment),
            None => tracing::warn!("Reply fragment for unknown message {}", reply_id),
        }
    }

    /// Drops a reply entry that never received any content.
    pub fn discard_if_empty(&mut self, reply_id: &str) {
        self.messages
            .retain(|m| m.id != reply_id || !m.content.is_empty());
    }

    /// History to send upstream; entries still waiting for content are skipped.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.messages
            .iter()
            .filter(|m| !m.content.is_empty())
            .map(ChatMessage::to_turn)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GREETING_MESSAGE_ID;

    #[test]
    fn seeding_with_greeting_yields_single_assistant_message() {
        let log = ChatLog::seeded("Hi.");
        assert_eq!(log.len(), 1);
        let first = &log.messages()[0];
        assert_eq!(first.role, Role::Assistant);
        assert_eq!(first.content, "Hi.");
        assert_eq!(first.id, GREETING_MESSAGE_ID);
    }

    #[test]
    fn blank_greeting_yields_empty_log() {
        assert!(ChatLog::seeded("  ").is_empty());
    }

    #[test]
    fn reply_streams_into_its_placeholder() {
        let mut log = ChatLog::seeded("Hi.");
        let reply = ChatMessage::new_id();
        log.append_local("How are you?", reply.clone());
        assert_eq!(log.history().len(), 2);

        log.append_remote(&reply, "Fine");
        log.append_remote(&reply, ", thanks.");

        let roles: Vec<Role> = log.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
        assert_eq!(log.messages()[2].content, "Fine, thanks.");
    }

    #[test]
    fn overlapping_replies_land_in_submission_order() {
        let mut log = ChatLog::seeded("Hi.");
        let (first, second) = (ChatMessage::new_id(), ChatMessage::new_id());
        log.append_local("first question", first.clone());
        log.append_local("second question", second.clone());

        // Fragments interleave, the second stream even finishes first
        log.append_remote(&second, "answer two");
        log.append_remote(&first, "answer ");
        log.append_remote(&first, "one");

        let contents: Vec<&str> = log.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(
            contents,
            vec![
                "Hi.",
                "first question",
                "answer one",
                "second question",
                "answer two"
            ]
        );
    }

    #[test]
    fn failed_reply_without_content_is_removed() {
        let mut log = ChatLog::seeded("Hi.");
        let reply = ChatMessage::new_id();
        log.append_local("hello?", reply.clone());
        log.discard_if_empty(&reply);
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[1].content, "hello?");

        let partial = ChatMessage::new_id();
        log.append_local("again", partial.clone());
        log.append_remote(&partial, "par");
        log.discard_if_empty(&partial);
        assert_eq!(log.len(), 4);
    }
}
