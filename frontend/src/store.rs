use shared::chat_log::ChatLog;
use shared::models::CharacterProfile;
use shared::studio::Studio;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct State {
    pub studio: Studio,
    /// Conversation with the current profile; reset whenever a new one arrives
    pub chat: ChatLog,
}

impl State {
    pub fn profile(&self) -> Option<&CharacterProfile> {
        self.studio.profile()
    }
}

pub enum Action {
    GenerationStarted,
    GenerationFinished(Result<CharacterProfile, String>),
    GoBack,
    SendMessage { content: String, reply_id: String },
    AppendReply { reply_id: String, fragment: String },
    ReplyFailed { reply_id: String },
}

impl Reducible for State {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            Action::GenerationStarted => {
                next.studio.begin_generation();
            }
            Action::GenerationFinished(outcome) => {
                if next.studio.finish_generation(outcome)
                    && let Some(profile) = next.studio.profile()
                {
                    next.chat = ChatLog::seeded(&profile.greeting);
                }
            }
            Action::GoBack => {
                next.studio.go_back();
                next.chat = ChatLog::default();
            }
            Action::SendMessage { content, reply_id } => {
                if next.profile().is_some() {
                    next.chat.append_local(content, reply_id);
                }
            }
            Action::AppendReply { reply_id, fragment } => {
                next.chat.append_remote(&reply_id, &fragment);
            }
            Action::ReplyFailed { reply_id } => {
                next.chat.discard_if_empty(&reply_id);
            }
        }

        next.into()
    }
}

pub type StoreContext = UseReducerHandle<State>;

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(greeting: &str) -> CharacterProfile {
        CharacterProfile {
            name: "Mira".into(),
            enhanced_description: "A cartographer of dreams.".into(),
            image_url: "https://img.example/mira.png".into(),
            persona_prompt: "You are Mira.".into(),
            greeting: greeting.into(),
        }
    }

    fn apply(state: Rc<State>, actions: Vec<Action>) -> Rc<State> {
        actions.into_iter().fold(state, |state, action| state.reduce(action))
    }

    #[test]
    fn new_profile_seeds_the_chat() {
        let state = apply(
            Rc::new(State::default()),
            vec![
                Action::GenerationStarted,
                Action::GenerationFinished(Ok(profile("Hi."))),
            ],
        );
        assert_eq!(state.chat.len(), 1);
        assert_eq!(state.chat.messages()[0].content, "Hi.");
    }

    #[test]
    fn going_back_clears_profile_and_chat() {
        let state = apply(
            Rc::new(State::default()),
            vec![
                Action::GenerationStarted,
                Action::GenerationFinished(Ok(profile("Hi."))),
                Action::SendMessage {
                    content: "hello".into(),
                    reply_id: "r1".into(),
                },
                Action::GoBack,
            ],
        );
        assert_eq!(*state, State::default());
    }

    #[test]
    fn messages_without_profile_are_ignored() {
        let state = apply(
            Rc::new(State::default()),
            vec![Action::SendMessage {
                content: "anyone?".into(),
                reply_id: "r1".into(),
            }],
        );
        assert!(state.chat.is_empty());
    }
}
