use crate::api;
use crate::components::markdown::Markdown;
use crate::store::{Action, StoreContext};
use shared::models::{ChatMessage, ChatRequest, ChatTurn, Role};
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

const CHAT_ERROR_ALERT: &str = "An error occurred while talking to the AI.";

#[derive(Properties, PartialEq)]
pub struct MessageBubbleProps {
    pub message: ChatMessage,
}

#[function_component(MessageBubble)]
pub fn message_bubble(props: &MessageBubbleProps) -> Html {
    let is_user = props.message.role == Role::User;
    let waiting = props.message.content.is_empty();

    html! {
        <div class={classes!("message-row", if is_user { "user" } else { "assistant" })}>
            <div class="message-bubble">
                if waiting {
                    <div class="typing-indicator">
                        <span></span>
                        <span></span>
                        <span></span>
                    </div>
                } else if is_user {
                    <p class="message-text">{&props.message.content}</p>
                } else {
                    <Markdown content={props.message.content.clone()} />
                }
            </div>
        </div>
    }
}

fn loading_panel() -> Html {
    html! {
        <div class="panel chat-empty">
            <div class="spinner"></div>
            <p class="chat-empty-title">{"Generating Character..."}</p>
            <p class="chat-empty-hint">{"Enhancing details and creating image..."}</p>
        </div>
    }
}

fn placeholder_panel() -> Html {
    html! {
        <div class="panel chat-empty">
            <div class="chat-placeholder-icon">{"✨"}</div>
            <h2 class="chat-empty-title">{"Ready to Create?"}</h2>
            <p class="chat-empty-hint">
                {"Design your unique character using the creator panel. Once you're happy, generate them and start your conversation!"}
            </p>
        </div>
    }
}

#[function_component(ChatPanel)]
pub fn chat_panel() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let input = use_state(String::new);
    let container_ref = use_node_ref();

    // Keep the newest entry in view, including while a reply streams in
    {
        let container_ref = container_ref.clone();
        use_effect_with(store.chat.clone(), move |_| {
            if let Some(div) = container_ref.cast::<Element>() {
                div.set_scroll_top(div.scroll_height());
            }
            || {}
        });
    }

    let on_submit = {
        let store = store.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = input.trim().to_string();
            let Some(profile) = store.profile() else {
                return;
            };
            if text.is_empty() {
                return;
            }
            input.set(String::new());

            let mut messages = store.chat.history();
            messages.push(ChatTurn {
                role: Role::User,
                content: text.clone(),
            });
            let request = ChatRequest {
                messages,
                persona_prompt: Some(profile.persona_prompt.clone()),
            };

            let reply_id = ChatMessage::new_id();
            store.dispatch(Action::SendMessage {
                content: text,
                reply_id: reply_id.clone(),
            });

            let store = store.clone();
            yew::platform::spawn_local(async move {
                let result = api::stream_chat(&request, |fragment| {
                    store.dispatch(Action::AppendReply {
                        reply_id: reply_id.clone(),
                        fragment,
                    });
                })
                .await;

                if let Err(e) = result {
                    tracing::error!("Chat API error: {}", e);
                    store.dispatch(Action::ReplyFailed { reply_id });
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(CHAT_ERROR_ALERT);
                    }
                }
            });
        })
    };

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let el: HtmlInputElement = e.target_unchecked_into();
            input.set(el.value());
        })
    };

    let on_back = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(Action::GoBack))
    };

    if store.studio.is_generating() {
        return loading_panel();
    }
    let Some(profile) = store.profile() else {
        return placeholder_panel();
    };

    html! {
        <div class="panel chat">
            <div class="chat-header">
                <button class="icon-btn" onclick={on_back} aria-label="Back to character creator" title="Back">
                    <svg viewBox="0 0 24 24" width="22" height="22" fill="currentColor"><path d="M15.41 7.41 14 6l-6 6 6 6 1.41-1.41L10.83 12z"></path></svg>
                </button>
                <img class="avatar" src={profile.image_url.clone()} alt={format!("{} Avatar", profile.name)} />
                <div class="chat-header-info">
                    <div class="chat-title">{format!("Chatting with {}", profile.name)}</div>
                    <div class="chat-subtitle" title={profile.enhanced_description.clone()}>
                        {&profile.enhanced_description}
                    </div>
                </div>
            </div>

            <div class="chat-message-list" ref={container_ref}>
                { for store.chat.messages().iter().map(|msg| html! {
                    <MessageBubble key={msg.id.clone()} message={msg.clone()} />
                })}
            </div>

            <form class="input-area" onsubmit={on_submit}>
                <input
                    class="chat-input"
                    value={(*input).clone()}
                    placeholder="Type your message..."
                    oninput={on_input}
                />
                <button class="send-btn" type="submit" disabled={input.trim().is_empty()}>
                    <svg viewBox="0 0 24 24" width="20" height="20" fill="currentColor"><path d="M2.01 21L23 12 2.01 3 2 10l15 2-15 2z"></path></svg>
                </button>
            </form>
        </div>
    }
}
