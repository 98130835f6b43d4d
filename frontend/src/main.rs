mod api;
mod components;
mod store;

use components::character_card::CharacterCard;
use components::chat_panel::ChatPanel;
use components::creator_form::CreatorForm;
use store::{State, StoreContext};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let store = use_reducer(State::default);

    html! {
        <ContextProvider<StoreContext> context={store.clone()}>
            <div class="app-container">
                <div class="side-panel">
                    if store.profile().is_some() {
                        <CharacterCard />
                    } else {
                        <CreatorForm />
                    }
                </div>
                <div class="main-stage">
                    <ChatPanel />
                </div>
            </div>
        </ContextProvider<StoreContext>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
