use crate::store::StoreContext;
use yew::prelude::*;

#[function_component(CharacterCard)]
pub fn character_card() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let Some(profile) = store.profile() else {
        return html! {};
    };

    html! {
        <div class="panel character-card">
            <div class="portrait">
                <img src={profile.image_url.clone()} alt="Generated Character Image" />
            </div>
            <div class="character-bio">
                <h3 class="character-name">{&profile.name}</h3>
                <p class="character-desc">{&profile.enhanced_description}</p>
            </div>
        </div>
    }
}
