use crate::api;
use crate::store::{Action, StoreContext};
use shared::models::{CharacterRequest, GENDERS, STYLES, TONES};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct OptionSelectProps {
    id: AttrValue,
    label: AttrValue,
    options: &'static [&'static str],
    value: String,
    disabled: bool,
    on_change: Callback<String>,
}

#[function_component(OptionSelect)]
fn option_select(props: &OptionSelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <div class="form-group">
            <label class="form-label" for={props.id.clone()}>{props.label.clone()}</label>
            <select
                id={props.id.clone()}
                class={classes!("form-select", props.value.is_empty().then_some("placeholder"))}
                {onchange}
                disabled={props.disabled}
            >
                <option value="" disabled=true selected={props.value.is_empty()}>{"Select"}</option>
                { for props.options.iter().map(|option| html! {
                    <option value={*option} selected={props.value == *option}>{*option}</option>
                })}
            </select>
        </div>
    }
}

/// Form panel: collects the four fields and kicks off a generation.
#[function_component(CreatorForm)]
pub fn creator_form() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let description = use_state(String::new);
    let tone = use_state(String::new);
    let gender = use_state(String::new);
    let style = use_state(String::new);

    let request = CharacterRequest {
        description: (*description).clone(),
        tone: (*tone).clone(),
        gender: (*gender).clone(),
        style: (*style).clone(),
    };
    let is_generating = store.studio.is_generating();
    let can_submit = !is_generating && request.is_complete();

    let on_generate = {
        let store = store.clone();
        let request = request.clone();
        Callback::from(move |_: MouseEvent| {
            if !can_submit {
                return;
            }
            tracing::info!("Initiating character generation");
            store.dispatch(Action::GenerationStarted);

            let store = store.clone();
            let request = request.clone();
            yew::platform::spawn_local(async move {
                let outcome = api::generate_character(&request).await;
                if let Err(e) = &outcome {
                    tracing::error!("Failed to generate character: {}", e);
                }
                store.dispatch(Action::GenerationFinished(outcome));
            });
        })
    };

    let setter = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };

    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    html! {
        <div class="panel creator">
            <h2 class="panel-title">{"Create Your Character"}</h2>

            <div class="form-group">
                <label class="form-label" for="description">{"Describe your character:"}</label>
                <textarea
                    id="description"
                    class="form-textarea"
                    rows="5"
                    placeholder="E.g., A grumpy old wizard living in a tower, obsessed with finding a lost sock..."
                    value={(*description).clone()}
                    oninput={on_description}
                    disabled={is_generating}
                />
                <p class="form-hint">{"Include details like background, appearance, personality quirks, etc."}</p>
            </div>

            <div class="form-row">
                <OptionSelect id="tone" label="Tone" options={TONES} value={(*tone).clone()}
                    disabled={is_generating} on_change={setter(&tone)} />
                <OptionSelect id="gender" label="Gender" options={GENDERS} value={(*gender).clone()}
                    disabled={is_generating} on_change={setter(&gender)} />
                <OptionSelect id="style" label="Visual Style" options={STYLES} value={(*style).clone()}
                    disabled={is_generating} on_change={setter(&style)} />
            </div>

            <button class="btn btn-primary btn-block" onclick={on_generate} disabled={!can_submit}>
                { if is_generating { "Generating..." } else { "Generate Character" } }
            </button>

            if let Some(error) = store.studio.error() {
                <p class="form-error">{error.to_string()}</p>
            }
        </div>
    }
}
