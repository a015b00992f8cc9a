use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use shared::{validate_new_survey, MAX_DESCRIPTION_LENGTH, MAX_TITLE_LENGTH};

use crate::context::{use_survey, SurveyAction};
use crate::styles::*;

#[function_component(SurveyForm)]
pub fn survey_form() -> Html {
    let session = use_survey();
    let title = use_state(String::new);
    let description = use_state(String::new);

    let oninput_title = {
        let title = title.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            title.set(input.value());
        })
    };

    let oninput_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let submit_disabled = validate_new_survey(title.as_str(), Some(description.as_str())).is_err();

    let onsubmit = {
        let session = session.clone();
        let title = title.clone();
        let description = description.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if validate_new_survey(title.as_str(), Some(description.as_str())).is_err() {
                return;
            }
            let description_opt = (!description.is_empty()).then(|| (*description).clone());
            session.dispatch(SurveyAction::AddSurvey {
                title: (*title).clone(),
                description: description_opt,
            });
            title.set(String::new());
            description.set(String::new());
        })
    };

    html! {
        <div class={CONTAINER}>
            <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Surveys"}</h1>

            <form {onsubmit} class={SPACE_Y_LG}>
                <div class={SPACE_Y_BASE}>
                    <label class={TEXT_LABEL}>
                        {format!("Title ({}/{})", title.len(), MAX_TITLE_LENGTH)}
                    </label>
                    <input type="text" class={INPUT_BASE} value={(*title).clone()}
                        maxlength={MAX_TITLE_LENGTH.to_string()} oninput={oninput_title}
                        placeholder="New survey title" />
                </div>
                <div class={SPACE_Y_BASE}>
                    <label class={TEXT_LABEL}>
                        {format!("Description ({}/{}, optional)", description.len(), MAX_DESCRIPTION_LENGTH)}
                    </label>
                    <textarea class={INPUT_BASE} rows="3" value={(*description).clone()}
                        maxlength={MAX_DESCRIPTION_LENGTH.to_string()} oninput={oninput_description}
                        placeholder="Optional description" />
                </div>
                <button type="submit" class={button_primary(true)} disabled={submit_disabled}>
                    {"Create Survey"}
                </button>
            </form>

            <h2 class={combine_classes(HEADING_SM, "mt-10")}>{"Available Surveys"}</h2>
            <div class={SPACE_Y_BASE}>
                {for session.state.surveys().iter().map(|survey| {
                    let voted = session.state.has_voted(&survey.id);
                    let onclick = {
                        let session = session.clone();
                        let survey_id = survey.id.clone();
                        Callback::from(move |_| {
                            session.dispatch(SurveyAction::CastVote { survey_id: survey_id.clone() });
                        })
                    };

                    html! {
                        <div class={combine_classes(CARD_SECTION, FLEX_BETWEEN)}>
                            <div>
                                <h3 class="font-medium text-gray-100">{&survey.title}</h3>
                                {if let Some(description) = &survey.description {
                                    html! { <p class={TEXT_MUTED}>{description}</p> }
                                } else { html! {} }}
                                <p class={TEXT_MUTED}>{format!("Created {}", survey.created_at.date())}</p>
                            </div>
                            <button {onclick} disabled={voted}
                                class={combine_classes(BUTTON_BASE,
                                    if voted { "bg-gray-600" } else { BUTTON_SUCCESS })}>
                                {if voted { "Voted" } else { "Vote" }}
                            </button>
                        </div>
                    }
                })}
                {if session.state.surveys().is_empty() {
                    html! { <p class={TEXT_MUTED}>{"No surveys yet. Create the first one above."}</p> }
                } else { html! {} }}
            </div>
        </div>
    }
}
