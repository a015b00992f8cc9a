use yew::prelude::*;

use shared::compute_analytics;

use crate::context::use_survey;
use crate::styles::*;

#[function_component(SurveyRanking)]
pub fn survey_ranking() -> Html {
    let session = use_survey();
    let state = &session.state;
    let analytics = compute_analytics(state);
    let ranked = state.top_surveys(None);

    html! {
        <div class={CONTAINER}>
            <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Survey Ranking"}</h1>

            <div class={combine_classes(STATS_CARD, STATS_CARD_INFO)}>
                <p>{format!("Total votes: {}", analytics.total_votes)}</p>
                <p>{format!("Surveys: {}", analytics.total_surveys)}</p>
                <p>{format!("Average votes per survey: {:.2}", analytics.average_votes_per_survey)}</p>
            </div>

            <ul class={SPACE_Y_BASE}>
                {for ranked.iter().map(|survey| {
                    let votes = state.vote_count(&survey.id);
                    html! {
                        <li class={combine_classes(CARD_SECTION, FLEX_BETWEEN)}>
                            <span class="font-medium text-gray-100">{&survey.title}</span>
                            <div class="flex items-center space-x-2">
                                <span class={TEXT_MUTED}>{format!("{votes} votes")}</span>
                                {if state.has_voted(&survey.id) {
                                    html! {
                                        <span class="text-xs bg-blue-900 text-blue-200 px-2 py-1 rounded-full">
                                            {"Voted"}
                                        </span>
                                    }
                                } else { html! {} }}
                            </div>
                        </li>
                    }
                })}
            </ul>

            {if ranked.is_empty() {
                html! { <p class={TEXT_MUTED}>{"Nothing to rank yet."}</p> }
            } else { html! {} }}
        </div>
    }
}
