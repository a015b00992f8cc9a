use yew::prelude::*;
use yew_router::prelude::*;

use crate::{styles::*, Route};

#[function_component]
pub fn Home() -> Html {
    html! {
        <div class={CONTAINER}>
            <h1 class={combine_classes(HEADING_LG, "text-white")}>{"Survey System"}</h1>
            <div class="text-center mb-6">
                <p class="text-gray-300 mb-4">
                    {"Create and vote on surveys, quickly and easily"}
                </p>
            </div>

            <div class="space-y-8 max-w-3xl mx-auto">
                <div class="bg-gray-800 p-6 rounded-lg shadow-lg">
                    <p class="text-gray-300 mb-4">
                        {"This application lets you create surveys and vote on the ones you care
                        about. Each survey takes a title and an optional description, and every
                        browser gets one vote per survey. The ranking page orders surveys by
                        vote count and shows totals and averages as votes come in."}
                    </p>
                    <p class="text-gray-300">
                        {"Everything lives in your browser's local storage: surveys, tallies,
                        and your own voting record survive page reloads without any account
                        or server. Clearing site data starts you over from scratch."}
                    </p>
                </div>

                <div class="bg-gray-800 p-6 rounded-lg shadow-lg">
                    <h2 class="text-xl font-semibold mb-4 text-white">{"How it works"}</h2>
                    <ul class="list-disc pl-6 space-y-3 text-gray-300">
                        <li>{"Create a survey with a title and an optional description"}</li>
                        <li>{"Vote once per survey; the button locks after your vote"}</li>
                        <li>{"Watch the ranking update the moment a vote is cast"}</li>
                    </ul>
                </div>

                <div class="bg-gray-800 p-6 rounded-lg shadow-lg">
                    <h2 class="text-xl font-semibold mb-4 text-white">{"Get Started"}</h2>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<Route> to={Route::Surveys}
                            classes="bg-blue-600 hover:bg-blue-700 text-white px-8 py-3 rounded-lg text-lg font-semibold text-center transition-colors">
                            {"View Surveys"}
                        </Link<Route>>
                        <Link<Route> to={Route::Ranking}
                            classes="bg-green-600 hover:bg-green-700 text-white px-8 py-3 rounded-lg text-lg font-semibold text-center transition-colors">
                            {"See the Ranking"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
