use yew::prelude::*;
use yew_router::prelude::*;

mod context;
mod home;
mod styles;
mod survey_form;
mod survey_ranking;

use crate::{
    context::SurveyProvider,
    home::Home,
    survey_form::SurveyForm,
    survey_ranking::SurveyRanking,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/surveys")] Surveys,
    #[at("/ranking")] Ranking,
}

fn nav_link(to: Route, label: &str, current: &Option<Route>) -> Html {
    let active = current.as_ref() == Some(&to);
    html! {
        <Link<Route> {to} classes={classes!(
            "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
            "transition-colors", "duration-200", "ease-in-out",
            "text-gray-200", "border", "border-transparent", "hover:border-blue-400", "hover:text-blue-400",
            if active {
                "text-blue-400 border-blue-400 ring-2 ring-blue-500 ring-offset-1 ring-offset-gray-900"
            } else {
                ""
            }
        )}>
            {label}
        </Link<Route>>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current_route = use_route::<Route>();

    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-50">
            <div class="container mx-auto px-6 py-4 flex justify-center space-x-8">
                {nav_link(Route::Home, "Home", &current_route)}
                {nav_link(Route::Surveys, "Surveys", &current_route)}
                {nav_link(Route::Ranking, "Ranking", &current_route)}
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <SurveyProvider>
                <div class="min-h-screen bg-gray-900">
                    <Navigation />
                    <div class="pt-16">
                        <Switch<Route> render={switch} />
                    </div>
                </div>
            </SurveyProvider>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Surveys => html! { <SurveyForm /> },
        Route::Ranking => html! { <SurveyRanking /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
    }
    yew::Renderer::<App>::new().render();
}
