use std::rc::Rc;
use yew::prelude::*;

use shared::{KeyValueStore, SurveyState};

/// Session state shared with every view through context. Dispatching an
/// action re-renders all subscribed components with the updated state,
/// and the state manager itself persists each mutation.
#[derive(Clone, PartialEq)]
pub struct SurveySession {
    pub state: SurveyState,
}

pub enum SurveyAction {
    /// Replace the initial defaults with whatever the store holds.
    Hydrate,
    AddSurvey { title: String, description: Option<String> },
    CastVote { survey_id: String },
}

impl Reducible for SurveySession {
    type Action = SurveyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SurveyAction::Hydrate => next.state.load_persisted(),
            SurveyAction::AddSurvey { title, description } => {
                next.state.add_survey(&title, description);
            }
            SurveyAction::CastVote { survey_id } => next.state.add_vote(&survey_id),
        }
        Rc::new(next)
    }
}

pub type SurveyHandle = UseReducerHandle<SurveySession>;

#[cfg(target_arch = "wasm32")]
fn session_store() -> Rc<dyn KeyValueStore> {
    Rc::new(shared::LocalStorage::new())
}

#[cfg(not(target_arch = "wasm32"))]
fn session_store() -> Rc<dyn KeyValueStore> {
    Rc::new(shared::MemoryStore::new())
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SurveyProvider)]
pub fn survey_provider(props: &ProviderProps) -> Html {
    let session = use_reducer(|| SurveySession {
        state: SurveyState::new(session_store()),
    });

    // The first render shows empty defaults; the persisted session is
    // applied once after mount, when the browser store is reachable.
    {
        let session = session.clone();
        use_effect_with_deps(
            move |_| {
                session.dispatch(SurveyAction::Hydrate);
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<SurveyHandle> context={session}>
            { for props.children.iter() }
        </ContextProvider<SurveyHandle>>
    }
}

#[hook]
pub fn use_survey() -> SurveyHandle {
    use_context::<SurveyHandle>().expect("SurveyProvider is mounted above every view")
}
