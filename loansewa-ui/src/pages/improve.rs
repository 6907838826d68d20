//! Credit Improvement Page
//!
//! Personalised suggestions for raising the applicant's credit score.

use leptos::*;
use loansewa_core::models::{ImprovementResponse, Suggestion};
use loansewa_core::session::Role;

use crate::api;
use crate::components::{ApplicantNav, Loading};
use crate::state::global::GlobalState;
use crate::state::session;

#[component]
pub fn Improve() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let Some(user) = session::require(Role::Applicant) else {
        return view! { <Loading /> }.into_view();
    };

    let improvement = create_rw_signal(None::<ImprovementResponse>);
    let (loading, set_loading) = create_signal(true);

    let user_id = user.id;
    spawn_local(async move {
        match api::fetch_credit_improvement(user_id).await {
            Ok(response) => improvement.set(Some(response)),
            Err(e) => {
                log::error!("Error fetching suggestions: {}", e);
                state.show_error(&e);
            }
        }
        set_loading.set(false);
    });

    view! {
        <ApplicantNav user=user />
        <main class="container mx-auto px-4 py-8 max-w-4xl space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Improve Your Credit Score"</h1>
                <p class="text-gray-500 mt-1">"Personalised steps based on your application history"</p>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                match improvement.get() {
                    Some(response) => view! { <Suggestions response=response /> }.into_view(),
                    None => view! {
                        <div class="bg-white rounded-xl shadow-sm p-12 text-center text-gray-500">
                            "Suggestions are not available right now"
                        </div>
                    }
                    .into_view(),
                }
            }}
        </main>
    }
    .into_view()
}

#[component]
fn Suggestions(response: ImprovementResponse) -> impl IntoView {
    let mut suggestions = response.suggestions;
    suggestions.sort_by_key(Suggestion::priority_rank);

    let score = response
        .credit_score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "--".to_string());
    let total = response.total_applications.unwrap_or(0);

    view! {
        <div class="grid grid-cols-2 gap-4">
            <div class="bg-white rounded-xl shadow-sm p-5">
                <div class="text-sm text-gray-500">"Current Credit Score"</div>
                <div class="text-3xl font-bold mt-1">{score}</div>
            </div>
            <div class="bg-white rounded-xl shadow-sm p-5">
                <div class="text-sm text-gray-500">"Applications Analysed"</div>
                <div class="text-3xl font-bold mt-1">{total}</div>
            </div>
        </div>

        {(!response.message.is_empty()).then(|| view! {
            <p class="text-gray-600">{response.message.clone()}</p>
        })}

        <div class="space-y-4">
            {suggestions.into_iter().map(|suggestion| {
                let priority_class = match suggestion.priority_rank() {
                    0 => "bg-red-100 text-red-700",
                    1 => "bg-amber-100 text-amber-700",
                    _ => "bg-green-100 text-green-700",
                };
                view! {
                    <div class="bg-white rounded-xl shadow-sm p-5 flex items-start space-x-4">
                        <div class="text-3xl">{suggestion.icon.clone()}</div>
                        <div class="flex-1">
                            <div class="flex items-center justify-between">
                                <h3 class="font-semibold">{suggestion.title.clone()}</h3>
                                <span class=format!("px-3 py-1 rounded-full text-xs font-semibold {}", priority_class)>
                                    {format!("{} Priority", suggestion.priority)}
                                </span>
                            </div>
                            <p class="text-sm text-gray-600 mt-1">{suggestion.description.clone()}</p>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
