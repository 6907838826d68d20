//! Credit Analytics Page
//!
//! Credit score and loan amount trends over the applicant's most recent
//! applications, with summary tiles.

use leptos::*;
use loansewa_core::analytics::{
    credit_score_trend, loan_amount_trend, loan_axis_labels, loan_axis_max, score_axis_labels, summary,
};
use loansewa_core::models::LoanApplication;
use loansewa_core::session::Role;

use crate::api;
use crate::components::{ApplicantNav, Loading, TrendChart};
use crate::state::global::GlobalState;
use crate::state::session;

#[component]
pub fn Analytics() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let Some(user) = session::require(Role::Applicant) else {
        return view! { <Loading /> }.into_view();
    };

    let applications = create_rw_signal(Vec::<LoanApplication>::new());
    let (loading, set_loading) = create_signal(true);

    let user_id = user.id;
    spawn_local(async move {
        match api::fetch_user_applications(user_id).await {
            Ok(list) => applications.set(list),
            Err(e) => {
                log::error!("Error fetching data: {}", e);
                state.show_error("Could not load your credit history");
            }
        }
        set_loading.set(false);
    });

    view! {
        <ApplicantNav user=user />
        <main class="container mx-auto px-4 py-8 space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Credit Analytics"</h1>
                <p class="text-gray-500 mt-1">"Track your credit score and loan history over time"</p>
            </div>

            {move || {
                if loading.get() {
                    return view! { <Loading /> }.into_view();
                }
                applications.with(|apps| {
                    let score_axis = score_axis_labels().iter().map(|s| s.to_string()).collect::<Vec<_>>();
                    let loan_axis = loan_axis_labels(loan_axis_max(apps)).to_vec();
                    view! {
                        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                            <TrendChart
                                title="Credit Score Trend"
                                bars=credit_score_trend(apps)
                                axis=score_axis
                                empty_text="No credit score data available"
                            />
                            <TrendChart
                                title="Loan Amount Trend"
                                bars=loan_amount_trend(apps)
                                axis=loan_axis
                                empty_text="No loan amount data available"
                            />
                        </div>
                        <SummaryCard apps=apps.clone() />
                    }
                    .into_view()
                })
            }}
        </main>
    }
    .into_view()
}

#[component]
fn SummaryCard(apps: Vec<LoanApplication>) -> impl IntoView {
    let totals = summary(&apps);
    let items = [
        ("Total Applications", totals.total_applications.to_string()),
        ("Latest Credit Score", totals.latest_score_label()),
        ("Latest Loan Amount", totals.latest_amount_label()),
        ("Average Credit Score", totals.average_score_label()),
    ];

    view! {
        <div class="bg-white rounded-xl shadow-sm p-6">
            <h2 class="text-lg font-semibold mb-4">"Analytics Summary"</h2>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {items.into_iter().map(|(label, value)| view! {
                    <div class="rounded-lg bg-gray-50 p-4">
                        <div class="text-sm text-gray-500">{label}</div>
                        <div class="text-2xl font-bold mt-1">{value}</div>
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}
