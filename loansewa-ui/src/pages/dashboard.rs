//! Applicant Dashboard
//!
//! Summary of the applicant's loans and the list of their applications.

use leptos::*;
use leptos_router::*;
use loansewa_core::analytics::{chronological, summary};
use loansewa_core::format::{lakhs, long_date};
use loansewa_core::models::LoanApplication;
use loansewa_core::session::Role;
use loansewa_core::status::ApplicationStatus;

use crate::api;
use crate::components::{ApplicantNav, Loading, RatingBadge, StatusBadge};
use crate::state::global::GlobalState;
use crate::state::session;

#[component]
pub fn Dashboard() -> impl IntoView {
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
                log::error!("Error fetching applications: {}", e);
                state.show_error("Could not load your applications");
            }
        }
        set_loading.set(false);
    });

    let first_name = user.full_name.split_whitespace().next().unwrap_or_default().to_string();

    view! {
        <ApplicantNav user=user />
        <main class="container mx-auto px-4 py-8 space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">{format!("Welcome back, {}", first_name)}</h1>
                    <p class="text-gray-500 mt-1">"Track your loan applications and credit health"</p>
                </div>
                <A
                    href="/apply"
                    class="px-5 py-3 rounded-lg bg-indigo-600 hover:bg-indigo-700 text-white font-medium"
                >
                    "+ Apply for a New Loan"
                </A>
            </div>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    applications.with(|apps| view! {
                        <SummaryTiles apps=apps.clone() />
                        <ApplicationsTable apps=apps.clone() />
                    }.into_view())
                }
            }}
        </main>
    }
    .into_view()
}

#[component]
fn SummaryTiles(apps: Vec<LoanApplication>) -> impl IntoView {
    let totals = summary(&apps);
    let count = |wanted: ApplicationStatus| {
        apps.iter()
            .filter(|app| ApplicationStatus::parse(&app.status) == wanted)
            .count()
    };
    let open = apps
        .iter()
        .filter(|app| ApplicationStatus::parse(&app.status).is_open())
        .count();

    let tiles = [
        ("Total Applications", totals.total_applications.to_string()),
        ("Approved", count(ApplicationStatus::Approved).to_string()),
        ("In Progress", open.to_string()),
        ("Latest Credit Score", totals.latest_score_label()),
    ];

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            {tiles.into_iter().map(|(label, value)| view! {
                <div class="bg-white rounded-xl shadow-sm p-5">
                    <div class="text-sm text-gray-500">{label}</div>
                    <div class="text-2xl font-bold mt-1">{value}</div>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn ApplicationsTable(apps: Vec<LoanApplication>) -> impl IntoView {
    if apps.is_empty() {
        return view! {
            <div class="bg-white rounded-xl shadow-sm p-12 text-center text-gray-500">
                <p class="mb-4">"You have not applied for a loan yet"</p>
                <A href="/apply" class="text-indigo-600 font-medium">"Start your first application →"</A>
            </div>
        }
        .into_view();
    }

    // Newest first
    let rows: Vec<LoanApplication> = chronological(&apps).into_iter().rev().cloned().collect();

    view! {
        <div class="bg-white rounded-xl shadow-sm overflow-hidden">
            <h2 class="text-lg font-semibold px-6 py-4 border-b border-gray-100">"My Applications"</h2>
            <table class="w-full text-sm">
                <thead class="bg-gray-50 text-gray-500 text-left">
                    <tr>
                        <th class="px-6 py-3">"Date"</th>
                        <th class="px-6 py-3">"Loan Amount"</th>
                        <th class="px-6 py-3">"Purpose"</th>
                        <th class="px-6 py-3">"Loan Type"</th>
                        <th class="px-6 py-3">"Credit Score"</th>
                        <th class="px-6 py-3">"Eligibility"</th>
                        <th class="px-6 py-3">"Status"</th>
                        <th class="px-6 py-3">"Remarks"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().map(|app| view! {
                        <tr class="border-t border-gray-100">
                            <td class="px-6 py-3">{long_date(&app.created_at)}</td>
                            <td class="px-6 py-3 font-medium">{lakhs(app.loan_amount, 2)}</td>
                            <td class="px-6 py-3">{app.loan_purpose.clone().unwrap_or_else(|| "-".to_string())}</td>
                            <td class="px-6 py-3">{app.loan_type.clone().unwrap_or_else(|| "-".to_string())}</td>
                            <td class="px-6 py-3">
                                {app.credit_score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td class="px-6 py-3"><RatingBadge rating=app.rating.clone() /></td>
                            <td class="px-6 py-3"><StatusBadge status=app.status.clone() /></td>
                            <td class="px-6 py-3 text-gray-500">
                                {app.rejection_reason.clone().unwrap_or_else(|| "-".to_string())}
                            </td>
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
