//! Dashboard tab: KPI grid and the pending applications queue

use leptos::*;
use loansewa_core::admin::kpi_cards;
use loansewa_core::format::lakhs;
use loansewa_core::models::LoanApplication;

use super::AdminData;
use crate::api;
use crate::components::{KpiTile, Loading, RatingBadge};
use crate::dialogs;

#[component]
pub fn OverviewTab(data: AdminData, admin_id: i64) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {move || data.stats.with(|stats| {
                    kpi_cards(stats)
                        .into_iter()
                        .map(|card| view! { <KpiTile card=card /> })
                        .collect_view()
                })}
            </div>

            <div class="bg-white rounded-xl shadow-sm overflow-hidden">
                <div class="flex items-center justify-between px-6 py-4 border-b border-gray-100">
                    <h2 class="text-lg font-semibold">"Pending Loan Applications"</h2>
                    <span class="px-3 py-1 rounded-full bg-amber-100 text-amber-700 text-sm font-medium">
                        {move || format!("{} Applications", data.pending.with(Vec::len))}
                    </span>
                </div>
                {move || {
                    if !data.loaded.get() {
                        return view! { <Loading /> }.into_view();
                    }
                    let pending = data.pending.get();
                    if pending.is_empty() {
                        return view! {
                            <p class="px-6 py-12 text-center text-gray-500">"No pending applications"</p>
                        }
                        .into_view();
                    }
                    view! { <PendingTable apps=pending data=data admin_id=admin_id /> }.into_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn PendingTable(apps: Vec<LoanApplication>, data: AdminData, admin_id: i64) -> impl IntoView {
    view! {
        <table class="w-full text-sm">
            <thead class="bg-gray-50 text-gray-500 text-left">
                <tr>
                    <th class="px-6 py-3">"Member Name"</th>
                    <th class="px-6 py-3">"Email"</th>
                    <th class="px-6 py-3">"Loan Amount"</th>
                    <th class="px-6 py-3">"Credit Score"</th>
                    <th class="px-6 py-3">"Eligibility"</th>
                    <th class="px-6 py-3">"Loan Type"</th>
                    <th class="px-6 py-3">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {apps.into_iter().map(|app| {
                    let id = app.id;
                    view! {
                        <tr class="border-t border-gray-100">
                            <td class="px-6 py-3 font-medium">{app.user_name.clone().unwrap_or_default()}</td>
                            <td class="px-6 py-3 text-gray-500">{app.user_email.clone().unwrap_or_default()}</td>
                            <td class="px-6 py-3">{lakhs(app.loan_amount, 2)}</td>
                            <td class="px-6 py-3">
                                {app.credit_score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())}
                            </td>
                            <td class="px-6 py-3"><RatingBadge rating=app.rating.clone() /></td>
                            <td class="px-6 py-3">{app.loan_type.clone().unwrap_or_else(|| "-".to_string())}</td>
                            <td class="px-6 py-3 space-x-2 whitespace-nowrap">
                                <button
                                    on:click=move |_| approve(data, admin_id, id)
                                    class="px-3 py-1 rounded-lg bg-green-600 hover:bg-green-700 text-white text-xs font-semibold"
                                >
                                    "✓ Approve"
                                </button>
                                <button
                                    on:click=move |_| reject(data, admin_id, id)
                                    class="px-3 py-1 rounded-lg bg-red-600 hover:bg-red-700 text-white text-xs font-semibold"
                                >
                                    "✗ Reject"
                                </button>
                            </td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}

fn approve(data: AdminData, admin_id: i64, application_id: i64) {
    spawn_local(async move {
        match api::approve_application(application_id, admin_id).await {
            Ok(()) => {
                log::info!("Application {} approved", application_id);
                dialogs::alert("Application approved successfully");
                data.refresh();
            }
            Err(e) => dialogs::alert(&format!("Error approving application: {}", e)),
        }
    });
}

/// Asks for a reason first; cancelling or leaving it blank aborts
fn reject(data: AdminData, admin_id: i64, application_id: i64) {
    let Some(reason) = dialogs::prompt("Enter rejection reason:") else {
        return;
    };

    spawn_local(async move {
        match api::reject_application(application_id, admin_id, &reason).await {
            Ok(()) => {
                log::info!("Application {} rejected", application_id);
                dialogs::alert("Application rejected successfully");
                data.refresh();
            }
            Err(e) => dialogs::alert(&format!("Error rejecting application: {}", e)),
        }
    });
}
