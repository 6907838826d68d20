//! History tab: decided applications with status, date and name filters

use leptos::*;
use loansewa_core::format::{lakhs, lakhs_or_dash, long_date};
use loansewa_core::history::{HistoryFilter, STATUS_OPTIONS};
use loansewa_core::models::LoanApplication;

use crate::api;
use crate::components::{Loading, StatusBadge};

#[component]
pub fn HistoryTab() -> impl IntoView {
    let search = create_rw_signal(String::new());
    let status = create_rw_signal(String::new());
    let start_date = create_rw_signal(String::new());
    let end_date = create_rw_signal(String::new());

    let history = create_rw_signal(Vec::<LoanApplication>::new());
    let (loading, set_loading) = create_signal(true);

    // Refetch whenever a filter changes
    create_effect(move |_| {
        let filter = HistoryFilter::default()
            .with_status(status.get())
            .with_dates(start_date.get(), end_date.get())
            .with_search(search.get());

        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_history(&filter).await {
                Ok(list) => history.set(list),
                Err(e) => log::error!("Error fetching history: {}", e),
            }
            set_loading.set(false);
        });
    });

    let input_class = "rounded-lg border border-gray-300 px-4 py-2 bg-white focus:border-indigo-500 focus:outline-none";

    view! {
        <div class="space-y-6">
            <div class="bg-white rounded-xl shadow-sm p-4 flex flex-wrap gap-3">
                <input
                    type="text"
                    placeholder="Search by member name..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                    class=format!("flex-1 min-w-[16rem] {}", input_class)
                />
                <select
                    on:change=move |ev| status.set(event_target_value(&ev))
                    class=input_class
                >
                    {STATUS_OPTIONS.into_iter().map(|(value, label)| view! {
                        <option value=value selected=move || status.get() == value>{label}</option>
                    }).collect_view()}
                </select>
                <input
                    type="date"
                    prop:value=move || start_date.get()
                    on:change=move |ev| start_date.set(event_target_value(&ev))
                    class=input_class
                />
                <input
                    type="date"
                    prop:value=move || end_date.get()
                    on:change=move |ev| end_date.set(event_target_value(&ev))
                    class=input_class
                />
            </div>

            <div class="bg-white rounded-xl shadow-sm overflow-hidden">
                {move || {
                    if loading.get() && history.with(Vec::is_empty) {
                        return view! { <Loading /> }.into_view();
                    }
                    let apps = history.get();
                    if apps.is_empty() {
                        return view! {
                            <p class="px-6 py-12 text-center text-gray-500">"No history found"</p>
                        }
                        .into_view();
                    }
                    view! { <HistoryTable apps=apps /> }.into_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn HistoryTable(apps: Vec<LoanApplication>) -> impl IntoView {
    view! {
        <table class="w-full text-sm">
            <thead class="bg-gray-50 text-gray-500 text-left">
                <tr>
                    <th class="px-6 py-3">"Date"</th>
                    <th class="px-6 py-3">"Member Name"</th>
                    <th class="px-6 py-3">"Loan Amount"</th>
                    <th class="px-6 py-3">"Status"</th>
                    <th class="px-6 py-3">"Credit Score"</th>
                    <th class="px-6 py-3">"Disbursed"</th>
                    <th class="px-6 py-3">"Repaid"</th>
                    <th class="px-6 py-3">"Reason"</th>
                </tr>
            </thead>
            <tbody>
                {apps.into_iter().map(|app| view! {
                    <tr class="border-t border-gray-100">
                        <td class="px-6 py-3">{long_date(&app.created_at)}</td>
                        <td class="px-6 py-3 font-medium">{app.user_name.clone().unwrap_or_default()}</td>
                        <td class="px-6 py-3">{lakhs(app.loan_amount, 2)}</td>
                        <td class="px-6 py-3"><StatusBadge status=app.status.clone() /></td>
                        <td class="px-6 py-3">
                            {app.credit_score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())}
                        </td>
                        <td class="px-6 py-3">{lakhs_or_dash(app.disbursed_amount)}</td>
                        <td class="px-6 py-3">{lakhs_or_dash(app.repaid_amount)}</td>
                        <td class="px-6 py-3 text-gray-500">
                            {app.rejection_reason.clone().unwrap_or_else(|| "-".to_string())}
                        </td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}
