//! Trend Chart Component
//!
//! Vertical bar chart with a labelled Y axis and horizontal grid lines, used
//! by the credit analytics page.

use leptos::*;
use leptos_router::*;
use loansewa_core::analytics::TrendBar;

#[component]
pub fn TrendChart(
    #[prop(into)]
    title: String,
    bars: Vec<TrendBar>,
    /// Y-axis labels, top to bottom
    axis: Vec<String>,
    /// Shown instead of the chart when there are no bars
    #[prop(into)]
    empty_text: String,
) -> impl IntoView {
    let period = format!("Last {} Applications", bars.len());

    let body = if bars.is_empty() {
        view! {
            <div class="flex flex-col items-center justify-center h-64 text-gray-500 space-y-4">
                <p>{empty_text}</p>
                <A
                    href="/apply"
                    class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 text-white rounded-lg font-medium"
                >
                    "Apply for Loan"
                </A>
            </div>
        }
        .into_view()
    } else {
        view! {
            <div class="flex h-64">
                <div class="flex flex-col justify-between pr-3 text-xs text-gray-500 text-right">
                    {axis.into_iter().map(|label| view! { <span>{label}</span> }).collect_view()}
                </div>
                <div class="relative flex-1 border-l border-b border-gray-200">
                    // Grid lines
                    <div class="absolute inset-0 flex flex-col justify-between pointer-events-none">
                        {(0..5).map(|_| view! { <div class="border-t border-gray-100" /> }).collect_view()}
                    </div>
                    <div class="absolute inset-0 flex items-end justify-around px-2">
                        {bars.into_iter().map(|bar| view! { <Bar bar=bar /> }).collect_view()}
                    </div>
                </div>
            </div>
        }
        .into_view()
    };

    view! {
        <div class="bg-white rounded-xl shadow-sm p-6">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
                <span class="text-sm text-gray-500">{period}</span>
            </div>
            {body}
        </div>
    }
}

#[component]
fn Bar(bar: TrendBar) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center h-full justify-end w-12" title=bar.label.clone()>
            <div
                class="w-full rounded-t-md relative"
                style=format!("height: {:.1}%; background-color: {}", bar.height_percent, bar.color)
            >
                <span class="absolute -top-5 left-1/2 -translate-x-1/2 text-xs font-semibold text-gray-700 whitespace-nowrap">
                    {bar.value_label}
                </span>
            </div>
            <span class="mt-2 text-xs text-gray-500 whitespace-nowrap">{bar.date}</span>
        </div>
    }
}
