//! Loan Insights tab: portfolio money flow, risk mix and score spread

use leptos::*;
use loansewa_core::insights::{money_flow, risk_segments, score_distribution_bars};

use super::AdminData;

#[component]
pub fn InsightsTab(data: AdminData) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <InsightCard title="Amount Disbursed vs Repaid">
                <div class="space-y-3">
                    {move || data.insights.with(|insights| {
                        money_flow(insights).into_iter().map(|(label, value)| view! {
                            <div class="flex items-center justify-between">
                                <span class="text-gray-500">{label}</span>
                                <span class="text-lg font-semibold">{value}</span>
                            </div>
                        }).collect_view()
                    })}
                </div>
            </InsightCard>

            <InsightCard title="Risk Distribution">
                <div class="flex h-10 rounded-lg overflow-hidden bg-gray-100">
                    {move || data.insights.with(|insights| {
                        risk_segments(&insights.risk_distribution)
                            .into_iter()
                            .filter(|segment| segment.count > 0)
                            .map(|segment| view! {
                                <div
                                    class=format!(
                                        "risk-{} flex items-center justify-center text-white text-xs font-semibold",
                                        segment.level.css_class()
                                    )
                                    style=format!("width: {:.1}%", segment.width_percent)
                                >
                                    {segment.caption()}
                                </div>
                            })
                            .collect_view()
                    })}
                </div>
            </InsightCard>

            <InsightCard title="Credit Score Distribution">
                <div class="space-y-3">
                    {move || data.insights.with(|insights| {
                        score_distribution_bars(insights).into_iter().map(|bar| view! {
                            <div class="flex items-center space-x-3">
                                <span class="w-20 text-sm text-gray-500">{bar.range.clone()}</span>
                                <div class="flex-1 h-6 bg-gray-100 rounded">
                                    <div
                                        class="h-6 rounded bg-indigo-500"
                                        style=format!("width: {:.1}%", bar.width_percent)
                                    />
                                </div>
                                <span class="w-10 text-sm font-semibold text-right">{bar.count}</span>
                            </div>
                        }).collect_view()
                    })}
                </div>
            </InsightCard>

            <InsightCard title="Active vs Closed Loans">
                <div class="grid grid-cols-2 gap-4 text-center">
                    <div class="rounded-lg bg-green-50 p-4">
                        <div class="text-3xl font-bold text-green-700">
                            {move || data.insights.with(|i| i.active_vs_closed.active)}
                        </div>
                        <div class="text-sm text-gray-500">"Active"</div>
                    </div>
                    <div class="rounded-lg bg-gray-100 p-4">
                        <div class="text-3xl font-bold text-gray-700">
                            {move || data.insights.with(|i| i.active_vs_closed.closed)}
                        </div>
                        <div class="text-sm text-gray-500">"Closed"</div>
                    </div>
                </div>
            </InsightCard>
        </div>
    }
}

#[component]
fn InsightCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm p-6">
            <h3 class="text-lg font-semibold mb-4">{title}</h3>
            {children()}
        </div>
    }
}
