//! KPI Tile Component
//!
//! One counter of the admin overview grid.

use leptos::*;
use loansewa_core::admin::KpiCard;

#[component]
pub fn KpiTile(card: KpiCard) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl shadow-sm p-5 flex items-center space-x-4">
            <div
                class="w-12 h-12 rounded-lg flex items-center justify-center text-2xl"
                style=format!("background-color: {}", card.tint)
            >
                {card.icon}
            </div>
            <div>
                <div class="text-2xl font-bold text-gray-900">{card.value}</div>
                <div class="text-sm text-gray-500">{card.label}</div>
            </div>
        </div>
    }
}
