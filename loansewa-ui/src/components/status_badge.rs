//! Status and rating badges

use leptos::*;
use loansewa_core::status::{rating_class, ApplicationStatus};

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let status = ApplicationStatus::parse(&status);

    view! {
        <span class=format!(
            "badge-{} px-3 py-1 rounded-full text-xs font-semibold",
            status.badge_class()
        )>
            {status.label().to_string()}
        </span>
    }
}

/// Eligibility rating ("Excellent", "Good", ...); a dash when unrated
#[component]
pub fn RatingBadge(rating: Option<String>) -> impl IntoView {
    let class = rating_class(rating.as_deref());

    match rating {
        Some(rating) => view! {
            <span class=format!("rating-{} px-3 py-1 rounded-full text-xs font-semibold", class)>
                {rating}
            </span>
        }
        .into_view(),
        None => view! { <span class="text-gray-400">"-"</span> }.into_view(),
    }
}
