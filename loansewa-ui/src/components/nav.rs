//! Navigation Components
//!
//! Applicant header bar and the admin sidebar.

use leptos::*;
use leptos_router::*;
use loansewa_core::admin::AdminTab;
use loansewa_core::models::User;
use loansewa_core::session::Role;

use crate::state::session;

/// Header of the logged-in applicant pages
#[component]
pub fn ApplicantNav(user: User) -> impl IntoView {
    let navigate = use_navigate();
    let logout = move |_| {
        session::clear(Role::Applicant);
        navigate(Role::Applicant.logout_route(), Default::default());
    };

    view! {
        <nav class="bg-white border-b border-gray-200 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-8">
                        // Logo and brand
                        <A href="/dashboard" class="flex items-center space-x-2">
                            <span class="text-2xl">"💳"</span>
                            <span class="text-xl font-bold text-indigo-700">"LoanSewa"</span>
                        </A>

                        <div class="flex items-center space-x-1">
                            <NavLink href="/apply" label="Apply" />
                            <NavLink href="/dashboard" label="Dashboard" />
                            <NavLink href="/analytics" label="Credit Analytics" />
                            <NavLink href="/improve" label="Improve Score" />
                        </div>
                    </div>

                    <div class="flex items-center space-x-4">
                        <span class="text-sm text-gray-600">{format!("Welcome, {}", user.full_name)}</span>
                        <button
                            on:click=logout
                            title="Logout"
                            class="p-2 rounded-lg hover:bg-gray-100 transition-colors"
                        >
                            "🚪"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-indigo-700 hover:bg-indigo-50 transition-colors"
            active_class="bg-indigo-50 text-indigo-700 font-medium"
        >
            {label}
        </A>
    }
}

/// Tab sidebar of the admin dashboard
#[component]
pub fn AdminSidebar(active: RwSignal<AdminTab>) -> impl IntoView {
    let navigate = use_navigate();
    let logout = move |_| {
        session::clear(Role::Admin);
        navigate(Role::Admin.logout_route(), Default::default());
    };

    view! {
        <aside class="w-64 min-h-screen bg-indigo-900 text-white flex flex-col">
            <div class="flex items-center space-x-2 px-6 h-16 border-b border-indigo-800">
                <span class="text-2xl">"🔐"</span>
                <span class="text-lg font-bold">"LoanSewa Admin"</span>
            </div>

            <div class="flex-1 py-4 space-y-1">
                {AdminTab::ALL.into_iter().map(|tab| view! {
                    <button
                        on:click=move |_| active.set(tab)
                        class=move || if active.get() == tab {
                            "w-full flex items-center space-x-3 px-6 py-3 bg-indigo-700 text-left"
                        } else {
                            "w-full flex items-center space-x-3 px-6 py-3 hover:bg-indigo-800 text-left"
                        }
                    >
                        <span>{tab.icon()}</span>
                        <span>{tab.label()}</span>
                    </button>
                }).collect_view()}
            </div>

            <button
                on:click=logout
                class="flex items-center space-x-3 px-6 py-4 border-t border-indigo-800 hover:bg-indigo-800"
            >
                <span>"🚪"</span>
                <span>"Logout"</span>
            </button>
        </aside>
    }
}
