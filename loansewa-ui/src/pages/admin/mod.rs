//! Admin Dashboard
//!
//! Sidebar-tabbed back office. Stats, pending applications, users and
//! insights are loaded together on entry and reloaded after every approval
//! or rejection.

mod history;
mod insights;
mod overview;
mod settings;

use leptos::*;
use loansewa_core::admin::AdminTab;
use loansewa_core::models::{AnalyticsInsights, DashboardStats, LoanApplication, User};
use loansewa_core::session::Role;

use crate::api;
use crate::components::{AdminSidebar, Loading};
use crate::state::session;

use history::HistoryTab;
use insights::InsightsTab;
use overview::OverviewTab;
use settings::SettingsTab;

/// Data shared by the admin tabs
#[derive(Clone, Copy)]
pub struct AdminData {
    pub stats: RwSignal<DashboardStats>,
    pub pending: RwSignal<Vec<LoanApplication>>,
    pub users: RwSignal<Vec<User>>,
    pub insights: RwSignal<AnalyticsInsights>,
    /// False until the first pending list arrives
    pub loaded: RwSignal<bool>,
}

impl AdminData {
    fn new() -> Self {
        Self {
            stats: create_rw_signal(DashboardStats::default()),
            pending: create_rw_signal(Vec::new()),
            users: create_rw_signal(Vec::new()),
            insights: create_rw_signal(AnalyticsInsights::default()),
            loaded: create_rw_signal(false),
        }
    }

    /// Fetch everything; each request runs independently
    pub fn refresh(self) {
        spawn_local(async move {
            match api::fetch_dashboard_stats().await {
                Ok(stats) => self.stats.set(stats),
                Err(e) => log::error!("Error fetching dashboard data: {}", e),
            }
        });
        spawn_local(async move {
            match api::fetch_pending_applications().await {
                Ok(pending) => self.pending.set(pending),
                Err(e) => log::error!("Error fetching pending applications: {}", e),
            }
            self.loaded.set(true);
        });
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(users) => self.users.set(users),
                Err(e) => log::error!("Error fetching users: {}", e),
            }
        });
        spawn_local(async move {
            match api::fetch_insights().await {
                Ok(insights) => self.insights.set(insights),
                Err(e) => log::error!("Error fetching insights: {}", e),
            }
        });
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let Some(admin) = session::require(Role::Admin) else {
        return view! { <Loading /> }.into_view();
    };

    let active = create_rw_signal(AdminTab::default());
    let data = AdminData::new();
    data.refresh();

    let admin_id = admin.id;
    let profile = admin.clone();

    view! {
        <div class="flex min-h-screen">
            <AdminSidebar active=active />

            <div class="flex-1 flex flex-col">
                <header class="h-16 bg-white border-b border-gray-200 flex items-center justify-between px-8">
                    <h1 class="text-2xl font-bold">{move || active.get().title()}</h1>
                    <span class="text-sm text-gray-600">{format!("Welcome, {}", admin.full_name)}</span>
                </header>

                <main class="flex-1 p-8">
                    {move || match active.get() {
                        AdminTab::Dashboard => view! { <OverviewTab data=data admin_id=admin_id /> }.into_view(),
                        AdminTab::History => view! { <HistoryTab /> }.into_view(),
                        AdminTab::Insights => view! { <InsightsTab data=data /> }.into_view(),
                        AdminTab::Settings => view! { <SettingsTab data=data admin=profile.clone() /> }.into_view(),
                    }}
                </main>
            </div>
        </div>
    }
    .into_view()
}
