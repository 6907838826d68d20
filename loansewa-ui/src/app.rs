//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{
    AdminDashboard, AdminLogin, Analytics, Apply, Dashboard, Improve, Landing, Login, NotFound, Signup,
};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    log::info!("LoanSewa UI starting, API base {}", crate::api::get_api_base());

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900">
                <Routes>
                    <Route path="/" view=Landing />
                    <Route path="/login" view=Login />
                    <Route path="/signup" view=Signup />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/apply" view=Apply />
                    <Route path="/analytics" view=Analytics />
                    <Route path="/improve" view=Improve />
                    <Route path="/admin/login" view=AdminLogin />
                    <Route path="/admin" view=AdminDashboard />
                    <Route path="/*any" view=NotFound />
                </Routes>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}
