//! Admin Login Page

use leptos::*;
use leptos_router::*;
use loansewa_core::models::AdminLoginRequest;
use loansewa_core::session::Role;
use loansewa_core::validation::is_email;

use crate::api;
use crate::components::{FormError, TextField};
use crate::pages::login::AuthCard;
use crate::state::session;

#[component]
pub fn AdminLogin() -> impl IntoView {
    let navigate = use_navigate();

    if session::current(Role::Admin).is_some() {
        let navigate = navigate.clone();
        create_effect(move |_| navigate(Role::Admin.home_route(), Default::default()));
    }

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = AdminLoginRequest {
            email: email.get().trim().to_string(),
            password: password.get(),
        };
        if !is_email(&request.email) || request.password.is_empty() {
            error.set(Some("Enter your admin email and password".to_string()));
            return;
        }
        error.set(None);
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::admin_login(&request).await {
                Ok(response) => {
                    session::login(Role::Admin, &response.admin, false);
                    set_submitting.set(false);
                    navigate(Role::Admin.home_route(), Default::default());
                }
                Err(e) => {
                    log::warn!("Admin login failed: {}", e);
                    error.set(Some(e));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Admin Login" subtitle="LoanSewa back office">
            <form on:submit=submit class="space-y-5">
                <FormError message=error />
                <TextField label="Email" value=email input_type="email" />
                <TextField label="Password" value=password input_type="password" />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 rounded-lg bg-indigo-900 hover:bg-indigo-800 disabled:bg-indigo-300 text-white font-semibold"
                >
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </AuthCard>
    }
}
