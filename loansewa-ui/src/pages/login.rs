//! Applicant Login Page
//!
//! Applicants sign in with their email, mobile number or Aadhaar number.

use leptos::*;
use leptos_router::*;
use loansewa_core::models::LoginRequest;
use loansewa_core::session::Role;
use loansewa_core::validation::{validate_login, ValidationErrors};

use crate::api;
use crate::components::{field_error, FormError, TextField};
use crate::state::global::GlobalState;
use crate::state::session;

#[component]
pub fn Login() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    // Already signed in
    if session::current(Role::Applicant).is_some() {
        let navigate = navigate.clone();
        create_effect(move |_| navigate(Role::Applicant.home_route(), Default::default()));
    }

    let identifier = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let (remember, set_remember) = create_signal(false);
    let errors = create_rw_signal(ValidationErrors::default());
    let api_error = create_rw_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            identifier: identifier.get().trim().to_string(),
            password: password.get(),
        };
        if let Err(invalid) = validate_login(&request) {
            errors.set(invalid);
            return;
        }
        errors.set(ValidationErrors::default());
        api_error.set(None);
        set_submitting.set(true);

        let remember = remember.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    session::login(Role::Applicant, &response.user, remember);
                    set_submitting.set(false);
                    state.show_success(&format!("Welcome back, {}", response.user.full_name));
                    navigate(Role::Applicant.home_route(), Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    api_error.set(Some(e));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Welcome Back" subtitle="Login to your LoanSewa account">
            <form on:submit=submit class="space-y-5">
                <FormError message=api_error />
                <TextField
                    label="Email / Mobile / Aadhaar"
                    value=identifier
                    placeholder="Enter email, mobile or Aadhaar number"
                    error=field_error(errors, "identifier")
                />
                <TextField
                    label="Password"
                    value=password
                    input_type="password"
                    error=field_error(errors, "password")
                />
                <label class="flex items-center space-x-2 text-sm text-gray-600">
                    <input
                        type="checkbox"
                        prop:checked=move || remember.get()
                        on:change=move |ev| set_remember.set(event_target_checked(&ev))
                    />
                    <span>"Remember me"</span>
                </label>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 rounded-lg bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-300 text-white font-semibold"
                >
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-600">
                "Don't have an account? "
                <A href="/signup" class="text-indigo-600 font-medium">"Sign Up"</A>
            </p>
        </AuthCard>
    }
}

/// Centered card shared by the login and signup screens
#[component]
pub fn AuthCard(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-b from-indigo-50 to-white px-4 py-12">
            <div class="w-full max-w-md bg-white rounded-2xl shadow-lg p-8">
                <A href="/" class="flex items-center justify-center space-x-2 mb-6">
                    <span class="text-3xl">"🏦"</span>
                    <span class="text-2xl font-bold text-indigo-700">"LoanSewa"</span>
                </A>
                <h1 class="text-2xl font-bold text-center">{title}</h1>
                <p class="text-center text-gray-500 mb-8">{subtitle}</p>
                {children()}
            </div>
        </div>
    }
}
