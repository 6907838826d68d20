//! Applicant Signup Page

use leptos::*;
use leptos_router::*;
use loansewa_core::models::SignupRequest;
use loansewa_core::session::Role;
use loansewa_core::validation::{validate_signup, ValidationErrors};

use crate::api;
use crate::components::{field_error, FormError, TextField};
use crate::pages::login::AuthCard;
use crate::state::global::GlobalState;
use crate::state::session;

#[component]
pub fn Signup() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let full_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let mobile_number = create_rw_signal(String::new());
    let aadhar = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let errors = create_rw_signal(ValidationErrors::default());
    let api_error = create_rw_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let request = SignupRequest {
            full_name: full_name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            mobile_number: mobile_number.get().trim().to_string(),
            aadhar: aadhar.get().trim().to_string(),
            password: password.get(),
            confirm_password: confirm_password.get(),
        };
        if let Err(invalid) = validate_signup(&request) {
            errors.set(invalid);
            return;
        }
        errors.set(ValidationErrors::default());
        api_error.set(None);
        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::signup(&request).await {
                Ok(response) => {
                    session::login(Role::Applicant, &response.user, false);
                    set_submitting.set(false);
                    state.show_success("Account created successfully");
                    navigate(Role::Applicant.home_route(), Default::default());
                }
                Err(e) => {
                    log::warn!("Signup failed: {}", e);
                    api_error.set(Some(e));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <AuthCard title="Create Account" subtitle="Join LoanSewa to apply for loans online">
            <form on:submit=submit class="space-y-4">
                <FormError message=api_error />
                <TextField label="Full Name" value=full_name error=field_error(errors, "full_name") />
                <TextField label="Email" value=email input_type="email" error=field_error(errors, "email") />
                <TextField
                    label="Mobile Number"
                    value=mobile_number
                    placeholder="10-digit mobile number"
                    error=field_error(errors, "mobile_number")
                />
                <TextField
                    label="Aadhaar Number"
                    value=aadhar
                    placeholder="12-digit Aadhaar number"
                    error=field_error(errors, "aadhar")
                />
                <TextField label="Password" value=password input_type="password" error=field_error(errors, "password") />
                <TextField
                    label="Confirm Password"
                    value=confirm_password
                    input_type="password"
                    error=field_error(errors, "confirm_password")
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 rounded-lg bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-300 text-white font-semibold"
                >
                    {move || if submitting.get() { "Creating account..." } else { "Sign Up" }}
                </button>
            </form>
            <p class="mt-6 text-center text-sm text-gray-600">
                "Already have an account? "
                <A href="/login" class="text-indigo-600 font-medium">"Login"</A>
            </p>
        </AuthCard>
    }
}
