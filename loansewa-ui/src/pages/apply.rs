//! Loan Application Page
//!
//! Collects the applicant's financial profile, submits it for scoring and
//! shows the assessment the API returns.

use leptos::*;
use leptos_router::*;
use loansewa_core::format::lakhs;
use loansewa_core::models::PredictionResponse;
use loansewa_core::session::Role;
use loansewa_core::status::ApplicationStatus;
use loansewa_core::validation::{LoanApplicationForm, ValidationErrors, LOAN_PURPOSES, LOAN_TYPES, RESIDENCE_TYPES};

use crate::api;
use crate::components::{field_error, ApplicantNav, FormError, Loading, RatingBadge, SelectField, StatusBadge, TextField};
use crate::state::global::GlobalState;
use crate::state::session;

#[component]
pub fn Apply() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let Some(user) = session::require(Role::Applicant) else {
        return view! { <Loading /> }.into_view();
    };

    let defaults = LoanApplicationForm::default();
    let age = create_rw_signal(defaults.age);
    let income = create_rw_signal(defaults.income);
    let loan_amount = create_rw_signal(defaults.loan_amount);
    let loan_tenure_months = create_rw_signal(defaults.loan_tenure_months);
    let avg_dpd = create_rw_signal(defaults.avg_dpd_per_delinquency);
    let delinquency_ratio = create_rw_signal(defaults.delinquency_ratio);
    let utilization = create_rw_signal(defaults.credit_utilization_ratio);
    let open_accounts = create_rw_signal(defaults.num_open_accounts);
    let residence_type = create_rw_signal(defaults.residence_type);
    let loan_purpose = create_rw_signal(defaults.loan_purpose);
    let loan_type = create_rw_signal(defaults.loan_type);

    let errors = create_rw_signal(ValidationErrors::default());
    let api_error = create_rw_signal(None::<String>);
    let result = create_rw_signal(None::<PredictionResponse>);
    let (submitting, set_submitting) = create_signal(false);

    let user_id = user.id;
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = LoanApplicationForm {
            age: age.get(),
            income: income.get(),
            loan_amount: loan_amount.get(),
            loan_tenure_months: loan_tenure_months.get(),
            avg_dpd_per_delinquency: avg_dpd.get(),
            delinquency_ratio: delinquency_ratio.get(),
            credit_utilization_ratio: utilization.get(),
            num_open_accounts: open_accounts.get(),
            residence_type: residence_type.get(),
            loan_purpose: loan_purpose.get(),
            loan_type: loan_type.get(),
        };
        let request = match form.parse() {
            Ok(request) => request,
            Err(invalid) => {
                errors.set(invalid);
                return;
            }
        };
        errors.set(ValidationErrors::default());
        api_error.set(None);
        set_submitting.set(true);

        spawn_local(async move {
            match api::apply(user_id, &request).await {
                Ok(response) => {
                    log::info!("Application {} scored", response.application.id);
                    state.show_success("Application submitted successfully");
                    result.set(Some(response));
                }
                Err(e) => {
                    log::error!("Error submitting application: {}", e);
                    api_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <ApplicantNav user=user />
        <main class="container mx-auto px-4 py-8 max-w-4xl space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Apply for a Loan"</h1>
                <p class="text-gray-500 mt-1">"Get an instant AI-powered credit assessment"</p>
            </div>

            {move || result.get().map(|response| view! { <AssessmentCard response=response /> })}

            <form on:submit=submit class="bg-white rounded-xl shadow-sm p-6 space-y-6">
                <FormError message=api_error />

                <h2 class="text-lg font-semibold">"Personal & Loan Details"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <TextField label="Age" value=age input_type="number" error=field_error(errors, "age") />
                    <TextField label="Annual Income (₹)" value=income input_type="number" error=field_error(errors, "income") />
                    <TextField label="Loan Amount (₹)" value=loan_amount input_type="number" error=field_error(errors, "loan_amount") />
                    <TextField
                        label="Loan Tenure (months)"
                        value=loan_tenure_months
                        input_type="number"
                        error=field_error(errors, "loan_tenure_months")
                    />
                    <SelectField label="Residence Type" value=residence_type options=&RESIDENCE_TYPES error=field_error(errors, "residence_type") />
                    <SelectField label="Loan Purpose" value=loan_purpose options=&LOAN_PURPOSES error=field_error(errors, "loan_purpose") />
                    <SelectField label="Loan Type" value=loan_type options=&LOAN_TYPES error=field_error(errors, "loan_type") />
                </div>

                <h2 class="text-lg font-semibold">"Credit History"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <TextField
                        label="Average DPD per Delinquency"
                        value=avg_dpd
                        input_type="number"
                        error=field_error(errors, "avg_dpd_per_delinquency")
                    />
                    <TextField
                        label="Delinquency Ratio (%)"
                        value=delinquency_ratio
                        input_type="number"
                        error=field_error(errors, "delinquency_ratio")
                    />
                    <TextField
                        label="Credit Utilization Ratio (%)"
                        value=utilization
                        input_type="number"
                        error=field_error(errors, "credit_utilization_ratio")
                    />
                    <TextField
                        label="Open Loan Accounts"
                        value=open_accounts
                        input_type="number"
                        error=field_error(errors, "num_open_accounts")
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-3 rounded-lg bg-indigo-600 hover:bg-indigo-700 disabled:bg-indigo-300 text-white font-semibold"
                >
                    {move || if submitting.get() { "Assessing..." } else { "Submit Application" }}
                </button>
            </form>
        </main>
    }
    .into_view()
}

/// Outcome of a scored application
#[component]
fn AssessmentCard(response: PredictionResponse) -> impl IntoView {
    let app = response.application;
    let score = app.credit_score.map(|s| s.to_string()).unwrap_or_else(|| "--".to_string());
    let default_probability = app
        .default_probability
        .map(|p| format!("{:.1}%", p * 100.0))
        .unwrap_or_else(|| "--".to_string());

    view! {
        <div class="bg-white rounded-xl shadow-sm p-6 border-l-4 border-indigo-600">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-lg font-semibold">"Credit Assessment"</h2>
                <StatusBadge status=app.status.clone() />
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <div>
                    <div class="text-sm text-gray-500">"Credit Score"</div>
                    <div class="text-3xl font-bold">{score}</div>
                </div>
                <div>
                    <div class="text-sm text-gray-500">"Eligibility"</div>
                    <div class="mt-2"><RatingBadge rating=app.rating.clone() /></div>
                </div>
                <div>
                    <div class="text-sm text-gray-500">"Default Probability"</div>
                    <div class="text-xl font-semibold">{default_probability}</div>
                </div>
                <div>
                    <div class="text-sm text-gray-500">"Loan to Income"</div>
                    <div class="text-xl font-semibold">{format!("{:.2}", response.loan_to_income_ratio)}</div>
                </div>
            </div>
            <p class="mt-4 text-sm text-gray-600">
                {ApplicationStatus::parse(&app.status).outcome_sentence(&format!(
                    "{} for {}",
                    app.loan_type.clone().unwrap_or_else(|| "Loan".to_string()),
                    lakhs(app.loan_amount, 2)
                ))}
            </p>
            <A href="/dashboard" class="inline-block mt-4 text-indigo-600 font-medium">"View all applications →"</A>
        </div>
    }
}
