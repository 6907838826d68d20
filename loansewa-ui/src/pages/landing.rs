//! Landing Page
//!
//! Public front page with the sign-up call to action.

use leptos::*;
use leptos_router::*;

const STEPS: [(&str, &str, &str); 4] = [
    ("1", "Create Account", "Sign up with your basic details"),
    ("2", "Submit Documents", "Upload required documents securely"),
    ("3", "Get Approved", "Instant AI-powered credit assessment"),
    ("4", "Receive Funds", "Money transferred to your account"),
];

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gradient-to-b from-indigo-50 to-white">
            <header class="container mx-auto px-4 flex items-center justify-between h-20">
                <div class="flex items-center space-x-2">
                    <span class="text-3xl">"🏦"</span>
                    <span class="text-2xl font-bold text-indigo-700">"LoanSewa"</span>
                </div>
                <div class="flex items-center space-x-3">
                    <A href="/login" class="px-5 py-2 rounded-lg text-indigo-700 hover:bg-indigo-100 font-medium">
                        "Login"
                    </A>
                    <A href="/signup" class="px-5 py-2 rounded-lg bg-indigo-600 hover:bg-indigo-700 text-white font-medium">
                        "Sign Up"
                    </A>
                </div>
            </header>

            <section class="container mx-auto px-4 py-20 text-center">
                <h1 class="text-5xl font-extrabold text-gray-900 mb-6">"Fast, Transparent, Digital Loans"</h1>
                <p class="text-xl text-gray-600 mb-10 max-w-2xl mx-auto">
                    "Empowering citizens with AI-driven credit assessment and instant loan approvals"
                </p>
                <A
                    href="/signup"
                    class="inline-block px-8 py-4 rounded-xl bg-indigo-600 hover:bg-indigo-700 text-white text-lg font-semibold"
                >
                    "Apply Now →"
                </A>
            </section>

            <section class="container mx-auto px-4 pb-20">
                <h2 class="text-3xl font-bold text-center mb-12">"How It Works"</h2>
                <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                    {STEPS.into_iter().map(|(number, title, text)| view! {
                        <div class="bg-white rounded-xl shadow-sm p-6 text-center">
                            <div class="w-12 h-12 mx-auto mb-4 rounded-full bg-indigo-600 text-white flex items-center justify-center text-xl font-bold">
                                {number}
                            </div>
                            <h3 class="text-lg font-semibold mb-2">{title}</h3>
                            <p class="text-gray-600 text-sm">{text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
