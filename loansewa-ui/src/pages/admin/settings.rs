//! Settings tab: admin profile, API connection and user management

use leptos::*;
use loansewa_core::models::User;

use super::AdminData;
use crate::api;
use crate::dialogs;
use crate::state::global::GlobalState;

#[component]
pub fn SettingsTab(data: AdminData, admin: User) -> impl IntoView {
    view! {
        <div class="space-y-8">
            <section class="bg-white rounded-xl shadow-sm p-6">
                <h2 class="text-lg font-semibold mb-4">"Admin Profile"</h2>
                <dl class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    <ProfileItem label="Full Name" value=admin.full_name />
                    <ProfileItem label="Email" value=admin.email />
                    <ProfileItem label="Mobile" value=admin.mobile_number />
                </dl>
            </section>

            <ApiSettings />

            <UserManagement data=data />
        </div>
    }
}

#[component]
fn ProfileItem(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div>
            <dt class="text-sm text-gray-500">{label}</dt>
            <dd class="font-medium">{if value.is_empty() { "-".to_string() } else { value }}</dd>
        </div>
    }
}

/// Override of the API base URL kept in local storage
#[component]
fn ApiSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let api_url = create_rw_signal(api::get_api_base());

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        api_url.set(api::get_api_base());
        state.show_success("API URL saved");
    };

    let reset_url = move |_| {
        api::set_api_base("");
        api_url.set(api::get_api_base());
        state.show_success("API URL reset");
    };

    view! {
        <section class="bg-white rounded-xl shadow-sm p-6">
            <h2 class="text-lg font-semibold mb-4">"API Connection"</h2>
            <label class="block text-sm text-gray-500 mb-2">"LoanSewa API URL"</label>
            <div class="flex space-x-2">
                <input
                    type="text"
                    prop:value=move || api_url.get()
                    on:input=move |ev| api_url.set(event_target_value(&ev))
                    class="flex-1 rounded-lg border border-gray-300 px-4 py-2 focus:border-indigo-500 focus:outline-none"
                />
                <button
                    on:click=save_url
                    class="px-4 py-2 rounded-lg bg-indigo-600 hover:bg-indigo-700 text-white font-medium"
                >
                    "Save"
                </button>
                <button
                    on:click=reset_url
                    class="px-4 py-2 rounded-lg bg-gray-200 hover:bg-gray-300 font-medium"
                >
                    "Reset"
                </button>
            </div>
        </section>
    }
}

#[component]
fn UserManagement(data: AdminData) -> impl IntoView {
    view! {
        <section class="bg-white rounded-xl shadow-sm overflow-hidden">
            <h2 class="text-lg font-semibold px-6 py-4 border-b border-gray-100">"User Management"</h2>
            <table class="w-full text-sm">
                <thead class="bg-gray-50 text-gray-500 text-left">
                    <tr>
                        <th class="px-6 py-3">"ID"</th>
                        <th class="px-6 py-3">"Name"</th>
                        <th class="px-6 py-3">"Email"</th>
                        <th class="px-6 py-3">"Mobile"</th>
                        <th class="px-6 py-3">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || data.users.get().into_iter().map(|user| {
                        let id = user.id;
                        view! {
                            <tr class="border-t border-gray-100">
                                <td class="px-6 py-3">{user.id}</td>
                                <td class="px-6 py-3 font-medium">{user.full_name}</td>
                                <td class="px-6 py-3 text-gray-500">{user.email}</td>
                                <td class="px-6 py-3">{user.mobile_number}</td>
                                <td class="px-6 py-3">
                                    <button
                                        on:click=move |_| delete_user(data, id)
                                        class="px-3 py-1 rounded-lg bg-red-50 hover:bg-red-100 text-red-700 text-xs font-semibold"
                                    >
                                        "🗑️ Delete"
                                    </button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </section>
    }
}

fn delete_user(data: AdminData, user_id: i64) {
    if !dialogs::confirm("Are you sure you want to delete this user and all associated applications?") {
        return;
    }

    spawn_local(async move {
        match api::delete_user(user_id).await {
            Ok(()) => {
                log::info!("User {} deleted", user_id);
                data.users.update(|users| users.retain(|user| user.id != user_id));
                dialogs::alert("User deleted successfully");
            }
            Err(e) => dialogs::alert(&format!("Error deleting user: {}", e)),
        }
    });
}
