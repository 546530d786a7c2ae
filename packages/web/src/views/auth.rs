//! Combined login / registration page.
//!
//! Arriving with `?expired=true` (the client's 401 redirect) shows a
//! one-time "session expired" notice and strips the marker from the
//! visible URL so a reload doesn't show it again.

use dioxus::prelude::*;
use session::{SignupRequest, SignupRole};
use ui::{use_auth, use_auth_session, AuthState};

use crate::Route;

const SIGNUP_ROLES: [(SignupRole, &str, &str); 4] = [
    (SignupRole::Patient, "Patient", "Get care in your language"),
    (SignupRole::Nurse, "Nurse", "Manage patient triage"),
    (SignupRole::Doctor, "Doctor", "Review & verify cases"),
    (SignupRole::Admin, "Hospital Admin", "Manage your facility"),
];

/// Auth page component.
#[component]
pub fn Auth(mode: String, expired: String) -> Element {
    let session = use_auth_session();
    let mut auth_state = use_auth();
    let nav = use_navigator();

    let mut register_mode = use_signal(|| mode == "register");
    let mut role_choice = use_signal(|| SignupRole::Patient);
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // One-time expiry notice, then clean the marker out of the URL.
    use_hook(move || {
        if expiry_notice_requested(&expired) {
            notice.set(Some(
                "Your session has expired. Please log in again.".to_string(),
            ));
            strip_visible_query();
        }
    });

    // Already signed in: straight to the portal for their role.
    let state = auth_state();
    if !state.loading {
        if let Some(user) = &state.user {
            nav.replace(user.role.landing_route());
            return rsx! {};
        }
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() || !e.contains('@') {
                error.set(Some("Please enter a valid email".to_string()));
                return;
            }

            if register_mode() {
                let name = full_name().trim().to_string();
                if name.is_empty() {
                    error.set(Some("Full name is required".to_string()));
                    return;
                }
                if p.len() < 8 {
                    error.set(Some("Password must be at least 8 characters".to_string()));
                    return;
                }
                if p != confirm_password() {
                    error.set(Some("Passwords do not match".to_string()));
                    return;
                }

                loading.set(true);
                let form = SignupRequest {
                    full_name: name,
                    email: e.clone(),
                    password: p,
                    password_confirm: confirm_password(),
                    role: role_choice(),
                };
                match session.signup(form).await {
                    Ok(()) => {
                        // The account may still need email verification, so
                        // route to the verify step instead of a portal.
                        nav.push(Route::Verify { email: e });
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            } else {
                if p.is_empty() {
                    error.set(Some("Password is required".to_string()));
                    return;
                }

                loading.set(true);
                match session.login(&e, &p).await {
                    Ok(user) => {
                        auth_state.set(AuthState::authenticated(user.clone()));
                        nav.replace(user.role.landing_route());
                    }
                    Err(err) => {
                        loading.set(false);
                        error.set(Some(err.to_string()));
                    }
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.75rem]",
                "Kliniq"
            }

            p {
                class: "mb-8 text-neutral-600 text-[0.9375rem]",
                if register_mode() { "Create your account" } else { "Sign in to continue" }
            }

            form {
                onsubmit: handle_submit,
                class: "flex flex-col gap-3 w-full max-w-[360px]",

                if let Some(msg) = notice() {
                    div {
                        class: "px-2.5 py-2.5 bg-amber-50 border border-amber-200 rounded text-amber-700 text-[0.8125rem]",
                        "{msg}"
                    }
                }

                if let Some(err) = error() {
                    div {
                        class: "px-2.5 py-2.5 bg-red-50 border border-red-200 rounded text-red-600 text-[0.8125rem]",
                        "{err}"
                    }
                }

                if register_mode() {
                    div {
                        class: "grid grid-cols-2 gap-2 mb-1",
                        for (role, label, description) in SIGNUP_ROLES {
                            button {
                                r#type: "button",
                                class: if role_choice() == role {
                                    "p-3 border-2 border-teal-500 rounded text-left"
                                } else {
                                    "p-3 border border-neutral-200 rounded text-left"
                                },
                                onclick: move |_| role_choice.set(role),
                                div { class: "font-medium text-sm", "{label}" }
                                div { class: "text-xs text-neutral-500", "{description}" }
                            }
                        }
                    }

                    input {
                        class: "w-full px-3 py-2 border border-neutral-200 rounded",
                        r#type: "text",
                        placeholder: "Full name",
                        value: full_name(),
                        oninput: move |evt: FormEvent| full_name.set(evt.value()),
                    }
                }

                input {
                    class: "w-full px-3 py-2 border border-neutral-200 rounded",
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    class: "w-full px-3 py-2 border border-neutral-200 rounded",
                    r#type: "password",
                    placeholder: if register_mode() { "Password (min 8 characters)" } else { "Password" },
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                if register_mode() {
                    input {
                        class: "w-full px-3 py-2 border border-neutral-200 rounded",
                        r#type: "password",
                        placeholder: "Confirm password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }
                }

                button {
                    class: "w-full py-2.5 bg-teal-600 text-white rounded font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        if register_mode() { "Creating account..." } else { "Signing in..." }
                    } else {
                        if register_mode() { "Sign up" } else { "Sign in" }
                    }
                }
            }

            p {
                class: "mt-6 text-sm text-neutral-600",
                if register_mode() { "Already have an account? " } else { "New to Kliniq? " }
                button {
                    r#type: "button",
                    class: "text-teal-600 underline",
                    onclick: move |_| {
                        error.set(None);
                        register_mode.set(!register_mode());
                    },
                    if register_mode() { "Sign in" } else { "Create an account" }
                }
            }
        }
    }
}

/// Only the exact marker the expiry redirect sets triggers the notice;
/// anything else in the parameter is ignored.
fn expiry_notice_requested(expired: &str) -> bool {
    expired == "true"
}

/// Replace the visible URL with the bare login path, dropping the expiry
/// marker (and anything else in the query) without a navigation.
fn strip_visible_query() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(session::routes::LOGIN_PATH),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_marker_shows_the_notice() {
        assert!(expiry_notice_requested("true"));
        assert!(!expiry_notice_requested(""));
        assert!(!expiry_notice_requested("1"));
        assert!(!expiry_notice_requested("TRUE"));
    }
}
