//! Patient portal. Guarded: only `patient` accounts render here, everyone
//! else is redirected by the guard before any content mounts.

use api::settings::UpdateSettingsRequest;
use dioxus::prelude::*;
use ui::{use_auth, use_auth_session, LogoutButton, RequirePatient};

const LANGUAGES: [(&str, &str); 5] = [
    ("en", "English"),
    ("fr", "Français"),
    ("es", "Español"),
    ("sw", "Kiswahili"),
    ("ar", "العربية"),
];

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        RequirePatient {
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let auth = use_auth();
    let session = use_auth_session();

    let mut stats = use_resource({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { api::dashboard::get_dashboard_stats(&session).await }
        }
    });

    let appointments = use_resource({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { api::dashboard::get_upcoming_appointments(&session).await }
        }
    });

    let first_name = auth()
        .user
        .map(|user| user.first_name)
        .unwrap_or_default();

    rsx! {
        div {
            class: "min-h-screen p-8 max-w-[64rem] mx-auto",

            header {
                class: "flex items-center justify-between mb-8",
                h1 {
                    class: "text-neutral-800 font-bold text-[1.5rem]",
                    "Welcome back, {first_name}"
                }
                LogoutButton {
                    class: "px-4 py-2 border border-neutral-300 rounded text-sm",
                }
            }

            section {
                class: "mb-8",
                {match &*stats.read_unchecked() {
                    Some(Ok(stats)) => rsx! {
                        div {
                            class: "grid grid-cols-4 gap-4",
                            StatCard { label: "Appointments", value: stats.total_appointments }
                            StatCard { label: "Completed", value: stats.completed_appointments }
                            StatCard { label: "Hospitals", value: stats.linked_hospitals }
                            StatCard { label: "Active chats", value: stats.active_chats }
                        }
                    },
                    Some(Err(err)) if err.is_unauthorized() => rsx! {},
                    Some(Err(err)) => rsx! {
                        div {
                            class: "p-4 bg-red-50 border border-red-200 rounded text-red-600 text-sm",
                            "{err} "
                            button {
                                class: "underline",
                                onclick: move |_| stats.restart(),
                                "Retry"
                            }
                        }
                    },
                    None => rsx! {
                        p { class: "text-neutral-500", "Loading your overview..." }
                    },
                }}
            }

            section {
                class: "mb-8",
                h2 { class: "mb-3 font-semibold text-neutral-700", "Upcoming appointments" }
                {match &*appointments.read_unchecked() {
                    Some(Ok(appointments)) if appointments.is_empty() => rsx! {
                        p { class: "text-neutral-500 text-sm", "Nothing scheduled." }
                    },
                    Some(Ok(appointments)) => rsx! {
                        ul {
                            class: "flex flex-col gap-2",
                            for appointment in appointments.iter() {
                                li {
                                    key: "{appointment.id}",
                                    class: "p-3 border border-neutral-200 rounded flex justify-between",
                                    span { "{appointment.doctor_name} — {appointment.hospital_name}" }
                                    span {
                                        class: "text-neutral-500 text-sm",
                                        "{appointment.scheduled_date} {appointment.scheduled_time}"
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(err)) if err.is_unauthorized() => rsx! {},
                    Some(Err(_)) => rsx! {
                        p { class: "text-neutral-500 text-sm", "Could not load appointments." }
                    },
                    None => rsx! {
                        p { class: "text-neutral-500 text-sm", "Loading..." }
                    },
                }}
            }

            LanguageCard {}
        }
    }
}

#[component]
fn StatCard(label: String, value: u32) -> Element {
    rsx! {
        div {
            class: "p-4 border border-neutral-200 rounded",
            div { class: "text-[1.5rem] font-bold text-neutral-800", "{value}" }
            div { class: "text-sm text-neutral-500", "{label}" }
        }
    }
}

/// Preferred-language selector backed by the settings endpoints.
#[component]
fn LanguageCard() -> Element {
    let session = use_auth_session();
    let mut saved = use_signal(|| false);

    let settings = use_resource({
        let session = session.clone();
        move || {
            let session = session.clone();
            async move { api::settings::get_settings(&session).await }
        }
    });

    let current = match &*settings.read_unchecked() {
        Some(Ok(settings)) => settings.preferred_language.clone(),
        _ => None,
    };
    let current = current.unwrap_or_else(|| "en".to_string());

    let onchange = move |evt: FormEvent| {
        let session = session.clone();
        spawn(async move {
            saved.set(false);
            let request = UpdateSettingsRequest {
                preferred_language: Some(evt.value()),
                ..Default::default()
            };
            match api::settings::update_settings(&session, &request).await {
                Ok(_) => saved.set(true),
                Err(err) => tracing::warn!("failed to update language: {err}"),
            }
        });
    };

    rsx! {
        section {
            class: "p-4 border border-neutral-200 rounded max-w-[20rem]",
            h2 { class: "mb-2 font-semibold text-neutral-700", "Preferred language" }
            select {
                class: "w-full px-2 py-1.5 border border-neutral-200 rounded",
                value: "{current}",
                onchange: onchange,
                for (code, label) in LANGUAGES {
                    option { value: "{code}", selected: current == code, "{label}" }
                }
            }
            if saved() {
                p { class: "mt-2 text-teal-600 text-sm", "Saved." }
            }
        }
    }
}
