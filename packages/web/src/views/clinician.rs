//! Clinician portal shell. Nurses and doctors both land here; the
//! sub-type only changes the greeting.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, RequireClinician};

#[component]
pub fn Clinician() -> Element {
    rsx! {
        RequireClinician {
            ClinicianContent {}
        }
    }
}

#[component]
fn ClinicianContent() -> Element {
    let auth = use_auth();

    let (title, name) = match auth().user {
        Some(user) => {
            let title = user
                .clinician_kind
                .map(|kind| kind.label())
                .unwrap_or("Clinician");
            (title, user.full_name())
        }
        None => ("Clinician", String::new()),
    };

    rsx! {
        div {
            class: "min-h-screen p-8 max-w-[64rem] mx-auto",

            header {
                class: "flex items-center justify-between mb-8",
                h1 {
                    class: "text-neutral-800 font-bold text-[1.5rem]",
                    "{title} {name} — Triage queue"
                }
                LogoutButton {
                    class: "px-4 py-2 border border-neutral-300 rounded text-sm",
                }
            }

            p {
                class: "text-neutral-500",
                "Patient cases awaiting review will appear here."
            }
        }
    }
}
