//! Hospital admin portal shell.

use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, RequireAdmin};

#[component]
pub fn Admin() -> Element {
    rsx! {
        RequireAdmin {
            AdminContent {}
        }
    }
}

#[component]
fn AdminContent() -> Element {
    let auth = use_auth();
    let name = auth().user.map(|user| user.full_name()).unwrap_or_default();

    rsx! {
        div {
            class: "min-h-screen p-8 max-w-[64rem] mx-auto",

            header {
                class: "flex items-center justify-between mb-8",
                h1 {
                    class: "text-neutral-800 font-bold text-[1.5rem]",
                    "Facility overview — {name}"
                }
                LogoutButton {
                    class: "px-4 py-2 border border-neutral-300 rounded text-sm",
                }
            }

            p {
                class: "text-neutral-500",
                "Staff, departments, and hospital operations will appear here."
            }
        }
    }
}
