//! Public landing page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 text-center",

            h1 {
                class: "mb-3 text-neutral-800 font-bold text-[2rem]",
                "Kliniq"
            }

            p {
                class: "mb-8 text-neutral-600 max-w-[28rem]",
                "Healthcare in your language. Describe your symptoms, and your "
                "care team reviews them with AI-drafted summaries."
            }

            div {
                class: "flex gap-3",
                Link {
                    class: "px-5 py-2.5 bg-teal-600 text-white rounded font-medium",
                    to: Route::Auth { mode: String::new(), expired: String::new() },
                    "Sign in"
                }
                Link {
                    class: "px-5 py-2.5 border border-teal-600 text-teal-700 rounded font-medium",
                    to: Route::Auth { mode: "register".to_string(), expired: String::new() },
                    "Create an account"
                }
            }
        }
    }
}
