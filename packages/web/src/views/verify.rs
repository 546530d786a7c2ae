//! Post-signup email-verification step. Signing up never authenticates;
//! users land here until they confirm their address.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Verify(email: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 text-center",

            h1 {
                class: "mb-2 text-neutral-800 font-bold text-[1.5rem]",
                "Check your email"
            }

            p {
                class: "mb-6 text-neutral-600 max-w-[26rem]",
                if email.is_empty() {
                    "We sent you a verification link. Follow it to activate your account."
                } else {
                    "We sent a verification link to {email}. Follow it to activate your account."
                }
            }

            Link {
                class: "text-teal-600 underline",
                to: Route::Auth { mode: String::new(), expired: String::new() },
                "Back to sign in"
            }
        }
    }
}
