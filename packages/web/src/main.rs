use dioxus::prelude::*;

use ui::AuthProvider;
use views::{Admin, Auth, Clinician, Dashboard, Home, Verify};

mod views;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/auth?:mode&:expired")]
    Auth { mode: String, expired: String },
    #[route("/auth/verify?:email")]
    Verify { email: String },
    #[route("/dashboard")]
    Dashboard {},
    #[route("/clinician")]
    Clinician {},
    #[route("/admin")]
    Admin {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AuthProvider {
            Router::<Route> {}
        }
    }
}
