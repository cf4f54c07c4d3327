use dioxus::prelude::*;

use model::Id;
use ui::{AuthProvider, ToastProvider};
use views::{
    Activities, AppLayout, ApplicationDetail, Applications, AuthCallback, Dashboard, Login,
    NotFound, Profile,
};

mod config;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/applications")]
        Applications {},
        #[route("/applications/:id")]
        ApplicationDetail { id: Id },
        #[route("/activities")]
        Activities {},
        #[route("/profile")]
        Profile {},
    #[end_layout]
    #[route("/login")]
    Login {},
    #[route("/auth/callback?:code&:state&:error")]
    AuthCallback { code: String, state: String, error: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(config::load);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Stylesheet { href: ui::VIEWS_CSS }

        ToastProvider {
            AuthProvider {
                config: config,
                Router::<Route> {}
            }
        }
    }
}
