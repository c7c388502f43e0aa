use api_client::ApiClient;
use dioxus::prelude::*;

mod guard;
mod routes;
mod session;

use routes::Route;
use session::SessionState;

const THEME: Asset = asset!("/assets/theme.css");

fn main() {
    dioxus::logger::initialize_default();

    match ApiClient::from_config() {
        Ok(client) => {
            tracing::info!(base_url = client.base_url(), "starting dispatch desk");
            dioxus::LaunchBuilder::new().with_context(client).launch(App);
        }
        Err(err) => {
            tracing::error!(error = %err, "could not build the dispatch API client");
            dioxus::launch(StartupError);
        }
    }
}

#[component]
fn App() -> Element {
    let client = use_context::<ApiClient>();

    use_context_provider(|| api_client::config::feature_flags().clone());

    // Created once here; every view below reads the same session.
    let mut session = use_context_provider(SessionState::new);

    // Identity check runs once per app start. Until it settles the session
    // stays loading and guards show their spinner.
    use_hook(move || {
        spawn(async move {
            let resolved = api_client::resolve_session(&client).await;
            session.settle(resolved);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}

#[component]
fn StartupError() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME }
        div { class: "startup-error",
            h1 { "Dispatch Desk is unavailable" }
            p { "The dispatch service client could not be initialized. Reload the page or contact your administrator." }
        }
    }
}
