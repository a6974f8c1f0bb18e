use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found">
            <p class="eyebrow">{"404"}</p>
            <h1>{"Cette allée ne mène nulle part."}</h1>
            <Link<Route> to={Route::Home} classes="button-outline">
                {"Retour à l'accueil"}
            </Link<Route>>
        </main>
    }
}
