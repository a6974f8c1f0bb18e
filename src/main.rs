use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::info;
use web_sys::MouseEvent;

mod config;
mod content;
mod error;
mod geometry;
mod anim;
mod interaction;
mod scroll;
mod components {
    pub mod custom_cursor;
    pub mod custom_select;
    pub mod footer;
    pub mod magnetic_button;
}
mod sections {
    pub mod before_after;
    pub mod contact;
    pub mod gallery;
    pub mod hero;
    pub mod positioning;
    pub mod process;
    pub mod social_proof;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::{custom_cursor::CustomCursor, footer::Footer};
use content::SiteContent;
use interaction::{hover::HoverRegistry, pointer::PointerProvider};
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            let scrolled = scroll_y > config::NAV_SCROLLED_OFFSET;
            if scrolled != *is_scrolled {
                is_scrolled.set(scrolled);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { content.brand.clone() }
                </Link<Route>>

                <button class={classes!("burger-menu", (*menu_open).then(|| "open"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for content.nav.iter().map(|link| html! {
                        <a href={link.href.clone()} class="nav-link" onclick={close_menu.clone()}>
                            { link.label.clone() }
                        </a>
                    }) }
                    <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>
                        {"Étude personnalisée"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| SiteContent::load(), ());
    let registry = use_state(HoverRegistry::new);

    html! {
        <BrowserRouter>
            <ContextProvider<Rc<SiteContent>> context={content}>
                <ContextProvider<HoverRegistry> context={(*registry).clone()}>
                    <PointerProvider>
                        <Nav />
                        <Switch<Route> render={switch} />
                        <Footer />
                        <CustomCursor />
                    </PointerProvider>
                </ContextProvider<HoverRegistry>>
            </ContextProvider<Rc<SiteContent>>>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Verdéa site");
    yew::Renderer::<App>::new().render();
}
