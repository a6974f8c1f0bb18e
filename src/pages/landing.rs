use yew::prelude::*;

use crate::sections::{
    before_after::BeforeAfter,
    contact::Contact,
    gallery::Gallery,
    hero::Hero,
    positioning::Positioning,
    process::Process,
    social_proof::SocialProof,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="landing">
            <Hero />
            <SocialProof />
            <BeforeAfter />
            <Process />
            <Gallery />
            <Positioning />
            <Contact />
        </main>
    }
}
