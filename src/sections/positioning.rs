use std::rc::Rc;

use yew::prelude::*;

use crate::anim::{Ease, Pose, Reveal};
use crate::content::SiteContent;
use crate::geometry::query_all_in;
use crate::scroll::{reveal_on_enter, use_choreography, TriggerPoint};

#[function_component(Positioning)]
pub fn positioning() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let quote = use_node_ref();
    let points = use_node_ref();

    {
        let quote = quote.clone();
        let points = points.clone();
        use_choreography(move |scene, animator| {
            reveal_on_enter(
                scene,
                animator,
                "quote words",
                quote.clone(),
                TriggerPoint::top_at(0.75),
                query_all_in(&quote, ".quote-word"),
                Reveal::new(Pose::hidden().y(40.0).rotate_x(-45.0), 1200.0, Ease::Power3Out).stagger(50.0),
            );
            reveal_on_enter(
                scene,
                animator,
                "positioning points",
                points.clone(),
                TriggerPoint::top_at(0.85),
                query_all_in(&points, ".point-item"),
                Reveal::new(Pose::hidden().x(-30.0), 800.0, Ease::Power2Out).stagger(150.0),
            );
        });
    }

    let positioning = &content.positioning;
    html! {
        <section id="positioning" class="positioning">
            <div class="positioning-grid">
                <div ref={quote} class="quote-container">
                    <p class="eyebrow">{"Notre Philosophie"}</p>
                    <h2 class="quote">
                        { for positioning.quote.split_whitespace().map(|word| html! {
                            <span class="word-mask"><span class="quote-word">{ word.to_string() }</span></span>
                        }) }
                    </h2>
                    <div class="rule"></div>
                </div>
                <div ref={points} class="points-container">
                    <p class="lead">{ positioning.lead.clone() }</p>
                    <ul>
                        { for positioning.points.iter().map(|point| html! {
                            <li class="point-item">
                                <span class="point-check">{"✓"}</span>
                                <span class="point-text">{ point.clone() }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}
