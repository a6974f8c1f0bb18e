use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::anim::{Ease, Pose, Reveal};
use crate::content::{Project, SiteContent};
use crate::geometry::{query_all_in, Edge};
use crate::interaction::hover::use_hover_target;
use crate::scroll::{reveal_on_enter, use_choreography, ScrollEnd, Signal, TriggerPoint};

/// Image pose while its card crosses the viewport: it drifts from above to below
/// its slot, further for faster cards, oversized so its edges never show.
fn parallax_pose(speed: f64, progress: f64) -> Pose {
    let drift = 10.0 * speed;
    Pose::IDENTITY.scale(1.2).y_percent(-drift + 2.0 * drift * progress)
}

#[derive(Properties, PartialEq)]
struct GalleryCardProps {
    project: Project,
}

#[function_component(GalleryCard)]
fn gallery_card(props: &GalleryCardProps) -> Html {
    let node = use_node_ref();
    use_hover_target(node.clone());
    let project = &props.project;

    html! {
        <div ref={node} class={classes!("gallery-card", project.span.clone())}>
            <img class="parallax-bg" src={project.src.clone()} alt={project.title.clone()} loading="lazy" />
            <div class="gallery-vignette"></div>
            <div class="gallery-caption">
                <p class="gallery-location">{ project.location.clone() }</p>
                <h3>{ project.title.clone() }</h3>
            </div>
        </div>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let section = use_node_ref();

    {
        let section = section.clone();
        let speeds: Vec<f64> = content.gallery.iter().map(|project| project.speed).collect();
        use_choreography(move |scene, animator| {
            let cards = query_all_in(&section, ".gallery-card");
            for (card, speed) in cards.iter().zip(speeds) {
                let Some(image) = card.query_selector(".parallax-bg").ok().flatten() else {
                    continue;
                };
                let Ok(image) = image.dyn_into::<HtmlElement>() else {
                    continue;
                };
                parallax_pose(speed, 0.0).apply(&image);
                scene.scrub(
                    "gallery parallax",
                    card.clone(),
                    TriggerPoint::top_at(1.0),
                    ScrollEnd::At(TriggerPoint::new(Edge::Bottom, 0.0)),
                    move |signal| {
                        if let Signal::Progress(p) = signal {
                            parallax_pose(speed, p).apply(&image);
                        }
                    },
                );
            }

            reveal_on_enter(
                scene,
                animator,
                "gallery cards",
                section.clone(),
                TriggerPoint::top_at(0.8),
                cards,
                Reveal::new(Pose::hidden().y(100.0), 1000.0, Ease::Power3Out).stagger(100.0),
            );
        });
    }

    html! {
        <section ref={section} id="projects" class="gallery">
            <div class="section-heading">
                <h2>{"Nos Réalisations"}</h2>
                <p class="lead">
                    {"Une sélection de nos aménagements extérieurs les plus emblématiques, où chaque détail reflète notre exigence et notre passion pour le végétal et le minéral."}
                </p>
                <a href="#" class="button-outline">{"Voir tout le portfolio"}</a>
            </div>
            <div class="gallery-grid">
                { for content.gallery.iter().map(|project| html! {
                    <GalleryCard key={project.title.clone()} project={project.clone()} />
                }) }
            </div>
        </section>
    }
}
