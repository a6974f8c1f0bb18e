use std::rc::Rc;

use yew::prelude::*;

use crate::anim::{Ease, Flow, Pose, Reveal};
use crate::content::SiteContent;
use crate::geometry::query_all_in;
use crate::interaction::hover::use_hover_target;
use crate::scroll::{reveal_on_enter, use_choreography, Counter, Signal, TriggerPoint};

fn card_reveal() -> Reveal {
    Reveal::new(Pose::hidden().y(80.0).rotate_x(15.0), 1200.0, Ease::Power3Out).stagger(200.0)
}

fn logo_reveal() -> Reveal {
    Reveal::new(Pose::hidden().scale(0.8), 800.0, Ease::Power2Out).stagger(100.0)
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    name: AttrValue,
    role: AttrValue,
    text: AttrValue,
    offset: bool,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let node = use_node_ref();
    use_hover_target(node.clone());

    html! {
        <div class={classes!("testimonial-slot", props.offset.then(|| "offset"))}>
            <div ref={node} class="testimonial-card">
                <div class="stars">{"★★★★★"}</div>
                <p class="testimonial-text">{ format!("\"{}\"", props.text) }</p>
                <div class="testimonial-author">
                    <p class="author-name">{ props.name.clone() }</p>
                    <p class="author-role">{ props.role.clone() }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(SocialProof)]
pub fn social_proof() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let section = use_node_ref();
    let testimonials = use_node_ref();
    let partners = use_node_ref();

    {
        let section = section.clone();
        let testimonials = testimonials.clone();
        let partners = partners.clone();
        let targets: Vec<u32> = content.stats.iter().map(|stat| stat.value).collect();
        use_choreography(move |scene, animator| {
            let figures = query_all_in(&section, ".stat-value");
            let animator_for_counters = animator.clone();
            scene.once("stat counters", section.clone(), TriggerPoint::top_at(0.75), move |signal| {
                if signal != Signal::Enter {
                    return;
                }
                for (figure, target) in figures.iter().zip(targets.iter()) {
                    let figure = figure.clone();
                    let mut counter = Counter::new(*target);
                    animator_for_counters.drive(move |dt| {
                        figure.set_text_content(Some(&counter.advance(dt).to_string()));
                        if counter.is_finished() {
                            Flow::Finished
                        } else {
                            Flow::Running
                        }
                    });
                }
            });

            reveal_on_enter(
                scene,
                animator,
                "testimonial cards",
                testimonials.clone(),
                TriggerPoint::top_at(0.8),
                query_all_in(&testimonials, ".testimonial-card"),
                card_reveal(),
            );
            reveal_on_enter(
                scene,
                animator,
                "partner logos",
                partners.clone(),
                TriggerPoint::top_at(0.85),
                query_all_in(&partners, ".partner-logo"),
                logo_reveal(),
            );
        });
    }

    html! {
        <section ref={section} class="social-proof">
            <div class="glow-orb"></div>
            <div class="stats-grid">
                { for content.stats.iter().map(|stat| html! {
                    <div class="stat">
                        <div class="stat-figure">
                            <span class="stat-value">{"0"}</span>
                            <span class="stat-suffix">{ stat.suffix.clone() }</span>
                        </div>
                        <p class="stat-label">{ stat.label.clone() }</p>
                    </div>
                }) }
            </div>

            <div ref={partners} class="partners-container">
                <p class="eyebrow">{"Matières & Partenaires"}</p>
                <div class="partners-row">
                    { for content.partners.iter().map(|name| html! {
                        <div class="partner-logo">
                            <span class="partner-mark">{ name.chars().take(1).collect::<String>() }</span>
                            <span class="partner-name">{ name.clone() }</span>
                        </div>
                    }) }
                </div>
            </div>

            <h2 class="section-title">{"Quelques témoignages"}</h2>
            <div ref={testimonials} class="testimonials-grid">
                { for content.testimonials.iter().enumerate().map(|(i, testimonial)| html! {
                    <TestimonialCard
                        name={testimonial.name.clone()}
                        role={testimonial.role.clone()}
                        text={testimonial.text.clone()}
                        offset={i == 1}
                    />
                }) }
            </div>
        </section>
    }
}
