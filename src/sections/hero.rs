use std::rc::Rc;

use yew::prelude::*;
use web_sys::HtmlElement;

use crate::anim::{self, Ease, Pose, Position, Reveal, Timeline};
use crate::components::magnetic_button::MagneticButton;
use crate::content::SiteContent;
use crate::geometry::{query_all_in, Edge};
use crate::scroll::{use_choreography, ScrollEnd, Signal, TriggerPoint};

/// Headline lines rise in first, the subtitle and buttons overlap their tail.
pub fn intro_timeline(lines: usize, buttons: usize) -> Timeline {
    let headline = Reveal::new(Pose::hidden().y(120.0).rotate_z(2.0), 1500.0, Ease::Power4Out)
        .stagger(150.0)
        .delay(300.0);
    let subtitle = Reveal::new(Pose::hidden().y(40.0), 1200.0, Ease::Power3Out);
    let cta = Reveal::new(Pose::hidden().y(30.0), 1000.0, Ease::Power3Out).stagger(150.0);

    Timeline::new()
        .add(".reveal-line", headline, lines, Position::AfterPrevious)
        .add(".reveal-subtitle", subtitle, 1, Position::Overlap(1000.0))
        .add(".reveal-btn", cta, buttons, Position::Overlap(800.0))
}

fn backdrop_pose(progress: f64) -> Pose {
    Pose::IDENTITY.lerp(&Pose::IDENTITY.y_percent(20.0).scale(1.05), progress)
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let section = use_node_ref();
    let backdrop = use_node_ref();

    {
        let section = section.clone();
        let backdrop = backdrop.clone();
        use_choreography(move |scene, animator| {
            if let Some(video) = backdrop.cast::<HtmlElement>() {
                scene.scrub(
                    "hero backdrop",
                    section.clone(),
                    TriggerPoint::top_at(0.0),
                    ScrollEnd::At(TriggerPoint::new(Edge::Bottom, 0.0)),
                    move |signal| {
                        if let Signal::Progress(p) = signal {
                            backdrop_pose(p).apply(&video);
                        }
                    },
                );
            }

            let lines = query_all_in(&section, ".reveal-line").len();
            let buttons = query_all_in(&section, ".reveal-btn").len();
            for cue in intro_timeline(lines, buttons).cues() {
                anim::play_reveal(animator, &query_all_in(&section, cue.selector), cue.reveal);
            }
        });
    }

    let hero = &content.hero;
    html! {
        <section ref={section} class="hero">
            <div class="hero-backdrop">
                <video ref={backdrop} src={hero.video.clone()} autoplay={true} muted={true} loop={true} playsinline={true}></video>
                <div class="hero-shade"></div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title">
                    { for hero.lines.iter().enumerate().map(|(i, line)| html! {
                        <span class="line-mask">
                            <span class={classes!("reveal-line", (i > 0).then(|| "accent"))}>{ line.clone() }</span>
                        </span>
                    }) }
                </h1>
                <p class="reveal-subtitle">{ hero.subtitle.clone() }</p>
                <div class="hero-actions">
                    <div class="reveal-btn">
                        <MagneticButton href={hero.primary_cta.href.clone()} class={classes!("button-primary")}>
                            { hero.primary_cta.label.clone() }
                            <span class="arrow">{"→"}</span>
                        </MagneticButton>
                    </div>
                    <div class="reveal-btn">
                        <MagneticButton href={hero.secondary_cta.href.clone()} class={classes!("button-ghost")}>
                            { hero.secondary_cta.label.clone() }
                        </MagneticButton>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_start_before_the_subtitle_finishes() {
        let timeline = intro_timeline(2, 2);
        let delays: Vec<f64> = timeline.cues().iter().map(|c| c.reveal.delay_ms).collect();
        assert_eq!(delays, vec![300.0, 950.0, 1350.0]);
        assert!(delays[2] < delays[1] + 1200.0);
    }

    #[test]
    fn backdrop_drifts_down_and_grows_with_scroll() {
        assert_eq!(backdrop_pose(0.0), Pose::IDENTITY);
        let end = backdrop_pose(1.0);
        assert_eq!(end.y_percent, 20.0);
        assert_eq!(end.scale, 1.05);
    }
}
