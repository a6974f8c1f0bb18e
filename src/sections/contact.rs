use std::rc::Rc;

use yew::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement};

use crate::anim::{AnimationGroup, Pose, Tween};
use crate::components::custom_select::CustomSelect;
use crate::content::SiteContent;
use crate::interaction::form::{motion_between, Field, FormAction, LeadForm, Step, Transition};
use crate::interaction::hover::use_hover_target;

/// The step a group arrives from; steps only ever move by one.
fn arriving_from(step: Step) -> Step {
    match step {
        Step::Contact => Step::Details,
        Step::Details | Step::Confirmation => Step::Contact,
    }
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    label: AttrValue,
    field: Field,
    value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    kind: AttrValue,
    on_set: Callback<(Field, String)>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let node = use_node_ref();
    use_hover_target(node.clone());

    let oninput = {
        let field = props.field;
        let on_set = props.on_set.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_set.emit((field, input.value()));
        })
    };

    html! {
        <div class="text-field">
            <input ref={node} type={props.kind.clone()} value={props.value.clone()} required={true} {oninput} />
            <label class={classes!("field-label", (!props.value.is_empty()).then(|| "floating"))}>
                { props.label.clone() }
            </label>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ActionButtonProps {
    #[prop_or(AttrValue::Static("button"))]
    kind: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    disabled: bool,
    #[prop_or_default]
    onclick: Callback<MouseEvent>,
    #[prop_or_default]
    children: Children,
}

#[function_component(ActionButton)]
fn action_button(props: &ActionButtonProps) -> Html {
    let node = use_node_ref();
    use_hover_target(node.clone());

    html! {
        <button
            ref={node}
            type={props.kind.clone()}
            class={props.class.clone()}
            disabled={props.disabled}
            onclick={props.onclick.clone()}
        >
            { props.children.clone() }
        </button>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let content = use_context::<Rc<SiteContent>>().unwrap_or_default();
    let form = use_reducer(LeadForm::default);
    let step_ref = use_node_ref();

    // Exit the current group, swap, then enter the new one
    {
        let step_ref = step_ref.clone();
        let dispatcher = form.dispatcher();
        use_effect_with_deps(
            move |transition| {
                let group = AnimationGroup::new();
                let animator = group.animator();
                let node = step_ref.cast::<HtmlElement>();
                match *transition {
                    Transition::Leaving { from, to } => {
                        let motion = motion_between(from, to);
                        match node {
                            Some(el) => {
                                let done = dispatcher.clone();
                                animator.tween_then(
                                    Tween::new(motion.duration_ms, motion.exit_ease),
                                    move |p| Pose::IDENTITY.lerp(&motion.exit_to, p).apply(&el),
                                    move || done.dispatch(FormAction::ExitFinished),
                                );
                            }
                            None => {
                                log::debug!("Form step {} not mounted, skipping exit", from.number());
                                dispatcher.dispatch(FormAction::ExitFinished);
                            }
                        }
                    }
                    Transition::Entering(step) => {
                        let motion = motion_between(arriving_from(step), step);
                        match node {
                            Some(el) => {
                                let done = dispatcher.clone();
                                animator.tween_then(
                                    Tween::new(motion.duration_ms, motion.enter_ease),
                                    move |p| motion.enter_from.lerp(&Pose::IDENTITY, p).apply(&el),
                                    move || done.dispatch(FormAction::EnterFinished),
                                );
                            }
                            None => dispatcher.dispatch(FormAction::EnterFinished),
                        }
                    }
                    Transition::Idle => {}
                }
                move || drop(group)
            },
            form.transition(),
        );
    }

    let on_set = {
        let dispatcher = form.dispatcher();
        Callback::from(move |(field, value): (Field, String)| dispatcher.dispatch(FormAction::Set(field, value)))
    };
    let select = |field: Field| {
        let on_set = on_set.clone();
        Callback::from(move |value: String| on_set.emit((field, value)))
    };
    let dispatch = |action: FormAction| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            dispatcher.dispatch(action.clone());
        })
    };
    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };

    let step = form.step();
    let idle = form.transition() == Transition::Idle;
    let data = form.data();
    let entering_style = match form.transition() {
        Transition::Entering(step) => Some(motion_between(arriving_from(step), step).enter_from.css()),
        _ => None,
    };
    let options = &content.form;

    let body = match step {
        Step::Details => html! {
            <div key={step.class()} ref={step_ref} class={classes!("form-step", step.class())} style={entering_style}>
                <CustomSelect
                    label="Nature de l'intervention"
                    options={options.project_types.clone()}
                    value={data.project_type.clone()}
                    on_change={select(Field::ProjectType)}
                />
                <TextField label="Localisation (Ville / CP)" field={Field::Location} value={data.location.clone()} on_set={on_set.clone()} />
                <ActionButton
                    class={classes!("button-gold", "continue")}
                    disabled={!(idle && form.can_advance())}
                    onclick={dispatch(FormAction::Advance)}
                >
                    {"Continuer"}
                    <span class="arrow">{"→"}</span>
                </ActionButton>
            </div>
        },
        Step::Contact => html! {
            <form key={step.class()} ref={step_ref} class={classes!("form-step", step.class())} style={entering_style} {onsubmit}>
                <div class="field-pair">
                    <CustomSelect
                        label="Enveloppe"
                        options={options.budgets.clone()}
                        value={data.budget.clone()}
                        on_change={select(Field::Budget)}
                    />
                    <CustomSelect
                        label="Horizon"
                        options={options.delays.clone()}
                        value={data.delay.clone()}
                        on_change={select(Field::Delay)}
                    />
                </div>
                <TextField label="Nom complet" field={Field::Name} value={data.name.clone()} on_set={on_set.clone()} />
                <div class="field-pair">
                    <TextField label="Courriel" field={Field::Email} kind="email" value={data.email.clone()} on_set={on_set.clone()} />
                    <TextField label="Téléphone" field={Field::Phone} kind="tel" value={data.phone.clone()} on_set={on_set.clone()} />
                </div>
                <div class="form-actions">
                    <ActionButton class={classes!("button-back")} disabled={!idle} onclick={dispatch(FormAction::Retreat)}>
                        {"←"}
                    </ActionButton>
                    <ActionButton kind="submit" class={classes!("button-gold", "submit")} disabled={!(idle && form.can_submit())}>
                        {"Confirmer"}
                    </ActionButton>
                </div>
            </form>
        },
        Step::Confirmation => html! {
            <div key={step.class()} ref={step_ref} class={classes!("form-step", step.class(), "confirmation")} style={entering_style}>
                <div class="confirmation-badge">{"✓"}</div>
                <h3>{"Privilège accordé"}</h3>
                <p>
                    { format!(
                        "Merci {}. L'atelier étudie votre projet à {}. Un de nos architectes vous contactera sous peu.",
                        data.name, data.location
                    ) }
                </p>
            </div>
        },
    };

    html! {
        <section id="contact" class="contact">
            <div class="contact-grid">
                <div class="contact-intro">
                    <h2>{"Parlons de "}<span class="accent">{"votre projet."}</span></h2>
                    <p class="lead">
                        {"Chaque grand jardin commence par une rencontre. Confiez-nous vos envies, nos architectes paysagistes vous recontacteront sous 48h pour imaginer avec vous l'exception."}
                    </p>
                    if step != Step::Confirmation {
                        <div class="step-indicators">
                            { for [1u8, 2].into_iter().map(|n| html! {
                                <div class={classes!("step-bar", (step.number() >= n).then(|| "active"))}></div>
                            }) }
                        </div>
                    }
                </div>
                <div class="form-card">
                    { body }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrival_motion_mirrors_the_departure() {
        for (from, to) in [(Step::Details, Step::Contact), (Step::Contact, Step::Details), (Step::Contact, Step::Confirmation)] {
            assert_eq!(arriving_from(to), from);
            let motion = motion_between(from, to);
            assert_eq!(motion.enter_from.opacity, 0.0);
            assert_eq!(motion.exit_to.opacity, 0.0);
        }
    }
}
