use std::rc::Rc;

use yew::Reducible;

use crate::anim::{Ease, Pose};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Details,
    Contact,
    Confirmation,
}

impl Step {
    pub fn number(self) -> u8 {
        match self {
            Step::Details => 1,
            Step::Contact => 2,
            Step::Confirmation => 3,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Step::Details => "step-1",
            Step::Contact => "step-2",
            Step::Confirmation => "step-3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProjectType,
    Location,
    Budget,
    Delay,
    Name,
    Email,
    Phone,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub project_type: String,
    pub location: String,
    pub budget: String,
    pub delay: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl FormData {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ProjectType => &self.project_type,
            Field::Location => &self.location,
            Field::Budget => &self.budget,
            Field::Delay => &self.delay,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::ProjectType => &mut self.project_type,
            Field::Location => &mut self.location,
            Field::Budget => &mut self.budget,
            Field::Delay => &mut self.delay,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }

    /// Presence only; shape of email and phone is left to the browser.
    pub fn details_complete(&self) -> bool {
        !self.project_type.is_empty() && !self.location.is_empty()
    }

    pub fn contact_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.phone.is_empty()
    }
}

/// Where the step swap is in its exit → swap → enter choreography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Idle,
    Leaving { from: Step, to: Step },
    Entering(Step),
}

/// How one step group leaves and the next one arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepMotion {
    pub exit_to: Pose,
    pub exit_ease: Ease,
    pub enter_from: Pose,
    pub enter_ease: Ease,
    pub duration_ms: f64,
}

pub fn motion_between(from: Step, to: Step) -> StepMotion {
    match (from, to) {
        (Step::Contact, Step::Confirmation) => StepMotion {
            exit_to: Pose::hidden().y(-30.0),
            exit_ease: Ease::Power1Out,
            enter_from: Pose::hidden().y(30.0),
            enter_ease: Ease::Power1Out,
            duration_ms: 500.0,
        },
        (Step::Contact, Step::Details) => StepMotion {
            exit_to: Pose::hidden().x(50.0),
            exit_ease: Ease::Power2In,
            enter_from: Pose::hidden().x(-50.0),
            enter_ease: Ease::Power2Out,
            duration_ms: 400.0,
        },
        _ => StepMotion {
            exit_to: Pose::hidden().x(-50.0),
            exit_ease: Ease::Power2In,
            enter_from: Pose::hidden().x(50.0),
            enter_ease: Ease::Power2Out,
            duration_ms: 400.0,
        },
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Set(Field, String),
    Advance,
    Retreat,
    Submit,
    ExitFinished,
    EnterFinished,
}

/// Three-step lead wizard. The visible step only changes once the outgoing group
/// has finished animating out, and a new move is refused until the incoming group
/// has finished animating in.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadForm {
    step: Step,
    transition: Transition,
    data: FormData,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self { step: Step::Details, transition: Transition::Idle, data: FormData::default() }
    }
}

impl LeadForm {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn set(&mut self, field: Field, value: String) {
        *self.data.slot(field) = value;
    }

    pub fn can_advance(&self) -> bool {
        self.step == Step::Details && self.data.details_complete()
    }

    pub fn can_submit(&self) -> bool {
        self.step == Step::Contact && self.data.contact_complete()
    }

    pub fn advance(&mut self) -> bool {
        self.can_advance() && self.leave_for(Step::Contact)
    }

    pub fn retreat(&mut self) -> bool {
        self.step == Step::Contact && self.leave_for(Step::Details)
    }

    /// Simulated submission: nothing leaves the browser.
    pub fn submit(&mut self) -> bool {
        self.can_submit() && self.leave_for(Step::Confirmation)
    }

    fn leave_for(&mut self, to: Step) -> bool {
        if self.transition != Transition::Idle {
            return false;
        }
        self.transition = Transition::Leaving { from: self.step, to };
        true
    }

    /// The outgoing group is gone; swap in the next step.
    pub fn exit_finished(&mut self) {
        if let Transition::Leaving { to, .. } = self.transition {
            self.step = to;
            self.transition = Transition::Entering(to);
        }
    }

    pub fn enter_finished(&mut self) {
        if let Transition::Entering(_) = self.transition {
            self.transition = Transition::Idle;
        }
    }
}

impl Reducible for LeadForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Set(field, value) => next.set(field, value),
            FormAction::Advance => {
                next.advance();
            }
            FormAction::Retreat => {
                next.retreat();
            }
            FormAction::Submit => {
                if next.submit() {
                    log::info!("Lead captured for a {} project", next.data.project_type);
                }
            }
            FormAction::ExitFinished => next.exit_finished(),
            FormAction::EnterFinished => next.enter_finished(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(form: &mut LeadForm) {
        form.exit_finished();
        form.enter_finished();
    }

    fn details(form: &mut LeadForm, project: &str, location: &str) {
        form.set(Field::ProjectType, project.to_string());
        form.set(Field::Location, location.to_string());
    }

    #[test]
    fn advance_requires_project_type_and_location() {
        let mut form = LeadForm::default();
        details(&mut form, "", "Paris");
        assert!(!form.advance());
        settle(&mut form);
        assert_eq!(form.step(), Step::Details);

        details(&mut form, "creation", "Paris");
        assert!(form.advance());
        assert_eq!(form.step(), Step::Details);
        assert_eq!(form.transition(), Transition::Leaving { from: Step::Details, to: Step::Contact });
        form.exit_finished();
        assert_eq!(form.step(), Step::Contact);
        assert_eq!(form.transition(), Transition::Entering(Step::Contact));
        form.enter_finished();
        assert_eq!(form.transition(), Transition::Idle);
    }

    #[test]
    fn retreat_keeps_what_was_entered() {
        let mut form = LeadForm::default();
        details(&mut form, "terrasse", "Lyon");
        form.advance();
        settle(&mut form);

        assert!(form.retreat());
        settle(&mut form);
        assert_eq!(form.step(), Step::Details);
        assert_eq!(form.data().project_type, "terrasse");
        assert_eq!(form.data().location, "Lyon");
    }

    #[test]
    fn retreat_and_submit_only_work_from_contact() {
        let mut form = LeadForm::default();
        assert!(!form.retreat());
        form.set(Field::Name, "Ana".into());
        form.set(Field::Email, "ana@example.com".into());
        form.set(Field::Phone, "0600000000".into());
        assert!(!form.submit());
        assert_eq!(form.transition(), Transition::Idle);
    }

    #[test]
    fn submit_needs_every_contact_field_then_is_terminal() {
        let mut form = LeadForm::default();
        details(&mut form, "piscine", "Annecy");
        form.advance();
        settle(&mut form);

        form.set(Field::Name, "Ana".into());
        form.set(Field::Email, "not-an-email".into());
        assert!(!form.submit());
        form.set(Field::Phone, "12".into());
        assert!(form.submit());
        assert_eq!(form.transition(), Transition::Leaving { from: Step::Contact, to: Step::Confirmation });
        settle(&mut form);
        assert_eq!(form.step(), Step::Confirmation);

        assert!(!form.retreat());
        assert!(!form.advance());
        assert!(!form.submit());
        assert_eq!(form.step(), Step::Confirmation);
    }

    #[test]
    fn moves_are_refused_mid_transition() {
        let mut form = LeadForm::default();
        details(&mut form, "creation", "Paris");
        form.advance();
        form.exit_finished();
        assert!(!form.retreat());
        form.enter_finished();
        assert!(form.retreat());
    }

    #[test]
    fn fields_can_be_edited_in_any_step_and_order() {
        let mut form = LeadForm::default();
        form.set(Field::Phone, "1".into());
        form.set(Field::Budget, "75k+".into());
        details(&mut form, "creation", "Paris");
        form.advance();
        form.set(Field::Location, "Nice".into());
        assert_eq!(form.data().get(Field::Location), "Nice");
        assert_eq!(form.data().get(Field::Budget), "75k+");
    }

    #[test]
    fn stray_completion_signals_are_ignored() {
        let mut form = LeadForm::default();
        form.exit_finished();
        form.enter_finished();
        assert_eq!(form.step(), Step::Details);
        assert_eq!(form.transition(), Transition::Idle);
    }

    #[test]
    fn reducer_runs_the_whole_flow() {
        let mut form = Rc::new(LeadForm::default());
        for action in [
            FormAction::Set(Field::ProjectType, "creation".into()),
            FormAction::Set(Field::Location, "Paris".into()),
            FormAction::Advance,
            FormAction::ExitFinished,
            FormAction::EnterFinished,
        ] {
            form = form.reduce(action);
        }
        assert_eq!(form.step(), Step::Contact);

        let unchanged = form.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&form, &unchanged));
    }

    #[test]
    fn back_navigation_mirrors_forward_motion() {
        let forward = motion_between(Step::Details, Step::Contact);
        let back = motion_between(Step::Contact, Step::Details);
        assert_eq!(forward.exit_to.x, -back.exit_to.x);
        assert_eq!(forward.enter_from.x, -back.enter_from.x);
        assert_eq!(forward.duration_ms, back.duration_ms);
    }
}
