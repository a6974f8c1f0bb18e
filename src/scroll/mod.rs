//! Scroll-linked choreography: trigger geometry, per-section scenes, the pinned
//! horizontal track and count-up figures.

pub mod counter;
pub mod driver;
pub mod pin;
pub mod scene;
pub mod trigger;

pub use counter::Counter;
pub use driver::{reveal_on_enter, use_choreography, use_choreography_with_deps, ScrollDriver};
pub use pin::{PinTrack, Settle};
pub use scene::{ScrollScene, Signal};
pub use trigger::{scrub_progress, ScrollEnd, TriggerPoint};
