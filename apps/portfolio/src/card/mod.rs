// Resume card: expand/collapse of the description and a one-shot,
// scroll-triggered entrance. Pure local state; no I/O, nothing can fail.

pub mod component;
pub mod presentation;
pub mod props;
pub mod visibility;

pub use component::{Activation, ResumeCard};
pub use presentation::{BodyPose, CardView, ChevronPose, EntrancePose};
pub use props::ResumeCardProps;
pub use visibility::{RootMargin, ScrollViewport, VisibilityObserver, CARD_ROOT_MARGIN};
