use serde::Serialize;

use crate::card::component::ResumeCard;
use crate::card::visibility::VisibilityObserver;

/// Whole-card entrance: fade in, slide up, unblur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntrancePose {
    pub opacity: f32,
    pub translate_y_px: f32,
    pub blur_px: f32,
}

impl EntrancePose {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        translate_y_px: 20.0,
        blur_px: 4.0,
    };
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        translate_y_px: 0.0,
        blur_px: 0.0,
    };
}

/// The chevron next to the title.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChevronPose {
    pub opacity: f32,
    pub translate_x_px: f32,
    pub rotate_deg: f32,
}

impl ChevronPose {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        translate_x_px: 0.0,
        rotate_deg: 0.0,
    };
    pub const COLLAPSED: Self = Self {
        opacity: 1.0,
        translate_x_px: 0.0,
        rotate_deg: 0.0,
    };
    pub const EXPANDED: Self = Self {
        opacity: 1.0,
        translate_x_px: 4.0,
        rotate_deg: 90.0,
    };
}

/// The description block; height goes from 0 to natural when open.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPose {
    pub open: bool,
    pub opacity: f32,
}

/// Target animation state of a card. Renderers tween towards it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardView {
    pub entrance: EntrancePose,
    pub chevron: ChevronPose,
    /// `None` when the card has no description to show.
    pub body: Option<BodyPose>,
}

impl<O: VisibilityObserver> ResumeCard<O> {
    pub fn presentation(&self) -> CardView {
        let entered = self.has_entered_view();
        let expanded = self.is_expanded();

        let entrance = if entered {
            EntrancePose::VISIBLE
        } else {
            EntrancePose::HIDDEN
        };

        let chevron = match (entered, expanded) {
            (false, _) => ChevronPose::HIDDEN,
            (true, true) => ChevronPose::EXPANDED,
            (true, false) => ChevronPose::COLLAPSED,
        };

        let body = self.props().has_description().then(|| BodyPose {
            open: expanded,
            opacity: if expanded { 1.0 } else { 0.0 },
        });

        CardView {
            entrance,
            chevron,
            body,
        }
    }
}
