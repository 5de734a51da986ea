use tracing::debug;

use crate::card::props::ResumeCardProps;
use crate::card::visibility::{OneShotLatch, VisibilityObserver, CARD_ROOT_MARGIN};

/// What activating the card's header link did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The description was shown or hidden; navigation was suppressed.
    Toggled { expanded: bool },
    /// No description: the link should be followed as usual.
    Navigate { href: String },
}

/// Headless resume card: expand/collapse plus a one-shot viewport entry.
#[derive(Debug)]
pub struct ResumeCard<O> {
    props: ResumeCardProps,
    observer: O,
    expanded: bool,
    entered: OneShotLatch,
}

impl<O: VisibilityObserver> ResumeCard<O> {
    pub fn new(props: ResumeCardProps, observer: O) -> Self {
        Self {
            props,
            observer,
            expanded: false,
            entered: OneShotLatch::default(),
        }
    }

    pub fn props(&self) -> &ResumeCardProps {
        &self.props
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn has_entered_view(&self) -> bool {
        self.entered.is_set()
    }

    /// Scroll/intersection callback. Asks the observer only until the card
    /// has entered once; afterwards the answer is always true.
    pub fn on_scroll(&mut self) -> bool {
        if !self.entered.is_set() && self.observer.is_in_view(CARD_ROOT_MARGIN) {
            self.mark_entered();
        }
        self.entered.is_set()
    }

    /// For observers that push notifications instead of being polled.
    pub fn mark_entered(&mut self) {
        if self.entered.set() {
            debug!("Resume card '{}' entered the viewport", self.props.title);
        }
    }

    /// Click on the header link.
    pub fn activate(&mut self) -> Activation {
        if self.props.has_description() {
            self.expanded = !self.expanded;
            debug!(
                "Resume card '{}' {}",
                self.props.title,
                if self.expanded { "expanded" } else { "collapsed" }
            );
            Activation::Toggled {
                expanded: self.expanded,
            }
        } else {
            let href = self.props.href().to_string();
            debug!("Resume card '{}' navigating to {href}", self.props.title);
            Activation::Navigate { href }
        }
    }
}
