use std::rc::Rc;

use yew::functional::Reducible;

use crate::carousel::{wrap_next, wrap_prev};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Closed,
    Open { active: usize },
}

/// Full-screen viewer over a whole collection (not the paged subset).
///
/// There is only ever one overlay: opening while open just moves `active`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxState {
    len: usize,
    view: View,
}

impl LightboxState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            view: View::Closed,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn is_open(&self) -> bool {
        matches!(self.view, View::Open { .. })
    }

    pub fn active(&self) -> Option<usize> {
        match self.view {
            View::Open { active } => Some(active),
            View::Closed => None,
        }
    }

    pub fn open(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.view = View::Open {
            active: index.min(self.len - 1),
        };
    }

    pub fn close(&mut self) {
        self.view = View::Closed;
    }

    pub fn next(&mut self) {
        if let View::Open { active } = self.view {
            self.view = View::Open {
                active: wrap_next(active, self.len),
            };
        }
    }

    pub fn prev(&mut self) {
        if let View::Open { active } = self.view {
            self.view = View::Open {
                active: wrap_prev(active, self.len),
            };
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if self.is_open() {
            self.open(index);
        }
    }

    /// Indices on either side of the active one, for preloading.
    pub fn neighbors(&self) -> Option<(usize, usize)> {
        self.active()
            .map(|active| (wrap_prev(active, self.len), wrap_next(active, self.len)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Open(usize),
    Close,
    Next,
    Prev,
    GoTo(usize),
}

impl LightboxAction {
    /// Keyboard bindings while the viewer is open.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }

    /// Pointer bindings. Clicks inside the frame do nothing on their own.
    pub fn from_hit(hit: Hit) -> Option<Self> {
        match hit {
            Hit::Backdrop | Hit::CloseButton => Some(Self::Close),
            Hit::Frame => None,
            Hit::Prev => Some(Self::Prev),
            Hit::Next => Some(Self::Next),
            Hit::Dot(index) => Some(Self::GoTo(index)),
        }
    }

    /// The page shows one overlay at a time. When another section's viewer
    /// has claimed it, `viewer` has to close.
    pub fn on_claim(viewer: &str, owner: Option<&str>) -> Option<Self> {
        match owner {
            Some(owner) if owner != viewer => Some(Self::Close),
            _ => None,
        }
    }
}

/// Where a click landed on the open viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
    Backdrop,
    Frame,
    CloseButton,
    Prev,
    Next,
    Dot(usize),
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = (*self).clone();
        match action {
            LightboxAction::Open(index) => state.open(index),
            LightboxAction::Close => state.close(),
            LightboxAction::Next => state.next(),
            LightboxAction::Prev => state.prev(),
            LightboxAction::GoTo(index) => state.go_to(index),
        }
        if state == *self {
            return self;
        }
        log::debug!("lightbox {:?} -> {:?}", self.view, state.view);
        Rc::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(state: Rc<LightboxState>, key: &str) -> Rc<LightboxState> {
        match LightboxAction::from_key(key) {
            Some(action) => state.reduce(action),
            None => state,
        }
    }

    #[test]
    fn arrow_left_from_first_wraps_to_last() {
        let state = Rc::new(LightboxState::new(6)).reduce(LightboxAction::Open(0));
        let state = press(state, "ArrowLeft");
        assert_eq!(state.active(), Some(5));
        let state = press(state, "ArrowRight");
        assert_eq!(state.active(), Some(0));
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..12 {
            for start in 0..len {
                let mut state = LightboxState::new(len);
                state.open(start);
                for _ in 0..len {
                    state.next();
                }
                assert_eq!(state.active(), Some(start));
                for _ in 0..len {
                    state.prev();
                }
                assert_eq!(state.active(), Some(start));
            }
        }
    }

    #[test]
    fn escape_closes() {
        let state = Rc::new(LightboxState::new(3)).reduce(LightboxAction::Open(1));
        let state = press(state, "Escape");
        assert_eq!(state.view(), View::Closed);

        let open = Rc::new(LightboxState::new(3)).reduce(LightboxAction::Open(1));
        let unchanged = press(open.clone(), "Enter");
        assert!(Rc::ptr_eq(&open, &unchanged));
    }

    #[test]
    fn backdrop_and_close_button_close_but_frame_does_not() {
        assert_eq!(LightboxAction::from_hit(Hit::Backdrop), Some(LightboxAction::Close));
        assert_eq!(LightboxAction::from_hit(Hit::CloseButton), Some(LightboxAction::Close));
        assert_eq!(LightboxAction::from_hit(Hit::Frame), None);
        assert_eq!(LightboxAction::from_hit(Hit::Dot(4)), Some(LightboxAction::GoTo(4)));
    }

    #[test]
    fn viewer_closes_when_another_claims_the_page() {
        assert_eq!(LightboxAction::on_claim("gallery", None), None);
        assert_eq!(LightboxAction::on_claim("gallery", Some("gallery")), None);
        assert_eq!(
            LightboxAction::on_claim("gallery", Some("reviews-proof")),
            Some(LightboxAction::Close)
        );
    }

    #[test]
    fn reopening_moves_active_instead_of_stacking() {
        let mut state = LightboxState::new(8);
        state.open(2);
        state.open(7);
        assert_eq!(state.view(), View::Open { active: 7 });
        state.close();
        assert!(!state.is_open());
    }

    #[test]
    fn out_of_range_indices_are_clamped() {
        let mut state = LightboxState::new(4);
        state.open(10);
        assert_eq!(state.active(), Some(3));
        state.go_to(99);
        assert_eq!(state.active(), Some(3));
        state.go_to(1);
        assert_eq!(state.active(), Some(1));
    }

    #[test]
    fn closed_viewer_ignores_navigation() {
        let mut state = LightboxState::new(5);
        state.next();
        state.prev();
        state.go_to(2);
        assert_eq!(state.view(), View::Closed);
        assert_eq!(state.neighbors(), None);
    }

    #[test]
    fn empty_collection_never_opens() {
        let mut state = LightboxState::new(0);
        state.open(0);
        assert!(!state.is_open());
    }

    #[test]
    fn neighbors_wrap_around() {
        let mut state = LightboxState::new(6);
        state.open(0);
        assert_eq!(state.neighbors(), Some((5, 1)));
    }

    #[test]
    fn reducer_returns_same_rc_when_nothing_changes() {
        let state = Rc::new(LightboxState::new(3));
        let same = state.clone().reduce(LightboxAction::Close);
        assert!(Rc::ptr_eq(&state, &same));

        let opened = state.reduce(LightboxAction::Open(1)).reduce(LightboxAction::Next);
        assert_eq!(opened.active(), Some(2));
    }
}
