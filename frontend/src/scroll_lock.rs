use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;

/// Anything whose inline `overflow` style can be read and written.
pub trait OverflowStyle {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

impl OverflowStyle for HtmlElement {
    fn overflow(&self) -> String {
        self.style().get_property_value("overflow").unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        if value.is_empty() {
            let _ = self.style().remove_property("overflow");
        } else {
            let _ = self.style().set_property("overflow", value);
        }
    }
}

struct Holders<T> {
    target: T,
    count: usize,
    prior: String,
}

/// Shared scroll lock over one element.
///
/// Any number of viewers may hold it at once. The inline value seen by the
/// first `acquire` is written back when the last guard drops, whatever order
/// the guards go away in.
pub struct ScrollLock<T: OverflowStyle> {
    holders: Rc<RefCell<Holders<T>>>,
}

impl<T: OverflowStyle> ScrollLock<T> {
    pub fn new(target: T) -> Self {
        Self {
            holders: Rc::new(RefCell::new(Holders {
                target,
                count: 0,
                prior: String::new(),
            })),
        }
    }

    pub fn acquire(&self) -> ScrollGuard<T> {
        let mut holders = self.holders.borrow_mut();
        if holders.count == 0 {
            holders.prior = holders.target.overflow();
            holders.target.set_overflow("hidden");
        }
        holders.count += 1;
        ScrollGuard {
            holders: self.holders.clone(),
        }
    }

    pub fn holders(&self) -> usize {
        self.holders.borrow().count
    }
}

impl ScrollLock<HtmlElement> {
    pub fn body() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self::new(body))
    }
}

impl<T: OverflowStyle> Clone for ScrollLock<T> {
    fn clone(&self) -> Self {
        Self {
            holders: self.holders.clone(),
        }
    }
}

impl<T: OverflowStyle> PartialEq for ScrollLock<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.holders, &other.holders)
    }
}

/// Keeps scrolling suspended while alive.
pub struct ScrollGuard<T: OverflowStyle> {
    holders: Rc<RefCell<Holders<T>>>,
}

impl<T: OverflowStyle> Drop for ScrollGuard<T> {
    fn drop(&mut self) {
        let mut holders = self.holders.borrow_mut();
        holders.count = holders.count.saturating_sub(1);
        if holders.count == 0 {
            let prior = std::mem::take(&mut holders.prior);
            holders.target.set_overflow(&prior);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::{Hit, LightboxAction, LightboxState};
    use yew::functional::Reducible;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<String>>);

    impl OverflowStyle for FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    /// Holds a guard exactly while the viewer is open, like `use_lightbox`.
    fn sync(
        state: &LightboxState,
        lock: &ScrollLock<FakeBody>,
        guard: &mut Option<ScrollGuard<FakeBody>>,
    ) {
        if state.is_open() {
            guard.get_or_insert_with(|| lock.acquire());
        } else {
            guard.take();
        }
    }

    #[test]
    fn restores_previous_value() {
        let body = FakeBody::default();
        *body.0.borrow_mut() = "auto".to_string();
        let lock = ScrollLock::new(body.clone());
        {
            let _guard = lock.acquire();
            assert_eq!(body.overflow(), "hidden");
        }
        assert_eq!(body.overflow(), "auto");
    }

    #[test]
    fn overlapping_guards_released_in_acquire_order() {
        let body = FakeBody::default();
        let lock = ScrollLock::new(body.clone());

        let first = lock.acquire();
        let second = lock.acquire();
        assert_eq!(lock.holders(), 2);

        drop(first);
        assert_eq!(body.overflow(), "hidden");
        drop(second);
        assert_eq!(body.overflow(), "");
        assert_eq!(lock.holders(), 0);
    }

    #[test]
    fn overlapping_guards_released_in_reverse_order() {
        let body = FakeBody::default();
        *body.0.borrow_mut() = "scroll".to_string();
        let lock = ScrollLock::new(body.clone());

        let first = lock.acquire();
        let second = lock.clone().acquire();
        drop(second);
        assert_eq!(body.overflow(), "hidden");
        drop(first);
        assert_eq!(body.overflow(), "scroll");
    }

    #[test]
    fn escape_backdrop_and_close_button_restore_scroll() {
        let close_actions = [
            LightboxAction::from_key("Escape"),
            LightboxAction::from_hit(Hit::Backdrop),
            LightboxAction::from_hit(Hit::CloseButton),
        ];
        for action in close_actions {
            let body = FakeBody::default();
            let lock = ScrollLock::new(body.clone());
            let mut guard = None;

            let state = Rc::new(LightboxState::new(6)).reduce(LightboxAction::Open(2));
            sync(&state, &lock, &mut guard);
            assert_eq!(body.overflow(), "hidden");

            let state = state.reduce(action.expect("bound to close"));
            sync(&state, &lock, &mut guard);
            assert!(!state.is_open());
            assert_eq!(body.overflow(), "");
        }
    }

    #[test]
    fn click_inside_frame_keeps_scroll_locked() {
        let body = FakeBody::default();
        let lock = ScrollLock::new(body.clone());
        let mut guard = None;

        let state = Rc::new(LightboxState::new(6)).reduce(LightboxAction::Open(2));
        sync(&state, &lock, &mut guard);
        assert_eq!(LightboxAction::from_hit(Hit::Frame), None);
        sync(&state, &lock, &mut guard);

        assert!(state.is_open());
        assert_eq!(body.overflow(), "hidden");
    }

    #[test]
    fn second_viewer_takes_over_and_scroll_comes_back() {
        let body = FakeBody::default();
        let lock = ScrollLock::new(body.clone());
        let (mut gallery_guard, mut proof_guard) = (None, None);

        let gallery = Rc::new(LightboxState::new(8)).reduce(LightboxAction::Open(1));
        sync(&gallery, &lock, &mut gallery_guard);

        // The screenshot viewer claims the page while the gallery is still open.
        let proof = Rc::new(LightboxState::new(6)).reduce(LightboxAction::Open(3));
        sync(&proof, &lock, &mut proof_guard);
        assert_eq!(lock.holders(), 2);

        let gallery = match LightboxAction::on_claim("gallery", Some("reviews-proof")) {
            Some(action) => gallery.reduce(action),
            None => gallery,
        };
        sync(&gallery, &lock, &mut gallery_guard);
        assert!(!gallery.is_open());
        assert_eq!(body.overflow(), "hidden");

        let proof = proof.reduce(LightboxAction::Close);
        sync(&proof, &lock, &mut proof_guard);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn unmount_while_open_restores_scroll() {
        let body = FakeBody::default();
        *body.0.borrow_mut() = "scroll".to_string();
        let lock = ScrollLock::new(body.clone());
        let guard = lock.acquire();
        drop(lock);
        drop(guard);
        assert_eq!(body.overflow(), "scroll");
    }
}
