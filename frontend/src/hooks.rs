use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, Window};
use yew::prelude::*;
use yew_hooks::use_window_size;

use crate::carousel::{items_per_page, Pager, PagerAction};
use crate::countdown::{Countdown, Tick};
use crate::lightbox::{LightboxAction, LightboxState};
use crate::scroll_lock::ScrollLock;

/// `keydown` listener on the window, removed again when dropped.
pub struct KeyListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl KeyListener {
    pub fn attach(on_key: impl Fn(&KeyboardEvent) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            on_key(&e);
        }) as Box<dyn FnMut(KeyboardEvent)>);

        window
            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
            .ok()?;

        Some(Self { window, callback })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref());
    }
}

/// Cards per page, following the window width.
#[hook]
pub fn use_items_per_page() -> usize {
    let (width, _) = use_window_size();
    items_per_page(width)
}

/// Page cursor for a collection of `len` items, resized with the viewport.
#[hook]
pub fn use_pager(len: usize) -> UseReducerHandle<Pager> {
    let per_page = use_items_per_page();
    let pager = use_reducer(move || Pager::new(len, per_page));

    {
        let dispatcher = pager.dispatcher();
        use_effect_with_deps(
            move |per_page| {
                dispatcher.dispatch(PagerAction::Resize(*per_page));
                || ()
            },
            per_page,
        );
    }

    pager
}

/// One tick per second until zero. The interval is dropped on unmount and
/// not re-armed once the countdown has finished.
#[hook]
pub fn use_countdown(total_seconds: u32) -> UseReducerHandle<Countdown> {
    let countdown = use_reducer(move || Countdown::new(total_seconds));
    let finished = countdown.is_finished();

    {
        let dispatcher = countdown.dispatcher();
        use_effect_with_deps(
            move |finished| {
                let interval = (!*finished).then(|| {
                    Interval::new(1000, move || dispatcher.dispatch(Tick))
                });
                move || drop(interval)
            },
            finished,
        );
    }

    countdown
}

/// Shared by every viewer on the page: which one opened last, and the one
/// body scroll lock they all hold.
#[derive(Clone, PartialEq)]
pub struct LightboxHost {
    pub owner: UseStateHandle<Option<&'static str>>,
    pub scroll: Option<ScrollLock<HtmlElement>>,
}

#[hook]
pub fn use_lightbox_host() -> LightboxHost {
    let owner = use_state_eq(|| None);
    let scroll = use_memo(|_| ScrollLock::<HtmlElement>::body(), ());
    LightboxHost {
        owner,
        scroll: (*scroll).clone(),
    }
}

/// Viewer state plus the side effects that only exist while it is open:
/// the body scroll lock and the Escape / arrow key bindings.
///
/// Under a `LightboxHost`, opening this viewer closes whichever other viewer
/// was open, so only one overlay and one key listener survive.
#[hook]
pub fn use_lightbox(viewer: &'static str, len: usize) -> UseReducerHandle<LightboxState> {
    let lightbox = use_reducer(move || LightboxState::new(len));
    let is_open = lightbox.is_open();
    let host = use_context::<LightboxHost>();
    let owner = host.as_ref().and_then(|host| *host.owner);

    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |owner| {
                if let Some(action) = LightboxAction::on_claim(viewer, *owner) {
                    dispatcher.dispatch(action);
                }
                || ()
            },
            owner,
        );
    }

    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with_deps(
            move |is_open| {
                let guards = is_open.then(|| {
                    if let Some(host) = &host {
                        host.owner.set(Some(viewer));
                    }
                    let scroll = host
                        .and_then(|host| host.scroll)
                        .or_else(ScrollLock::<HtmlElement>::body)
                        .map(|lock| lock.acquire());
                    let keys = KeyListener::attach(move |e| {
                        if let Some(action) = LightboxAction::from_key(&e.key()) {
                            e.prevent_default();
                            dispatcher.dispatch(action);
                        }
                    });
                    (scroll, keys)
                });
                // Dropping the guards releases the scroll lock and detaches the
                // listener, both on close and on unmount.
                move || drop(guards)
            },
            is_open,
        );
    }

    lightbox
}
