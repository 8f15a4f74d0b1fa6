use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

/// A `use_state` snapshot for rendering paired with a shared live copy that
/// long-lived closures (window listeners, timers) can read and mutate.
pub(crate) struct LiveState<T> {
    state: UseStateHandle<T>,
    live: Rc<RefCell<T>>,
}

impl<T> Clone for LiveState<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            live: self.live.clone(),
        }
    }
}

impl<T: Clone + 'static> LiveState<T> {
    /// The value as of the current render.
    pub(crate) fn snapshot(&self) -> &T {
        &self.state
    }

    pub(crate) fn with<R>(&self, read: impl FnOnce(&T) -> R) -> R {
        read(&self.live.borrow())
    }

    /// Mutates the live copy and publishes it for the next render.
    pub(crate) fn update<R>(&self, mutate: impl FnOnce(&mut T) -> R) -> R {
        let (result, next) = {
            let mut live = self.live.borrow_mut();
            let result = mutate(&mut live);
            (result, live.clone())
        };
        self.state.set(next);
        result
    }
}

#[hook]
pub(crate) fn use_live_state<T, F>(init: F) -> LiveState<T>
where
    T: Clone + 'static,
    F: FnOnce() -> T,
{
    let live = use_mut_ref(init);
    let state = {
        let live = live.clone();
        use_state(move || live.borrow().clone())
    };
    LiveState { state, live }
}
