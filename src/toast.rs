use gloo::timers::callback::Timeout;
use yew::prelude::*;

use picboard_core::{Notice, Notifier};

use crate::live_state::use_live_state;

/// Handle pages use to raise a toast. Provided through context by [`ToastHost`].
#[derive(Clone, PartialEq)]
pub(crate) struct Toaster {
    push: Callback<Notice>,
}

impl Notifier for Toaster {
    fn notify(&self, notice: &Notice) {
        self.push.emit(notice.clone());
    }
}

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    #[prop_or_default]
    pub(crate) children: Html,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let toasts = use_live_state(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0u64);
    let toaster = {
        let toasts = toasts.clone();
        use_memo((), move |_| Toaster {
            push: Callback::from(move |notice: Notice| {
                let id = {
                    let mut next = next_id.borrow_mut();
                    *next = next.wrapping_add(1);
                    *next
                };
                let duration_ms = notice.duration_ms;
                gloo::console::log!("notice", notice.message.clone());
                toasts.update(|list| list.push(Toast { id, notice }));
                let toasts = toasts.clone();
                Timeout::new(duration_ms, move || {
                    toasts.update(|list| list.retain(|toast| toast.id != id));
                })
                .forget();
            }),
        })
    };
    let stack: Html = toasts
        .snapshot()
        .iter()
        .map(|toast| {
            html! {
                <div key={toast.id} class="toast" role="alert">{toast.notice.message.clone()}</div>
            }
        })
        .collect();
    html! {
        <ContextProvider<Toaster> context={(*toaster).clone()}>
            {props.children.clone()}
            <div class="toasts">{stack}</div>
        </ContextProvider<Toaster>>
    }
}
