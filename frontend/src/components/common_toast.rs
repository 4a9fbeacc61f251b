use gloo_timers::callback::Timeout;
use std::rc::Rc;
use uuid::Uuid;
use yew::prelude::*;

/// Default time a toast stays on screen
const DEFAULT_DURATION_MS: u32 = 5000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    /// Milliseconds before auto-dismiss, `None` to keep until closed
    pub duration: Option<u32>,
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: Some(DEFAULT_DURATION_MS),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastType::Success)
    }

    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }
}

/// Toasts currently on screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut toasts = self.toasts.clone();
        match action {
            ToastAction::Add(toast) => toasts.push(toast),
            ToastAction::Remove(id) => toasts.retain(|t| t.id != id),
        }
        Rc::new(Self { toasts })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    // Toasts arrive from async tasks; always dispatch, never copy the list.
    let list = use_reducer(ToastList::default);

    let add_toast = {
        let list = list.dispatcher();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            list.dispatch(ToastAction::Add(toast));

            if let Some(duration_ms) = duration {
                let list = list.clone();
                Timeout::new(duration_ms, move || list.dispatch(ToastAction::Remove(toast_id))).forget();
            }
        })
    };

    let remove_toast = {
        let list = list.dispatcher();
        Callback::from(move |id: Uuid| list.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: list.toasts.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            <div class="toast-container">
                {props.children.clone()}
                <ToastStack />
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastStack)]
fn toast_stack() -> Html {
    let Some(toast_context) = use_context::<ToastContext>() else {
        return html! {};
    };

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>();

    let on_close = {
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| {
            if let Some(context) = &toast_context {
                context.remove_toast.emit(toast_id);
            }
        })
    };

    html! {
        <div role="status" class={classes!(
            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
            props.toast.toast_type.classes()
        )}>
            <span class="flex-shrink-0 mr-3 text-lg font-bold">{props.toast.toast_type.icon()}</span>
            <p class="flex-1 text-sm font-medium">{&props.toast.message}</p>
            <button
                onclick={on_close}
                class="flex-shrink-0 ml-3 text-white hover:text-gray-200 focus:outline-none"
            >
                {"×"}
            </button>
        </div>
    }
}
