//! Toast notifications

use dioxus::prelude::*;
use storefront_core::NotificationKind;

use crate::state::use_app;

fn kind_classes(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "bg-green-50 border-green-200 text-green-800",
        NotificationKind::Error => "bg-red-50 border-red-200 text-red-800",
        NotificationKind::Info => "bg-blue-50 border-blue-200 text-blue-800",
    }
}

/// Stack of live toasts, newest at the bottom
#[component]
pub fn ToastStack() -> Element {
    let mut toasts = use_app().toasts;
    let items: Vec<_> = toasts
        .center
        .read()
        .items()
        .iter()
        .map(|n| (n.id, n.kind.icon(), kind_classes(n.kind), n.message.clone()))
        .collect();

    rsx! {
        div {
            class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80",
            for (id, icon, classes, message) in items {
                div {
                    key: "{id}",
                    role: "status",
                    class: "flex items-start gap-2 border rounded-lg shadow-sm px-4 py-3 text-sm {classes}",
                    span { "{icon}" }
                    span { class: "flex-1", "{message}" }
                    button {
                        r#type: "button",
                        class: "text-current opacity-60 hover:opacity-100",
                        onclick: move |_| toasts.dismiss(id),
                        "\u{00D7}"
                    }
                }
            }
        }
    }
}
