//! Page header with the sign-in control

use dioxus::prelude::*;

use crate::state::use_app;

#[component]
pub fn Header() -> Element {
    let state = use_app();
    let session = state.session;
    let signed_in = session.read().is_authenticated();
    let label = session.read().label().to_string();

    let open_state = state.clone();
    let sign_out_state = state.clone();

    rsx! {
        header {
            class: "bg-white border-b border-gray-100",
            div {
                class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-gray-900", "Storefront" }

                if signed_in {
                    div {
                        class: "flex items-center gap-3",
                        span { class: "text-sm font-medium text-gray-700", "{label}" }
                        button {
                            r#type: "button",
                            class: "px-3 py-1.5 text-sm rounded-md bg-gray-100 text-gray-700 hover:bg-gray-200",
                            onclick: move |_| sign_out_state.sign_out(),
                            "Sign out"
                        }
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "px-4 py-2 text-sm rounded-md bg-indigo-600 text-white hover:bg-indigo-700",
                        onclick: move |_| open_state.open_wizard(),
                        "{label}"
                    }
                }
            }
        }
    }
}
