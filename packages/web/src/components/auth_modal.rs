//! Sign-in / sign-up modal

use dioxus::prelude::*;
use storefront_core::{Field, Outcome, Step, Submission};

use crate::state::{use_app, AppState};

const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-indigo-500";

/// Start a submission and finish it on a spawned task.
///
/// The task belongs to the always-mounted modal component, so a reply that
/// lands after the modal closed still reaches the controller and is dropped
/// there.
fn submit_step(state: &AppState) {
    let mut wizard = state.wizard;
    let mut view = state.view;
    let mut toasts = state.toasts;

    let submission = wizard.write().begin(&mut view, &mut toasts);
    let Submission::Ready(pending) = submission else {
        return;
    };

    let api = state.api.clone();
    let mut session = state.session;
    spawn(async move {
        let result = pending.send(&api).await;
        let outcome = wizard
            .write()
            .complete(pending, result, &mut view, &mut toasts);
        if let Outcome::Authenticated { display_name } = outcome {
            session.write().sign_in(&display_name);
        }
    });
}

#[component]
pub fn AuthModal() -> Element {
    let state = use_app();
    let mut wizard = state.wizard;
    let mut view = state.view;
    let mut toasts = state.toasts;

    if !wizard.read().is_open() {
        return rsx! {};
    }

    let step = *view.visible.read();
    let busy = view.is_busy(step);
    let message = view.message(step);
    let number = step.number();
    let title = step.title();
    let submit_label = if busy {
        step.pending_label()
    } else {
        step.action_label()
    };

    let submit_state = state.clone();
    let close_state = state.clone();

    rsx! {
        div {
            class: "fixed inset-0 z-40 bg-black/40 flex items-center justify-center px-4",

            div {
                class: "bg-white rounded-lg shadow-md p-8 max-w-md w-full",
                role: "dialog",

                div {
                    class: "mb-6 flex items-start justify-between",
                    div {
                        p { class: "text-xs uppercase tracking-wide text-gray-500", "Step {number} of 4" }
                        h2 { class: "text-2xl font-bold text-gray-900", "{title}" }
                    }
                    button {
                        r#type: "button",
                        class: "text-gray-400 hover:text-gray-600 text-2xl leading-none",
                        onclick: move |_| close_state.close_wizard(),
                        "\u{00D7}"
                    }
                }

                if !message.is_empty() {
                    div {
                        class: "mb-4 p-3 bg-indigo-50 border border-indigo-100 text-indigo-800 rounded text-sm",
                        "{message}"
                    }
                }

                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        submit_step(&submit_state);
                    },

                    match step {
                        Step::Identify => rsx! {
                            TextField {
                                label: "Email or phone number",
                                input_type: "text",
                                value: view.value(Field::Identifier),
                                placeholder: "+1234567890 or you@example.com",
                                oninput: move |value| view.input(Field::Identifier, value),
                            }
                        },
                        Step::Password => rsx! {
                            TextField {
                                label: "Password",
                                input_type: "password",
                                value: view.value(Field::Password),
                                placeholder: "",
                                oninput: move |value| view.input(Field::Password, value),
                            }
                            button {
                                r#type: "button",
                                class: "mb-4 text-sm text-indigo-600 hover:underline",
                                onclick: move |_| wizard.read().forgot_password(&mut toasts),
                                "Forgot password?"
                            }
                        },
                        Step::Verify => rsx! {
                            TextField {
                                label: "Verification code",
                                input_type: "text",
                                value: view.value(Field::Code),
                                placeholder: "Enter 6-digit code",
                                oninput: move |value| view.input(Field::Code, value),
                            }
                        },
                        Step::Register => rsx! {
                            TextField {
                                label: "Username",
                                input_type: "text",
                                value: view.value(Field::Username),
                                placeholder: "",
                                oninput: move |value| view.input(Field::Username, value),
                            }
                            TextField {
                                label: "Email",
                                input_type: "email",
                                value: view.value(Field::Email),
                                placeholder: "you@example.com",
                                oninput: move |value| view.input(Field::Email, value),
                            }
                            TextField {
                                label: "Phone",
                                input_type: "tel",
                                value: view.value(Field::Phone),
                                placeholder: "+1234567890",
                                oninput: move |value| view.input(Field::Phone, value),
                            }
                        },
                    }

                    div {
                        class: "space-y-2",
                        button {
                            r#type: "submit",
                            class: "w-full bg-indigo-600 text-white py-2 px-4 rounded-md hover:bg-indigo-700 disabled:opacity-50 disabled:cursor-not-allowed",
                            disabled: busy,
                            "{submit_label}"
                        }
                        if step != Step::Identify {
                            button {
                                r#type: "button",
                                class: "w-full bg-gray-100 text-gray-700 py-2 px-4 rounded-md hover:bg-gray-200 disabled:opacity-50 disabled:cursor-not-allowed",
                                disabled: busy,
                                onclick: move |_| {
                                    wizard.write().back(&mut view);
                                },
                                "Back"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Labelled input bound to one wizard field
#[component]
fn TextField(
    label: &'static str,
    input_type: &'static str,
    value: String,
    placeholder: &'static str,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "mb-4",
            label { class: "block text-sm font-medium text-gray-700 mb-2", "{label}" }
            input {
                r#type: input_type,
                value: value,
                placeholder: placeholder,
                class: INPUT_CLASS,
                oninput: move |e: FormEvent| oninput.call(e.value()),
            }
        }
    }
}
