//! Product grid and cards

use dioxus::prelude::*;
use storefront_core::products::load_catalog;
use storefront_core::{Availability, Catalog, NotificationKind, Notifier, ProductCard};

use super::LoadingSpinner;
use crate::state::use_app;

/// Catalog grid with loading and empty states
#[component]
pub fn ProductGrid() -> Element {
    let state = use_app();
    let api = state.api.clone();
    let locale = state.locale;

    let catalog = use_resource(move || {
        let api = api.clone();
        async move { load_catalog(&api, locale).await }
    });

    let body = match &*catalog.read() {
        None => rsx! { LoadingSpinner {} },
        Some(Catalog::Empty) => rsx! {
            div {
                class: "text-center py-16 bg-white rounded-xl border border-dashed border-gray-300",
                p { class: "text-lg font-medium text-gray-700", "No products found" }
                p { class: "mt-1 text-sm text-gray-500", "Check back soon." }
            }
        },
        Some(Catalog::Cards(cards)) => rsx! {
            div {
                class: "grid gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for card in cards.iter() {
                    ProductTile { key: "{card.id}", card: card.clone() }
                }
            }
        },
    };

    rsx! {
        section {
            h2 { class: "text-xl font-semibold text-gray-900 mb-4", "Products" }
            {body}
        }
    }
}

/// A single product
#[component]
pub fn ProductTile(card: ProductCard) -> Element {
    let mut toasts = use_app().toasts;

    let availability_class = match card.availability {
        Availability::InStock(_) => "text-green-700 bg-green-50",
        Availability::Unavailable => "text-red-700 bg-red-50",
    };
    let availability = card.availability.label();

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 flex flex-col h-full",

            h3 { class: "text-lg font-semibold text-gray-900 mb-1", "{card.name}" }

            if !card.description.is_empty() {
                p { class: "text-sm text-gray-600 mb-3 line-clamp-3", "{card.description}" }
            }

            div {
                class: "mt-auto flex items-center justify-between mb-3",
                span { class: "text-lg font-bold text-gray-900", "{card.price_label}" }
                span {
                    class: "px-2 py-0.5 rounded-full text-xs font-medium {availability_class}",
                    "{availability}"
                }
            }

            button {
                r#type: "button",
                class: "w-full py-2 px-4 rounded-md bg-indigo-600 text-white hover:bg-indigo-700 disabled:bg-gray-300 disabled:cursor-not-allowed",
                disabled: card.button_disabled,
                onclick: move |_| toasts.notify(NotificationKind::Success, "Added to cart"),
                "{card.button_label}"
            }
        }
    }
}
