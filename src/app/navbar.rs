use leptos::prelude::*;

use super::icons::{ArrowUp, Logo};
use super::viewport::use_navigation;

#[component]
pub fn FloatingNav(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let nav = use_navigation();
    view! {
        <Show when=move || visible.get()>
            <nav class="sticky top-4 z-50 flex justify-center w-full nav-enter">
                <a
                    href="#"
                    aria-label="Back to top"
                    on:click=move |ev| {
                        ev.prevent_default();
                        nav.scroll_to_top();
                    }
                    class="backdrop-blur-lg bg-gray-900/50 border border-gray-800 rounded-full flex items-center px-6 py-4 transition-all duration-300 hover:border-blue-500/50"
                >
                    <Logo />
                </a>
            </nav>
        </Show>
    }
}

#[component]
pub fn BackToTop(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    let nav = use_navigation();
    view! {
        <Show when=move || visible.get()>
            <button
                on:click=move |_| nav.scroll_to_top()
                class="fixed bottom-6 right-6 z-50 p-3 rounded-full bg-gray-900/50 border border-gray-800 text-white shadow-lg backdrop-blur-lg hover:border-blue-500/50 transition-all duration-300 rise-enter"
                aria-label="Scroll to top"
            >
                <ArrowUp />
            </button>
        </Show>
    }
}
