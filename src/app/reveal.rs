use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::reveal::{RevealLatch, REVEAL_AMOUNT};

/// Fades and lifts its children in the first time half of them is on screen.
#[component]
pub fn Reveal(
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let latch = StoredValue::new(RevealLatch::new(REVEAL_AMOUNT));
    let (revealed, set_revealed) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let ratio = entries
                .iter()
                .map(|entry| entry.intersection_ratio())
                .fold(0.0, f64::max);
            latch.update_value(|latch| {
                if latch.observe(ratio) {
                    set_revealed.set(true);
                }
            });
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_AMOUNT]),
    );

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if revealed.get() { "reveal reveal-shown" } else { "reveal" };
                format!("{state} {class}")
            }
            style=format!("transition-delay: {delay_ms}ms")
        >
            {children()}
        </div>
    }
}
