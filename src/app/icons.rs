use leptos::prelude::*;

use crate::profile::ProjectIcon;

const LOGO: &str = r##"<svg width="70" height="40" viewBox="0 0 70 40" fill="none" xmlns="http://www.w3.org/2000/svg" class="w-16 h-9 transition-all duration-300">
<path d="M37.2551 1.61586C38.1803 0.653384 39.4368 0.112671 40.7452 0.112671C46.6318 0.112671 52.1793 0.112674 57.6424 0.112685C68.6302 0.112708 74.1324 13.9329 66.3629 22.0156L49.4389 39.6217C48.662 40.43 47.3335 39.8575 47.3335 38.7144V23.2076L49.2893 21.1729C50.8432 19.5564 49.7427 16.7923 47.5451 16.7923H22.6667L37.2551 1.61586Z" fill="url(#logo_gradient_a)"></path>
<path d="M32.7449 38.3842C31.8198 39.3467 30.5633 39.8874 29.2549 39.8874C23.3683 39.8874 17.8208 39.8874 12.3577 39.8874C1.36983 39.8873 -4.13236 26.0672 3.63721 17.9844L20.5612 0.378369C21.3381 -0.429908 22.6666 0.142547 22.6666 1.28562L22.6667 16.7923L20.7108 18.8271C19.1569 20.4437 20.2574 23.2077 22.455 23.2077L47.3335 23.2076L32.7449 38.3842Z" fill="url(#logo_gradient_b)"></path>
<defs>
<linearGradient id="logo_gradient_a" x1="59" y1="2" x2="16" y2="40" gradientUnits="userSpaceOnUse">
<stop stop-color="#59FFB1"></stop><stop offset="0.510529" stop-color="#009CCC"></stop><stop offset="1" stop-color="#3A04FF"></stop>
</linearGradient>
<linearGradient id="logo_gradient_b" x1="59" y1="2" x2="16" y2="40" gradientUnits="userSpaceOnUse">
<stop stop-color="#59FFB1"></stop><stop offset="0.510529" stop-color="#009CCC"></stop><stop offset="1" stop-color="#3A04FF"></stop>
</linearGradient>
</defs>
</svg>"##;

// lucide outlines, 24x24 viewbox
const ARROW_RIGHT: &str = r#"<path d="M5 12h14"></path><path d="m12 5 7 7-7 7"></path>"#;
const ARROW_UP: &str = r#"<path d="m5 12 7-7 7 7"></path><path d="M12 19V5"></path>"#;
const CODE: &str = r#"<polyline points="16 18 22 12 16 6"></polyline><polyline points="8 6 2 12 8 18"></polyline>"#;
const BOOK_OPEN: &str = r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"></path><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"></path>"#;
const CLOCK: &str = r#"<circle cx="12" cy="12" r="10"></circle><polyline points="12 6 12 12 16 14"></polyline>"#;
const MAIL: &str = r#"<rect width="20" height="16" x="2" y="4" rx="2"></rect><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"></path>"#;

fn outline(shapes: &str, size: u32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{shapes}</svg>"#
    )
}

#[component]
pub fn Logo() -> impl IntoView {
    view! { <span class="inline-flex" inner_html=LOGO></span> }
}

#[component]
fn Outline(
    shapes: &'static str,
    size: u32,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! { <span class=format!("inline-flex {class}") inner_html=outline(shapes, size)></span> }
}

#[component]
pub fn ArrowRight(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Outline shapes=ARROW_RIGHT size=16 class /> }
}

#[component]
pub fn ArrowUp() -> impl IntoView {
    view! { <Outline shapes=ARROW_UP size=24 /> }
}

#[component]
pub fn MailIcon(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <Outline shapes=MAIL size=20 class /> }
}

#[component]
pub fn ProjectIconView(icon: ProjectIcon) -> impl IntoView {
    let shapes = match icon {
        ProjectIcon::Code => CODE,
        ProjectIcon::BookOpen => BOOK_OPEN,
        ProjectIcon::Clock => CLOCK,
    };
    view! { <Outline shapes size=48 /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_wraps_shapes() {
        let svg = outline(CLOCK, 48);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="48" height="48""#));
        assert!(svg.contains(CLOCK));
        assert!(svg.ends_with("</svg>"));
    }
}
