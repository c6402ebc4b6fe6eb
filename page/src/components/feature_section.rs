//! Titled list section

use leptos::prelude::*;

/// A titled, ordered list block.
///
/// Used for both the command list and the technology list. Items are
/// rendered verbatim, preserving input order; no state, no transforms.
#[component]
pub fn FeatureSection(
    title: &'static str,
    items: &'static [&'static str],
) -> impl IntoView {
    view! {
        <div class="feature-section">
            <h3 class="feature-section-title">{title}</h3>
            <ul class="feature-section-list">
                {items
                    .iter()
                    .map(|item| view! { <li>{*item}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn preserves_item_order() {
        let html = view! {
            <FeatureSection title="Technology Stack" items=&["first", "second", "third"] />
        }
        .to_html();

        let first = html.find("first").expect("first item rendered");
        let second = html.find("second").expect("second item rendered");
        let third = html.find("third").expect("third item rendered");
        assert!(first < second && second < third);
    }

    #[test]
    fn one_list_item_per_entry() {
        let html = view! {
            <FeatureSection title="Available Commands" items=&["a", "b"] />
        }
        .to_html();

        assert_eq!(html.matches("<li").count(), 2);
        assert!(html.contains("Available Commands"));
    }
}
