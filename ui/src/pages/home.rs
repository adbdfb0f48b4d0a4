use leptos::prelude::*;

use crate::pages::{about::About, contact::Contact, hero::Hero, projects::Projects};

/// The four page sections, in scroll order.
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <main>
            <Hero/>
            <About/>
            <Projects/>
            <Contact/>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn sections_render_in_scroll_order() {
        let html = Owner::new().with(|| view! { <Home/> }.to_html());

        let positions: Vec<_> = ["home", "about", "projects", "contact"]
            .iter()
            .map(|id| {
                html.find(&format!("id=\"{id}\""))
                    .unwrap_or_else(|| panic!("missing #{id}"))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn greeting_starts_as_placeholder() {
        let html = Owner::new().with(|| view! { <Home/> }.to_html());
        assert!(html.contains(crate::pages::hero::GREETING_PLACEHOLDER));
    }
}
