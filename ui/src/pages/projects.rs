use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: [ProjectEntry; 3] = [
    ProjectEntry {
        title: "Interactive 3D Landing",
        description: "A playful hero powered by Spline and smooth UI layers.",
        link: "#",
    },
    ProjectEntry {
        title: "Realtime Dashboard",
        description: "Streaming metrics with elegant visualizations and alerts.",
        link: "#",
    },
    ProjectEntry {
        title: "E‑commerce Starter",
        description: "Fast storefront with secure checkout and product search.",
        link: "#",
    },
];

#[component]
fn ProjectCard(entry: ProjectEntry) -> impl IntoView {
    view! {
        <a href=entry.link class="group rounded-2xl border bg-white p-6 hover:shadow-lg transition-shadow">
            <div class="h-36 rounded-xl bg-gradient-to-br from-blue-100 via-purple-100 to-pink-100 mb-4"></div>
            <h3 class="text-lg font-semibold text-gray-900 group-hover:underline">{entry.title}</h3>
            <p class="mt-2 text-gray-700 text-sm">{entry.description}</p>
        </a>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 md:py-28 bg-gradient-to-b from-white to-gray-50">
            <div class="max-w-6xl mx-auto px-4">
                <div class="flex items-end justify-between gap-4 mb-8">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900">"Featured projects"</h2>
                    <a href="#" class="hidden md:inline-flex items-center gap-2 text-gray-900 font-medium">
                        "See all"
                        <Icon glyph=Glyph::ExternalLink/>
                    </a>
                </div>
                <div class="grid md:grid-cols-3 gap-6">
                    <For
                        each=move || PROJECTS
                        key=|p| p.title
                        children=move |entry| view! { <ProjectCard entry/> }
                    />
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn exactly_three_fixed_entries() {
        let titles: Vec<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            ["Interactive 3D Landing", "Realtime Dashboard", "E‑commerce Starter"]
        );
    }

    #[test]
    fn renders_cards_in_order() {
        let html = Owner::new().with(|| view! { <Projects/> }.to_html());
        assert_eq!(html.matches("<h3").count(), 3);

        let positions: Vec<_> = PROJECTS
            .iter()
            .map(|p| html.find(p.title).expect("title rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
