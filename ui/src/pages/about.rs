use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};

pub const SKILLS: [&str; 6] = [
    "Rust / Leptos",
    "Actix Web",
    "WebAssembly",
    "Tailwind CSS",
    "PostgreSQL",
    "Spline 3D",
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 md:py-28 bg-white">
            <div class="max-w-6xl mx-auto px-4">
                <div class="grid md:grid-cols-2 gap-10 items-center">
                    <div>
                        <h2 class="text-3xl md:text-4xl font-bold text-gray-900">"About me"</h2>
                        <p class="mt-4 text-gray-700 leading-relaxed">
                            "I’m a full‑stack developer focused on crafting smooth, responsive experiences. "
                            "I care about performance, accessibility, and clean design. "
                            "When I’m not coding, I’m exploring creative tech and playful interactions."
                        </p>
                        <div class="mt-6 flex items-center gap-4">
                            <a href="#projects" class="inline-flex items-center gap-2 text-gray-900 font-medium">
                                "Explore my work"
                                <Icon glyph=Glyph::ArrowRight/>
                            </a>
                        </div>
                    </div>
                    <div class="rounded-2xl border bg-gray-50 p-6">
                        <ul class="grid grid-cols-2 gap-4 text-sm">
                            {SKILLS
                                .iter()
                                .map(|skill| view! {
                                    <li class="p-4 rounded-xl bg-white shadow-sm border">{*skill}</li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
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
    fn lists_every_skill() {
        let html = view! { <About/> }.to_html();
        assert!(html.contains("id=\"about\""));
        assert_eq!(html.matches("<li").count(), SKILLS.len());
        for skill in SKILLS {
            assert!(html.contains(skill), "missing {skill}");
        }
    }
}
