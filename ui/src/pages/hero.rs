use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::components::scene::{HERO_SCENE, SceneEmbed};
use crate::greeting::use_greeting;

pub const GREETING_PLACEHOLDER: &str = "—";

pub fn greeting_or_placeholder(greeting: &str) -> String {
    if greeting.is_empty() {
        GREETING_PLACEHOLDER.to_owned()
    } else {
        greeting.to_owned()
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let greeting = use_greeting();
    view! { <HeroContent greeting/> }
}

/// The hero layout, independent of where the greeting comes from.
#[component]
pub fn HeroContent(#[prop(into)] greeting: Signal<String>) -> impl IntoView {
    view! {
        <section id="home" class="relative min-h-[92vh] md:min-h-screen overflow-hidden">
            <div class="absolute inset-0">
                <SceneEmbed scene=HERO_SCENE/>
            </div>

            <div class="relative z-10">
                <div class="pointer-events-none absolute inset-0 bg-gradient-to-b from-white/70 via-white/30 to-white/70"></div>
                <div class="max-w-6xl mx-auto px-4 pt-32 md:pt-40 pb-16 md:pb-24 relative">
                    <div class="max-w-2xl">
                        <p class="text-sm md:text-base text-gray-700 mb-3">
                            {move || greeting.with(|g| greeting_or_placeholder(g))}
                        </p>
                        <h1 class="text-4xl md:text-6xl font-extrabold tracking-tight text-gray-900">
                            "Hi, I’m "
                            <span class="bg-gradient-to-r from-blue-600 via-purple-600 to-pink-500 bg-clip-text text-transparent">
                                "Your Name"
                            </span>
                        </h1>
                        <p class="mt-4 md:mt-6 text-base md:text-lg text-gray-700 leading-relaxed">
                            "I build modern, fast web apps with delightful interactions. "
                            "Explore my work, read about me, and let’s create something great together."
                        </p>
                        <div class="mt-6 md:mt-8 flex items-center gap-3">
                            <a
                                href="#projects"
                                class="inline-flex items-center gap-2 bg-gray-900 text-white px-5 py-3 rounded-full hover:bg-gray-800 transition-colors"
                            >
                                "View projects"
                                <Icon glyph=Glyph::ArrowRight/>
                            </a>
                            <a
                                href="#contact"
                                class="inline-flex items-center gap-2 px-5 py-3 rounded-full border border-gray-300 hover:border-gray-400"
                            >"Contact me"</a>
                        </div>
                        <div class="mt-6 flex items-center gap-4">
                            <a
                                href="https://github.com"
                                target="_blank"
                                rel="noreferrer"
                                class="text-gray-700 hover:text-gray-900 inline-flex items-center gap-2"
                            >
                                <Icon glyph=Glyph::Github/>
                                "GitHub"
                            </a>
                            <a
                                href="https://linkedin.com"
                                target="_blank"
                                rel="noreferrer"
                                class="text-gray-700 hover:text-gray-900 inline-flex items-center gap-2"
                            >
                                <Icon glyph=Glyph::Linkedin/>
                                "LinkedIn"
                            </a>
                            <a href="#contact" class="text-gray-700 hover:text-gray-900 inline-flex items-center gap-2">
                                <Icon glyph=Glyph::Mail/>
                                "Email"
                            </a>
                        </div>
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

    fn render(greeting: &str) -> String {
        let greeting = RwSignal::new(greeting.to_owned());
        view! { <HeroContent greeting/> }.to_html()
    }

    #[test]
    fn placeholder_only_when_empty() {
        assert_eq!(greeting_or_placeholder(""), "—");
        assert_eq!(greeting_or_placeholder("Hello"), "Hello");
    }

    #[test]
    fn renders_placeholder_without_greeting() {
        let html = render("");
        assert!(html.contains("id=\"home\""));
        assert!(html.contains("—"));
    }

    #[test]
    fn renders_fetched_greeting() {
        let html = render("Hello from the backend!");
        assert!(html.contains("Hello from the backend!"));
    }

    #[test]
    fn embeds_scene_behind_content() {
        let html = render("");
        assert!(html.contains("spline-viewer"));
        assert!(html.contains(HERO_SCENE.url));
        assert!(html.find("spline-viewer") < html.find("Your Name"));
    }
}
