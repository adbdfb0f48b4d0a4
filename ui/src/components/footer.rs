use chrono::Datelike;
use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="border-t py-10">
            <div class="max-w-6xl mx-auto px-4 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-gray-600">"© " {year} " Your Name. All rights reserved."</p>
                <div class="flex items-center gap-4 text-sm">
                    <a href="https://github.com" class="inline-flex items-center gap-2 hover:text-gray-900 text-gray-700">
                        <Icon glyph=Glyph::Github size=16/>
                        "GitHub"
                    </a>
                    <a href="https://linkedin.com" class="inline-flex items-center gap-2 hover:text-gray-900 text-gray-700">
                        <Icon glyph=Glyph::Linkedin size=16/>
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn shows_current_year() {
        let html = view! { <Footer/> }.to_html();
        assert!(html.contains("©"));
        assert!(html.contains(&chrono::Local::now().year().to_string()));
    }
}
