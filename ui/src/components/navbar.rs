use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::scroll::ScrollTracker;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#home", label: "Home" },
    NavLink { href: "#about", label: "About" },
    NavLink { href: "#projects", label: "Projects" },
    NavLink { href: "#contact", label: "Contact" },
];

/// Open/closed state of the mobile menu.
#[derive(Copy, Clone)]
pub struct MenuState {
    open: RwSignal<bool>,
}

impl MenuState {
    pub fn new() -> Self {
        Self { open: RwSignal::new(false) }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
    }

    pub fn close(&self) {
        self.open.set(false);
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

fn header_class(scrolled: bool) -> &'static str {
    if scrolled {
        "fixed top-0 left-0 right-0 z-50 transition-all backdrop-blur bg-white/70 shadow-sm"
    } else {
        "fixed top-0 left-0 right-0 z-50 transition-all bg-transparent"
    }
}

#[component]
fn MobileMenu(menu: MenuState) -> impl IntoView {
    view! {
        <div id="mobile-menu" class="md:hidden border-t bg-white/90 backdrop-blur">
            <div class="max-w-6xl mx-auto px-4 py-3 flex flex-col gap-2">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! {
                        // closing happens alongside the anchor jump, not instead of it
                        <a href=link.href on:click=move |_| menu.close() class="py-2 text-gray-800">
                            {link.label}
                        </a>
                    })
                    .collect_view()}
                <a
                    href="#contact"
                    on:click=move |_| menu.close()
                    class="py-2 text-white bg-gray-900 rounded-lg text-center"
                >"Hire me"</a>
            </div>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let menu = MenuState::new();
    let tracker = ScrollTracker::attach();
    let scrolled = tracker.scrolled();
    on_cleanup(move || tracker.detach());

    view! {
        <header class=move || header_class(scrolled.get())>
            <nav class="max-w-6xl mx-auto flex items-center justify-between px-4 py-3">
                <a href="#home" class="font-semibold text-lg tracking-tight">
                    <span class="bg-gradient-to-r from-blue-600 via-purple-600 to-pink-500 bg-clip-text text-transparent">
                        "MyPortfolio"
                    </span>
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href class="text-sm text-gray-700 hover:text-gray-900 transition-colors">
                                {link.label}
                            </a>
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        class="text-sm bg-gray-900 text-white rounded-full px-4 py-2 hover:bg-gray-800 transition-colors"
                    >"Hire me"</a>
                </div>
                <button
                    class="md:hidden p-2"
                    aria-label="Toggle menu"
                    on:click=move |_| menu.toggle()
                >
                    {move || {
                        let glyph = if menu.is_open() { Glyph::Close } else { Glyph::Menu };
                        view! { <Icon glyph size=22/> }
                    }}
                </button>
            </nav>
            <Show when=move || menu.is_open()>
                <MobileMenu menu/>
            </Show>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_are_fixed_anchors_in_order() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, ["#home", "#about", "#projects", "#contact"]);

        let labels: Vec<_> = NAV_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Home", "About", "Projects", "Contact"]);
    }

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::new().is_open());
    }

    #[test]
    fn toggle_opens_then_closes() {
        let menu = MenuState::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn close_resets_open_menu() {
        let menu = MenuState::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn closing_a_closed_menu_is_harmless() {
        let menu = MenuState::new();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn header_style_follows_scroll() {
        assert!(header_class(false).contains("bg-transparent"));
        assert!(header_class(true).contains("backdrop-blur"));
        assert!(!header_class(true).contains("bg-transparent"));
    }
}
