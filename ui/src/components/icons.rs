use leptos::prelude::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Glyph {
    ArrowRight,
    Menu,
    Close,
    ExternalLink,
    Mail,
    Github,
    Linkedin,
}

impl Glyph {
    fn shape(self) -> AnyView {
        match self {
            Glyph::ArrowRight => view! {
                <path d="M5 12h14"/>
                <path d="m12 5 7 7-7 7"/>
            }.into_any(),
            Glyph::Menu => view! {
                <path d="M4 6h16"/>
                <path d="M4 12h16"/>
                <path d="M4 18h16"/>
            }.into_any(),
            Glyph::Close => view! {
                <path d="M18 6 6 18"/>
                <path d="m6 6 12 12"/>
            }.into_any(),
            Glyph::ExternalLink => view! {
                <path d="M15 3h6v6"/>
                <path d="M10 14 21 3"/>
                <path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>
            }.into_any(),
            Glyph::Mail => view! {
                <rect width="20" height="16" x="2" y="4" rx="2"/>
                <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>
            }.into_any(),
            Glyph::Github => view! {
                <path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/>
                <path d="M9 18c-4.51 2-5-2-7-2"/>
            }.into_any(),
            Glyph::Linkedin => view! {
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/>
                <rect width="4" height="12" x="2" y="9"/>
                <circle cx="4" cy="4" r="2"/>
            }.into_any(),
        }
    }
}

/// Stroke icon, sized in CSS pixels.
#[component]
pub fn Icon(glyph: Glyph, #[prop(default = 18)] size: u32) -> impl IntoView {
    view! {
        <svg
            width=size.to_string()
            height=size.to_string()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { glyph.shape() }
        </svg>
    }
}
