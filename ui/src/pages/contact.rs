use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ContactField {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Spans both grid columns on wide screens.
    pub wide: bool,
}

pub const CONTACT_FIELDS: [ContactField; 4] = [
    ContactField {
        name: "name",
        placeholder: "Your name",
        kind: FieldKind::Text,
        required: true,
        wide: false,
    },
    ContactField {
        name: "email",
        placeholder: "Email address",
        kind: FieldKind::Email,
        required: true,
        wide: false,
    },
    ContactField {
        name: "company",
        placeholder: "Company or website",
        kind: FieldKind::Text,
        required: false,
        wide: true,
    },
    ContactField {
        name: "details",
        placeholder: "Project details",
        kind: FieldKind::TextArea,
        required: false,
        wide: true,
    },
];

/// Keeps the browser from submitting. Intentionally does nothing else.
fn swallow_submit(ev: SubmitEvent) {
    ev.prevent_default();
}

fn field_view(field: ContactField) -> AnyView {
    let class = if field.wide {
        "md:col-span-2 border rounded-lg px-4 py-3"
    } else {
        "border rounded-lg px-4 py-3"
    };

    match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                name=field.name
                class=format!("{class} h-32")
                placeholder=field.placeholder
                required=field.required
            ></textarea>
        }
        .into_any(),
        FieldKind::Text | FieldKind::Email => {
            let ty = if field.kind == FieldKind::Email { "email" } else { "text" };
            view! {
                <input
                    type=ty
                    name=field.name
                    class=class
                    placeholder=field.placeholder
                    required=field.required
                />
            }
            .into_any()
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 md:py-28">
            <div class="max-w-3xl mx-auto px-4">
                <div class="rounded-2xl border bg-white p-8 shadow-sm">
                    <h2 class="text-3xl md:text-4xl font-bold text-gray-900">"Let’s work together"</h2>
                    <p class="mt-3 text-gray-700">
                        "Tell me a bit about your project and I’ll get back to you shortly."
                    </p>
                    <form class="mt-6 grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=swallow_submit>
                        {CONTACT_FIELDS.into_iter().map(field_view).collect_view()}
                        <div class="md:col-span-2 flex items-center gap-3">
                            <button
                                type="submit"
                                class="inline-flex items-center gap-2 bg-gray-900 text-white px-5 py-3 rounded-full hover:bg-gray-800 transition-colors"
                            >
                                "Send message"
                                <Icon glyph=Glyph::ArrowRight/>
                            </button>
                            <a
                                href="mailto:hello@example.com"
                                class="inline-flex items-center gap-2 px-5 py-3 rounded-full border border-gray-300 hover:border-gray-400"
                            >
                                "Or email me directly"
                                <Icon glyph=Glyph::Mail/>
                            </a>
                        </div>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        view! { <Contact/> }.to_html()
    }

    #[test]
    fn four_fields_two_required() {
        let names: Vec<_> = CONTACT_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email", "company", "details"]);
        assert_eq!(CONTACT_FIELDS.iter().filter(|f| f.required).count(), 2);
    }

    #[test]
    fn renders_all_controls() {
        let html = render();
        assert!(html.contains("id=\"contact\""));
        assert_eq!(html.matches("<input").count(), 3);
        assert_eq!(html.matches("<textarea").count(), 1);
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("Send message"));
    }

    #[test]
    fn form_has_nowhere_to_submit_to() {
        let html = render();
        let form_start = html.find("<form").expect("form rendered");
        let form_tag = &html[form_start..form_start + html[form_start..].find('>').unwrap()];
        assert!(!form_tag.contains("action"));
        assert!(!form_tag.contains("method"));
    }
}
