use leptos::prelude::*;

/// An externally hosted 3D scene. Nothing flows back from it.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SceneRef {
    pub url: &'static str,
}

pub const HERO_SCENE: SceneRef = SceneRef {
    url: "https://prod.spline.design/VJLoxp84lCdVfdZu/scene.splinecode",
};

/// Renders `scene` into the element it is placed in, filling it.
///
/// The `<spline-viewer>` element is registered by the script tag in index.html.
#[component]
pub fn SceneEmbed(scene: SceneRef) -> impl IntoView {
    view! {
        <spline-viewer
            url=scene.url
            class="block w-full h-full"
        ></spline-viewer>
    }
}
