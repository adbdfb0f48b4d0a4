use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};

use crate::components::{footer::Footer, navbar::Navbar};
use crate::pages::home::Home;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Your Name · Portfolio"/>
        <Meta name="description" content="Full-stack developer building modern, fast web apps."/>

        <div class="min-h-screen bg-white text-gray-900">
            <Navbar/>
            <Home/>
            <Footer/>
        </div>
    }
}
