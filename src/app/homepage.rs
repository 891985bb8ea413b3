use leptos::{html, prelude::*};
use leptos_meta::{Meta, Title};

use crate::profile::{profile, Project};

use super::icons::{ArrowRight, MailIcon, ProjectIconView};
use super::navbar::{BackToTop, FloatingNav};
use super::reveal::Reveal;
use super::viewport::{use_navigation, use_scroll_visibility};

pub const PROJECTS_ID: &str = "projects";

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = profile();
    let hero_ref = NodeRef::<html::Section>::new();
    let visibility = use_scroll_visibility(hero_ref, profile.scroll);

    view! {
        <Title text="Portfolio" />
        <Meta name="description" content=profile.tagline.clone() />
        <div class="min-h-screen relative overflow-hidden transition-colors duration-500">
            <Backdrop />
            <FloatingNav visible=Signal::derive(move || !visibility.beyond_hero.get()) />
            <main class="container mx-auto px-4 py-8 md:py-16 max-w-7xl relative z-10">
                <Hero hero_ref />
                <Projects />
                <ContactCta />
            </main>
            <BackToTop visible=visibility.show_scroll_to_top />
            <Footer />
        </div>
    }
}

#[component]
fn Backdrop() -> impl IntoView {
    view! {
        <div class="absolute top-0 left-0 w-full h-96 -z-10 bg-[radial-gradient(ellipse_at_top,transparent_0%,#3A04FF/10_50%,transparent_80%)]"></div>
        <div class="floating-blob absolute top-1/2 left-1/2 w-[600px] h-[600px] bg-white rounded-full mix-blend-screen opacity-5 backdrop-blur-lg -z-20"></div>
    }
}

#[component]
fn Hero(hero_ref: NodeRef<html::Section>) -> impl IntoView {
    let profile = profile();
    let nav = use_navigation();
    view! {
        <section node_ref=hero_ref class="text-center mt-16 md:mt-24 mb-24">
            <div class="fade-up">
                <h1 class="text-4xl md:text-7xl font-bold tracking-tight mb-4 leading-tight bg-clip-text text-transparent bg-gradient-to-br from-white to-slate-400">
                    "Hey, I'm "
                    <span class="italic font-serif underline decoration-blue-500 decoration-4 underline-offset-8">
                        {profile.name.clone()}
                    </span>
                    "."
                </h1>
                <p class="text-lg md:text-xl text-slate-400 max-w-2xl mx-auto mb-10">
                    {profile.tagline.clone()}
                </p>
            </div>
            <div class="fade-scale flex justify-center space-x-4">
                <button
                    on:click=move |_| {
                        nav.scroll_to_element(PROJECTS_ID);
                    }
                    class="py-3 px-8 text-lg font-medium rounded-full bg-gradient-to-br from-blue-600 to-cyan-600 text-white shadow-lg shadow-blue-600/30 transition-all duration-300 hover:shadow-xl hover:scale-105"
                >
                    "See My Work"
                </button>
                <a
                    href=profile.mailto()
                    class="py-3 px-8 text-lg font-medium rounded-full border border-gray-700 text-white hover:bg-gray-800 transition-colors"
                >
                    "Contact Me"
                </a>
            </div>
        </section>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section id=PROJECTS_ID class="mb-24">
            <h2 class="text-3xl md:text-4xl font-bold text-center mb-16 bg-clip-text text-transparent bg-gradient-to-r from-slate-200 to-slate-500">
                "My latest "
                <span class="italic underline decoration-pink-500 decoration-4 underline-offset-4 font-unbounded">
                    "projects"
                </span>
            </h2>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {profile()
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(i, project)| {
                        // staggered 100ms per card
                        let delay_ms = 100 * (i as u32 + 1);
                        view! { <ProjectCard project=project.clone() delay_ms /> }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, delay_ms: u32) -> impl IntoView {
    view! {
        <Reveal
            delay_ms
            class="p-6 bg-slate-800/30 border border-slate-700/50 rounded-xl backdrop-blur-sm transition-all hover:border-blue-500/50 hover:shadow-lg hover:shadow-blue-500/10"
        >
            <div class="text-blue-500 mb-4">
                <ProjectIconView icon=project.icon />
            </div>
            <h3 class="text-xl font-medium text-white mb-2">{project.title}</h3>
            <p class="text-sm text-slate-400 mb-4">{project.description}</p>
            <a
                href=project.url
                target="_blank"
                rel="noopener noreferrer"
                class="flex items-center text-sm text-blue-400 font-medium group"
            >
                "View Project"
                <ArrowRight class="ml-1 transition-transform duration-300 group-hover:translate-x-1" />
            </a>
        </Reveal>
    }
}

#[component]
fn ContactCta() -> impl IntoView {
    let profile = profile();
    view! {
        <section class="text-center">
            <Reveal class="p-10 bg-slate-800/30 border border-slate-700/50 rounded-3xl shadow-xl shadow-blue-500/10">
                <h2 class="text-3xl md:text-4xl font-bold mb-4 bg-clip-text text-transparent bg-gradient-to-r from-white to-slate-400">
                    {profile.contact.heading.clone()}
                </h2>
                <p class="text-lg text-slate-400 max-w-2xl mx-auto mb-8">
                    {profile.contact.blurb.clone()}
                </p>
                <a
                    href=profile.mailto()
                    class="py-3 px-8 text-lg font-medium rounded-full bg-gradient-to-br from-blue-600 to-cyan-600 text-white shadow-lg shadow-blue-600/30 transition-all duration-300 hover:shadow-xl hover:scale-105"
                >
                    <MailIcon class="mr-2 align-middle" />
                    "Say Hello"
                </a>
            </Reveal>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let profile = profile();
    view! {
        <footer class="py-8 text-center text-slate-500 border-t border-gray-800">
            <p class="text-sm">
                "Made with " <span class="text-red-500">"❤️"</span> " by "
                <a
                    href=profile.github.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="underline underline-offset-4 hover:text-blue-500 transition-colors"
                >
                    {profile.name.clone()}
                </a>
            </p>
        </footer>
    }
}
