use yew::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod content;
mod gallery;
mod lightbox;
mod reveal;
mod stagger;
mod sections {
    pub mod hero;
    pub mod about;
    pub mod skills;
    pub mod experience;
    pub mod education;
    pub mod portfolio;
    pub mod contact;
    pub mod footer;
}

use sections::{
    about::About,
    contact::Contact,
    education::Education,
    experience::Experience,
    footer::Footer,
    hero::Hero,
    portfolio::Portfolio,
    skills::Skills,
};

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().expect("no window");
            let document = window.document().expect("no document");

            let scroll_callback = Closure::wrap(Box::new(move || {
                if let Some(root) = document.document_element() {
                    is_scrolled.set(root.scroll_top() > 40);
                }
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .expect("failed to attach scroll listener");

            move || {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{content::FIRST_NAME}</a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        content::SECTION_LINKS.iter().map(|(label, href)| html! {
                            <a key={*label} href={*href} class="nav-link" onclick={close_menu.clone()}>
                                {*label}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>
                {r#"
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                        color: #1f2937;
                        background: linear-gradient(180deg, #eff6ff 0%, #ffffff 40%, #eef2ff 100%);
                        overflow-x: hidden;
                    }
                    .container {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    section {
                        padding: 5rem 0;
                    }
                    .glass {
                        background: rgba(255, 255, 255, 0.6);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(255, 255, 255, 0.8);
                        box-shadow: 0 8px 32px rgba(31, 41, 55, 0.08);
                    }
                    .text-gradient {
                        background: linear-gradient(90deg, #2563eb, #4f46e5);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .section-title {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .section-title h2 {
                        font-size: 2.5rem;
                        margin-bottom: 1rem;
                    }
                    .title-underline {
                        width: 0;
                        height: 4px;
                        margin: 0 auto 1.5rem;
                        border-radius: 2px;
                        background: linear-gradient(90deg, #2563eb, #4f46e5);
                        transition: width 0.6s ease 0.4s;
                    }
                    .visible > .title-underline,
                    .title-underline.visible {
                        width: 80px;
                    }
                    .section-title p {
                        color: #4b5563;
                        max-width: 42rem;
                        margin: 0 auto;
                    }

                    /* Entrance animation states. Hidden state only offsets
                       transform/opacity so content stays readable when the
                       observer never fires. */
                    .reveal-item {
                        opacity: 0;
                        transform: translateY(24px);
                        transition: opacity 0.6s ease, transform 0.6s ease;
                    }
                    .reveal-item.from-left {
                        transform: translateX(-40px);
                    }
                    .reveal-item.from-right {
                        transform: translateX(40px);
                    }
                    .reveal-item.pop {
                        transform: scale(0.6);
                    }
                    .reveal-item.visible {
                        opacity: 1;
                        transform: none;
                    }

                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 1rem 0;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 255, 255, 0.85);
                        backdrop-filter: blur(12px);
                        box-shadow: 0 2px 12px rgba(31, 41, 55, 0.08);
                    }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.4rem;
                        font-weight: 700;
                        text-decoration: none;
                        background: linear-gradient(90deg, #2563eb, #4f46e5);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .nav-right {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: #374151;
                        text-decoration: none;
                        font-weight: 500;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #2563eb;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #374151;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            padding: 1rem 1.5rem;
                            background: rgba(255, 255, 255, 0.95);
                            box-shadow: 0 8px 16px rgba(31, 41, 55, 0.1);
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                    }

                    .chip {
                        display: inline-block;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        background: linear-gradient(90deg, #dbeafe, #e0e7ff);
                        color: #1d4ed8;
                    }
                    .round-link {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        color: #374151;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.2s ease, color 0.2s ease;
                    }
                    .round-link:hover {
                        transform: translateY(-5px);
                        color: #2563eb;
                    }
                "#}
            </style>
            <Nav />
            <main>
                <Hero />
                <About />
                <Skills />
                <Experience />
                <Education />
                <Portfolio />
                <Contact />
            </main>
            <Footer />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
