use web_sys::{window, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::content;
use crate::reveal::{reveal_class, use_reveal};
use crate::stagger;

#[function_component(Footer)]
pub fn footer() -> Html {
    let (node, seen) = use_reveal();
    let scroll_to_top = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    let year = web_sys::js_sys::Date::new_0().get_full_year();

    html! {
        <footer class="site-footer" ref={node}>
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 0 2rem;
                        background: linear-gradient(180deg, rgba(239, 246, 255, 0.3), rgba(224, 231, 255, 0.5));
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .footer-grid h3 {
                        font-size: 1.25rem;
                        color: #1f2937;
                        margin-bottom: 1rem;
                    }
                    .footer-about p {
                        color: #4b5563;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .footer-social {
                        display: flex;
                        gap: 1rem;
                    }
                    .footer-links a,
                    .footer-contact a {
                        display: block;
                        color: #4b5563;
                        text-decoration: none;
                        margin-bottom: 0.5rem;
                        transition: color 0.2s ease;
                    }
                    .footer-links a:hover,
                    .footer-contact a:hover {
                        color: #2563eb;
                    }
                    .footer-contact div {
                        color: #4b5563;
                    }
                    .footer-divider {
                        border-top: 1px solid rgba(209, 213, 219, 0.5);
                        margin: 2rem 0;
                    }
                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }
                    .footer-bottom p {
                        color: #4b5563;
                        font-size: 0.875rem;
                    }
                    .back-to-top {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        cursor: pointer;
                        transition: transform 0.2s ease, color 0.2s ease;
                    }
                    .back-to-top:hover {
                        transform: translateY(-5px);
                        color: #2563eb;
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div class={reveal_class("reveal-item footer-about", seen)} style={stagger::transition_delay(0, 200, 0)}>
                        <h3 class="text-gradient">{content::NAME}</h3>
                        <p>
                            {"Administrative Officer & IT Professional passionate about data \
                              analytics, creative design, and digital transformation."}
                        </p>
                        <div class="footer-social">
                            {
                                content::SOCIAL_LINKS.iter().map(|(label, href, glyph)| html! {
                                    <a
                                        key={*label}
                                        href={*href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="round-link glass"
                                        aria-label={*label}
                                    >
                                        {*glyph}
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class={reveal_class("reveal-item footer-links", seen)} style={stagger::transition_delay(0, 200, 1)}>
                        <h3>{"Quick Links"}</h3>
                        {
                            content::SECTION_LINKS.iter().map(|(label, href)| html! {
                                <a key={*label} href={*href}>{*label}</a>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class={reveal_class("reveal-item footer-contact", seen)} style={stagger::transition_delay(0, 200, 2)}>
                        <h3>{"Get In Touch"}</h3>
                        <a href={content::EMAIL_HREF}>{content::EMAIL}</a>
                        <a href={content::PHONE_HREF}>{content::PHONE}</a>
                        <div>{content::LOCATION}</div>
                    </div>
                </div>

                <div class="footer-divider"></div>

                <div class="footer-bottom">
                    <p>{format!("© {} {}. Made with ❤️ and Rust", year, content::NAME)}</p>
                    <button class="back-to-top glass" onclick={scroll_to_top}>
                        {"Back to Top ↑"}
                    </button>
                </div>
            </div>
        </footer>
    }
}
