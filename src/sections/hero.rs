use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::content;
use crate::reveal::reveal_class;
use crate::stagger;

/// Hero sits above the fold, so it animates on mount rather than waiting
/// for an intersection: a short timeout flips the entrance flag so the
/// transitions actually run.
#[function_component(Hero)]
pub fn hero() -> Html {
    let entered = use_state(|| false);
    let role_index = use_state(|| 0usize);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(80, move || entered.set(true));
                move || { timeout.cancel(); }
            },
            (),
        );
    }

    // Rotate the role line: each render of a new index schedules the hop
    // to the next one.
    {
        let role_index = role_index.clone();
        let current_index = *role_index;
        use_effect_with_deps(
            move |index: &usize| {
                let next = (*index + 1) % content::ROLES.len();
                let timeout = Timeout::new(content::ROLE_HOLD_MS, move || role_index.set(next));
                move || { timeout.cancel(); }
            },
            current_index,
        );
    }

    let seen = *entered;
    let role = content::ROLES[*role_index % content::ROLES.len()];

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 5rem;
                    }
                    .hero-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (max-width: 768px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                            text-align: center;
                        }
                        .hero-links, .hero-cta-group, .hero-social {
                            justify-content: center;
                        }
                    }
                    .hero h1 {
                        font-size: 3.5rem;
                        margin-bottom: 1rem;
                    }
                    .hero-role {
                        font-size: 1.75rem;
                        color: #4b5563;
                        min-height: 2.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .hero-tagline {
                        font-size: 1.1rem;
                        color: #4b5563;
                        max-width: 36rem;
                        margin-bottom: 2rem;
                    }
                    .hero-links {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }
                    .hero-links a {
                        color: #4b5563;
                        text-decoration: none;
                        font-size: 0.95rem;
                    }
                    .hero-links a:hover {
                        color: #2563eb;
                    }
                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-cta {
                        padding: 0.75rem 2rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        text-decoration: none;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-cta.primary {
                        background: linear-gradient(90deg, #2563eb, #4f46e5);
                        color: white;
                        box-shadow: 0 10px 20px rgba(37, 99, 235, 0.25);
                    }
                    .hero-cta.secondary {
                        color: #1f2937;
                    }
                    .hero-social {
                        display: flex;
                        gap: 1rem;
                        margin-top: 2rem;
                    }
                    .hero-portrait {
                        position: relative;
                        display: flex;
                        justify-content: center;
                    }
                    .portrait-ring {
                        width: 20rem;
                        height: 20rem;
                        border-radius: 9999px;
                        padding: 0.5rem;
                        animation: heroFloat 4s ease-in-out infinite;
                    }
                    .portrait-ring > div {
                        width: 100%;
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(135deg, #60a5fa, #4f46e5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: white;
                        font-size: 4rem;
                        font-weight: 700;
                    }
                    .float-blob {
                        position: absolute;
                        border-radius: 9999px;
                        animation: blobSpin 8s linear infinite;
                    }
                    .float-blob.one {
                        top: 2rem;
                        right: 3rem;
                        width: 5rem;
                        height: 5rem;
                        background: rgba(96, 165, 250, 0.2);
                    }
                    .float-blob.two {
                        bottom: 2rem;
                        left: 3rem;
                        width: 4rem;
                        height: 4rem;
                        background: rgba(129, 140, 248, 0.2);
                        animation-duration: 6s;
                        animation-direction: reverse;
                    }
                    @keyframes heroFloat {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-20px); }
                    }
                    @keyframes blobSpin {
                        0% { transform: scale(1) rotate(0deg); }
                        50% { transform: scale(1.2) rotate(180deg); }
                        100% { transform: scale(1) rotate(360deg); }
                    }
                "#}
            </style>
            <div class="container hero-grid">
                <div>
                    <div
                        class={reveal_class("reveal-item pop", seen)}
                        style={stagger::transition_delay(0, 200, 0)}
                    >
                        <span class="chip">{"Welcome to my portfolio"}</span>
                    </div>

                    <h1
                        class={reveal_class("reveal-item", seen)}
                        style={stagger::transition_delay(0, 200, 1)}
                    >
                        {"Hi, I'm "}<span class="text-gradient">{content::FIRST_NAME}</span>
                    </h1>

                    <h2
                        class={reveal_class("reveal-item hero-role", seen)}
                        style={stagger::transition_delay(0, 200, 2)}
                    >
                        {role}
                    </h2>

                    <p
                        class={reveal_class("reveal-item hero-tagline", seen)}
                        style={stagger::transition_delay(0, 200, 3)}
                    >
                        {content::TAGLINE}
                    </p>

                    <div
                        class={reveal_class("reveal-item hero-links", seen)}
                        style={stagger::transition_delay(0, 200, 4)}
                    >
                        <a href={content::EMAIL_HREF}>{"✉️ "}{content::EMAIL}</a>
                        <a href={content::PHONE_HREF}>{"📞 "}{content::PHONE}</a>
                    </div>

                    <div
                        class={reveal_class("reveal-item hero-cta-group", seen)}
                        style={stagger::transition_delay(0, 200, 5)}
                    >
                        <a href="#contact" class="hero-cta primary">{"Get In Touch"}</a>
                        <a href="#portfolio" class="hero-cta secondary glass">{"View Portfolio"}</a>
                    </div>

                    <div
                        class={reveal_class("reveal-item hero-social", seen)}
                        style={stagger::transition_delay(0, 200, 6)}
                    >
                        {
                            content::SOCIAL_LINKS.iter().take(2).map(|(label, href, glyph)| html! {
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

                <div
                    class={classes!(reveal_class("reveal-item", seen), "hero-portrait")}
                    style={stagger::transition_delay(0, 200, 2)}
                >
                    <div class="portrait-ring glass">
                        <div>{content::INITIALS}</div>
                    </div>
                    <div class="float-blob one"></div>
                    <div class="float-blob two"></div>
                </div>
            </div>
        </section>
    }
}
