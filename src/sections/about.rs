use yew::prelude::*;

use crate::content;
use crate::reveal::{reveal_class, use_reveal};
use crate::stagger;

#[function_component(About)]
pub fn about() -> Html {
    let (node, seen) = use_reveal();

    html! {
        <section id="about" ref={node}>
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    @media (max-width: 768px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .stats-card {
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .stats-card h3 {
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .stat-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: linear-gradient(90deg, #eff6ff, #eef2ff);
                        margin-bottom: 1rem;
                    }
                    .stat-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(90deg, #2563eb, #4f46e5);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }
                    .stat-value {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #1f2937;
                    }
                    .stat-label {
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .about-text h3 {
                        font-size: 1.875rem;
                        color: #1f2937;
                        margin-bottom: 1.5rem;
                    }
                    .about-text p {
                        color: #4b5563;
                        line-height: 1.7;
                        margin-bottom: 1rem;
                    }
                    .trait-chips {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-title">
                    <h2 class={reveal_class("reveal-item", seen)}>
                        {"About "}<span class="text-gradient">{"Me"}</span>
                    </h2>
                    <div class={classes!("title-underline", seen.then_some("visible"))}></div>
                </div>

                <div class="about-grid">
                    <div
                        class={reveal_class("reveal-item from-left stats-card glass", seen)}
                        style={stagger::transition_delay(300, 0, 0)}
                    >
                        <h3 class="text-gradient">{"Quick Stats"}</h3>
                        {
                            content::STATS.iter().enumerate().map(|(k, stat)| html! {
                                <div
                                    key={stat.label}
                                    class={reveal_class("reveal-item from-left stat-row", seen)}
                                    style={stagger::transition_delay(400, 100, k)}
                                >
                                    <div class="stat-icon">{stat.icon}</div>
                                    <div>
                                        <div class="stat-value">{stat.value}</div>
                                        <div class="stat-label">{stat.label}</div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>

                    <div
                        class={reveal_class("reveal-item from-right about-text", seen)}
                        style={stagger::transition_delay(500, 0, 0)}
                    >
                        <h3>{"Transforming Ideas into Reality"}</h3>
                        {
                            content::ABOUT_PARAGRAPHS.iter().map(|paragraph| html! {
                                <p key={*paragraph}>{*paragraph}</p>
                            }).collect::<Html>()
                        }
                        <div class="trait-chips">
                            {
                                content::TRAITS.iter().enumerate().map(|(k, name)| html! {
                                    <span
                                        key={*name}
                                        class={reveal_class("reveal-item pop chip", seen)}
                                        style={stagger::transition_delay(700, 100, k)}
                                    >
                                        {*name}
                                    </span>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
