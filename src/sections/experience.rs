use yew::prelude::*;

use crate::content;
use crate::reveal::{reveal_class, use_reveal};
use crate::stagger;

#[function_component(Experience)]
pub fn experience() -> Html {
    let (node, seen) = use_reveal();

    html! {
        <section id="experience" ref={node}>
            <style>
                {r#"
                    .timeline {
                        position: relative;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .timeline-line {
                        position: absolute;
                        left: 50%;
                        transform: translateX(-50%);
                        height: 100%;
                        width: 2px;
                        background: linear-gradient(180deg, #2563eb, #4f46e5, #9333ea);
                    }
                    .timeline-entry {
                        position: relative;
                        display: flex;
                        margin-bottom: 3rem;
                    }
                    .timeline-entry.flip {
                        flex-direction: row-reverse;
                    }
                    .timeline-dot {
                        position: absolute;
                        left: 50%;
                        top: 1.5rem;
                        transform: translateX(-50%);
                        width: 1rem;
                        height: 1rem;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, #2563eb, #4f46e5);
                        border: 4px solid white;
                        box-shadow: 0 2px 8px rgba(31, 41, 55, 0.2);
                        z-index: 10;
                    }
                    .timeline-card {
                        width: calc(50% - 3rem);
                        border-radius: 1rem;
                        padding: 1.5rem;
                        transition: box-shadow 0.3s ease;
                    }
                    .timeline-card:hover {
                        box-shadow: 0 20px 40px rgba(31, 41, 55, 0.15);
                    }
                    @media (max-width: 768px) {
                        .timeline-line, .timeline-dot {
                            left: 0.5rem;
                        }
                        .timeline-entry, .timeline-entry.flip {
                            flex-direction: row;
                        }
                        .timeline-card {
                            width: 100%;
                            margin-left: 2.5rem;
                        }
                    }
                    .current-badge {
                        display: inline-block;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        font-weight: 600;
                        color: white;
                        background: linear-gradient(90deg, #22c55e, #10b981);
                        margin-bottom: 0.75rem;
                    }
                    .timeline-card h3 {
                        font-size: 1.25rem;
                        color: #1f2937;
                        margin-bottom: 0.5rem;
                    }
                    .timeline-company {
                        font-size: 1.1rem;
                        font-weight: 600;
                        color: #2563eb;
                        margin-bottom: 0.25rem;
                    }
                    .timeline-department {
                        font-size: 0.875rem;
                        color: #4b5563;
                        margin-bottom: 0.75rem;
                    }
                    .timeline-meta {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin-bottom: 1rem;
                    }
                    .timeline-meta div {
                        margin-bottom: 0.25rem;
                    }
                    .timeline-card li {
                        font-size: 0.875rem;
                        color: #4b5563;
                        margin-left: 1rem;
                        margin-bottom: 0.5rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-title">
                    <h2 class={reveal_class("reveal-item", seen)}>
                        {"Work "}<span class="text-gradient">{"Experience"}</span>
                    </h2>
                    <div class={classes!("title-underline", seen.then_some("visible"))}></div>
                    <p class={reveal_class("reveal-item", seen)}>
                        {"My professional journey across education, HR, and administrative roles"}
                    </p>
                </div>

                <div class="timeline">
                    <div class="timeline-line"></div>
                    {
                        content::EXPERIENCES.iter().enumerate().map(|(k, exp)| {
                            // Cards alternate sides and slide in from their own side.
                            let flip = k % 2 == 1;
                            let entry_class = if flip { "timeline-entry flip" } else { "timeline-entry" };
                            let slide = if flip { "reveal-item from-right timeline-card glass" } else { "reveal-item from-left timeline-card glass" };
                            html! {
                                <div key={exp.title} class={entry_class}>
                                    <div class="timeline-dot"></div>
                                    <div
                                        class={reveal_class(slide, seen)}
                                        style={stagger::transition_delay(300, 100, k)}
                                    >
                                        if exp.current {
                                            <span class="current-badge">{"Current Position"}</span>
                                        }
                                        <h3>{"💼 "}{exp.title}</h3>
                                        <div class="timeline-company">{exp.company}</div>
                                        <div class="timeline-department">{exp.department}</div>
                                        <div class="timeline-meta">
                                            <div>{"📅 "}{exp.period}</div>
                                            <div>{"📍 "}{exp.location}</div>
                                        </div>
                                        <ul>
                                            {
                                                exp.responsibilities.iter().map(|duty| html! {
                                                    <li key={*duty}>{*duty}</li>
                                                }).collect::<Html>()
                                            }
                                        </ul>
                                    </div>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
