use yew::prelude::*;

use crate::gallery::{visible_projects, Category};
use crate::reveal::{reveal_class, use_reveal};
use crate::stagger;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let (node, seen) = use_reveal();
    // Current filter, defaulting to the match-everything sentinel.
    let filter = use_state(|| Category::All);

    let projects = visible_projects(*filter);

    html! {
        <section id="portfolio" ref={node}>
            <style>
                {r#"
                    .filter-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                        margin-bottom: 3rem;
                    }
                    .filter-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.75rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        font-size: 1rem;
                        font-weight: 500;
                        color: #374151;
                        cursor: pointer;
                        transition: transform 0.2s ease, box-shadow 0.2s ease;
                    }
                    .filter-button:hover {
                        transform: scale(1.05);
                    }
                    .filter-button.active {
                        background: linear-gradient(90deg, #2563eb, #4f46e5);
                        color: white;
                        box-shadow: 0 10px 20px rgba(37, 99, 235, 0.25);
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                    }
                    @media (max-width: 992px) {
                        .project-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 640px) {
                        .project-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .project-card {
                        position: relative;
                        border-radius: 1rem;
                        padding: 1.5rem;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.3s ease, box-shadow 0.3s ease;
                    }
                    .project-card:hover {
                        transform: translateY(-10px) scale(1.02);
                        box-shadow: 0 20px 40px rgba(31, 41, 55, 0.15);
                    }
                    .project-accent {
                        position: absolute;
                        inset: 0;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .project-card:hover .project-accent {
                        opacity: 0.1;
                    }
                    .project-icon {
                        font-size: 3rem;
                        margin-bottom: 1rem;
                    }
                    .project-card h3 {
                        font-size: 1.25rem;
                        color: #1f2937;
                        margin-bottom: 0.75rem;
                    }
                    .project-card p {
                        font-size: 0.875rem;
                        color: #4b5563;
                        line-height: 1.6;
                        margin-bottom: 1rem;
                    }
                    .project-tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                    }
                    .project-tag {
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.75rem;
                        background: #f3f4f6;
                        color: #374151;
                    }
                    .portfolio-note {
                        text-align: center;
                        color: #4b5563;
                        margin-top: 3rem;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-title">
                    <h2 class={reveal_class("reveal-item", seen)}>
                        {"My "}<span class="text-gradient">{"Portfolio"}</span>
                    </h2>
                    <div class={classes!("title-underline", seen.then_some("visible"))}></div>
                    <p class={reveal_class("reveal-item", seen)}>
                        {"Showcase of my work across data analytics, creative design, and web development"}
                    </p>
                </div>

                <div class={reveal_class("reveal-item filter-row", seen)}>
                    {
                        Category::FILTERS.iter().map(|&category| {
                            let active = *filter == category;
                            let onclick = {
                                let filter = filter.clone();
                                Callback::from(move |_: MouseEvent| filter.set(category))
                            };
                            html! {
                                <button
                                    key={category.label()}
                                    class={classes!("filter-button", "glass", active.then(|| "active"))}
                                    onclick={onclick}
                                >
                                    <span>{category.icon()}</span>
                                    {category.label()}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>

                // An empty grid is a valid render for a filter with no
                // matching projects.
                <div class="project-grid">
                    {
                        projects.iter().enumerate().map(|(k, project)| html! {
                            <div
                                key={project.title}
                                class={reveal_class("reveal-item pop project-card glass", seen)}
                                style={stagger::transition_delay(0, 100, k)}
                            >
                                <div
                                    class="project-accent"
                                    style={format!("background: {};", project.color)}
                                ></div>
                                <div class="project-icon">{project.icon}</div>
                                <h3>{project.title}</h3>
                                <p>{project.description}</p>
                                <div class="project-tags">
                                    {
                                        project.tags.iter().map(|tag| html! {
                                            <span key={*tag} class="project-tag">{*tag}</span>
                                        }).collect::<Html>()
                                    }
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <p class={reveal_class("reveal-item portfolio-note", seen)}>
                    {"These are sample projects. Actual portfolio items can be added with real images and links."}
                </p>
            </div>
        </section>
    }
}
