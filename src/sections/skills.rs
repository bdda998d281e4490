use yew::prelude::*;

use crate::content;
use crate::reveal::{reveal_class, use_reveal};
use crate::stagger;

#[function_component(Skills)]
pub fn skills() -> Html {
    let (node, seen) = use_reveal();

    html! {
        <section id="skills" ref={node}>
            <style>
                {r#"
                    .skills-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                    }
                    @media (max-width: 768px) {
                        .skills-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .skill-group {
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .skill-group-header {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .skill-group-accent {
                        width: 4px;
                        height: 2rem;
                        border-radius: 2px;
                    }
                    .skill-group-header h3 {
                        font-size: 1.5rem;
                        color: #1f2937;
                    }
                    .skill-row {
                        margin-bottom: 1.25rem;
                    }
                    .skill-row-top {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 0.5rem;
                    }
                    .skill-name {
                        font-weight: 500;
                        color: #374151;
                    }
                    .skill-level {
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #6b7280;
                    }
                    .skill-track {
                        position: relative;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #e5e7eb;
                        overflow: hidden;
                    }
                    .skill-bar {
                        position: absolute;
                        top: 0;
                        left: 0;
                        height: 100%;
                        border-radius: 9999px;
                        transition: width 1s ease-out;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-title">
                    <h2 class={reveal_class("reveal-item", seen)}>
                        {"Skills & "}<span class="text-gradient">{"Expertise"}</span>
                    </h2>
                    <div class={classes!("title-underline", seen.then_some("visible"))}></div>
                    <p class={reveal_class("reveal-item", seen)}>
                        {"A diverse skill set combining creativity, technical expertise, and analytical thinking"}
                    </p>
                </div>

                <div class="skills-grid">
                    {
                        content::SKILL_GROUPS.iter().enumerate().map(|(g, group)| html! {
                            <div
                                key={group.title}
                                class={reveal_class("reveal-item skill-group glass", seen)}
                                style={stagger::transition_delay(200, 100, g)}
                            >
                                <div class="skill-group-header">
                                    <div class="skill-group-accent" style={format!("background: {};", group.color)}></div>
                                    <h3>{group.title}</h3>
                                </div>
                                {
                                    group.skills.iter().enumerate().map(|(s, skill)| {
                                        // Bar stays at zero width until the section reveals.
                                        let width = if seen { skill.level } else { 0 };
                                        let bar_style = format!(
                                            "width: {}%; background: {}; {}",
                                            width,
                                            group.color,
                                            stagger::transition_delay(500 + g as u32 * 100, 50, s),
                                        );
                                        html! {
                                            <div key={skill.name} class="skill-row">
                                                <div class="skill-row-top">
                                                    <span class="skill-name">{skill.icon}{" "}{skill.name}</span>
                                                    <span class="skill-level">{skill.level}{"%"}</span>
                                                </div>
                                                <div class="skill-track">
                                                    <div class="skill-bar" style={bar_style}></div>
                                                </div>
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
