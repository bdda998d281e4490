use yew::prelude::*;

use crate::content;
use crate::lightbox::{CertificateImage, Lightbox};
use crate::reveal::{reveal_class, use_reveal};
use crate::stagger;

#[function_component(Education)]
pub fn education() -> Html {
    let (node, seen) = use_reveal();
    let lightbox = use_state(Lightbox::default);

    let open_certificate = {
        let lightbox = lightbox.clone();
        Callback::from(move |image: &'static CertificateImage| {
            lightbox.set(lightbox.open(image));
        })
    };

    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_: MouseEvent| {
            lightbox.set(lightbox.close());
        })
    };

    html! {
        <section id="education" ref={node}>
            <style>
                {r#"
                    .degree-list {
                        max-width: 56rem;
                        margin: 0 auto 4rem;
                    }
                    .degree-card {
                        position: relative;
                        border-radius: 1rem;
                        padding: 2rem;
                        margin-bottom: 2rem;
                        overflow: hidden;
                    }
                    .degree-header {
                        display: flex;
                        align-items: flex-start;
                        justify-content: space-between;
                        gap: 1rem;
                        margin-bottom: 1.5rem;
                    }
                    .degree-title {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .degree-title .degree-icon {
                        font-size: 2rem;
                    }
                    .degree-title h3 {
                        font-size: 1.5rem;
                        color: #1f2937;
                    }
                    .degree-field {
                        font-size: 1.25rem;
                        font-weight: 600;
                        margin-bottom: 0.5rem;
                    }
                    .degree-sub {
                        color: #4b5563;
                        margin-bottom: 0.5rem;
                    }
                    .degree-school {
                        color: #374151;
                        font-weight: 500;
                    }
                    .degree-period {
                        white-space: nowrap;
                        color: #6b7280;
                        font-weight: 500;
                    }
                    .degree-highlight {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                        color: #4b5563;
                        margin-bottom: 0.75rem;
                    }
                    .cert-heading {
                        font-size: 1.875rem;
                        text-align: center;
                        margin-bottom: 2rem;
                    }
                    .cert-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                        max-width: 56rem;
                        margin: 0 auto 4rem;
                    }
                    @media (max-width: 768px) {
                        .cert-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .cert-card {
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        transition: transform 0.2s ease;
                    }
                    .cert-card:hover {
                        transform: scale(1.05);
                    }
                    .cert-card .cert-icon {
                        font-size: 1.875rem;
                    }
                    .cert-card h4 {
                        color: #1f2937;
                        margin-bottom: 0.25rem;
                    }
                    .cert-card p {
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .featured-cert {
                        max-width: 56rem;
                        margin: 0 auto;
                        border-radius: 1rem;
                        padding: 2rem;
                        text-align: center;
                    }
                    .featured-cert h4 {
                        font-size: 1.25rem;
                        color: #1f2937;
                        margin-bottom: 0.25rem;
                    }
                    .featured-cert .cert-note {
                        font-size: 0.875rem;
                        color: #6b7280;
                        margin-bottom: 1.5rem;
                    }
                    .cert-thumbs {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .cert-thumb {
                        width: 10rem;
                        height: 7rem;
                        object-fit: cover;
                        border-radius: 0.5rem;
                        cursor: zoom-in;
                        border: none;
                        padding: 0;
                        background: #e5e7eb;
                        transition: transform 0.2s ease;
                    }
                    .cert-thumb:hover {
                        transform: scale(1.05);
                    }
                    .lightbox-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 200;
                        background: rgba(17, 24, 39, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 2rem;
                    }
                    .lightbox-image {
                        max-width: 90vw;
                        max-height: 85vh;
                        border-radius: 0.5rem;
                        box-shadow: 0 24px 64px rgba(0, 0, 0, 0.5);
                    }
                    .lightbox-close {
                        position: absolute;
                        top: 1.5rem;
                        right: 2rem;
                        font-size: 2rem;
                        color: white;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-title">
                    <h2 class={reveal_class("reveal-item", seen)}>
                        {"Education & "}<span class="text-gradient">{"Certifications"}</span>
                    </h2>
                    <div class={classes!("title-underline", seen.then_some("visible"))}></div>
                    <p class={reveal_class("reveal-item", seen)}>
                        {"Academic achievements and professional development"}
                    </p>
                </div>

                <div class="degree-list">
                    {
                        content::DEGREES.iter().enumerate().map(|(k, degree)| html! {
                            <div
                                key={degree.field}
                                class={reveal_class("reveal-item degree-card glass", seen)}
                                style={stagger::transition_delay(300, 200, k)}
                            >
                                <div class="degree-header">
                                    <div>
                                        <div class="degree-title">
                                            <span class="degree-icon">{degree.icon}</span>
                                            <h3>{degree.degree}</h3>
                                        </div>
                                        <div
                                            class="degree-field text-gradient"
                                            style={format!("background: {}; -webkit-background-clip: text; background-clip: text;", degree.color)}
                                        >
                                            {degree.field}
                                        </div>
                                        if let Some(program) = degree.program {
                                            <div class="degree-sub">{program}</div>
                                        }
                                        if let Some(faculty) = degree.faculty {
                                            <div class="degree-sub">{faculty}</div>
                                        }
                                        <div class="degree-school">{degree.school}</div>
                                    </div>
                                    <div class="degree-period">{"📅 "}{degree.period}</div>
                                </div>
                                {
                                    degree.highlights.iter().enumerate().map(|(h, highlight)| html! {
                                        <div
                                            key={*highlight}
                                            class={reveal_class("reveal-item from-left degree-highlight", seen)}
                                            style={stagger::transition_delay(500 + k as u32 * 200, 100, h)}
                                        >
                                            <span>{"⭐"}</span>
                                            <span>{*highlight}</span>
                                        </div>
                                    }).collect::<Html>()
                                }
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <h3 class={reveal_class("reveal-item cert-heading", seen)}>
                    {"Certifications & "}<span class="text-gradient">{"Training"}</span>
                </h3>

                <div class="cert-grid">
                    {
                        content::CERTIFICATIONS.iter().enumerate().map(|(k, cert)| html! {
                            <div
                                key={cert.name}
                                class={reveal_class("reveal-item pop cert-card glass", seen)}
                                style={stagger::transition_delay(800, 100, k)}
                            >
                                <span class="cert-icon">{cert.icon}</span>
                                <div>
                                    <h4>{cert.name}</h4>
                                    <p>{cert.issuer}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class={reveal_class("reveal-item featured-cert glass", seen)}>
                    <h4>{content::FEATURED_CERTIFICATION.name}</h4>
                    <p class="cert-note">{content::FEATURED_CERTIFICATION.issuer}</p>
                    <p class="cert-note">{content::FEATURED_CERTIFICATION.note}</p>
                    <div class="cert-thumbs">
                        {
                            content::FEATURED_CERTIFICATION.images.iter().map(|image| {
                                let open_certificate = open_certificate.clone();
                                html! {
                                    <img
                                        key={image.src}
                                        src={image.src}
                                        alt={image.alt}
                                        loading="lazy"
                                        class="cert-thumb"
                                        onclick={Callback::from(move |_: MouseEvent| open_certificate.emit(image))}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            if let Some(image) = lightbox.image() {
                <div class="lightbox-backdrop" onclick={close_lightbox.clone()}>
                    <button class="lightbox-close" aria-label="Close" onclick={close_lightbox.clone()}>
                        {"✕"}
                    </button>
                    <img
                        src={image.src}
                        alt={image.alt}
                        class="lightbox-image"
                        // Keep clicks on the image itself from closing via the backdrop.
                        onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    />
                </div>
            }
        </section>
    }
}
