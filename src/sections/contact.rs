use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content;
use crate::reveal::{reveal_class, use_reveal};
use crate::stagger;

#[function_component(Contact)]
pub fn contact() -> Html {
    let (node, seen) = use_reveal();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let subject = use_state(String::new);
    let message = use_state(String::new);
    let submitted = use_state(|| false);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let subject = subject.clone();
        let message = message.clone();
        let submitted = submitted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            // Placeholder: there is no submission endpoint. The form only
            // acknowledges locally; nothing leaves the page.
            log::info!(
                "contact form stub: from={} subject={} ({} chars)",
                *email,
                *subject,
                message.len(),
            );
            name.set(String::new());
            email.set(String::new());
            subject.set(String::new());
            message.set(String::new());
            submitted.set(true);
        })
    };

    html! {
        <section id="contact" ref={node}>
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    @media (max-width: 992px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    .contact-side h3 {
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .channel-card {
                        border-radius: 0.75rem;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 1rem;
                        text-decoration: none;
                        transition: box-shadow 0.2s ease;
                    }
                    a.channel-card:hover {
                        box-shadow: 0 12px 24px rgba(31, 41, 55, 0.12);
                    }
                    .channel-icon {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }
                    .channel-title {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .channel-value {
                        font-weight: 500;
                        color: #1f2937;
                    }
                    a.channel-card:hover .channel-value {
                        color: #2563eb;
                    }
                    .contact-social {
                        display: flex;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }
                    .contact-quote {
                        border-radius: 1rem;
                        height: 10rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 0 1.5rem;
                        font-style: italic;
                        color: #4b5563;
                        text-align: center;
                        background: linear-gradient(135deg, rgba(59, 130, 246, 0.15), rgba(147, 51, 234, 0.15));
                    }
                    .contact-form {
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .contact-form h3 {
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                    }
                    .form-field {
                        margin-bottom: 1.5rem;
                    }
                    .form-field label {
                        display: block;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #374151;
                        margin-bottom: 0.5rem;
                    }
                    .form-field input,
                    .form-field textarea {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        background: rgba(255, 255, 255, 0.5);
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        font: inherit;
                        transition: box-shadow 0.2s ease;
                    }
                    .form-field input:focus,
                    .form-field textarea:focus {
                        outline: none;
                        box-shadow: 0 0 0 2px #3b82f6;
                    }
                    .form-field textarea {
                        resize: none;
                    }
                    .form-submit {
                        width: 100%;
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 0.5rem;
                        font-size: 1rem;
                        font-weight: 500;
                        color: white;
                        background: linear-gradient(90deg, #2563eb, #4f46e5);
                        box-shadow: 0 10px 20px rgba(37, 99, 235, 0.25);
                        cursor: pointer;
                        transition: transform 0.2s ease;
                    }
                    .form-submit:hover {
                        transform: scale(1.02);
                    }
                    .form-thanks {
                        margin-top: 1rem;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        background: #ecfdf5;
                        color: #047857;
                        text-align: center;
                    }
                "#}
            </style>
            <div class="container">
                <div class="section-title">
                    <h2 class={reveal_class("reveal-item", seen)}>
                        {"Get In "}<span class="text-gradient">{"Touch"}</span>
                    </h2>
                    <div class={classes!("title-underline", seen.then_some("visible"))}></div>
                    <p class={reveal_class("reveal-item", seen)}>
                        {"Have a question or want to work together? Feel free to reach out!"}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class={reveal_class("reveal-item from-left contact-side", seen)}>
                        <h3>{"Contact Information"}</h3>
                        {
                            content::CONTACT_CHANNELS.iter().enumerate().map(|(k, channel)| {
                                let inner = html! {
                                    <>
                                        <div
                                            class="channel-icon"
                                            style={format!("background: {};", channel.color)}
                                        >
                                            {channel.icon}
                                        </div>
                                        <div>
                                            <div class="channel-title">{channel.title}</div>
                                            <div class="channel-value">{channel.value}</div>
                                        </div>
                                    </>
                                };
                                let class = reveal_class("reveal-item from-left channel-card glass", seen);
                                let style = stagger::transition_delay(400, 100, k);
                                match channel.href {
                                    Some(href) => html! {
                                        <a key={channel.title} href={href} class={class} style={style}>{inner}</a>
                                    },
                                    None => html! {
                                        <div key={channel.title} class={class} style={style}>{inner}</div>
                                    },
                                }
                            }).collect::<Html>()
                        }

                        <h3>{"Connect With Me"}</h3>
                        <div class="contact-social">
                            {
                                content::SOCIAL_LINKS.iter().enumerate().map(|(k, (label, href, glyph))| html! {
                                    <a
                                        key={*label}
                                        href={*href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class={reveal_class("reveal-item pop round-link glass", seen)}
                                        style={stagger::transition_delay(700, 100, k)}
                                        aria-label={*label}
                                    >
                                        {*glyph}
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>

                        <div class={reveal_class("reveal-item pop contact-quote glass", seen)}>
                            {"\"Let's create something amazing together!\""}
                        </div>
                    </div>

                    <div class={reveal_class("reveal-item from-right", seen)}>
                        <form onsubmit={onsubmit} class="contact-form glass">
                            <h3>{"Send Me a Message"}</h3>

                            <div class="form-field">
                                <label for="name">{"Your Name"}</label>
                                <input
                                    type="text"
                                    id="name"
                                    required={true}
                                    placeholder="John Doe"
                                    value={(*name).clone()}
                                    onchange={let name = name.clone(); move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        name.set(input.value());
                                    }}
                                />
                            </div>

                            <div class="form-field">
                                <label for="email">{"Your Email"}</label>
                                <input
                                    type="email"
                                    id="email"
                                    required={true}
                                    placeholder="john@example.com"
                                    value={(*email).clone()}
                                    onchange={let email = email.clone(); move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        email.set(input.value());
                                    }}
                                />
                            </div>

                            <div class="form-field">
                                <label for="subject">{"Subject"}</label>
                                <input
                                    type="text"
                                    id="subject"
                                    required={true}
                                    placeholder="What's this about?"
                                    value={(*subject).clone()}
                                    onchange={let subject = subject.clone(); move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        subject.set(input.value());
                                    }}
                                />
                            </div>

                            <div class="form-field">
                                <label for="message">{"Message"}</label>
                                <textarea
                                    id="message"
                                    required={true}
                                    rows="5"
                                    placeholder="Tell me about your project or inquiry..."
                                    value={(*message).clone()}
                                    onchange={let message = message.clone(); move |e: Event| {
                                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                                        message.set(input.value());
                                    }}
                                />
                            </div>

                            <button type="submit" class="form-submit">
                                {"✈️ Send Message"}
                            </button>

                            if *submitted {
                                <div class="form-thanks">
                                    {"Thank you for your message! I will get back to you soon."}
                                </div>
                            }
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
