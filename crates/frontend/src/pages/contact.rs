use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use leptos::prelude::*;

const CONTACT_CHANNELS: [(&str, &str, &str, &str); 3] = [
    ("mail", "Email", "hello@example.com", "Send me an email anytime"),
    ("phone", "Phone", "+1 (555) 123-4567", "Available Mon-Fri, 9am-6pm"),
    ("map-pin", "Location", "San Francisco, CA", "Open to remote work"),
];

/// Contact page: info cards and a message form.
///
/// There is no mail backend; submitting clears the form and acknowledges
/// after a short delay.
#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (subject, set_subject) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);
    let (sent, set_sent) = signal(false);

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_submitting.set(true);
        set_sent.set(false);
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(1_000).await;
            // The page may be gone when the delay elapses; try_set drops
            // the updates instead of touching disposed state.
            _ = set_name.try_set(String::new());
            _ = set_email.try_set(String::new());
            _ = set_subject.try_set(String::new());
            _ = set_message.try_set(String::new());
            _ = set_submitting.try_set(false);
            _ = set_sent.try_set(true);
        });
    };

    view! {
        <div class="page page--contact">
            <header class="page__header">
                <h1 class="page__title">"Get In Touch"</h1>
                <p class="page__subtitle">
                    "Have a project in mind or want to collaborate? I'd love to hear from \
                     you. Let's create something amazing together."
                </p>
            </header>

            <div class="contact">
                <div class="contact__info">
                    <h2 class="contact__heading">"Let's Talk"</h2>
                    {CONTACT_CHANNELS
                        .iter()
                        .map(|(icon_name, title, content, description)| view! {
                            <div class="contact-card">
                                <div class="contact-card__icon">{icon(icon_name)}</div>
                                <div class="contact-card__text">
                                    <h3 class="contact-card__title">{*title}</h3>
                                    <p class="contact-card__content">{*content}</p>
                                    <p class="contact-card__description">{*description}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}

                    <div class="contact__note">
                        <h3 class="contact__note-title">"Quick Response"</h3>
                        <p>
                            "I typically respond to messages within 24 hours. For urgent \
                             matters, feel free to call during business hours."
                        </p>
                    </div>
                </div>

                <form class="contact__form" on:submit=handle_submit>
                    <h2 class="contact__heading">"Send a Message"</h2>

                    <div class="contact__form-row">
                        <Input
                            id="name"
                            label="Name"
                            value=name
                            on_input=Callback::new(move |v| set_name.set(v))
                            placeholder="Your name"
                            required=true
                        />
                        <Input
                            id="email"
                            label="Email"
                            input_type="email"
                            value=email
                            on_input=Callback::new(move |v| set_email.set(v))
                            placeholder="your@email.com"
                            required=true
                        />
                    </div>

                    <Input
                        id="subject"
                        label="Subject"
                        value=subject
                        on_input=Callback::new(move |v| set_subject.set(v))
                        placeholder="What's this about?"
                        required=true
                    />

                    <Textarea
                        id="message"
                        label="Message"
                        value=message
                        on_input=Callback::new(move |v| set_message.set(v))
                        placeholder="Tell me about your project or what you'd like to discuss..."
                        rows=6u32
                        required=true
                    />

                    <Button
                        button_type="submit"
                        disabled=submitting
                        class="contact__submit"
                    >
                        {move || if submitting.get() {
                            view! { <span>"Sending..."</span> }.into_any()
                        } else {
                            view! {
                                <>
                                    {icon("send")}
                                    <span>"Send Message"</span>
                                </>
                            }
                            .into_any()
                        }}
                    </Button>

                    {move || sent.get().then(|| view! {
                        <p class="contact__sent">"Message sent successfully!"</p>
                    })}
                </form>
            </div>
        </div>
    }
}
