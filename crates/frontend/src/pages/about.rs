use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

struct Experience {
    title: &'static str,
    company: &'static str,
    period: &'static str,
    description: &'static str,
}

const SKILL_GROUPS: [(&str, &[&str]); 3] = [
    (
        "Frontend",
        &["Rust", "Leptos", "WebAssembly", "TypeScript", "Tailwind CSS"],
    ),
    (
        "Backend",
        &["Axum", "PostgreSQL", "Redis", "Node.js", "Python"],
    ),
    ("Tools & Others", &["Docker", "AWS", "Git", "Figma", "Trunk"]),
];

const EXPERIENCES: [Experience; 3] = [
    Experience {
        title: "Senior Full Stack Developer",
        company: "Tech Company",
        period: "2022 - Present",
        description: "Leading development of modern web applications using Rust, \
                      WebAssembly, and cloud technologies.",
    },
    Experience {
        title: "Frontend Developer",
        company: "Digital Agency",
        period: "2020 - 2022",
        description: "Built responsive websites and web applications for various clients \
                      using modern frontend frameworks.",
    },
    Experience {
        title: "Junior Developer",
        company: "Startup",
        period: "2019 - 2020",
        description: "Started my career developing features and fixing bugs in a \
                      fast-paced startup environment.",
    },
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="page page--narrow">
            <header class="page__header">
                <div class="about__avatar">"JS"</div>
                <h1 class="page__title">"About Me"</h1>
                <p class="page__subtitle">
                    "I'm a passionate full-stack developer with a love for creating digital \
                     experiences that are both beautiful and functional. With several years of \
                     experience, I specialize in modern web technologies and enjoy solving \
                     complex problems with clean, efficient code."
                </p>
            </header>

            <section class="about__section">
                <h2 class="about__heading">"My Story"</h2>
                <p>
                    "My journey into development started with curiosity about how websites \
                     work. What began as a hobby quickly became a passion, leading me to \
                     pursue formal education and eventually a career in web development."
                </p>
                <p>
                    "Over the years, I've worked with startups and established companies, \
                     building everything from simple websites to complex web applications. \
                     I believe in writing clean, maintainable code and creating user \
                     experiences that are intuitive and delightful."
                </p>
                <p>
                    "When I'm not coding, you can find me exploring new technologies, \
                     contributing to open source projects, or sharing knowledge with the \
                     developer community through blog posts and mentoring."
                </p>
            </section>

            <section class="about__section">
                <h2 class="about__heading">"Skills & Technologies"</h2>
                <div class="about__skills">
                    {SKILL_GROUPS
                        .iter()
                        .map(|(category, items)| view! {
                            <div class="skill-group">
                                <h3 class="skill-group__title">{*category}</h3>
                                <div class="skill-group__items">
                                    {items
                                        .iter()
                                        .map(|skill| view! {
                                            <div class="skill-group__item">{*skill}</div>
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about__section">
                <h2 class="about__heading">"Experience"</h2>
                <div class="timeline">
                    {EXPERIENCES
                        .iter()
                        .map(|exp| view! {
                            <div class="timeline__entry">
                                <div class="timeline__marker"></div>
                                <div class="timeline__card">
                                    <h3 class="timeline__title">{exp.title}</h3>
                                    <div class="timeline__meta">
                                        <span class="timeline__company">{exp.company}</span>
                                        <span class="timeline__period">{exp.period}</span>
                                    </div>
                                    <p class="timeline__description">{exp.description}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about__section about__section--center">
                <h2 class="about__heading">"Let's Connect"</h2>
                <p>
                    "I'm always interested in new opportunities and collaborations. \
                     Feel free to reach out if you'd like to work together!"
                </p>
                <div class="about__actions">
                    <Button size="lg">
                        {icon("mail")}
                        "Get In Touch"
                    </Button>
                    <Button variant="outline" size="lg">
                        {icon("download")}
                        "Download Resume"
                    </Button>
                </div>
            </section>
        </div>
    }
}
