//! Career timeline app: a sidebar of roles and a detail pane for the selected one.

use desktop_app_contract::{ready_mount, AppModule, AppMountContext};
use leptos::*;
use system_ui::{Icon, IconName, IconSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Experience {
    id: &'static str,
    company: &'static str,
    role: &'static str,
    duration: &'static str,
    location: &'static str,
    highlights: &'static [&'static str],
}

const EXPERIENCES: [Experience; 3] = [
    Experience {
        id: "tech-innovations",
        company: "Tech Innovations Inc.",
        role: "Senior Frontend Developer",
        duration: "2021 - Present",
        location: "San Francisco, CA",
        highlights: &[
            "Led development of a component design system used across 20+ products",
            "Improved application performance by 40% through code splitting and lazy loading",
            "Mentored 5 junior developers and conducted code reviews",
            "Implemented a CI/CD pipeline reducing deployment time by 60%",
        ],
    },
    Experience {
        id: "digital-solutions",
        company: "Digital Solutions Co.",
        role: "Frontend Developer",
        duration: "2019 - 2021",
        location: "New York, NY",
        highlights: &[
            "Built responsive web applications with a typed frontend stack",
            "Collaborated with UX designers to implement pixel-perfect designs",
            "Reduced bundle size by 35% through optimization techniques",
            "Implemented accessibility features achieving WCAG 2.1 AA compliance",
        ],
    },
    Experience {
        id: "startup-ventures",
        company: "StartUp Ventures",
        role: "Junior Frontend Developer",
        duration: "2018 - 2019",
        location: "Austin, TX",
        highlights: &[
            "Developed user interfaces for customer-facing web applications",
            "Worked in an Agile environment with 2-week sprints",
            "Integrated REST APIs and handled client-side state management",
            "Participated in daily standups and sprint planning meetings",
        ],
    },
];

fn find_experience(id: &str) -> Option<&'static Experience> {
    EXPERIENCES.iter().find(|exp| exp.id == id)
}

/// Returns the deferred module registered for the `experience` app id.
pub fn module() -> AppModule {
    AppModule::deferred(|| ready_mount(mount))
}

fn mount(_context: AppMountContext) -> View {
    view! { <ExperienceApp /> }.into_view()
}

#[component]
pub fn ExperienceApp() -> impl IntoView {
    let selected_id = create_rw_signal(EXPERIENCES[0].id);
    let selected = Signal::derive(move || find_experience(selected_id.get()));

    view! {
        <div class="app app-experience">
            <aside class="experience-sidebar">
                <h3>"Career Timeline"</h3>
                <div class="experience-list">
                    {EXPERIENCES
                        .iter()
                        .map(|exp| {
                            let id = exp.id;
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if selected_id.get() == id {
                                            "experience-item active"
                                        } else {
                                            "experience-item"
                                        }
                                    }
                                    aria-pressed=move || (selected_id.get() == id).to_string()
                                    on:click=move |_| selected_id.set(id)
                                >
                                    <div class="experience-item-role">{exp.role}</div>
                                    <div class="experience-item-company">{exp.company}</div>
                                    <div class="experience-item-duration">{exp.duration}</div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </aside>

            <div class="experience-content">
                {move || {
                    selected
                        .get()
                        .map(|exp| {
                            view! {
                                <div class="experience-header">
                                    <h2>{exp.role}</h2>
                                    <h3>{exp.company}</h3>
                                    <div class="experience-meta">
                                        <span class="experience-meta-item">
                                            <Icon icon=IconName::Calendar size=IconSize::Sm />
                                            {exp.duration}
                                        </span>
                                        <span class="experience-meta-item">
                                            <Icon icon=IconName::MapPin size=IconSize::Sm />
                                            {exp.location}
                                        </span>
                                    </div>
                                </div>
                                <div class="experience-highlights">
                                    <h4>"Key Achievements"</h4>
                                    <ul>
                                        {exp
                                            .highlights
                                            .iter()
                                            .map(|highlight| view! { <li>{*highlight}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experience_ids_are_unique_and_resolvable() {
        for exp in &EXPERIENCES {
            assert_eq!(find_experience(exp.id), Some(exp));
            assert!(!exp.highlights.is_empty());
        }
        assert_eq!(find_experience("missing"), None);
    }
}
