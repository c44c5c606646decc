//! Skills app: proficiency bars grouped by category.

use desktop_app_contract::{ready_mount, AppModule, AppMountContext};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SkillCategory {
    Frontend,
    Backend,
    Tools,
}

impl SkillCategory {
    const ALL: [Self; 3] = [Self::Frontend, Self::Backend, Self::Tools];

    const fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tools => "Tools",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Skill {
    name: &'static str,
    category: SkillCategory,
    /// Proficiency percentage in `0..=100`.
    level: u8,
}

const fn skill(name: &'static str, category: SkillCategory, level: u8) -> Skill {
    Skill {
        name,
        category,
        level,
    }
}

const SKILLS: [Skill; 18] = [
    skill("React", SkillCategory::Frontend, 95),
    skill("TypeScript", SkillCategory::Frontend, 90),
    skill("JavaScript", SkillCategory::Frontend, 95),
    skill("HTML/CSS", SkillCategory::Frontend, 95),
    skill("Tailwind CSS", SkillCategory::Frontend, 85),
    skill("Vue.js", SkillCategory::Frontend, 75),
    skill("Node.js", SkillCategory::Backend, 80),
    skill("Express", SkillCategory::Backend, 80),
    skill("PostgreSQL", SkillCategory::Backend, 75),
    skill("MongoDB", SkillCategory::Backend, 70),
    skill("REST APIs", SkillCategory::Backend, 85),
    skill("GraphQL", SkillCategory::Backend, 70),
    skill("Git", SkillCategory::Tools, 90),
    skill("Webpack", SkillCategory::Tools, 75),
    skill("Vite", SkillCategory::Tools, 85),
    skill("Docker", SkillCategory::Tools, 65),
    skill("Jest", SkillCategory::Tools, 80),
    skill("Figma", SkillCategory::Tools, 70),
];

fn skills_in(category: SkillCategory) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |skill| skill.category == category)
}

fn bar_fill_style(level: u8) -> String {
    format!("width: {}%;", level.min(100))
}

pub fn module() -> AppModule {
    AppModule::deferred(|| ready_mount(mount))
}

fn mount(_context: AppMountContext) -> View {
    view! { <SkillsApp /> }.into_view()
}

#[component]
pub fn SkillsApp() -> impl IntoView {
    view! {
        <div class="app app-skills">
            <div class="skills-header">
                <h2>"Technical Skills"</h2>
                <p>"Proficiency across the full stack"</p>
            </div>

            {SkillCategory::ALL
                .into_iter()
                .map(|category| {
                    view! {
                        <section class="skills-category" data-category=category.label()>
                            <h3>{category.label()}</h3>
                            <div class="skills-grid">
                                {skills_in(category)
                                    .map(|skill| {
                                        view! {
                                            <div class="skill-item">
                                                <div class="skill-header">
                                                    <span class="skill-name">{skill.name}</span>
                                                    <span class="skill-level">
                                                        {format!("{}%", skill.level)}
                                                    </span>
                                                </div>
                                                <div
                                                    class="skill-bar"
                                                    role="progressbar"
                                                    aria-valuemin="0"
                                                    aria-valuemax="100"
                                                    aria-valuenow=skill.level.to_string()
                                                    aria-label=skill.name
                                                >
                                                    <div
                                                        class="skill-bar-fill"
                                                        style=bar_fill_style(skill.level)
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
        </div>
    }
}
