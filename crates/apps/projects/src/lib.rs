//! Projects app: a card grid and an in-window browser preview for the selected project.

use desktop_app_contract::{ready_mount, AppModule, AppMountContext};
use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use system_ui::{Icon, IconName, IconSize};

/// Sandbox flags applied to the preview iframe.
const PREVIEW_SANDBOX: &str = "allow-same-origin allow-scripts allow-forms";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Project {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    image: &'static str,
    url: &'static str,
    featured: bool,
}

const PROJECTS: [Project; 4] = [
    Project {
        id: "ecommerce",
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce platform with real-time inventory management, \
                      payment processing, and order tracking.",
        tags: &["React", "Node.js", "PostgreSQL", "Stripe"],
        image: "https://images.pexels.com/photos/230544/pexels-photo-230544.jpeg?auto=compress&cs=tinysrgb&w=800",
        url: "https://example.com/ecommerce",
        featured: true,
    },
    Project {
        id: "taskmanager",
        title: "Task Management App",
        description: "Collaborative task management with real-time updates, team workspaces, \
                      and advanced filtering. Features drag-and-drop boards and deadline tracking.",
        tags: &["React", "TypeScript", "Firebase", "Tailwind"],
        image: "https://images.pexels.com/photos/3184291/pexels-photo-3184291.jpeg?auto=compress&cs=tinysrgb&w=800",
        url: "https://example.com/taskmanager",
        featured: true,
    },
    Project {
        id: "analytics",
        title: "Analytics Dashboard",
        description: "Real-time analytics dashboard with interactive charts, data visualization, \
                      and export capabilities. Processes millions of data points efficiently.",
        tags: &["React", "D3.js", "WebSocket", "Express"],
        image: "https://images.pexels.com/photos/590022/pexels-photo-590022.jpeg?auto=compress&cs=tinysrgb&w=800",
        url: "https://example.com/analytics",
        featured: true,
    },
    Project {
        id: "social",
        title: "Social Media App",
        description: "Social networking platform with posts, comments, likes, and real-time \
                      notifications. Includes image upload and user profiles.",
        tags: &["React", "GraphQL", "MongoDB", "AWS S3"],
        image: "https://images.pexels.com/photos/267350/pexels-photo-267350.jpeg?auto=compress&cs=tinysrgb&w=800",
        url: "https://example.com/social",
        featured: false,
    },
];

pub fn module() -> AppModule {
    AppModule::deferred(|| ready_mount(mount))
}

fn mount(_context: AppMountContext) -> View {
    view! { <ProjectsApp /> }.into_view()
}

#[component]
pub fn ProjectsApp() -> impl IntoView {
    let selected = create_rw_signal::<Option<Project>>(None);
    let close_preview = Callback::new(move |_: ()| selected.set(None));

    view! {
        <div class="app app-projects">
            <div class="projects-header">
                <h2>"Featured Projects"</h2>
                <p>"A selection of my recent work"</p>
            </div>

            <div class="projects-grid">
                {PROJECTS
                    .iter()
                    .copied()
                    .map(|project| {
                        view! {
                            <article class="project-card" data-project=project.id>
                                <div class="project-image">
                                    <img
                                        src=project.image
                                        alt=project.title
                                        loading="lazy"
                                        decoding="async"
                                    />
                                    <Show when=move || project.featured fallback=|| ()>
                                        <span class="project-badge">"Featured"</span>
                                    </Show>
                                </div>
                                <div class="project-content">
                                    <h3>{project.title}</h3>
                                    <p>{project.description}</p>
                                    <div class="project-tags">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| view! { <span class="project-tag">{*tag}</span> })
                                            .collect_view()}
                                    </div>
                                    <button
                                        type="button"
                                        class="project-link"
                                        on:click=move |_| selected.set(Some(project))
                                    >
                                        <Icon icon=IconName::ExternalLink size=IconSize::Xs />
                                        "View Project"
                                    </button>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                selected
                    .get()
                    .map(|project| {
                        view! {
                            <BrowserPreview
                                url=project.url
                                title=project.title
                                on_close=close_preview
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn BrowserPreview(
    url: &'static str,
    title: &'static str,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="browser-modal-overlay"
            on:click=move |_| on_close.call(())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Escape" {
                    ev.stop_propagation();
                    on_close.call(());
                }
            }
        >
            <div
                class="browser-modal"
                role="dialog"
                aria-label=title
                on:click=move |ev: MouseEvent| ev.stop_propagation()
            >
                <div class="browser-header">
                    <div class="browser-controls" aria-hidden="true">
                        <span class="browser-dot"></span>
                        <span class="browser-dot"></span>
                        <span class="browser-dot"></span>
                    </div>
                    <div class="browser-url">{url}</div>
                    <button
                        type="button"
                        class="browser-close"
                        aria-label="Close browser"
                        on:click=move |_| on_close.call(())
                    >
                        <Icon icon=IconName::Dismiss size=IconSize::Sm />
                    </button>
                </div>
                <div class="browser-content">
                    <iframe class="browser-iframe" src=url title=title sandbox=PREVIEW_SANDBOX></iframe>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_previews_target_https_urls() {
        for project in &PROJECTS {
            assert!(project.url.starts_with("https://"), "{}", project.id);
            assert!(!project.tags.is_empty());
        }
    }

    #[test]
    fn three_projects_are_featured() {
        let featured: Vec<_> = PROJECTS
            .iter()
            .filter(|project| project.featured)
            .map(|project| project.id)
            .collect();
        assert_eq!(featured, vec!["ecommerce", "taskmanager", "analytics"]);
    }
}
