use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::content::projects::Project;
use crate::content::site::GITHUB_PROFILE;
use crate::dom;
use crate::state::catalog::{CategoryFilter, ProjectCatalog};
use crate::state::page::PageAction;

#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub catalog: ProjectCatalog,
    pub on_action: Callback<PageAction>,
}

#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    let active_filter = props.catalog.filter();

    html! {
        <>
            <AnimatedSection delay={200}>
                <div class="project-tabs">
                    { for CategoryFilter::EXPOSED.iter().map(|filter| {
                        let filter = *filter;
                        let on_action = props.on_action.clone();
                        html! {
                            <button
                                class={classes!("project-tab", (filter == active_filter).then(|| "active"))}
                                onclick={Callback::from(move |_: MouseEvent| on_action.emit(PageAction::SetFilter(filter)))}
                            >
                                {filter.label()}
                            </button>
                        }
                    }) }
                </div>
            </AnimatedSection>

            <div class="project-grid">
                { for props.catalog.visible().into_iter().enumerate().map(|(index, project)| html! {
                    <AnimatedSection key={project.id} delay={index as u32 * 100}>
                        <ProjectCard project={project} on_action={props.on_action.clone()} />
                    </AnimatedSection>
                }) }
            </div>

            <AnimatedSection delay={800}>
                <div class="project-more">
                    <button class="outline-button" onclick={Callback::from(|_: MouseEvent| dom::open_in_new_tab(GITHUB_PROFILE))}>
                        <span class="icon-github"></span>
                        {"View All Projects"}
                    </button>
                </div>
            </AnimatedSection>
        </>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static Project,
    on_action: Callback<PageAction>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let view_details = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            on_action.emit(PageAction::SelectProject(project.id.to_string()));
        })
    };
    let open_code = Callback::from(move |_: MouseEvent| dom::open_in_new_tab(project.github_url));

    html! {
        <div class="project-card">
            <div class="project-card-image">
                <img src={project.image} alt={project.title} loading="lazy" />
                <span class="project-badge">{project.category.badge()}</span>
            </div>
            <div class="project-card-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <div class="project-tags">
                    { for project.card_tags().iter().map(|tech| html! {
                        <span class="project-tag">{*tech}</span>
                    }) }
                    if let Some(label) = project.overflow_label() {
                        <span class="project-tag more">{label}</span>
                    }
                </div>
                <div class="project-actions">
                    <button class="primary-button" onclick={view_details}>
                        <span class="icon-external"></span>
                        {"View Details"}
                    </button>
                    <button class="outline-button" onclick={open_code} aria-label="View source on GitHub">
                        <span class="icon-github"></span>
                    </button>
                </div>
            </div>
        </div>
    }
}
