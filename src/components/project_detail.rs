use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::projects::Project;
use crate::state::page::PageAction;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailProps {
    pub project: &'static Project,
    pub on_action: Callback<PageAction>,
}

#[function_component(ProjectDetail)]
pub fn project_detail(props: &ProjectDetailProps) -> Html {
    let project = props.project;

    // Detail replaces the whole page, so start it at the top.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        project.id,
    );

    let on_back = {
        let on_action = props.on_action.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_action.emit(PageAction::BackToProjects);
        })
    };

    html! {
        <div class="project-detail">
            <header
                class="project-detail-hero"
                style={format!("background-image: url('{}');", project.hero_image)}
            >
                <div class="project-detail-shade"></div>
                <button class="back-button" onclick={on_back}>
                    <span class="icon-arrow-left"></span>
                    <span>{"Back to Projects"}</span>
                </button>
            </header>
            <main class="project-detail-body">
                <div class="project-detail-main">
                    <span class="project-detail-kicker">{"PROJECT"}</span>
                    <h2>{project.title}</h2>
                    <p>{project.detailed_description}</p>
                    <div class="project-detail-links">
                        <a class="primary-link" href={project.live_url} target="_blank" rel="noopener noreferrer">
                            <span class="icon-external"></span>
                            {"LIVE DEMO"}
                        </a>
                        <a class="secondary-link" href={project.video_url} target="_blank" rel="noopener noreferrer">
                            <span class="icon-play"></span>
                            {"VIDEO DEMO"}
                        </a>
                    </div>
                </div>
                <aside class="project-detail-tech">
                    <h3>{"Technologies Used"}</h3>
                    <ul>
                        { for project.tech.iter().map(|tech| html! { <li>{*tech}</li> }) }
                    </ul>
                </aside>
            </main>
        </div>
    }
}
