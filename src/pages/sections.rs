use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::contact_form::ContactForm;
use crate::components::project_grid::ProjectGrid;
use crate::components::social::{IconLinks, ImageLinks};
use crate::components::typed_role::TypedRole;
use crate::content::site::{
    SectionId, ACHIEVEMENTS, CONTACT_SOCIALS, FOCUS_AREAS, HERO_SOCIALS, MEDIUM_PROFILE, MOMENTS,
    OWNER_EMAIL, OWNER_LOCATION, OWNER_NAME, OWNER_PHONE, RESUME_PATH, ROLES, SKILLS,
};
use crate::dom;
use crate::state::catalog::ProjectCatalog;
use crate::state::page::PageAction;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <div class="hero-grid">
                <AnimatedSection class="hero-portrait">
                    <div class="hero-glow"></div>
                    <img src="/My Image.webp" alt="Kamau Johnson - Software Developer | Data Scientist" />
                </AnimatedSection>
                <AnimatedSection delay={200} class="hero-content">
                    <div class="hero-greeting">{"Hi, I'm"}</div>
                    <h1>{OWNER_NAME}</h1>
                    <TypedRole roles={ROLES} />
                    <div class="hero-card">
                        <p>
                            <span class="hero-card-title">{"Software Developer | Data Scientist"}</span>
                            <br />
                            <span class="hero-quote">
                                <img src="/icons/Quote.webp" alt="Quote Icon" width="16" height="16" />
                                {"The ones who think they can change the world are the ones who do."}
                            </span>
                            <br />
                            <span class="hero-quote-source">{"Inspired by Apple, 1997"}</span>
                            <br />
                            <span class="hero-tagline">{"Let's create some tech magic, no wands needed."}</span>
                        </p>
                    </div>
                    <ImageLinks links={HERO_SOCIALS} />
                </AnimatedSection>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct AboutSectionProps {
    pub on_action: Callback<PageAction>,
}

#[function_component(AboutSection)]
pub fn about_section(props: &AboutSectionProps) -> Html {
    let lets_connect = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| {
            dom::scroll_to_section(SectionId::Contact);
            on_action.emit(PageAction::NavigatedTo(SectionId::Contact));
        })
    };

    html! {
        <section id={SectionId::About.as_str()} class="about">
            <div class="section-inner">
                <AnimatedSection>
                    <h2 class="section-title">{"About"}</h2>
                </AnimatedSection>
                <div class="about-grid">
                    <AnimatedSection delay={200} class="about-story">
                        <h3>{"Who Am I ?"}</h3>
                        <p>{"Johnson is a tech-savvy and driven Computer Science graduate passionate about building impactful software solutions. Now stepping confidently into the field of Data Science, he leverages his strong problem-solving foundation to extract insights, build intelligent models, and innovate through data-powered technologies."}</p>
                        <p>{"Beyond academics and personal projects, he is an avid hackathon enthusiast, having participated in four local hackathons and was proud to win one at the Nairobi County Web3 and Blockchain Hackathon, where he led the development of a tokenized waste recycling system."}</p>
                        <p>
                            {"I started as a self-taught developer, driven by curiosity and determination. After earning a Diploma in Computer Science from Zetech University, I'm now pursuing my Bachelor's at the Catholic University of Eastern Africa, set to graduate in 2027. Through internships at "}
                            <a href="https://www.codsoft.in/internships" target="_blank" rel="noopener noreferrer">{"Codsoft"}</a>
                            {" and an industrial attachment at "}
                            <a href="https://acfc.co.ke/" target="_blank" rel="noopener noreferrer">{"Agro Chemical & Food Company Limited (ACFC)"}</a>
                            {", I've gained hands-on experience in data science and software development."}
                        </p>
                        <div class="about-roles">
                            <div class="about-role dev">
                                <span class="icon-code"></span>
                                <h4>{"Software Developer"}</h4>
                                <p>{"Builder of Seamless Systems"}</p>
                            </div>
                            <div class="about-role data">
                                <span class="icon-database"></span>
                                <h4>{"Data Scientist"}</h4>
                                <p>{"Machine learning, analytics, predictive modeling"}</p>
                            </div>
                        </div>
                        <a href={RESUME_PATH} download="" target="_blank" rel="noopener noreferrer" class="outline-button">
                            <span class="icon-download"></span>
                            {"Download Resume"}
                        </a>
                    </AnimatedSection>
                    <AnimatedSection delay={400} class="about-goals">
                        <img src="/About Coder.gif" alt="Coding animation" width="300" height="200" />
                        <h3>{"Why I Love Tech"}</h3>
                        <p>{"I believe technology is a powerful catalyst for change, capable of transforming lives and addressing real-world challenges. To me, technology is not just about building, it's about solving, serving, and scaling human potential."}</p>
                        <h3>{"Next Goal"}</h3>
                        <p>{"I'm currently seeking internship opportunities and collaborative projects where I can apply my skills in software development and data science to drive real-world impact."}</p>
                        <button class="primary-button" onclick={lets_connect}>
                            {"Let's Connect"}
                            <span class="icon-chevron-right"></span>
                        </button>
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}

#[function_component(SkillsSection)]
pub fn skills_section() -> Html {
    html! {
        <section id={SectionId::Skills.as_str()} class="skills">
            <div class="section-inner">
                <div class="skills-intro">
                    <AnimatedSection class="skills-lead">
                        <h2>{"Skillset"}</h2>
                        <p>{"With a strong foundation in both software engineering and data science, I bring the versatility to architect complete, end-to-end solutions."}</p>
                    </AnimatedSection>
                    <div class="focus-grid">
                        { for FOCUS_AREAS.iter().enumerate().map(|(index, area)| html! {
                            <AnimatedSection key={area.title} delay={index as u32 * 100} class="focus-area">
                                <img src={area.icon} alt={format!("{} icon", area.title)} width="48" height="48" />
                                <h3>{area.title}</h3>
                                <p>{area.description}</p>
                            </AnimatedSection>
                        }) }
                    </div>
                </div>
                <AnimatedSection delay={600} class="tech-stack">
                    <h3>{"Tech Stack"}</h3>
                    <p>{"A curated stack driving both software development for crafting scalable systems and data science for turning raw data into impactful solutions."}</p>
                    <div class="tech-grid">
                        { for SKILLS.iter().enumerate().map(|(index, skill)| html! {
                            <AnimatedSection key={skill.name} delay={index as u32 * 100} class="tech-item">
                                <img src={skill.icon} alt={format!("{} logo", skill.name)} width="40" height="40" />
                                <h4>{skill.name}</h4>
                            </AnimatedSection>
                        }) }
                    </div>
                </AnimatedSection>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectsSectionProps {
    pub catalog: ProjectCatalog,
    pub on_action: Callback<PageAction>,
}

#[function_component(ProjectsSection)]
pub fn projects_section(props: &ProjectsSectionProps) -> Html {
    html! {
        <section id={SectionId::Projects.as_str()} class="projects">
            <div class="section-inner">
                <AnimatedSection>
                    <h2 class="section-title">{"Projects "}<span class="accent">{"Highlights"}</span></h2>
                    <p class="section-lead">{"Work that I've done for the past 2 years. A curated collection of my software development and data science projects, each built to be functional, user-focused and scalable."}</p>
                </AnimatedSection>
                <ProjectGrid catalog={props.catalog.clone()} on_action={props.on_action.clone()} />
            </div>
        </section>
    }
}

#[function_component(AchievementsSection)]
pub fn achievements_section() -> Html {
    html! {
        <section id={SectionId::Achievements.as_str()} class="achievements">
            <div class="section-inner">
                <AnimatedSection>
                    <h2 class="section-title">{"My "}<span class="accent">{"Achievements"}</span></h2>
                    <p class="section-lead">{"I am an avid hackathon enthusiast and have proudly represented my work in various competitions."}</p>
                </AnimatedSection>
                <AnimatedSection delay={200}>
                    <h3 class="subsection-title">{"Track Record"}</h3>
                </AnimatedSection>
                { for ACHIEVEMENTS.iter().enumerate().map(|(index, achievement)| html! {
                    <AnimatedSection key={achievement.title} delay={300 + index as u32 * 100} class="achievement-card">
                        <h4>{achievement.title}</h4>
                        <p class="achievement-tagline">{achievement.tagline}</p>
                        <p>{achievement.summary}</p>
                        if !achievement.takeaways.is_empty() {
                            <div class="achievement-takeaways">
                                <h5>{"Key Takeaways:"}</h5>
                                <ul>
                                    { for achievement.takeaways.iter().map(|t| html! { <li>{*t}</li> }) }
                                </ul>
                            </div>
                        }
                    </AnimatedSection>
                }) }
                <AnimatedSection delay={600}>
                    <h3 class="subsection-title centered">{"Moments from the Journey"}</h3>
                </AnimatedSection>
                <div class="moments">
                    { for MOMENTS.iter().enumerate().map(|(index, moment)| html! {
                        <AnimatedSection key={moment.title} delay={700 + index as u32 * 100} class="moment">
                            <img src={moment.image} alt={moment.title} loading="lazy" />
                            <div class="moment-caption">
                                <h4>{moment.title}</h4>
                                <p>{moment.caption}</p>
                            </div>
                        </AnimatedSection>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(BlogSection)]
pub fn blog_section() -> Html {
    html! {
        <section id={SectionId::Blog.as_str()} class="blog">
            <AnimatedSection class="blog-copy">
                <h1>{"Medium"}</h1>
                <p>{"I am a technical writer, developer, and curious learner documenting my journey in software development and data science. My blog is a space where I explore new concepts, build real-world projects, and reflect on the decisions, tools, challenges, and breakthroughs behind them."}</p>
                <a href={MEDIUM_PROFILE} class="blog-follow">{"Follow me on medium"}</a>
            </AnimatedSection>
            <AnimatedSection delay={300} class="blog-mock">
                <div class="mock-window">
                    <div class="mock-dots"><span></span><span></span><span></span></div>
                    <div class="mock-lines"><div></div><div></div><div></div></div>
                    <div class="mock-status">{"Writing amazing content..."}</div>
                </div>
            </AnimatedSection>
        </section>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    html! {
        <section id={SectionId::Contact.as_str()} class="contact">
            <div class="section-inner">
                <AnimatedSection>
                    <h2 class="section-title">{"Let's Talk "}<span class="accent">{"Tech"}</span></h2>
                    <p class="section-lead">{"Tech in motion. Story in progress."}</p>
                </AnimatedSection>
                <div class="contact-grid">
                    <AnimatedSection delay={200} class="contact-info">
                        <h3>{"Let's Connect"}</h3>
                        <p>{"Big idea brewing? Let's bring it to life. Whether it's a high impact page or a data driven system, I'm all in. Reach out!"}</p>
                        <div class="contact-item">
                            <span class="icon-mail"></span>
                            <div>
                                <p class="contact-label">{"Email"}</p>
                                <a href={format!("mailto:{}", OWNER_EMAIL)}>{OWNER_EMAIL}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="icon-phone"></span>
                            <div>
                                <p class="contact-label">{"Phone"}</p>
                                <a href={format!("tel:{}", OWNER_PHONE.replace(' ', ""))}>{OWNER_PHONE}</a>
                            </div>
                        </div>
                        <div class="contact-item">
                            <span class="icon-map-pin"></span>
                            <div>
                                <p class="contact-label">{"Location"}</p>
                                <p>{OWNER_LOCATION}</p>
                            </div>
                        </div>
                        <h4>{"Follow Me"}</h4>
                        <IconLinks links={CONTACT_SOCIALS} />
                    </AnimatedSection>
                    <AnimatedSection delay={400} class="contact-panel">
                        <img src="/contact-image.webp" alt="Contact Animation" width="400" height="300" />
                        <ContactForm />
                    </AnimatedSection>
                </div>
            </div>
        </section>
    }
}
