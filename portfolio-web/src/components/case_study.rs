//! Case-study page sections, rendered from a [`CaseStudyView`].

use portfolio_core::{CaseStudyView, HeroView, InfoCard, MediaView, ResultCard, TechCard};
use portfolio_core::case_study::StepView;
use yew::prelude::*;

use super::image_slider::ImageSlider;

#[derive(Properties, PartialEq)]
pub struct CaseStudyProps {
    pub view: CaseStudyView,
}

#[function_component(CaseStudy)]
pub fn case_study(props: &CaseStudyProps) -> Html {
    let view = &props.view;
    html! {
        <>
            <CaseStudyHero hero={view.hero.clone()} media={view.media.clone()} />
            { overview(&view.overview, &view.info_cards) }
            { problem_goal(&view.problem_goal) }
            { process(&view.process) }
            { tech_stack(&view.tech) }
            { challenges(view) }
            { results(&view.results) }
            { lessons(view) }
            <CallToAction
                heading={view.cta_heading.clone()}
                live_url={view.hero.live_url.clone()}
                repo_url={view.hero.repo_url.clone()}
                listing_url={view.listing_url.clone()}
            />
            <MoreProjects listing_url={view.listing_url.clone()} />
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct CaseStudyHeroProps {
    pub hero: HeroView,
    pub media: MediaView,
}

#[function_component(CaseStudyHero)]
pub fn case_study_hero(props: &CaseStudyHeroProps) -> Html {
    let hero = &props.hero;
    let media = match &props.media {
        MediaView::Gallery(slides) => html! { <ImageSlider slides={slides.clone()} /> },
        MediaView::Showcase { image, alt } => html! {
            <div class="project-showcase" data-animate="">
                <img src={image.clone()} alt={alt.clone()} loading="lazy" />
            </div>
        },
    };

    html! {
        <section class="case-study-hero">
            { for (1..=3).map(|n| html! { <div class={format!("floating-shape shape-{n}")}></div> }) }
            { for (1..=3).map(|n| html! { <div class={format!("glass-card-{n}")} aria-hidden="true"></div> }) }
            <div class="container">
                <div class="case-study-descriptions">
                    <h1 data-animate="">{ hero.title.clone() }</h1>
                    <p class="case-study-subtitle" data-animate="">{ hero.subtitle.clone() }</p>
                    <div class="case-study-meta" data-animate="">
                        { for hero.badges.iter().map(|badge| html! {
                            <span class="badge">{ badge.clone() }</span>
                        }) }
                    </div>
                    <div class="case-study-actions" data-animate="">
                        { hero.live_url.as_ref().map(|url| html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-lg">
                                <i class="bi bi-box-arrow-up-right" aria-hidden="true"></i>{ " View Live" }
                            </a>
                        }).unwrap_or_default() }
                        { hero.repo_url.as_ref().map(|url| html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="btn btn-secondary btn-lg">
                                <i class="bi bi-github" aria-hidden="true"></i>{ " View Code" }
                            </a>
                        }).unwrap_or_default() }
                    </div>
                </div>
                { media }
            </div>
        </section>
    }
}

fn overview(text: &str, cards: &[InfoCard]) -> Html {
    html! {
        <section class="content-section">
            <div class="container">
                <div class="section-intro" data-animate="">
                    <h2>{ "Project Overview" }</h2>
                    <p>{ text.to_string() }</p>
                </div>
                <div class="info-cards">
                    { for cards.iter().map(|card| html! {
                        <div class="info-card" data-animate="">
                            <h3>{ card.heading }</h3>
                            <p>{ card.body.clone() }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn problem_goal(paragraphs: &[String]) -> Html {
    html! {
        <section class="content-section alt-bg">
            <div class="container">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-3xl font-bold mb-2xl text-center" data-animate="">{ "Problem & Goal" }</h2>
                    { for paragraphs.iter().map(|p| html! {
                        <p class="text-xl text-secondary leading-relaxed" data-animate="">{ p.clone() }</p>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn process(steps: &[StepView]) -> Html {
    html! {
        <section class="content-section">
            <div class="container">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-3xl font-bold mb-3xl text-center" data-animate="">{ "Development Process" }</h2>
                    <div class="process-timeline">
                        { for steps.iter().map(|step| html! {
                            <div class="process-step" data-animate="">
                                <h3>{ step.heading.clone() }</h3>
                                <p>{ step.description.clone() }</p>
                                if !step.features.is_empty() {
                                    <div class="feature-grid">
                                        { for step.features.iter().map(|feature| html! {
                                            <div class="feature-item">
                                                <i class={feature.icon.clone()} aria-hidden="true"></i>
                                                <p>{ feature.text.clone() }</p>
                                            </div>
                                        }) }
                                    </div>
                                }
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

fn tech_stack(items: &[TechCard]) -> Html {
    html! {
        <section class="content-section alt-bg">
            <div class="container">
                <h2 class="text-3xl font-bold mb-3xl text-center" data-animate="">{ "Technologies Used" }</h2>
                <div class="tech-stack-grid">
                    { for items.iter().map(|tech| html! {
                        <div class="tech-item" data-animate="">
                            <div class="tech-icon" style={format!("background: {};", tech.bg)}>
                                <i class={tech.icon_class.clone()} style={format!("color: {};", tech.color)} aria-hidden="true"></i>
                            </div>
                            <h4>{ tech.name.clone() }</h4>
                            <p>{ tech.description.clone() }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn challenges(view: &CaseStudyView) -> Html {
    if view.challenges.is_empty() {
        return Html::default();
    }
    html! {
        <section class="content-section">
            <div class="container">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-3xl font-bold mb-3xl text-center" data-animate="">{ "Challenges & Solutions" }</h2>
                    { for view.challenges.iter().map(|challenge| html! {
                        <div class="challenge-card" data-animate="">
                            <div class="challenge-header">
                                <i class="bi bi-exclamation-triangle" aria-hidden="true"></i>
                                <h3>{ challenge.title.clone() }</h3>
                            </div>
                            <p><strong>{ "Problem:" }</strong>{ format!(" {}", challenge.problem) }</p>
                            <p><strong>{ "Solution:" }</strong>{ format!(" {}", challenge.solution) }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn results(cards: &[ResultCard]) -> Html {
    html! {
        <section class="content-section alt-bg">
            <div class="container">
                <h2 class="text-3xl font-bold mb-3xl text-center" data-animate="">{ "Results & Impact" }</h2>
                <div class="results-grid">
                    { for cards.iter().map(|result| html! {
                        <div class="result-card" data-animate="">
                            <div class="result-icon">
                                <i class={result.icon.clone()} style={format!("color: {};", result.color)} aria-hidden="true"></i>
                            </div>
                            <h4>{ result.title.clone() }</h4>
                            <p>{ result.description.clone() }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

fn lessons(view: &CaseStudyView) -> Html {
    if view.lessons.is_empty() {
        return Html::default();
    }
    html! {
        <section class="content-section">
            <div class="container">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-3xl font-bold mb-3xl text-center" data-animate="">{ "Key Takeaways" }</h2>
                    <ul class="lessons-list">
                        { for view.lessons.iter().map(|lesson| html! {
                            <li data-animate="">
                                <i class="bi bi-lightbulb" aria-hidden="true"></i>
                                <p>
                                    <strong>{ format!("{}:", lesson.title) }</strong>
                                    { format!(" {}", lesson.description) }
                                </p>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CallToActionProps {
    pub heading: String,
    #[prop_or_default]
    pub live_url: Option<String>,
    #[prop_or_default]
    pub repo_url: Option<String>,
    pub listing_url: String,
}

#[function_component(CallToAction)]
pub fn call_to_action(props: &CallToActionProps) -> Html {
    html! {
        <section class="cta-section">
            <div class="container">
                <div class="max-w-2xl mx-auto">
                    <h2 data-animate="">{ props.heading.clone() }</h2>
                    <p data-animate="">{ "Try the live application or explore the source code to see how it's built" }</p>
                    <div class="cta-buttons" data-animate="">
                        { props.live_url.as_ref().map(|url| html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="btn btn-primary btn-lg">
                                <i class="bi bi-box-arrow-up-right" aria-hidden="true"></i>{ " View Live Project" }
                            </a>
                        }).unwrap_or_default() }
                        { props.repo_url.as_ref().map(|url| html! {
                            <a href={url.clone()} target="_blank" rel="noopener noreferrer" class="btn btn-secondary btn-lg">
                                <i class="bi bi-github" aria-hidden="true"></i>{ " View on GitHub" }
                            </a>
                        }).unwrap_or_default() }
                    </div>
                    <a href={props.listing_url.clone()} class="back-to-projects" data-animate="">
                        <i class="bi bi-arrow-left" aria-hidden="true"></i>{ " Back to All Projects" }
                    </a>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MoreProjectsProps {
    pub listing_url: String,
}

#[function_component(MoreProjects)]
pub fn more_projects(props: &MoreProjectsProps) -> Html {
    html! {
        <section class="content-section">
            <div class="container">
                <div class="text-center">
                    <h2 class="text-3xl font-bold mb-xl" data-animate="">{ "More Projects" }</h2>
                    <p class="text-xl text-secondary mb-2xl" data-animate="">
                        { "Check out my other work to see more of what I can do" }
                    </p>
                    <a href={props.listing_url.clone()} class="btn btn-primary btn-lg" data-animate="">
                        { "View All Projects" }
                    </a>
                </div>
            </div>
        </section>
    }
}
