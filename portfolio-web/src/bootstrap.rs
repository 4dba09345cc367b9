//! Page-load sequence shared by every page of the site.
//!
//! Steps are independent: a page lacking the markup for one controller just
//! skips it. Only the header controls wait on the partials they live in.

use portfolio_core::SiteConfig;

use crate::announcer::{Announcer, ensure_live_region};
use crate::components::detail_page::{ProjectDetailRoot, ProjectDetailRootProps};
use crate::components::projects_page::{ProjectsRoot, ProjectsRootProps};
use crate::{certificates, decor, dom, form, nav, partials, reveal, site, theme};

fn skipped(step: &str, result: Result<impl Sized, crate::error::WebError>) {
    if let Err(err) = result {
        log::debug!("{step} skipped: {err}");
    }
}

fn wire_page_effects(config: &SiteConfig) {
    skipped("system theme listener", theme::listen_system_changes(config));
    nav::wire_smooth_scroll();
    skipped("scroll reveal", reveal::observe_animations());
    skipped("skill bars", reveal::observe_skill_bars());
    skipped("resize handler", nav::wire_resize(config));
    skipped("lazy images", reveal::observe_lazy_images());
}

fn mount_projects(config: &SiteConfig, announcer: &Announcer) {
    let Ok(root) = dom::require_id("projectsContainer") else {
        return;
    };
    let props = ProjectsRootProps {
        config: config.clone(),
        announcer: announcer.clone(),
    };
    yew::Renderer::<ProjectsRoot>::with_root_and_props(root, props).render();
    log::debug!("projects listing mounted");
}

fn mount_detail(config: &SiteConfig, announcer: &Announcer) {
    let Ok(root) = dom::require_id("projectContent") else {
        return;
    };
    let props = ProjectDetailRootProps {
        config: config.clone(),
        announcer: announcer.clone(),
    };
    yew::Renderer::<ProjectDetailRoot>::with_root_and_props(root, props).render();
    log::debug!("case study mounted");
}

fn wire_certifications(config: &SiteConfig) {
    let present = !dom::query_all(".section-certifications").is_empty()
        || dom::require_id("certificateModal").is_ok();
    if !present {
        return;
    }
    skipped("certificate modal", certificates::wire_modal());
    skipped(
        "certificate progress",
        reveal::observe_progress_fills(config.timings.progress_animate_ms),
    );
    certificates::check_images_on_dev_host();
}

/// Run the whole sequence with the bundled site settings.
pub fn run() {
    run_with(&site::load());
}

pub fn run_with(config: &SiteConfig) {
    theme::init(config);

    let announcer = Announcer::new(ensure_live_region(&config.live_region_id), config.timings);
    if !announcer.is_attached() {
        log::debug!("live region unavailable; announcements disabled");
    }

    {
        let (config, announcer) = (config.clone(), announcer.clone());
        wasm_bindgen_futures::spawn_local(async move {
            skipped("partials", partials::load(&config, &announcer).await);
        });
    }

    wire_page_effects(config);

    mount_projects(config, &announcer);
    mount_detail(config, &announcer);
    skipped("contact form", form::wire_contact_form(config));
    wire_certifications(config);

    decor::init_starry_night();
    log::info!("site initialized");
}
