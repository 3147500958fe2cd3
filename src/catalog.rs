//! Pillar catalogues for each page. A scene container opts in with a
//! `data-catalog` attribute; containers without one fall back to
//! positional wiring (main project ring first, satellite ring after).

use crate::core::config::{PillarSpec, SceneConfig};

/// Home page: four destination pillars on the default ring.
pub fn home() -> (SceneConfig, Vec<PillarSpec>) {
    let specs = vec![
        PillarSpec {
            label: "Resume",
            url: Some("https://drive.google.com/drive/folders/1TiXYe-oBep44RfTCTqjNOQPcQJZ8eogf"),
            sprite_url: "resumeplanet.png",
            tip: Some("View my resume"),
        },
        PillarSpec {
            label: "Contact Me",
            url: Some("contact.html"),
            sprite_url: "contactplanet.png",
            tip: Some("Let’s connect and collaborate"),
        },
        PillarSpec {
            label: "About Me",
            url: Some("about.html"),
            sprite_url: "aboutplanet.png",
            tip: Some("A little about who I am"),
        },
        PillarSpec {
            label: "My Work",
            url: Some("work.html"),
            sprite_url: "workplanet.png",
            tip: Some("Selected projects & research work"),
        },
    ];
    (SceneConfig::default(), specs)
}

/// Work page, main ring: the six project pillars.
pub fn work_primary() -> (SceneConfig, Vec<PillarSpec>) {
    let specs = vec![
        project("SugamyaWeb Website<br>Monitoring App", "proj4.html", "p5.png"),
        project("Dark Patterns in<br>Social Media Apps", "proj1.html", "p1.png"),
        project("AccessMate Campus<br>Navigation App", "proj6.html", "p3.png"),
        project("Zopple: Flipbook<br>For Kids", "proj3.html", "p14.png"),
        project("Waste Management<br>Optimised Solution", "proj5.html", "p4.png"),
        project("ChalSaath Disability<br>Companion App", "proj2.html", "p2.png"),
    ];
    (work_config(0.65), specs)
}

/// Work page, satellite ring: design work on a tighter spread.
pub fn work_secondary() -> (SceneConfig, Vec<PillarSpec>) {
    let specs = vec![
        project("Illustrationsy<br>Instagram Page Designs", "proj1.html", "p6.png"),
        project("Find Your Kicks<br>Instagram Designs", "proj1.html", "p8.png"),
        project("Freelance Designs", "proj9.html", "p9.png"),
    ];
    (work_config(0.35), specs)
}

/// Resolve a scene container to its catalogue.
pub fn for_container(catalog: Option<String>, index: usize) -> (SceneConfig, Vec<PillarSpec>) {
    match catalog.as_deref() {
        Some("home") => home(),
        Some("work-primary") => work_primary(),
        Some("work-secondary") => work_secondary(),
        other => {
            if let Some(name) = other {
                log::warn!("[catalog] unknown catalogue {name:?}, wiring by position");
            }
            if index == 0 {
                work_primary()
            } else {
                work_secondary()
            }
        }
    }
}

fn project(label: &'static str, url: &'static str, sprite_url: &'static str) -> PillarSpec {
    PillarSpec {
        label,
        url: Some(url),
        sprite_url,
        tip: None,
    }
}

fn work_config(spread: f32) -> SceneConfig {
    SceneConfig {
        spread,
        scale_base: 1.0,
        pillar_width_px: 300.0,
        hover_freezes_rotation: false,
        hover_tooltip: false,
        rounded_sprites: true,
        ..SceneConfig::default()
    }
}
