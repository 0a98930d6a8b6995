// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hero section

use super::html::{cta_link, edit_attr, escape};
use crate::content::{HeroSection, Resolved};

/// Split a title into its lead and the highlighted last two words
///
/// Titles of one or two words are highlighted entirely.
pub fn split_title(title: &str) -> (String, String) {
    let words: Vec<&str> = title.split(' ').collect();
    let cut = words.len().saturating_sub(2);
    (words[..cut].join(" "), words[cut..].join(" "))
}

fn background_class(style: Option<&str>) -> &'static str {
    match style {
        Some("gradient_secondary") => "bg-gradient-secondary",
        Some("solid_background") => "bg-background",
        _ => "bg-gradient-primary",
    }
}

/// Render the hero of a page
pub fn hero(resolved: &Resolved<HeroSection>) -> String {
    let live = resolved.is_live();
    let hero = resolved.value();
    let solid = hero.background_style.as_deref() == Some("solid_background");
    let layout = if hero.layout_style.as_deref() == Some("centered_text") {
        "hero-centered"
    } else {
        "hero-split"
    };
    let text_class = if solid { "text-foreground" } else { "text-white" };

    let (lead, highlight) = split_title(&hero.hero_title);
    let mut html = format!(
        "<section class=\"hero {} {} {}\">",
        background_class(hero.background_style.as_deref()),
        text_class,
        layout
    );

    html.push_str(&format!(
        "<h1{}>{}<span class=\"hero-highlight\">{}</span></h1>",
        edit_attr(live, hero, "hero_title"),
        escape(&lead),
        escape(&highlight)
    ));
    if let Some(subtitle) = hero.hero_subtitle.as_deref().filter(|s| !s.is_empty()) {
        html.push_str(&format!(
            "<h2{}>{}</h2>",
            edit_attr(live, hero, "hero_subtitle"),
            escape(subtitle)
        ));
    }
    html.push_str(&format!(
        "<p{}>{}</p>",
        edit_attr(live, hero, "hero_description"),
        escape(&hero.hero_description)
    ));

    html.push_str("<div class=\"hero-actions\">");
    html.push_str(&cta_link(
        &hero.primary_cta,
        "cta cta-primary",
        &edit_attr(live, hero, "primary_cta.text"),
    ));
    if let Some(secondary) = &hero.secondary_cta {
        html.push_str(&cta_link(
            secondary,
            "cta cta-secondary",
            &edit_attr(live, hero, "secondary_cta.text"),
        ));
    }
    html.push_str("</div>");

    if let Some(image) = hero.hero_image.as_ref().filter(|i| !i.url.is_empty()) {
        html.push_str(&format!(
            "<img class=\"hero-image\" src=\"{}\" alt=\"{}\"{}>",
            escape(&image.url),
            escape(&image.title),
            edit_attr(live, hero, "hero_image")
        ));
    }

    html.push_str("</section>");
    html
}
