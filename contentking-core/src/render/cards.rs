// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Card grids: features, stats, products, roles, values, team, jobs
//!
//! Records are rendered in the order they were fetched. Icons are emitted
//! by name in `data-icon`; mapping names to glyphs is left to the
//! stylesheet.

use super::html::{edit_attr, escape, SectionHeading};
use crate::content::{
    split_list, CoreProduct, FeatureCard, JobOpening, Resolved, RoleCard, Statistic, TeamMember,
    ValueCard,
};

/// Icon used when a record names none
pub const DEFAULT_ICON: &str = "Zap";

fn icon(name: &str) -> String {
    let name = if name.trim().is_empty() {
        DEFAULT_ICON
    } else {
        name
    };
    format!("<span class=\"icon\" data-icon=\"{}\"></span>", escape(name))
}

fn list(items: &str) -> String {
    let mut html = String::from("<ul>");
    for item in split_list(items) {
        html.push_str(&format!("<li>{}</li>", escape(item)));
    }
    html.push_str("</ul>");
    html
}

fn grid(id: &str, heading: &SectionHeading, cards: String) -> String {
    format!(
        "<section id=\"{}\">{}<div class=\"grid\">{}</div></section>",
        id,
        heading.render(),
        cards
    )
}

/// Feature card grid
pub fn features(resolved: &Resolved<Vec<FeatureCard>>, heading: &SectionHeading) -> String {
    let live = resolved.is_live();
    let mut cards = String::new();
    for card in resolved.value() {
        cards.push_str("<article class=\"card feature\">");
        cards.push_str(&icon(&card.feature_icon));
        cards.push_str(&format!(
            "<h3{}>{}</h3><p{}>{}</p>",
            edit_attr(live, card, "feature_title"),
            escape(&card.feature_title),
            edit_attr(live, card, "feature_description"),
            escape(&card.feature_description)
        ));
        if let Some(url) = card.feature_url.as_deref().filter(|u| !u.is_empty()) {
            cards.push_str(&format!(
                "<a class=\"learn-more\" href=\"{}\">Learn more →</a>",
                escape(url)
            ));
        }
        cards.push_str("</article>");
    }
    grid("features", heading, cards)
}

/// Statistics band
pub fn stats(resolved: &Resolved<Vec<Statistic>>, heading: &SectionHeading) -> String {
    let live = resolved.is_live();
    let mut cards = String::new();
    for stat in resolved.value() {
        cards.push_str(&format!(
            "<div class=\"stat\"><strong{}>{}{}</strong><h3{}>{}</h3><p{}>{}</p></div>",
            edit_attr(live, stat, "stat_value"),
            escape(&stat.stat_value),
            escape(stat.stat_suffix.as_deref().unwrap_or_default()),
            edit_attr(live, stat, "stat_label"),
            escape(&stat.stat_label),
            edit_attr(live, stat, "stat_description"),
            escape(&stat.stat_description)
        ));
    }
    grid("stats", heading, cards)
}

/// Core product cards
pub fn products(resolved: &Resolved<Vec<CoreProduct>>, heading: &SectionHeading) -> String {
    let live = resolved.is_live();
    let mut cards = String::new();
    for product in resolved.value() {
        cards.push_str("<article class=\"card product\">");
        cards.push_str(&icon(&product.product_icon));
        cards.push_str(&format!(
            "<h3{}>{}</h3><p{}>{}</p>",
            edit_attr(live, product, "product_title"),
            escape(&product.product_title),
            edit_attr(live, product, "product_description"),
            escape(&product.product_description)
        ));
        cards.push_str(&list(&product.product_features));
        if let Some(url) = product.product_url.as_deref().filter(|u| !u.is_empty()) {
            cards.push_str(&format!(
                "<a class=\"learn-more\" href=\"{}\">Learn more →</a>",
                escape(url)
            ));
        }
        cards.push_str("</article>");
    }
    grid("products", heading, cards)
}

/// Role cards
pub fn roles(resolved: &Resolved<Vec<RoleCard>>, heading: &SectionHeading) -> String {
    let live = resolved.is_live();
    let mut cards = String::new();
    for role in resolved.value() {
        cards.push_str("<article class=\"card role\">");
        cards.push_str(&icon(&role.role_icon));
        cards.push_str(&format!(
            "<h3{}>{}</h3><p{}>{}</p>",
            edit_attr(live, role, "role_title"),
            escape(&role.role_title),
            edit_attr(live, role, "role_description"),
            escape(&role.role_description)
        ));
        cards.push_str(&list(&role.role_benefits));
        cards.push_str("</article>");
    }
    grid("roles", heading, cards)
}

/// Company value cards
pub fn values(resolved: &Resolved<Vec<ValueCard>>, heading: &SectionHeading) -> String {
    let live = resolved.is_live();
    let mut cards = String::new();
    for value in resolved.value() {
        cards.push_str("<article class=\"card value\">");
        cards.push_str(&icon(&value.value_icon));
        cards.push_str(&format!(
            "<h3{}>{}</h3><p{}>{}</p></article>",
            edit_attr(live, value, "value_title"),
            escape(&value.value_title),
            edit_attr(live, value, "value_description"),
            escape(&value.value_description)
        ));
    }
    grid("values", heading, cards)
}

/// Team member profiles
pub fn team(resolved: &Resolved<Vec<TeamMember>>, heading: &SectionHeading) -> String {
    let live = resolved.is_live();
    let mut cards = String::new();
    for member in resolved.value() {
        cards.push_str("<article class=\"card member\">");
        if let Some(photo) = member.member_photo.as_ref().filter(|p| !p.url.is_empty()) {
            cards.push_str(&format!(
                "<img src=\"{}\" alt=\"{}\">",
                escape(&photo.url),
                escape(&member.member_name)
            ));
        }
        cards.push_str(&format!(
            "<h3{}>{}</h3><p class=\"role\"{}>{}</p>",
            edit_attr(live, member, "member_name"),
            escape(&member.member_name),
            edit_attr(live, member, "member_role"),
            escape(&member.member_role)
        ));
        if let Some(department) = member.member_department.as_deref() {
            cards.push_str(&format!(
                "<p class=\"department\">{}</p>",
                escape(department)
            ));
        }
        if let Some(bio) = member.member_bio.as_deref() {
            cards.push_str(&format!(
                "<p{}>{}</p>",
                edit_attr(live, member, "member_bio"),
                escape(bio)
            ));
        }
        if let Some(links) = &member.social_links {
            for (label, url) in [
                ("LinkedIn", &links.linkedin_url),
                ("Twitter", &links.twitter_url),
            ] {
                if let Some(url) = url.as_deref().filter(|u| !u.is_empty()) {
                    cards.push_str(&format!(
                        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                        escape(url),
                        label
                    ));
                }
            }
        }
        cards.push_str("</article>");
    }
    grid("team", heading, cards)
}

/// Open positions; says so when there are none
pub fn jobs(resolved: &Resolved<Vec<JobOpening>>, heading: &SectionHeading) -> String {
    let live = resolved.is_live();
    let openings = resolved.value();
    if openings.is_empty() {
        return grid(
            "jobs",
            heading,
            "<p class=\"empty\">No open positions right now.</p>".to_string(),
        );
    }

    let mut cards = String::new();
    for job in openings {
        cards.push_str(&format!(
            "<article class=\"card job\"><h3{}>{}</h3>",
            edit_attr(live, job, "job_title"),
            escape(&job.job_title)
        ));
        cards.push_str("<ul class=\"badges\">");
        for badge in [
            &job.department,
            &job.location,
            &job.job_type,
            &job.experience_level,
        ] {
            if !badge.is_empty() {
                cards.push_str(&format!("<li>{}</li>", escape(badge)));
            }
        }
        cards.push_str("</ul>");
        if let Some(salary) = job.salary_range.as_deref() {
            cards.push_str(&format!("<p class=\"salary\">{}</p>", escape(salary)));
        }
        cards.push_str(&format!(
            "<p{}>{}</p>",
            edit_attr(live, job, "job_description"),
            escape(&job.job_description)
        ));
        if !job.requirements.is_empty() {
            cards.push_str(&format!(
                "<h4>Requirements:</h4><p{}>{}</p>",
                edit_attr(live, job, "requirements"),
                escape(&job.requirements)
            ));
        }
        if let Some(benefits) = job.benefits.as_deref() {
            cards.push_str(&format!(
                "<h4>Benefits:</h4><p{}>{}</p>",
                edit_attr(live, job, "benefits"),
                escape(benefits)
            ));
        }
        if let Some(url) = job.application_url.as_deref().filter(|u| !u.is_empty()) {
            cards.push_str(&format!(
                "<a class=\"cta cta-primary\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">Apply Now</a>",
                escape(url)
            ));
        }
        cards.push_str("</article>");
    }
    grid("jobs", heading, cards)
}
