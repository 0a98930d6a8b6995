// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Site header and footer

use super::html::{cta_link, edit_attr, escape};
use crate::content::{
    Footer, GlobalSettings, LinkItem, LinkSection, Navigation, NavigationItem, Resolved,
};

fn first<T: Clone + Default>(resolved: &Resolved<Vec<T>>) -> Resolved<T> {
    resolved
        .clone()
        .map(|records| records.into_iter().next().unwrap_or_default())
}

fn nav_item(item: &NavigationItem) -> String {
    if let Some(link) = &item.simple_link {
        let target = if link.is_external {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };
        return format!(
            "<li><a href=\"{}\"{}>{}</a></li>",
            escape(&link.url),
            target,
            escape(&link.label)
        );
    }

    let Some(menu) = &item.dropdown_menu else {
        return String::new();
    };
    let mut html = format!(
        "<li class=\"dropdown\"><button>{}</button><ul>",
        escape(&menu.label)
    );
    for entry in &menu.dropdown_items {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a>",
            escape(&entry.url),
            escape(&entry.label)
        ));
        if let Some(description) = entry.description.as_deref() {
            html.push_str(&format!("<small>{}</small>", escape(description)));
        }
        html.push_str("</li>");
    }
    html.push_str("</ul></li>");
    html
}

/// Site header: logo or title, navigation and CTA buttons
pub fn header(settings: &Resolved<Vec<GlobalSettings>>, navigation: &Resolved<Vec<Navigation>>) -> String {
    let settings = first(settings);
    let navigation = first(navigation);
    let site = settings.value();
    let nav = navigation.value();

    let mut html = String::from("<header class=\"site-header\"><a class=\"brand\" href=\"/\">");
    match site.site_logo.as_ref().filter(|logo| !logo.url.is_empty()) {
        Some(logo) => html.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\"{}>",
            escape(&logo.url),
            escape(&site.site_title),
            edit_attr(settings.is_live(), site, "site_logo")
        )),
        None => html.push_str(&format!(
            "<span{}>{}</span>",
            edit_attr(settings.is_live(), site, "site_title"),
            escape(&site.site_title)
        )),
    }
    html.push_str("</a><nav><ul>");
    for item in &nav.navigation_items {
        html.push_str(&nav_item(item));
    }
    html.push_str("</ul></nav>");

    if let Some(buttons) = &nav.cta_buttons {
        html.push_str("<div class=\"header-actions\">");
        if let Some(secondary) = &buttons.secondary_cta {
            html.push_str(&cta_link(secondary, "cta cta-secondary", ""));
        }
        if let Some(primary) = &buttons.primary_cta {
            html.push_str(&cta_link(primary, "cta cta-primary", ""));
        }
        html.push_str("</div>");
    }
    html.push_str("</header>");
    html
}

fn links(items: &[LinkItem]) -> String {
    items
        .iter()
        .map(|link| {
            format!(
                "<li><a href=\"{}\">{}</a></li>",
                escape(&link.url),
                escape(&link.label)
            )
        })
        .collect()
}

fn column(section: &LinkSection, attr: String) -> String {
    format!(
        "<div class=\"footer-column\"><h4{}>{}</h4><ul>{}</ul></div>",
        attr,
        escape(&section.title),
        links(&section.links)
    )
}

/// Site footer: link columns, copyright and legal links
pub fn footer(resolved: &Resolved<Vec<Footer>>) -> String {
    let resolved = first(resolved);
    let live = resolved.is_live();
    let footer = resolved.value();
    let sections = &footer.footer_sections;

    let mut html = String::from("<footer class=\"site-footer\"><div class=\"footer-columns\">");
    html.push_str(&column(
        &sections.company_section,
        edit_attr(live, footer, "footer_sections.company_section.title"),
    ));
    html.push_str(&column(
        &sections.products_section,
        edit_attr(live, footer, "footer_sections.products_section.title"),
    ));
    html.push_str(&column(
        &sections.resources_section,
        edit_attr(live, footer, "footer_sections.resources_section.title"),
    ));
    html.push_str(&format!(
        "</div><div class=\"footer-bottom\"><p{}>{}</p><ul>{}</ul></div></footer>",
        edit_attr(live, footer, "footer_bottom.copyright_text"),
        escape(&footer.footer_bottom.copyright_text),
        links(&footer.footer_bottom.legal_links)
    ));
    html
}
