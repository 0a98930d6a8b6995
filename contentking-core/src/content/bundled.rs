// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bundled content - compiled into the binary
//!
//! One canonical set per content type. These are shown whenever the CMS
//! returns nothing, fails, or is not configured. Records are built fresh on
//! every call and carry no uid, so renderers never attach edit tags to them.

use super::schema::{
    CallToAction, CoreProduct, CtaButtons, DropdownItem, DropdownMenu, FeatureCard, Footer,
    FooterBottom, FooterSections, GlobalSettings, HeroSection, JobOpening, LinkItem, LinkSection,
    Navigation, NavigationItem, RoleCard, SimpleLink, Statistic, TeamMember, ValueCard,
};

/// Site title used when global settings are unavailable
pub const SITE_TITLE: &str = "Content King";

/// Site tagline used when global settings are unavailable
pub const SITE_TAGLINE: &str = "The future of content management";

pub(crate) fn global_settings() -> Vec<GlobalSettings> {
    vec![GlobalSettings {
        site_title: SITE_TITLE.to_string(),
        site_tagline: Some(SITE_TAGLINE.to_string()),
        ..Default::default()
    }]
}

pub(crate) fn navigation() -> Vec<Navigation> {
    let link = |label: &str, url: &str| NavigationItem {
        simple_link: Some(SimpleLink {
            label: label.to_string(),
            url: url.to_string(),
            is_external: false,
        }),
        dropdown_menu: None,
    };
    let item = |label: &str, url: &str, description: &str| DropdownItem {
        label: label.to_string(),
        url: url.to_string(),
        description: Some(description.to_string()),
    };

    vec![Navigation {
        navigation_name: "Main Navigation".to_string(),
        navigation_items: vec![
            link("Features", "/features"),
            link("Pricing", "/pricing"),
            NavigationItem {
                simple_link: None,
                dropdown_menu: Some(DropdownMenu {
                    label: "Company".to_string(),
                    dropdown_items: vec![
                        item("About", "/about", "Learn about our mission"),
                        item("Careers", "/careers", "Join our team"),
                        item("Awards", "/awards", "Our achievements"),
                    ],
                }),
            },
            link("Contact", "/contact"),
        ],
        cta_buttons: Some(CtaButtons {
            primary_cta: Some(CallToAction::new("Start Free Trial", "/signup")),
            secondary_cta: Some(CallToAction::new("Sign In", "/signin")),
        }),
        ..Default::default()
    }]
}

pub(crate) fn hero_sections() -> Vec<HeroSection> {
    vec![HeroSection {
        hero_title: "Build Digital Experiences That Scale Infinitely".to_string(),
        hero_subtitle: Some("The Future of Content Management".to_string()),
        hero_description: "The headless CMS that empowers teams to create, manage, and deliver \
            content across any platform with unmatched speed and flexibility. Transform your \
            digital presence today."
            .to_string(),
        primary_cta: CallToAction::new("Start Free Trial", "/signup"),
        secondary_cta: Some(CallToAction::external(
            "Watch Demo",
            "https://www.youtube.com/watch?v=demo",
        )),
        background_style: Some("gradient_primary".to_string()),
        ..Default::default()
    }]
}

pub(crate) fn feature_cards() -> Vec<FeatureCard> {
    [
        (
            "Zap",
            "Lightning Fast",
            "Deliver content at blazing speeds with our global CDN and optimized API endpoints.",
        ),
        (
            "Shield",
            "Enterprise Security",
            "Bank-level security with SOC 2 compliance, encryption at rest, and advanced access controls.",
        ),
        (
            "Globe",
            "Global Scale",
            "Built for global deployment with multi-region support and automatic scaling.",
        ),
        (
            "Code",
            "Developer First",
            "Rich APIs, webhooks, and SDKs for every major platform and programming language.",
        ),
        (
            "Users",
            "Team Collaboration",
            "Advanced workflows, approval processes, and role-based permissions for seamless teamwork.",
        ),
        (
            "BarChart3",
            "Analytics & Insights",
            "Deep insights into content performance with built-in analytics and custom reporting.",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((icon, title, description), order)| FeatureCard {
        feature_icon: icon.to_string(),
        feature_title: title.to_string(),
        feature_description: description.to_string(),
        feature_order: order,
        feature_category: "home_features".to_string(),
        ..Default::default()
    })
    .collect()
}

pub(crate) fn core_products() -> Vec<CoreProduct> {
    [
        (
            "Database",
            "Headless Content Management",
            "API-first content management that's flexible, scalable, and native to the cloud.",
            "Visual Builder, Timeline Management, Modular Blocks, Workflows",
        ),
        (
            "Zap",
            "Real-time Data and Insights",
            "Unify customer data from multiple sources with real-time activation and insights.",
            "Identity Resolution, Advanced Segmentation, Predictive Analytics, Data Unification",
        ),
        (
            "Brain",
            "Omnichannel Personalization",
            "Deliver personalized experiences across every channel and touchpoint.",
            "Dynamic Content, A/B Testing, Audience Targeting, Real-time Optimization",
        ),
        (
            "Users",
            "Agents & Automations",
            "Intelligent agents that combine reasoning, context, and tools to accelerate work.",
            "Workflow Automation, Content Generation, Smart Routing, Task Intelligence",
        ),
        (
            "Server",
            "Front-end Hosting",
            "Fully integrated, automated, MACH-compliant hosting that works for you.",
            "Instant Deployments, Global CDN, Edge Functions, Auto Scaling",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((icon, title, description, features), order)| CoreProduct {
        product_icon: icon.to_string(),
        product_title: title.to_string(),
        product_description: description.to_string(),
        product_features: features.to_string(),
        product_order: order,
        ..Default::default()
    })
    .collect()
}

pub(crate) fn statistics() -> Vec<Statistic> {
    [
        (
            "API Uptime",
            "99.90",
            "%",
            "Enterprise-grade reliability you can trust",
        ),
        (
            "API Requests Served",
            "10",
            "M+",
            "Handling massive scale with reliability",
        ),
        (
            "Countries Served",
            "500",
            "+",
            "Global reach with local performance",
        ),
        (
            "Expert Support",
            "24",
            "/7",
            "Always here when you need us most",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((label, value, suffix, description), order)| Statistic {
        stat_label: label.to_string(),
        stat_value: value.to_string(),
        stat_suffix: Some(suffix.to_string()),
        stat_description: description.to_string(),
        stat_order: order,
        stat_category: "home_stats".to_string(),
        ..Default::default()
    })
    .collect()
}

pub(crate) fn role_cards() -> Vec<RoleCard> {
    [
        (
            "Code",
            "Developer & IT",
            "API-first architecture with developer-friendly tools and extensive documentation",
            "GraphQL & REST APIs, SDK Support, Headless Architecture, DevOps Integration",
        ),
        (
            "Users",
            "Business Users",
            "Intuitive interface for content creators and marketers to work efficiently",
            "Visual Editor, Collaboration Tools, Content Scheduling, Preview & Publish",
        ),
        (
            "Brain",
            "Digital Leaders",
            "Strategic insights and governance tools for enterprise-scale content operations",
            "Analytics Dashboard, Performance Metrics, ROI Tracking, Compliance Tools",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((icon, title, description, benefits), order)| RoleCard {
        role_icon: icon.to_string(),
        role_title: title.to_string(),
        role_description: description.to_string(),
        role_benefits: benefits.to_string(),
        role_order: order,
        ..Default::default()
    })
    .collect()
}

pub(crate) fn value_cards() -> Vec<ValueCard> {
    [
        (
            "Users",
            "A Connected Tribe",
            "We're more than colleagues. We're a tribe.",
        ),
        (
            "Heart",
            "Grounded in Care",
            "We care deeply about each other, our customers and our communities.",
        ),
        (
            "Shield",
            "Anchored in Integrity",
            "We do the right thing even when nobody's watching.",
        ),
        (
            "Lightbulb",
            "Agents of Change",
            "We're dreamers and dreammakers, agents of change who challenge the status quo.",
        ),
        (
            "Search",
            "Fiercely Curious",
            "We're curious trendspotters and brave trendsetters.",
        ),
        (
            "Sparkles",
            "Diverse & Inclusive",
            "Diverse voices. Shared purpose. Lasting impact.",
        ),
    ]
    .into_iter()
    .zip(1..)
    .map(|((icon, title, description), order)| ValueCard {
        value_icon: icon.to_string(),
        value_title: title.to_string(),
        value_description: description.to_string(),
        value_order: order,
        ..Default::default()
    })
    .collect()
}

pub(crate) fn team_members() -> Vec<TeamMember> {
    [
        ("Neha Sampat", "CEO", "Leadership"),
        ("Nishant Patel", "CTO", "Technology"),
        ("Josette Leslie", "CFO", "Finance"),
        ("Todd Rathje", "CRO", "Revenue"),
        ("Gurdeep Dhillon", "CMO", "Marketing"),
        ("Conor Egan", "SVP, Product", "Product"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, role, department), order)| TeamMember {
        member_name: name.to_string(),
        member_role: role.to_string(),
        member_department: Some(department.to_string()),
        member_order: order,
        ..Default::default()
    })
    .collect()
}

/// No openings are advertised without the CMS
pub(crate) fn job_openings() -> Vec<JobOpening> {
    Vec::new()
}

pub(crate) fn footer() -> Vec<Footer> {
    let links = |items: &[(&str, &str)]| {
        items
            .iter()
            .map(|(label, url)| LinkItem::new(label, url))
            .collect::<Vec<_>>()
    };

    vec![Footer {
        footer_sections: FooterSections {
            company_section: LinkSection {
                title: "Company".to_string(),
                links: links(&[
                    ("About", "/about"),
                    ("Careers", "/careers"),
                    ("Awards", "/awards"),
                    ("Contact", "/contact"),
                ]),
            },
            products_section: LinkSection {
                title: "Products".to_string(),
                links: links(&[
                    ("Content Management", "/features"),
                    ("APIs & SDKs", "/features"),
                    ("Analytics", "/features"),
                    ("Security", "/features"),
                ]),
            },
            resources_section: LinkSection {
                title: "Resources".to_string(),
                links: links(&[
                    ("Documentation", "https://docs.contentstack.com"),
                    ("Support", "/contact"),
                    ("Community", "https://community.contentstack.com"),
                    ("Blog", "https://blog.contentstack.com"),
                ]),
            },
        },
        footer_bottom: FooterBottom {
            copyright_text: "© 2024 Content King. All rights reserved.".to_string(),
            legal_links: links(&[
                ("Privacy Policy", "/privacy"),
                ("Terms of Service", "/terms"),
                ("Cookie Policy", "/cookies"),
            ]),
        },
        ..Default::default()
    }]
}
