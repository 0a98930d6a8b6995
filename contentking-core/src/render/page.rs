// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pages and page views
//!
//! A [`PageView`] mounts the queries its page needs for as long as it
//! lives. Loading fetches them concurrently; rendering resolves each one
//! against bundled content independently.

use std::fmt;
use std::str::FromStr;

use super::cards;
use super::hero::hero;
use super::html::{escape, SectionHeading};
use super::layout::{footer, header};
use crate::content::{
    resolve_state, ContentError, ContentQuery, ContentStore, CoreProduct, FeatureCard, Footer,
    GlobalSettings, HeroSection, JobOpening, Navigation, RoleCard, Statistic, TeamMember,
    ValueCard,
};

/// Pages of the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Features,
    Pricing,
    About,
    Careers,
    Awards,
    Contact,
    SignIn,
    SignUp,
}

impl Page {
    /// Every page, in navigation order
    pub const ALL: [Page; 9] = [
        Page::Home,
        Page::Features,
        Page::Pricing,
        Page::About,
        Page::Careers,
        Page::Awards,
        Page::Contact,
        Page::SignIn,
        Page::SignUp,
    ];

    /// URL slug; also the `page_slug` of the page's hero section
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Features => "features",
            Page::Pricing => "pricing",
            Page::About => "about",
            Page::Careers => "careers",
            Page::Awards => "awards",
            Page::Contact => "contact",
            Page::SignIn => "signin",
            Page::SignUp => "signup",
        }
    }

    /// URL path
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            other => format!("/{}", other.slug()),
        }
    }

    /// Document title
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Features => "Features",
            Page::Pricing => "Pricing",
            Page::About => "About",
            Page::Careers => "Careers",
            Page::Awards => "Awards",
            Page::Contact => "Contact",
            Page::SignIn => "Sign In",
            Page::SignUp => "Sign Up",
        }
    }

    fn has_cms_hero(&self) -> bool {
        matches!(
            self,
            Page::Home | Page::Features | Page::About | Page::Careers
        )
    }

    fn intro(&self) -> Option<(&'static str, &'static str)> {
        match self {
            Page::Pricing => Some((
                "We have the right solution for you",
                "From Headless CMS to Web Personalization to Omnichannel Personalization, \
                 find the plan that fits your team.",
            )),
            Page::Awards => Some((
                "Awards and recognition",
                "We're honored to consistently be recognized by analysts, employees, and customers.",
            )),
            Page::Contact => Some((
                "Ready to transform your content experience?",
                "Talk to our team about what Content King can do for you.",
            )),
            Page::SignIn => Some(("Welcome back", "Sign in to your account.")),
            Page::SignUp => Some(("Start your free trial", "Create your account in minutes.")),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Page {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().trim_matches('/').to_ascii_lowercase();
        let slug = match slug.as_str() {
            "" | "index" => "home",
            "sign-in" => "signin",
            "sign-up" => "signup",
            other => other,
        };
        Page::ALL
            .into_iter()
            .find(|page| page.slug() == slug)
            .ok_or_else(|| ContentError::UnknownPage(s.to_string()))
    }
}

enum Sections {
    Home {
        features: ContentQuery<Vec<FeatureCard>>,
        stats: ContentQuery<Vec<Statistic>>,
    },
    Features {
        products: ContentQuery<Vec<CoreProduct>>,
        roles: ContentQuery<Vec<RoleCard>>,
        stats: ContentQuery<Vec<Statistic>>,
    },
    About {
        values: ContentQuery<Vec<ValueCard>>,
        team: ContentQuery<Vec<TeamMember>>,
    },
    Careers {
        jobs: ContentQuery<Vec<JobOpening>>,
    },
    Static,
}

/// A mounted page
pub struct PageView {
    page: Page,
    settings: ContentQuery<Vec<GlobalSettings>>,
    navigation: ContentQuery<Vec<Navigation>>,
    hero: Option<ContentQuery<Option<HeroSection>>>,
    sections: Sections,
    footer: ContentQuery<Vec<Footer>>,
}

impl PageView {
    /// Mount every query `page` renders
    pub fn mount(store: &ContentStore, page: Page) -> Self {
        let hero = page
            .has_cms_hero()
            .then(|| store.hero_section_by_slug(page.slug()));

        let sections = match page {
            Page::Home => Sections::Home {
                features: store.feature_cards(Some("home_features")),
                stats: store.statistics(Some("home_stats")),
            },
            Page::Features => Sections::Features {
                products: store.core_products(),
                roles: store.role_cards(),
                stats: store.statistics(None),
            },
            Page::About => Sections::About {
                values: store.value_cards(),
                team: store.team_members(),
            },
            Page::Careers => Sections::Careers {
                jobs: store.job_openings(),
            },
            _ => Sections::Static,
        };

        Self {
            page,
            settings: store.global_settings(),
            navigation: store.navigation(),
            hero,
            sections,
            footer: store.footer(),
        }
    }

    /// Page being shown
    pub fn page(&self) -> Page {
        self.page
    }

    /// Load every mounted query concurrently
    pub async fn load(&self) {
        let hero = async {
            if let Some(hero) = &self.hero {
                hero.load().await;
            }
        };
        let sections = async {
            match &self.sections {
                Sections::Home { features, stats } => {
                    futures::join!(features.load(), stats.load());
                }
                Sections::Features {
                    products,
                    roles,
                    stats,
                } => {
                    futures::join!(products.load(), roles.load(), stats.load());
                }
                Sections::About { values, team } => {
                    futures::join!(values.load(), team.load());
                }
                Sections::Careers { jobs } => {
                    jobs.load().await;
                }
                Sections::Static => {}
            }
        };

        futures::join!(
            self.settings.load(),
            self.navigation.load(),
            self.footer.load(),
            hero,
            sections
        );
    }

    /// Render the whole document from the current query states
    pub fn render(&self) -> String {
        let settings = resolve_state(&self.settings.state());
        let site_title = settings
            .value()
            .first()
            .map(|s| s.site_title.clone())
            .unwrap_or_default();

        let mut body = header(&settings, &resolve_state(&self.navigation.state()));
        body.push_str("<main>");
        if let Some(query) = &self.hero {
            body.push_str(&hero(&resolve_state(&query.state())));
        } else if let Some((title, lead)) = self.page.intro() {
            body.push_str(&format!(
                "<section class=\"page-intro\"><h1>{}</h1><p>{}</p></section>",
                escape(title),
                escape(lead)
            ));
        }
        body.push_str(&self.render_sections());
        body.push_str("</main>");
        body.push_str(&footer(&resolve_state(&self.footer.state())));

        format!(
            "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\"><title>{} | {}</title></head><body data-page=\"{}\">{}</body></html>",
            escape(self.page.title()),
            escape(&site_title),
            self.page.slug(),
            body
        )
    }

    fn render_sections(&self) -> String {
        match &self.sections {
            Sections::Home { features, stats } => {
                let mut html = cards::features(
                    &resolve_state(&features.state()),
                    &SectionHeading::new(
                        "Powerful Features for Modern Teams",
                        "Everything you need to create, manage, and deliver exceptional digital experiences at enterprise scale.",
                    ),
                );
                html.push_str(&cards::stats(
                    &resolve_state(&stats.state()),
                    &SectionHeading::new(
                        "Trusted by Teams Worldwide",
                        "Join thousands of companies already using our platform to power their digital experiences.",
                    ),
                ));
                html
            }
            Sections::Features {
                products,
                roles,
                stats,
            } => {
                let mut html = cards::products(
                    &resolve_state(&products.state()),
                    &SectionHeading::new(
                        "Everything you need in one platform",
                        "Composable products that work together or on their own.",
                    ),
                );
                html.push_str(&cards::roles(
                    &resolve_state(&roles.state()),
                    &SectionHeading::new(
                        "Designed for every role on your team",
                        "Tools for developers, business users, and digital leaders.",
                    ),
                ));
                html.push_str(&cards::stats(
                    &resolve_state(&stats.state()),
                    &SectionHeading::new("Why teams choose Content King", ""),
                ));
                html
            }
            Sections::About { values, team } => {
                let mut html = cards::values(
                    &resolve_state(&values.state()),
                    &SectionHeading::new(
                        "Our Values",
                        "The principles that guide everything we do",
                    ),
                );
                html.push_str(&cards::team(
                    &resolve_state(&team.state()),
                    &SectionHeading::new(
                        "Leadership Team",
                        "Meet the experienced leaders driving our vision forward",
                    ),
                ));
                html
            }
            Sections::Careers { jobs } => cards::jobs(
                &resolve_state(&jobs.state()),
                &SectionHeading::new(
                    "Open Positions",
                    "Find your next career opportunity across our teams",
                ),
            ),
            Sections::Static => String::new(),
        }
    }
}

impl fmt::Debug for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageView").field("page", &self.page).finish()
    }
}
