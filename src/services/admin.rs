//! Static descriptions of the admin interfaces mounted by the root router.
use serde::Serialize;

use crate::constants::admin as constants;

/// A group of related models shown together on an admin index.
#[derive(Debug, Clone, Serialize)]
pub struct AdminSection {
    /// URL segment of the section.
    pub slug: &'static str,
    /// Human readable title.
    pub title: &'static str,
    /// The models administered from this section.
    pub models: Vec<&'static str>,
}

/// An admin interface: a name, a header and its sections.
#[derive(Debug, Clone, Serialize)]
pub struct AdminSite {
    /// Internal name, serialized as `site`.
    #[serde(rename = "site")]
    pub name: &'static str,
    /// Header shown above the index.
    pub header: &'static str,
    /// Sections in display order.
    pub sections: Vec<AdminSection>,
}

impl AdminSite {
    /// The BuyItMe admin, organised by sections.
    pub fn buyitme() -> Self {
        Self {
            name: constants::BUYITME_SITE_NAME,
            header: constants::BUYITME_SITE_HEADER,
            sections: vec![
                AdminSection {
                    slug: "accounts",
                    title: "Accounts",
                    models: vec!["users"],
                },
                AdminSection {
                    slug: "catalogue",
                    title: "Catalogue",
                    models: vec!["products", "categories"],
                },
                AdminSection {
                    slug: "sales",
                    title: "Sales",
                    models: vec!["carts", "orders"],
                },
                AdminSection {
                    slug: "engagement",
                    title: "Engagement",
                    models: vec!["wishlists"],
                },
            ],
        }
    }

    /// The default admin, every model listed under one application.
    pub fn fallback() -> Self {
        let models = Self::buyitme()
            .sections
            .into_iter()
            .flat_map(|section| section.models)
            .collect();
        Self {
            name: constants::FALLBACK_SITE_NAME,
            header: constants::FALLBACK_SITE_HEADER,
            sections: vec![AdminSection {
                slug: "app",
                title: "Application",
                models,
            }],
        }
    }

    /// Look up a section by its URL segment.
    pub fn section(&self, slug: &str) -> Option<&AdminSection> {
        self.sections.iter().find(|section| section.slug == slug)
    }
}
