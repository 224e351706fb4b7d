//! Static fallback document. Every field the normalizer cannot recover from
//! a payload is taken from here, so consumers always have something to render.

use crate::content::model::{
    AboutContent, CareerPosition, CareersContent, CareersIntro, ContactContent, HeroContent,
    ServiceItem, SiteContent, WorkMode,
};

pub const DEFAULT_TEAM: &str = "General";
pub const DEFAULT_LOCATION: &str = "Remote (US)";
pub const DEFAULT_POSITION_TITLE: &str = "Untitled role";

fn default_position(id: &str, title: &str, summary: &str, tags: &[&str]) -> CareerPosition {
    CareerPosition {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        team: DEFAULT_TEAM.to_string(),
        location: DEFAULT_LOCATION.to_string(),
        work_mode: WorkMode::Remote,
        level: None,
        tagline: None,
        salary_range: None,
    }
}

/// Builds the full default document. Ids on the default positions are the
/// same ones the normalizer would generate, so re-normalizing a default
/// document is a no-op.
pub fn default_content() -> SiteContent {
    SiteContent {
        hero: HeroContent {
            headline: "Helping clients build modern solutions.".to_string(),
            subheadline: Some(
                "We help organizations move from fragile, legacy systems to secure, \
                 zero-trust architectures."
                    .to_string(),
            ),
            primary_cta_label: Some("Get in touch".to_string()),
            primary_cta_href: Some("/contact".to_string()),
            secondary_cta_label: None,
            secondary_cta_href: None,
            layout_variant: None,
        },
        about: AboutContent {
            title: "About Us".to_string(),
            body: vec![
                "Tell the story of the business, mission, vision, and what makes them different."
                    .to_string(),
                "Add timeline, credentials, certifications, or leadership bios here later."
                    .to_string(),
            ],
        },
        services: vec![
            ServiceItem {
                title: "Service One".to_string(),
                description: "Short description of service one.".to_string(),
                tagline: None,
            },
            ServiceItem {
                title: "Service Two".to_string(),
                description: "Short description of service two.".to_string(),
                tagline: None,
            },
            ServiceItem {
                title: "Service Three".to_string(),
                description: "Short description of service three.".to_string(),
                tagline: None,
            },
        ],
        careers: CareersContent {
            intro: CareersIntro {
                headline: "We hire smart, self-directed people who thrive in modern cloud, \
                           security, and consulting environments."
                    .to_string(),
                subheadline: None,
            },
            positions: vec![
                default_position(
                    "role-0-software-engineer",
                    "Software Engineer",
                    "Build modern cloud-native applications using Python, React, and \
                     DevSecOps best practices.",
                    &["Cloud", "DevSecOps", "Backend", "Full-Stack"],
                ),
                default_position(
                    "role-1-general-application",
                    "General Application",
                    "If your skillset doesn't fit a listed role, submit a general application.",
                    &["General"],
                ),
            ],
        },
        contact: ContactContent {
            intro: "Have questions or want to discuss a project? Send us a message.".to_string(),
            email: "info@example.com".to_string(),
            phone: "+1 (555) 555-5555".to_string(),
            address: "123 Business Street, City, State".to_string(),
        },
    }
}
