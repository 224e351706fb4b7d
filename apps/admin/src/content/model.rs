use serde::{Deserialize, Serialize};

/// Which homepage layout the public site renders. Stored on the hero section
/// and mirrored by the `/api/admin/home-layout` endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeLayoutVariant {
    Classic,
    Sleek,
    Blockchain,
    Studio,
    River,
}

impl HomeLayoutVariant {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "classic" => Some(HomeLayoutVariant::Classic),
            "sleek" => Some(HomeLayoutVariant::Sleek),
            "blockchain" => Some(HomeLayoutVariant::Blockchain),
            "studio" => Some(HomeLayoutVariant::Studio),
            "river" => Some(HomeLayoutVariant::River),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HomeLayoutVariant::Classic => "classic",
            HomeLayoutVariant::Sleek => "sleek",
            HomeLayoutVariant::Blockchain => "blockchain",
            HomeLayoutVariant::Studio => "studio",
            HomeLayoutVariant::River => "river",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cta_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cta_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta_href: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_variant: Option<HomeLayoutVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    pub title: String,
    pub body: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}

/// Work arrangement for a position. Legacy payloads sometimes spell
/// onsite as "on-site"; the normalizer maps that here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Hybrid,
    Onsite,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPosition {
    /// Unique within a document. Generated from index + title slug when the
    /// backend omits it.
    pub id: String,
    pub title: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub team: String,
    pub location: String,
    pub work_mode: WorkMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareersIntro {
    pub headline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subheadline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareersContent {
    pub intro: CareersIntro,
    pub positions: Vec<CareerPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactContent {
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// The full published/draft content document. Always fully populated after
/// normalization; no consumer ever sees a missing section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub hero: HeroContent,
    pub about: AboutContent,
    pub services: Vec<ServiceItem>,
    pub careers: CareersContent,
    pub contact: ContactContent,
}

/// A replacement for exactly one top-level section of a draft document.
#[derive(Debug, Clone)]
pub enum SectionUpdate {
    Hero(HeroContent),
    About(AboutContent),
    Services(Vec<ServiceItem>),
    Careers(CareersContent),
    Contact(ContactContent),
}
