//! Content normalizer — converts an arbitrary, possibly partial or
//! legacy-shaped payload into a fully-populated [`SiteContent`].
//!
//! This is a total, pure function: it never fails. Anything that is absent,
//! null, or the wrong shape degrades to the static defaults field by field,
//! so a half-broken payload still yields a renderable document.

use serde_json::Value;

use crate::content::defaults::{
    default_content, DEFAULT_LOCATION, DEFAULT_POSITION_TITLE, DEFAULT_TEAM,
};
use crate::content::model::{
    AboutContent, CareerPosition, CareersContent, CareersIntro, ContactContent, HeroContent,
    HomeLayoutVariant, ServiceItem, SiteContent, WorkMode,
};

/// Normalizes a raw payload into a strict document. Deterministic: the same
/// input always yields the same output, including generated position ids.
pub fn normalize(raw: &Value) -> SiteContent {
    let defaults = default_content();

    SiteContent {
        hero: normalize_hero(raw.get("hero"), &defaults.hero),
        about: normalize_about(raw.get("about"), &defaults.about),
        services: normalize_services(raw.get("services"), &defaults.services),
        careers: normalize_careers(raw.get("careers"), &defaults.careers),
        contact: normalize_contact(raw.get("contact"), &defaults.contact),
    }
}

fn normalize_hero(raw: Option<&Value>, fallback: &HeroContent) -> HeroContent {
    HeroContent {
        headline: str_or(field(raw, "headline"), &fallback.headline),
        subheadline: opt_str_or(field(raw, "subheadline"), &fallback.subheadline),
        primary_cta_label: opt_str_or(field(raw, "primaryCtaLabel"), &fallback.primary_cta_label),
        primary_cta_href: opt_str_or(field(raw, "primaryCtaHref"), &fallback.primary_cta_href),
        secondary_cta_label: opt_str_or(
            field(raw, "secondaryCtaLabel"),
            &fallback.secondary_cta_label,
        ),
        secondary_cta_href: opt_str_or(
            field(raw, "secondaryCtaHref"),
            &fallback.secondary_cta_href,
        ),
        layout_variant: field(raw, "layoutVariant")
            .and_then(Value::as_str)
            .and_then(HomeLayoutVariant::parse)
            .or(fallback.layout_variant),
    }
}

fn normalize_about(raw: Option<&Value>, fallback: &AboutContent) -> AboutContent {
    AboutContent {
        title: str_or(field(raw, "title"), &fallback.title),
        body: match field(raw, "body").and_then(Value::as_array) {
            Some(items) => string_items(items),
            None => fallback.body.clone(),
        },
    }
}

fn normalize_services(raw: Option<&Value>, fallback: &[ServiceItem]) -> Vec<ServiceItem> {
    match raw.and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .map(|item| ServiceItem {
                title: str_or(item.get("title"), ""),
                description: str_or(item.get("description"), ""),
                tagline: opt_str(item.get("tagline")),
            })
            .collect(),
        None => fallback.to_vec(),
    }
}

fn normalize_careers(raw: Option<&Value>, fallback: &CareersContent) -> CareersContent {
    let intro = match field(raw, "intro") {
        // Legacy payloads carried the intro as a bare string.
        Some(Value::String(s)) => CareersIntro {
            headline: s.clone(),
            subheadline: None,
        },
        Some(obj @ Value::Object(_)) => CareersIntro {
            headline: str_or(obj.get("headline"), &fallback.intro.headline),
            subheadline: opt_str_or(obj.get("subheadline"), &fallback.intro.subheadline),
        },
        _ => fallback.intro.clone(),
    };

    let positions = match field(raw, "positions").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| normalize_position(index, item))
            .collect(),
        None => fallback.positions.clone(),
    };

    CareersContent { intro, positions }
}

fn normalize_position(index: usize, raw: &Value) -> CareerPosition {
    // The id slug is derived from the raw title so that re-normalizing the
    // same payload regenerates the same id.
    let raw_title = raw.get("title").and_then(Value::as_str).unwrap_or("");
    let slug_source = if raw_title.is_empty() { "role" } else { raw_title };

    let id = match raw.get("id").and_then(Value::as_str) {
        Some(id) => id.to_string(),
        None => format!("role-{index}-{}", slugify(slug_source)),
    };

    CareerPosition {
        id,
        title: str_or(raw.get("title"), DEFAULT_POSITION_TITLE),
        summary: str_or(raw.get("summary"), ""),
        tags: raw
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| string_items(items))
            .unwrap_or_default(),
        team: str_or(raw.get("team"), DEFAULT_TEAM),
        location: str_or(raw.get("location"), DEFAULT_LOCATION),
        work_mode: parse_work_mode(raw.get("workMode")),
        level: opt_str(raw.get("level")),
        tagline: opt_str(raw.get("tagline")),
        salary_range: opt_str(raw.get("salaryRange")),
    }
}

fn normalize_contact(raw: Option<&Value>, fallback: &ContactContent) -> ContactContent {
    ContactContent {
        intro: str_or(field(raw, "intro"), &fallback.intro),
        email: str_or(field(raw, "email"), &fallback.email),
        phone: str_or(field(raw, "phone"), &fallback.phone),
        address: str_or(field(raw, "address"), &fallback.address),
    }
}

fn parse_work_mode(raw: Option<&Value>) -> WorkMode {
    match raw.and_then(Value::as_str) {
        Some("remote") => WorkMode::Remote,
        Some("hybrid") => WorkMode::Hybrid,
        // "on-site" is a legacy spelling still present in older payloads.
        Some("onsite") | Some("on-site") => WorkMode::Onsite,
        Some(_) => WorkMode::Other,
        None => WorkMode::Remote,
    }
}

/// Lower-cases and collapses every non-alphanumeric run to a single `-`,
/// stripping leading/trailing separators: "Sr. Engineer (Rust)" -> "sr-engineer-rust".
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_sep = false;
    for c in title.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('-');
            }
            pending_sep = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}

fn field<'a>(section: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    section.and_then(|v| v.get(key))
}

fn str_or(raw: Option<&Value>, fallback: &str) -> String {
    raw.and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}

fn opt_str(raw: Option<&Value>) -> Option<String> {
    raw.and_then(Value::as_str).map(str::to_string)
}

fn opt_str_or(raw: Option<&Value>, fallback: &Option<String>) -> Option<String> {
    opt_str(raw).or_else(|| fallback.clone())
}

fn string_items(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_payload_yields_full_default_document() {
        let normalized = normalize(&Value::Null);
        assert_eq!(normalized, default_content());
    }

    #[test]
    fn test_partial_payload_merges_per_field_not_per_section() {
        let raw = json!({ "hero": { "headline": "Custom headline" } });
        let normalized = normalize(&raw);
        let defaults = default_content();

        assert_eq!(normalized.hero.headline, "Custom headline");
        // The rest of the hero section still comes from the defaults.
        assert_eq!(normalized.hero.subheadline, defaults.hero.subheadline);
        assert_eq!(normalized.hero.primary_cta_label, defaults.hero.primary_cta_label);
        assert_eq!(normalized.about, defaults.about);
    }

    #[test]
    fn test_wrong_shape_degrades_to_defaults() {
        let raw = json!({
            "hero": 42,
            "about": { "title": 7, "body": "not an array" },
            "services": { "oops": true },
            "contact": null
        });
        let normalized = normalize(&raw);
        let defaults = default_content();

        assert_eq!(normalized.hero, defaults.hero);
        assert_eq!(normalized.about, defaults.about);
        assert_eq!(normalized.services, defaults.services);
        assert_eq!(normalized.contact, defaults.contact);
    }

    #[test]
    fn test_legacy_bare_string_careers_intro() {
        let raw = json!({ "careers": { "intro": "Hello" } });
        let normalized = normalize(&raw);
        assert_eq!(normalized.careers.intro.headline, "Hello");
        assert_eq!(normalized.careers.intro.subheadline, None);
    }

    #[test]
    fn test_positions_normalized_element_wise() {
        let raw = json!({
            "careers": {
                "positions": [
                    { "title": "Platform Engineer", "workMode": "on-site", "tags": ["Infra", 3] },
                    { "summary": "No title here" }
                ]
            }
        });
        let normalized = normalize(&raw);
        let positions = &normalized.careers.positions;

        assert_eq!(positions[0].id, "role-0-platform-engineer");
        assert_eq!(positions[0].work_mode, WorkMode::Onsite);
        assert_eq!(positions[0].tags, vec!["Infra".to_string()]);
        assert_eq!(positions[0].team, DEFAULT_TEAM);

        assert_eq!(positions[1].title, DEFAULT_POSITION_TITLE);
        assert_eq!(positions[1].id, "role-1-role");
        assert_eq!(positions[1].work_mode, WorkMode::Remote);
    }

    #[test]
    fn test_duplicate_titles_get_distinct_ids() {
        let raw = json!({
            "careers": { "positions": [{ "title": "Eng" }, { "title": "Eng" }] }
        });
        let normalized = normalize(&raw);
        let positions = &normalized.careers.positions;
        assert_eq!(positions[0].id, "role-0-eng");
        assert_eq!(positions[1].id, "role-1-eng");
        assert_ne!(positions[0].id, positions[1].id);
    }

    #[test]
    fn test_existing_ids_are_preserved() {
        let raw = json!({
            "careers": { "positions": [{ "id": "custom-id", "title": "Eng" }] }
        });
        let normalized = normalize(&raw);
        assert_eq!(normalized.careers.positions[0].id, "custom-id");
    }

    #[test]
    fn test_unknown_work_mode_string_maps_to_other() {
        let raw = json!({
            "careers": { "positions": [{ "title": "Eng", "workMode": "nomadic" }] }
        });
        let normalized = normalize(&raw);
        assert_eq!(normalized.careers.positions[0].work_mode, WorkMode::Other);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = json!({
            "hero": { "headline": "H", "layoutVariant": "sleek" },
            "about": { "body": ["one", "two"] },
            "services": [{ "title": "S", "description": "D" }],
            "careers": {
                "intro": "Hello",
                "positions": [{ "title": "Eng" }, { "title": "Eng" }]
            },
            "contact": { "email": "a@b.c" }
        });
        let once = normalize(&raw);
        let twice = normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_normalizing_default_document_is_a_noop() {
        let defaults = default_content();
        let renormalized = normalize(&serde_json::to_value(&defaults).unwrap());
        assert_eq!(renormalized, defaults);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Sr. Engineer (Rust)"), "sr-engineer-rust");
        assert_eq!(slugify("  IT Security Consultant "), "it-security-consultant");
        assert_eq!(slugify("---"), "");
    }
}
