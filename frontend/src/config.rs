//! Application configuration.
//!
//! Centralized configuration for the ServiceHub footer. The content
//! table is hardcoded here; a host page can swap it for its own through
//! [`FooterContent::from_json`].

use std::fmt;

use crate::types::{
    AppResult, BrandInfo, ContactEntry, FooterContent, LinkKind, NavLink, Network, ProfileLink,
    SocialLink, TeamMember,
};

/// Application name.
pub const APP_NAME: &str = "ServiceHub";

/// Product tagline shown under the brand name.
pub const APP_TAGLINE: &str = "Your trusted platform for home services";

/// Logo asset path, served by the host.
pub const LOGO_SRC: &str = "/logo.svg";

/// Stylesheet that owns all footer presentation.
pub const STYLESHEET_HREF: &str = "/styles/Footer.css";

/// Year printed in the copyright line.
pub const COPYRIGHT_YEAR: u16 = 2025;

/// Target used by links that have no real destination yet.
pub const PLACEHOLDER_TARGET: &str = "#";

// =============================================================================
// Shipped content
// =============================================================================

impl FooterContent {
    /// The ServiceHub footer as shipped.
    pub fn servicehub() -> Self {
        let nav = |label: &str, target: &str| NavLink {
            label: label.to_string(),
            target: target.to_string(),
        };
        let contact = |glyph: &str, text: &str| ContactEntry {
            glyph: glyph.to_string(),
            text: text.to_string(),
        };
        let member = |name: &str, profile: &str, email: &str| TeamMember {
            name: name.to_string(),
            links: vec![ProfileLink::profile(profile), ProfileLink::email(email)],
        };

        Self {
            brand: BrandInfo {
                name: APP_NAME.to_string(),
                tagline: APP_TAGLINE.to_string(),
                logo_ref: LOGO_SRC.to_string(),
            },
            nav_links: vec![
                nav("Services", "/services"),
                nav("About Us", "/about"),
                nav("Contact", "/contact"),
                nav("Support", "/support"),
            ],
            contacts: vec![
                contact("📧", "teamServiceHub@help.com"),
                contact("🌐", "www.servicehub.com"),
                contact("📱", "+1 (555) 123-4567"),
            ],
            team: vec![
                member(
                    "Anchal Chaurasiya",
                    "https://www.linkedin.com/in/anchalchaurasiya",
                    "mailto:anchal@example.com",
                ),
                member(
                    "Harika Bondapalli",
                    "https://www.linkedin.com/in/harika",
                    "mailto:harika@example.com",
                ),
                member(
                    "Ayush Panwar",
                    "https://www.linkedin.com/in/Ayush",
                    "mailto:Ayush@example.com",
                ),
                member(
                    "Siddharth Pathak",
                    "https://www.linkedin.com/in/siddharth",
                    "mailto:siddharth@example.com",
                ),
            ],
            // No social pages exist yet, see `audit`.
            socials: vec![
                SocialLink::new(Network::Facebook, PLACEHOLDER_TARGET),
                SocialLink::new(Network::Twitter, PLACEHOLDER_TARGET),
                SocialLink::new(Network::Instagram, PLACEHOLDER_TARGET),
                SocialLink::new(Network::LinkedIn, PLACEHOLDER_TARGET),
            ],
            copyright_year: COPYRIGHT_YEAR,
        }
    }

    /// Parse a content table from JSON (camelCase field names).
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// List data-quality defects in the table.
    ///
    /// Advisory only: the footer renders defective entries as-is.
    pub fn audit(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        for link in &self.nav_links {
            if is_placeholder(&link.target) {
                issues.push(ContentIssue::PlaceholderTarget {
                    location: format!("nav link '{}'", link.label),
                });
            }
        }

        for member in &self.team {
            for link in &member.links {
                if is_placeholder(&link.target) {
                    issues.push(ContentIssue::PlaceholderTarget {
                        location: format!("{:?} link of '{}'", link.kind, member.name),
                    });
                } else if link.kind == LinkKind::Email && !link.target.starts_with("mailto:") {
                    issues.push(ContentIssue::MalformedMailto {
                        member: member.name.clone(),
                        target: link.target.clone(),
                    });
                }
            }
        }

        for social in &self.socials {
            if is_placeholder(&social.target) {
                issues.push(ContentIssue::PlaceholderTarget {
                    location: format!("{} social link", social.network),
                });
            }
        }

        issues
    }

    /// Log every audit finding as a warning and return how many there were.
    pub fn report_issues(&self) -> usize {
        let issues = self.audit();
        for issue in &issues {
            log::warn!("⚠️ Incomplete footer content: {}", issue);
        }
        issues.len()
    }
}

impl Default for FooterContent {
    fn default() -> Self {
        Self::servicehub()
    }
}

fn is_placeholder(target: &str) -> bool {
    let target = target.trim();
    target.is_empty() || target == PLACEHOLDER_TARGET
}

// =============================================================================
// Audit findings
// =============================================================================

/// Incomplete or malformed entry in a [`FooterContent`] table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentIssue {
    /// Link has no real destination (`#` or empty).
    PlaceholderTarget { location: String },
    /// Email link without the `mailto:` scheme.
    MalformedMailto { member: String, target: String },
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::PlaceholderTarget { location } => {
                write!(f, "Placeholder target on {}", location)
            }
            ContentIssue::MalformedMailto { member, target } => {
                write!(f, "Email link of '{}' is not a mailto: URL: {}", member, target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AppError;

    #[test]
    fn test_shipped_roster_order() {
        let content = FooterContent::default();
        let names: Vec<&str> = content.team.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            ["Anchal Chaurasiya", "Harika Bondapalli", "Ayush Panwar", "Siddharth Pathak"]
        );
        assert!(content
            .team
            .iter()
            .all(|m| m.links.iter().map(|l| l.kind).eq([LinkKind::Profile, LinkKind::Email])));
    }

    #[test]
    fn test_shipped_audit_flags_only_socials() {
        let issues = FooterContent::servicehub().audit();
        assert_eq!(issues.len(), 4);
        assert!(issues
            .iter()
            .all(|i| matches!(i, ContentIssue::PlaceholderTarget { location } if location.ends_with("social link"))));
        assert_eq!(issues[0].to_string(), "Placeholder target on Facebook social link");
    }

    #[test]
    fn test_report_issues_counts_findings() {
        assert_eq!(FooterContent::servicehub().report_issues(), 4);
    }

    #[test]
    fn test_audit_flags_malformed_mailto() {
        let mut content = FooterContent::servicehub();
        content.socials.clear();
        content.team[2].links[1].target = "Ayush@example.com".into();
        content.nav_links[0].target = " ".into();

        let issues = content.audit();
        assert_eq!(
            issues,
            vec![
                ContentIssue::PlaceholderTarget {
                    location: "nav link 'Services'".into()
                },
                ContentIssue::MalformedMailto {
                    member: "Ayush Panwar".into(),
                    target: "Ayush@example.com".into()
                },
            ]
        );
    }

    #[test]
    fn test_from_json_minimal_table() {
        let json = r#"{
            "brand": {
                "name": "ServiceHub",
                "tagline": "Home services",
                "logoRef": "/logo.svg"
            },
            "team": [
                { "name": "Solo" }
            ],
            "socials": [
                { "network": "Email", "target": "mailto:hi@servicehub.com", "label": "Mail us" }
            ],
            "copyrightYear": 2026
        }"#;

        let content = FooterContent::from_json(json).unwrap();
        assert!(content.nav_links.is_empty());
        assert!(content.contacts.is_empty());
        assert!(content.team[0].links.is_empty());
        assert_eq!(content.socials[0].network, Network::Email);
        assert_eq!(content.copyright(), "© 2026 ServiceHub. All rights reserved.");
        assert!(content.audit().is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_network() {
        let json = r##"{
            "brand": { "name": "X", "tagline": "", "logoRef": "" },
            "socials": [{ "network": "MySpace", "target": "#", "label": "MySpace" }],
            "copyrightYear": 2025
        }"##;

        let err = FooterContent::from_json(json).unwrap_err();
        assert!(matches!(err, AppError::Content(_)));
        assert!(err.to_string().starts_with("Invalid footer content"));
    }

    #[test]
    fn test_json_roundtrip_of_shipped_table() {
        let content = FooterContent::servicehub();
        let json = serde_json::to_string(&content).unwrap();
        assert_eq!(FooterContent::from_json(&json).unwrap(), content);
    }
}
