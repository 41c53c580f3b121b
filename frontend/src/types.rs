//! Content model types for the footer.
//!
//! Everything the footer displays is described by these types and
//! collected into a single [`FooterContent`] table. The table is built once
//! and handed to the `Footer` component; nothing here is mutated after construction.
//!
//! # Categories
//!
//! - **Brand Types** - product name, tagline and logo
//! - **Link Types** - navigation, contact, team and social entries
//! - **Content Table** - the full footer configuration
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Brand Types
// =============================================================================

/// Product identity shown in the first footer section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfo {
    /// Product name
    pub name: String,
    /// One-line tagline under the name
    pub tagline: String,
    /// Logo image path, resolved by the host page
    pub logo_ref: String,
}

impl BrandInfo {
    /// Alt text for the logo image.
    pub fn logo_alt(&self) -> String {
        format!("{} Logo", self.name)
    }
}

// =============================================================================
// Link Types
// =============================================================================

/// Social network (or mail) an icon stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Network {
    Facebook,
    Twitter,
    Instagram,
    LinkedIn,
    Email,
}

impl Network {
    /// Every network, in the order icons are defined.
    pub const ALL: [Network; 5] = [
        Network::Facebook,
        Network::Twitter,
        Network::Instagram,
        Network::LinkedIn,
        Network::Email,
    ];

    /// Human-readable name, used for `title` and `aria-label`.
    pub fn label(&self) -> &'static str {
        match self {
            Network::Facebook => "Facebook",
            Network::Twitter => "Twitter",
            Network::Instagram => "Instagram",
            Network::LinkedIn => "LinkedIn",
            Network::Email => "Email",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A navigation link in the "Quick Links" section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// A glyph-prefixed line in the "Contact Info" section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    /// Leading glyph (usually an emoji)
    pub glyph: String,
    pub text: String,
}

impl ContactEntry {
    /// The rendered line, glyph first.
    pub fn line(&self) -> String {
        format!("{} {}", self.glyph, self.text)
    }
}

/// Kind of outbound link on a team tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    /// Professional profile page, opened in a new tab
    Profile,
    /// `mailto:` address
    Email,
}

impl LinkKind {
    /// Icon drawn inside the link.
    pub fn icon(&self) -> Network {
        match self {
            LinkKind::Profile => Network::LinkedIn,
            LinkKind::Email => Network::Email,
        }
    }
}

/// One outbound link on a team member's tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub kind: LinkKind,
    pub target: String,
}

impl ProfileLink {
    pub fn profile(target: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::Profile,
            target: target.into(),
        }
    }

    pub fn email(target: impl Into<String>) -> Self {
        Self {
            kind: LinkKind::Email,
            target: target.into(),
        }
    }
}

/// A member of the team grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    /// Links in display order
    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

/// An icon link in the copyright bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: Network,
    /// Destination; `#` while no real page exists
    pub target: String,
    /// Accessible label, defaults to the network name
    pub label: String,
}

impl SocialLink {
    /// Social link labelled with the network name.
    pub fn new(network: Network, target: impl Into<String>) -> Self {
        Self {
            network,
            target: target.into(),
            label: network.label().to_string(),
        }
    }
}

// =============================================================================
// Content Table
// =============================================================================

/// The complete footer configuration.
///
/// Passed to the [`Footer`](crate::Footer) component. Changing what the
/// footer shows means changing this table, never the rendering code. The
/// shipped table is [`FooterContent::servicehub`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterContent {
    pub brand: BrandInfo,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
    #[serde(default)]
    pub contacts: Vec<ContactEntry>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    /// Literal year printed in the copyright line
    pub copyright_year: u16,
}

impl FooterContent {
    /// Copyright line for the bottom bar.
    pub fn copyright(&self) -> String {
        format!(
            "© {} {}. All rights reserved.",
            self.copyright_year, self.brand.name
        )
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Rendering itself never fails; errors only come from loading a
/// content table supplied by the host.
#[derive(Debug, Error)]
pub enum AppError {
    /// Content table could not be parsed.
    #[error("Invalid footer content: {0}")]
    Content(#[from] serde_json::Error),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_kind_icons() {
        assert_eq!(LinkKind::Profile.icon(), Network::LinkedIn);
        assert_eq!(LinkKind::Email.icon(), Network::Email);
    }

    #[test]
    fn test_social_link_defaults_label() {
        let link = SocialLink::new(Network::Instagram, "#");
        assert_eq!(link.label, "Instagram");
        assert_eq!(link.target, "#");
    }

    #[test]
    fn test_contact_line_is_glyph_prefixed() {
        let entry = ContactEntry {
            glyph: "📱".into(),
            text: "+1 (555) 123-4567".into(),
        };
        assert_eq!(entry.line(), "📱 +1 (555) 123-4567");
    }

    #[test]
    fn test_link_kind_serialization() {
        let json = serde_json::to_string(&ProfileLink::email("mailto:a@b.c")).unwrap();
        assert_eq!(json, r#"{"kind":"email","target":"mailto:a@b.c"}"#);
    }
}
