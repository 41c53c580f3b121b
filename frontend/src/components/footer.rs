//! Footer component
//!
//! Renders a [`FooterContent`] table in a fixed section order: brand,
//! quick links, contact info, team grid, copyright bar. Lists are shown
//! in table order and an empty list leaves its section empty.

use leptos::*;

use super::icons::Icon;
use crate::types::{
    BrandInfo, ContactEntry, FooterContent, LinkKind, NavLink, ProfileLink, SocialLink,
    TeamMember,
};

#[component]
pub fn Footer(content: FooterContent) -> impl IntoView {
    log::debug!(
        "Rendering footer: {} links, {} contacts, {} team members, {} socials",
        content.nav_links.len(),
        content.contacts.len(),
        content.team.len(),
        content.socials.len()
    );

    let copyright = content.copyright();
    let FooterContent {
        brand,
        nav_links,
        contacts,
        team,
        socials,
        ..
    } = content;

    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-main">
                    <div class="footer-section">
                        <Brand brand=brand/>
                    </div>
                    <div class="footer-section">
                        <QuickLinks links=nav_links/>
                    </div>
                    <div class="footer-section">
                        <ContactInfo contacts=contacts/>
                    </div>
                </div>

                <TeamGrid members=team/>

                <div class="footer-bottom">
                    <div class="footer-divider"></div>
                    <div class="footer-copyright">
                        <p>{copyright}</p>
                        <div class="footer-social">
                            {socials.into_iter().map(|link| view! { <SocialIcon link=link/> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn Brand(brand: BrandInfo) -> impl IntoView {
    let alt = brand.logo_alt();

    view! {
        <div class="footer-brand">
            <div class="brand-logo-container">
                <img src=brand.logo_ref alt=alt class="footer-logo"/>
                <h2>{brand.name}</h2>
            </div>
            <p>{brand.tagline}</p>
        </div>
    }
}

#[component]
fn QuickLinks(links: Vec<NavLink>) -> impl IntoView {
    view! {
        <h4>"Quick Links"</h4>
        <ul class="footer-links">
            {links
                .into_iter()
                .map(|link| view! { <li><a href=link.target>{link.label}</a></li> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn ContactInfo(contacts: Vec<ContactEntry>) -> impl IntoView {
    view! {
        <h4>"Contact Info"</h4>
        <div class="contact-info">
            {contacts.iter().map(|entry| view! { <p>{entry.line()}</p> }).collect_view()}
        </div>
    }
}

#[component]
fn TeamGrid(members: Vec<TeamMember>) -> impl IntoView {
    view! {
        <div class="footer-team">
            <h4>"Meet Our Team"</h4>
            <div class="team-grid">
                {members.into_iter().map(|member| view! { <TeamTile member=member/> }).collect_view()}
            </div>
        </div>
    }
}

/// One team member's card: name plus a row of icon links.
#[component]
fn TeamTile(member: TeamMember) -> impl IntoView {
    view! {
        <div class="team-member">
            <div class="member-info">
                <span class="member-name">{member.name}</span>
                <div class="member-links">
                    {member
                        .links
                        .into_iter()
                        .map(|link| view! { <MemberLink link=link/> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn MemberLink(link: ProfileLink) -> impl IntoView {
    let network = link.kind.icon();

    match link.kind {
        // Profiles open in a new tab, isolated from this page
        LinkKind::Profile => view! {
            <a href=link.target target="_blank" rel="noopener noreferrer" title=network.label()>
                <Icon network=network/>
            </a>
        },
        LinkKind::Email => view! {
            <a href=link.target title=network.label()>
                <Icon network=network/>
            </a>
        },
    }
}

#[component]
fn SocialIcon(link: SocialLink) -> impl IntoView {
    view! {
        <a href=link.target aria-label=link.label.clone() title=link.label>
            <Icon network=link.network/>
        </a>
    }
}
