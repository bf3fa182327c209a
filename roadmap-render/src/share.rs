//! Share link builders.
//!
//! Pure functions mapping a roadmap's title and URL to the share targets
//! shown in the page header.

use roadmap_core::site::SiteConfig;
use serde::Serialize;

/// Text and link being shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareTarget<'a> {
    /// Text shown with the shared link.
    pub text: &'a str,
    /// Link being shared.
    pub url: &'a str,
}

/// External services the header links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareService {
    /// Source repository.
    Repository,
    /// Facebook sharer.
    Facebook,
    /// Twitter intent.
    Twitter,
    /// Reddit submit.
    Reddit,
}

impl ShareService {
    /// Header order.
    pub const ALL: [Self; 4] = [Self::Repository, Self::Facebook, Self::Twitter, Self::Reddit];

    /// Accessible label for the icon link.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Repository => "GitHub",
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Reddit => "Reddit",
        }
    }

    /// CSS class of the icon.
    #[must_use]
    pub const fn icon_class(self) -> &'static str {
        match self {
            Self::Repository => "icon-github-square",
            Self::Facebook => "icon-facebook-square",
            Self::Twitter => "icon-twitter-square",
            Self::Reddit => "icon-reddit-square",
        }
    }
}

/// A resolved share link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLink {
    /// Target service.
    pub service: ShareService,
    /// Fully built URL.
    pub href: String,
}

/// Repository link from site configuration.
#[must_use]
pub fn repository_url(site: &SiteConfig) -> String {
    site.repo_url().to_string()
}

/// Facebook share URL.
#[must_use]
pub fn facebook_share_url(target: ShareTarget<'_>) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}",
        urlencoding::encode(target.url)
    )
}

/// Twitter share URL.
#[must_use]
pub fn twitter_share_url(target: ShareTarget<'_>) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(target.text),
        urlencoding::encode(target.url)
    )
}

/// Reddit share URL.
#[must_use]
pub fn reddit_share_url(target: ShareTarget<'_>) -> String {
    format!(
        "https://www.reddit.com/submit?url={}&title={}",
        urlencoding::encode(target.url),
        urlencoding::encode(target.text)
    )
}

/// Build every header link, in header order.
#[must_use]
pub fn share_links(site: &SiteConfig, target: ShareTarget<'_>) -> Vec<ShareLink> {
    ShareService::ALL
        .into_iter()
        .map(|service| ShareLink {
            service,
            href: match service {
                ShareService::Repository => repository_url(site),
                ShareService::Facebook => facebook_share_url(target),
                ShareService::Twitter => twitter_share_url(target),
                ShareService::Reddit => reddit_share_url(target),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadmap_core::site::SiteUrls;

    const TARGET: ShareTarget<'static> = ShareTarget {
        text: "Frontend Roadmap",
        url: "https://roadmap.sh/frontend",
    };

    #[test]
    fn test_facebook_url() {
        assert_eq!(
            facebook_share_url(TARGET),
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Froadmap.sh%2Ffrontend"
        );
    }

    #[test]
    fn test_twitter_url_encodes_text() {
        assert_eq!(
            twitter_share_url(TARGET),
            "https://twitter.com/intent/tweet?text=Frontend%20Roadmap&url=https%3A%2F%2Froadmap.sh%2Ffrontend"
        );
    }

    #[test]
    fn test_reddit_url() {
        assert_eq!(
            reddit_share_url(TARGET),
            "https://www.reddit.com/submit?url=https%3A%2F%2Froadmap.sh%2Ffrontend&title=Frontend%20Roadmap"
        );
    }

    #[test]
    fn test_ampersand_in_text_is_encoded() {
        let url = twitter_share_url(ShareTarget {
            text: "Dev & Ops",
            url: "/devops",
        });
        assert!(url.contains("text=Dev%20%26%20Ops"));
    }

    #[test]
    fn test_share_links_order_and_repo() {
        let site = SiteConfig {
            url: SiteUrls {
                repo: "https://git.example/r".to_string(),
            },
            ..SiteConfig::default()
        };
        let links = share_links(&site, TARGET);
        let services: Vec<ShareService> = links.iter().map(|l| l.service).collect();
        assert_eq!(services, ShareService::ALL.to_vec());
        assert_eq!(links[0].href, site.repo_url());
    }
}
