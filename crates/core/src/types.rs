use serde::{Deserialize, Serialize};

/// Where a scaffolded site loads GOV.UK Frontend assets from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetMode {
    /// Assets downloaded into the site tree and served locally.
    SelfHosted,
    /// Assets referenced from the jsDelivr CDN.
    Cdn,
}

impl AssetMode {
    pub fn from_cdn_flag(cdn: bool) -> Self {
        if cdn {
            AssetMode::Cdn
        } else {
            AssetMode::SelfHosted
        }
    }

    /// Label used in console output and the generated README.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetMode::SelfHosted => "self-hosted",
            AssetMode::Cdn => "CDN",
        }
    }

    pub fn is_self_hosted(&self) -> bool {
        matches!(self, AssetMode::SelfHosted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(AssetMode::from_cdn_flag(true), AssetMode::Cdn);
        assert_eq!(AssetMode::from_cdn_flag(false), AssetMode::SelfHosted);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(AssetMode::SelfHosted.as_str(), "self-hosted");
        assert_eq!(AssetMode::Cdn.as_str(), "CDN");
        assert!(AssetMode::SelfHosted.is_self_hosted());
        assert!(!AssetMode::Cdn.is_self_hosted());
    }
}
