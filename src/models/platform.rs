// file: src/models/platform.rs
// description: supported CDP platforms and the query scope built on them
// reference: internal data structures

use crate::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Segment,
    Mparticle,
    Lytics,
    Zeotap,
}

impl Platform {
    /// Every platform, in the order used for mention scanning and comparisons.
    pub const ALL: [Platform; 4] = [
        Platform::Segment,
        Platform::Mparticle,
        Platform::Lytics,
        Platform::Zeotap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Segment => "segment",
            Platform::Mparticle => "mparticle",
            Platform::Lytics => "lytics",
            Platform::Zeotap => "zeotap",
        }
    }

    pub fn capitalized(&self) -> &'static str {
        match self {
            Platform::Segment => "Segment",
            Platform::Mparticle => "Mparticle",
            Platform::Lytics => "Lytics",
            Platform::Zeotap => "Zeotap",
        }
    }

    /// Spellings that count as a mention of this platform in lowercased text.
    pub fn mention_aliases(&self) -> &'static [&'static str] {
        match self {
            Platform::Segment => &["segment"],
            Platform::Mparticle => &["mparticle", "m particle"],
            Platform::Lytics => &["lytics"],
            Platform::Zeotap => &["zeotap"],
        }
    }

    /// Substring match; `lowercased` must already be lowercase.
    pub fn is_mentioned_in(&self, lowercased: &str) -> bool {
        self.mention_aliases()
            .iter()
            .any(|alias| lowercased.contains(alias))
    }

    fn documentation_host(&self) -> &'static str {
        match self {
            Platform::Segment => "segment.com",
            Platform::Mparticle => "mparticle.com",
            Platform::Lytics => "lytics.com",
            Platform::Zeotap => "zeotap.com",
        }
    }

    pub fn from_url(url: &str) -> Option<Platform> {
        Platform::ALL
            .into_iter()
            .find(|platform| url.contains(platform.documentation_host()))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = AssistantError;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_lowercase();
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == normalized)
            .ok_or_else(|| AssistantError::UnknownPlatform(value.to_string()))
    }
}

/// Which documentation a query is answered against. `All` exists only as a
/// query-side sentinel; documents always carry a concrete [`Platform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Scope {
    #[default]
    All,
    Platform(Platform),
}

impl Scope {
    pub fn platform(&self) -> Option<Platform> {
        match self {
            Scope::All => None,
            Scope::Platform(platform) => Some(*platform),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Platform(platform) => platform.as_str(),
        }
    }

    /// Name used in "refer to the X documentation" sentences.
    pub fn documentation_name(&self) -> &'static str {
        match self {
            Scope::All => "CDP",
            Scope::Platform(platform) => platform.as_str(),
        }
    }

    /// Name used when telling the user where an action is performed.
    pub fn target_name(&self) -> &'static str {
        match self {
            Scope::All => "the selected CDP",
            Scope::Platform(platform) => platform.as_str(),
        }
    }
}

impl From<Platform> for Scope {
    fn from(platform: Platform) -> Self {
        Scope::Platform(platform)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = AssistantError;

    fn from_str(value: &str) -> Result<Self> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Scope::All);
        }
        value.parse::<Platform>().map(Scope::Platform)
    }
}

impl TryFrom<String> for Scope {
    type Error = AssistantError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Scope> for String {
    fn from(scope: Scope) -> Self {
        scope.as_str().to_string()
    }
}
