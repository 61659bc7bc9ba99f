use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use mirage_core::{resolve, ResolveResult};
use mirage_traits::ClientHelloPlan;

/// Ready-made browser identities: a JA3 fingerprint paired with the
/// user-agent a real client sends alongside it. Every canned fingerprint
/// stays inside the resolver's supported extension set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpersonationTarget {
    Chrome120,
    Firefox121,
    Safari17,
}

impl ImpersonationTarget {
    pub const ALL: [Self; 3] = [Self::Chrome120, Self::Firefox121, Self::Safari17];

    pub fn ja3(&self) -> &'static str {
        match self {
            Self::Chrome120 => {
                "771,4865-4866-4867-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-18-51-45-43-27-21,29-23-24,0"
            }
            Self::Firefox121 => {
                "771,4865-4867-4866-49195-49199-49196-49200-52393-52392-49171-49172-156-157-47-53,0-23-65281-10-11-35-16-5-13-51-45-43-28,29-23-24-25,0"
            }
            Self::Safari17 => {
                "771,4865-4866-4867-49196-49195-49200-49199-52393-52392-49162-49161-49172-49171-157-156-53-47,0-23-65281-10-11-35-16-5-13-51-45-43,29-23-24,0"
            }
        }
    }

    pub fn user_agent(&self) -> &'static str {
        match self {
            Self::Chrome120 => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36"
            }
            Self::Firefox121 => {
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0"
            }
            Self::Safari17 => {
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15"
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Chrome120 => "chrome_120",
            Self::Firefox121 => "firefox_121",
            Self::Safari17 => "safari_17",
        }
    }

    /// Resolves the canned fingerprint into a construction plan.
    pub fn plan(&self) -> ResolveResult<ClientHelloPlan> {
        resolve(self.ja3(), self.user_agent())
    }
}

impl fmt::Display for ImpersonationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ImpersonationTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" | "chrome120" | "chrome_120" => Ok(Self::Chrome120),
            "firefox" | "firefox121" | "firefox_121" => Ok(Self::Firefox121),
            "safari" | "safari17" | "safari_17" => Ok(Self::Safari17),
            other => anyhow::bail!("unknown impersonation target: {other}"),
        }
    }
}
