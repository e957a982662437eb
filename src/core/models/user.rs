//! Connected user model

use super::{display_date, Timestamped};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a user connected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// `MetaMask` wallet
    Metamask,
    /// Coinbase wallet
    Coinbase,
    /// Trust Wallet
    Trustwallet,
    /// Phantom wallet
    Phantom,
    /// Google social login
    Google,
    /// Facebook social login
    Facebook,
    /// X social login
    X,
    /// Email login
    Email,
}

/// Broad grouping of connection types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionGroup {
    /// Browser or mobile wallet
    Wallet,
    /// Social login provider
    Social,
    /// Email login
    Email,
}

impl ConnectionType {
    /// All connection types
    pub const ALL: [Self; 8] = [
        Self::Metamask,
        Self::Coinbase,
        Self::Trustwallet,
        Self::Phantom,
        Self::Google,
        Self::Facebook,
        Self::X,
        Self::Email,
    ];

    /// Lowercase identifier as stored
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metamask => "metamask",
            Self::Coinbase => "coinbase",
            Self::Trustwallet => "trustwallet",
            Self::Phantom => "phantom",
            Self::Google => "google",
            Self::Facebook => "facebook",
            Self::X => "x",
            Self::Email => "email",
        }
    }

    /// Table label: identifier with the first letter capitalised
    #[must_use]
    pub fn label(self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars).collect()
        })
    }

    /// Group of this connection type
    #[must_use]
    pub const fn group(self) -> ConnectionGroup {
        match self {
            Self::Metamask | Self::Coinbase | Self::Trustwallet | Self::Phantom => {
                ConnectionGroup::Wallet
            }
            Self::Google | Self::Facebook | Self::X => ConnectionGroup::Social,
            Self::Email => ConnectionGroup::Email,
        }
    }

    /// Wallet connections identify users by address
    #[must_use]
    pub const fn is_wallet(self) -> bool {
        matches!(self.group(), ConnectionGroup::Wallet)
    }
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Recently active
    Active,
    /// Dormant
    Inactive,
}

impl UserStatus {
    /// Lowercase status label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A connected user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable id (`user-N`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Connection method
    pub connection_type: ConnectionType,
    /// Wallet address, email, or social handle
    pub identifier: String,
    /// First connection
    pub first_connected: DateTime<Utc>,
    /// Most recent connection; used for date filtering
    pub last_connected: DateTime<Utc>,
    /// Activity status
    pub status: UserStatus,
}

impl User {
    /// Identifier as shown in the table: wallet addresses are shortened to
    /// the first 6 and last 4 characters.
    #[must_use]
    pub fn display_identifier(&self) -> String {
        let chars: Vec<char> = self.identifier.chars().collect();
        if !self.connection_type.is_wallet() || chars.len() <= 10 {
            return self.identifier.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    }

    /// First connection formatted for tables
    #[must_use]
    pub fn first_connected_display(&self) -> String {
        display_date(self.first_connected)
    }

    /// Last connection formatted for tables
    #[must_use]
    pub fn last_connected_display(&self) -> String {
        display_date(self.last_connected)
    }
}

impl Timestamped for User {
    fn timestamp(&self) -> DateTime<Utc> {
        self.last_connected
    }
}
