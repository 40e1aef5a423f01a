// Core data structures for the kickoff client

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Football player record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub position: Option<String>,
    pub nationality: Option<String>,
    pub jersey_number: Option<u8>,
    pub date_of_birth: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub team: Option<TeamRef>,
    #[serde(default)]
    pub stats: PlayerStats,
}

impl Player {
    /// Age in whole years on the given date
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let born = self.date_of_birth?;
        let mut age = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }
}

/// Season statistics attached to a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub appearances: u32,
    pub goals: u32,
    pub assists: u32,
}

/// Team reference embedded in a player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

/// Football team record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    pub league: Option<String>,
    pub founded: Option<u16>,
    pub logo_url: Option<String>,
}

/// Comment left on a player profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(alias = "_id")]
    pub id: String,
    pub content: String,
    pub player_id: Option<String>,
    pub author: Option<AccountRef>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Account reference embedded in a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRef {
    #[serde(alias = "_id")]
    pub id: String,
    pub name: String,
}

/// Member account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: AccountRole,
    pub created_at: Option<DateTime<Utc>>,
}

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    #[default]
    Member,
    Admin,
}

/// Bearer credentials issued by the auth endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: Option<String>,
}

/// Sign-in / sign-up response payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    #[serde(flatten)]
    pub tokens: AuthTokens,
    pub account: Option<Account>,
}

/// Server-side pagination metadata
///
/// Taken verbatim from the response; never recomputed locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub page_size: u32,
}

impl PaginationInfo {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// One page of the player listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayerPage {
    #[serde(alias = "players")]
    pub items: Vec<Player>,
    pub pagination: PaginationInfo,
}

/// Team listing payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeamList {
    #[serde(alias = "teams")]
    pub items: Vec<Team>,
}

// ============================================================================
// Query Types
// ============================================================================

/// Filter snapshot for the player listing
///
/// Empty search text and empty team id mean "no filter" and are omitted from
/// the query string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Default)]
pub struct PlayerQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    pub page: u32,
    pub limit: u32,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl PlayerQuery {
    pub fn new(search: &str, team: &str, page: u32, limit: u32) -> Self {
        Self {
            search: non_empty(search),
            team: non_empty(team),
            page: page.max(1),
            limit,
        }
    }
}

/// Filter for the team listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct TeamQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl TeamQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn matching(search: &str) -> Self {
        Self {
            search: non_empty(search),
        }
    }
}

// ============================================================================
// Request Payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Partial player update; absent fields are left untouched
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jersey_number: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub league: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub founded: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshRequest {
    pub refresh_token: String,
}
