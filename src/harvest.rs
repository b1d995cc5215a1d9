use reqwest::StatusCode;
use reqwest::blocking::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::dates::DateRange;
use crate::models::{TeamMember, TimeReport};

pub const DEFAULT_BASE_URL: &str = "https://api.harvestapp.com/v2";
pub const USER_AGENT: &str = "harvest-hours (self@travisfantina.com)";

#[derive(Debug, Clone, Error)]
pub enum HarvestError {
    #[error("failed to create request: {0}")]
    Request(String),
    #[error("failed to make request: {0}")]
    Network(String),
    #[error("API request failed with status: {0}")]
    Status(String),
    #[error("failed to read response body: {0}")]
    Body(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Anything that can produce a team time report for a date range.
pub trait ReportSource {
    fn team_report(&self, range: &DateRange) -> Result<TimeReport, HarvestError>;

    /// Report entry for `user_name`, or `None` when the user logged nothing.
    fn member_hours(
        &self,
        range: &DateRange,
        user_name: &str,
    ) -> Result<Option<TeamMember>, HarvestError> {
        let report = self.team_report(range)?;
        Ok(find_member(report, user_name))
    }
}

#[derive(Clone)]
pub struct HarvestClient {
    client: Client,
    access_token: String,
    account_id: String,
    base_url: String,
}

impl HarvestClient {
    pub fn new(access_token: String, account_id: String) -> Result<Self, HarvestError> {
        Self::with_base_url(access_token, account_id, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(
        access_token: String,
        account_id: String,
        base_url: impl Into<String>,
    ) -> Result<Self, HarvestError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| HarvestError::Request(err.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            access_token,
            account_id,
            base_url,
        })
    }
}

impl ReportSource for HarvestClient {
    fn team_report(&self, range: &DateRange) -> Result<TimeReport, HarvestError> {
        let (from, to) = range.query_bounds();
        let base = format!("{}/reports/time/team", self.base_url);
        let url = reqwest::Url::parse_with_params(&base, &[("from", &from), ("to", &to)])
            .map_err(|err| HarvestError::Request(err.to_string()))?;

        debug!(account_id = %self.account_id, %from, %to, "requesting team time report");

        let response = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Harvest-Account-Id", &self.account_id)
            .send()
            .map_err(|err| HarvestError::Network(err.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(HarvestError::Status(response.status().to_string()));
        }

        let body = response
            .text()
            .map_err(|err| HarvestError::Body(err.to_string()))?;
        let report: TimeReport =
            serde_json::from_str(&body).map_err(|err| HarvestError::Decode(err.to_string()))?;

        if report.total_pages > 1 {
            warn!(
                account_id = %self.account_id,
                total_pages = report.total_pages,
                total_entries = report.total_entries,
                per_page = report.per_page,
                "team report spans several pages, only the first page is used"
            );
        }
        debug!(entries = report.results.len(), "decoded team time report");

        Ok(report)
    }
}

pub fn find_member(report: TimeReport, user_name: &str) -> Option<TeamMember> {
    report
        .results
        .into_iter()
        .find(|member| member.user_name == user_name)
}
