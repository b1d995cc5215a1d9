use thiserror::Error;
use tracing::{info, warn};

use crate::dates::{DateRange, Period, PeriodRanges};
use crate::harvest::{HarvestError, ReportSource};
use crate::models::TeamMember;

pub struct Account<S> {
    pub label: String,
    pub source: S,
}

#[derive(Debug, Clone)]
pub struct AccountHours {
    pub label: String,
    pub month: Option<TeamMember>,
    pub week: Option<TeamMember>,
    pub day: Option<TeamMember>,
}

impl AccountHours {
    fn new(label: String) -> Self {
        Self {
            label,
            month: None,
            week: None,
            day: None,
        }
    }

    fn slot(&mut self, period: Period) -> &mut Option<TeamMember> {
        match period {
            Period::Month => &mut self.month,
            Period::Week => &mut self.week,
            Period::Day => &mut self.day,
        }
    }

    pub fn get(&self, period: Period) -> Option<&TeamMember> {
        match period {
            Period::Month => self.month.as_ref(),
            Period::Week => self.week.as_ref(),
            Period::Day => self.day.as_ref(),
        }
    }
}

#[derive(Debug, Error)]
#[error("{account} {period} report: {source}")]
pub struct FetchFailure {
    pub account: String,
    pub period: Period,
    pub source: HarvestError,
}

#[derive(Debug, Error)]
#[error("{count} of {total} time report requests failed", count = .failures.len())]
pub struct FetchErrors {
    pub failures: Vec<FetchFailure>,
    pub total: usize,
}

/// Runs every account/period fetch, failing if any single request failed.
pub fn fetch_all<S: ReportSource>(
    accounts: &[Account<S>],
    ranges: &PeriodRanges,
    target_user: &str,
) -> Result<Vec<AccountHours>, FetchErrors> {
    let mut hours: Vec<AccountHours> = accounts
        .iter()
        .map(|account| AccountHours::new(account.label.clone()))
        .collect();
    let mut failures = Vec::new();
    let mut total = 0;

    for period in Period::ALL {
        let range = ranges.get(period);
        let (from, to) = range.query_bounds();
        for (account, collected) in accounts.iter().zip(hours.iter_mut()) {
            total += 1;
            info!(account = %account.label, %period, %from, %to, "fetching team time report");
            match account.source.member_hours(range, target_user) {
                Ok(member) => {
                    if member.is_none() {
                        info!(account = %account.label, %period, target_user, "target user not in report");
                    }
                    *collected.slot(period) = member;
                }
                Err(source) => failures.push(FetchFailure {
                    account: account.label.clone(),
                    period,
                    source,
                }),
            }
        }
    }

    if failures.is_empty() {
        Ok(hours)
    } else {
        Err(FetchErrors { failures, total })
    }
}

#[derive(Debug, Clone)]
pub struct AccountMonth {
    pub label: String,
    pub hours: f64,
}

#[derive(Debug, Clone)]
pub struct Summary {
    pub day_total: f64,
    pub week_total: f64,
    pub month_total: f64,
    pub accounts: Vec<AccountMonth>,
    pub goal_hours: f64,
}

impl Summary {
    pub fn build(hours: &[AccountHours], goal_hours: f64) -> Self {
        let accounts = hours
            .iter()
            .map(|account| {
                let hours = match &account.month {
                    Some(member) => member.total_hours,
                    None => {
                        warn!(account = %account.label, "no month entry for target user, counting 0 hours");
                        0.0
                    }
                };
                AccountMonth {
                    label: account.label.clone(),
                    hours,
                }
            })
            .collect();

        Self {
            day_total: positive_total(hours, Period::Day),
            week_total: positive_total(hours, Period::Week),
            month_total: positive_total(hours, Period::Month),
            accounts,
            goal_hours,
        }
    }

    pub fn remaining(&self) -> f64 {
        self.goal_hours - self.month_total
    }
}

fn positive_total(hours: &[AccountHours], period: Period) -> f64 {
    hours
        .iter()
        .filter_map(|account| account.get(period))
        .map(|member| member.total_hours)
        .filter(|value| *value > 0.0)
        .sum()
}

pub fn render(summary: &Summary, week: &DateRange) -> String {
    let (week_from, week_to) = week.query_bounds();
    // Week bounds are printed back to back, directly ahead of the first line.
    let mut out = format!("{week_from}{week_to}");
    out.push_str(&format!("Hours Today: {:.2}\n", summary.day_total));
    out.push_str(&format!("Hours Week: {:.2}\n", summary.week_total));
    out.push_str("----------\n");
    for account in &summary.accounts {
        out.push_str(&format!("{} {:.2}\n", account.label, account.hours));
    }
    out.push('\n');
    out.push_str(&format!("Grand Total: {:.2}\n", summary.month_total));
    out.push_str(&format!("Remaining To Goal: {:.2}\n", summary.remaining()));
    out
}
