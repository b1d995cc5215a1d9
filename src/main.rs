use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

mod cli;
mod credentials;
mod dates;
mod harvest;
mod logging;
mod models;
mod storage;
mod summary;

use cli::Args;
use credentials::Credentials;
use dates::PeriodRanges;
use harvest::{HarvestClient, HarvestError};
use storage::{DEFAULT_GOAL_HOURS, DEFAULT_TARGET_USER};
use summary::{Account, Summary};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::enable_logging(args.verbose);

    credentials::load_env_file(args.env_file.as_deref())?;
    let credentials = Credentials::from_env()?;

    let settings = storage::read_settings();
    let target_user = args
        .user
        .or_else(|| settings.target_user.clone())
        .unwrap_or_else(|| DEFAULT_TARGET_USER.to_string());
    let goal_hours = args
        .goal
        .or(settings.goal_hours)
        .unwrap_or(DEFAULT_GOAL_HOURS);

    let accounts = credentials
        .accounts
        .into_iter()
        .enumerate()
        .map(|(index, account)| -> Result<Account<HarvestClient>, HarvestError> {
            let source = match &settings.base_url {
                Some(base_url) => HarvestClient::with_base_url(
                    account.access_token,
                    account.account_id,
                    base_url.as_str(),
                )?,
                None => HarvestClient::new(account.access_token, account.account_id)?,
            };
            Ok(Account {
                label: settings.account_label(index),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to build Harvest client")?;

    let ranges = PeriodRanges::for_day(args.as_of.unwrap_or_else(dates::today));

    let hours = match summary::fetch_all(&accounts, &ranges, &target_user) {
        Ok(hours) => hours,
        Err(errors) => {
            for failure in &errors.failures {
                error!(account = %failure.account, period = %failure.period, "{}", failure.source);
            }
            return Err(errors).context("Error fetching time report");
        }
    };

    let report = Summary::build(&hours, goal_hours);
    print!("{}", summary::render(&report, &ranges.week));

    Ok(())
}
