// Command line interface

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use tracing::warn;

use crate::features::report::ReportRequest;
use crate::models::item::DateWindow;
use crate::utils::config::{self, env_keys, DEFAULT_OUTPUT, QIITA_API_BASE};

#[derive(Parser, Debug)]
#[command(
    name = "qiita-contrib",
    version,
    about = "Retrieve information via Qiita API v2 and calculate simplified Qiita Contribution"
)]
pub struct Cli {
    /// Qiita Personal Access Token
    #[arg(short, long, env = env_keys::TOKEN, hide_env_values = true)]
    pub token: String,

    /// Qiita User IDs (comma separated)
    #[arg(short, long)]
    pub users: String,

    /// The day to start counting items (YYYYMMDD, default: unlimited)
    #[arg(short, long, value_parser = parse_date_arg)]
    pub start: Option<NaiveDate>,

    /// The day to finish counting items (YYYYMMDD, default: unlimited)
    #[arg(short, long, value_parser = parse_date_arg)]
    pub end: Option<NaiveDate>,

    /// The output CSV filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Qiita API root
    #[arg(long, env = env_keys::API_URL, default_value = QIITA_API_BASE)]
    pub base_url: String,

    /// Item fetches allowed in flight at once (1 = sequential)
    #[arg(short = 'j', long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    config::parse_date(value).map_err(|e| e.to_string())
}

/// Split the --users value on commas and trim each id.
/// Empty entries are dropped, duplicates are kept.
pub fn parse_user_ids(users: &str) -> Vec<String> {
    users
        .split(',')
        .map(str::trim)
        .filter(|id| {
            if id.is_empty() {
                warn!("Ignoring empty user id in --users");
            }
            !id.is_empty()
        })
        .map(str::to_string)
        .collect()
}

impl Cli {
    /// Start is inclusive from 00:00:00, end inclusive through 23:59:59
    pub fn window(&self) -> DateWindow {
        DateWindow::new(
            self.start.map(config::start_of_day),
            self.end.map(config::end_of_day),
        )
    }

    pub fn report_request(&self) -> ReportRequest {
        ReportRequest {
            user_ids: parse_user_ids(&self.users),
            window: self.window(),
            output: self.output.clone(),
            concurrency: usize::from(self.concurrency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["qiita-contrib", "--token", "t"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--users", "alice"]);
        assert_eq!(cli.output, PathBuf::from("qiita_contributions.csv"));
        assert_eq!(cli.concurrency, 1);
        assert_eq!(cli.window(), DateWindow::default());
    }

    #[test]
    fn test_user_ids_are_trimmed_and_kept_in_order() {
        assert_eq!(parse_user_ids(" alice, bob ,alice"), vec!["alice", "bob", "alice"]);
        assert_eq!(parse_user_ids("alice,,bob,"), vec!["alice", "bob"]);
    }

    #[test]
    fn test_end_is_normalized_to_end_of_day() {
        let cli = parse(&["-u", "alice", "-s", "20231201", "-e", "20240101"]);
        let window = cli.window();
        assert_eq!(window.start.unwrap().to_string(), "2023-12-01 00:00:00");
        assert_eq!(window.end.unwrap().to_string(), "2024-01-01 23:59:59");
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let argv = ["qiita-contrib", "-t", "t", "-u", "alice", "--start", "2024-01-01"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let argv = ["qiita-contrib", "-t", "t", "-u", "alice", "-j", "0"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_report_request() {
        let cli = parse(&["-u", "alice,bob", "-o", "out.csv", "-j", "4"]);
        let request = cli.report_request();
        assert_eq!(request.user_ids, vec!["alice", "bob"]);
        assert_eq!(request.output, PathBuf::from("out.csv"));
        assert_eq!(request.concurrency, 4);
    }
}
