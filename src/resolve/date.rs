use crate::error::LookupFailure;
use crate::io::{Host, VersionControl};
use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

/// Creation date of `file`: first commit, then filesystem birth time, then today.
pub fn resolve_date(
    file: &Path,
    vcs: &dyn VersionControl,
    host: &dyn Host,
) -> NaiveDate {
    vcs.first_commit_log(file)
        .and_then(|log| parse_log_date(&log))
        .inspect_err(|e| debug!("no commit date for {}: {e}", file.display()))
        .or_else(|_| host.creation_date(file))
        .inspect_err(|e| debug!("no creation time for {}: {e}", file.display()))
        .unwrap_or_else(|_| host.today())
}

/// Date part of the first line of `log --date=iso` output.
pub fn parse_log_date(log: &str) -> Result<NaiveDate, LookupFailure> {
    let first = log
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or(LookupFailure::EmptyOutput)?;
    let date = first.split_whitespace().next().unwrap_or(first);
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| LookupFailure::Parse(first.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_and_zone_are_dropped() {
        let d = parse_log_date("2021-03-04 00:00:00 +0000\n").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2021, 3, 4).unwrap());
    }

    #[test]
    fn oldest_commit_is_the_first_line() {
        let log = "\n2019-11-30 23:59:59 -0800\n2020-01-02 10:00:00 +0100\n";
        assert_eq!(
            parse_log_date(log).unwrap(),
            NaiveDate::from_ymd_opt(2019, 11, 30).unwrap()
        );
    }

    #[test]
    fn garbage_is_a_parse_failure() {
        assert!(matches!(parse_log_date("fatal: not a git repository"), Err(LookupFailure::Parse(_))));
        assert!(matches!(parse_log_date("   \n"), Err(LookupFailure::EmptyOutput)));
    }
}
