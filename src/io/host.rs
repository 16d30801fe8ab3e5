use super::Host;
use crate::error::LookupFailure;
use chrono::{DateTime, Local, NaiveDate};
use std::{fs, path::Path};

/// `Host` backed by the local filesystem, environment and clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalHost;

const USER_VARS: &[&str] = &["USER", "LOGNAME", "USERNAME"];

impl Host for LocalHost {
    fn creation_date(
        &self,
        path: &Path,
    ) -> Result<NaiveDate, LookupFailure> {
        let created = fs::metadata(path)?.created()?;
        Ok(DateTime::<Local>::from(created).date_naive())
    }

    fn os_user(&self) -> Result<String, LookupFailure> {
        USER_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .map(|name| name.trim().to_string())
            .find(|name| !name.is_empty())
            .ok_or_else(|| LookupFailure::NotFound("OS user name".to_string()))
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
