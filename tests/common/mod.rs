#![allow(dead_code)]
use chrono::NaiveDate;
use mdheader::{
    LookupFailure,
    io::{Document, Host, VersionControl},
};
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

pub fn ymd(
    y: i32,
    m: u32,
    d: u32,
) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Scripted version-control answers. `None` means the lookup fails.
#[derive(Default)]
pub struct FakeVcs {
    pub log: Option<String>,
    pub metadata_dir: Option<PathBuf>,
    pub config: HashMap<String, String>,
}

impl FakeVcs {
    pub fn repo(metadata_dir: &str) -> Self {
        FakeVcs {
            metadata_dir: Some(PathBuf::from(metadata_dir)),
            ..Default::default()
        }
    }

    pub fn with_log(
        mut self,
        log: &str,
    ) -> Self {
        self.log = Some(log.to_string());
        self
    }

    pub fn with_config(
        mut self,
        key: &str,
        value: &str,
    ) -> Self {
        self.config.insert(key.to_string(), value.to_string());
        self
    }
}

impl VersionControl for FakeVcs {
    fn first_commit_log(
        &self,
        _file: &Path,
    ) -> Result<String, LookupFailure> {
        self.log.clone().ok_or(LookupFailure::EmptyOutput)
    }

    fn metadata_dir(
        &self,
        _dir: &Path,
    ) -> Result<PathBuf, LookupFailure> {
        self.metadata_dir
            .clone()
            .ok_or_else(|| LookupFailure::NotFound("repository".to_string()))
    }

    fn config_value(
        &self,
        _repo_root: &Path,
        key: &str,
    ) -> Result<String, LookupFailure> {
        self.config
            .get(key)
            .cloned()
            .ok_or_else(|| LookupFailure::NotFound(key.to_string()))
    }
}

pub struct FakeHost {
    pub created: Option<NaiveDate>,
    pub user: Option<String>,
    pub today: NaiveDate,
}

impl Default for FakeHost {
    fn default() -> Self {
        FakeHost {
            created: None,
            user: Some("osuser".to_string()),
            today: ymd(2023, 6, 15),
        }
    }
}

impl Host for FakeHost {
    fn creation_date(
        &self,
        _path: &Path,
    ) -> Result<NaiveDate, LookupFailure> {
        self.created
            .ok_or_else(|| LookupFailure::NotFound("birth time".to_string()))
    }

    fn os_user(&self) -> Result<String, LookupFailure> {
        self.user
            .clone()
            .ok_or_else(|| LookupFailure::NotFound("user".to_string()))
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}

/// In-memory document that records what was inserted.
pub struct MemoryDocument {
    pub path: PathBuf,
    pub language_id: String,
    pub text: String,
    pub inserts: usize,
}

impl MemoryDocument {
    pub fn new(
        path: &str,
        language_id: &str,
        text: &str,
    ) -> Self {
        MemoryDocument {
            path: PathBuf::from(path),
            language_id: language_id.to_string(),
            text: text.to_string(),
            inserts: 0,
        }
    }
}

impl Document for MemoryDocument {
    fn path(&self) -> &Path {
        &self.path
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn insert_at_start(
        &mut self,
        text: &str,
    ) -> std::io::Result<()> {
        self.text.insert_str(0, text);
        self.inserts += 1;
        Ok(())
    }
}
