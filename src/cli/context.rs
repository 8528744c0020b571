//! Per-invocation context: configuration merged with global CLI flags.

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::TimeClock;
use crate::errors::{AppError, AppResult};
use crate::models::employee_id::EmployeeId;
use crate::store::{MemoryStore, SqliteStore, Store};
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};

pub struct RunContext {
    pub cfg: Config,
    pub now: DateTime<Utc>,
    pub employee: Option<EmployeeId>,
    pub memory: bool,
    pub test: bool,
}

impl RunContext {
    pub fn from_cli(cli: &Cli, mut cfg: Config) -> AppResult<Self> {
        if let Some(custom_db) = &cli.db {
            cfg.database = custom_db.clone();
        }

        let now = match &cli.at {
            Some(at) => parse_timestamp(at)?,
            None => Utc::now(),
        };

        let employee = match cli.employee.as_deref().or(cfg.employee.as_deref()) {
            Some(raw) => Some(EmployeeId::parse(raw)?),
            None => None,
        };

        Ok(Self {
            cfg,
            now,
            employee,
            memory: cli.memory,
            test: cli.test,
        })
    }

    /// The acting employee; required by every clock command.
    pub fn employee(&self) -> AppResult<EmployeeId> {
        self.employee.clone().ok_or_else(|| {
            AppError::InvalidEmployee(
                "no employee given: use --employee or set `employee` in the configuration".into(),
            )
        })
    }

    pub fn open_store(&self) -> AppResult<Box<dyn Store>> {
        if self.memory {
            Ok(Box::new(MemoryStore::new()))
        } else {
            Ok(Box::new(SqliteStore::open(&self.cfg.database)?))
        }
    }

    pub fn open_clock(&self) -> AppResult<TimeClock<Box<dyn Store>>> {
        Ok(TimeClock::with_policy(self.open_store()?, self.cfg.policy()))
    }
}
