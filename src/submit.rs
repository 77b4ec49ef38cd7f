//! One-way submission of chart inputs to a spreadsheet web hook.
//!
//! Submission is fire-and-forget: a disabled or failing hook logs the
//! outcome and reports `false`, it never interrupts the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::branch::Branch;
use crate::date::CivilDate;

/// Gender as recorded on the sheet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "男")]
    Male,
    #[serde(rename = "女")]
    Female,
}

/// One submitted record: birth date, birth hour (as its branch name) and
/// gender, stamped with the submission time.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    /// RFC 3339 submission timestamp
    pub timestamp: String,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 地支 name of the birth hour
    pub hour: &'static str,
    pub gender: Gender,
}

impl SubmissionRecord {
    /// Builds a record for `date`, `branch` and `gender`, stamped with the
    /// current UTC time.
    pub fn new(date: CivilDate, branch: Branch, gender: Gender) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            year: date.year(),
            month: date.month(),
            day: date.day(),
            hour: branch.name(),
            gender,
        }
    }
}

/// A sink accepting records one way.
///
/// Delivery is best-effort; the return value reports whether the record went
/// out, never an error.
pub trait SubmissionSink {
    fn submit(&self, record: &SubmissionRecord) -> bool;
}

/// Web-hook endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    /// URL of the web app receiving the POSTed records
    pub url: String,
    /// Submissions are skipped (and logged) while disabled
    #[serde(default)]
    pub enabled: bool,
}

/// Sink POSTing each record as JSON to a configured web hook.
pub struct Webhook {
    config: WebhookConfig,
    client: reqwest::blocking::Client,
}

impl Webhook {
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            config,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl SubmissionSink for Webhook {
    fn submit(&self, record: &SubmissionRecord) -> bool {
        if !self.config.enabled {
            debug!(?record, "web hook disabled, record not submitted");
            return false;
        }
        match self.client.post(&self.config.url).json(record).send() {
            Ok(_) => {
                debug!("record submitted");
                true
            }
            Err(err) => {
                warn!(%err, "record submission failed");
                false
            }
        }
    }
}

/// Fallback sink that only logs the serialized record.
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&self, record: &SubmissionRecord) -> bool {
        match serde_json::to_string(record) {
            Ok(json) => debug!(%json, "record logged, not submitted"),
            Err(err) => warn!(%err, "record could not be serialized"),
        }
        false
    }
}
