//! Configuration from environment variables and command-line arguments.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, bail};
use forum_core::PolicyConfig;
use forum_core::diff::DifferenceBaseline;
use forum_core::domain::{Timestamp, UserId};

use crate::telemetry::TelemetryConfig;

/// Settings read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub telemetry: TelemetryConfig,
    pub policy: PolicyConfig,
    /// Evaluate as of this epoch second instead of the wall clock.
    pub now: Option<Timestamp>,
    /// Use Redis for the view cache when set.
    pub redis_url: Option<String>,
}

impl InspectConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = PolicyConfig::default();
        let difference_baseline: DifferenceBaseline = match env::var("DIFF_BASELINE") {
            Ok(value) => value.parse().map_err(anyhow::Error::msg)?,
            Err(_) => defaults.difference_baseline,
        };

        Ok(Self {
            telemetry: TelemetryConfig::from_env(),
            policy: PolicyConfig {
                difference_baseline,
                diff_context_lines: env::var("DIFF_CONTEXT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(defaults.diff_context_lines),
            },
            now: env::var("INSPECT_NOW")
                .ok()
                .map(|s| s.parse().context("INSPECT_NOW must be epoch seconds"))
                .transpose()?,
            redis_url: env::var("REDIS_URL").ok(),
        })
    }
}

/// Command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectArgs {
    pub fixture: PathBuf,
    pub viewer: Option<UserId>,
    pub diff: bool,
    /// Render the diff as two text columns of this width instead of JSON.
    pub text_width: Option<usize>,
}

pub const USAGE: &str =
    "usage: post-inspect <fixture.json> [--viewer <user-id>] [--diff] [--text <width>]";

impl InspectArgs {
    pub fn parse(args: impl IntoIterator<Item = String>) -> anyhow::Result<Self> {
        let mut fixture = None;
        let mut viewer = None;
        let mut diff = false;
        let mut text_width = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--viewer" => {
                    let value = args.next().context("--viewer needs a user id")?;
                    viewer = Some(value.parse().context("--viewer must be a number")?);
                }
                "--diff" => diff = true,
                "--text" => {
                    let value = args.next().context("--text needs a width")?;
                    text_width = Some(value.parse().context("--text must be a number")?);
                    diff = true;
                }
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                path if fixture.is_none() => fixture = Some(PathBuf::from(path)),
                extra => bail!("unexpected argument {extra}\n{USAGE}"),
            }
        }

        Ok(Self {
            fixture: fixture.context(USAGE)?,
            viewer,
            diff,
            text_width,
        })
    }
}
