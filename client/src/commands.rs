//! Command handlers
//!
//! Each handler returns `Ok(true)` when the input was accepted, `Ok(false)`
//! when it was rejected and a message was shown.

use std::io::Write;

use shared::{
    field_messages, submit_soil_form, LoginForm, Region, RegistrationForm, SubmissionOptions,
    Validate, ValidationErrors,
};

use crate::cli::{Command, PredictArgs};
use crate::config::Config;
use crate::error::AppResult;
use crate::external::PredictionClient;
use crate::terminal::{OutputFormat, TerminalView};

/// Dispatch a parsed command
pub async fn run<O: Write, E: Write>(
    command: Command,
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> AppResult<bool> {
    match command {
        Command::Predict(args) => predict(&args, config, out, err).await,
        Command::CheckLogin(args) => check_account(LoginForm::from(&args).validate(), out, err),
        Command::CheckRegister(args) => {
            check_account(RegistrationForm::from(&args).validate(), out, err)
        }
        Command::Regions => {
            for region in Region::ALL {
                writeln!(out, "{}", region)?;
            }
            Ok(true)
        }
    }
}

/// Submit a soil sample and print the recommendation
pub async fn predict<O: Write, E: Write>(
    args: &PredictArgs,
    config: &Config,
    out: &mut O,
    err: &mut E,
) -> AppResult<bool> {
    let client = PredictionClient::new(&config.service)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let options = SubmissionOptions {
        enrich: config.display.enrich && !args.no_enrich,
    };

    let view = TerminalView::new(out, err, format, client.base_url());
    let outcome = submit_soil_form(&client, &view, &args.form_input(), options).await;

    match outcome {
        Ok(result) => {
            tracing::info!(crop = %result.crop, "recommendation received");
            Ok(true)
        }
        Err(e) => {
            tracing::debug!("submission ended without a recommendation: {}", e);
            Ok(false)
        }
    }
}

fn check_account<O: Write, E: Write>(
    result: Result<(), ValidationErrors>,
    out: &mut O,
    err: &mut E,
) -> AppResult<bool> {
    match result {
        Ok(()) => {
            writeln!(out, "OK")?;
            Ok(true)
        }
        Err(errors) => {
            for (field, message) in field_messages(&errors) {
                writeln!(err, "{}: {}", field, message)?;
            }
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{LoginArgs, RegisterArgs};
    use crate::config::{DisplayConfig, LogFormat, ServiceConfig};

    fn config() -> Config {
        Config {
            environment: "test".into(),
            service: ServiceConfig::default(),
            display: DisplayConfig { enrich: true },
            log_format: LogFormat::Pretty,
        }
    }

    async fn run_capture(command: Command) -> (bool, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = run(command, &config(), &mut out, &mut err).await.unwrap();
        (
            ok,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_regions_lists_all() {
        let (ok, out, _) = run_capture(Command::Regions).await;
        assert!(ok);
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("Western Maharashtra\n"));
    }

    #[tokio::test]
    async fn test_check_login_reports_each_field() {
        let (ok, out, err) = run_capture(Command::CheckLogin(LoginArgs {
            email: Some("farmer".into()),
            password: Some("abc12".into()),
        }))
        .await;
        assert!(!ok);
        assert!(out.is_empty());
        assert_eq!(
            err,
            concat!(
                "email: Please enter a valid email address\n",
                "password: Password must be at least 6 characters\n",
            )
        );
    }

    #[tokio::test]
    async fn test_check_register_accepts_valid() {
        let (ok, out, _) = run_capture(Command::CheckRegister(RegisterArgs {
            name: Some("Al".into()),
            email: Some("al@example.com".into()),
            password: Some("abc123".into()),
            confirm_password: Some("abc123".into()),
        }))
        .await;
        assert!(ok);
        assert_eq!(out, "OK\n");
    }
}
