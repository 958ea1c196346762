//! Command Handlers
//!
//! Handler functions for CLI commands.

use crate::commands::{Cli, Commands, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::{output, session};
use rewards_client::{load_reward, redeem_input, AuthContext, IssuanceFlow, RewardsClient};
use rewards_core::RewardId;
use rewards_scan::{Capture, ImageFileSource, RewardQr, ScanError, ScanSession};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Run the CLI with parsed arguments
pub async fn run(cli: Cli) -> CliResult<()> {
    let session_path = cli
        .session_file
        .clone()
        .unwrap_or_else(session::default_path);

    let auth = Arc::new(match session::load(&session_path)? {
        Some(token) => AuthContext::with_token(token),
        None => AuthContext::anonymous(),
    });
    let client = RewardsClient::new(&cli.api_url, auth.clone())
        .map_err(CliError::from)?;

    match cli.command {
        Commands::Review {
            review_delay_ms,
            retries,
        } => handle_review(&client, &cli.review_url, review_delay_ms, retries, cli.format).await,
        Commands::Show { reward_id, save_qr } => {
            handle_show(&client, &reward_id, save_qr, cli.format).await
        }
        Commands::Login { email, password } => {
            handle_login(&client, &session_path, &email, &password).await
        }
        Commands::Logout => handle_logout(&auth, &session_path),
        Commands::Redeem { code } => handle_redeem(&client, &code, cli.format).await,
        Commands::Scan { image } => handle_scan(&client, image, cli.format).await,
        Commands::Stats => handle_stats(&client, cli.format).await,
    }
}

/// Review hand-off, fixed delay, then issuance.
///
/// The flow is trust-based: there is no verification that a review was
/// posted, only the hand-off and the configured delay.
async fn handle_review(
    client: &RewardsClient,
    review_url: &str,
    review_delay_ms: u64,
    retries: u32,
    format: OutputFormat,
) -> CliResult<()> {
    output::print_info("Leave us a review at:");
    output::print_info(&format!("  {}", review_url));
    output::print_info("");
    output::print_info("Claiming your reward...");

    tokio::time::sleep(Duration::from_millis(review_delay_ms)).await;

    let mut flow = IssuanceFlow::new(client);
    let mut attempts_left = retries;
    let reward_id = loop {
        let attempt = if flow.state().is_checking() {
            flow.run().await
        } else {
            // Retry recomputes the fingerprint from scratch.
            flow.retry().await
        };
        match attempt {
            Ok(reward_id) => break reward_id,
            Err(e) if attempts_left > 0 => {
                attempts_left -= 1;
                output::print_warning(&format!("{} ({} attempts left)", e, attempts_left + 1));
            }
            Err(e) => return Err(e.into()),
        }
    };

    output::print_info(&format!("Reward generated: {}", reward_id));
    output::print_info("");
    show_reward(client, &reward_id, None, format).await
}

/// Handle the show command
async fn handle_show(
    client: &RewardsClient,
    reward_id: &str,
    save_qr: Option<PathBuf>,
    format: OutputFormat,
) -> CliResult<()> {
    let reward_id = reward_id.trim();
    if reward_id.is_empty() {
        return Err(CliError::invalid_arg("reward id must not be empty"));
    }
    show_reward(client, &RewardId::new(reward_id), save_qr, format).await
}

async fn show_reward(
    client: &RewardsClient,
    reward_id: &RewardId,
    save_qr: Option<PathBuf>,
    format: OutputFormat,
) -> CliResult<()> {
    let view = load_reward(client, reward_id).await?;
    let qr = RewardQr::encode(&view.qr_payload)?;

    if let Some(path) = save_qr {
        qr.save_png(&path, 8)?;
        output::print_info(&format!("QR code written to {}", path.display()));
    }

    output::print_reward(&view, &qr.to_unicode(), format);
    Ok(())
}

/// Handle staff login
async fn handle_login(
    client: &RewardsClient,
    session_path: &Path,
    email: &str,
    password: &str,
) -> CliResult<()> {
    let token = client.login(email, password).await?;
    session::save(session_path, &token)?;
    output::print_info("Logged in.");
    Ok(())
}

/// Handle staff logout
fn handle_logout(auth: &Arc<AuthContext>, session_path: &Path) -> CliResult<()> {
    auth.clear();
    session::clear(session_path)?;
    output::print_info("Logged out.");
    Ok(())
}

/// Handle manual redemption
async fn handle_redeem(client: &RewardsClient, code: &str, format: OutputFormat) -> CliResult<()> {
    if code.trim().is_empty() {
        return Err(CliError::invalid_arg("reward code must not be empty"));
    }
    let outcome = match redeem_input(client, code).await {
        Ok(outcome) => outcome,
        Err(e) => return Err(login_hint(e)),
    };
    output::print_redemption(&outcome, format);
    Ok(())
}

/// Interactive scan loop: one manually triggered capture per attempt.
///
/// The capture device is a still image the operator refreshes (phone
/// camera app, webcam utility); every Enter re-reads and decodes it.
async fn handle_scan(client: &RewardsClient, image: PathBuf, format: OutputFormat) -> CliResult<()> {
    let mut scan = ScanSession::open(Box::new(ImageFileSource::new(image)));

    output::print_info("Scan mode: press Enter to capture, q to quit.");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().eq_ignore_ascii_case("q") {
            break;
        }

        match scan.capture() {
            Ok(Capture::Found(payload)) => {
                let outcome = match redeem_input(client, &payload).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        scan.stop();
                        return Err(login_hint(e));
                    }
                };
                output::print_redemption(&outcome, format);
                // Reset for the next customer.
                output::print_info("");
                output::print_info("Ready for next scan. Press Enter to capture, q to quit.");
            }
            Ok(Capture::NothingDetected) => {
                output::print_info("No QR code detected. Adjust the capture and try again.");
            }
            Err(e @ ScanError::SourceUnavailable { .. }) => {
                // Fatal to the session; the session has already stopped.
                output::print_warning("Capture source unavailable.");
                output::print_info("Fall back to manual entry: rewards redeem <code>");
                return Err(e.into());
            }
            Err(e) => {
                scan.stop();
                return Err(e.into());
            }
        }
    }

    scan.stop();
    Ok(())
}

/// Handle the stats command
async fn handle_stats(client: &RewardsClient, format: OutputFormat) -> CliResult<()> {
    match client.stats().await {
        Ok(stats) => {
            output::print_stats(&stats, format);
            Ok(())
        }
        Err(e) => Err(login_hint(e)),
    }
}

/// Surface 401s with a login hint; staff commands need a session.
fn login_hint(error: rewards_client::ClientError) -> CliError {
    if error.status() == Some(401) {
        output::print_info("Session missing or expired. Run `rewards login` first.");
    }
    error.into()
}
