//! Output Formatting
//!
//! Utilities for formatting CLI output in various formats.

use crate::commands::OutputFormat;
use rewards_client::{RedemptionOutcome, RewardView};
use rewards_core::RewardStats;
use serde::Serialize;

/// Format and print data based on output format
pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Table | OutputFormat::Plain => print_json(data),
    }
}

/// Print as JSON
fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error formatting JSON: {}", e),
    }
}

/// Print a reward view with its QR rendering
pub fn print_reward(view: &RewardView, qr_art: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(view),
        OutputFormat::Table | OutputFormat::Plain => {
            println!("Your Reward");
            println!("============");
            println!("Discount:    {}%", view.discount);
            println!("Reward Code: {}", view.reward_id);
            println!("Validity:    {}", describe_expiry(view.days_remaining));
            println!("Expires At:  {}", view.expires_at.format("%Y-%m-%d"));
            println!();
            println!("{}", qr_art);
            println!("Present the QR code at checkout, or read out the reward code.");
        }
    }
}

/// Print a redemption outcome
pub fn print_redemption(outcome: &RedemptionOutcome, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(outcome),
        OutputFormat::Table | OutputFormat::Plain => {
            if outcome.success {
                println!("Redeemed");
                println!("=========");
                if let Some(discount) = outcome.discount {
                    println!("Discount Applied: {}%", discount);
                }
            } else {
                println!("Invalid Reward");
                println!("===============");
            }
            println!("{}", outcome.message);
        }
    }
}

/// Print the stats summary
pub fn print_stats(stats: &RewardStats, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(stats),
        OutputFormat::Table | OutputFormat::Plain => {
            println!("Reward Statistics");
            println!("==================");
            println!("Total Issued:    {}", stats.total);
            println!("Redeemed:        {}", stats.redeemed);
            println!("Pending:         {}", stats.pending);
            println!("Expired:         {}", stats.expired);
            println!("Redemption Rate: {}", stats.redemption_rate);
        }
    }
}

/// Human phrasing for the derived expiry value.
///
/// Expired rewards are still shown; the redemption endpoint is the
/// enforcement point.
pub fn describe_expiry(days_remaining: i64) -> String {
    match days_remaining {
        d if d > 1 => format!("valid for {} days", d),
        1 => "valid for 1 day".to_string(),
        0 => "expires today".to_string(),
        -1 => "expired 1 day ago".to_string(),
        d => format!("expired {} days ago", -d),
    }
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{}", message);
}

/// Print warning message
pub fn print_warning(message: &str) {
    eprintln!("Warning: {}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_expiry_future() {
        assert_eq!(describe_expiry(7), "valid for 7 days");
        assert_eq!(describe_expiry(1), "valid for 1 day");
    }

    #[test]
    fn test_describe_expiry_boundary_and_past() {
        assert_eq!(describe_expiry(0), "expires today");
        assert_eq!(describe_expiry(-1), "expired 1 day ago");
        assert_eq!(describe_expiry(-3), "expired 3 days ago");
    }
}
