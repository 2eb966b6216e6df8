//! Proposal status derivation
//!
//! Compares a proposal's end block to the currently observed block and
//! renders the remaining/elapsed time as coarse human-readable text, using
//! the network's average block time.

use lib_types::{BlockHeight, NetworkConfig, ProposalStatus};

/// Voting status at the observed block.
///
/// A proposal stays `Active` through its end block; it is `Closed` once the
/// chain has moved past it.
pub fn proposal_status(end_block: BlockHeight, current_block: BlockHeight) -> ProposalStatus {
    if current_block > end_block {
        ProposalStatus::Closed
    } else {
        ProposalStatus::Active
    }
}

/// Human-readable remaining/elapsed voting time ("2 hours left", "3 days ago")
pub fn status_text(
    end_block: BlockHeight,
    current_block: BlockHeight,
    cfg: &NetworkConfig,
) -> String {
    let blocks = end_block.abs_diff(current_block);
    let seconds = blocks as f64 * cfg.average_block_time_secs;
    let span = humanize_seconds(seconds);
    match proposal_status(end_block, current_block) {
        ProposalStatus::Closed => format!("{span} ago"),
        ProposalStatus::Active => format!("{span} left"),
    }
}

/// Coarse duration text with the conventional humanization breakpoints
/// (45 s / 90 s / 45 min / 90 min / 22 h / 36 h / 26 d / 46 d / 320 d).
fn humanize_seconds(seconds: f64) -> String {
    let minutes = (seconds / 60.0).round();
    let hours = (seconds / 3_600.0).round();
    let days = (seconds / 86_400.0).round();
    let months = (days / 30.0).round();
    let years = (days / 365.0).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if seconds < 90.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if minutes < 90.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if hours < 36.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if days < 46.0 {
        "a month".to_string()
    } else if days < 320.0 {
        format!("{months} months")
    } else if days < 548.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> NetworkConfig {
        NetworkConfig::new(
            5.0,
            "SPARK",
            "0x1000000000000000000000000000000000000001",
            "COIN",
            "0x2000000000000000000000000000000000000002",
            [],
        )
    }

    #[test]
    fn test_active_through_end_block() {
        assert_eq!(proposal_status(100, 99), ProposalStatus::Active);
        assert_eq!(proposal_status(100, 100), ProposalStatus::Active);
        assert_eq!(proposal_status(100, 101), ProposalStatus::Closed);
    }

    #[test]
    fn test_remaining_time_text() {
        let cfg = test_config();
        // 1440 blocks × 5 s = 2 hours left
        assert_eq!(status_text(2_440, 1_000, &cfg), "2 hours left");
    }

    #[test]
    fn test_elapsed_time_text() {
        let cfg = test_config();
        // 51840 blocks × 5 s = 3 days ago
        assert_eq!(status_text(1_000, 52_840, &cfg), "3 days ago");
    }

    #[test]
    fn test_humanize_breakpoints() {
        assert_eq!(humanize_seconds(10.0), "a few seconds");
        assert_eq!(humanize_seconds(60.0), "a minute");
        assert_eq!(humanize_seconds(600.0), "10 minutes");
        assert_eq!(humanize_seconds(3_600.0), "an hour");
        assert_eq!(humanize_seconds(18_000.0), "5 hours");
        assert_eq!(humanize_seconds(86_400.0), "a day");
        assert_eq!(humanize_seconds(86_400.0 * 4.0), "4 days");
        assert_eq!(humanize_seconds(86_400.0 * 30.0), "a month");
        assert_eq!(humanize_seconds(86_400.0 * 90.0), "3 months");
        assert_eq!(humanize_seconds(86_400.0 * 365.0), "a year");
        assert_eq!(humanize_seconds(86_400.0 * 800.0), "2 years");
    }
}
