//! Status badge styles.
//!
//! Pure lookup from a domain status string to a display style triple. The
//! mapping is total: unrecognized statuses resolve to the neutral style so a
//! new backend status never breaks rendering.

/// A `{background, text, dot}` colour triple for a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub text: &'static str,
    pub dot: &'static str,
}

/// Neutral style used for unrecognized statuses.
pub const NEUTRAL_BADGE: BadgeStyle = BadgeStyle {
    background: "#f3f4f6",
    text: "#374151",
    dot: "#9ca3af",
};

const PLANNED: BadgeStyle = BadgeStyle {
    background: "#eff6ff",
    text: "#1e40af",
    dot: "#3b82f6",
};

const PENDING: BadgeStyle = BadgeStyle {
    background: "#fefce8",
    text: "#854d0e",
    dot: "#eab308",
};

const IN_PROGRESS: BadgeStyle = BadgeStyle {
    background: "#eef2ff",
    text: "#3730a3",
    dot: "#6366f1",
};

const COMPLETED: BadgeStyle = BadgeStyle {
    background: "#f0fdf4",
    text: "#166534",
    dot: "#22c55e",
};

const FAILED: BadgeStyle = BadgeStyle {
    background: "#fef2f2",
    text: "#991b1b",
    dot: "#ef4444",
};

const CANCELLED: BadgeStyle = BadgeStyle {
    background: "#fafaf9",
    text: "#57534e",
    dot: "#a8a29e",
};

const REFUNDED: BadgeStyle = BadgeStyle {
    background: "#fdf4ff",
    text: "#86198f",
    dot: "#d946ef",
};

/// Map a domain status string to its badge style.
///
/// Matching is case-insensitive and ignores `-`, `_` and spaces, so
/// `"InProgress"`, `"in_progress"` and `"in-progress"` are the same status.
pub fn badge_for_status(status: &str) -> BadgeStyle {
    let normalized: String = status
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match normalized.as_str() {
        "planned" => PLANNED,
        "pending" => PENDING,
        "confirmed" | "inprogress" => IN_PROGRESS,
        "completed" | "paid" => COMPLETED,
        "failed" => FAILED,
        "cancelled" | "canceled" | "noshow" => CANCELLED,
        "refunded" => REFUNDED,
        _ => NEUTRAL_BADGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_resolve_to_distinct_styles() {
        assert_eq!(badge_for_status("Completed"), COMPLETED);
        assert_eq!(badge_for_status("Pending"), PENDING);
        assert_eq!(badge_for_status("Failed"), FAILED);
        assert_ne!(badge_for_status("Completed"), badge_for_status("Failed"));
    }

    #[test]
    fn matching_ignores_case_and_separators() {
        assert_eq!(badge_for_status("in_progress"), IN_PROGRESS);
        assert_eq!(badge_for_status("In-Progress"), IN_PROGRESS);
        assert_eq!(badge_for_status("INPROGRESS"), IN_PROGRESS);
        assert_eq!(badge_for_status("no_show"), CANCELLED);
    }

    #[test]
    fn mapper_is_total_over_arbitrary_input() {
        for status in ["", "   ", "definitely-not-a-status", "💉", "null"] {
            assert_eq!(badge_for_status(status), NEUTRAL_BADGE);
        }
    }
}
