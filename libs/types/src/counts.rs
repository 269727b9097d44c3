//! Notification counter record and badge rendering.

use serde::{Deserialize, Serialize};

/// Counters at or above this value render as the capped badge (`"99+"`).
pub const BADGE_CAP: u64 = 100;

/// Per-category notification counters.
///
/// Produced wholesale by the feed server and consumed wholesale by clients.
/// There is a single global value; no identity beyond that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationCounts {
    /// Network (connection request) notifications.
    pub network: u64,

    /// Job alert notifications.
    pub jobs: u64,

    /// Messaging notifications.
    pub messaging: u64,

    /// General notifications.
    pub notifications: u64,
}

impl NotificationCounts {
    /// Sum of the four counters.
    ///
    /// Saturates at `u64::MAX` rather than wrapping.
    pub fn total(&self) -> u64 {
        self.network
            .saturating_add(self.jobs)
            .saturating_add(self.messaging)
            .saturating_add(self.notifications)
    }
}

/// Renders a counter for display: values at or above [`BADGE_CAP`] collapse
/// to the literal `"99+"`, everything below renders as the number itself.
pub fn badge_label(count: u64) -> String {
    if count >= BADGE_CAP {
        "99+".to_string()
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[test]
    fn total_sums_all_four_counters() {
        let counts = NotificationCounts {
            network: 3,
            jobs: 6,
            messaging: 1,
            notifications: 0,
        };
        assert_eq!(counts.total(), 10);
    }

    #[test]
    fn total_of_default_is_zero() {
        assert_eq!(NotificationCounts::default().total(), 0);
    }

    #[test]
    fn total_saturates_instead_of_wrapping() {
        let counts = NotificationCounts {
            network: u64::MAX,
            jobs: 1,
            messaging: 0,
            notifications: 0,
        };
        assert_eq!(counts.total(), u64::MAX);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(1, "1")]
    #[case(99, "99")]
    #[case(100, "99+")]
    #[case(101, "99+")]
    #[case(u64::MAX, "99+")]
    fn badge_label_caps_at_one_hundred(#[case] count: u64, #[case] expected: &str) {
        assert_eq!(badge_label(count), expected);
    }

    #[test]
    fn counts_roundtrip_as_flat_json() {
        let counts = NotificationCounts {
            network: 3,
            jobs: 6,
            messaging: 1,
            notifications: 0,
        };
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(
            json,
            r#"{"network":3,"jobs":6,"messaging":1,"notifications":0}"#
        );
        let parsed: NotificationCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, counts);
    }

    proptest! {
        #[test]
        fn total_equals_sum_for_any_quadruple(
            network in 0u64..=u32::MAX as u64,
            jobs in 0u64..=u32::MAX as u64,
            messaging in 0u64..=u32::MAX as u64,
            notifications in 0u64..=u32::MAX as u64,
        ) {
            let counts = NotificationCounts { network, jobs, messaging, notifications };
            prop_assert_eq!(counts.total(), network + jobs + messaging + notifications);
        }

        #[test]
        fn badge_label_is_the_plain_number_below_cap(count in 0u64..BADGE_CAP) {
            prop_assert_eq!(badge_label(count), count.to_string());
        }
    }
}
