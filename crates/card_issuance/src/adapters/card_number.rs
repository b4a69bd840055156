// Rust guideline compliant 2026-10-16

//! Card number format shared by every `CardGenerator` adapter.

use chrono::{DateTime, Utc};

/// `"C-<user id>-<unix seconds>"`.
///
/// Two cards for the same user within the same second get the same number;
/// nothing upstream guards against it.
#[must_use]
pub fn card_number(user_id: &str, issued_at: DateTime<Utc>) -> String {
    format!("C-{user_id}-{}", issued_at.timestamp())
}

#[cfg(test)]
mod tests {
    use super::card_number;
    use chrono::{TimeZone as _, Utc};

    #[test]
    fn number_is_prefix_id_and_seconds() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        assert_eq!(card_number("U-001", at), "C-U-001-1792229400");
    }

    #[test]
    fn same_second_collides() {
        let at = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        let later = at + chrono::Duration::milliseconds(900);
        assert_eq!(card_number("U-001", at), card_number("U-001", later));
    }
}
