// Rust guideline compliant 2026-10-16

//! SQL-script adapter for the `Repository` port.
//!
//! Writes the statements a relational backend would run into an output sink
//! instead of executing them. `save_user` opens the transaction and
//! `save_card` commits it, so a failed card write leaves the script without
//! a `COMMIT;`. The DSN is opaque: it is echoed, never parsed.

use std::cell::RefCell;
use std::io::Write;

use chrono::SecondsFormat;
use domain::{Card, PersistError, Repository, User};

/// `Repository` adapter that renders SQL statements into a sink.
#[derive(Debug)]
pub struct SqlScriptRepository<W> {
    dsn: String,
    /// Interior mutability required because the port takes `&self`.
    out: RefCell<W>,
}

impl<W: Write> SqlScriptRepository<W> {
    /// Create a repository that writes to `out`, labelled with `dsn`.
    #[must_use]
    pub fn new(dsn: impl Into<String>, out: W) -> Self {
        Self { dsn: dsn.into(), out: RefCell::new(out) }
    }

    /// Consume the repository and return its sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn emit(&self, script: &str) -> Result<(), PersistError> {
        let mut out = self.out.borrow_mut();
        out.write_all(script.as_bytes())
            .and_then(|()| out.flush())
            .map_err(|e| {
                tracing::error!(error = %e, "sql_script.write_failed");
                PersistError::Unavailable { reason: e.to_string() }
            })
    }
}

/// Single-quoted SQL string literal with embedded quotes doubled.
fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

impl<W: Write> Repository for SqlScriptRepository<W> {
    /// # Errors
    ///
    /// Returns [`PersistError::Unavailable`] when the sink rejects the write.
    fn save_user(&self, user: &User) -> Result<(), PersistError> {
        let script = format!(
            "[SQL] dsn={}\nBEGIN;\nINSERT INTO users (id, email, category, expires_at) VALUES ({}, {}, {}, {});\n",
            self.dsn,
            quote(&user.id),
            quote(&user.email),
            quote(&user.category),
            quote(&user.expires_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
        self.emit(&script)?;
        tracing::debug!(user_id = %user.id, "sql_script.user.saved");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`PersistError::Unavailable`] when the sink rejects the write.
    fn save_card(&self, card: &Card) -> Result<(), PersistError> {
        let script = format!(
            "INSERT INTO cards (number, user_id, fee, issued_at) VALUES ({}, {}, {:.2}, {});\nCOMMIT;\n",
            quote(&card.number),
            quote(&card.owner.id),
            card.fee,
            quote(&card.issued_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
        self.emit(&script)?;
        tracing::debug!(card_number = %card.number, "sql_script.card.saved");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::SqlScriptRepository;
    use chrono::{TimeZone as _, Utc};
    use domain::{Card, PersistError, Repository as _, User};
    use std::io;

    fn make_user(id: &str) -> User {
        User {
            id: id.to_owned(),
            given_name: "Ana".to_owned(),
            family_name: "Quispe".to_owned(),
            email: "ana.quispe@unsch.edu.pe".to_owned(),
            category: "undergraduate".to_owned(),
            expires_at: Utc.with_ymd_and_hms(2027, 10, 17, 9, 30, 0).unwrap(),
        }
    }

    fn make_card(owner: User) -> Card {
        Card {
            number: format!("C-{}-1792229400", owner.id),
            owner,
            fee: 10.0,
            issued_at: Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap(),
            content: vec![],
        }
    }

    /// Sink that rejects every write.
    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    // SQL-T01: user then card renders one complete transaction.
    #[test]
    fn user_then_card_renders_a_committed_transaction() {
        let repo = SqlScriptRepository::new("postgres://localhost/library", Vec::new());
        let user = make_user("U-001");

        repo.save_user(&user).unwrap();
        repo.save_card(&make_card(user)).unwrap();

        let script = String::from_utf8(repo.into_inner()).unwrap();
        assert_eq!(
            script,
            "[SQL] dsn=postgres://localhost/library\n\
             BEGIN;\n\
             INSERT INTO users (id, email, category, expires_at) VALUES ('U-001', 'ana.quispe@unsch.edu.pe', 'undergraduate', '2027-10-17T09:30:00Z');\n\
             INSERT INTO cards (number, user_id, fee, issued_at) VALUES ('C-U-001-1792229400', 'U-001', 10.00, '2026-10-17T09:30:00Z');\n\
             COMMIT;\n"
        );
    }

    // SQL-T02: embedded quotes cannot break out of a literal.
    #[test]
    fn quotes_in_values_are_escaped() {
        let repo = SqlScriptRepository::new("dsn", Vec::new());
        repo.save_user(&make_user("O'Brien")).unwrap();
        let script = String::from_utf8(repo.into_inner()).unwrap();
        assert!(script.contains("VALUES ('O''Brien', "), "unescaped quote: {script}");
    }

    // SQL-T03: user write alone leaves the transaction open.
    #[test]
    fn user_write_alone_has_no_commit() {
        let repo = SqlScriptRepository::new("dsn", Vec::new());
        repo.save_user(&make_user("U-001")).unwrap();
        let script = String::from_utf8(repo.into_inner()).unwrap();
        assert!(script.contains("BEGIN;"));
        assert!(!script.contains("COMMIT;"));
    }

    // SQL-T04: sink failure maps to Unavailable.
    #[test]
    fn sink_failure_is_unavailable() {
        let repo = SqlScriptRepository::new("dsn", BrokenPipe);
        let result = repo.save_user(&make_user("U-001"));
        assert!(
            matches!(result, Err(PersistError::Unavailable { .. })),
            "expected Unavailable, got {result:?}"
        );
    }
}
