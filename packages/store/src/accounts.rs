//! # Account registry and session
//!
//! [`Accounts`] owns two persisted values: the list of registered
//! [`Account`]s and the current [`Session`]. Every operation validates first
//! and writes second, so a rejected call leaves storage untouched.
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`register`](Accounts::register) | Validates email shape, password length and uniqueness, appends the account, signs it in. |
//! | [`login`](Accounts::login) | Compares digests, signs in. Fails with a generic [`AuthError`]. |
//! | [`logout`](Accounts::logout) | Clears the session. |
//! | [`current_session`](Accounts::current_session) | Reads the persisted session, e.g. after a reload. |
//!
//! Emails are trimmed and lowercased before any comparison, so
//! `" Foo@Bar.com "` and `"foo@bar.com"` are the same account.

use crate::config::{StorageKeys, TodoConfig};
use crate::error::{AuthError, Error, ValidationError};
use crate::hash::identity_hash;
use crate::ids::now_millis;
use crate::kv::KeyValueStore;
use crate::models::{Account, Session};

#[derive(Clone, Debug)]
pub struct Accounts<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
    min_password_len: usize,
}

impl<S: KeyValueStore> Accounts<S> {
    pub fn new(store: S, config: &TodoConfig) -> Self {
        Self {
            store,
            keys: config.storage_keys(),
            min_password_len: config.accounts.min_password_len,
        }
    }

    /// All registered accounts, in registration order.
    pub fn accounts(&self) -> Vec<Account> {
        self.store.load(&self.keys.accounts, Vec::new())
    }

    pub fn current_session(&self) -> Option<Session> {
        self.store.load(&self.keys.session, None)
    }

    pub fn register(&self, email: &str, password: &str) -> Result<Session, Error> {
        let email = normalize_email(email);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        // Length in UTF-16 code units, the same units `identity_hash` reads.
        if password.encode_utf16().count() < self.min_password_len {
            return Err(ValidationError::PasswordTooShort {
                min: self.min_password_len,
            }
            .into());
        }
        let mut accounts = self.accounts();
        if accounts.iter().any(|a| a.email == email) {
            return Err(ValidationError::EmailTaken.into());
        }

        accounts.push(Account {
            email: email.clone(),
            password_hash: identity_hash(password),
            created_at: now_millis(),
        });
        self.store.save(&self.keys.accounts, &accounts)?;
        tracing::info!(%email, "registered account");

        self.start_session(email)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<Session, Error> {
        let email = normalize_email(email);
        let digest = identity_hash(password);
        let matches = self
            .accounts()
            .iter()
            .any(|a| a.email == email && a.password_hash == digest);
        if !matches {
            tracing::debug!(%email, "rejected sign-in");
            return Err(AuthError::IncorrectCredentials.into());
        }
        self.start_session(email)
    }

    pub fn logout(&self) -> Result<(), Error> {
        self.store.save(&self.keys.session, &Option::<Session>::None)?;
        Ok(())
    }

    fn start_session(&self, email: String) -> Result<Session, Error> {
        let session = Session { email };
        self.store.save(&self.keys.session, &Some(&session))?;
        Ok(session)
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::MemoryStore;

    fn accounts() -> Accounts<MemoryStore> {
        Accounts::new(MemoryStore::new(), &TodoConfig::default())
    }

    #[test]
    fn test_register_then_login() {
        let accounts = accounts();
        let session = accounts.register("ada@example.com", "hunter22").unwrap();
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(accounts.current_session(), Some(session));

        accounts.logout().unwrap();
        assert_eq!(accounts.current_session(), None);

        let session = accounts.login("ada@example.com", "hunter22").unwrap();
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(accounts.current_session(), Some(session));
    }

    #[test]
    fn test_stores_digest_not_password() {
        let accounts = accounts();
        accounts.register("ada@example.com", "hunter22").unwrap();
        let stored = accounts.accounts();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].password_hash, identity_hash("hunter22"));
        assert!(stored[0].created_at > 0);
    }

    #[test]
    fn test_duplicate_email_is_normalized() {
        let accounts = accounts();
        accounts.register("foo@bar.com", "secret1").unwrap();
        let err = accounts.register("  Foo@Bar.com ", "secret2").unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::EmailTaken)));
        assert_eq!(accounts.accounts().len(), 1);
    }

    #[test]
    fn test_login_normalizes_email() {
        let accounts = accounts();
        accounts.register("foo@bar.com", "secret1").unwrap();
        let session = accounts.login(" FOO@bar.COM", "secret1").unwrap();
        assert_eq!(session.email, "foo@bar.com");
    }

    #[test]
    fn test_wrong_password_and_unknown_email() {
        let accounts = accounts();
        accounts.register("foo@bar.com", "secret1").unwrap();
        accounts.logout().unwrap();

        let err = accounts.login("foo@bar.com", "secret2").unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::IncorrectCredentials)));

        let err = accounts.login("nobody@bar.com", "secret1").unwrap_err();
        assert!(matches!(err, Error::Auth(AuthError::IncorrectCredentials)));
        assert_eq!(accounts.current_session(), None);
    }

    #[test]
    fn test_colliding_password_is_accepted() {
        // "Aa" and "BB" hash the same.
        let accounts = accounts();
        accounts.register("foo@bar.com", "xxxxAa").unwrap();
        assert!(accounts.login("foo@bar.com", "xxxxBB").is_ok());
    }

    #[test]
    fn test_validation_rejects_before_writing() {
        let store = MemoryStore::new();
        let accounts = Accounts::new(store.clone(), &TodoConfig::default());

        let err = accounts.register("not-an-email", "secret1").unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::InvalidEmail)));

        let err = accounts.register("a@b.co", "12345").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::PasswordTooShort { min: 6 })
        ));

        assert!(store.is_empty());
    }

    #[test]
    fn test_min_password_len_from_config() {
        let mut config = TodoConfig::default();
        config.accounts.min_password_len = 10;
        let accounts = Accounts::new(MemoryStore::new(), &config);
        assert!(accounts.register("a@b.co", "123456789").is_err());
        assert!(accounts.register("a@b.co", "1234567890").is_ok());
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        let accounts = accounts();
        // Three astral characters are six UTF-16 units.
        assert!(accounts.register("a@b.co", "\u{1F600}\u{1F600}\u{1F600}").is_ok());

        let err = accounts.register("c@d.co", "\u{1F600}\u{1F600}x").unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::PasswordTooShort { min: 6 })
        ));
    }

    #[test]
    fn test_session_survives_reload() {
        let store = MemoryStore::new();
        let first = Accounts::new(store.clone(), &TodoConfig::default());
        first.register("ada@example.com", "hunter22").unwrap();

        let reloaded = Accounts::new(store, &TodoConfig::default());
        assert_eq!(
            reloaded.current_session().map(|s| s.email).as_deref(),
            Some("ada@example.com")
        );
    }

    #[test]
    fn test_corrupt_accounts_read_as_empty() {
        let store = MemoryStore::new();
        store.set_item("apollogs.users:v1", "[{oops").unwrap();
        store.set_item("apollogs.session:v1", "42").unwrap();
        let accounts = Accounts::new(store, &TodoConfig::default());
        assert!(accounts.accounts().is_empty());
        assert_eq!(accounts.current_session(), None);
        assert!(accounts.register("a@b.co", "secret1").is_ok());
    }

    #[test]
    fn test_write_failure_propagates() {
        #[derive(Clone)]
        struct ReadOnly;
        impl KeyValueStore for ReadOnly {
            fn get_item(&self, _key: &str) -> Option<String> {
                None
            }
            fn set_item(&self, key: &str, _value: &str) -> Result<(), StoreError> {
                Err(StoreError::Write {
                    key: key.to_string(),
                    message: "QuotaExceededError".to_string(),
                })
            }
        }

        let accounts = Accounts::new(ReadOnly, &TodoConfig::default());
        let err = accounts.register("a@b.co", "secret1").unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::Write { .. })));
        assert!(!err.is_user_facing());
    }

    #[test]
    fn test_email_shape() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x@y.z"] {
            assert!(is_valid_email(ok), "{ok}");
        }
        for bad in [
            "", "plain", "@b.co", "a@", "a@b", "a@.co", "a@b.", "a@@b.co", "a b@c.de", "a@b@c.de",
        ] {
            assert!(!is_valid_email(bad), "{bad}");
        }
    }
}
