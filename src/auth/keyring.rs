//
//  gh-rest
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Keyring Storage
//!
//! Stores access tokens in the operating system's credential store
//! (macOS Keychain, Windows Credential Manager, Linux keyutils), one entry per
//! host under the `gh-rest` service.
//!
//! ```rust,no_run
//! use gh_rest::auth::KeyringStore;
//!
//! let store = KeyringStore::new();
//! store.store("github.com", "ghp_example")?;
//! assert_eq!(store.get("github.com")?.as_deref(), Some("ghp_example"));
//! store.delete("github.com")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;
use keyring::Entry;

const SERVICE_NAME: &str = "gh-rest";

/// Token store backed by the system keyring.
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    pub fn store(&self, host: &str, token: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        entry.set_password(token)?;
        Ok(())
    }

    /// Returns the token for `host`, or `None` when there is no entry.
    pub fn get(&self, host: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, host)?;
        match entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn delete(&self, host: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already deleted
            Err(e) => Err(e.into()),
        }
    }
}
