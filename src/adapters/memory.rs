use crate::domain::model::Account;
use crate::domain::ports::ProfileRepository;
use crate::utils::error::{Result, TrackerError};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// 記憶體內的帳號存放處，以使用者名稱為鍵
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    accounts: Arc<Mutex<BTreeMap<String, Account>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, BTreeMap<String, Account>>> {
        self.accounts.lock().map_err(|_| TrackerError::StoreError {
            message: "account store lock poisoned".to_string(),
        })
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    fn insert(&self, account: Account) -> Result<()> {
        let mut accounts = self.lock()?;
        if accounts.contains_key(&account.user.username) {
            return Err(TrackerError::DuplicateAccountError {
                username: account.user.username,
            });
        }
        if accounts
            .values()
            .any(|existing| existing.user.email.eq_ignore_ascii_case(&account.user.email))
        {
            return Err(TrackerError::DuplicateEmailError {
                email: account.user.email,
            });
        }
        accounts.insert(account.user.username.clone(), account);
        Ok(())
    }

    fn find(&self, username: &str) -> Result<Option<Account>> {
        Ok(self.lock()?.get(username).cloned())
    }

    fn list(&self) -> Result<Vec<Account>> {
        Ok(self.lock()?.values().cloned().collect())
    }
}
