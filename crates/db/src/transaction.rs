//! Scoped transaction guard.
//!
//! Every use case runs inside exactly one [`TxGuard`]:
//! 1. [`TxGuard::begin`] opens the transaction.  Use cases that write open it
//!    in [`TxMode::Write`] (`BEGIN IMMEDIATE`): the write lock is taken before
//!    the first read, and a competing writer waits out `busy_timeout`.
//! 2. Repository calls borrow the open connection through `DerefMut`.
//! 3. [`TxGuard::finish`] settles the transaction from the use case's
//!    `Result` — commit on `Ok`, rollback on `Err` — and hands the result back.
//!
//! A guard dropped without `finish` (cancelled request, panic) rolls back,
//! because the underlying `sqlx::Transaction` does so on drop.

use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use sqlx::{Sqlite, SqliteConnection, Transaction};
use tracing::{debug, error, warn};

use crate::{DbError, DbPool};

/// How a transaction locks the database when it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxMode {
    /// Deferred `BEGIN`; takes a shared lock on first read.
    Read,
    /// `BEGIN IMMEDIATE`; takes the write lock at once.
    Write,
}

/// An open transaction bound to a single use case.
pub struct TxGuard {
    tx: Transaction<'static, Sqlite>,
    unsettled: Unsettled,
}

impl TxGuard {
    /// Open a transaction on `pool`.  `operation` labels the log lines.
    pub async fn begin(
        pool: &DbPool,
        mode: TxMode,
        operation: &'static str,
    ) -> Result<Self, DbError> {
        let tx = match mode {
            TxMode::Read => pool.begin().await?,
            TxMode::Write => pool.begin_with("BEGIN IMMEDIATE").await?,
        };
        debug!(operation, ?mode, "transaction started");
        Ok(Self {
            tx,
            unsettled: Unsettled { operation, armed: true },
        })
    }

    /// Commit or roll back depending on `result`, then return it.
    ///
    /// An `Err` is passed through unchanged after a successful rollback.  If
    /// the commit or the rollback itself fails, that failure replaces the
    /// result; the original failure is logged.
    pub async fn finish<T, E>(self, result: Result<T, E>) -> Result<T, E>
    where
        E: From<DbError> + Display,
    {
        let Self { tx, mut unsettled } = self;
        unsettled.armed = false;
        let operation = unsettled.operation;

        match result {
            Ok(value) => {
                if let Err(commit_err) = tx.commit().await {
                    error!(operation, error = %commit_err, "commit failed");
                    return Err(E::from(DbError::from(commit_err)));
                }
                debug!(operation, "transaction committed");
                Ok(value)
            }
            Err(failure) => match tx.rollback().await {
                Ok(()) => {
                    debug!(operation, %failure, "transaction rolled back");
                    Err(failure)
                }
                Err(rollback_err) => {
                    error!(
                        operation,
                        %failure,
                        error = %rollback_err,
                        "rollback failed; reporting the rollback error instead"
                    );
                    Err(E::from(DbError::from(rollback_err)))
                }
            },
        }
    }
}

impl Deref for TxGuard {
    type Target = SqliteConnection;

    fn deref(&self) -> &SqliteConnection {
        &self.tx
    }
}

impl DerefMut for TxGuard {
    fn deref_mut(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }
}

/// Warns when a guard goes away without being settled.
struct Unsettled {
    operation: &'static str,
    armed: bool,
}

impl Drop for Unsettled {
    fn drop(&mut self) {
        if self.armed {
            warn!(operation = self.operation, "transaction dropped unsettled; rolling back");
        }
    }
}
