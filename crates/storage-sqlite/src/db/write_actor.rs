use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use networth_core::errors::{DatabaseError, Error, Result};
use std::any::Any;
use tokio::sync::{mpsc, oneshot};

type Job<T> = Box<dyn FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send + 'static>>>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    // Each job's return type is erased to Box<dyn Any + Send> and restored in `exec`.
    tx: mpsc::Sender<(Job<Box<dyn Any + Send + 'static>>, Reply)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction: if it returns an error
    /// every statement it issued is rolled back.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Send + 'static + Any,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |c| job(c).map(|v| Box::new(v) as Box<dyn Any + Send>)),
                ret_tx,
            ))
            .await
            .map_err(|_| {
                Error::Database(DatabaseError::Internal(
                    "Writer actor has stopped".to_string(),
                ))
            })?;

        let boxed = ret_rx.await.map_err(|_| {
            Error::Database(DatabaseError::Internal(
                "Writer actor dropped the reply without a result".to_string(),
            ))
        })??;

        boxed
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|_| Error::Unexpected("Failed to downcast writer actor result".to_string()))
    }
}

/// Spawns a background Tokio task that acts as the single writer to the database.
///
/// The actor owns one pooled connection and processes write jobs serially.
pub fn spawn_writer(pool: DbPool) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(Job<Box<dyn Any + Send + 'static>>, Reply)>(1024);

    tokio::spawn(async move {
        let mut conn = match pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                log::error!("Writer actor could not acquire a connection: {}", e);
                // Fail every queued and future job instead of leaving callers waiting.
                while let Some((_, reply_tx)) = rx.recv().await {
                    let _ = reply_tx.send(Err(Error::Database(
                        DatabaseError::ConnectionFailed(e.to_string()),
                    )));
                }
                return;
            }
        };

        while let Some((job, reply_tx)) = rx.recv().await {
            // A job's own error is handed back unchanged; only Diesel failures
            // around the transaction go through StorageError.
            let mut job_error: Option<Error> = None;
            let result: Result<Box<dyn Any + Send + 'static>> = conn
                .immediate_transaction::<_, StorageError, _>(|c| {
                    job(c).map_err(|e| {
                        let storage_error = StorageError::CoreError(e.to_string());
                        job_error = Some(e);
                        storage_error
                    })
                })
                .map_err(|e| job_error.take().unwrap_or_else(|| Error::from(e)));

            // The requester may have gone away; nothing to do then.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}
