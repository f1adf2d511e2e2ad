use crate::error::ExplorerError;
use crate::service::sync_steps::{SYNC_COMPLETE, SyncSteps};
use crate::types::sync_status::SyncStatus;

use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tracing::{debug, error, info, warn};

/// Messages handled by the sync actor.
#[derive(Debug)]
pub enum SyncActorMessage {
    /// Start a background nuke-and-resync; Err(SyncInProgress) if one is running.
    NukeAndResync(RpcReplyPort<Result<(), ExplorerError>>),

    // Internal messages (sent by the background task)
    /// The running job moved on to a new step.
    Progress(String),
    /// The running job ended; Err carries the failing step's message.
    Finished(Result<(), String>),
}

/// Handle for triggering and observing the sync actor.
#[derive(Clone)]
pub struct SyncHandle {
    actor: ActorRef<SyncActorMessage>,
    status_rx: watch::Receiver<SyncStatus>,
}

impl SyncHandle {
    /// Returns once the job is accepted; it keeps running after this returns.
    pub async fn nuke_and_resync(&self) -> Result<(), ExplorerError> {
        ractor::call!(self.actor, SyncActorMessage::NukeAndResync)
            .map_err(|e| ExplorerError::RactorError(format!("NukeAndResync RPC failed: {e}")))?
    }

    /// Latest published status; never waits on the actor.
    pub fn status(&self) -> SyncStatus {
        self.status_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SyncStatus> {
        self.status_rx.clone()
    }

    pub fn stop(&self) {
        self.actor.stop(Some("shutdown".to_string()));
    }
}

pub struct SyncActorArgs {
    steps: Arc<SyncSteps>,
    status_tx: watch::Sender<SyncStatus>,
}

/// Internal state held by the sync actor
struct SyncActorState {
    steps: Arc<SyncSteps>,
    status_tx: watch::Sender<SyncStatus>,
    task: Option<AbortHandle>,
}

/// Sole writer of the sync status; one message at a time keeps the
/// Syncing check-and-set atomic.
struct SyncActor;

#[ractor::async_trait]
impl Actor for SyncActor {
    type Msg = SyncActorMessage;
    type State = SyncActorState;
    type Arguments = SyncActorArgs;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        args: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        debug!("SyncActor started");
        Ok(SyncActorState {
            steps: args.steps,
            status_tx: args.status_tx,
            task: None,
        })
    }

    async fn handle(
        &self,
        myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            SyncActorMessage::NukeAndResync(rp) => {
                let outcome = self.handle_nuke_and_resync(state, &myself);
                let _ = rp.send(outcome);
            }
            SyncActorMessage::Progress(message) => {
                if state.status_tx.borrow().is_syncing() {
                    info!("[sync] {message}");
                    state.status_tx.send_replace(SyncStatus::Syncing { message });
                }
            }
            SyncActorMessage::Finished(result) => {
                state.task.take();
                let next = match result {
                    Ok(()) => {
                        info!("[sync] Nuke & resync finished");
                        SyncStatus::Idle {
                            message: Some(SYNC_COMPLETE.to_string()),
                        }
                    }
                    Err(message) => {
                        error!("[sync] Error: {message}");
                        SyncStatus::Error { message }
                    }
                };
                state.status_tx.send_replace(next);
            }
        }
        Ok(())
    }

    async fn post_stop(
        &self,
        _myself: ActorRef<Self::Msg>,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        if let Some(task) = state.task.take() {
            warn!("SyncActor stopping with a sync in flight; abandoning it");
            task.abort();
        }
        Ok(())
    }
}

impl SyncActor {
    fn handle_nuke_and_resync(
        &self,
        state: &mut SyncActorState,
        myself: &ActorRef<SyncActorMessage>,
    ) -> Result<(), ExplorerError> {
        if state.status_tx.borrow().is_syncing() {
            debug!("Nuke requested while syncing; rejecting");
            return Err(ExplorerError::SyncInProgress);
        }

        state.status_tx.send_replace(SyncStatus::Syncing {
            message: "Starting nuke & resync...".to_string(),
        });
        info!("[sync] Nuke & resync started");

        let steps = state.steps.clone();
        let progress_ref = myself.clone();
        let work = tokio::spawn(async move {
            let progress = move |message: String| {
                let _ = ractor::cast!(progress_ref, SyncActorMessage::Progress(message));
            };
            steps.nuke_and_resync(&progress).await.map_err(|e| e.to_string())
        });
        state.task = Some(work.abort_handle());

        // A panicking step must still settle the status.
        let me = myself.clone();
        tokio::spawn(async move {
            let result = match work.await {
                Ok(result) => result,
                Err(e) if e.is_panic() => Err("Sync task panicked".to_string()),
                Err(_) => return,
            };
            let _ = ractor::cast!(me, SyncActorMessage::Finished(result));
        });
        Ok(())
    }
}

/// Spawn a sync actor around `steps` and return its handle.
pub async fn spawn(steps: SyncSteps) -> Result<SyncHandle, ExplorerError> {
    let (status_tx, status_rx) = watch::channel(SyncStatus::default());
    let args = SyncActorArgs {
        steps: Arc::new(steps),
        status_tx,
    };
    let (actor, _jh) = Actor::spawn(None, SyncActor, args)
        .await
        .map_err(|e| ExplorerError::RactorError(format!("failed to spawn SyncActor: {e}")))?;
    Ok(SyncHandle { actor, status_rx })
}
