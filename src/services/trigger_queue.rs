use crate::error::{ApiError, RenderError};
use crate::services::Studio;
use mondrian_recolor::Frame;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Pending requests allowed before `submit` waits for room.
pub const DEFAULT_CAPACITY: usize = 32;

/// What a queued request asks the studio to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Recompute,
    Reset,
}

/// A finished pass: the trigger that actually ran and the frame it published.
///
/// When requests were coalesced, `trigger` is the most recent one, which may
/// differ from the trigger the caller submitted.
#[derive(Debug, Clone)]
pub struct Completed {
    pub trigger: Trigger,
    pub frame: Arc<Frame>,
}

type Reply = Result<Completed, String>;

struct TriggerTask {
    trigger: Trigger,
    result_sender: oneshot::Sender<Reply>,
}

/// Serializes recompute and reset requests against one [`Studio`].
///
/// A single worker task drains the channel. Requests that piled up while a
/// pass was running are coalesced: only the most recent trigger runs and
/// every waiting caller receives its frame.
#[derive(Clone)]
pub struct TriggerQueue {
    task_sender: mpsc::Sender<TriggerTask>,
}

impl TriggerQueue {
    /// Spawn the worker on the current tokio runtime.
    pub fn spawn(studio: Arc<Studio>, capacity: usize) -> Self {
        let (task_sender, mut task_receiver) = mpsc::channel::<TriggerTask>(capacity.max(1));

        tokio::spawn(async move {
            while let Some(first) = task_receiver.recv().await {
                let mut trigger = first.trigger;
                let mut waiters = vec![first.result_sender];
                while let Ok(next) = task_receiver.try_recv() {
                    trigger = next.trigger;
                    waiters.push(next.result_sender);
                }

                if waiters.len() > 1 {
                    tracing::debug!(coalesced = waiters.len(), ?trigger, "Coalesced triggers");
                }

                let reply: Reply = match trigger {
                    Trigger::Recompute => studio.request_recompute().await,
                    Trigger::Reset => studio.request_reset().await,
                }
                .map(|frame| Completed { trigger, frame })
                .map_err(|e| e.to_string());

                if let Err(e) = &reply {
                    tracing::error!(error = %e, ?trigger, "Triggered pass failed");
                }

                for waiter in waiters {
                    let _ = waiter.send(reply.clone());
                }
            }
            tracing::debug!("Trigger queue closed");
        });

        Self { task_sender }
    }

    /// Queue `trigger` and wait for the pass that served it.
    pub async fn submit(&self, trigger: Trigger) -> Result<Completed, ApiError> {
        let (result_sender, result_receiver) = oneshot::channel();

        self.task_sender
            .send(TriggerTask {
                trigger,
                result_sender,
            })
            .await
            .map_err(|_| ApiError::QueueClosed)?;

        result_receiver
            .await
            .map_err(|_| ApiError::QueueClosed)?
            .map_err(|e| ApiError::Render(RenderError::Task(e)))
    }
}
