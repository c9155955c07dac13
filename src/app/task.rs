// SPDX-License-Identifier: GPL-3.0-only

//! Asynchronous work returned by message handlers
//!
//! A `Task` is a batch of futures that each resolve to a message. The runtime
//! spawns them and sends their output back into the UI message channel, so
//! every result is applied on the UI context.

use futures::FutureExt;
use futures::future::BoxFuture;
use std::future::Future;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

#[must_use = "a Task does nothing unless it is spawned"]
pub struct Task<T> {
    futures: Vec<BoxFuture<'static, T>>,
}

impl<T: Send + 'static> Task<T> {
    /// A task that does nothing
    pub fn none() -> Self {
        Self {
            futures: Vec::new(),
        }
    }

    /// A task that immediately yields `value`
    pub fn done(value: T) -> Self {
        Self {
            futures: vec![futures::future::ready(value).boxed()],
        }
    }

    /// Run `future` and map its output to a message
    pub fn perform<A>(
        future: impl Future<Output = A> + Send + 'static,
        f: impl FnOnce(A) -> T + Send + 'static,
    ) -> Self {
        Self {
            futures: vec![future.map(f).boxed()],
        }
    }

    /// Combine several tasks into one
    pub fn batch(tasks: impl IntoIterator<Item = Task<T>>) -> Self {
        Self {
            futures: tasks.into_iter().flat_map(|task| task.futures).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.futures.len()
    }

    /// Await every future in the batch, in order
    pub async fn collect(self) -> Vec<T> {
        futures::future::join_all(self.futures).await
    }

    /// Spawn each future on `runtime`, sending its output to `sender`
    pub fn spawn(self, runtime: &Handle, sender: &UnboundedSender<T>) {
        for future in self.futures {
            let sender = sender.clone();
            runtime.spawn(async move {
                let message = future.await;
                if sender.send(message).is_err() {
                    debug!("UI channel closed, dropping task result");
                }
            });
        }
    }
}

impl<T> std::fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({} futures)", self.futures.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_batch_keeps_order() {
        let task = Task::batch([
            Task::done(1),
            Task::none(),
            Task::perform(async { 2 }, |v| v * 10),
        ]);
        assert_eq!(task.len(), 2);
        assert_eq!(task.collect().await, vec![1, 20]);
    }

    #[tokio::test]
    async fn test_spawn_delivers_to_channel() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        Task::done("hello").spawn(&Handle::current(), &tx);
        assert_eq!(rx.recv().await, Some("hello"));
    }
}
