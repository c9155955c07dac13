// SPDX-License-Identifier: GPL-3.0-only

//! Editor collaborator
//!
//! The camera screen hands a photo and the active preset to an editor and waits
//! for exactly one reply.

use crate::backends::camera::Photo;
use crate::filters::FilterType;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::oneshot;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorResult {
    Done,
    Cancelled,
}

/// Initial state of an editing session
#[derive(Debug, Clone)]
pub struct EditorRequest {
    pub image: Photo,
    pub initial_filter: FilterType,
}

#[derive(Debug, Clone)]
pub struct EditorOutcome {
    pub result: EditorResult,
    pub image: Option<Photo>,
}

impl EditorOutcome {
    pub fn cancelled() -> Self {
        Self {
            result: EditorResult::Cancelled,
            image: None,
        }
    }
}

pub trait Editor: Send + Sync {
    fn present(&self, request: EditorRequest) -> BoxFuture<'static, EditorOutcome>;
}

struct PendingEdit {
    request: EditorRequest,
    reply: oneshot::Sender<EditorOutcome>,
}

/// Editor whose decision comes from the surrounding UI
///
/// `present` parks the request; the composer shows it via [`PromptEditor::pending`]
/// and resolves it with [`PromptEditor::finish`].
#[derive(Clone, Default)]
pub struct PromptEditor {
    pending: Arc<Mutex<Option<PendingEdit>>>,
}

impl PromptEditor {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<PendingEdit>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// The request currently waiting for a decision
    pub fn pending(&self) -> Option<EditorRequest> {
        self.lock().as_ref().map(|edit| edit.request.clone())
    }

    /// Resolve the pending request; `Done` returns the edited image
    pub fn finish(&self, result: EditorResult) -> bool {
        let Some(edit) = self.lock().take() else {
            return false;
        };
        let outcome = match result {
            EditorResult::Done => EditorOutcome {
                result,
                image: Some(edit.request.image),
            },
            EditorResult::Cancelled => EditorOutcome::cancelled(),
        };
        info!(?result, "Editor finished");
        edit.reply.send(outcome).is_ok()
    }
}

impl Editor for PromptEditor {
    fn present(&self, request: EditorRequest) -> BoxFuture<'static, EditorOutcome> {
        let (reply, receiver) = oneshot::channel();
        let replaced = self.lock().replace(PendingEdit { request, reply });
        if replaced.is_some() {
            warn!("Editor presented while another edit was pending; previous edit dropped");
        }
        async move { receiver.await.unwrap_or_else(|_| EditorOutcome::cancelled()) }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    fn request() -> EditorRequest {
        EditorRequest {
            image: Arc::new(DynamicImage::new_rgba8(4, 4)),
            initial_filter: FilterType::Tender,
        }
    }

    #[tokio::test]
    async fn test_done_returns_image() {
        let editor = PromptEditor::new();
        let outcome = editor.present(request());

        let pending = editor.pending().unwrap();
        assert_eq!(pending.initial_filter, FilterType::Tender);
        assert!(editor.finish(EditorResult::Done));

        let outcome = outcome.await;
        assert_eq!(outcome.result, EditorResult::Done);
        assert!(outcome.image.is_some());
        assert!(editor.pending().is_none());
    }

    #[tokio::test]
    async fn test_dropped_edit_reports_cancelled() {
        let editor = PromptEditor::new();
        let first = editor.present(request());
        let _second = editor.present(request());
        assert_eq!(first.await.result, EditorResult::Cancelled);
    }

    #[test]
    fn test_finish_without_pending_is_noop() {
        assert!(!PromptEditor::new().finish(EditorResult::Done));
    }
}
