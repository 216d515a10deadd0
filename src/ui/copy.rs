//! Copy confirmation for rendered code blocks.
//!
//! Each code block shown on screen owns a [`CopyState`]. Copying a block
//! writes its code to the clipboard and raises the flag for
//! [`COPY_CONFIRMATION`]; a repeated copy restarts the window. The reset runs
//! as a Tokio task that is cancelled when the state is copied again or
//! dropped.

use crate::core::message::Message;
use crate::ui::markdown::{extract_code_blocks, render_message_with_copy_states, MessageRenderConfig};
use crate::ui::theme::Theme;
use crate::utils::clipboard::Clipboard;
use ratatui::text::Line;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// How long a code block reports itself as copied.
pub const COPY_CONFIRMATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Default)]
pub struct CopyState {
    copied: Arc<AtomicBool>,
    pending_reset: Option<CancellationToken>,
}

impl CopyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.copied.load(Ordering::SeqCst)
    }

    /// Raise the flag and (re)start the reset timer.
    ///
    /// Outside a Tokio runtime the flag is raised but never reset.
    pub fn mark_copied(&mut self) {
        self.cancel_pending();
        self.copied.store(true, Ordering::SeqCst);

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!("no async runtime available; copy confirmation will not reset");
            return;
        };
        let token = CancellationToken::new();
        let deadline = Instant::now() + COPY_CONFIRMATION;
        handle.spawn(reset_after(
            deadline,
            Arc::downgrade(&self.copied),
            token.clone(),
        ));
        self.pending_reset = Some(token);
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending_reset.take() {
            token.cancel();
        }
    }
}

impl Drop for CopyState {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

async fn reset_after(deadline: Instant, flag: Weak<AtomicBool>, cancelled: CancellationToken) {
    tokio::select! {
        biased;
        _ = cancelled.cancelled() => {}
        _ = tokio::time::sleep_until(deadline) => {
            if let Some(flag) = flag.upgrade() {
                flag.store(false, Ordering::SeqCst);
                debug!("copy confirmation expired");
            }
        }
    }
}

/// A message on screen together with the copy state of each of its code
/// blocks. The message is re-parsed whenever it is rendered or copied from.
#[derive(Debug)]
pub struct MessageView<'a> {
    message: &'a Message,
    copy_states: Vec<CopyState>,
}

impl<'a> MessageView<'a> {
    pub fn new(message: &'a Message) -> Self {
        let blocks = extract_code_blocks(&message.content).len();
        Self {
            message,
            copy_states: (0..blocks).map(|_| CopyState::new()).collect(),
        }
    }

    pub fn message(&self) -> &'a Message {
        self.message
    }

    pub fn code_block_count(&self) -> usize {
        self.copy_states.len()
    }

    pub fn is_copied(&self, index: usize) -> bool {
        self.copy_states
            .get(index)
            .is_some_and(CopyState::is_copied)
    }

    /// Copy the code of the `index`-th block verbatim. A clipboard failure is
    /// logged and otherwise ignored; the block is marked copied either way.
    /// Returns the copied code, or `None` when there is no such block.
    pub fn copy_block(&mut self, index: usize, clipboard: &dyn Clipboard) -> Option<&'a str> {
        let message: &'a Message = self.message;
        let blocks = extract_code_blocks(&message.content);
        let block = blocks.get(index)?;
        let state = self.copy_states.get_mut(index)?;

        if let Err(err) = clipboard.write_text(block.code) {
            debug!(error = %err, block = index, "clipboard write failed");
        }
        state.mark_copied();
        Some(block.code)
    }

    pub fn render(&self, theme: &Theme, cfg: &MessageRenderConfig) -> Vec<Line<'static>> {
        let copied: Vec<bool> = self.copy_states.iter().map(CopyState::is_copied).collect();
        render_message_with_copy_states(self.message, theme, cfg, &copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::markdown::{COPIED_MARK, COPY_MARK};
    use crate::utils::clipboard::test_support::RecordingClipboard;

    async fn advance(ms: u64) {
        tokio::time::advance(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn copied_flag_lasts_exactly_the_confirmation_window() {
        let mut state = CopyState::new();
        assert!(!state.is_copied());
        state.mark_copied();
        assert!(state.is_copied());

        advance(1999).await;
        assert!(state.is_copied());
        advance(1).await;
        assert!(!state.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn second_copy_restarts_the_window() {
        let mut state = CopyState::new();
        state.mark_copied();
        advance(1500).await;
        assert!(state.is_copied());

        state.mark_copied();
        // Past the first deadline; the first timer must not clear the flag.
        advance(600).await;
        assert!(state.is_copied());
        advance(1300).await;
        assert!(state.is_copied());
        advance(100).await;
        assert!(!state.is_copied());
    }

    #[tokio::test(start_paused = true)]
    async fn blocks_in_different_messages_time_out_independently() {
        let first = Message::assistant("```sh\necho one\n```");
        let second = Message::assistant("```sh\necho two\n```");
        let clipboard = RecordingClipboard::default();
        let mut first_view = MessageView::new(&first);
        let mut second_view = MessageView::new(&second);

        first_view.copy_block(0, &clipboard);
        advance(1500).await;
        second_view.copy_block(0, &clipboard);
        assert!(first_view.is_copied(0));
        assert!(second_view.is_copied(0));

        advance(500).await;
        assert!(!first_view.is_copied(0));
        assert!(second_view.is_copied(0));
        assert_eq!(clipboard.writes(), vec!["echo one", "echo two"]);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_state_cancels_the_reset() {
        let mut state = CopyState::new();
        state.mark_copied();
        let flag = Arc::downgrade(&state.copied);
        let token = state.pending_reset.clone().expect("timer scheduled");

        drop(state);
        assert!(token.is_cancelled());
        assert!(flag.upgrade().is_none());
        advance(2500).await;
    }

    #[test]
    fn marking_without_a_runtime_does_not_panic() {
        let mut state = CopyState::new();
        state.mark_copied();
        assert!(state.is_copied());
        assert!(state.pending_reset.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn copy_writes_code_verbatim_even_when_clipboard_fails() {
        let message = Message::assistant("Run:\n```bash\n  cargo test  \n```");
        let clipboard = RecordingClipboard::failing();
        let mut view = MessageView::new(&message);

        assert_eq!(view.code_block_count(), 1);
        assert_eq!(view.copy_block(0, &clipboard), Some("cargo test"));
        assert_eq!(clipboard.writes(), vec!["cargo test"]);
        assert!(view.is_copied(0));
    }

    #[tokio::test(start_paused = true)]
    async fn copying_a_missing_block_does_nothing() {
        let message = Message::assistant("no code here");
        let clipboard = RecordingClipboard::default();
        let mut view = MessageView::new(&message);

        assert_eq!(view.copy_block(0, &clipboard), None);
        assert!(clipboard.writes().is_empty());
        assert!(!view.is_copied(0));
    }

    #[tokio::test(start_paused = true)]
    async fn render_reflects_copy_state() {
        let message = Message::assistant("```rust\nfn main() {}\n```");
        let clipboard = RecordingClipboard::default();
        let theme = Theme::dark_default();
        let cfg = MessageRenderConfig::new();
        let mut view = MessageView::new(&message);

        let header = |view: &MessageView<'_>| view.render(&theme, &cfg)[0].to_string();
        assert!(header(&view).contains(COPY_MARK));

        view.copy_block(0, &clipboard);
        assert!(header(&view).contains(COPIED_MARK));

        advance(2000).await;
        assert!(header(&view).contains(COPY_MARK));
    }
}
