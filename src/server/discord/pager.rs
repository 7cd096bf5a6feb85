use super::api::{ChannelMessage, GuildApi};
use crate::server::error::AppError;

/// Messages requested per page.
pub const PAGE_SIZE: u8 = 100;

/// Walks a channel's history forward from its first message.
///
/// Each page is requested after the largest message id seen so far. Paging
/// ends on an empty page or on a page whose largest id does not move the
/// cursor forward; such a page repeats messages already returned and is
/// dropped.
pub struct MessagePager<'a> {
    api: &'a dyn GuildApi,
    channel_id: u64,
    cursor: u64,
    exhausted: bool,
}

impl<'a> MessagePager<'a> {
    pub fn new(api: &'a dyn GuildApi, channel_id: u64) -> Self {
        Self {
            api,
            channel_id,
            cursor: 0,
            exhausted: false,
        }
    }

    /// Fetches the next page.
    ///
    /// # Returns
    /// - `Ok(Some(messages))` - Next non-empty page
    /// - `Ok(None)` - The channel is exhausted
    /// - `Err(AppError)` - The Guild API request failed; the cursor is unchanged
    pub async fn next_page(&mut self) -> Result<Option<Vec<ChannelMessage>>, AppError> {
        if self.exhausted {
            return Ok(None);
        }

        let page = self
            .api
            .fetch_messages(self.channel_id, self.cursor, PAGE_SIZE)
            .await?;

        match page.iter().map(|m| m.id).max() {
            Some(last_id) if last_id > self.cursor => {
                self.cursor = last_id;
                Ok(Some(page))
            }
            _ => {
                self.exhausted = true;
                Ok(None)
            }
        }
    }

    /// Restarts paging from the beginning of the channel.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.exhausted = false;
    }

    /// Fetches every remaining page and concatenates them.
    pub async fn collect_all(&mut self) -> Result<Vec<ChannelMessage>, AppError> {
        let mut messages = Vec::new();

        while let Some(page) = self.next_page().await? {
            messages.extend(page);
        }

        Ok(messages)
    }
}
