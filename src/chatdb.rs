use anyhow::{Context, Result};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// One message row from the chat store, newest first.
#[derive(Debug, Clone)]
pub struct MessageRow {
    pub date: String,
    pub text: Option<String>,
    pub has_attachment: bool,
}

/// Read-only view over the macOS Messages database (`chat.db`).
pub struct ChatDb {
    conn: Connection,
}

// message.date is nanoseconds since the Apple epoch (2001-01-01);
// shift to unixepoch before formatting.
const ATTACHMENT_MESSAGES_SQL: &str = r#"
SELECT datetime (message.date / 1000000000 + strftime ("%s", "2001-01-01"), "unixepoch", "localtime")
    AS message_date, message.text, message.cache_has_attachments
FROM chat
JOIN chat_message_join ON chat."ROWID" = chat_message_join.chat_id
JOIN message ON chat_message_join.message_id = message."ROWID"
WHERE chat_identifier = ?1
    AND cache_has_attachments = 1
ORDER BY message_date DESC
"#;

impl ChatDb {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .with_context(|| format!("failed to open chat db at {}", path.display()))?;
        Ok(Self { conn })
    }

    /// All messages in the given conversation that carry an attachment,
    /// ordered by message date descending. Restartable: each call runs a
    /// fresh query.
    pub fn attachment_messages(&self, chat_id: &str) -> Result<Vec<MessageRow>> {
        let mut stmt = self
            .conn
            .prepare(ATTACHMENT_MESSAGES_SQL)
            .context("failed to prepare chat db query")?;
        let rows = stmt
            .query_map([chat_id], |row| {
                Ok(MessageRow {
                    date: row.get(0)?,
                    text: row.get(1)?,
                    has_attachment: row.get::<_, i64>(2)? != 0,
                })
            })
            .context("failed to query chat db")?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row.context("failed to read chat db row")?);
        }
        Ok(out)
    }

    /// Message texts from the conversation containing `filter` as a
    /// substring. Null texts are dropped.
    pub fn links_from_chat(&self, chat_id: &str, filter: &str) -> Result<Vec<String>> {
        let links = self
            .attachment_messages(chat_id)?
            .into_iter()
            .filter_map(|row| row.text)
            .filter(|text| text.contains(filter))
            .collect();
        Ok(links)
    }
}
