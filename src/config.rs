use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub db_path: String,
    pub chat_id: String,
    pub link_filter: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        let db_path = dirs::home_dir()
            .map(|home| home.join("Library/Messages/chat.db"))
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            db_path,
            chat_id: String::new(),
            link_filter: "spotify".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyConfig {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
    pub scope: String,
    pub api_base: String,
    pub accounts_base: String,
}

impl Default for SpotifyConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            refresh_token: String::new(),
            scope: "playlist-modify-private playlist-read-private playlist-modify-public"
                .to_string(),
            api_base: "https://api.spotify.com".to_string(),
            accounts_base: "https://accounts.spotify.com".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    pub playlist_name: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            playlist_name: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatsyncConfig {
    pub chat: ChatConfig,
    pub spotify: SpotifyConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PartialChatsyncConfig {
    chat: Option<ChatConfig>,
    spotify: Option<SpotifyConfig>,
    sync: Option<SyncConfig>,
}

fn env_or_string(var: &str, fallback: &str) -> String {
    match env::var(var) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => fallback.to_string(),
    }
}

fn validate(cfg: &ChatsyncConfig) -> Result<()> {
    if cfg.chat.db_path.trim().is_empty() {
        return Err(anyhow!(
            "invalid chat db path: set [chat] db_path or CHATSYNC_DB_PATH"
        ));
    }
    if cfg.spotify.api_base.trim().is_empty() {
        return Err(anyhow!("invalid spotify api base: cannot be empty"));
    }
    if cfg.spotify.accounts_base.trim().is_empty() {
        return Err(anyhow!("invalid spotify accounts base: cannot be empty"));
    }
    Ok(())
}

fn resolve_config_path(override_path: Option<&str>) -> Option<PathBuf> {
    if let Some(custom) = override_path {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    if let Ok(custom) = env::var("CHATSYNC_CONFIG_PATH") {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    let home = dirs::home_dir()?;
    Some(home.join(".config/chatsync").join("chatsync.toml"))
}

fn merge_file_config(base: &mut ChatsyncConfig, override_path: Option<&str>) -> Result<()> {
    let Some(path) = resolve_config_path(override_path) else {
        return Ok(());
    };
    if !path.exists() {
        if override_path.is_some() {
            return Err(anyhow!("config file not found: {}", path.display()));
        }
        return Ok(());
    }

    let raw = fs::read_to_string(&path)?;
    let parsed: PartialChatsyncConfig = toml::from_str(&raw)
        .map_err(|err| anyhow!("failed to parse config {}: {err}", path.display()))?;
    if let Some(chat) = parsed.chat {
        base.chat = chat;
    }
    if let Some(spotify) = parsed.spotify {
        base.spotify = spotify;
    }
    if let Some(sync) = parsed.sync {
        base.sync = sync;
    }
    Ok(())
}

pub fn load_config(override_path: Option<&str>) -> Result<ChatsyncConfig> {
    let mut cfg = ChatsyncConfig::default();
    merge_file_config(&mut cfg, override_path)?;

    cfg.chat.db_path = env_or_string("CHATSYNC_DB_PATH", &cfg.chat.db_path);
    cfg.chat.chat_id = env_or_string("CHATSYNC_CHAT_ID", &cfg.chat.chat_id);
    cfg.chat.link_filter = env_or_string("CHATSYNC_LINK_FILTER", &cfg.chat.link_filter);
    cfg.spotify.client_id = env_or_string("SPOTIFY_CLIENT_ID", &cfg.spotify.client_id);
    cfg.spotify.client_secret = env_or_string("SPOTIFY_CLIENT_SECRET", &cfg.spotify.client_secret);
    cfg.spotify.refresh_token = env_or_string("SPOTIFY_REFRESH_TOKEN", &cfg.spotify.refresh_token);
    cfg.spotify.scope = env_or_string("SPOTIFY_SCOPE", &cfg.spotify.scope);
    cfg.spotify.api_base = env_or_string("SPOTIFY_API_BASE", &cfg.spotify.api_base);
    cfg.spotify.accounts_base =
        env_or_string("SPOTIFY_ACCOUNTS_BASE", &cfg.spotify.accounts_base);
    cfg.sync.playlist_name = env_or_string("CHATSYNC_PLAYLIST_NAME", &cfg.sync.playlist_name);

    validate(&cfg)?;
    Ok(cfg)
}

impl ChatsyncConfig {
    pub fn require_chat_id(&self) -> Result<&str> {
        let id = self.chat.chat_id.trim();
        if id.is_empty() {
            return Err(anyhow!(
                "no chat id configured: set [chat] chat_id or CHATSYNC_CHAT_ID"
            ));
        }
        Ok(id)
    }

    pub fn require_playlist_name(&self) -> Result<&str> {
        let name = self.sync.playlist_name.trim();
        if name.is_empty() {
            return Err(anyhow!(
                "no playlist name configured: set [sync] playlist_name or CHATSYNC_PLAYLIST_NAME"
            ));
        }
        Ok(name)
    }
}
