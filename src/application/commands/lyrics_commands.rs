//! Lyrics Commands

/// 根据描述生成歌词
#[derive(Debug, Clone)]
pub struct GenerateLyrics {
    pub prompt: String,
}
