//! 歌词规范化
//!
//! 上游返回的歌词常带有多余空行，这里统一为逐行紧凑格式

/// 去除空白行后按 `\n` 重新拼接
///
/// 行内容本身不做修剪，只过滤修剪后为空的行。多次调用结果不变。
pub fn parse_lyrics(raw: &str) -> String {
    raw.split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_removed() {
        let raw = "[Verse]\n\nRain on the window\n   \nI wait for you\n";
        assert_eq!(parse_lyrics(raw), "[Verse]\nRain on the window\nI wait for you");
    }

    #[test]
    fn test_line_content_untouched() {
        let raw = "  indented line\ttrailing tab\t\n\nnext";
        assert_eq!(parse_lyrics(raw), "  indented line\ttrailing tab\t\nnext");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_lyrics(""), "");
        assert_eq!(parse_lyrics("\n\n \n"), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "single",
            "a\n\nb\n\n\nc",
            "\r\n\r\nwindows\r\nlines\r\n",
            "  \n[Chorus]\n  la la  \n\n",
        ];
        for raw in samples {
            let once = parse_lyrics(raw);
            let twice = parse_lyrics(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", raw);
        }
    }
}
