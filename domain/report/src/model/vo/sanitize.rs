use once_cell::sync::Lazy;
use regex::Regex;

/// ファイル名に使用できない文字を除去する（日本語は保持）
pub fn sanitize_filename(name: &str) -> String {
    static INVALID_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[\\/:*?"<>|]"#).unwrap());
    INVALID_CHARS.replace_all(name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_filesystem_invalid_characters() {
        assert_eq!(sanitize_filename(r#"a\b/c:d*e?f"g<h>i|j"#), "abcdefghij");
    }

    #[test]
    fn keeps_japanese_characters() {
        assert_eq!(sanitize_filename("田中様邸：作業/完了"), "田中様邸：作業完了");
    }

    #[test]
    fn plain_names_are_untouched() {
        assert_eq!(sanitize_filename("report_20250601.pdf"), "report_20250601.pdf");
    }
}
