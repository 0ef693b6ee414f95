use std::path::Path;

use tokio::fs;
use tokio::fs::try_exists;

use crate::constants::{CAPTION_DELIMITER, MIN_CAPTION_LEN};
use crate::error::{PosterError, Result};

/// Non-blank lines in file order, cut to the first `max_count` when given.
/// Line endings are stripped; other whitespace in a prompt is kept.
pub fn parse_prompts(contents: &str, max_count: Option<usize>) -> Vec<String> {
    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(max_count.unwrap_or(usize::MAX))
        .map(str::to_string)
        .collect()
}

pub fn parse_captions(contents: &str) -> Vec<String> {
    contents
        .split(CAPTION_DELIMITER)
        .map(str::trim)
        // length in UTF-16 units, as caption files have always been measured
        .filter(|section| section.encode_utf16().count() > MIN_CAPTION_LEN)
        .map(str::to_string)
        .collect()
}

pub async fn load_prompts(path: &Path, max_count: Option<usize>) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|err| PosterError::io(path, err))?;
    Ok(parse_prompts(&contents, max_count))
}

pub async fn load_captions(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|err| PosterError::io(path, err))?;

    let captions = parse_captions(&contents);
    if captions.is_empty() {
        return Err(PosterError::EmptyResource(path.to_path_buf()));
    }
    Ok(captions)
}

/// Overwrites `path` with `bytes`, creating missing parent directories.
pub async fn persist_image(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if !try_exists(parent)
            .await
            .map_err(|err| PosterError::io(parent, err))?
        {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| PosterError::io(parent, err))?;
        }
    }

    fs::write(path, bytes)
        .await
        .map_err(|err| PosterError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_skip_blank_lines_and_keep_order() {
        let prompts = parse_prompts("first\n\n  \r\nsecond\r\nthird\n", None);
        assert_eq!(prompts, vec!["first", "second", "third"]);
    }

    #[test]
    fn prompts_keep_their_own_whitespace() {
        let prompts = parse_prompts("  indented prompt\r\ntrailing space \n", None);
        assert_eq!(prompts, vec!["  indented prompt", "trailing space "]);
    }

    #[test]
    fn prompts_truncate_to_limit() {
        let contents: String = (1..=40).map(|i| format!("prompt {i}\n")).collect();
        let prompts = parse_prompts(&contents, Some(30));
        assert_eq!(prompts.len(), 30);
        assert_eq!(prompts.first().map(String::as_str), Some("prompt 1"));
        assert_eq!(prompts.last().map(String::as_str), Some("prompt 30"));
    }

    #[test]
    fn prompt_limit_larger_than_file_keeps_everything() {
        assert_eq!(parse_prompts("a\nb\n", Some(10)).len(), 2);
    }

    #[test]
    fn captions_drop_short_sections() {
        let captions = parse_captions("a-long-enough-caption===short===another-long-enough-one");
        assert_eq!(
            captions,
            vec!["a-long-enough-caption", "another-long-enough-one"]
        );
    }

    #[test]
    fn caption_of_exactly_ten_chars_is_dropped() {
        assert!(parse_captions("0123456789").is_empty());
        assert_eq!(parse_captions("  0123456789A  "), vec!["0123456789A"]);
    }

    #[test]
    fn caption_length_counts_utf16_units() {
        // 7 chars but 11 UTF-16 units
        assert_eq!(parse_captions("Hi 🌅🌅🌅🌅"), vec!["Hi 🌅🌅🌅🌅"]);
        // 10 units exactly
        assert!(parse_captions("é123456789").is_empty());
    }

    #[test]
    fn captions_are_trimmed_across_lines() {
        let captions = parse_captions("\nGood morning, world!\n===\n\nSecond caption here.\n");
        assert_eq!(captions, vec!["Good morning, world!", "Second caption here."]);
    }

    #[tokio::test]
    async fn load_prompts_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_prompts(&dir.path().join("missing.txt"), None)
            .await
            .unwrap_err();
        assert!(matches!(err, PosterError::Io { .. }));
    }

    #[tokio::test]
    async fn load_captions_rejects_file_without_valid_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("captions.txt");
        std::fs::write(&path, "tiny===also tiny").unwrap();
        let err = load_captions(&path).await.unwrap_err();
        assert!(matches!(err, PosterError::EmptyResource(ref p) if p == &path));
    }

    #[tokio::test]
    async fn persist_image_creates_parent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("generated_image.png");
        persist_image(&path, b"first").await.unwrap();
        persist_image(&path, &[0, 0, 0]).await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), vec![0u8, 0, 0]);
    }
}
