//! Video embed resolution
//!
//! Pattern-matched video id extraction for the providers with iframe
//! players. Anything unresolvable falls back to the native player on
//! the raw URL.

use crate::content::VideoProvider;

/// Resolve an iframe embed URL for the provider, if it has one.
pub fn resolve_embed_url(provider: VideoProvider, url: &str) -> Option<String> {
    match provider {
        VideoProvider::Youtube => {
            youtube_video_id(url).map(|id| format!("https://www.youtube.com/embed/{}", id))
        }
        VideoProvider::Vimeo => {
            vimeo_video_id(url).map(|id| format!("https://player.vimeo.com/video/{}", id))
        }
        VideoProvider::S3 => None,
    }
}

/// Extract a YouTube video id from watch, share, embed, or shorts URLs.
pub(crate) fn youtube_video_id(url: &str) -> Option<String> {
    let candidate = if let Some(rest) = url.split_once("watch?v=").map(|(_, r)| r) {
        rest
    } else if let Some(rest) = url.split_once("youtu.be/").map(|(_, r)| r) {
        rest
    } else if let Some(rest) = url.split_once("/embed/").map(|(_, r)| r) {
        rest
    } else if let Some(rest) = url.split_once("/shorts/").map(|(_, r)| r) {
        rest
    } else {
        return None;
    };
    let id: String = candidate
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Extract a Vimeo video id (numeric) from page or player URLs.
pub(crate) fn vimeo_video_id(url: &str) -> Option<String> {
    let rest = url
        .split_once("player.vimeo.com/video/")
        .or_else(|| url.split_once("vimeo.com/"))
        .map(|(_, r)| r)?;
    let id: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_youtube_watch_url() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/watch?v=dXyz_12-ab&t=10s"),
            Some("dXyz_12-ab".to_string())
        );
    }

    #[test]
    fn test_youtube_short_link() {
        assert_eq!(
            youtube_video_id("https://youtu.be/abc123XYZ"),
            Some("abc123XYZ".to_string())
        );
    }

    #[test]
    fn test_youtube_embed_and_shorts() {
        assert_eq!(
            youtube_video_id("https://www.youtube.com/embed/qqq"),
            Some("qqq".to_string())
        );
        assert_eq!(
            youtube_video_id("https://www.youtube.com/shorts/sss?feature=share"),
            Some("sss".to_string())
        );
    }

    #[test]
    fn test_youtube_unrecognized_url() {
        assert_eq!(youtube_video_id("https://example.com/watch"), None);
    }

    #[test]
    fn test_vimeo_page_and_player_urls() {
        assert_eq!(
            vimeo_video_id("https://vimeo.com/123456789"),
            Some("123456789".to_string())
        );
        assert_eq!(
            vimeo_video_id("https://player.vimeo.com/video/555?h=abc"),
            Some("555".to_string())
        );
    }

    #[test]
    fn test_resolve_embed_url_per_provider() {
        assert_eq!(
            resolve_embed_url(VideoProvider::Youtube, "https://youtu.be/abc"),
            Some("https://www.youtube.com/embed/abc".to_string())
        );
        assert_eq!(
            resolve_embed_url(VideoProvider::Vimeo, "https://vimeo.com/42"),
            Some("https://player.vimeo.com/video/42".to_string())
        );
        assert_eq!(
            resolve_embed_url(VideoProvider::S3, "https://cdn.example.com/v.mp4"),
            None
        );
    }

    #[test]
    fn test_resolve_embed_url_bad_link_falls_through() {
        assert_eq!(
            resolve_embed_url(VideoProvider::Youtube, "https://example.com/clip.mp4"),
            None
        );
    }
}
