// SPDX-License-Identifier: MPL-2.0
//! Source string classification.
//!
//! [`resolve`] turns a trigger's source string into a [`MediaDescriptor`].
//! A source whose host matches a known video provider becomes a video
//! embed; anything else falls back to image classification. The fallback is
//! deliberately permissive - the original widget never validated image URLs
//! either - but a video-host source whose identifier cannot be extracted is
//! reported as a distinct error rather than silently demoted to an image,
//! since rendering an unparsable video link as an image would break
//! playback with no visible cause.

use crate::domain::media::{MediaDescriptor, VideoId, VideoProvider};
use std::fmt;

/// URL shapes that carry a YouTube video identifier: short link, embed
/// path, legacy `/v/` path, watch query parameter, and trailing parameter
/// form.
const YOUTUBE_ID_MARKERS: [&str; 5] = ["youtu.be/", "/embed/", "/v/", "watch?v=", "&v="];

/// Failure to extract a usable identifier from a video-host source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The source matched a video provider's host but no identifier of the
    /// expected length could be extracted.
    UnresolvableVideoId {
        /// The provider whose host matched.
        provider: VideoProvider,
        /// The offending source string, for the embedder to report.
        source: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnresolvableVideoId { provider, source } => {
                write!(f, "No {provider} video id found in source: {source}")
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// Classifies a source string into a displayable media descriptor.
///
/// Pure function: the same input always yields the same result, and no
/// input makes it panic.
///
/// # Errors
///
/// Returns [`ResolveError::UnresolvableVideoId`] when the source matches a
/// video provider's host but carries no identifier of the expected length.
pub fn resolve(source: &str) -> Result<MediaDescriptor, ResolveError> {
    match video_provider(source) {
        Some(provider) => match extract_video_id(provider, source) {
            Some(video_id) => Ok(MediaDescriptor::VideoEmbed { provider, video_id }),
            None => Err(ResolveError::UnresolvableVideoId {
                provider,
                source: source.to_string(),
            }),
        },
        None => Ok(MediaDescriptor::Image {
            url: source.to_string(),
        }),
    }
}

/// Matches known video provider domains against every host-like fragment
/// in the source: the text between each `//` and the next path, query, or
/// fragment delimiter. Scanning every occurrence catches redirect-style
/// URLs that embed a provider link after their own host.
fn video_provider(source: &str) -> Option<VideoProvider> {
    for (index, _) in source.match_indices("//") {
        let rest = &source[index + 2..];
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let host = &rest[..end];
        if host.contains("youtube.com") || host.contains("youtu.be") {
            return Some(VideoProvider::YouTube);
        }
    }
    None
}

/// Tries each recognized URL shape in turn and validates the captured token
/// against the provider's identifier length. A token of the wrong length is
/// not "close enough" - it fails extraction.
fn extract_video_id(provider: VideoProvider, source: &str) -> Option<VideoId> {
    for marker in YOUTUBE_ID_MARKERS {
        if let Some(index) = source.find(marker) {
            let rest = &source[index + marker.len()..];
            let end = rest.find(['&', '?', '#', '/']).unwrap_or(rest.len());
            if let Some(id) = VideoId::new(provider, &rest[..end]) {
                return Some(id);
            }
        }
    }
    None
}
