// SPDX-License-Identifier: MPL-2.0
//! Resolved media types.
//!
//! A [`MediaDescriptor`] is the typed result of classifying a trigger's
//! source string: either a static image URL or an embeddable video. It is
//! never partially constructed - a `VideoEmbed` always carries a validated
//! [`VideoId`].

use std::fmt;

/// Embed player parameters shared by every video embed.
pub mod embed {
    /// Fixed player flags: related videos suppressed, branding hidden,
    /// no autoplay-loop.
    pub const PLAYER_FLAGS: &str = "rel=0&modestbranding=1&loop=0";
    /// Aspect ratio (width / height) for the placeholder the rendering
    /// surface reserves while the embed loads.
    pub const ASPECT_RATIO: f32 = 16.0 / 9.0;
}

/// A video provider the resolver knows how to embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoProvider {
    /// YouTube-style hosts (`youtube.com`, `youtu.be`).
    YouTube,
}

impl VideoProvider {
    /// Exact identifier length this provider uses.
    #[must_use]
    pub fn id_length(self) -> usize {
        match self {
            VideoProvider::YouTube => 11,
        }
    }

    /// Embed URL for a validated video identifier, including the fixed
    /// player flags.
    #[must_use]
    pub fn embed_url(self, video_id: &VideoId) -> String {
        match self {
            VideoProvider::YouTube => format!(
                "https://www.youtube.com/embed/{}?{}",
                video_id.as_str(),
                embed::PLAYER_FLAGS
            ),
        }
    }
}

impl fmt::Display for VideoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoProvider::YouTube => write!(f, "YouTube"),
        }
    }
}

/// A provider video identifier, guaranteed to have the provider's exact
/// expected length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoId(String);

impl VideoId {
    /// Creates a video identifier, validating its length against the
    /// provider's expectation. Returns `None` for any other length - a
    /// token of the wrong length is an extraction failure, not an id.
    #[must_use]
    pub fn new(provider: VideoProvider, token: &str) -> Option<Self> {
        if token.len() == provider.id_length() {
            Some(Self(token.to_string()))
        } else {
            None
        }
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The resolved, typed representation of a source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaDescriptor {
    /// A static image, displayed via an image element.
    Image {
        /// The source URL, passed through untouched.
        url: String,
    },
    /// An embeddable video, displayed via a provider embed plus an
    /// aspect-ratio placeholder.
    VideoEmbed {
        /// The provider whose embed template applies.
        provider: VideoProvider,
        /// The validated video identifier.
        video_id: VideoId,
    },
}

impl MediaDescriptor {
    /// Returns `true` for the image variant.
    #[must_use]
    pub fn is_image(&self) -> bool {
        matches!(self, MediaDescriptor::Image { .. })
    }

    /// Returns `true` for the video embed variant.
    #[must_use]
    pub fn is_video_embed(&self) -> bool {
        matches!(self, MediaDescriptor::VideoEmbed { .. })
    }

    /// Returns the full embed URL for video embeds, `None` for images.
    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        match self {
            MediaDescriptor::Image { .. } => None,
            MediaDescriptor::VideoEmbed { provider, video_id } => {
                Some(provider.embed_url(video_id))
            }
        }
    }
}
