//! Upload job definition, validation and title resolution.
//!
//! An [`UploadJob`] mirrors the form exactly as the user typed it. Before a
//! run starts it is checked and normalized into a [`ResolvedJob`]: video
//! present, titles trimmed and non-empty, description collapsed to `None`
//! when blank. Validation failures never touch run state; the UI reports
//! them as a single log line.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// How titles are assigned to channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TitleMode {
    /// One title reused for every channel.
    Single,
    /// One title per line, cycled across channels.
    #[default]
    Multiple,
}

/// Privacy setting applied to the simulated upload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Privacy {
    #[default]
    Public,
    Unlisted,
    Private,
}

impl Privacy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Privacy::Public => "public",
            Privacy::Unlisted => "unlisted",
            Privacy::Private => "private",
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The selected video file (name and size only; the content never leaves
/// the browser's file input).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoFile {
    pub name: String,
    pub size_bytes: f64,
}

impl VideoFile {
    /// Size in megabytes, for display.
    pub fn size_mb(&self) -> f64 {
        self.size_bytes / (1024.0 * 1024.0)
    }
}

/// Validation errors raised synchronously before a run starts.
///
/// Video presence is always checked first, then the title(s) for the
/// selected mode.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No video was selected.
    #[error("No video file selected")]
    MissingVideo,

    /// Single title mode with a blank title.
    #[error("Single title mode selected, but title is empty")]
    MissingTitle,

    /// Multiple title mode with no usable lines.
    #[error("Multiple title mode selected, but no titles entered")]
    NoTitles,
}

/// The upload form, exactly as entered by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadJob {
    pub video: Option<VideoFile>,
    pub title_mode: TitleMode,
    pub single_title: String,
    pub multiple_titles: String,
    pub description: String,
    pub privacy: Privacy,
}

impl UploadJob {
    /// Validate and normalize the job.
    pub fn resolve(&self) -> Result<ResolvedJob, ValidationError> {
        let video = self.video.clone().ok_or(ValidationError::MissingVideo)?;

        let titles = match self.title_mode {
            TitleMode::Single => {
                let title = self.single_title.trim();
                if title.is_empty() {
                    return Err(ValidationError::MissingTitle);
                }
                vec![title.to_string()]
            }
            TitleMode::Multiple => {
                let titles = split_title_lines(&self.multiple_titles);
                if titles.is_empty() {
                    return Err(ValidationError::NoTitles);
                }
                titles
            }
        };

        let description = match self.description.trim() {
            "" => None,
            d => Some(d.to_string()),
        };

        Ok(ResolvedJob {
            video,
            titles,
            description,
            privacy: self.privacy,
        })
    }
}

/// A validated job ready to run: at least one title is guaranteed.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedJob {
    pub video: VideoFile,
    pub titles: Vec<String>,
    pub description: Option<String>,
    pub privacy: Privacy,
}

impl ResolvedJob {
    /// Title assigned to channel index `i`.
    ///
    /// When the title list is shorter than the channel list it cycles from
    /// the beginning (`i % titles.len()`).
    pub fn title_for(&self, i: usize) -> &str {
        &self.titles[i % self.titles.len()]
    }
}

/// One title per line, trimmed, blank lines dropped.
fn split_title_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> VideoFile {
        VideoFile {
            name: "demo.mp4".into(),
            size_bytes: 2.0 * 1024.0 * 1024.0,
        }
    }

    #[test]
    fn test_missing_video_checked_first() {
        // Even with no titles either, the video error wins.
        let job = UploadJob::default();
        assert_eq!(job.resolve().unwrap_err(), ValidationError::MissingVideo);
    }

    #[test]
    fn test_single_mode_requires_nonblank_title() {
        let job = UploadJob {
            video: Some(video()),
            title_mode: TitleMode::Single,
            single_title: "   ".into(),
            ..Default::default()
        };
        assert_eq!(job.resolve().unwrap_err(), ValidationError::MissingTitle);
    }

    #[test]
    fn test_multiple_mode_requires_usable_lines()  {
        let job = UploadJob {
            video: Some(video()),
            title_mode: TitleMode::Multiple,
            multiple_titles: "\n   \n\n".into(),
            ..Default::default()
        };
        assert_eq!(job.resolve().unwrap_err(), ValidationError::NoTitles);
    }

    #[test]
    fn test_titles_are_trimmed_and_blank_lines_dropped() {
        let job = UploadJob {
            video: Some(video()),
            title_mode: TitleMode::Multiple,
            multiple_titles: "  First \n\n Second\n".into(),
            ..Default::default()
        };
        let resolved = job.resolve().unwrap();
        assert_eq!(resolved.titles, vec!["First", "Second"]);
    }

    #[test]
    fn test_title_cycling_wraps() {
        let job = UploadJob {
            video: Some(video()),
            title_mode: TitleMode::Multiple,
            multiple_titles: "A\nB".into(),
            ..Default::default()
        };
        let resolved = job.resolve().unwrap();
        let assigned: Vec<&str> = (0..4).map(|i| resolved.title_for(i)).collect();
        assert_eq!(assigned, vec!["A", "B", "A", "B"]);
    }

    #[test]
    fn test_single_title_repeats_for_every_channel() {
        let job = UploadJob {
            video: Some(video()),
            title_mode: TitleMode::Single,
            single_title: "Only".into(),
            ..Default::default()
        };
        let resolved = job.resolve().unwrap();
        assert_eq!(resolved.title_for(0), "Only");
        assert_eq!(resolved.title_for(3), "Only");
    }

    #[test]
    fn test_blank_description_becomes_none() {
        let job = UploadJob {
            video: Some(video()),
            title_mode: TitleMode::Single,
            single_title: "T".into(),
            description: "  \n ".into(),
            ..Default::default()
        };
        assert_eq!(job.resolve().unwrap().description, None);
    }

    #[test]
    fn test_video_size_mb() {
        assert!((video().size_mb() - 2.0).abs() < f64::EPSILON);
    }
}
