//! Masked rendering over hidden character spans.
//!
//! Offsets are character offsets: host text selections arrive as character
//! positions, while `String` slicing needs byte offsets. Conversion happens
//! here, at the last moment, so stored spans stay in the host's vocabulary.

use crate::model::note::{HiddenRange, Note};
use log::debug;
use serde::{Deserialize, Serialize};

/// One run of display text, either shown plainly or redacted.
///
/// Concatenating the text of all segments, in order, always reproduces the
/// rendered content exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskSegment {
    Plain(String),
    Masked(String),
}

impl MaskSegment {
    /// Underlying text of this segment.
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) | Self::Masked(text) => text,
        }
    }

    /// Whether this segment is displayed redacted.
    pub fn is_masked(&self) -> bool {
        matches!(self, Self::Masked(_))
    }
}

/// Accumulates one hidden span on a note.
///
/// Endpoints may arrive in either order (reversed selections are normal);
/// the normalized `[min, max)` form is stored. A collapsed span or one
/// reaching past the end of the content is silently rejected, since it
/// originates from ambient host selection state that may already be stale.
///
/// Returns whether the span was stored.
pub fn add_hidden_range(note: &mut Note, anchor: usize, head: usize) -> bool {
    if anchor == head {
        return false;
    }

    let range = HiddenRange::new(anchor, head);
    if range.end > note.content_char_len() {
        debug!(
            "event=mask_reject module=core status=ignored id={} start={} end={}",
            note.id, range.start, range.end
        );
        return false;
    }

    note.hidden_ranges.push(range);
    true
}

/// Removes all hidden spans from a note (full restore).
///
/// Returns the number of spans removed.
pub fn clear_hidden_ranges(note: &mut Note) -> usize {
    let cleared = note.hidden_ranges.len();
    note.hidden_ranges.clear();
    cleared
}

/// Computes the display segments for a note.
///
/// In edit mode the raw editable text is returned as a single plain
/// segment; masking applies only to the viewing state. Otherwise stored
/// spans are clamped, sorted ascending and coalesced, then the content is
/// walked left to right emitting alternating plain and masked runs.
pub fn render(note: &Note) -> Vec<MaskSegment> {
    if note.is_editing {
        return vec![MaskSegment::Plain(note.visible_content().to_string())];
    }

    let content = note.content.as_str();
    let ranges = coalesced_ranges(&note.hidden_ranges, char_len(content));
    if ranges.is_empty() {
        return vec![MaskSegment::Plain(content.to_string())];
    }

    let mut segments = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            segments.push(MaskSegment::Plain(slice_chars(content, cursor, range.start)));
        }
        segments.push(MaskSegment::Masked(slice_chars(
            content,
            range.start,
            range.end,
        )));
        cursor = range.end;
    }

    let total = char_len(content);
    if cursor < total {
        segments.push(MaskSegment::Plain(slice_chars(content, cursor, total)));
    }

    segments
}

/// Clamps, sorts and merges spans so the render walk sees disjoint ranges
/// in ascending order. Overlapping and touching spans coalesce into one,
/// which keeps the walk from double-emitting or skipping characters.
fn coalesced_ranges(ranges: &[HiddenRange], max_chars: usize) -> Vec<HiddenRange> {
    let mut clamped: Vec<HiddenRange> = ranges
        .iter()
        .map(|range| range.clamped_to(max_chars))
        .filter(|range| !range.is_empty())
        .collect();
    clamped.sort_by_key(|range| (range.start, range.end));

    let mut merged: Vec<HiddenRange> = Vec::with_capacity(clamped.len());
    for range in clamped {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Slices `[start, end)` in character offsets, respecting UTF-8 boundaries.
fn slice_chars(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

#[cfg(test)]
mod tests {
    use super::{coalesced_ranges, slice_chars};
    use crate::model::note::HiddenRange;

    #[test]
    fn coalesce_merges_overlapping_and_touching_spans() {
        let ranges = vec![
            HiddenRange::new(4, 8),
            HiddenRange::new(0, 2),
            HiddenRange::new(2, 5),
        ];
        assert_eq!(coalesced_ranges(&ranges, 20), vec![HiddenRange::new(0, 8)]);
    }

    #[test]
    fn coalesce_keeps_disjoint_spans_sorted() {
        let ranges = vec![HiddenRange::new(6, 9), HiddenRange::new(1, 3)];
        assert_eq!(
            coalesced_ranges(&ranges, 20),
            vec![HiddenRange::new(1, 3), HiddenRange::new(6, 9)]
        );
    }

    #[test]
    fn coalesce_drops_spans_emptied_by_clamping() {
        let ranges = vec![HiddenRange::new(10, 15), HiddenRange::new(0, 2)];
        assert_eq!(coalesced_ranges(&ranges, 4), vec![HiddenRange::new(0, 2)]);
    }

    #[test]
    fn slice_chars_handles_multibyte_text() {
        assert_eq!(slice_chars("héllo", 1, 3), "él");
        assert_eq!(slice_chars("日本語です", 0, 3), "日本語");
    }
}
