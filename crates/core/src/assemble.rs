use crate::types::TranscriptFragment;

/// Join fragment texts with a single space, keeping fetch order.
///
/// Empty fragments are kept, so they still contribute a separator.
pub fn assemble(fragments: &[TranscriptFragment]) -> String {
    fragments
        .iter()
        .map(|fragment| fragment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
