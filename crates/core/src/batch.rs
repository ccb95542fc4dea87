use crate::{
    error::{Result, TldwError},
    types::SummaryBatch,
};

pub const DEFAULT_BATCH_WIDTH: usize = 1000;

/// Number of characters fed to the summarizer per call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchWidth(usize);

impl BatchWidth {
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(TldwError::InvalidBatchWidth);
        }
        Ok(Self(width))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for BatchWidth {
    fn default() -> Self {
        Self(DEFAULT_BATCH_WIDTH)
    }
}

/// Split `text` into consecutive windows of `width` characters.
///
/// Windows are measured in chars so a multi-byte sequence is never cut, but
/// words and sentences are split wherever the boundary falls. The last
/// window may be shorter.
pub fn split_batches(text: &str, width: BatchWidth) -> Vec<SummaryBatch> {
    let width = width.get();
    let chars: Vec<char> = text.chars().collect();

    (0..chars.len())
        .step_by(width)
        .enumerate()
        .map(|(index, start)| {
            let end = (start + width).min(chars.len());
            SummaryBatch {
                index,
                start,
                end,
                text: chars[start..end].iter().collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn width(n: usize) -> BatchWidth {
        BatchWidth::new(n).unwrap()
    }

    #[test]
    fn zero_width_is_rejected() {
        assert!(matches!(BatchWidth::new(0), Err(TldwError::InvalidBatchWidth)));
    }

    #[test]
    fn default_width_is_one_thousand() {
        assert_eq!(BatchWidth::default().get(), 1000);
    }

    #[test]
    fn fifteen_hundred_chars_make_two_batches() {
        let text = "a".repeat(1500);
        let batches = split_batches(&text, BatchWidth::default());
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].width(), 1000);
        assert_eq!(batches[1].width(), 500);
    }

    #[test]
    fn exact_multiple_has_no_short_tail() {
        let text = "b".repeat(2000);
        let batches = split_batches(&text, BatchWidth::default());
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.width() == 1000));
    }

    #[test]
    fn empty_text_has_no_batches() {
        assert!(split_batches("", BatchWidth::default()).is_empty());
    }

    #[test]
    fn batches_partition_the_text() {
        let text = "The quick brown fox jumps over the lazy dog. ".repeat(37);
        for w in [1, 7, 64, 1000, 5000] {
            let batches = split_batches(&text, width(w));
            let len = text.chars().count();

            assert_eq!(batches.len(), len.div_ceil(w));
            let mut cursor = 0;
            for (i, batch) in batches.iter().enumerate() {
                assert_eq!(batch.index, i);
                assert_eq!(batch.start, cursor);
                assert!(batch.width() > 0 && batch.width() <= w);
                cursor = batch.end;
            }
            assert_eq!(cursor, len);

            let rejoined: String = batches.iter().map(|b| b.text.as_str()).collect();
            assert_eq!(rejoined, text);
        }
    }

    #[test]
    fn splits_words_at_arbitrary_boundaries() {
        let batches = split_batches("hello world", width(4));
        let texts: Vec<_> = batches.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, ["hell", "o wo", "rld"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let text = "привет".repeat(3);
        let batches = split_batches(&text, width(4));
        assert_eq!(batches.len(), 5);
        assert_eq!(batches[0].text, "прив");
        assert_eq!(batches[4].text, "ет");
    }

    #[test]
    fn same_input_same_partition() {
        let text = "idempotent ".repeat(300);
        assert_eq!(
            split_batches(&text, BatchWidth::default()),
            split_batches(&text, BatchWidth::default())
        );
    }
}
