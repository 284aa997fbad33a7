//! Context Builder.
//!
//! Renders retrieved chunks into a numbered, source-labelled block of text
//! that can be dropped straight into a prompt.

use super::types::{ChunkMetadata, ContentSource, RankedChunk};
use crate::core::config::ContextSettings;

pub struct ContextBuilder {
    config: ContextSettings,
}

impl ContextBuilder {
    pub fn new(config: ContextSettings) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ContextSettings {
        &self.config
    }

    /// Header line, then one `[n] <label>\n<text>\n\n` block per chunk.
    ///
    /// With `max_context_chars` set, blocks that would overflow the budget are
    /// left out. The first block is always kept so a non-empty input never
    /// renders as a bare header.
    pub fn build_context(&self, chunks: &[RankedChunk]) -> String {
        if chunks.is_empty() {
            return String::new();
        }

        let mut context = format!("{}\n\n", self.config.header);
        let mut length = context.chars().count();

        for (i, ranked) in chunks.iter().enumerate() {
            let block = format!(
                "[{}] {}\n{}\n\n",
                i + 1,
                source_label(&ranked.chunk.metadata),
                ranked.chunk.text
            );
            let block_length = block.chars().count();

            if let Some(max) = self.config.max_context_chars {
                if i > 0 && length + block_length > max {
                    tracing::debug!(
                        "Context budget of {} chars reached after {} chunks",
                        max,
                        i
                    );
                    break;
                }
            }

            context.push_str(&block);
            length += block_length;
        }

        context
    }

    /// Distinct source labels of `chunks`, in order of first appearance.
    pub fn sources(&self, chunks: &[RankedChunk]) -> Vec<String> {
        let mut sources: Vec<String> = Vec::new();
        for ranked in chunks {
            let label = source_label(&ranked.chunk.metadata);
            if !sources.contains(&label) {
                sources.push(label);
            }
        }
        sources
    }
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new(ContextSettings::default())
    }
}

pub fn source_label(metadata: &ChunkMetadata) -> String {
    match metadata.source {
        ContentSource::CurrentPage => "Current page".to_string(),
        ContentSource::Pdf => format!("PDF: {}", metadata.title),
        ContentSource::LinkedPage => format!("Linked page: {}", metadata.url),
    }
}
