use serde::{Deserialize, Serialize};

/// Source attribution carried by every chunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMeta {
    /// Originating file name (not the full path).
    pub source: String,
    /// 0-based position of the chunk within its source document.
    pub chunk_index: usize,
}

/// One labeled chunk as it appears in the output artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub id: String,
    pub text: String,
    pub meta: ChunkMeta,
}

impl ChunkRecord {
    /// Build the record for chunk `index` of `source`. The id is derived
    /// as `<source>__chunk_<index>`, unique within a run as long as file
    /// names are unique in the input directory.
    pub fn new(source: &str, index: usize, text: String) -> Self {
        Self {
            id: format!("{source}__chunk_{index}"),
            text,
            meta: ChunkMeta {
                source: source.to_string(),
                chunk_index: index,
            },
        }
    }
}
