//! Part-of-speech tagging: trait-based tagger with a pretrained backend.
//!
//! Production backend: `BertPosTagger`, the rust-bert POS pipeline. Its
//! labels (Penn Treebank or Universal Dependencies, depending on the model)
//! are folded into the coarse UD set of [`Pos`].

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rust_bert::pipelines::pos_tagging::{POSConfig, POSModel};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Det,
    Pron,
    Adp,
    Cconj,
    Sconj,
    Part,
    Num,
    Intj,
    Punct,
    Sym,
    X,
}

impl Pos {
    /// Maps a fine-grained Penn Treebank tag or a coarse UD tag.
    pub fn from_label(label: &str) -> Pos {
        match label.to_ascii_uppercase().as_str() {
            "NN" | "NNS" | "NOUN" => Pos::Noun,
            "NNP" | "NNPS" | "PROPN" => Pos::Propn,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" | "VERB" => Pos::Verb,
            "MD" | "AUX" => Pos::Aux,
            "JJ" | "JJR" | "JJS" | "AFX" | "ADJ" => Pos::Adj,
            "RB" | "RBR" | "RBS" | "WRB" | "ADV" => Pos::Adv,
            "DT" | "PDT" | "WDT" | "DET" => Pos::Det,
            "PRP" | "PRP$" | "WP" | "WP$" | "EX" | "PRON" => Pos::Pron,
            "IN" | "RP" | "ADP" => Pos::Adp,
            "CC" | "CCONJ" => Pos::Cconj,
            "SCONJ" => Pos::Sconj,
            "TO" | "POS" | "PART" => Pos::Part,
            "CD" | "NUM" => Pos::Num,
            "UH" | "INTJ" => Pos::Intj,
            "SYM" | "$" | "#" => Pos::Sym,
            "." | "," | ":" | "``" | "''" | "-LRB-" | "-RRB-" | "HYPH" | "NFP" | "PUNCT" => {
                Pos::Punct
            }
            _ => Pos::X,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedToken {
    pub text: String,
    pub pos: Pos,
}

/// Tags every token of a text. Implementations are shared read-only
/// across requests.
#[async_trait]
pub trait PosTagger: Send + Sync {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, AppError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}

/// rust-bert token-classification POS model (default English config).
#[derive(Clone)]
pub struct BertPosTagger {
    model: Arc<Mutex<POSModel>>,
}

impl BertPosTagger {
    /// Fetches the weights (or reads them from the rust-bert cache) and
    /// builds the model. Blocking: call from `spawn_blocking`.
    pub fn load() -> Result<Self, AppError> {
        let model = POSModel::new(POSConfig::default())
            .map_err(|e| AppError::Model(format!("failed to load POS model: {e}")))?;

        info!("Loaded part-of-speech model");
        Ok(Self {
            model: Arc::new(Mutex::new(model)),
        })
    }
}

#[async_trait]
impl PosTagger for BertPosTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, AppError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let model = Arc::clone(&self.model);
        let input = text.to_string();

        let sentences = tokio::task::spawn_blocking(move || {
            let model = model
                .lock()
                .map_err(|_| AppError::Model("POS model lock poisoned".to_string()))?;
            let tags = model.predict(&[input.as_str()]);
            Ok::<_, AppError>(tags)
        })
        .await
        .map_err(|e| AppError::Model(format!("POS tagging task failed: {e}")))??;

        Ok(sentences
            .into_iter()
            .flatten()
            .map(|tag| TaggedToken {
                pos: Pos::from_label(&tag.label),
                text: tag.word,
            })
            .collect())
    }

    fn backend(&self) -> &'static str {
        "rust-bert-pos"
    }
}
