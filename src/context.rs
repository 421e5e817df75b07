//! Shared analysis state behind one owner.
//!
//! Every cache here is built at most once per context and is read-only
//! afterwards. The lexicon is the only fallible, potentially remote load;
//! `OnceCell` serializes first access, so concurrent callers cannot race two
//! fetches of the same file. Everything else derives from the lexicon or
//! from embedded resources.

use std::collections::HashSet;
use std::fs;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::config::CoreConfig;
use crate::error::{LoadError, Result};
use crate::lexicon::{self, Lexicon};
use crate::multiword::{AliasMap, MultiwordIndex};
use crate::normalize::{stopwords, Normalizer};
use crate::respace::trie::{self, CostTrie};

pub struct AnalysisContext {
    config: CoreConfig,
    lexicon: OnceCell<Lexicon>,
    multiword: OnceCell<MultiwordIndex>,
    aliases: OnceCell<AliasMap>,
    stopwords: OnceCell<HashSet<String>>,
    known_words: OnceCell<HashSet<String>>,
    trie: OnceCell<CostTrie>,
}

impl AnalysisContext {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            lexicon: OnceCell::new(),
            multiword: OnceCell::new(),
            aliases: OnceCell::new(),
            stopwords: OnceCell::new(),
            known_words: OnceCell::new(),
            trie: OnceCell::new(),
        }
    }

    /// Context with a pre-seeded lexicon; nothing is read or fetched for it.
    pub fn with_lexicon(config: CoreConfig, lexicon: Lexicon) -> Self {
        Self {
            lexicon: OnceCell::with_value(lexicon),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Local cache if present, otherwise one remote fetch. At most one load
    /// ever runs, even when the first callers arrive concurrently.
    pub fn lexicon(&self) -> Result<&Lexicon> {
        self.lexicon
            .get_or_try_init(|| lexicon::load_or_fetch(&self.config))
    }

    /// Phrase index derived from the lexicon.
    pub fn multiword(&self) -> Result<&MultiwordIndex> {
        self.multiword.get_or_try_init(|| {
            let index = MultiwordIndex::build(self.lexicon()?);
            debug!(
                phrases = index.len(),
                max_len = index.max_len(),
                "multiword index built"
            );
            Ok(index)
        })
    }

    /// Alias map from the configured TSV. A missing file is an empty map,
    /// a malformed line is a load error.
    pub fn aliases(&self) -> Result<&AliasMap> {
        self.aliases.get_or_try_init(|| {
            let path = &self.config.alias_path;
            if !path.exists() {
                debug!(path = %path.display(), "no alias file, folding without aliases");
                return Ok(AliasMap::default());
            }
            let body = fs::read_to_string(path).map_err(|e| LoadError::io(path.clone(), e))?;
            let map = AliasMap::parse(&body)?;
            debug!(aliases = map.len(), "alias map loaded");
            Ok(map)
        })
    }

    /// Embedded stopword list minus every word the lexicon scores.
    pub fn stopwords(&self) -> Result<&HashSet<String>> {
        self.stopwords
            .get_or_try_init(|| Ok(stopwords::derive_stopwords(self.lexicon()?)))
    }

    /// Vocabulary the lemmatizer validates candidates against: the unigram
    /// table plus every word of every lexicon entry.
    pub fn known_words(&self) -> Result<&HashSet<String>> {
        self.known_words.get_or_try_init(|| {
            let mut known: HashSet<String> = trie::unigram_table()
                .iter()
                .map(|(word, _)| (*word).to_string())
                .collect();
            for (entry, _) in self.lexicon()?.entries() {
                for part in entry.split_whitespace() {
                    known.insert(part.to_string());
                }
            }
            debug!(words = known.len(), "known vocabulary built");
            Ok(known)
        })
    }

    /// Segmentation trie over the embedded unigram table.
    pub fn trie(&self) -> &CostTrie {
        self.trie.get_or_init(|| {
            let trie = CostTrie::from_unigram_counts(trie::unigram_table());
            debug!(nodes = trie.node_count(), "segmentation trie built");
            trie
        })
    }

    /// One normalizer over the shared caches.
    pub fn normalizer(&self) -> Result<Normalizer<'_>> {
        Ok(Normalizer::new(
            self.lexicon()?,
            self.multiword()?,
            Some(self.aliases()?),
            self.stopwords()?,
            self.known_words()?,
        ))
    }
}
