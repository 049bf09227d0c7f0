//! Per-emotion word list directories.
//!
//! A lexicon directory holds one `NRC_EmoLex_<emotion>.csv` file per emotion.
//! Missing files are tolerated: the emotion gets an empty word list and a
//! warning is logged.

use std::path::{Path, PathBuf};

use log::info;

use crate::analysis::analyzer::emotion::EmotionAnalyzer;
use crate::error::{EmolexError, Result};
use crate::lexicon::word_list::WordList;

/// File name of the word list for one emotion.
pub fn lexicon_file_name(emotion: &str) -> String {
    format!("NRC_EmoLex_{emotion}.csv")
}

/// One word list per emotion, kept in the order the emotions were given.
#[derive(Debug, Clone, Default)]
pub struct EmotionFileSet {
    lexicons: Vec<(String, WordList)>,
}

impl EmotionFileSet {
    /// Load the word list of each emotion from `dir`.
    ///
    /// The directory itself must exist; individual missing files become
    /// empty word lists.
    pub fn load<P, I, S>(dir: P, emotions: I, analyzer: &EmotionAnalyzer) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(EmolexError::lexicon(format!(
                "Lexicon directory not found: {}",
                dir.display()
            )));
        }

        let mut lexicons = Vec::new();
        for emotion in emotions {
            let emotion = emotion.into();
            let path = Self::path_for(dir, &emotion);
            let list = WordList::from_path_or_empty(&path, analyzer)?;
            lexicons.push((emotion, list));
        }

        let loaded = lexicons.iter().filter(|(_, l)| !l.is_empty()).count();
        info!(
            "Loaded {loaded} of {} emotion lexicons from {}",
            lexicons.len(),
            dir.display()
        );
        Ok(EmotionFileSet { lexicons })
    }

    /// Path of the word list for one emotion inside `dir`.
    pub fn path_for(dir: &Path, emotion: &str) -> PathBuf {
        dir.join(lexicon_file_name(emotion))
    }

    /// Emotion names in load order.
    pub fn emotions(&self) -> Vec<&str> {
        self.lexicons.iter().map(|(e, _)| e.as_str()).collect()
    }

    /// Word list of one emotion.
    pub fn get(&self, emotion: &str) -> Option<&WordList> {
        self.lexicons
            .iter()
            .find(|(e, _)| e == emotion)
            .map(|(_, l)| l)
    }

    /// Iterate over `(emotion, word list)` pairs in load order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordList)> {
        self.lexicons.iter().map(|(e, l)| (e.as_str(), l))
    }

    /// Number of emotions.
    pub fn len(&self) -> usize {
        self.lexicons.len()
    }

    /// Check if no emotions were loaded.
    pub fn is_empty(&self) -> bool {
        self.lexicons.is_empty()
    }
}
