//! Python bindings for newmm-rs using PyO3
//!
//! Exposes a PyThaiNLP-style `word_tokenize` plus a `Dictionary` class. The
//! module-level functions keep one loaded dictionary, keyed by its path,
//! until a different path is requested or `clear_cache()` is called.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use once_cell::sync::Lazy;
use pyo3::exceptions::{PyFileNotFoundError, PyIOError, PyMemoryError, PyValueError};
use pyo3::prelude::*;

use crate::dictionary::Dictionary;
use crate::error::Error;
use crate::segmenter::{SegmentOptions, Segmenter};
use crate::token::Token as RustToken;

/// Last dictionary used by the module-level functions, keyed by source path
static DICT_CACHE: Lazy<Mutex<Option<(Option<PathBuf>, Dictionary)>>> =
    Lazy::new(|| Mutex::new(None));

fn to_py_err(err: Error) -> PyErr {
    match err {
        Error::Io { .. } => PyIOError::new_err(err.to_string()),
        Error::Capacity(_) => PyMemoryError::new_err(err.to_string()),
    }
}

fn cached_dictionary(source: Option<&Path>) -> PyResult<Dictionary> {
    let mut cache = DICT_CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some((path, dict)) = cache.as_ref() {
        if path.as_deref() == source {
            return Ok(dict.clone());
        }
    }

    let dict = match source {
        Some(path) => Dictionary::open(path).map_err(to_py_err)?,
        None => Dictionary::default_shared().map_err(to_py_err)?,
    };
    *cache = Some((source.map(Path::to_path_buf), dict.clone()));
    Ok(dict)
}

fn segment_owned(dict: Dictionary, text: &str, keep_whitespace: bool) -> Vec<String> {
    let options = SegmentOptions {
        keep_whitespace,
        ..Default::default()
    };
    Segmenter::with_options(dict, options)
        .segment(text)
        .into_iter()
        .map(String::from)
        .collect()
}

/// A Python-compatible Token class
#[pyclass(name = "Token")]
#[derive(Clone)]
pub struct PyToken {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub start: usize,
    #[pyo3(get)]
    pub len: usize,
    #[pyo3(get)]
    pub kind: String,
}

impl From<RustToken> for PyToken {
    fn from(t: RustToken) -> Self {
        PyToken {
            text: t.text,
            start: t.start,
            len: t.len,
            kind: t.kind.as_str().to_string(),
        }
    }
}

#[pymethods]
impl PyToken {
    fn __repr__(&self) -> String {
        format!("Token('{}', kind='{}')", self.text, self.kind)
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

/// A loaded dictionary
///
/// Example:
///     >>> from newmm_rs import Dictionary
///     >>> d = Dictionary.from_words(["ฉัน", "ไป", "โรงเรียน"])
///     >>> d.segment("ฉันไปโรงเรียน")
///     ['ฉัน', 'ไป', 'โรงเรียน']
#[pyclass(name = "Dictionary")]
pub struct PyDictionary {
    dict: Dictionary,
}

#[pymethods]
impl PyDictionary {
    /// Load a dictionary file, or the built-in word list when `path` is None.
    ///
    /// Raises FileNotFoundError if the file does not exist.
    #[new]
    #[pyo3(signature = (path=None))]
    fn new(path: Option<PathBuf>) -> PyResult<Self> {
        let dict = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(PyFileNotFoundError::new_err(format!(
                        "Dictionary file not found: {}",
                        path.display()
                    )));
                }
                Dictionary::open(&path).map_err(to_py_err)?
            }
            None => Dictionary::default_shared().map_err(to_py_err)?,
        };
        Ok(PyDictionary { dict })
    }

    /// Build a dictionary from a list of words
    #[staticmethod]
    fn from_words(words: Vec<String>) -> PyResult<Self> {
        let dict = Dictionary::from_words(&words).map_err(to_py_err)?;
        Ok(PyDictionary { dict })
    }

    /// Segment text into a list of strings
    #[pyo3(signature = (text, keep_whitespace=true))]
    fn segment(&self, text: &str, keep_whitespace: bool) -> Vec<String> {
        segment_owned(self.dict.clone(), text, keep_whitespace)
    }

    /// Segment text into Token objects
    fn tokenize(&self, text: &str) -> Vec<PyToken> {
        Segmenter::new(self.dict.clone())
            .tokenize(text)
            .into_iter()
            .map(PyToken::from)
            .collect()
    }

    fn __contains__(&self, word: &str) -> bool {
        self.dict.contains(word)
    }

    fn __len__(&self) -> usize {
        self.dict.len()
    }

    fn __repr__(&self) -> String {
        format!("Dictionary(words={})", self.dict.len())
    }
}

/// Segment Thai text into words.
///
/// Args:
///     text: Input text
///     engine: Segmentation engine, only "newmm" is supported
///     custom_dict: Path to a dictionary file (one word per line)
///     keep_whitespace: Keep whitespace-only tokens (default: True)
///
/// Raises:
///     ValueError: unsupported engine
///     FileNotFoundError: custom_dict does not exist
#[pyfunction]
#[pyo3(signature = (text, engine="newmm", custom_dict=None, keep_whitespace=true))]
fn word_tokenize(
    text: &str,
    engine: &str,
    custom_dict: Option<PathBuf>,
    keep_whitespace: bool,
) -> PyResult<Vec<String>> {
    if engine != "newmm" {
        return Err(PyValueError::new_err(format!(
            "Unsupported engine '{}'. Currently only 'newmm' is supported.",
            engine
        )));
    }
    if text.is_empty() {
        return Ok(Vec::new());
    }
    if let Some(ref path) = custom_dict {
        if !path.exists() {
            return Err(PyFileNotFoundError::new_err(format!(
                "Dictionary file not found: {}",
                path.display()
            )));
        }
    }

    let dict = cached_dictionary(custom_dict.as_deref())?;
    Ok(segment_owned(dict, text, keep_whitespace))
}

/// newmm-style `segment`: returns [] for None or empty text
#[pyfunction]
#[pyo3(signature = (text=None, custom_dict=None, keep_whitespace=true))]
fn segment(
    text: Option<&str>,
    custom_dict: Option<PathBuf>,
    keep_whitespace: bool,
) -> PyResult<Vec<String>> {
    match text {
        None | Some("") => Ok(Vec::new()),
        Some(text) => word_tokenize(text, "newmm", custom_dict, keep_whitespace),
    }
}

/// Split text into Thai Character Clusters
#[pyfunction]
fn tcc_segment(text: &str) -> Vec<String> {
    crate::tcc::segment(text)
        .into_iter()
        .map(String::from)
        .collect()
}

/// Drop the cached dictionary
#[pyfunction]
fn clear_cache() {
    let mut cache = DICT_CACHE.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    *cache = None;
}

/// Create the Python module
#[pymodule]
fn newmm_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyToken>()?;
    m.add_class::<PyDictionary>()?;
    m.add_function(wrap_pyfunction!(word_tokenize, m)?)?;
    m.add_function(wrap_pyfunction!(segment, m)?)?;
    m.add_function(wrap_pyfunction!(tcc_segment, m)?)?;
    m.add_function(wrap_pyfunction!(clear_cache, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
