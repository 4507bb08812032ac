use std::io::BufReader;

/// Content-based language guess for extensions shared by several languages.
pub trait ContentClassifier: Send + Sync {
    /// Name the language of `content`, a file with extension `ext`.
    ///
    /// A non-empty `candidates` list restricts the answer to those languages
    /// and the returned name uses the candidate's spelling. An empty list
    /// accepts whatever the classifier finds. Returns `None` when there is
    /// no signal.
    fn classify(&self, ext: &str, content: &[u8], candidates: &[String]) -> Option<String>;
}

/// Classifier backed by the Linguist data shipped with `hyperpolyglot`.
///
/// Candidates come from the extension, then are narrowed by shebang,
/// Linguist's heuristics and finally its token classifier.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinguistClassifier;

impl ContentClassifier for LinguistClassifier {
    fn classify(&self, ext: &str, content: &[u8], candidates: &[String]) -> Option<String> {
        if content.contains(&0) {
            return None;
        }

        let linguist_ext = hyperpolyglot::detectors::get_extension(&format!("file.{ext}"))?;
        let mut found = hyperpolyglot::detectors::get_languages_from_extension(linguist_ext);
        if !candidates.is_empty() {
            found.retain(|lang| allowed(candidates, lang).is_some());
        }

        let text = String::from_utf8_lossy(content);
        let lang = detect(linguist_ext, &text, found)?;

        if candidates.is_empty() {
            Some(lang.to_string())
        } else {
            allowed(candidates, lang).map(String::from)
        }
    }
}

fn detect(ext: &'static str, text: &str, candidates: Vec<&'static str>) -> Option<&'static str> {
    if candidates.len() <= 1 {
        return candidates.first().copied();
    }

    let mut reader = BufReader::new(text.as_bytes());
    let shebang = hyperpolyglot::detectors::get_languages_from_shebang(&mut reader).unwrap_or_default();
    let candidates = hyperpolyglot::filter_candidates(candidates, shebang);
    if candidates.len() == 1 {
        return Some(candidates[0]);
    }

    let sample: &str = &hyperpolyglot::truncate(text);
    let heuristics = hyperpolyglot::detectors::get_languages_from_heuristics(ext, &candidates, sample);
    let candidates = hyperpolyglot::filter_candidates(candidates, heuristics);

    match candidates.len() {
        0 => None,
        1 => Some(candidates[0]),
        _ => Some(hyperpolyglot::detectors::classify(sample, &candidates)),
    }
}

/// The candidate spelling of `lang`, compared case-insensitively.
fn allowed<'c>(candidates: &'c [String], lang: &str) -> Option<&'c str> {
    candidates
        .iter()
        .find(|c| c.eq_ignore_ascii_case(lang))
        .map(String::as_str)
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
