// src/extractors/section.rs

use regex::Regex;

/// Declarative text-region delimiters: a start marker plus an ordered set of
/// candidate end markers. An empty `ends` list means "to end of document".
/// Used to scope a field group (e.g. the UIIC add-on table) or a free-text
/// block (warranties) so identical labels elsewhere don't collide.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub start: &'static str,
    pub ends: &'static [&'static str],
}

/// A `SectionSpec` with its markers compiled. Compilation happens once per
/// profile; `isolate` runs per extraction call.
#[derive(Debug)]
pub(crate) struct CompiledSection {
    start: Regex,
    end: Option<Regex>,
}

impl CompiledSection {
    pub(crate) fn compile(spec: &SectionSpec) -> Self {
        let start = Regex::new(&format!("(?i){}", regex::escape(spec.start)))
            .expect("section start marker is a valid literal pattern");
        let end = if spec.ends.is_empty() {
            None
        } else {
            let alternation = spec
                .ends
                .iter()
                .map(|marker| regex::escape(marker))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                Regex::new(&format!("(?i)(?:{alternation})"))
                    .expect("section end markers are valid literal patterns"),
            )
        };
        Self { start, end }
    }

    /// Returns the text between the *first* occurrence of the start marker
    /// and the first end marker after it (or end-of-text). `None` when the
    /// start marker is absent.
    pub(crate) fn isolate<'t>(&self, text: &'t str) -> Option<&'t str> {
        let begin = self.start.find(text)?.end();
        let rest = &text[begin..];
        match self.end.as_ref().and_then(|end| end.find(rest)) {
            Some(stop) => Some(&rest[..stop.start()]),
            None => Some(rest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEC: SectionSpec = SectionSpec {
        start: "ADD-ON COVERS",
        ends: &["CAR EXCESS", "WARRANT"],
    };

    #[test]
    fn isolates_between_markers() {
        let section = CompiledSection::compile(&SPEC);
        let text = "Preamble\nADD-ON COVERS\nDebris Removal  5 Cr\nCAR EXCESS\n0.5%";
        let scoped = section.isolate(text).unwrap();
        assert!(scoped.contains("Debris Removal"));
        assert!(!scoped.contains("Preamble"));
        assert!(!scoped.contains("0.5%"));
    }

    #[test]
    fn start_marker_is_case_insensitive_and_first_occurrence_wins() {
        let section = CompiledSection::compile(&SPEC);
        let text = "add-on covers\nfirst block\nADD-ON COVERS\nsecond block";
        let scoped = section.isolate(text).unwrap();
        assert!(scoped.starts_with("\nfirst block"));
    }

    #[test]
    fn runs_to_end_of_text_when_no_end_marker_matches() {
        let section = CompiledSection::compile(&SPEC);
        let text = "ADD-ON COVERS\neverything after";
        assert_eq!(section.isolate(text).unwrap().trim(), "everything after");
    }

    #[test]
    fn missing_start_marker_yields_none() {
        let section = CompiledSection::compile(&SPEC);
        assert!(section.isolate("no markers here").is_none());
    }

    #[test]
    fn earliest_end_marker_wins() {
        let section = CompiledSection::compile(&SPEC);
        let text = "ADD-ON COVERS inside WARRANT tail CAR EXCESS more";
        assert_eq!(section.isolate(text).unwrap(), " inside ");
    }
}
