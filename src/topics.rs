//! Literary-topic summaries and the keyword matching stage.
//!
//! A small fixed table: each entry carries case-insensitive synonyms (Tamil
//! and Latin script), a summary passage, and the confidence the resolver
//! reports when the entry matches. Entries are tried in table order, so the
//! order IS the priority: named works first, the generic Thirukkural entry
//! last (it shares its synonyms with the numeric-reference marker and only
//! matters with alternate tables).

use once_cell::sync::Lazy;

/// One topic: synonyms to look for, the summary to answer with, and the
/// confidence policy for a hit.
#[derive(Debug, Clone)]
pub struct TopicEntry {
    pub synonyms: Vec<String>,
    pub summary: String,
    pub confidence: f64,
}

impl TopicEntry {
    pub fn new<'a>(synonyms: impl IntoIterator<Item = &'a str>, summary: &str, confidence: f64) -> Self {
        Self {
            synonyms: synonyms.into_iter().map(str::to_string).collect(),
            summary: summary.to_string(),
            confidence,
        }
    }

    /// True if any synonym occurs in `key` (already lowercased by the caller).
    fn matches(&self, key: &str) -> bool {
        self.synonyms.iter().any(|s| key.contains(s.as_str()))
    }
}

static DEFAULT_ENTRIES: Lazy<Vec<TopicEntry>> = Lazy::new(|| {
    vec![
        TopicEntry::new(
            ["சிலப்பதிகாரம்", "silappathikaram"],
            "சிலப்பதிகாரம் தமிழ் இலக்கியத்தின் ஐந்து பெரிய காவியங்களில் ஒன்று. இளங்கோவடிகள் எழுதிய இந்த காவியம் கண்ணகியின் நீதிக்கான போராட்டத்தை விவரிக்கிறது.",
            0.9,
        ),
        TopicEntry::new(
            ["சங்க", "sangam"],
            "சங்க இலக்கியம் என்பது கி.மு. 300 முதல் கி.பி. 300 வரை எழுதப்பட்ட பழமையான தமிழ் பாடல்கள். இதில் காதல், போர், இயற்கை ஆகியவை முக்கியமான தலைப்புகள்.",
            0.9,
        ),
        TopicEntry::new(
            ["கம்பர்", "kambar"],
            "கம்பர் தமிழ் கவிஞர். இவர் கம்பராமாயணம் என்ற காவியத்தை எழுதியவர், இது தமிழ் இலக்கியத்தில் முக்கியமான இடம் பெற்றுள்ளது.",
            0.9,
        ),
        TopicEntry::new(
            ["திருக்குறள்", "kural"],
            "திருக்குறள் என்பது தமிழ் இலக்கியத்தின் முக்கியமான நூல்.",
            0.5,
        ),
    ]
});

/// Ordered topic table; first matching entry wins.
#[derive(Debug, Clone)]
pub struct TopicTable {
    entries: Vec<TopicEntry>,
}

impl TopicTable {
    pub fn new(entries: Vec<TopicEntry>) -> Self {
        Self { entries }
    }

    /// First entry (in table order) with a synonym contained in `key`.
    pub fn find(&self, key: &str) -> Option<&TopicEntry> {
        self.entries.iter().find(|e| e.matches(key))
    }

    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }
}

impl Default for TopicTable {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRIES.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_has_four_entries_in_priority_order() {
        let table = TopicTable::default();
        assert_eq!(table.entries().len(), 4);
        assert_eq!(table.entries()[0].confidence, 0.9);
        assert_eq!(table.entries()[3].confidence, 0.5);
    }

    #[test]
    fn synonyms_match_in_either_script() {
        let table = TopicTable::default();
        let tamil = table.find("சிலப்பதிகாரம் பற்றி சொல்").unwrap();
        let latin = table.find("tell me about silappathikaram").unwrap();
        assert_eq!(tamil.summary, latin.summary);
        assert!(tamil.summary.starts_with("சிலப்பதிகாரம்"));
    }

    #[test]
    fn first_matching_entry_wins() {
        // A query naming both Silappathikaram and Kambar takes the earlier entry.
        let table = TopicTable::default();
        let hit = table.find("silappathikaram and kambar").unwrap();
        assert_eq!(hit.confidence, 0.9);
        assert!(hit.summary.starts_with("சிலப்பதிகாரம்"));
    }

    #[test]
    fn unknown_topics_do_not_match() {
        assert!(TopicTable::default().find("வானிலை எப்படி இருக்கிறது").is_none());
    }

    #[test]
    fn custom_tables_override_the_defaults() {
        let table = TopicTable::new(vec![TopicEntry::new(["புறநானூறு"], "சங்கத் தொகை நூல்.", 0.7)]);
        let hit = table.find("புறநானூறு பற்றி").unwrap();
        assert_eq!(hit.confidence, 0.7);
        assert!(table.find("kambar").is_none());
    }
}
