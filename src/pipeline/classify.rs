//! Keyword-based document classification.

use crate::types::DocumentType;

/// Ordered keyword rules; the first label whose keyword list matches wins,
/// so a passport scan whose text also mentions "account" stays a Passport.
const RULES: &[(DocumentType, &[&str])] = &[
    (
        DocumentType::Passport,
        &["passport", "nationality", "place of birth"],
    ),
    (
        DocumentType::Citizenship,
        &["citizenship", "citizen", "national id"],
    ),
    (
        DocumentType::PanCard,
        &["pan", "permanent account number", "income tax"],
    ),
    (
        DocumentType::AccountOpeningForm,
        &["account", "account opening", "bank account"],
    ),
];

/// Classify a document from its original file name and extracted text.
///
/// Pure and deterministic: substring matching over the lowercased name and
/// text, first-match-wins in `RULES` order, `Unknown` when nothing matches.
pub fn classify(file_name: &str, text: &str) -> DocumentType {
    let name = file_name.to_lowercase();
    let text = text.to_lowercase();

    for (label, keywords) in RULES {
        if keywords
            .iter()
            .any(|kw| name.contains(kw) || text.contains(kw))
        {
            return *label;
        }
    }

    DocumentType::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_filename() {
        assert_eq!(classify("passport_scan.png", ""), DocumentType::Passport);
        assert_eq!(classify("CITIZENSHIP.pdf", ""), DocumentType::Citizenship);
        assert_eq!(classify("pan_card.jpg", ""), DocumentType::PanCard);
        assert_eq!(
            classify("account_opening.pdf", ""),
            DocumentType::AccountOpeningForm
        );
    }

    #[test]
    fn test_classify_by_extracted_text() {
        assert_eq!(
            classify("scan001.png", "... Nationality: Nepali ..."),
            DocumentType::Passport
        );
        assert_eq!(
            classify("doc.pdf", "Permanent Account Number: ABCDE1234F"),
            DocumentType::PanCard
        );
        assert_eq!(
            classify("doc.pdf", "please open a bank account for me"),
            DocumentType::AccountOpeningForm
        );
    }

    #[test]
    fn test_first_match_wins() {
        // Contains both passport and account keywords; passport is checked first.
        assert_eq!(
            classify("scan.png", "passport holder's bank account details"),
            DocumentType::Passport
        );
        // Citizenship outranks PAN.
        assert_eq!(
            classify("scan.png", "citizen with income tax records"),
            DocumentType::Citizenship
        );
    }

    #[test]
    fn test_unknown_when_nothing_matches() {
        assert_eq!(classify("statement.pdf", "monthly summary"), DocumentType::Unknown);
    }

    #[test]
    fn test_empty_text_falls_through() {
        assert_eq!(classify("statement.pdf", ""), DocumentType::Unknown);
        assert_eq!(classify("", ""), DocumentType::Unknown);
    }
}
