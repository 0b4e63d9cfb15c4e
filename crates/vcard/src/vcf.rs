// vCard 3.0 serialization. Byte-for-byte stable for a given contact:
// no timestamps, no randomness, LF line separators, no trailing newline.

use crate::contact::Contact;

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|v| !v.is_empty())
}

/// Serialize a contact to a vCard 3.0 payload.
///
/// Fixed envelope and field order: N, FN, then ORG, TITLE, TEL, EMAIL,
/// URL, ADR, NOTE, each emitted only when its source field is non-empty.
/// The phone number is stripped to digits for importer compatibility.
pub fn generate(contact: &Contact) -> String {
    let mut out = String::from("BEGIN:VCARD\nVERSION:3.0\n");

    let last = contact.last_name.as_deref().unwrap_or("");
    out.push_str(&format!("N:{};{};;;\n", last, contact.first_name));
    out.push_str(&format!("FN:{}\n", contact.full_name()));

    if let Some(org) = present(&contact.organization) {
        out.push_str(&format!("ORG:{}\n", org));
    }
    if let Some(title) = present(&contact.title) {
        out.push_str(&format!("TITLE:{}\n", title));
    }
    if let Some(phone) = present(&contact.phone) {
        let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
        out.push_str(&format!("TEL;type=CELL:{}\n", digits));
    }
    if let Some(email) = present(&contact.email) {
        out.push_str(&format!("EMAIL;type=INTERNET:{}\n", email));
    }
    if let Some(website) = present(&contact.website) {
        out.push_str(&format!("URL:{}\n", website));
    }
    if let Some(address) = present(&contact.address) {
        out.push_str(&format!("ADR:;;{};;;;\n", address));
    }
    if let Some(note) = present(&contact.note) {
        out.push_str(&format!("NOTE:{}\n", note));
    }

    out.push_str("END:VCARD");
    out
}

/// Download filename: `First_Last.vcf` with whitespace runs collapsed to
/// underscores. An empty first name falls back to "contact"; a missing
/// last name still leaves the separator (`First_.vcf`), matching the
/// shipped behavior.
pub fn file_name(contact: &Contact) -> String {
    let first = if contact.first_name.is_empty() {
        "contact"
    } else {
        &contact.first_name
    };
    let last = contact.last_name.as_deref().unwrap_or("");
    let raw = format!("{}_{}.vcf", first, last);

    let mut out = String::with_capacity(raw.len());
    let mut in_space = false;
    for ch in raw.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Contact {
        Contact {
            first_name: "Jane".into(),
            phone: Some("(346) 252-2530".into()),
            ..Default::default()
        }
    }

    #[test]
    fn minimal_contact_emits_only_name_and_phone() {
        let card = generate(&jane());
        assert!(card.contains("TEL;type=CELL:3462522530"));
        assert!(card.contains("N:;Jane;;;"));
        assert!(card.contains("FN:Jane\n"));
        for absent in ["ORG:", "TITLE:", "EMAIL", "URL:", "ADR:", "NOTE:"] {
            assert!(!card.contains(absent), "unexpected line {absent}");
        }
    }

    #[test]
    fn full_contact_is_byte_exact() {
        let contact = Contact {
            first_name: "Jane".into(),
            last_name: Some("Doe".into()),
            organization: Some("Acme Corp".into()),
            title: Some("Product Designer".into()),
            email: Some("jane@example.com".into()),
            phone: Some("+1 (555) 010-2030".into()),
            website: Some("https://jane.example".into()),
            address: Some("1 Main St, Springfield".into()),
            note: Some("Met at RustConf".into()),
        };
        let expected = "BEGIN:VCARD\nVERSION:3.0\n\
                        N:Doe;Jane;;;\n\
                        FN:Jane Doe\n\
                        ORG:Acme Corp\n\
                        TITLE:Product Designer\n\
                        TEL;type=CELL:15550102030\n\
                        EMAIL;type=INTERNET:jane@example.com\n\
                        URL:https://jane.example\n\
                        ADR:;;1 Main St, Springfield;;;;\n\
                        NOTE:Met at RustConf\n\
                        END:VCARD";
        assert_eq!(generate(&contact), expected);
    }

    #[test]
    fn output_is_stable_across_calls() {
        let contact = jane();
        assert_eq!(generate(&contact), generate(&contact));
    }

    #[test]
    fn empty_strings_count_as_absent() {
        let contact = Contact {
            first_name: "Jane".into(),
            organization: Some(String::new()),
            email: Some(String::new()),
            ..Default::default()
        };
        let card = generate(&contact);
        assert!(!card.contains("ORG:"));
        assert!(!card.contains("EMAIL"));
    }

    #[test]
    fn file_name_replaces_whitespace_runs() {
        let contact = Contact {
            first_name: "Jane".into(),
            last_name: Some("Doe".into()),
            ..Default::default()
        };
        assert_eq!(file_name(&contact), "Jane_Doe.vcf");

        let spaced = Contact {
            first_name: "Mary Jo".into(),
            last_name: Some("van  Dyke".into()),
            ..Default::default()
        };
        assert_eq!(file_name(&spaced), "Mary_Jo_van_Dyke.vcf");
    }

    #[test]
    fn file_name_fallbacks_match_shipped_behavior() {
        let anonymous = Contact::default();
        assert_eq!(file_name(&anonymous), "contact_.vcf");

        let no_last = Contact {
            first_name: "Jane".into(),
            ..Default::default()
        };
        assert_eq!(file_name(&no_last), "Jane_.vcf");
    }
}
