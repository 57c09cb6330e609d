//! Heading row for a page section.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SectionHeaderProps {
    pub title: String,
    /// Small grey line under the title
    pub hint: Option<String>,
    /// Right-aligned content next to the title, e.g. a status line
    #[props(default)]
    pub children: Element,
}

/// `h2` with an anchor id derived from the title, an optional hint and
/// optional trailing content.
#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    let anchor = anchor_id(&props.title);

    rsx! {
        div {
            style: "margin: 24px 0 8px 0; padding-bottom: 4px; border-bottom: 1px solid #e0e0e0;",
            div {
                style: "display: flex; justify-content: space-between; align-items: baseline;",
                h2 {
                    id: "{anchor}",
                    style: "margin: 0; font-size: 18px;",
                    "{props.title}"
                }
                {props.children}
            }
            if let Some(hint) = props.hint {
                p { style: "margin: 2px 0 0 0; font-size: 12px; color: #666;", "{hint}" }
            }
        }
    }
}

/// Lowercase ASCII words of `title` joined with `-`: "Cuaca Saat Ini" -> "cuaca-saat-ini".
pub fn anchor_id(title: &str) -> String {
    title
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("Prediksi Harga"), "prediksi-harga");
        assert_eq!(anchor_id("  Harga (Rp/kg) "), "harga-rp-kg");
        assert_eq!(anchor_id(""), "");
    }
}
