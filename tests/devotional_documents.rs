//! End-to-end extraction tests over complete devotional documents.
//!
//! Two realistic fixtures drive most assertions: a Portuguese document with
//! uppercase labels and an English document with bold-marked labels. Both
//! mirror the shapes the text generator actually produces.

use devo::devo::document::DevotionalDocument;
use devo::devo::extract::extract;
use devo::devo::input::RawInput;
use devo::devo::title::normalize;

const DEVOCIONAL_PT: &str = r#"
"Confia no Senhor de todo o teu coração, e não te estribes no teu próprio entendimento." Provérbios 3:5

INTRODUÇÃO:
Este é um texto introdutório em português.
Este é o segundo parágrafo da introdução.

TÓPICO I: Primeiro tema
Este é o conteúdo do primeiro tópico.

TÓPICO II: Segundo tema
Este é o conteúdo do segundo tópico.

CONCLUSÃO:
Esta é a conclusão do devocional.

ORAÇÃO:
Senhor, obrigado pela tua palavra.
Amém.
"#;

const DEVOCIONAL_EN: &str = r#"
**Title: Love and Pray**

**Introduction:**
In the hustle and bustle of our daily lives, love and prayer connect us to God and to one another.
Love is the foundation of our faith, and prayer is the key to our relationship with God.

**Bible Verses:**
**"And now these three remain: faith, hope and love. But the greatest of these is love."**
**Corinthians 13:13**

**Reflection:**
This passage reminds us of the centrality of love in our walk.
Love is not just an emotion; it is a choice, a decision to act in kindness.

**Practical Application:**
1. **Love Unconditionally:** Make a conscious effort to show love to everyone you encounter.
2. **Pray Continually:** Take moments throughout the day to pause and offer up prayers.

**Closing Prayer:**
Dear Heavenly Father, thank you for the gift of love and prayer.
Help us to love one another as you have loved us.
"#;

#[test]
fn portuguese_verse_and_reference() {
    let document = extract(&RawInput::from(DEVOCIONAL_PT));
    assert_eq!(
        document.verse.as_deref(),
        Some("Confia no Senhor de todo o teu coração, e não te estribes no teu próprio entendimento.")
    );
    assert_eq!(document.reference.as_deref(), Some("Provérbios 3:5"));
}

#[test]
fn portuguese_introduction() {
    let document = extract(&RawInput::from(DEVOCIONAL_PT));
    assert_eq!(
        document.introduction,
        vec![
            "Este é um texto introdutório em português.",
            "Este é o segundo parágrafo da introdução."
        ]
    );
}

#[test]
fn portuguese_topics_in_source_order() {
    let document = extract(&RawInput::from(DEVOCIONAL_PT));
    assert_eq!(document.topics.len(), 2);
    assert_eq!(document.topics[0].title, "Primeiro tema");
    assert_eq!(
        document.topics[0].paragraphs,
        vec!["Este é o conteúdo do primeiro tópico."]
    );
    assert_eq!(document.topics[1].title, "Segundo tema");
    assert_eq!(
        document.topics[1].paragraphs,
        vec!["Este é o conteúdo do segundo tópico."]
    );
}

#[test]
fn portuguese_conclusion_and_prayer() {
    let document = extract(&RawInput::from(DEVOCIONAL_PT));
    assert_eq!(document.conclusion, vec!["Esta é a conclusão do devocional."]);
    assert_eq!(
        document.prayer,
        vec!["Senhor, obrigado pela tua palavra.", "Amém."]
    );
}

#[test]
fn english_verse_and_reference() {
    let document = extract(&RawInput::from(DEVOCIONAL_EN));
    let verse = document.verse.expect("verse should be extracted");
    assert!(verse.contains("And now these three remain: faith, hope and love"));
    let reference = document.reference.expect("reference should be extracted");
    assert!(reference.contains("Corinthians 13:13"));
}

#[test]
fn english_introduction() {
    let document = extract(&RawInput::from(DEVOCIONAL_EN));
    assert_eq!(document.introduction.len(), 2);
    assert!(document.introduction[0].starts_with("In the hustle and bustle"));
    assert!(document.introduction[1].starts_with("Love is the foundation"));
}

#[test]
fn english_reflection_topic() {
    let document = extract(&RawInput::from(DEVOCIONAL_EN));
    let reflection = document
        .topics
        .iter()
        .find(|topic| topic.title == "Reflection")
        .expect("reflection topic");
    assert_eq!(reflection.paragraphs.len(), 2);
    assert!(reflection.paragraphs[0].contains("centrality of love"));
}

#[test]
fn english_practical_application_keeps_numbered_items_apart() {
    let document = extract(&RawInput::from(DEVOCIONAL_EN));
    let application = document
        .topics
        .iter()
        .find(|topic| topic.title == "Practical Application")
        .expect("practical application topic");
    assert_eq!(application.paragraphs.len(), 2);
    assert!(application.paragraphs[0].starts_with("Love Unconditionally"));
    assert!(application.paragraphs[1].starts_with("Pray Continually"));
}

#[test]
fn english_prayer_and_missing_conclusion() {
    let document = extract(&RawInput::from(DEVOCIONAL_EN));
    assert!(document
        .prayer
        .iter()
        .any(|p| p.contains("Heavenly Father")));
    // No English conclusion label exists; the section stays empty.
    assert!(document.conclusion.is_empty());
}

#[test]
fn no_paragraph_keeps_markdown_markers() {
    for fixture in [DEVOCIONAL_PT, DEVOCIONAL_EN] {
        let document = extract(&RawInput::from(fixture));
        for paragraph in document.iter_paragraphs() {
            assert!(!paragraph.contains("**"), "markdown left in {paragraph:?}");
            assert!(!paragraph.trim().is_empty());
        }
        for topic in &document.topics {
            assert!(!topic.title.contains("**"));
        }
    }
}

#[test]
fn bold_text_is_cleaned_wherever_it_lands() {
    let document = extract(&RawInput::from(
        "Este é um **texto em negrito** que deve ser limpo",
    ));
    let all: Vec<&str> = document.iter_paragraphs().collect();
    assert!(all.iter().any(|p| p.contains("texto em negrito")));
    assert!(all.iter().all(|p| !p.contains("**")));
}

#[test]
fn list_markers_are_stripped_from_introduction_lines() {
    let text = "Introdução:\n- Item 1\n- Item 2\n1. Item numerado 1\n2. Item numerado 2";
    let document = extract(&RawInput::from(text));
    assert_eq!(
        document.introduction,
        vec!["Item 1", "Item 2", "Item numerado 1", "Item numerado 2"]
    );
}

#[test]
fn absent_input_gives_a_fully_empty_document() {
    let document = extract(&RawInput::Absent);
    assert_eq!(document.verse, None);
    assert_eq!(document.reference, None);
    assert!(document.introduction.is_empty());
    assert!(document.topics.is_empty());
    assert!(document.conclusion.is_empty());
    assert!(document.prayer.is_empty());
}

#[test]
fn title_and_content_are_processed_independently() {
    let title = normalize(&RawInput::from("\"Amor e Oração\""));
    let document = extract(&RawInput::from(DEVOCIONAL_PT));
    assert_eq!(title.as_deref(), Some("Amor e oração"));
    assert!(!document.is_empty());
}

#[test]
fn documents_round_trip_through_serde() {
    let document = extract(&RawInput::from(DEVOCIONAL_PT));
    let json = serde_json::to_string(&document).expect("serialize");
    let back: DevotionalDocument = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, document);
}

#[test]
fn parsed_document_snapshot() {
    let text = "\"Tudo posso naquele que me fortalece.\" Filipenses 4:13\n\nINTRODUÇÃO:\nAbertura do devocional.\n\nTÓPICO I: Confiança\nCorpo do primeiro tema.\n\nORAÇÃO:\nAmém.";
    let document = extract(&RawInput::from(text));
    insta::assert_json_snapshot!(document, @r###"
    {
      "verse": "Tudo posso naquele que me fortalece.",
      "reference": "Filipenses 4:13",
      "introduction": [
        "Abertura do devocional."
      ],
      "topics": [
        {
          "title": "Confiança",
          "paragraphs": [
            "Corpo do primeiro tema."
          ]
        }
      ],
      "conclusion": [],
      "prayer": [
        "Amém."
      ]
    }
    "###);
}
