//! Static catalog of inspirational verses.
//!
//! A small fallback pool used when no generated content is available, e.g.
//! for a verse-of-the-day card. Selection is deterministic: the caller
//! supplies the entropy (a date hash, a counter, anything) and the catalog
//! maps it onto an entry.

use serde::Serialize;

/// One catalog entry: verse text plus its citation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InspirationalVerse {
    pub text: &'static str,
    pub reference: &'static str,
}

/// Inspirational verses, in catalog order.
pub const INSPIRATIONAL_VERSES: &[InspirationalVerse] = &[
    InspirationalVerse {
        text: "Porque Deus amou o mundo de tal maneira que deu o seu Filho unigênito, para que todo aquele que nele crê não pereça, mas tenha a vida eterna.",
        reference: "João 3:16",
    },
    InspirationalVerse {
        text: "Tudo posso naquele que me fortalece.",
        reference: "Filipenses 4:13",
    },
    InspirationalVerse {
        text: "O Senhor é o meu pastor, nada me faltará.",
        reference: "Salmos 23:1",
    },
    InspirationalVerse {
        text: "Não temas, porque eu sou contigo; não te assombres, porque eu sou teu Deus; eu te fortaleço, e te ajudo, e te sustento com a destra da minha justiça.",
        reference: "Isaías 41:10",
    },
    InspirationalVerse {
        text: "Mas os que esperam no Senhor renovarão as forças, subirão com asas como águias; correrão, e não se cansarão; caminharão, e não se fatigarão.",
        reference: "Isaías 40:31",
    },
    InspirationalVerse {
        text: "E conhecereis a verdade, e a verdade vos libertará.",
        reference: "João 8:32",
    },
    InspirationalVerse {
        text: "O amor é paciente, o amor é bondoso. Não inveja, não se vangloria, não se orgulha. Não maltrata, não procura seus interesses, não se ira facilmente, não guarda rancor.",
        reference: "1 Coríntios 13:4-5",
    },
    InspirationalVerse {
        text: "Entrega o teu caminho ao Senhor; confia nele, e ele tudo fará.",
        reference: "Salmos 37:5",
    },
];

/// Pick a catalog entry for the given seed.
pub fn pick(seed: u64) -> &'static InspirationalVerse {
    let index = (seed % INSPIRATIONAL_VERSES.len() as u64) as usize;
    &INSPIRATIONAL_VERSES[index]
}
