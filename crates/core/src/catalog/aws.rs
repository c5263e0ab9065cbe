//! Amazon Polly language and voice table.

use super::{SynthesisLanguage, Voice};

const fn v(value: &'static str, name: &'static str) -> Voice {
    Voice { value, name }
}

pub(super) static SYNTHESIS: &[SynthesisLanguage] = &[
    SynthesisLanguage {
        code: "arb",
        name: "Arabic",
        voices: &[v("Zeina", "Zeina (Female)")],
    },
    SynthesisLanguage {
        code: "cmn-CN",
        name: "Chinese (Mandarin)",
        voices: &[v("Zhiyu", "Zhiyu (Female)")],
    },
    SynthesisLanguage {
        code: "da-DK",
        name: "Danish",
        voices: &[v("Naja", "Naja (Female)"), v("Mads", "Mads (Male)")],
    },
    SynthesisLanguage {
        code: "nl-NL",
        name: "Dutch",
        voices: &[v("Lotte", "Lotte (Female)"), v("Ruben", "Ruben (Male)")],
    },
    SynthesisLanguage {
        code: "en-AU",
        name: "English (Australian)",
        voices: &[
            v("Nicole", "Nicole (Female)"),
            v("Olivia", "Olivia (Female)"),
            v("Russell", "Russell (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "en-GB",
        name: "English (British)",
        voices: &[
            v("Amy", "Amy (Female)"),
            v("Emma", "Emma (Female)"),
            v("Brian", "Brian (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "en-IN",
        name: "English (Indian)",
        voices: &[v("Aditi", "Aditi (Female)"), v("Raveena", "Raveena (Female)")],
    },
    SynthesisLanguage {
        code: "en-US",
        name: "English (US)",
        voices: &[
            v("Joanna", "Joanna (Female)"),
            v("Salli", "Salli (Female)"),
            v("Kendra", "Kendra (Female)"),
            v("Kimberly", "Kimberly (Female)"),
            v("Ivy", "Ivy (Female, child)"),
            v("Matthew", "Matthew (Male)"),
            v("Justin", "Justin (Male, child)"),
            v("Joey", "Joey (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "en-GB-WLS",
        name: "English (Welsh)",
        voices: &[v("Geraint", "Geraint (Male)")],
    },
    SynthesisLanguage {
        code: "fr-FR",
        name: "French",
        voices: &[
            v("Celine", "Céline (Female)"),
            v("Lea", "Léa (Female)"),
            v("Mathieu", "Mathieu (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "fr-CA",
        name: "French (Canadian)",
        voices: &[v("Chantal", "Chantal (Female)")],
    },
    SynthesisLanguage {
        code: "de-DE",
        name: "German",
        voices: &[
            v("Marlene", "Marlene (Female)"),
            v("Vicki", "Vicki (Female)"),
            v("Hans", "Hans (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "hi-IN",
        name: "Hindi",
        voices: &[v("Aditi", "Aditi (Female)")],
    },
    SynthesisLanguage {
        code: "is-IS",
        name: "Icelandic",
        voices: &[v("Dora", "Dóra (Female)"), v("Karl", "Karl (Male)")],
    },
    SynthesisLanguage {
        code: "it-IT",
        name: "Italian",
        voices: &[
            v("Carla", "Carla (Female)"),
            v("Bianca", "Bianca (Female)"),
            v("Giorgio", "Giorgio (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "ja-JP",
        name: "Japanese",
        voices: &[v("Mizuki", "Mizuki (Female)"), v("Takumi", "Takumi (Male)")],
    },
    SynthesisLanguage {
        code: "ko-KR",
        name: "Korean",
        voices: &[v("Seoyeon", "Seoyeon (Female)")],
    },
    SynthesisLanguage {
        code: "pl-PL",
        name: "Polish",
        voices: &[
            v("Ewa", "Ewa (Female)"),
            v("Maja", "Maja (Female)"),
            v("Jacek", "Jacek (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "pt-BR",
        name: "Portuguese (Brazilian)",
        voices: &[
            v("Camila", "Camila (Female)"),
            v("Vitoria", "Vitória (Female)"),
            v("Ricardo", "Ricardo (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "ro-RO",
        name: "Romanian",
        voices: &[v("Carmen", "Carmen (Female)")],
    },
    SynthesisLanguage {
        code: "ru-RU",
        name: "Russian",
        voices: &[v("Tatyana", "Tatyana (Female)"), v("Maxim", "Maxim (Male)")],
    },
    SynthesisLanguage {
        code: "es-ES",
        name: "Spanish (European)",
        voices: &[
            v("Conchita", "Conchita (Female)"),
            v("Lucia", "Lucia (Female)"),
            v("Enrique", "Enrique (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "es-MX",
        name: "Spanish (Mexican)",
        voices: &[v("Mia", "Mia (Female)")],
    },
    SynthesisLanguage {
        code: "sv-SE",
        name: "Swedish",
        voices: &[v("Astrid", "Astrid (Female)")],
    },
    SynthesisLanguage {
        code: "tr-TR",
        name: "Turkish",
        voices: &[v("Filiz", "Filiz (Female)")],
    },
    SynthesisLanguage {
        code: "cy-GB",
        name: "Welsh",
        voices: &[v("Gwyneth", "Gwyneth (Female)")],
    },
];
