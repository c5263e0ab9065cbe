//! Google Cloud Text-to-Speech and Speech-to-Text language tables.

use super::{RecognizerLanguage, SynthesisLanguage, Voice};

const fn v(value: &'static str, name: &'static str) -> Voice {
    Voice { value, name }
}

pub(super) static SYNTHESIS: &[SynthesisLanguage] = &[
    SynthesisLanguage {
        code: "ar-XA",
        name: "Arabic",
        voices: &[
            v("ar-XA-Standard-A", "Standard-A (Female)"),
            v("ar-XA-Standard-B", "Standard-B (Male)"),
            v("ar-XA-Standard-C", "Standard-C (Male)"),
            v("ar-XA-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "cmn-CN",
        name: "Chinese (Mandarin)",
        voices: &[
            v("cmn-CN-Standard-A", "Standard-A (Female)"),
            v("cmn-CN-Standard-B", "Standard-B (Male)"),
            v("cmn-CN-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "da-DK",
        name: "Danish",
        voices: &[
            v("da-DK-Standard-A", "Standard-A (Female)"),
            v("da-DK-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "nl-NL",
        name: "Dutch",
        voices: &[
            v("nl-NL-Standard-A", "Standard-A (Female)"),
            v("nl-NL-Standard-B", "Standard-B (Male)"),
            v("nl-NL-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "en-AU",
        name: "English (Australian)",
        voices: &[
            v("en-AU-Standard-A", "Standard-A (Female)"),
            v("en-AU-Standard-B", "Standard-B (Male)"),
            v("en-AU-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "en-IN",
        name: "English (Indian)",
        voices: &[
            v("en-IN-Standard-A", "Standard-A (Female)"),
            v("en-IN-Standard-B", "Standard-B (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "en-GB",
        name: "English (UK)",
        voices: &[
            v("en-GB-Standard-A", "Standard-A (Female)"),
            v("en-GB-Standard-B", "Standard-B (Male)"),
            v("en-GB-Standard-C", "Standard-C (Female)"),
            v("en-GB-Wavenet-A", "Wavenet-A (Female)"),
            v("en-GB-Wavenet-B", "Wavenet-B (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "en-US",
        name: "English (US)",
        voices: &[
            v("en-US-Standard-B", "Standard-B (Male)"),
            v("en-US-Standard-C", "Standard-C (Female)"),
            v("en-US-Standard-D", "Standard-D (Male)"),
            v("en-US-Standard-E", "Standard-E (Female)"),
            v("en-US-Wavenet-A", "Wavenet-A (Male)"),
            v("en-US-Wavenet-C", "Wavenet-C (Female)"),
            v("en-US-Wavenet-F", "Wavenet-F (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "fr-CA",
        name: "French (Canadian)",
        voices: &[
            v("fr-CA-Standard-A", "Standard-A (Female)"),
            v("fr-CA-Standard-B", "Standard-B (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "fr-FR",
        name: "French",
        voices: &[
            v("fr-FR-Standard-A", "Standard-A (Female)"),
            v("fr-FR-Standard-B", "Standard-B (Male)"),
            v("fr-FR-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "de-DE",
        name: "German",
        voices: &[
            v("de-DE-Standard-A", "Standard-A (Female)"),
            v("de-DE-Standard-B", "Standard-B (Male)"),
            v("de-DE-Wavenet-A", "Wavenet-A (Female)"),
            v("de-DE-Wavenet-B", "Wavenet-B (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "hi-IN",
        name: "Hindi",
        voices: &[
            v("hi-IN-Standard-A", "Standard-A (Female)"),
            v("hi-IN-Standard-B", "Standard-B (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "it-IT",
        name: "Italian",
        voices: &[
            v("it-IT-Standard-A", "Standard-A (Female)"),
            v("it-IT-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "ja-JP",
        name: "Japanese",
        voices: &[
            v("ja-JP-Standard-A", "Standard-A (Female)"),
            v("ja-JP-Standard-C", "Standard-C (Male)"),
            v("ja-JP-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "ko-KR",
        name: "Korean",
        voices: &[
            v("ko-KR-Standard-A", "Standard-A (Female)"),
            v("ko-KR-Standard-C", "Standard-C (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "pl-PL",
        name: "Polish",
        voices: &[
            v("pl-PL-Standard-A", "Standard-A (Female)"),
            v("pl-PL-Standard-B", "Standard-B (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "pt-BR",
        name: "Portuguese (Brazilian)",
        voices: &[
            v("pt-BR-Standard-A", "Standard-A (Female)"),
            v("pt-BR-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "ru-RU",
        name: "Russian",
        voices: &[
            v("ru-RU-Standard-A", "Standard-A (Female)"),
            v("ru-RU-Standard-B", "Standard-B (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "es-ES",
        name: "Spanish",
        voices: &[
            v("es-ES-Standard-A", "Standard-A (Female)"),
            v("es-ES-Standard-B", "Standard-B (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "sv-SE",
        name: "Swedish",
        voices: &[v("sv-SE-Standard-A", "Standard-A (Female)")],
    },
    SynthesisLanguage {
        code: "tr-TR",
        name: "Turkish",
        voices: &[
            v("tr-TR-Standard-A", "Standard-A (Female)"),
            v("tr-TR-Standard-B", "Standard-B (Male)"),
        ],
    },
    SynthesisLanguage {
        code: "uk-UA",
        name: "Ukrainian",
        voices: &[
            v("uk-UA-Standard-A", "Standard-A (Female)"),
            v("uk-UA-Wavenet-A", "Wavenet-A (Female)"),
        ],
    },
    SynthesisLanguage {
        code: "vi-VN",
        name: "Vietnamese",
        voices: &[
            v("vi-VN-Standard-A", "Standard-A (Female)"),
            v("vi-VN-Standard-B", "Standard-B (Male)"),
        ],
    },
];

const fn r(code: &'static str, name: &'static str) -> RecognizerLanguage {
    RecognizerLanguage { code, name }
}

pub(super) static RECOGNIZER: &[RecognizerLanguage] = &[
    r("af-ZA", "Afrikaans (South Africa)"),
    r("ar-EG", "Arabic (Egypt)"),
    r("ar-SA", "Arabic (Saudi Arabia)"),
    r("cmn-Hans-CN", "Chinese, Mandarin (Simplified, China)"),
    r("da-DK", "Danish (Denmark)"),
    r("nl-NL", "Dutch (Netherlands)"),
    r("en-AU", "English (Australia)"),
    r("en-CA", "English (Canada)"),
    r("en-IN", "English (India)"),
    r("en-IE", "English (Ireland)"),
    r("en-NZ", "English (New Zealand)"),
    r("en-GB", "English (United Kingdom)"),
    r("en-US", "English (United States)"),
    r("fi-FI", "Finnish (Finland)"),
    r("fr-CA", "French (Canada)"),
    r("fr-FR", "French (France)"),
    r("de-DE", "German (Germany)"),
    r("he-IL", "Hebrew (Israel)"),
    r("hi-IN", "Hindi (India)"),
    r("it-IT", "Italian (Italy)"),
    r("ja-JP", "Japanese (Japan)"),
    r("ko-KR", "Korean (South Korea)"),
    r("nb-NO", "Norwegian Bokmål (Norway)"),
    r("pl-PL", "Polish (Poland)"),
    r("pt-BR", "Portuguese (Brazil)"),
    r("pt-PT", "Portuguese (Portugal)"),
    r("ru-RU", "Russian (Russia)"),
    r("es-MX", "Spanish (Mexico)"),
    r("es-ES", "Spanish (Spain)"),
    r("es-US", "Spanish (United States)"),
    r("sv-SE", "Swedish (Sweden)"),
    r("tr-TR", "Turkish (Turkey)"),
    r("uk-UA", "Ukrainian (Ukraine)"),
    r("vi-VN", "Vietnamese (Vietnam)"),
];
