//! Locale and provider vocabulary
//!
//! Everything here is static data compiled once on first use. No table is
//! keyed by locale at lookup time: callers never declare one, so every
//! entry is tried.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Canonical header field behind a localized label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    From,
    To,
    Cc,
    Subject,
    Date,
    /// Recognized so it does not end the header block, then dropped
    ReplyTo,
}

impl Field {
    /// Fields holding mailbox lists
    #[must_use]
    pub const fn is_mailbox(self) -> bool {
        matches!(self, Self::From | Self::To | Self::Cc)
    }
}

// Apple Mail (all locales)
const APPLE_MAIL_PHRASES: &[&str] = &[
    "Begin forwarded message",
    "Začátek přeposílané zprávy",
    "Start på videresendt besked",
    "Anfang der weitergeleiteten Nachricht",
    "Inicio del mensaje reenviado",
    "Välitetty viesti alkaa",
    "Début du message réexpédié",
    "Début du message transféré",
    "Započni proslijeđenu poruku",
    "Továbbított levél kezdete",
    "Inizio messaggio inoltrato",
    "Begin doorgestuurd bericht",
    "Videresendt melding",
    "Początek przekazywanej wiadomości",
    "Início da mensagem reencaminhada",
    "Início da mensagem encaminhada",
    "Începe mesajul redirecționat",
    "Начало переадресованного сообщения",
    "Začiatok preposlanej správy",
    "Vidarebefordrat mejl",
    "İleti başlangıcı",
    "Початок листа, що пересилається",
];

// Yahoo Mail, Thunderbird and HubSpot titles framed by dashes
const DASHED_PHRASES: &[&str] = &[
    "Přeposlaná zpráva",
    "Videresendt meddelelse",
    "Weitergeleitete Nachricht",
    "Forwarded Message",
    "Mensaje reenviado",
    "Edelleenlähetetty viesti",
    "Välitetty viesti",
    "Message transmis",
    "Message transféré",
    "Proslijeđena poruka",
    "Továbbított üzenet",
    "Messaggio inoltrato",
    "Doorgestuurd bericht",
    "Videresendt melding",
    "Przekazana wiadomość",
    "Wiadomość przekazana dalej",
    "Mensagem reencaminhada",
    "Mensagem encaminhada",
    "Mesaj redirecționat",
    "Mesaj redirecţionat",
    "Пересылаемое сообщение",
    "Пересланное сообщение",
    "Preposlaná správa",
    "Vidarebefordrat meddelande",
    "İletilmiş Mesaj",
    "İletilen İleti",
    "Перенаправлене повідомлення",
    "Переслане повідомлення",
    "Edasi saadetud kiri",
    "メッセージを転送",
];

// Outlook 2019 writes a reply-style line carrying date and sender
const OUTLOOK_2019_LINES: &[&str] = &[
    // cs
    r#"^\s?Dne\s?(?P<date>.+),\s?(?P<name>.+?)\s*[\[<](?P<address>.+?)[\]>]\s?napsal\(a\)\s?:"#,
    // da
    r#"^\s?D\.\s?(?P<date>.+?)\s?skrev\s?"(?P<name>.+)"\s*[\[<](?P<address>.+?)[\]>]\s?:"#,
    // de
    r#"^\s?Am\s?(?P<date>.+?)\s?schrieb\s?"(?P<name>.+)"\s*[\[<](?P<address>.+?)[\]>]\s?:"#,
    // en
    r#"^\s?On\s?(?P<date>.+),\s?"(?P<name>.+)"\s*[\[<](?P<address>.+?)[\]>]\s?wrote\s?:"#,
    // es
    r#"^\s?El\s?(?P<date>.+),\s?"(?P<name>.+)"\s*[\[<](?P<address>.+?)[\]>]\s?escribió\s?:"#,
    // fr
    r#"^\s?Le\s?(?P<date>.+),\s?«\s?(?P<name>.+?)\s?»\s*[\[<](?P<address>.+?)[\]>]\s?a écrit\s?:"#,
    // fi
    r#"^\s?(?P<name>.+?)\s*[\[<](?P<address>.+?)[\]>]\s?kirjoitti\s?(?P<date>.+?)\s?:"#,
    // hu
    r#"^\s?(?P<date>.+?)\s?időpontban\s?(?P<name>.+?)\s*[\[<(](?P<address>.+?)[\]>)]\s?ezt írta\s?:"#,
    // it
    r#"^\s?Il giorno\s?(?P<date>.+?)\s?"(?P<name>.+)"\s*[\[<](?P<address>.+?)[\]>]\s?ha scritto\s?:"#,
    // nl
    r#"^\s?Op\s?(?P<date>.+?)\s?heeft\s?(?P<name>.+?)\s*[\[<](?P<address>.+?)[\]>]\s?geschreven\s?:"#,
    // no
    r#"^\s?(?P<name>.+?)\s*[\[<](?P<address>.+?)[\]>]\s?skrev følgende den\s?(?P<date>.+?)\s?:"#,
    // pl
    r#"^\s?Dnia\s?(?P<date>.+?)\s?„(?P<name>.+)”\s*[\[<](?P<address>.+?)[\]>]\s?napisał\s?:"#,
    // pt
    r#"^\s?Em\s?(?P<date>.+),\s?"(?P<name>.+)"\s*[\[<](?P<address>.+?)[\]>]\s?escreveu\s?:"#,
    // ru
    r#"^\s?(?P<date>.+?)\s?пользователь\s?"(?P<name>.+)"\s*[\[<](?P<address>.+?)[\]>]\s?написал\s?:"#,
    // sk
    r#"^\s?(?P<date>.+?)\s?používateľ\s?(?P<name>.+?)\s*\([\[<](?P<address>.+?)[\]>]\)\s?napísal\s?:"#,
    // sv
    r#"^\s?Den\s?(?P<date>.+?)\s?skrev\s?"(?P<name>.+)"\s*[\[<](?P<address>.+?)[\]>]\s?följande\s?:"#,
    // tr
    r#"^\s?"(?P<name>.+)"\s*[\[<](?P<address>.+?)[\]>],\s?(?P<date>.+?)\s?tarihinde şunu yazdı\s?:"#,
];

const FROM_LABELS: &[&str] = &[
    "From",
    "Od",
    "Fra",
    "Von",
    "De la",
    "De",
    "Lähettäjä",
    "Šalje",
    "Feladó",
    "Da",
    "Van",
    "Expeditorul",
    "Отправитель",
    "Från",
    "Kimden",
    "Від кого",
    "Від",
    "Saatja",
    "Gönderen",
    "От",
    "Mittente",
    "Nadawca",
    "Odesílatel",
    "Absender",
    "Afzender",
    "送信元",
    "差出人",
];

const TO_LABELS: &[&str] = &[
    "To",
    "Komu",
    "Til",
    "An",
    "Para",
    "Vastaanottaja",
    "À",
    "A",
    "Prima",
    "Címzett",
    "Aan",
    "Do",
    "Către",
    "Кому",
    "Till",
    "Kime",
    "Saaja",
    "Adresat",
    "Destinatario",
    "Empfänger",
    "Destinataire",
    "宛先",
];

const CC_LABELS: &[&str] = &[
    "Cc",
    "Kopie",
    "Kopio",
    "Kopi",
    "Kopia",
    "Kopija",
    "Koopia",
    "Kópia",
    "Cópia",
    "Copie",
    "Copia",
    "Másolat",
    "Копия",
    "Копія",
    "Bilgi",
    "DW",
];

const SUBJECT_LABELS: &[&str] = &[
    "Subject",
    "Předmět",
    "Predmet",
    "Emne",
    "Betreff",
    "Asunto",
    "Aihe",
    "Objet",
    "Sujet",
    "Tárgy",
    "Oggetto",
    "Onderwerp",
    "Temat",
    "Assunto",
    "Subiectul",
    "Subiect",
    "Тема",
    "Ämne",
    "Ärende",
    "Konu",
    "Teema",
    "件名",
];

const DATE_LABELS: &[&str] = &[
    "Date",
    "Sent",
    "Datum",
    "Dato",
    "Dátum",
    "Data",
    "Fecha",
    "Päivämäärä",
    "Päiväys",
    "Tarih",
    "Дата",
    "Kuupäev",
    "Odesláno",
    "Sendt",
    "Gesendet",
    "Enviado",
    "Enviada",
    "Lähetetty",
    "Envoyé",
    "Poslano",
    "Elküldve",
    "Inviato",
    "Verzonden",
    "Wysłano",
    "Trimis",
    "Отправлено",
    "Надіслано",
    "Odoslané",
    "Skickat",
    "Gönderildi",
    "Gönderilme",
    "Saadetud",
    "日付",
    "送信日時",
];

const REPLY_TO_LABELS: &[&str] = &[
    "Reply-To",
    "Reply to",
    "Odpověď na",
    "Svar til",
    "Antwort an",
    "Responder a",
    "Vastausosoite",
    "Répondre à",
    "Odgovori na",
    "Válaszcím",
    "Rispondi a",
    "Antwoord aan",
    "Odpowiedź do",
    "Responder para",
    "Răspuns către",
    "Ответить",
    "Odpovedať",
    "Svara till",
    "Yanıt adresi",
    "Відповісти",
];

// Outlook Live / 365, Outlook 2019 and the rest localize the subject prefix
const SUBJECT_PREFIXES: &[&str] = &[
    "Fw",
    "FW",
    "Fwd",
    "VS",
    "WG",
    "RV",
    "TR",
    "I",
    "Vs",
    "PD",
    "ENC",
    "Redir.",
    "VB",
    "VL",
    "Videresend",
    "İLT",
];

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|")
}

fn compile(pattern: &str, case_insensitive: bool) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .unwrap_or_else(|e| panic!("invalid built-in pattern {pattern}: {e}"))
}

/// Apple Mail "Begin forwarded message:" in every locale
pub static APPLE_MAIL: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        &format!(r"^\s*(?:{})\s?:", alternation(APPLE_MAIL_PHRASES)),
        false,
    )
});

/// Gmail, Missive and `HubSpot` (en)
pub static GMAIL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\s*-{8,10}\s*Forwarded message\s*-{8,10}\s*$", false));

/// Outlook Live / 365 horizontal rule
pub static OUTLOOK_LIVE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*_{32}\s*$", false));

/// `MailMate`
pub static MAILMATE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\s?Forwarded message\s?:\s*$", false));

/// Yahoo Mail, Thunderbird and `HubSpot` localized titles
pub static DASHED: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        &format!(
            r"^\s*-{{5,10}}\s*(?:{})\s*-{{5,10}}\s*$",
            alternation(DASHED_PHRASES)
        ),
        false,
    )
});

/// Outlook 2019 reply-style lines, with `date`, `name` and `address` groups
pub static OUTLOOK_2019: LazyLock<Vec<Regex>> =
    LazyLock::new(|| OUTLOOK_2019_LINES.iter().map(|p| compile(p, false)).collect());

/// IONOS 1&1 and other "Original Message" clients
pub static ORIGINAL_MESSAGE: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^\s*-{5,10}\s*Original Message\s*-{5,10}\s*$",
        true,
    )
});

/// Localized header labels, one regex per canonical field.
///
/// Groups: `value`. Accepts bold rendering (`*From:*`), a full-width colon
/// and tabs between label and value.
pub static LABELS: LazyLock<Vec<(Field, Regex)>> = LazyLock::new(|| {
    [
        (Field::From, FROM_LABELS),
        (Field::To, TO_LABELS),
        (Field::Cc, CC_LABELS),
        (Field::Subject, SUBJECT_LABELS),
        (Field::Date, DATE_LABELS),
        (Field::ReplyTo, REPLY_TO_LABELS),
    ]
    .into_iter()
    .map(|(field, words)| {
        let pattern = format!(
            r"^\*?\s*(?:{})\s?[:：]\*?\s*(?P<value>.*)$",
            alternation(words)
        );
        (field, compile(&pattern, true))
    })
    .collect()
});

/// Any other header-shaped line (`X-Mailer: ...`, `Importance: ...`)
pub static GENERIC_LABEL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\*?[A-Za-z][A-Za-z0-9-]*\*?\s?:\*?(?:\s|$)", false));

/// Forward prefix of a subject line. Groups: `subject`.
pub static FORWARD_SUBJECT: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        &format!(
            r"^(?:{}):(?P<subject>.*)$",
            alternation(SUBJECT_PREFIXES)
        ),
        false,
    )
});

/// Bare address shape: `local@domain.tld`, no whitespace
pub static ADDRESS_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[^\s@<>]+@[^\s@<>]+\.[^\s@<>,;]+$", false));

/// Match a header line against every localized label
#[must_use]
pub fn match_label(line: &str) -> Option<(Field, &str)> {
    LABELS.iter().find_map(|(field, regex)| {
        regex
            .captures(line)
            .and_then(|caps| caps.name("value"))
            .map(|value| (*field, value.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_across_locales() {
        assert_eq!(match_label("From: a@b.c"), Some((Field::From, "a@b.c")));
        assert_eq!(match_label("Von: a@b.c"), Some((Field::From, "a@b.c")));
        assert_eq!(match_label("De la: a@b.c"), Some((Field::From, "a@b.c")));
        assert_eq!(match_label("Gesendet: Montag"), Some((Field::Date, "Montag")));
        assert_eq!(match_label("*Subject:* Hi"), Some((Field::Subject, "Hi")));
        assert_eq!(match_label("件名： Hi"), Some((Field::Subject, "Hi")));
        assert_eq!(match_label("CC: \tx@y.z"), Some((Field::Cc, "x@y.z")));
        assert_eq!(match_label("Reply-To: x@y.z"), Some((Field::ReplyTo, "x@y.z")));
    }

    #[test]
    fn test_label_prefix_is_not_a_label() {
        assert_eq!(match_label("Antwort an: x@y.z").map(|(f, _)| f), Some(Field::ReplyTo));
        assert!(match_label("Today: nothing").is_none());
        assert!(match_label("Aenean quis diam urna.").is_none());
    }

    #[test]
    fn test_markers() {
        assert!(APPLE_MAIL.is_match("Begin forwarded message:"));
        assert!(APPLE_MAIL.is_match("Anfang der weitergeleiteten Nachricht:"));
        assert!(GMAIL.is_match("---------- Forwarded message ---------"));
        assert!(OUTLOOK_LIVE.is_match(&"_".repeat(32)));
        assert!(!OUTLOOK_LIVE.is_match(&"_".repeat(20)));
        assert!(DASHED.is_match("-------- Weitergeleitete Nachricht --------"));
        assert!(DASHED.is_match("----- Forwarded Message -----"));
        assert!(ORIGINAL_MESSAGE.is_match("-----Original Message-----"));
    }

    #[test]
    fn test_outlook_2019_captures() {
        let line = r#"On 7 Apr 2020, at 11:47, "John Doe" <john.doe@acme.com> wrote:"#;
        let caps = OUTLOOK_2019
            .iter()
            .find_map(|r| r.captures(line))
            .unwrap();
        assert_eq!(&caps["date"], "7 Apr 2020, at 11:47");
        assert_eq!(&caps["name"], "John Doe");
        assert_eq!(&caps["address"], "john.doe@acme.com");
    }

    #[test]
    fn test_forward_subject() {
        let caps = FORWARD_SUBJECT.captures("TR: Integer consequat").unwrap();
        assert_eq!(caps["subject"].trim(), "Integer consequat");
        assert!(FORWARD_SUBJECT.is_match("Fwd: Hello"));
        assert!(!FORWARD_SUBJECT.is_match("Re: Hello"));
    }
}
