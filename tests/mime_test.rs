use email_forward_parser::*;

#[test]
fn test_read_message_plain() {
    let raw = b"From: forwarder@acme.com\r\n\
To: me@acme.com\r\n\
Subject: Fwd: Integer consequat non purus\r\n\
Content-Type: text/plain; charset=utf-8\r\n\
\r\n\
FYI\r\n\
\r\n\
---------- Forwarded message ---------\r\n\
From: John Doe <john.doe@acme.com>\r\n\
To: bessie.berry@acme.com\r\n\
\r\n\
Hi there\r\n";

    let result = read_message(raw).unwrap();

    assert!(result.forwarded);
    assert_eq!(result.message.as_deref(), Some("FYI"));
    let email = result.email.unwrap();
    assert_eq!(email.subject.as_deref(), Some("Integer consequat non purus"));
    assert_eq!(
        email.from,
        Some(Address::new(Some("John Doe"), Some("john.doe@acme.com")))
    );
    assert_eq!(email.body, "Hi there");
}

#[test]
fn test_read_message_picks_plain_part() {
    let raw = b"Subject: Fwd: Hello\r\n\
MIME-Version: 1.0\r\n\
Content-Type: multipart/alternative; boundary=\"b1\"\r\n\
\r\n\
--b1\r\n\
Content-Type: text/html\r\n\
\r\n\
<p>html</p>\r\n\
--b1\r\n\
Content-Type: text/plain\r\n\
\r\n\
---------- Forwarded message ---------\r\n\
From: John Doe <john.doe@acme.com>\r\n\
\r\n\
Hi there\r\n\
--b1--\r\n";

    let result = read_message(raw).unwrap();

    assert!(result.forwarded);
    let email = result.email.unwrap();
    assert_eq!(email.subject.as_deref(), Some("Hello"));
    assert_eq!(email.body, "Hi there");
}

#[test]
fn test_read_message_reply_subject_is_not_forwarded() {
    let raw = b"Subject: Re: Hello\r\n\
Content-Type: text/plain\r\n\
\r\n\
---------- Forwarded message ---------\r\n\
From: John Doe <john.doe@acme.com>\r\n\
\r\n\
Hi there\r\n";

    assert!(!read_message(raw).unwrap().forwarded);
}

#[test]
fn test_read_message_empty_subject_header() {
    let raw = b"Subject: \r\n\
Content-Type: text/plain\r\n\
\r\n\
---------- Forwarded message ---------\r\n\
From: John Doe <john.doe@acme.com>\r\n\
Subject: Hello\r\n\
\r\n\
Hi there\r\n";

    let result = read_message(raw).unwrap();

    assert!(result.forwarded);
    assert_eq!(result.email.unwrap().subject.as_deref(), Some("Hello"));
}

#[test]
fn test_read_message_without_plain_part() {
    let raw = b"Subject: Fwd: Hello\r\n\
Content-Type: text/html\r\n\
\r\n\
<p>Hi</p>\r\n";

    assert!(matches!(read_message(raw), Err(ParseError::MissingBody)));
}
