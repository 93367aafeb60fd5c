use chrono::{NaiveDate, NaiveDateTime};
use hl7_reader::{
    format_text, parse_repetition, Delimiters, Hl7Error, SubComponent, MAX_REPETITION,
};

const FORMAT_CASES: &[(&str, &str, &str)] = &[
    ("no format characters", "Hello world", "Hello world"),
    ("with highlighting", r"\H\Hello world\N\", "Hello world"),
    ("with fill mode", r"\.fi\Hello world\.nf\", "Hello world"),
    ("with escaped pipes", r"Hello\F\world", "Hello|world"),
    ("with upcarets", r"Hello\S\world", "Hello^world"),
    ("with ampersands", r"Hello\T\world", "Hello&world"),
    ("with tildes", r"Hello\R\world", "Hello~world"),
    ("with escapes", r"Hello\E\world", r"Hello\world"),
    ("with newlines", r"Hello\.br\world", "Hello\nworld"),
    ("with centered newlines", r"Hello\.ce\world", "Hello\nworld"),
    ("with skipped spaces", r"Hello\.sk3\world", "Hello   world"),
    ("with skip and no count", r"Hello\.sk\world", "Helloworld"),
    ("with indent", r"\.in3\Hello world", "   Hello world"),
    ("with indent and no count", r"\.in\Hello world", "Hello world"),
    ("with temporary indent", r"\.ti3\Hello world", "   Hello world"),
    ("with temporary indent and no count", r"\.ti\Hello world", "Hello world"),
    ("with newline space", r"Hello\.sp3\world", "Hello\n   world"),
    ("with newline and no count", r"Hello\.sp\world", "Hello\nworld"),
    ("with malformed count", r"Hello\.skab\world", "Helloworld"),
    ("with signed count", r"Hello\.sk+2\world", "Helloworld"),
    ("with overflowing count", r"a\.sk99999999999999999999999\b", "ab"),
    ("with count at usize max", r"a\.sk18446744073709551615\b", "ab"),
    ("with oversized count", r"a\.sk99999999999\b", "ab"),
    ("with oversized line count", r"a\.sp99999999999\b", "a\nb"),
    ("unknown sequence is kept", r"a\Zz\b", r"a\Zz\b"),
    ("unknown sequence then known one", r"a\x\F\b", r"a\x|b"),
    ("unterminated sequence", r"a\F", r"a\F"),
    ("escaped escape is not re-read", r"\E\F\", r"\F\"),
];

#[test]
fn format_text_applies_escape_rules() {
    for (name, input, want) in FORMAT_CASES {
        assert_eq!(format_text(input), *want, "formatting {}", name);
    }
}

#[test]
fn parse_repetition_is_lenient() {
    let cases: &[(&str, &str, usize)] = &[
        ("three", "3", 3),
        ("zero", "0", 0),
        ("empty", "", 0),
        ("invalid number", "a", 0),
        ("mixed", "2a", 0),
        ("largest allowed", "1024", MAX_REPETITION),
        ("above the limit", "1025", 0),
        ("usize max", "18446744073709551615", 0),
    ];
    for (name, count, want) in cases {
        assert_eq!(parse_repetition(count), *want, "repetition for {}", name);
    }
}

#[test]
fn display_uses_the_message_delimiters() {
    let custom = Delimiters {
        field: b'#',
        component: b'@',
        repetition: b'*',
        escape: b'!',
        sub_component: b'$',
    };
    let leaf = SubComponent::new(&b"a!F!b!S!c!T!d!R!e!E!f!.sk2!g"[..], custom);
    assert_eq!(leaf.to_string(), "a#b@c$d*e!f  g");
    // Backslashes mean nothing when another escape character is declared.
    let literal = SubComponent::new(&br"a\F\b"[..], custom);
    assert_eq!(literal.to_string(), r"a\F\b");
}

#[test]
fn dirty_string_skips_substitution() {
    let leaf = SubComponent::new(&br"\H\Hello\N\"[..], Delimiters::default());
    assert_eq!(leaf.dirty_string(), r"\H\Hello\N\");
    assert_eq!(leaf.to_string(), "Hello");
}

#[test]
fn int_parses_decimal_values() {
    let cases: &[(&str, &str, Option<i64>)] = &[
        ("integer", "1", Some(1)),
        ("negative", "-42", Some(-42)),
        ("letter", "a", None),
        ("date", "20060102", Some(20060102)),
        ("empty", "", None),
        ("decimal", "1.5", None),
    ];
    for (name, raw, want) in cases {
        let leaf = SubComponent::new(raw.as_bytes().to_vec(), Delimiters::default());
        match (leaf.int(), want) {
            (Ok(got), Some(want)) => assert_eq!(got, *want, "value for {}", name),
            (Err(Hl7Error::InvalidInteger { value, .. }), None) => {
                assert_eq!(value, *raw, "reported value for {}", name)
            }
            (got, _) => panic!("unexpected result for {}: {:?}", name, got),
        }
    }
}

fn datetime(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2012, 5, 5)
        .and_then(|d| d.and_hms_micro_opt(h, m, s, micro))
        .expect("valid test timestamp")
}

#[test]
fn time_picks_layout_by_length() {
    let cases: &[(&str, &str, Option<NaiveDateTime>)] = &[
        ("date", "20120505", Some(datetime(0, 0, 0, 0))),
        ("date with hour", "2012050509", Some(datetime(9, 0, 0, 0))),
        ("date with time", "201205050925", Some(datetime(9, 25, 0, 0))),
        ("date with seconds", "20120505092505", Some(datetime(9, 25, 5, 0))),
        ("one fraction digit", "20120505092505.1", Some(datetime(9, 25, 5, 100_000))),
        ("two fraction digits", "20120505092505.12", Some(datetime(9, 25, 5, 120_000))),
        ("three fraction digits", "20120505092505.123", Some(datetime(9, 25, 5, 123_000))),
        ("four fraction digits", "20120505092505.1234", Some(datetime(9, 25, 5, 123_400))),
        ("invalid format", "2012-05-05", None),
        ("invalid number of characters", "2", None),
        ("fraction without a dot", "2012050509250512", None),
        ("impossible date", "20121345", None),
        ("empty", "", None),
    ];
    for (name, raw, want) in cases {
        let leaf = SubComponent::new(raw.as_bytes().to_vec(), Delimiters::default());
        match (leaf.time(), want) {
            (Ok(got), Some(want)) => assert_eq!(got, *want, "timestamp for {}", name),
            (Err(Hl7Error::UnknownTimeFormat { value }), None) => {
                assert_eq!(value, *raw, "reported value for {}", name)
            }
            (got, _) => panic!("unexpected result for {}: {:?}", name, got),
        }
    }
}
