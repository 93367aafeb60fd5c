use hl7_reader::{Component, Delimiters, Field, Fields, Hl7Reader, Marshal, Message, Segment};
use proptest::prelude::*;

/// Bytes of a single segment: text plus every structural delimiter, but no
/// line terminators.
fn segment_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop::sample::select(b"AB1 .|^~\\&".to_vec()),
        0..64,
    )
}

proptest! {
    #[test]
    fn every_level_round_trips(data in segment_bytes()) {
        let d = Delimiters::default();
        prop_assert_eq!(Segment::new(data.clone(), d).to_hl7(), data.clone());
        prop_assert_eq!(Fields::new(data.clone(), d).to_hl7(), data.clone());
        prop_assert_eq!(Field::new(data.clone(), d).to_hl7(), data.clone());
        prop_assert_eq!(Component::new(data.clone(), d).to_hl7(), data);
    }

    #[test]
    fn split_without_delimiter_yields_one_child(data in "[A-Za-z0-9 ]{1,32}") {
        let segment = Segment::new(data.clone().into_bytes(), Delimiters::default());
        prop_assert_eq!(segment.len(), 1);
        prop_assert_eq!(segment.fields(0).unwrap().to_hl7(), data.into_bytes());
    }

    #[test]
    fn message_round_trips(segments in prop::collection::vec(segment_bytes(), 0..6)) {
        let mut data = b"MSH|^~\\&|APP".to_vec();
        for segment in &segments {
            data.push(b'\r');
            data.extend_from_slice(b"OBX|");
            data.extend_from_slice(segment);
        }
        let message = Message::new(data.clone()).unwrap();
        prop_assert_eq!(message.to_hl7(), data.clone());

        // Read through the stream detector as well.
        let reader = Hl7Reader::new(&data[..]);
        let read = reader.read_message().unwrap().expect("one message");
        prop_assert_eq!(read.as_bytes(), &data[..]);
        prop_assert!(reader.read_message().unwrap().is_none());
    }
}
