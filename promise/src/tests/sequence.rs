use crate::{
    promise::FIRST_SERIAL_NUMBER,
    sequence::{MemorySequence, SerialNumberSource},
    tests::fixtures::{tokens, Identities},
};
use std::{collections::BTreeSet, sync::Arc, thread};

#[test]
fn it_numbers_a_lineage_from_one() {
    let identities = Identities::new();
    let sequence = MemorySequence::new();

    assert_eq!(
        sequence.last_serial_number(&identities.consumer, &identities.provider),
        None
    );

    let serial_numbers: Vec<u64> = (0..3)
        .map(|_| {
            sequence
                .issue(&identities.consumer, &identities.provider, tokens(10))
                .serial_number
        })
        .collect();

    assert_eq!(serial_numbers, vec![FIRST_SERIAL_NUMBER, 2, 3]);
    assert_eq!(
        sequence.last_serial_number(&identities.consumer, &identities.provider),
        Some(3)
    );
}

#[test]
fn it_keeps_lineages_apart() {
    let identities = Identities::new();
    let sequence = MemorySequence::new();

    sequence.next_serial_number(&identities.consumer, &identities.provider);
    sequence.next_serial_number(&identities.consumer, &identities.provider);

    assert_eq!(
        sequence.next_serial_number(&identities.consumer, &identities.mallory),
        FIRST_SERIAL_NUMBER
    );
    assert_eq!(
        sequence.next_serial_number(&identities.provider, &identities.consumer),
        FIRST_SERIAL_NUMBER
    );
    assert_eq!(
        sequence.next_serial_number(&identities.consumer, &identities.provider),
        3
    );
}

#[test]
fn it_fills_in_the_promise() {
    let identities = Identities::new();
    let sequence = MemorySequence::new();

    let promise = sequence.issue(&identities.consumer, &identities.provider, tokens(64));

    assert_eq!(promise.issuer_id, "Consumer");
    assert_eq!(promise.benefiter_id, "Provider");
    assert_eq!(promise.amount, tokens(64));
    assert_eq!(promise.serial_number, FIRST_SERIAL_NUMBER);
}

#[test]
fn it_never_hands_out_a_number_twice() {
    let identities = Arc::new(Identities::new());
    let sequence = Arc::new(MemorySequence::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let identities = identities.clone();
            let sequence = sequence.clone();
            thread::spawn(move || {
                (0..50)
                    .map(|_| sequence.next_serial_number(&identities.consumer, &identities.provider))
                    .collect::<Vec<u64>>()
            })
        })
        .collect();

    let issued: BTreeSet<u64> = handles
        .into_iter()
        .flat_map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(issued.len(), 400);
    assert_eq!(issued.first(), Some(&1));
    assert_eq!(issued.last(), Some(&400));
}
