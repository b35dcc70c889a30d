//! Framing, batching and session log tests
//!
//! Alur lengkap: holder -> SOFH frame -> packet -> decoder -> typed message.

use std::fs;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use b3_boe::core::{Error, FrameJournal, Price, HEADER_SIZE};
use b3_boe::protocol::log::{decode_log_line, LOG_LINE_PREFIX_SIZE};
use b3_boe::protocol::{
    calculate_batch_size, process_typified, AnyMessage, ExecutionReportTrade203, FrameBuffer,
    FrameDecoder, FrameEncoder, MessageBatch, MessageBatchCombiner, MessageHolder,
    NetworkMessage, OrderCancelRequest105, Sequence9, Side, SimpleNewOrder100, Sofh,
    DEFAULT_MAX_PACKET_SIZE, MAX_MESSAGE_SIZE, SBE_ENCODING_TYPE, SOFH_SIZE,
};

const PREFIX: &str = "20240311-13:45:07.000000001 OUT ";

fn order_packet() -> Vec<u8> {
    let mut orders = MessageBatch::<SimpleNewOrder100<FrameBuffer>>::with_size(3).unwrap();
    for (i, order) in orders.iter_mut().enumerate() {
        order
            .set_cl_ord_id(i as u64 + 1)
            .set_side(Side::Buy)
            .set_order_qty(100 * (i as u64 + 1))
            .set_price(Some(Price::from_units(10).unwrap()));
    }
    let mut cancel = MessageHolder::<OrderCancelRequest105<FrameBuffer>>::new().unwrap();
    cancel.set_cl_ord_id(9).set_order_id(Some(77));

    let mut combiner = MessageBatchCombiner::new();
    combiner.add_batch(&mut orders).unwrap();
    combiner.add(&mut cancel).unwrap();
    assert!(combiner.fits(DEFAULT_MAX_PACKET_SIZE));
    combiner.to_bytes()
}

#[test]
fn test_packet_roundtrip() {
    let packet = order_packet();

    let frames: Vec<NetworkMessage> = FrameDecoder::new(&packet)
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(calculate_batch_size(&frames), packet.len());

    let mut quantities = Vec::new();
    let mut cancelled = None;
    for frame in &frames {
        assert_eq!(frame.sofh().encoding_type, SBE_ENCODING_TYPE);
        let handled = process_typified(frame.message().unwrap(), |msg| match msg {
            AnyMessage::SimpleNewOrder100(order) => quantities.push(order.order_qty()),
            AnyMessage::OrderCancelRequest105(cancel) => cancelled = cancel.order_id(),
            other => panic!("unexpected {other:?}"),
        })
        .unwrap();
        assert!(handled);
    }
    assert_eq!(quantities, vec![100, 200, 300]);
    assert_eq!(cancelled, Some(77));
}

#[test]
fn test_holder_copy_from_frame() {
    let packet = order_packet();
    let frame = FrameDecoder::new(&packet).nth(1).unwrap().unwrap();

    let mut copy = MessageHolder::<SimpleNewOrder100<FrameBuffer>>::from_network_message(&frame)
        .unwrap();
    assert_eq!(copy.cl_ord_id(), 2);

    // Copy bisa diubah tanpa menyentuh packet asal
    copy.set_memo("resent").unwrap();
    let resent = copy.to_network_message().unwrap();
    assert_eq!(resent.len(), frame.len() + "resent".len());
    assert_eq!(
        SimpleNewOrder100::wrap(frame.payload()).unwrap().memo(),
        ""
    );
}

#[test]
fn test_wrong_holder_type_is_rejected() {
    let packet = order_packet();
    let frame = FrameDecoder::new(&packet).last().unwrap().unwrap();
    assert!(matches!(
        MessageHolder::<SimpleNewOrder100<FrameBuffer>>::from_network_message(&frame),
        Err(Error::UnexpectedTemplate {
            provided: 105,
            ..
        })
    ));
}

#[test]
fn test_stream_with_garbage_stops() {
    let mut packet = order_packet();
    let valid = packet.len();
    packet.extend_from_slice(&[0x10, 0x00, 0x00, 0x00, 1, 2, 3]);

    let mut decoder = FrameDecoder::new(&packet);
    let mut ok = 0;
    let mut failure = None;
    for frame in decoder.by_ref() {
        match frame {
            Ok(_) => ok += 1,
            Err(err) => failure = Some(err),
        }
    }
    assert_eq!(ok, 4);
    assert!(matches!(failure, Some(Error::IncorrectEncoding { encoding: 0 })));
    assert_eq!(decoder.remaining().len(), packet.len() - valid);
}

#[test]
fn test_sofh_limits() {
    assert_eq!(Sofh::new(MAX_MESSAGE_SIZE).unwrap().message_length, u16::MAX);
    assert!(matches!(
        Sofh::new(MAX_MESSAGE_SIZE + 1),
        Err(Error::NotEnoughSpace { .. })
    ));

    let mut frame = [0u8; SOFH_SIZE + HEADER_SIZE];
    Sofh::new(HEADER_SIZE - 1).unwrap().write_to(&mut frame);
    assert!(matches!(
        NetworkMessage::new(&frame),
        Err(Error::NetPacketIsTooSmall { .. })
    ));
}

#[test]
fn test_encoder_frames_in_journal() {
    let path = std::env::temp_dir().join("b3_boe_framing_journal.dat");
    fs::remove_file(&path).ok();

    {
        let mut encoder = FrameEncoder::new(256);
        let mut journal = FrameJournal::open(&path, 4096).unwrap();
        for seq in 1..=3u32 {
            let mut buf = [0u8; 16];
            let mut msg = Sequence9::new(&mut buf[..]).unwrap();
            msg.set_next_seq_no(seq);
            encoder.reset();
            journal.append(encoder.encode(msg.as_bytes()).unwrap()).unwrap();
        }
        journal.flush().unwrap();
    }

    {
        let journal = FrameJournal::open(&path, 4096).unwrap();
        let seqs: Vec<u32> = journal
            .records()
            .map(|record| {
                let frame = NetworkMessage::new(record).unwrap();
                Sequence9::wrap(frame.payload()).unwrap().next_seq_no()
            })
            .collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    fs::remove_file(&path).ok();
}

#[test]
fn test_log_lines_of_packet() {
    let packet = order_packet();
    let lines: Vec<String> = FrameDecoder::new(&packet)
        .enumerate()
        .map(|(i, frame)| {
            let frame = frame.unwrap();
            // Separuh dengan SOFH, separuh SBE saja
            let bytes = if i % 2 == 0 {
                frame.as_bytes()
            } else {
                frame.payload()
            };
            format!("{PREFIX}{}\n", STANDARD.encode(bytes))
        })
        .collect();

    for (i, line) in lines.iter().enumerate() {
        let record = decode_log_line(line).unwrap();
        assert_eq!(record.prefix.len(), LOG_LINE_PREFIX_SIZE);
        assert_eq!(record.sofh_detected, i % 2 == 0);

        let rendered = record.render().unwrap();
        assert!(rendered.starts_with(PREFIX));
        let class = record.typified().unwrap().class_name();
        assert!(rendered[PREFIX.len()..].starts_with(class));
    }
}

#[test]
fn test_log_line_with_unknown_template() {
    let mut buf = [0u8; 512];
    let mut trade = ExecutionReportTrade203::new(&mut buf[..]).unwrap();
    trade.set_last_qty(5);
    let mut bytes = trade.as_bytes().to_vec();
    bytes[2..4].copy_from_slice(&999u16.to_le_bytes());

    let record = decode_log_line(&format!("{PREFIX}{}", STANDARD.encode(&bytes))).unwrap();
    assert_eq!(record.message().unwrap().template_id(), 999);
    assert!(matches!(
        record.render(),
        Err(Error::UnknownTemplate { template_id: 999 })
    ));
}
