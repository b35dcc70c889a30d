//! Criterion benchmark untuk codec BOE
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use b3_boe::core::{Price, SbeMessage};
use b3_boe::protocol::{
    AnyMessage, ExecutionReportTrade203, FrameBuffer, FrameDecoder, FrameEncoder, MessageBatch,
    MessageHolder, NewOrderCross106, Side, SimpleNewOrder100, DEFAULT_MAX_PACKET_SIZE,
};

fn encoded_trade() -> Vec<u8> {
    let mut buf = [0u8; 512];
    let mut trade = ExecutionReportTrade203::new(&mut buf[..]).unwrap();
    trade
        .set_cl_ord_id(Some(1))
        .set_order_id(2)
        .set_last_qty(100)
        .set_last_px(Price::from_units(32).unwrap())
        .set_side(Side::Buy);
    trade.as_bytes().to_vec()
}

fn bench_messages(c: &mut Criterion) {
    let mut group = c.benchmark_group("message");
    group.throughput(Throughput::Elements(1));

    // Encode order ke buffer yang sudah ada
    group.bench_function("simple_new_order_encode", |b| {
        let mut buf = [0u8; 256];
        let mut order = SimpleNewOrder100::new(&mut buf[..]).unwrap();
        let mut i = 0u64;
        b.iter(|| {
            order
                .set_cl_ord_id(black_box(i))
                .set_security_id(black_box(42))
                .set_order_qty(black_box(100))
                .set_price(Some(Price::from_mantissa(black_box(105_000))));
            i = i.wrapping_add(1);
            black_box(order.calculate_binary_size());
        });
    });

    // Wrap + validasi + baca
    group.bench_function("execution_trade_decode", |b| {
        let bytes = encoded_trade();
        b.iter(|| {
            let trade = ExecutionReportTrade203::wrap(black_box(bytes.as_slice())).unwrap();
            black_box(trade.last_qty() + trade.order_id());
        });
    });

    // Dispatch by template id
    group.bench_function("typified_decode", |b| {
        let bytes = encoded_trade();
        b.iter(|| {
            let msg = SbeMessage::wrap(black_box(bytes.as_slice())).unwrap();
            black_box(AnyMessage::decode(msg).unwrap().template_id());
        });
    });

    // Resize group, tail ikut bergeser
    group.bench_function("cross_setup_sides", |b| {
        let mut holder = MessageHolder::<NewOrderCross106<FrameBuffer>>::new().unwrap();
        holder.set_memo("cross").unwrap();
        let mut count = 0u8;
        b.iter(|| {
            count = count % 4 + 1;
            black_box(holder.setup_sides(count).unwrap().len());
        });
    });

    group.finish();
}

fn bench_framing(c: &mut Criterion) {
    let mut group = c.benchmark_group("framing");

    for batch_size in [1usize, 10, 20].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));

        group.bench_function(format!("batch_encode_{}", batch_size), |b| {
            let mut batch = MessageBatch::<SimpleNewOrder100<FrameBuffer>>::with_size(*batch_size)
                .unwrap();
            let mut encoder = FrameEncoder::new(DEFAULT_MAX_PACKET_SIZE * 2);
            b.iter(|| {
                encoder.reset();
                batch.encode_into(&mut encoder).unwrap();
                black_box(encoder.len());
            });
        });

        group.bench_function(format!("frame_decode_{}", batch_size), |b| {
            let mut batch = MessageBatch::<SimpleNewOrder100<FrameBuffer>>::with_size(*batch_size)
                .unwrap();
            let mut encoder = FrameEncoder::new(DEFAULT_MAX_PACKET_SIZE * 2);
            batch.encode_into(&mut encoder).unwrap();
            let packet = encoder.as_bytes().to_vec();
            b.iter(|| {
                for frame in FrameDecoder::new(black_box(&packet)) {
                    black_box(frame.unwrap().len());
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_messages, bench_framing);
criterion_main!(benches);
