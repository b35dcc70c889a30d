//! B3 BOE codec - latency check
//!
//! Mengukur encode/decode message order entry yang paling sering dipakai:
//! - Encode: tulis field langsung ke buffer pre-allocated
//! - Decode: wrap + validasi + baca field
//! - Framing: SOFH + batch dalam satu packet

use std::hint::black_box;
use std::time::Instant;

use b3_boe::core::{Price, Result};
use b3_boe::protocol::{
    ExecutionReportNew200, FrameBuffer, FrameDecoder, FrameEncoder, InboundBusinessHeader,
    MessageBatch, OrderCancelRequest105, Side, SimpleNewOrder100, SimpleOrdType,
    SimpleTimeInForce, DEFAULT_MAX_PACKET_SIZE, SCHEMA_VERSION, SEMANTIC_VERSION,
};

const ITERATIONS: usize = 1_000_000;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    println!("B3 BOE SBE codec - schema v{SCHEMA_VERSION} ({SEMANTIC_VERSION})");
    println!("==========================================\n");

    benchmark_encode()?;
    benchmark_decode()?;
    benchmark_framing()?;

    println!("\nAll benchmarks complete!");
    println!("\nTo decode session logs: cargo run --release --bin boe_log_decoder -- <file.summary>");
    Ok(())
}

fn report(name: &str, iterations: usize, nanos: u128) {
    let ns = nanos as f64 / iterations as f64;
    println!("  {name:<24} {ns:>8.2} ns/op ({:.3} μs/op)", ns / 1000.0);
}

fn benchmark_encode() -> Result<()> {
    println!("Encode (in-place)");
    println!("-----------------");

    let mut buf = [0u8; 256];
    let mut order = SimpleNewOrder100::new(&mut buf[..])?;

    let start = Instant::now();
    for i in 0..ITERATIONS {
        order
            .set_business_header(InboundBusinessHeader {
                session_id: 1,
                msg_seq_num: i as u32,
                sending_time: None,
                market_segment_id: 1,
            })
            .set_cl_ord_id(black_box(i as u64))
            .set_security_id(black_box(5_000))
            .set_side(Side::Buy)
            .set_ord_type(SimpleOrdType::Limit)
            .set_time_in_force(SimpleTimeInForce::Day)
            .set_order_qty(100)
            .set_price(Some(Price::from_mantissa(black_box(105_000))));
        black_box(order.calculate_binary_size());
    }
    report("SimpleNewOrder100", ITERATIONS, start.elapsed().as_nanos());

    let mut buf = [0u8; 256];
    let mut cancel = OrderCancelRequest105::new(&mut buf[..])?;
    let start = Instant::now();
    for i in 0..ITERATIONS {
        cancel
            .set_cl_ord_id(black_box(i as u64))
            .set_order_id(Some(black_box(i as u64 + 1)))
            .set_side(Side::Sell);
        black_box(cancel.calculate_binary_size());
    }
    report("OrderCancelRequest105", ITERATIONS, start.elapsed().as_nanos());

    Ok(())
}

fn benchmark_decode() -> Result<()> {
    println!("\nDecode (wrap + read)");
    println!("--------------------");

    let mut buf = [0u8; 512];
    let size = {
        let mut exec = ExecutionReportNew200::new(&mut buf[..])?;
        exec
            .set_cl_ord_id(42)
            .set_order_id(7)
            .set_order_qty(100)
            .set_price(Some(Price::from_units(10)?));
        exec.calculate_binary_size()
    };
    let encoded = &buf[..size];

    let start = Instant::now();
    let mut sum = 0u64;
    for _ in 0..ITERATIONS {
        let exec = ExecutionReportNew200::wrap(black_box(encoded))?;
        sum = sum.wrapping_add(exec.order_id() + exec.order_qty());
    }
    black_box(sum);
    report("ExecutionReportNew200", ITERATIONS, start.elapsed().as_nanos());

    Ok(())
}

fn benchmark_framing() -> Result<()> {
    println!("\nFraming (SOFH batch, {DEFAULT_MAX_PACKET_SIZE} bytes packet)");
    println!("--------------------------------------");

    const BATCH: usize = 10;
    let mut batch = MessageBatch::<SimpleNewOrder100<FrameBuffer>>::with_size(BATCH)?;
    for (i, order) in batch.iter_mut().enumerate() {
        order.set_cl_ord_id(i as u64).set_order_qty(100);
    }
    println!(
        "  Batch size: {} bytes, fits: {}",
        batch.calculate_batch_size(),
        batch.fits(DEFAULT_MAX_PACKET_SIZE)
    );

    let mut encoder = FrameEncoder::new(DEFAULT_MAX_PACKET_SIZE);
    let iterations = ITERATIONS / 10;

    let start = Instant::now();
    for _ in 0..iterations {
        encoder.reset();
        batch.encode_into(&mut encoder)?;
    }
    let encode_ns = start.elapsed().as_nanos();

    let start = Instant::now();
    let mut frames = 0usize;
    for _ in 0..iterations {
        for frame in FrameDecoder::new(black_box(encoder.as_bytes())) {
            frame?;
            frames += 1;
        }
    }
    let decode_ns = start.elapsed().as_nanos();
    black_box(frames);

    report("batch encode (per msg)", iterations * BATCH, encode_ns);
    report("frame decode (per msg)", iterations * BATCH, decode_ns);
    println!(
        "  Throughput: {:.2} M msgs/sec",
        (iterations * BATCH) as f64 / (encode_ns as f64 / 1e9) / 1_000_000.0
    );

    Ok(())
}
