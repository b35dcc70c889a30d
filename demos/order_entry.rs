//! Order entry walkthrough
//!
//! Menyusun satu packet berisi Negotiate, Establish dan dua order, lalu
//! membaca packet itu kembali seperti sisi gateway.
//!
//! ```text
//! cargo run --release --example order_entry
//! ```

use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::info;

use b3_boe::core::{DeltaInMillis, Price, UtcTimestampNanos};
use b3_boe::protocol::log::{decode_log_line, LOG_LINE_PREFIX_SIZE};
use b3_boe::protocol::{
    process_typified, AnyMessage, CancelOnDisconnectType, Establish4, FrameBuffer, FrameDecoder,
    InboundBusinessHeader, MessageBatch, MessageBatchCombiner, MessageHolder, Negotiate1, Side,
    SimpleNewOrder100, SimpleOrdType, SimpleTimeInForce, DEFAULT_MAX_PACKET_SIZE,
};

const SESSION_ID: u32 = 1001;
const ENTERING_FIRM: u32 = 120;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let now = UtcTimestampNanos::now();

    let mut negotiate = MessageHolder::<Negotiate1<FrameBuffer>>::new()?;
    negotiate
        .set_session_id(SESSION_ID)
        .set_session_ver_id(1)
        .set_timestamp(now)
        .set_entering_firm(ENTERING_FIRM);
    negotiate.set_credentials(r#"{"auth_type":"basic","username":"1001","access_key":"demo"}"#)?;
    negotiate.set_client_ip("10.0.0.1")?;
    negotiate.set_client_app_name("order_entry")?;
    negotiate.set_client_app_version(env!("CARGO_PKG_VERSION"))?;

    let mut establish = MessageHolder::<Establish4<FrameBuffer>>::new()?;
    establish
        .set_session_id(SESSION_ID)
        .set_session_ver_id(1)
        .set_timestamp(now)
        .set_keep_alive_interval(DeltaInMillis::from_duration(Duration::from_secs(10)))
        .set_next_seq_no(1)
        .set_cancel_on_disconnect_type(CancelOnDisconnectType::CancelOnDisconnectOrTerminate)
        .set_cod_timeout_window(DeltaInMillis(500));

    let mut orders = MessageBatch::<SimpleNewOrder100<FrameBuffer>>::with_size(2)?;
    for (i, order) in orders.iter_mut().enumerate() {
        let seq = i as u32 + 1;
        order
            .set_business_header(InboundBusinessHeader {
                session_id: SESSION_ID,
                msg_seq_num: seq,
                sending_time: None,
                market_segment_id: 1,
            })
            .set_cl_ord_id(seq as u64)
            .set_security_id(100_000_217)
            .set_side(if i == 0 { Side::Buy } else { Side::Sell })
            .set_ord_type(SimpleOrdType::Limit)
            .set_time_in_force(SimpleTimeInForce::Day)
            .set_order_qty(100)
            .set_price(Some(Price::from_mantissa(325_500 + i as i64 * 100)));
        order.set_entering_trader("TRD01")?;
        order.set_memo(format!("demo order {seq}"))?;
    }

    let mut combiner = MessageBatchCombiner::new();
    combiner.add(&mut negotiate)?;
    combiner.add(&mut establish)?;
    combiner.add_batch(&mut orders)?;
    info!(
        messages = combiner.len(),
        bytes = combiner.calculate_batch_size(),
        fits = combiner.fits(DEFAULT_MAX_PACKET_SIZE),
        "packet ready"
    );
    let packet = combiner.to_bytes();

    // Sisi penerima
    for frame in FrameDecoder::new(&packet) {
        let frame = frame?;
        process_typified(frame.message()?, |msg| {
            if let AnyMessage::SimpleNewOrder100(order) = &msg {
                info!(
                    cl_ord_id = order.cl_ord_id(),
                    price = %order.price().map(|p| p.to_decimal()).unwrap_or_default(),
                    "order received"
                );
            }
            println!("{msg:?}");
        })?;

        // Format satu baris log sesi, seperti yang dibaca boe_log_decoder
        let line = format!(
            "{:<width$}{}",
            now.to_datetime().format("%Y%m%d-%H:%M:%S%.9f IN").to_string(),
            STANDARD.encode(frame.as_bytes()),
            width = LOG_LINE_PREFIX_SIZE
        );
        let record = decode_log_line(&line)?;
        println!("{}\n", record.render()?);
    }

    Ok(())
}
