//! Decodes a SIP message read from a file (or stdin) and prints it back in
//! canonical form.
//!
//! ```text
//! RUST_LOG=sipwire=trace cargo run -p demos --example decode -- message.txt
//! ```

use std::error::Error;
use std::io::{self, Read, Write};
use std::{env, fs};

use sipwire::{AuthFieldOrder, DecodeOptions, Encode};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sipwire=debug")))
        .with_timer(ChronoLocal::new(String::from("%H:%M:%S%.3f")))
        .with_writer(io::stderr)
        .init();

    let mut options = DecodeOptions::new();
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--canonical-auth" => options = options.auth_field_order(AuthFieldOrder::Canonical),
            "--no-src" => options = options.keep_src(false),
            _ => path = Some(arg),
        }
    }

    let buf = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };

    let msg = sipwire::decode_with(&buf, &options);
    match (msg.request(), msg.status()) {
        (Some(request), _) => tracing::info!(
            method = request.method.unwrap_or("-"),
            host = request.host.unwrap_or("-"),
            "Decoded request"
        ),
        (_, Some(status)) => tracing::info!(
            code = status.code.unwrap_or("-"),
            reason = status.reason.unwrap_or("-"),
            "Decoded response"
        ),
        _ => (),
    }
    tracing::info!(
        via = msg.via.len(),
        call_id = msg.call_id.unwrap_or("-"),
        sdp = msg.sdp.is_some(),
        "Headers"
    );

    io::stdout().write_all(&msg.encode())?;

    Ok(())
}
