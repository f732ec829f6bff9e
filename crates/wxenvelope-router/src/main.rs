//! Cloud-function runner.
//!
//! Reads one `CloudRequest` (JSON) from stdin, routes the pushed XML carried
//! in `extraData`, and writes the `CloudResponse` (JSON) to stdout. The
//! config path is the first argument, else `WXENVELOPE_CONFIG`.

use std::io::{self, Read, Write};

use tracing_subscriber::{fmt, EnvFilter};

use wxenvelope_core::cloud::{CloudRequest, CloudResponse};
use wxenvelope_core::error::ErrorCode;
use wxenvelope_router::{config, router::Router};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = config::resolve_path(std::env::args().nth(1));
    let cfg = config::load_from_file(&path).expect("config load failed");
    let router = Router::new(&cfg).expect("router init failed");
    tracing::info!(%path, platform = %router.platform(), "wxenvelope-router ready");

    let mut input = String::new();
    let res = match io::stdin().read_to_string(&mut input) {
        Ok(_) => match serde_json::from_str::<CloudRequest>(&input) {
            Ok(req) => router.handle_cloud(&req),
            Err(e) => CloudResponse::fail(ErrorCode::Decode.as_i32(), format!("invalid request: {e}")),
        },
        Err(e) => CloudResponse::fail(ErrorCode::Internal.as_i32(), format!("read stdin failed: {e}")),
    };

    let out = serde_json::to_string(&res).expect("response encode failed");
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{out}").expect("write stdout failed");
}
