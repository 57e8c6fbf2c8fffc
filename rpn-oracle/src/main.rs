use std::env;
use std::process;

use anyhow::bail;
use log::debug;

use rpn_driver as driver;

pub fn main() -> anyhow::Result<()> {
    // Present a bug report prompt on unexpected panics, unless logging was requested, in which
    // case the raw panic is more useful
    if env::var_os("RPN_ORACLE_LOG").is_none() {
        human_panic::setup_panic!();
    }

    // Initialize logger
    let mut builder = env_logger::Builder::from_env("RPN_ORACLE_LOG");
    builder.format_indent(Some(2));
    if let Ok(precision) = env::var("RPN_ORACLE_LOG_WITH_TIME") {
        match precision.as_str() {
            "s" => builder.format_timestamp_secs(),
            "ms" => builder.format_timestamp_millis(),
            "us" => builder.format_timestamp_micros(),
            "ns" => builder.format_timestamp_nanos(),
            other => bail!(
                "invalid RPN_ORACLE_LOG_WITH_TIME precision, expected one of [s, ms, us, ns], got '{}'",
                other
            ),
        };
    } else {
        builder.format_timestamp(None);
    }
    builder.init();

    match driver::run_oracle(env::args_os()) {
        Ok(status_code) => {
            debug!("exiting with status {}", status_code);
            process::exit(status_code);
        }
        Err(err) => {
            if let Some(err) = err.downcast_ref::<clap::Error>() {
                err.exit()
            } else {
                eprintln!("{:#}", err);
                process::exit(1);
            }
        }
    }
}
