use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Failure envelope. Text mode goes to stderr; `--json` keeps the error on
/// stdout so callers parse one stream.
pub fn print_error(json: bool, code: &str, err: &anyhow::Error) {
    if json {
        let out = JsonErr {
            ok: false,
            error: ErrorBody {
                code: code.to_string(),
                message: format!("{:#}", err),
            },
        };
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{}", s),
            Err(_) => eprintln!("error: {:#}", err),
        }
    } else {
        eprintln!("error: {:#}", err);
    }
}
